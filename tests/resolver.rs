//! Tests for option rule resolution and condition matching.
mod common;
use common::*;
use saiten::prelude::*;
use saiten::resolver::{resolve_conditional, resolve_dynamic, resolve_text_conditional};

#[test]
fn test_dynamic_resolution_order_and_flags() {
    let vars = binding(&[("x", Value::Number(1)), ("y", Value::Number(2))]);
    let rules = RuleSet {
        correct: ExprSpec::new("{x}+{y}", "units"),
        wrongs: vec![ExprSpec::new("{x}-{y}", "units")],
    };
    let options = resolve_dynamic(&rules, &vars, &mut rng(1));
    assert_eq!(options.len(), 2);
    assert_eq!(options[0].text, "3 units");
    assert!(options[0].is_correct);
    assert_eq!(options[1].text, "-1 units");
    assert!(!options[1].is_correct);
}

#[test]
fn test_duplicate_text_keeps_correct_option() {
    let vars = binding(&[("x", Value::Number(5))]);
    let rules = RuleSet {
        correct: ExprSpec::new("{x}", ""),
        wrongs: vec![ExprSpec::new("{x}", ""), ExprSpec::new("{x}+1", "")],
    };
    let options = resolve_dynamic(&rules, &vars, &mut rng(1));
    assert_eq!(options.len(), 2);
    assert!(options[0].is_correct);
    assert_eq!(options[0].text, "5");
    assert_eq!(options[1].text, "6");
}

#[test]
fn test_option_cap_keeps_correct_and_four_total() {
    let vars = binding(&[("x", Value::Number(10))]);
    let rules = RuleSet {
        correct: ExprSpec::new("{x}", ""),
        wrongs: vec![
            ExprSpec::new("{x}+1", ""),
            ExprSpec::new("{x}+2", ""),
            ExprSpec::new("{x}+3", ""),
            ExprSpec::new("{x}+4", ""),
            ExprSpec::new("{x}+5", ""),
        ],
    };
    for seed in 0..20 {
        let options = resolve_dynamic(&rules, &vars, &mut rng(seed));
        assert_eq!(options.len(), MAX_OPTIONS);
        assert_eq!(options.iter().filter(|o| o.is_correct).count(), 1);
        assert!(options.iter().any(|o| o.text == "10" && o.is_correct));
        // All survivors are unique distractor texts.
        let mut texts: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
        texts.sort();
        texts.dedup();
        assert_eq!(texts.len(), MAX_OPTIONS);
    }
}

#[test]
fn test_conditional_first_matching_branch_wins() {
    let vars = binding(&[
        ("steps", Value::Number(30)),
        ("direction", Value::Text("E".to_string())),
    ]);
    let (options, matched) = resolve_conditional("q", &direction_rules(), &vars, &mut rng(1));
    assert_eq!(matched.as_deref(), Some("direction === E"));
    assert!(options.iter().any(|o| o.text == "30" && o.is_correct));
    assert!(options.iter().any(|o| o.text == "-30" && !o.is_correct));

    // Same rules, opposite sampled direction: only the W branch applies.
    let vars = binding(&[
        ("steps", Value::Number(30)),
        ("direction", Value::Text("W".to_string())),
    ]);
    let (options, matched) = resolve_conditional("q", &direction_rules(), &vars, &mut rng(1));
    assert_eq!(matched.as_deref(), Some("direction === W"));
    assert!(options.iter().any(|o| o.text == "-30" && o.is_correct));
}

#[test]
fn test_condition_match_is_case_insensitive() {
    let vars = binding(&[
        ("steps", Value::Number(5)),
        ("direction", Value::Text("e".to_string())),
    ]);
    let (_, matched) = resolve_conditional("q", &direction_rules(), &vars, &mut rng(1));
    assert_eq!(matched.as_deref(), Some("direction === E"));
}

#[test]
fn test_condition_numeric_loose_equality() {
    let condition = Condition::parse("n === 3").unwrap();
    assert!(condition.matches(&binding(&[("n", Value::Number(3))])));
    assert!(!condition.matches(&binding(&[("n", Value::Number(4))])));
}

#[test]
fn test_condition_quote_stripping() {
    let condition = Condition::parse(r#"direction === "E""#).unwrap();
    assert!(condition.matches(&binding(&[("direction", Value::Text("E".to_string()))])));
    let condition = Condition::parse("direction === 'E'").unwrap();
    assert!(condition.matches(&binding(&[("direction", Value::Text("E".to_string()))])));
}

#[test]
fn test_condition_missing_variable_never_matches() {
    let condition = Condition::parse("direction === E").unwrap();
    assert!(!condition.matches(&binding(&[])));
}

#[test]
fn test_no_matching_condition_yields_empty() {
    let vars = binding(&[
        ("steps", Value::Number(5)),
        ("direction", Value::Text("N".to_string())),
    ]);
    let (options, matched) = resolve_conditional("q", &direction_rules(), &vars, &mut rng(1));
    assert!(options.is_empty());
    assert!(matched.is_none());
}

#[test]
fn test_text_conditional_compound_match() {
    let vars = binding(&[
        ("hemisphere", Value::Text("Northern".to_string())),
        ("direction", Value::Text("East".to_string())),
    ]);
    let (options, matched) = resolve_text_conditional("q", &season_rules(), &vars);
    assert_eq!(
        matched.as_deref(),
        Some("hemisphere === Northern && direction === East")
    );
    let texts: Vec<&str> = options.iter().map(|o| o.text.as_str()).collect();
    assert_eq!(texts, vec!["Summer", "Winter", "Autumn", "Spring"]);
    assert!(options[0].is_correct);
    assert!(options[1..].iter().all(|o| !o.is_correct));
}

#[test]
fn test_text_conditional_partial_match_fails() {
    // Only one clause of the compound condition holds.
    let vars = binding(&[
        ("hemisphere", Value::Text("Southern".to_string())),
        ("direction", Value::Text("East".to_string())),
    ]);
    let (options, matched) = resolve_text_conditional("q", &season_rules(), &vars);
    assert!(options.is_empty());
    assert!(matched.is_none());
}
