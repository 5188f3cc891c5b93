//! Common test utilities for building question templates and bindings.
use rand::SeedableRng;
use rand::rngs::StdRng;
use saiten::prelude::*;

#[allow(dead_code)]
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Builds a binding from name/value pairs.
#[allow(dead_code)]
pub fn binding(entries: &[(&str, Value)]) -> Binding {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}

/// A static question with four stored options, one correct.
#[allow(dead_code)]
pub fn capital_question() -> QuestionTemplate {
    QuestionTemplate::Static(StaticQuestion {
        id: "static-capital".to_string(),
        text: "What is the capital of Japan?".to_string(),
        options: vec![
            StaticOption {
                text: "Tokyo".to_string(),
                is_correct: true,
            },
            StaticOption {
                text: "Kyoto".to_string(),
                is_correct: false,
            },
            StaticOption {
                text: "Osaka".to_string(),
                is_correct: false,
            },
            StaticOption {
                text: "Nagoya".to_string(),
                is_correct: false,
            },
        ],
        times: 1,
    })
}

/// A dynamic question with degenerate ranges, so every generated instance is
/// identical: text `What is 1 + 2?`, options `3 units` and `-1 units`.
#[allow(dead_code)]
pub fn sum_question() -> QuestionTemplate {
    QuestionTemplate::Dynamic(DynamicQuestion {
        id: "q-sum".to_string(),
        template: "What is {x} + {y}?".to_string(),
        variables: VariableSpec {
            entries: vec![
                ("x".to_string(), VariableDomain::Range { min: 1, max: 1 }),
                ("y".to_string(), VariableDomain::Range { min: 2, max: 2 }),
            ],
        },
        rules: RuleSet {
            correct: ExprSpec::new("{x}+{y}", "units"),
            wrongs: vec![ExprSpec::new("{x}-{y}", "units")],
        },
        times: 1,
    })
}

/// Direction-keyed conditional rules: `E` negates nothing, `W` negates.
#[allow(dead_code)]
pub fn direction_rules() -> Vec<(Condition, RuleSet)> {
    vec![
        (
            Condition::parse("direction === E").unwrap(),
            RuleSet {
                correct: ExprSpec::new("{steps}", ""),
                wrongs: vec![ExprSpec::new("0-{steps}", "")],
            },
        ),
        (
            Condition::parse("direction === W").unwrap(),
            RuleSet {
                correct: ExprSpec::new("0-{steps}", ""),
                wrongs: vec![ExprSpec::new("{steps}", "")],
            },
        ),
    ]
}

/// Compound text-conditional rules covering one hemisphere/direction pair.
#[allow(dead_code)]
pub fn season_rules() -> Vec<(Condition, TextOptions)> {
    vec![(
        Condition::parse("hemisphere === Northern && direction === East").unwrap(),
        TextOptions {
            correct: "Summer".to_string(),
            wrong1: "Winter".to_string(),
            wrong2: "Autumn".to_string(),
            wrong3: "Spring".to_string(),
        },
    )]
}
