//! Option rule resolution: turns a question's rule specification plus a
//! sampled binding into an ordered option list (one correct + distractors).
//!
//! Resolution is fail-soft. An unmatched conditional rule map yields an empty
//! option list and a warning, never a guessed default answer; an authoring
//! gap should be visible to operators, not papered over.

mod condition;

pub use condition::Condition;

use crate::expr::{self, Binding};
use crate::question::{RuleSet, TextOptions};
use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The most options a resolved dynamic question may present.
pub const MAX_OPTIONS: usize = 4;

/// One answer option as presented to the student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedOption {
    pub text: String,
    pub is_correct: bool,
}

/// Resolves a flat dynamic rule set.
///
/// `correct` is evaluated first, then each distractor in declared order.
/// Options are deduplicated by text (keep-first, so the correct option can
/// never be dropped by a collision) and capped at [`MAX_OPTIONS`]: when more
/// unique options exist, the correct one is kept along with a uniform random
/// sample of distractors.
pub fn resolve_dynamic<R: Rng + ?Sized>(
    rules: &RuleSet,
    vars: &Binding,
    rng: &mut R,
) -> Vec<GeneratedOption> {
    let mut options = Vec::with_capacity(rules.wrongs.len() + 1);
    options.push(GeneratedOption {
        text: expr::evaluate(&rules.correct, vars).into_option_text(),
        is_correct: true,
    });
    for wrong in &rules.wrongs {
        options.push(GeneratedOption {
            text: expr::evaluate(wrong, vars).into_option_text(),
            is_correct: false,
        });
    }

    let mut options: Vec<GeneratedOption> = options
        .into_iter()
        .unique_by(|option| option.text.clone())
        .collect();

    if options.len() > MAX_OPTIONS {
        // The correct option survived dedup at index 0.
        let correct = options.remove(0);
        let mut kept: Vec<GeneratedOption> = options
            .choose_multiple(rng, MAX_OPTIONS - 1)
            .cloned()
            .collect();
        kept.insert(0, correct);
        options = kept;
    }
    options
}

/// Resolves a condition-keyed rule map: the first condition, in authored
/// order, whose clauses all match the binding selects the rule set, which is
/// then resolved like a flat dynamic rule set.
///
/// Returns the options together with the matched condition key for audit.
pub fn resolve_conditional<R: Rng + ?Sized>(
    question_id: &str,
    rules: &[(Condition, RuleSet)],
    vars: &Binding,
    rng: &mut R,
) -> (Vec<GeneratedOption>, Option<String>) {
    for (cond, rule_set) in rules {
        if cond.matches(vars) {
            return (
                resolve_dynamic(rule_set, vars, rng),
                Some(cond.raw().to_string()),
            );
        }
    }
    warn!(
        question_id,
        variables = ?vars,
        "no condition matched the sampled variables; instance will have no options"
    );
    (Vec::new(), None)
}

/// Resolves a text-conditional rule map: the matching condition's four
/// literal strings become the options, with no expression evaluation.
pub fn resolve_text_conditional(
    question_id: &str,
    rules: &[(Condition, TextOptions)],
    vars: &Binding,
) -> (Vec<GeneratedOption>, Option<String>) {
    for (cond, opts) in rules {
        if cond.matches(vars) {
            let options = vec![
                GeneratedOption {
                    text: opts.correct.clone(),
                    is_correct: true,
                },
                GeneratedOption {
                    text: opts.wrong1.clone(),
                    is_correct: false,
                },
                GeneratedOption {
                    text: opts.wrong2.clone(),
                    is_correct: false,
                },
                GeneratedOption {
                    text: opts.wrong3.clone(),
                    is_correct: false,
                },
            ];
            return (options, Some(cond.raw().to_string()));
        }
    }
    warn!(
        question_id,
        variables = ?vars,
        "no condition matched the sampled variables; instance will have no options"
    );
    (Vec::new(), None)
}
