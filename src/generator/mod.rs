//! Question instance generation and exam assembly.
//!
//! Generation is the orchestrating step: sample variables, render the
//! template, resolve the option rules, then shuffle the options so the
//! correct answer's position carries no signal. Assembly expands each
//! question by its repetition count and shuffles the full instance set.

use crate::question::QuestionTemplate;
use crate::resolver::{self, GeneratedOption};
use crate::{sampler, template};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One concrete, fully resolved realization of a question template, shown to
/// exactly one student for exactly one attempt.
///
/// Because option order depends on non-reproducible randomness, the host
/// session layer must retain the instance itself for the duration of the
/// attempt; grading runs against this frozen value, never a regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedInstance {
    /// Back-reference to the source template.
    pub question_id: String,
    /// Fully rendered question text.
    pub text: String,
    /// Shuffled option list; at most one option is marked correct.
    pub options: Vec<GeneratedOption>,
    /// The condition key that selected the option set, for conditional
    /// question types. `None` for other types or when nothing matched.
    pub matched_condition: Option<String>,
}

impl GeneratedInstance {
    /// True when resolution produced no options. This marks a rule
    /// configuration gap (no condition matched the sampled variables) that
    /// operators should surface, not a normal outcome.
    pub fn is_unanswerable(&self) -> bool {
        self.options.is_empty()
    }

    /// The stored text of the correct option, if the instance has one.
    pub fn correct_option_text(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.is_correct)
            .map(|o| o.text.as_str())
    }
}

/// Generates one instance from a question template.
///
/// Static questions copy their stored options; dynamic variants run the
/// sample → render → resolve pipeline. In both cases the final step is a
/// Fisher–Yates shuffle of the option list.
pub fn generate<R: Rng + ?Sized>(question: &QuestionTemplate, rng: &mut R) -> GeneratedInstance {
    let mut instance = match question {
        QuestionTemplate::Static(q) => GeneratedInstance {
            question_id: q.id.clone(),
            text: q.text.clone(),
            options: q
                .options
                .iter()
                .map(|o| GeneratedOption {
                    text: o.text.clone(),
                    is_correct: o.is_correct,
                })
                .collect(),
            matched_condition: None,
        },
        QuestionTemplate::Dynamic(q) => {
            let vars = sampler::sample(&q.variables, rng);
            GeneratedInstance {
                question_id: q.id.clone(),
                text: template::render(&q.template, &vars),
                options: resolver::resolve_dynamic(&q.rules, &vars, rng),
                matched_condition: None,
            }
        }
        QuestionTemplate::DynamicConditional(q) => {
            let vars = sampler::sample(&q.variables, rng);
            let (options, matched) = resolver::resolve_conditional(&q.id, &q.rules, &vars, rng);
            GeneratedInstance {
                question_id: q.id.clone(),
                text: template::render(&q.template, &vars),
                options,
                matched_condition: matched,
            }
        }
        QuestionTemplate::DynamicTextConditional(q) => {
            let vars = sampler::sample(&q.variables, rng);
            let (options, matched) = resolver::resolve_text_conditional(&q.id, &q.rules, &vars);
            GeneratedInstance {
                question_id: q.id.clone(),
                text: template::render(&q.template, &vars),
                options,
                matched_condition: matched,
            }
        }
    };
    instance.options.shuffle(rng);
    instance
}

/// Assembles the full instance set for an exam.
///
/// Every question is expanded by its repetition count with independent
/// resampling per instance, and the resulting set is itself shuffled so
/// repeated instances of one template are not presented adjacently.
pub fn assemble_exam<R: Rng + ?Sized>(
    questions: &[QuestionTemplate],
    rng: &mut R,
) -> Vec<GeneratedInstance> {
    let mut instances = Vec::new();
    for question in questions {
        for _ in 0..question.times() {
            instances.push(generate(question, rng));
        }
    }
    instances.shuffle(rng);
    debug!(count = instances.len(), "assembled exam instance set");
    instances
}
