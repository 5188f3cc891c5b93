//! Grading of student responses against frozen generated instances.

use crate::generator::GeneratedInstance;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

/// Outcome classification for one graded response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Correct,
    Wrong,
    Skipped,
}

/// The grading verdict for one instance, shaped for persistence by the host
/// application alongside attempt metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResponse {
    pub question_id: String,
    /// The option text the student selected; `None` when skipped.
    pub selected: Option<String>,
    /// The canonical correct option text, recorded for audit.
    pub correct_answer: Option<String>,
    pub status: ResponseStatus,
    pub is_correct: bool,
    /// Free-form audit context: status, rendered text, matched condition.
    pub metadata: serde_json::Value,
}

/// Grades one response purely against the instance's frozen option set.
///
/// The instance is never re-sampled or re-resolved, so the student is graded
/// against exactly what they were shown. A selected text that is not present
/// in the option list grades as wrong, never as an error; selections are
/// normally constrained to presented options by the host UI, but the engine
/// does not assume it.
pub fn grade(instance: &GeneratedInstance, selected: Option<&str>) -> GradingResponse {
    let correct_answer = instance.correct_option_text().map(str::to_string);

    let (status, is_correct) = match selected {
        None => (ResponseStatus::Skipped, false),
        Some(text) => match instance.options.iter().find(|o| o.text == text) {
            Some(option) if option.is_correct => (ResponseStatus::Correct, true),
            Some(_) => (ResponseStatus::Wrong, false),
            None => {
                warn!(
                    question_id = %instance.question_id,
                    selected = text,
                    "selected text not found in instance options"
                );
                (ResponseStatus::Wrong, false)
            }
        },
    };

    GradingResponse {
        question_id: instance.question_id.clone(),
        selected: selected.map(str::to_string),
        correct_answer,
        status,
        is_correct,
        metadata: json!({
            "status": status,
            "question_text": instance.text,
            "matched_condition": instance.matched_condition,
        }),
    }
}

/// Aggregate results for one exam attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptScore {
    pub total: usize,
    pub correct: usize,
    /// Answered but incorrect.
    pub wrong: usize,
    /// Unanswered.
    pub skipped: usize,
    /// Rounded percentage of correct answers; 0 for an empty attempt.
    pub percent: u32,
}

/// Tallies the responses of one attempt.
pub fn score_attempt(responses: &[GradingResponse]) -> AttemptScore {
    let total = responses.len();
    let count = |status: ResponseStatus| responses.iter().filter(|r| r.status == status).count();
    let correct = count(ResponseStatus::Correct);
    let wrong = count(ResponseStatus::Wrong);
    let skipped = count(ResponseStatus::Skipped);
    let percent = if total == 0 {
        0
    } else {
        (100.0 * correct as f64 / total as f64).round() as u32
    };
    AttemptScore {
        total,
        correct,
        wrong,
        skipped,
        percent,
    }
}
