use thiserror::Error;

/// Errors that can occur while converting stored question records into the
/// canonical question model.
#[derive(Error, Debug, Clone)]
pub enum QuestionParseError {
    #[error("Failed to parse question JSON: {0}")]
    JsonParse(String),

    #[error("Question '{question_id}' has an unknown question type: '{type_name}'")]
    UnknownQuestionType {
        question_id: String,
        type_name: String,
    },

    #[error("Question '{question_id}' is missing required field '{field}'")]
    MissingField { question_id: String, field: String },

    #[error("Rule set for question '{question_id}' is missing the '{key}' key")]
    MissingRuleKey { question_id: String, key: String },

    #[error("Rule value for '{key}' is malformed: {message}")]
    MalformedRule { key: String, message: String },

    #[error("Variable '{name}' has an invalid range: min {min} > max {max}")]
    InvalidRange { name: String, min: i64, max: i64 },

    #[error("Variable '{name}' declares an empty enum value set")]
    EmptyEnum { name: String },

    #[error("Condition '{condition}' is malformed: {message}")]
    MalformedCondition { condition: String, message: String },

    #[error(
        "Static question '{question_id}' must have exactly one correct option, but {found} are marked correct"
    )]
    BadCorrectCount { question_id: String, found: usize },
}

/// Errors internal to the arithmetic expression parser.
///
/// These never cross the crate boundary: `expr::evaluate` absorbs them and
/// substitutes a sentinel value, so exam generation always completes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("Unexpected character '{found}' at offset {at}")]
    UnexpectedChar { found: char, at: usize },

    #[error("Expression ended unexpectedly")]
    UnexpectedEnd,

    #[error("Invalid numeric literal '{0}'")]
    InvalidNumber(String),

    #[error("Unexpected trailing input: '{0}'")]
    TrailingInput(String),
}
