//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so host code can
//! pull in the whole generation/grading surface with one `use`.

// Generation and grading entry points
pub use crate::generator::{GeneratedInstance, assemble_exam, generate};
pub use crate::grading::{AttemptScore, GradingResponse, ResponseStatus, grade, score_attempt};

// Question model and boundary conversion
pub use crate::question::{
    DynamicConditionalQuestion, DynamicQuestion, DynamicTextConditionalQuestion, ExprSpec,
    IntoQuestion, QuestionRecord, QuestionTemplate, RuleSet, StaticOption, StaticQuestion,
    StoredOption, TextOptions, VariableDomain, VariableSpec, parse_question_bank,
};

// Leaf components
pub use crate::expr::{Binding, Evaluated, Value, evaluate};
pub use crate::resolver::{Condition, GeneratedOption, MAX_OPTIONS};
pub use crate::sampler::sample;
pub use crate::template::render;

// Error types
pub use crate::error::{ExprError, QuestionParseError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
