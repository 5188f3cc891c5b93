use crate::resolver::Condition;

/// The canonical, validated definition of one bank question, ready for
/// instance generation. This is the target structure for any stored-record
/// conversion.
///
/// The variant set is closed: every consumer dispatches with an exhaustive
/// match, so adding a question type is a compile-time-visible change.
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionTemplate {
    Static(StaticQuestion),
    Dynamic(DynamicQuestion),
    DynamicConditional(DynamicConditionalQuestion),
    DynamicTextConditional(DynamicTextConditionalQuestion),
}

impl QuestionTemplate {
    pub fn id(&self) -> &str {
        match self {
            QuestionTemplate::Static(q) => &q.id,
            QuestionTemplate::Dynamic(q) => &q.id,
            QuestionTemplate::DynamicConditional(q) => &q.id,
            QuestionTemplate::DynamicTextConditional(q) => &q.id,
        }
    }

    /// How many independent instances to generate per exam assembly.
    pub fn times(&self) -> u32 {
        match self {
            QuestionTemplate::Static(q) => q.times,
            QuestionTemplate::Dynamic(q) => q.times,
            QuestionTemplate::DynamicConditional(q) => q.times,
            QuestionTemplate::DynamicTextConditional(q) => q.times,
        }
    }
}

/// A question with literal text and a stored option list; generation only
/// shuffles the options.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<StaticOption>,
    pub times: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaticOption {
    pub text: String,
    pub is_correct: bool,
}

/// A templated question whose options come from a flat expression rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicQuestion {
    pub id: String,
    pub template: String,
    pub variables: VariableSpec,
    pub rules: RuleSet,
    pub times: u32,
}

/// A templated question whose rule set is selected by the first matching
/// condition key, then evaluated like a flat dynamic rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicConditionalQuestion {
    pub id: String,
    pub template: String,
    pub variables: VariableSpec,
    pub rules: Vec<(Condition, RuleSet)>,
    pub times: u32,
}

/// A templated question whose matching condition maps directly to four
/// literal option strings, with no expression evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicTextConditionalQuestion {
    pub id: String,
    pub template: String,
    pub variables: VariableSpec,
    pub rules: Vec<(Condition, TextOptions)>,
    pub times: u32,
}

/// Ordered variable declarations for one question.
///
/// Conversion appends enum entries after range entries, so when a binding is
/// built in declaration order an enum value wins any key collision. Condition
/// keys reference enum values by equality, which is why they take precedence.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableSpec {
    pub entries: Vec<(String, VariableDomain)>,
}

impl VariableSpec {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The legal value domain for one template variable.
#[derive(Debug, Clone, PartialEq)]
pub enum VariableDomain {
    /// Inclusive integer bounds, `min <= max`.
    Range { min: i64, max: i64 },
    /// A non-empty enumerated set of string values.
    Enum(Vec<String>),
}

/// One authored expression/unit pair, stored as `[expression, unit]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprSpec {
    pub expression: String,
    pub unit: String,
}

impl ExprSpec {
    pub fn new(expression: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            unit: unit.into(),
        }
    }
}

/// One evaluated rule object: the correct expression plus its distractors.
///
/// `wrongs` holds `wrong1..wrongN` in authored order; resolution always
/// evaluates `correct` first so a text collision can never drop it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub correct: ExprSpec,
    pub wrongs: Vec<ExprSpec>,
}

/// The four literal option strings of a text-conditional rule branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    pub correct: String,
    pub wrong1: String,
    pub wrong2: String,
    pub wrong3: String,
}
