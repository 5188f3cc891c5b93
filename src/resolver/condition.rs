use crate::error::QuestionParseError;
use crate::expr::{Binding, Value};
use std::fmt;

/// A parsed rule condition key: one or more `variable === "literal"` clauses
/// joined with `&&`, all of which must hold against the sampled binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    raw: String,
    clauses: Vec<Clause>,
}

/// One equality clause of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Clause {
    variable: String,
    literal: String,
}

impl Condition {
    /// Parses an authored condition key, e.g.
    /// `hemisphere === "Northern" && direction === "East"`.
    ///
    /// Quotes around the literal (single or double) are optional and
    /// stripped. Stray tokens after the variable name are tolerated; the
    /// first whitespace-separated token is the variable.
    pub fn parse(raw: &str) -> Result<Self, QuestionParseError> {
        let mut clauses = Vec::new();
        for part in raw.split("&&") {
            let Some((lhs, rhs)) = part.split_once("===") else {
                return Err(QuestionParseError::MalformedCondition {
                    condition: raw.to_string(),
                    message: "expected `variable === \"value\"`".to_string(),
                });
            };
            let variable = lhs.split_whitespace().next().unwrap_or("").to_string();
            if variable.is_empty() {
                return Err(QuestionParseError::MalformedCondition {
                    condition: raw.to_string(),
                    message: "missing variable name before `===`".to_string(),
                });
            }
            let literal = rhs
                .trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string();
            clauses.push(Clause { variable, literal });
        }
        Ok(Self {
            raw: raw.to_string(),
            clauses,
        })
    }

    /// The condition key exactly as authored.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// True when every clause holds against the sampled binding.
    pub fn matches(&self, vars: &Binding) -> bool {
        self.clauses.iter().all(|clause| clause.matches(vars))
    }
}

impl Clause {
    /// String values compare case-insensitively; numeric values compare
    /// loosely against the literal (number-vs-string coercion). A variable
    /// absent from the binding never matches.
    fn matches(&self, vars: &Binding) -> bool {
        let Some(value) = vars.get(&self.variable) else {
            return false;
        };
        match value {
            Value::Text(s) => s.to_lowercase() == self.literal.to_lowercase(),
            Value::Number(n) => match self.literal.parse::<f64>() {
                Ok(expected) => *n as f64 == expected,
                Err(_) => n.to_string() == self.literal,
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}
