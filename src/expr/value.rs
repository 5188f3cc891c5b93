use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete value bound to a template variable: an integer drawn from a
/// numeric range, or a string drawn from an enumerated set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Text(String),
}

/// One sampled binding: variable name to concrete value.
pub type Binding = AHashMap<String, Value>;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Formats an arithmetic result the way it should appear in option text:
/// integral values print without a fractional part, everything else (including
/// `inf` and `NaN` from degenerate authored expressions) uses the default
/// float formatting.
pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
