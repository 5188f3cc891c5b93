//! The arithmetic/template micro-language used by option generation rules.
//!
//! An authored expression like `"{x}+{y}"` is resolved in two steps: every
//! `{name}` placeholder is substituted with the sampled variable's value
//! (unbound names substitute as `0`), and if the resulting string is purely
//! numeric-arithmetic it is evaluated by a sandboxed parser. Non-arithmetic
//! results (symbolic labels such as `x+y`) are returned verbatim.
//!
//! Evaluation never fails from the caller's point of view: a malformed
//! expression is logged and produces the sentinel value `"0"`, because a
//! wrong-looking option is preferable to aborting exam generation.

mod parser;
mod value;

pub use value::{Binding, Value};

use crate::question::ExprSpec;
use crate::template;
use tracing::warn;

/// The result of evaluating one option expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluated {
    pub value: String,
    pub unit: String,
}

impl Evaluated {
    /// The option text shown to the student: the value, suffixed with the
    /// unit when one is present.
    pub fn into_option_text(self) -> String {
        if self.unit.is_empty() {
            self.value
        } else {
            format!("{} {}", self.value, self.unit)
        }
    }
}

/// Evaluates one expression/unit pair against a sampled binding.
pub fn evaluate(spec: &ExprSpec, vars: &Binding) -> Evaluated {
    let substituted = template::substitute_with(&spec.expression, |name| {
        vars.get(name)
            .map(|v| v.to_string())
            .unwrap_or_else(|| "0".to_string())
    });

    let value = if parser::is_arithmetic(&substituted) {
        match parser::eval_arithmetic(&substituted) {
            Ok(n) => value::format_number(n),
            Err(e) => {
                warn!(
                    expression = %spec.expression,
                    substituted = %substituted,
                    error = %e,
                    "expression evaluation failed, substituting sentinel"
                );
                "0".to_string()
            }
        }
    } else {
        substituted
    };

    Evaluated {
        value,
        unit: spec.unit.clone(),
    }
}
