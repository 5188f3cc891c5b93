//! Variable sampling: draws one concrete value per declared variable.

use crate::expr::{Binding, Value};
use crate::question::{VariableDomain, VariableSpec};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Samples every declared variable into a flat binding.
///
/// Ranges draw a uniformly distributed integer in `[min, max]` inclusive;
/// enums draw one element uniformly by index. Entries are sampled in
/// declaration order, so a later (enum) entry overwrites an earlier range
/// entry on a key collision.
///
/// The random source is injected so callers and tests can fix the sequence.
pub fn sample<R: Rng + ?Sized>(spec: &VariableSpec, rng: &mut R) -> Binding {
    let mut binding = Binding::default();
    for (name, domain) in &spec.entries {
        let value = match domain {
            VariableDomain::Range { min, max } => Value::Number(rng.random_range(*min..=*max)),
            VariableDomain::Enum(values) => {
                // Non-empty is enforced at conversion time.
                Value::Text(values.choose(rng).cloned().unwrap_or_default())
            }
        };
        binding.insert(name.clone(), value);
    }
    binding
}
