//! Question text rendering: `{name}` placeholder substitution.

use crate::expr::Binding;

/// Renders a question template by replacing every `{name}` placeholder with
/// the bound variable's string form. Unresolved placeholders render as the
/// empty string; rendering never fails.
pub fn render(template: &str, vars: &Binding) -> String {
    substitute_with(template, |name| {
        vars.get(name).map(|v| v.to_string()).unwrap_or_default()
    })
}

/// Replaces every `{identifier}` token in `input` with `lookup(identifier)`.
///
/// An identifier is one or more ASCII alphanumeric or underscore characters.
/// A brace pair that does not enclose a valid identifier is left untouched.
pub(crate) fn substitute_with(input: &str, mut lookup: impl FnMut(&str) -> String) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end)
                if end > 0
                    && after[..end]
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                out.push_str(&lookup(&after[..end]));
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
