// Shared prompt fragments and the template filler used by every prompt builder.
// Each feature that talks to the model keeps its own prompts.rs alongside it.

/// The markdown subset the response formatter understands. Any prompt whose
/// output is rendered to HTML must embed this.
pub const FORMATTING_CONTRACT: &str = "\
Use ONLY the following symbols for formatting:
- **bold text** for important points
- *italic text* for emphasis
- ## Section Header for section titles
- - List item for bullet points";

/// Fills `{name}` placeholders in a single left-to-right pass.
///
/// Substituted values are never scanned again, so user text that happens to
/// contain `{name}` is inserted verbatim. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
