//! Single-placeholder HTML templating.
//!
//! Templates use `{name}` for the greeting name. `{{` and `}}` render as
//! literal braces, so inline CSS and JS blocks can be written as `{{ ... }}`.
//! Any other `{...}` sequence is left untouched.

/// Substitute `{name}` and unescape doubled braces
pub fn render_template(template: &str, name: &str) -> String {
    let mut out = String::with_capacity(template.len() + name.len());
    let mut rest = template;

    while let Some(pos) = rest.find(|c| c == '{' || c == '}') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") {
            out.push('{');
            rest = &tail[2..];
        } else if tail.starts_with("}}") {
            out.push('}');
            rest = &tail[2..];
        } else if tail.starts_with("{name}") {
            out.push_str(name);
            rest = &tail["{name}".len()..];
        } else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
