//! Neutralizes user-supplied text before it is embedded in an outbound
//! email body.

/// HTML-entity-escape a free-text value.
///
/// Escapes the same character set the original form backend escaped:
/// `&`, `<`, `>`, `"`, `'` and `/`.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            _ => out.push(c),
        }
    }
    out
}

/// Canonical form of an email address: trimmed, lowercased.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}
