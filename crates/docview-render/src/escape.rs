//! Minimal HTML escaping for template interpolations.

/// Escape the five HTML-significant characters.
///
/// The documentation body itself is service-produced markup and is
/// embedded as-is; this covers values interpolated into the surrounding
/// template, including attribute positions (hence the quote escapes).
/// Hosts whose language service returns plain text can run bodies through
/// this before handing them to the renderer.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
