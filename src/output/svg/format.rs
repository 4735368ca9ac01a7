//! Text formatting shared by SVG and HTML output.

/// Escape text for safe inclusion in SVG or HTML markup.
#[must_use]
pub fn html_escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a kg quantity with two decimals.
#[must_use]
pub fn format_kg(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
