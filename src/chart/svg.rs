//! Small helpers shared by the SVG and HTML writers.

/// Escapes text for use in element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Formats a coordinate. Whole numbers print without a fractional part.
pub fn num(value: f64) -> String {
    format!("{}", value)
}

/// `translate(x, y)` transform attribute value.
pub fn translate(x: f64, y: f64) -> String {
    format!("translate({}, {})", num(x), num(y))
}
