//! HTML escaping and ANSI stripping for rendered text

use once_cell::sync::Lazy;
use regex::Regex;

/// Escape the five HTML-significant characters `& < > " '`.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + text.len() / 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

// CSI sequences (colours, cursor movement) as emitted by IPython tracebacks.
static ANSI_SEQUENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").expect("valid ANSI regex"));

/// Remove terminal escape sequences from kernel output.
pub fn strip_ansi(text: &str) -> String {
    ANSI_SEQUENCE.replace_all(text, "").into_owned()
}
