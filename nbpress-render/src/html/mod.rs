//! HTML rendering (notebook → static page)
//!
//! # Element Mapping Table
//!
//! | Notebook element           | HTML                                                   | Notes                                   |
//! |----------------------------|--------------------------------------------------------|-----------------------------------------|
//! | Document                   | `<main class="nb-notebook">` inside a full page shell  | Title in `<title>` and `<h1>`           |
//! | Accepted markdown heading  | `<section class="nb-section">` + `<h2>`                | Only when section grouping is enabled   |
//! | Leading content            | `<section class="nb-section nb-preamble">`             | Omitted when empty                      |
//! | Markdown cell              | `<div class="nb-cell nb-markdown">`                    | Escaped, rendered as plain prose        |
//! | Code cell                  | `<div class="nb-cell nb-code">` + `<pre><code>`        | Skipped entirely when source is empty   |
//! | Outputs                    | `<div class="nb-outputs">`                             | Only when at least one output renders   |
//! | `stream`                   | `<pre class="nb-output nb-stream nb-stdout">`          | `nb-stderr` for the error stream        |
//! | `text/html` result         | `<div class="nb-output nb-html">`                      | Embedded verbatim                       |
//! | `text/plain` result        | `<pre class="nb-output nb-result">`                    | Escaped                                 |
//! | image result               | `<div class="nb-output nb-image">`                     | Only when no html/plain form exists     |
//! | `error`                    | `<pre class="nb-output nb-error">`                     | ANSI codes stripped, escaped            |
//! | Raw / unknown cells        | nothing                                                |                                         |
//!
//! # Escaping
//!
//! Everything that came from a person or a kernel as text is escaped with
//! [`escape_html`]. The one exception is `text/html` result data, which kernels
//! produce as real markup (pandas tables, widgets' static fallbacks) and which is
//! trusted as-is. Markdown is *not* parsed: notes are published as plain prose.
//!
//! # Output Format
//!
//! A single self-contained HTML5 file: the stylesheet is embedded in a `<style>`
//! tag, there are no scripts, fonts or other external resources, and a
//! `prefers-color-scheme: dark` block switches palettes for the viewer.

mod escape;
mod serializer;

pub use escape::{escape_html, strip_ansi};
pub use serializer::{render_body, render_notebook, HtmlOptions};

/// The stylesheet embedded in every rendered page.
pub fn get_default_css() -> &'static str {
    include_str!("../../css/notebook.css")
}
