//! HTML serialization (Notebook → HTML export)
//!
//! Pipeline: cells → fragments (grouped into sections) → page shell.
//! Output depends only on the notebook and the options, so re-running a
//! conversion produces byte-identical pages.

use super::escape::{escape_html, strip_ansi};
use crate::filter::BoilerplateFilter;
use crate::notebook::{Cell, MimeBundle, Notebook, Output};
use tracing::debug;

/// Options for HTML rendering
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Page title, shown in `<title>` and the page header
    pub title: String,
    /// Group content under accepted markdown headings
    pub sections: bool,
    /// Optional CSS appended after the embedded stylesheet
    pub custom_css: Option<String>,
    /// Markdown acceptance policy
    pub filter: BoilerplateFilter,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new("Notebook")
    }
}

impl HtmlOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sections: true,
            custom_css: None,
            filter: BoilerplateFilter::new(),
        }
    }

    pub fn with_sections(mut self, sections: bool) -> Self {
        self.sections = sections;
        self
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }

    pub fn with_filter(mut self, filter: BoilerplateFilter) -> Self {
        self.filter = filter;
        self
    }
}

/// Render a notebook into a complete HTML document.
pub fn render_notebook(notebook: &Notebook, options: &HtmlOptions) -> String {
    let body = render_body(notebook, options);
    wrap_in_document(&body, options)
}

/// Render only the cell content, without the page shell.
pub fn render_body(notebook: &Notebook, options: &HtmlOptions) -> String {
    let mut builder = BodyBuilder::new(options.sections);

    for (index, cell) in notebook.cells.iter().enumerate() {
        match cell {
            Cell::Code { source, outputs } => {
                if source.is_empty() {
                    debug!(cell = index, "skipping code cell with empty source");
                    continue;
                }
                builder.push(render_code_cell(source.as_str(), outputs));
            }
            Cell::Markdown { source } => {
                let text = source.as_str();
                if let Some(rejection) = options.filter.rejection(text) {
                    debug!(
                        cell = index,
                        marker = rejection.marker,
                        rationale = rejection.rationale,
                        "dropping boilerplate markdown"
                    );
                    continue;
                }
                match split_heading(text).filter(|_| options.sections) {
                    Some((label, rest)) => {
                        builder.open_section(label);
                        if !rest.is_empty() {
                            builder.push(render_markdown(rest));
                        }
                    }
                    None => {
                        if !text.trim().is_empty() {
                            builder.push(render_markdown(text.trim()));
                        }
                    }
                }
            }
            Cell::Raw { .. } | Cell::Unknown => {
                debug!(cell = index, kind = cell.kind(), "ignoring cell");
            }
        }
    }

    builder.finish()
}

/// Accumulates fragments, grouping them under the most recent heading.
struct BodyBuilder {
    sections: bool,
    output: Vec<String>,
    title: Option<String>,
    fragments: Vec<String>,
}

impl BodyBuilder {
    fn new(sections: bool) -> Self {
        Self {
            sections,
            output: Vec::new(),
            title: None,
            fragments: Vec::new(),
        }
    }

    fn push(&mut self, fragment: String) {
        self.fragments.push(fragment);
    }

    fn open_section(&mut self, label: &str) {
        self.flush();
        self.title = Some(label.to_string());
    }

    fn flush(&mut self) {
        let fragments = std::mem::take(&mut self.fragments);
        let title = self.title.take();

        if !self.sections {
            self.output.extend(fragments);
            return;
        }

        match title {
            // Untitled leading group with nothing in it: suppressed.
            None if fragments.is_empty() => {}
            None => {
                self.output
                    .push("<section class=\"nb-section nb-preamble\">".to_string());
                self.output.extend(fragments);
                self.output.push("</section>".to_string());
            }
            Some(title) => {
                self.output.push("<section class=\"nb-section\">".to_string());
                self.output.push(format!(
                    "<h2 class=\"nb-section-title\">{}</h2>",
                    escape_html(&title)
                ));
                self.output.extend(fragments);
                self.output.push("</section>".to_string());
            }
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.output.join("\n")
    }
}

/// Split an ATX heading off the first non-blank line.
///
/// Returns the heading label and the trimmed remainder of the cell.
fn split_heading(text: &str) -> Option<(&str, &str)> {
    let trimmed = text.trim_start();
    let (first_line, rest) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
    let first_line = first_line.trim_end();

    let hashes = first_line.chars().take_while(|&c| c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let after = &first_line[hashes..];
    if !after.is_empty() && !after.starts_with([' ', '\t']) {
        return None;
    }

    let label = after.trim().trim_end_matches('#').trim_end();
    if label.is_empty() {
        return None;
    }
    Some((label, rest.trim()))
}

fn render_markdown(text: &str) -> String {
    format!(
        "<div class=\"nb-cell nb-markdown\">{}</div>",
        escape_html(text)
    )
}

fn render_code_cell(source: &str, outputs: &[Output]) -> String {
    let mut parts = vec![
        "<div class=\"nb-cell nb-code\">".to_string(),
        format!(
            "<pre class=\"nb-source\"><code>{}</code></pre>",
            escape_html(source)
        ),
    ];

    let rendered: Vec<String> = outputs.iter().filter_map(render_output).collect();
    if !rendered.is_empty() {
        parts.push("<div class=\"nb-outputs\">".to_string());
        parts.extend(rendered);
        parts.push("</div>".to_string());
    }

    parts.push("</div>".to_string());
    parts.join("\n")
}

fn render_output(output: &Output) -> Option<String> {
    match output {
        Output::Stream { name, text } => {
            let class = match name.as_str() {
                "stdout" => " nb-stdout",
                "stderr" => " nb-stderr",
                _ => "",
            };
            Some(format!(
                "<pre class=\"nb-output nb-stream{class}\">{}</pre>",
                escape_html(text.as_str())
            ))
        }
        Output::ExecuteResult { data } | Output::DisplayData { data } => render_mime_bundle(data),
        Output::Error {
            ename,
            evalue,
            traceback,
        } => {
            let text = if traceback.is_empty() {
                format!("{ename}: {evalue}")
            } else {
                traceback.join("\n")
            };
            Some(format!(
                "<pre class=\"nb-output nb-error\">{}</pre>",
                escape_html(&strip_ansi(&text))
            ))
        }
        Output::Unknown => None,
    }
}

const RASTER_IMAGE_TYPES: &[&str] = &["image/png", "image/jpeg", "image/gif"];

fn render_mime_bundle(data: &MimeBundle) -> Option<String> {
    // Blank html falls through to the plain form.
    if let Some(html) = data.get("text/html").filter(|h| !h.trim().is_empty()) {
        return Some(format!("<div class=\"nb-output nb-html\">{html}</div>"));
    }
    if let Some(plain) = data.get("text/plain") {
        return Some(format!(
            "<pre class=\"nb-output nb-result\">{}</pre>",
            escape_html(&plain)
        ));
    }
    for mime in RASTER_IMAGE_TYPES {
        if let Some(encoded) = data.get(mime) {
            let encoded: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
            if is_base64(&encoded) {
                return Some(format!(
                    "<div class=\"nb-output nb-image\"><img src=\"data:{mime};base64,{encoded}\" alt=\"\"></div>"
                ));
            }
        }
    }
    if let Some(svg) = data.get("image/svg+xml") {
        return Some(format!("<div class=\"nb-output nb-image\">{svg}</div>"));
    }
    None
}

fn is_base64(data: &str) -> bool {
    !data.is_empty()
        && data
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, options: &HtmlOptions) -> String {
    let css = super::get_default_css();
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = escape_html(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="color-scheme" content="light dark">
  <meta name="generator" content="nbpress">
  <title>{escaped_title}</title>
  <style>
{css}
{custom_css}
  </style>
</head>
<body>
<header class="nb-header"><h1>{escaped_title}</h1></header>
<main class="nb-notebook">
{body_html}
</main>
</body>
</html>
"#
    )
}
