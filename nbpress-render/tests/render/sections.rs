//! Section grouping under accepted markdown headings.

use crate::common::{code, markdown, notebook, render};
use nbpress_render::html::{render_notebook, HtmlOptions};
use scraper::{Html, Selector};

fn section_titles(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let titles = Selector::parse("section.nb-section > h2.nb-section-title").unwrap();
    document
        .select(&titles)
        .map(|h| h.text().collect())
        .collect()
}

#[test]
fn cells_nest_under_the_latest_heading() {
    let html = render(vec![
        markdown("# Data"),
        code("load()", vec![]),
        markdown("## Model\nWe fit a ridge regression."),
        code("fit()", vec![]),
    ]);

    assert_eq!(section_titles(&html), vec!["Data", "Model"]);

    let document = Html::parse_document(&html);
    let model_code = Selector::parse("section.nb-section:nth-of-type(2) pre.nb-source").unwrap();
    let sources: Vec<String> = document
        .select(&model_code)
        .map(|pre| pre.text().collect())
        .collect();
    assert_eq!(sources, vec!["fit()".to_string()]);
}

#[test]
fn rejected_heading_does_not_open_a_section() {
    let html = render(vec![
        markdown("# Results"),
        markdown("## Question 2\nAnswer the following."),
        code("plot()", vec![]),
    ]);

    assert_eq!(section_titles(&html), vec!["Results"]);
    assert!(!html.contains("Question 2"));
    assert!(html.contains("plot()"));
}

#[test]
fn no_empty_section_wrappers() {
    let html = render(vec![markdown("# First"), markdown("# Second")]);

    let document = Html::parse_document(&html);
    let sections = Selector::parse("section").unwrap();
    for section in document.select(&sections) {
        assert!(
            section.text().any(|t| !t.trim().is_empty()),
            "empty section: {}",
            section.html()
        );
    }
    assert!(!html.contains("nb-preamble"));
}

#[test]
fn heading_label_is_escaped() {
    let html = render(vec![markdown("# Cost < Benefit & more")]);
    assert!(html.contains("<h2 class=\"nb-section-title\">Cost &lt; Benefit &amp; more</h2>"));
}

#[test]
fn grouping_can_be_disabled() {
    let parsed = notebook(vec![markdown("# Data"), code("load()", vec![])]);
    let html = render_notebook(&parsed, &HtmlOptions::new("flat").with_sections(false));

    assert!(!html.contains("<section"));
    assert!(html.contains("<div class=\"nb-cell nb-markdown\"># Data</div>"));
}
