//! Rendering properties over synthetic notebooks.

use crate::common::{code, display, markdown, notebook, raw, render, stream};
use nbpress_render::html::{render_notebook, HtmlOptions};
use scraper::{Html, Selector};
use serde_json::json;

#[test]
fn rendering_is_idempotent() {
    let cells = || {
        vec![
            markdown("# Setup\nLoad the data."),
            code("import pandas as pd", vec![]),
            code("df.head()", vec![display(json!({"text/html": "<table></table>"}))]),
        ]
    };

    let first = render(cells());
    let second = render(cells());
    assert_eq!(first, second);

    let parsed = notebook(cells());
    let options = HtmlOptions::new("same");
    assert_eq!(
        render_notebook(&parsed, &options),
        render_notebook(&parsed, &options)
    );
}

#[test]
fn cell_order_is_preserved() {
    let html = render(vec![
        code("marker_zero()", vec![stream("marker_one\n")]),
        markdown("marker_two is explained here"),
        code("marker_three()", vec![]),
        raw("raw cells never render"),
        markdown("marker_four closes the notebook"),
    ]);

    let positions: Vec<usize> = ["marker_zero", "marker_one", "marker_two", "marker_three", "marker_four"]
        .iter()
        .map(|marker| html.find(marker).unwrap_or_else(|| panic!("{marker} missing")))
        .collect();

    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    assert!(!html.contains("raw cells never render"));
}

#[test]
fn code_and_plain_text_are_escaped() {
    let tricky = r#"if a < b && c > "d": print('e')"#;
    let html = render(vec![code(
        tricky,
        vec![
            stream(tricky),
            display(json!({"text/plain": tricky})),
        ],
    )]);

    let escaped = "if a &lt; b &amp;&amp; c &gt; &quot;d&quot;: print(&#39;e&#39;)";
    assert_eq!(html.matches(escaped).count(), 3);
    assert!(!html.contains("a < b"));
    assert!(!html.contains("\"d\""));
    assert!(!html.contains("'e'"));
}

#[test]
fn html_results_pass_through() {
    let table = "<table class=\"dataframe\"><thead><tr><th>city</th></tr></thead>\
                 <tbody><tr><td>Lisbon</td></tr></tbody></table>";
    let html = render(vec![code(
        "df",
        vec![display(json!({"text/html": table, "text/plain": "city\nLisbon"}))],
    )]);

    assert!(html.contains(table));

    let document = Html::parse_document(&html);
    let cells = Selector::parse("div.nb-html table.dataframe td").unwrap();
    let values: Vec<String> = document
        .select(&cells)
        .map(|td| td.text().collect())
        .collect();
    assert_eq!(values, vec!["Lisbon".to_string()]);
}

#[test]
fn instructions_cells_are_dropped() {
    let html = render(vec![
        markdown("INSTRUCTIONS: run every cell before submitting."),
        markdown("Rider demand doubles when it's sunny & warm."),
    ]);

    assert!(!html.contains("run every cell"));
    assert!(html.contains("Rider demand doubles when it&#39;s sunny &amp; warm."));
}

#[test]
fn empty_code_cell_contributes_nothing() {
    let with_empty = render(vec![
        markdown("Before"),
        code("", vec![stream("hidden output\n")]),
        markdown("After"),
    ]);
    let without = render(vec![markdown("Before"), markdown("After")]);

    assert!(!with_empty.contains("hidden output"));
    assert!(!with_empty.contains("class=\"nb-cell nb-code\""));
    assert_eq!(with_empty, without);
}

#[test]
fn unknown_outputs_are_skipped() {
    let html = render(vec![code(
        "widget",
        vec![
            json!({"output_type": "clear_output", "wait": true}),
            stream("kept\n"),
        ],
    )]);

    let document = Html::parse_document(&html);
    let outputs = Selector::parse("div.nb-outputs > *").unwrap();
    assert_eq!(document.select(&outputs).count(), 1);
    assert!(html.contains("kept"));
}
