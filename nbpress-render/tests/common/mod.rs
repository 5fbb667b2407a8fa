//! Helpers for building synthetic notebooks.

use nbpress_render::html::{render_notebook, HtmlOptions};
use nbpress_render::notebook::{parse_notebook_from_str, Notebook};
use serde_json::{json, Value};

pub fn markdown(source: &str) -> Value {
    json!({"cell_type": "markdown", "metadata": {}, "source": source})
}

pub fn code(source: &str, outputs: Vec<Value>) -> Value {
    json!({
        "cell_type": "code",
        "metadata": {},
        "execution_count": null,
        "source": source,
        "outputs": outputs
    })
}

pub fn raw(source: &str) -> Value {
    json!({"cell_type": "raw", "metadata": {}, "source": source})
}

pub fn stream(text: &str) -> Value {
    json!({"output_type": "stream", "name": "stdout", "text": text})
}

pub fn display(data: Value) -> Value {
    json!({"output_type": "display_data", "metadata": {}, "data": data})
}

pub fn notebook_json(cells: Vec<Value>) -> String {
    json!({
        "cells": cells,
        "metadata": {"kernelspec": {"name": "python3", "display_name": "Python 3"}},
        "nbformat": 4,
        "nbformat_minor": 5
    })
    .to_string()
}

pub fn notebook(cells: Vec<Value>) -> Notebook {
    parse_notebook_from_str(&notebook_json(cells)).expect("synthetic notebook parses")
}

pub fn render(cells: Vec<Value>) -> String {
    render_notebook(&notebook(cells), &HtmlOptions::new("test"))
}
