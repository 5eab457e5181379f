//! Markdown and HTML renderings of a comparison table.
//!
//! Column names follow the classic four-column layout:
//! `Left Index | Text 1 | Right Index | Text 2`. Text cells keep their highlight
//! spans; everything else in the text is HTML-escaped so user content cannot
//! open tags of its own. Blank text cells are filled with the configured
//! placeholder.

use std::fmt::Write as _;

use crate::config::VisualizerConfig;
use crate::markup::{Markup, Side};
use crate::table::{DisplayRow, LineLabel};

/// Column headers of the comparison table.
pub const HEADERS: [&str; 4] = ["Left Index", "Text 1", "Right Index", "Text 2"];

/// Stylesheet giving the label columns 10% and the text columns 40% each.
pub const TABLE_CSS: &str = "<style>
table {
    width: 100%;
    border-collapse: collapse;
}
table th:first-of-type {
    width: 10%;
}
table th:nth-of-type(2) {
    width: 40%;
}
table th:nth-of-type(3) {
    width: 10%;
}
table th:nth-of-type(4) {
    width: 40%;
}
</style>";

/// Renders `rows` as a Markdown (pipe) table.
pub fn markdown_table(rows: &[DisplayRow], config: &VisualizerConfig) -> String {
    let markup = markup_for(config);
    let mut out = String::new();

    let _ = writeln!(out, "| {} |", HEADERS.join(" | "));
    let _ = writeln!(out, "|{}", "---|".repeat(HEADERS.len()));
    for row in rows {
        let cells = [
            label_cell(row.left_index, Side::Left, config),
            text_cell(&markup, &row.left_text, Side::Left, config),
            label_cell(row.right_index, Side::Right, config),
            text_cell(&markup, &row.right_text, Side::Right, config),
        ];
        let cells: Vec<String> = cells.iter().map(|c| markdown_escape(c)).collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

/// Renders `rows` as an HTML table preceded by [`TABLE_CSS`].
pub fn html_table(rows: &[DisplayRow], config: &VisualizerConfig) -> String {
    let markup = markup_for(config);
    let mut out = String::from(TABLE_CSS);
    out.push_str("\n<table>\n<thead>\n<tr>");
    for header in HEADERS {
        let _ = write!(out, "<th>{header}</th>");
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in rows {
        let _ = writeln!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            label_cell(row.left_index, Side::Left, config),
            text_cell(&markup, &row.left_text, Side::Left, config),
            label_cell(row.right_index, Side::Right, config),
            text_cell(&markup, &row.right_text, Side::Right, config),
        );
    }
    out.push_str("</tbody>\n</table>\n");
    out
}

fn markup_for(config: &VisualizerConfig) -> Markup {
    Markup::new(&config.left_highlight_color, &config.right_highlight_color)
}

fn label_cell(label: Option<LineLabel>, side: Side, config: &VisualizerConfig) -> String {
    match label {
        Some(label) if label.is_flagged() => {
            let color = match side {
                Side::Left => &config.removed_label_color,
                Side::Right => &config.added_label_color,
            };
            format!("<span style='color: {color};'>{label}</span>")
        }
        Some(label) => label.to_string(),
        None => String::new(),
    }
}

/// Escapes the text of a cell while keeping its highlight spans intact.
fn text_cell(markup: &Markup, text: &str, side: Side, config: &VisualizerConfig) -> String {
    if text.is_empty() {
        return config.empty_placeholder.clone();
    }
    markup
        .segments(text, side)
        .iter()
        .map(|segment| {
            let escaped = html_escape(segment.text);
            if segment.highlighted {
                markup.wrap(&escaped, side)
            } else {
                escaped
            }
        })
        .collect()
}

fn html_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn markdown_escape(cell: &str) -> String {
    cell.replace('|', "\\|").replace('\n', "<br>")
}
