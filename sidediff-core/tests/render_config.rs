//! Table rendering and configuration parsing.

use pretty_assertions::assert_eq;
use sidediff_core::render::{html_table, markdown_table, TABLE_CSS};
use sidediff_core::{
    DiffAlgorithm, DiffSummary, Error, Side, TextDiffVisualizer, VisualizerConfig,
};

fn compare(left: &str, right: &str) -> Vec<sidediff_core::DisplayRow> {
    TextDiffVisualizer::new(VisualizerConfig::default())
        .unwrap()
        .compare(left, right)
        .unwrap()
}

#[test]
fn markdown_table_has_header_and_one_line_per_row() {
    let rows = compare("A", "A\nB");
    let table = markdown_table(&rows, &VisualizerConfig::default());
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "| Left Index | Text 1 | Right Index | Text 2 |");
    assert_eq!(lines[1], "|---|---|---|---|");
    assert_eq!(lines[2], "| 1= | A | 1= | A |");
    assert_eq!(
        lines[3],
        "|  | &nbsp; | <span style='color: green;'>2+</span> | \
         <span style='background-color: rgba(0, 255, 0, 0.6);'>B</span> |"
    );
}

#[test]
fn markdown_escapes_pipes_and_html_in_text() {
    let rows = compare("a | b <c>", "a | b <c>");
    let table = markdown_table(&rows, &VisualizerConfig::default());

    assert!(table.contains("| a \\| b &lt;c&gt; |"));
}

#[test]
fn flagged_left_label_uses_removed_color() {
    let config = VisualizerConfig {
        removed_label_color: "crimson".to_owned(),
        ..VisualizerConfig::default()
    };
    let rows = compare("A\nB", "A");
    let table = markdown_table(&rows, &config);

    assert!(table.contains("<span style='color: crimson;'>2-</span>"));
}

#[test]
fn html_table_keeps_spans_and_escapes_content() {
    let rows = compare("x < y", "x < z");
    let html = html_table(&rows, &VisualizerConfig::default());

    assert!(html.starts_with(TABLE_CSS));
    assert!(html.contains("<th>Left Index</th><th>Text 1</th><th>Right Index</th><th>Text 2</th>"));
    assert!(html.contains("x &lt; <span style='background-color: rgba(255, 0, 0, 0.6);'>y</span>"));
    assert!(html.contains("x &lt; <span style='background-color: rgba(0, 255, 0, 0.6);'>z</span>"));
    assert_eq!(html.matches("<tr><td>").count(), rows.len());
}

#[test]
fn blank_cells_get_the_configured_placeholder() {
    let config = VisualizerConfig {
        empty_placeholder: "·".to_owned(),
        ..VisualizerConfig::default()
    };
    let rows = compare("A", "A\nB");
    let html = html_table(&rows, &config);

    assert!(html.contains("<tr><td></td><td>·</td>"));
}

#[test]
fn summary_counts_row_kinds() {
    let rows = compare("keep\nabcdX\ngone", "keep\nabcdY\nnew line here");
    let summary = DiffSummary::from_rows(&rows);

    assert_eq!(summary.equal, 1);
    assert_eq!(summary.changed, 1);
    assert_eq!(summary.deleted + summary.inserted, 2);
    assert!(!summary.is_identical());
    assert!(DiffSummary::from_rows(&compare("a", "a")).is_identical());
}

#[test]
fn config_defaults_fill_missing_keys() {
    let config = VisualizerConfig::from_toml_str("left_highlight_color = \"#f00\"").unwrap();

    assert_eq!(config.left_highlight_color, "#f00");
    assert_eq!(config.right_highlight_color, "rgba(0, 255, 0, 0.6)");
    assert_eq!(config.line_split_character, "\n");
    assert_eq!(config.empty_placeholder, "&nbsp;");
    assert_eq!(config.similarity_cutoff, 0.75);
    assert_eq!(config.algorithm, DiffAlgorithm::Myers);
}

#[test]
fn config_reads_algorithm_and_cutoff() {
    let config =
        VisualizerConfig::from_toml_str("algorithm = \"patience\"\nsimilarity_cutoff = 0.5").unwrap();

    assert_eq!(config.algorithm, DiffAlgorithm::Patience);
    assert_eq!(config.similarity_cutoff, 0.5);
}

#[test]
fn empty_split_fails_construction() {
    let config = VisualizerConfig {
        line_split_character: String::new(),
        ..VisualizerConfig::default()
    };
    assert!(matches!(TextDiffVisualizer::new(config), Err(Error::EmptySplit)));
}

#[test]
fn blank_color_fails_construction() {
    let config = VisualizerConfig {
        right_highlight_color: "  ".to_owned(),
        ..VisualizerConfig::default()
    };
    assert!(matches!(
        TextDiffVisualizer::new(config),
        Err(Error::EmptyColor { side: Side::Right })
    ));
}

#[test]
fn out_of_range_cutoff_is_rejected() {
    assert!(matches!(
        VisualizerConfig::from_toml_str("similarity_cutoff = 1.5"),
        Err(Error::InvalidCutoff(_))
    ));
}

#[test]
fn non_string_color_is_a_parse_error() {
    assert!(matches!(
        VisualizerConfig::from_toml_str("left_highlight_color = 12"),
        Err(Error::ConfigParse(_))
    ));
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(
        VisualizerConfig::from_toml_str("highlight = \"red\""),
        Err(Error::ConfigParse(_))
    ));
}
