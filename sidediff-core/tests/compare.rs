//! End-to-end comparisons through `TextDiffVisualizer::compare`.
//!
//! Covers the documented examples, the row-count and numbering properties,
//! and markup balance.

use pretty_assertions::assert_eq;
use sidediff_core::markup::CLOSE_TAG;
use sidediff_core::{
    DisplayRow, LineTag, RowKind, Side, TextDiffVisualizer, VisualizerConfig,
};

const RED: &str = "<span style='background-color: rgba(255, 0, 0, 0.6);'>";
const GREEN: &str = "<span style='background-color: rgba(0, 255, 0, 0.6);'>";

fn visualizer() -> TextDiffVisualizer {
    TextDiffVisualizer::new(VisualizerConfig::default()).unwrap()
}

fn labels(row: &DisplayRow) -> (Option<String>, Option<String>) {
    (
        row.left_index.map(|l| l.to_string()),
        row.right_index.map(|l| l.to_string()),
    )
}

fn label(s: &str) -> Option<String> {
    Some(s.to_owned())
}

#[test]
fn identical_text_yields_only_equal_rows() {
    let rows = visualizer().compare("A\nB", "A\nB").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(labels(&rows[0]), (label("1="), label("1=")));
    assert_eq!(labels(&rows[1]), (label("2="), label("2=")));
    assert_eq!(rows[0].left_text, "A");
    assert_eq!(rows[1].right_text, "B");
    assert!(rows.iter().all(|r| r.kind() == RowKind::Equal));
    assert!(rows.iter().all(|r| !r.left_text.contains("<span")));
}

#[test]
fn identical_multiline_text_keeps_one_row_per_line() {
    let text = "fn main() {\n    println!(\"hi\");\n}\n\n// trailing";
    let rows = visualizer().compare(text, text).unwrap();

    assert_eq!(rows.len(), 5);
    for row in &rows {
        assert_eq!(row.kind(), RowKind::Equal);
        assert_eq!(row.left_text, row.right_text);
    }
}

#[test]
fn dissimilar_replacement_splits_into_delete_and_insert_rows() {
    let rows = visualizer().compare("A\nB", "A\nC").unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].kind(), RowKind::Equal);

    assert_eq!(labels(&rows[1]), (label("2-"), None));
    assert_eq!(rows[1].left_text, format!("{RED}B{CLOSE_TAG}"));
    assert_eq!(rows[1].right_text, "");

    assert_eq!(labels(&rows[2]), (None, label("2+")));
    assert_eq!(rows[2].left_text, "");
    assert_eq!(rows[2].right_text, format!("{GREEN}C{CLOSE_TAG}"));
}

#[test]
fn appended_line_is_a_pure_insert() {
    let rows = visualizer().compare("A", "A\nB").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(labels(&rows[0]), (label("1="), label("1=")));
    assert_eq!(labels(&rows[1]), (None, label("2+")));
    assert_eq!(rows[1].left_text, "");
    assert_eq!(rows[1].right_text, format!("{GREEN}B{CLOSE_TAG}"));
    assert_eq!(rows[1].kind(), RowKind::Inserted);
}

#[test]
fn removed_line_is_a_pure_delete() {
    let rows = visualizer().compare("A\nB", "A").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(labels(&rows[1]), (label("2-"), None));
    assert_eq!(rows[1].left_text, format!("{RED}B{CLOSE_TAG}"));
    assert_eq!(rows[1].kind(), RowKind::Deleted);
}

#[test]
fn empty_inputs_give_one_empty_equal_row() {
    let rows = visualizer().compare("", "").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(labels(&rows[0]), (label("1="), label("1=")));
    assert_eq!(rows[0].left_text, "");
    assert_eq!(rows[0].right_text, "");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let rows = visualizer().compare("\n\n  A\nB  \n", "A\nB").unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.kind() == RowKind::Equal));
}

#[test]
fn appended_character_highlights_only_the_insert_side() {
    let rows = visualizer().compare("abc", "abcd").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind(), RowKind::Changed);
    assert_eq!(labels(&rows[0]), (label("1-"), label("1+")));
    assert_eq!(rows[0].left_text, "abc");
    assert_eq!(rows[0].right_text, format!("abc{GREEN}d{CLOSE_TAG}"));
}

#[test]
fn removed_character_highlights_only_the_delete_side() {
    let rows = visualizer().compare("abcd", "abc").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].kind(), RowKind::Changed);
    assert_eq!(rows[0].left_text, format!("abc{RED}d{CLOSE_TAG}"));
    assert_eq!(rows[0].right_text, "abc");
}

#[test]
fn replaced_character_highlights_both_sides() {
    let rows = visualizer().compare("abcdX", "abcdY").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].left_text, format!("abcd{RED}X{CLOSE_TAG}"));
    assert_eq!(rows[0].right_text, format!("abcd{GREEN}Y{CLOSE_TAG}"));
}

#[test]
fn highlight_positions_count_characters_not_bytes() {
    let rows = visualizer().compare("café au lait", "cafe au lait").unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].left_text, format!("caf{RED}é{CLOSE_TAG} au lait"));
    assert_eq!(rows[0].right_text, format!("caf{GREEN}e{CLOSE_TAG} au lait"));
}

#[test]
fn inserted_word_is_highlighted_within_its_line() {
    let visualizer = visualizer();
    let rows = visualizer
        .compare("intro\nhello world\noutro", "intro\nhello there world\noutro")
        .unwrap();

    assert_eq!(rows.len(), 3);
    let changed = &rows[1];
    assert_eq!(changed.kind(), RowKind::Changed);
    assert_eq!(labels(changed), (label("2-"), label("2+")));
    assert_eq!(changed.left_text, "hello world");
    assert_eq!(changed.right_text.matches(GREEN).count(), 1);
    assert_eq!(
        visualizer.markup().strip(&changed.right_text, Side::Right),
        "hello there world"
    );
    assert_eq!(rows[2].kind(), RowKind::Equal);
}

#[test]
fn larger_block_is_emitted_after_the_shorter_one() {
    let rows = visualizer().compare("x\ny", "zzz").unwrap();

    let kinds: Vec<RowKind> = rows.iter().map(DisplayRow::kind).collect();
    assert_eq!(kinds, [RowKind::Inserted, RowKind::Deleted, RowKind::Deleted]);
    assert_eq!(labels(&rows[0]), (None, label("1+")));
    assert_eq!(labels(&rows[1]), (label("1-"), None));
    assert_eq!(labels(&rows[2]), (label("2-"), None));
}

#[test]
fn fully_different_texts_never_pair() {
    let rows = visualizer().compare("one\ntwo\nthree", "alpha\nbeta\ngamma\ndelta").unwrap();

    assert!(rows.len() >= 4);
    assert!(rows
        .iter()
        .all(|r| matches!(r.kind(), RowKind::Deleted | RowKind::Inserted)));
    assert_eq!(rows.iter().filter(|r| r.kind() == RowKind::Deleted).count(), 3);
    assert_eq!(rows.iter().filter(|r| r.kind() == RowKind::Inserted).count(), 4);
}

#[test]
fn counters_advance_only_on_populated_cells() {
    let left = "keep\nold one\nold two\nshared\ngone";
    let right = "keep\nsomething else\nshared\nextra\nmore";
    let rows = visualizer().compare(left, right).unwrap();

    let left_numbers: Vec<usize> = rows.iter().filter_map(|r| r.left_index).map(|l| l.number).collect();
    let right_numbers: Vec<usize> = rows.iter().filter_map(|r| r.right_index).map(|l| l.number).collect();

    assert_eq!(left_numbers, (1..=5).collect::<Vec<_>>());
    assert_eq!(right_numbers, (1..=5).collect::<Vec<_>>());
    assert!(rows.len() >= 5);
}

#[test]
fn counters_restart_for_every_comparison() {
    let visualizer = visualizer();
    visualizer.compare("a\nb\nc", "a\nx\nc").unwrap();
    let rows = visualizer.compare("q", "q").unwrap();

    assert_eq!(labels(&rows[0]), (label("1="), label("1=")));
}

#[test]
fn label_tags_match_their_side() {
    let rows = visualizer().compare("a\nb\nc", "a\nc\nd").unwrap();

    for row in &rows {
        if let Some(l) = row.left_index {
            assert!(matches!(l.tag, LineTag::Equal | LineTag::Delete));
        }
        if let Some(r) = row.right_index {
            assert!(matches!(r.tag, LineTag::Equal | LineTag::Insert));
        }
    }
}

#[test]
fn spans_are_balanced_and_never_nested() {
    let left = "the quick brown fox\njumps over\nthe lazy dog\nbye";
    let right = "the quick green fox\njumped over\nthe lazy cat\nhello\nbye";
    let rows = visualizer().compare(left, right).unwrap();

    for text in rows.iter().flat_map(|r| [&r.left_text, &r.right_text]) {
        let mut depth = 0i32;
        let mut rest = text.as_str();
        while let Some(pos) = rest.find('<') {
            rest = &rest[pos..];
            if rest.starts_with("<span") {
                depth += 1;
                assert_eq!(depth, 1, "nested span in {text:?}");
            } else if rest.starts_with(CLOSE_TAG) {
                depth -= 1;
                assert_eq!(depth, 0, "unbalanced close in {text:?}");
            }
            rest = &rest[1..];
        }
        assert_eq!(depth, 0, "unclosed span in {text:?}");
    }
}

#[test]
fn row_count_covers_the_longer_input() {
    let cases = [
        ("a\nb\nc", "x"),
        ("x", "a\nb\nc"),
        ("a\nb", "a\nb\nc\nd"),
        ("", "a\nb"),
    ];
    let visualizer = visualizer();
    for (left, right) in cases {
        let rows = visualizer.compare(left, right).unwrap();
        let longest = left.trim().split('\n').count().max(right.trim().split('\n').count());
        assert!(rows.len() >= longest, "{left:?} vs {right:?}: {} rows", rows.len());
    }
}

#[test]
fn custom_split_string_is_honoured() {
    let config = VisualizerConfig {
        line_split_character: ";".to_owned(),
        ..VisualizerConfig::default()
    };
    let rows = TextDiffVisualizer::new(config).unwrap().compare("a;b;c", "a;b;c").unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[2].left_text, "c");
}

#[test]
fn custom_colors_appear_in_markup() {
    let config = VisualizerConfig {
        left_highlight_color: "#fdd".to_owned(),
        right_highlight_color: "#dfd".to_owned(),
        ..VisualizerConfig::default()
    };
    let rows = TextDiffVisualizer::new(config).unwrap().compare("A", "B").unwrap();

    assert_eq!(rows[0].left_text, "<span style='background-color: #fdd;'>A</span>");
    assert_eq!(rows[1].right_text, "<span style='background-color: #dfd;'>B</span>");
}

#[test]
fn rows_serialize_with_string_labels() {
    let rows = visualizer().compare("A", "A\nB").unwrap();
    let json = serde_json::to_value(&rows).unwrap();

    assert_eq!(json[0]["left_index"], "1=");
    assert_eq!(json[1]["left_index"], serde_json::Value::Null);
    assert_eq!(json[1]["right_index"], "2+");
}
