//! Color-span markup embedded in highlighted text.
//!
//! Highlighted spans are wrapped in an inline style tag:
//! `<span style='background-color: {color};'>` … `</span>`. The left color marks
//! removed text, the right color marks added text.
//!
//! All positions handled here are *character* indices (Unicode scalar values),
//! matching the column layout of hint strings produced by the line differ.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closing tag appended after every highlighted span.
pub const CLOSE_TAG: &str = "</span>";

/// One side of the side-by-side comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The original text; removed content is highlighted here.
    Left,
    /// The new text; added content is highlighted here.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// An inclusive `(start, end)` character range inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRange {
    /// Index of the first highlighted character.
    pub start: usize,
    /// Index of the last highlighted character (inclusive).
    pub end: usize,
}

impl HighlightRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Extracts the highlight ranges described by a hint string.
    ///
    /// Every maximal run of one marker character (`+`, `-` or `^`) becomes one
    /// range. Runs of different markers that touch, such as `"--++"`, yield
    /// separate adjacent ranges. Any other character ends the current run.
    ///
    /// # Arguments
    ///
    /// * `hint`: marker string aligned under the characters of its subject line
    pub fn find_all(hint: &str) -> Vec<HighlightRange> {
        let mut ranges = Vec::new();
        let mut run: Option<(char, usize)> = None;
        let mut last = 0;

        for (idx, ch) in hint.chars().enumerate() {
            last = idx;
            let is_marker = matches!(ch, '+' | '-' | '^');
            match run {
                Some((marker, _)) if marker == ch => {}
                Some((_, start)) => {
                    ranges.push(HighlightRange::new(start, idx - 1));
                    run = is_marker.then_some((ch, idx));
                }
                None => run = is_marker.then_some((ch, idx)),
            }
        }
        if let Some((_, start)) = run {
            ranges.push(HighlightRange::new(start, last));
        }
        ranges
    }
}

/// A piece of marked-up text, either highlighted or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Whether the text sat inside a highlight span.
    pub highlighted: bool,
    /// The text with all tags removed.
    pub text: &'a str,
}

/// Builds and parses the span markup for both sides of a comparison.
///
/// The open tags are rendered once at construction so per-line work is plain
/// string pushing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    left_open: String,
    right_open: String,
}

impl Markup {
    /// Creates the markup for the given left (removed) and right (added) colors.
    pub fn new(left_color: &str, right_color: &str) -> Self {
        Self {
            left_open: open_tag(left_color),
            right_open: open_tag(right_color),
        }
    }

    /// Returns the open tag used on `side`.
    pub fn open(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_open,
            Side::Right => &self.right_open,
        }
    }

    /// Wraps the whole of `text` in one highlight span for `side`.
    pub fn wrap(&self, text: &str, side: Side) -> String {
        let open = self.open(side);
        let mut out = String::with_capacity(open.len() + text.len() + CLOSE_TAG.len());
        out.push_str(open);
        out.push_str(text);
        out.push_str(CLOSE_TAG);
        out
    }

    /// Inserts highlight spans into `line` at the given character ranges.
    ///
    /// Ranges must be ordered and non-overlapping, as produced by
    /// [`HighlightRange::find_all`]. Each range gets exactly one open tag before
    /// its first character and one close tag after its last, so spans are always
    /// balanced and never nested. A range running past the end of the line is
    /// closed at the end of the line; a range starting past the end is dropped.
    pub fn insert_tags(&self, line: &str, ranges: &[HighlightRange], side: Side) -> String {
        let open = self.open(side);
        let mut out =
            String::with_capacity(line.len() + ranges.len() * (open.len() + CLOSE_TAG.len()));
        let mut pending = ranges.iter().peekable();
        let mut inside = false;

        for (idx, ch) in line.chars().enumerate() {
            if !inside && pending.peek().is_some_and(|r| r.start == idx) {
                out.push_str(open);
                inside = true;
            }
            out.push(ch);
            if inside && pending.peek().is_some_and(|r| r.end == idx) {
                out.push_str(CLOSE_TAG);
                inside = false;
                pending.next();
            }
        }

        if inside {
            log::warn!("hint range runs past the end of a {}-character line", line.chars().count());
            out.push_str(CLOSE_TAG);
            pending.next();
        }
        let dropped = pending.count();
        if dropped > 0 {
            log::warn!("dropped {dropped} hint range(s) starting past the end of the line");
        }
        out
    }

    /// Splits marked-up text from `side` into highlighted and plain segments.
    ///
    /// Only the exact tags produced by this `Markup` are recognised; any other
    /// angle-bracket text is treated as content. Empty segments are skipped.
    pub fn segments<'a>(&self, text: &'a str, side: Side) -> Vec<Segment<'a>> {
        let open = self.open(side);
        let mut segments = Vec::new();
        let mut rest = text;

        while let Some(start) = rest.find(open) {
            let after_open = &rest[start + open.len()..];
            let Some(end) = after_open.find(CLOSE_TAG) else {
                break;
            };
            push_segment(&mut segments, false, &rest[..start]);
            push_segment(&mut segments, true, &after_open[..end]);
            rest = &after_open[end + CLOSE_TAG.len()..];
        }
        push_segment(&mut segments, false, rest);
        segments
    }

    /// Returns `text` with every highlight span of `side` removed.
    pub fn strip(&self, text: &str, side: Side) -> String {
        self.segments(text, side).iter().map(|s| s.text).collect()
    }
}

fn open_tag(color: &str) -> String {
    format!("<span style='background-color: {color};'>")
}

fn push_segment<'a>(segments: &mut Vec<Segment<'a>>, highlighted: bool, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment { highlighted, text });
    }
}
