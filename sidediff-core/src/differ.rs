//! Line differ producing an ndiff-style annotated stream.
//!
//! The differ compares two sequences of lines and emits one [`RawDiffLine`]
//! per line: unchanged lines as `Equal`, lines only on the left as `Delete`,
//! lines only on the right as `Insert`. When a deleted line and an inserted
//! line are similar enough to be the same line edited in place, each of them
//! may be followed by a `Hint` line whose marker characters sit under the
//! changed columns:
//!
//! ```text
//! - the quick brown fox
//! ?           ^^^^^
//! + the quick green fox
//! ?           ^^^^^
//! ```
//!
//! `-` marks deleted characters, `+` inserted characters and `^` replaced
//! characters. A hint always directly follows the line it describes.
//!
//! Line and character alignment both come from `similar`; the pairing of
//! similar lines inside a replaced block is done here.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use similar::{Algorithm, DiffOp, DiffTag, TextDiff};

/// Similarity ratio a deleted/inserted pair must reach to get hint lines.
pub const DEFAULT_CUTOFF: f32 = 0.75;

/// Classification of one line in the raw diff stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTag {
    /// Present in both inputs, unchanged.
    Equal,
    /// Present only in the left input.
    Delete,
    /// Present only in the right input.
    Insert,
    /// Intraline markers for the preceding `Delete` or `Insert` line.
    Hint,
}

impl RawTag {
    /// Two-character prefix used by the textual ndiff form.
    pub fn prefix(self) -> &'static str {
        match self {
            RawTag::Equal => "  ",
            RawTag::Delete => "- ",
            RawTag::Insert => "+ ",
            RawTag::Hint => "? ",
        }
    }
}

/// A tagged line emitted by a [`LineDiffer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDiffLine {
    /// Line classification.
    pub tag: RawTag,
    /// Line content, or the marker string for a `Hint`.
    pub content: String,
}

impl RawDiffLine {
    /// Creates a raw line with the given tag and content.
    pub fn new(tag: RawTag, content: impl Into<String>) -> Self {
        Self { tag, content: content.into() }
    }
}

impl fmt::Display for RawDiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.prefix(), self.content)
    }
}

/// Sequence alignment algorithm used for both line and character matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Myers' O(ND) algorithm.
    #[default]
    Myers,
    /// Patience diff; anchors on unique lines.
    Patience,
}

impl From<DiffAlgorithm> for Algorithm {
    fn from(value: DiffAlgorithm) -> Self {
        match value {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
        }
    }
}

/// Produces a raw annotated comparison of two line sequences.
///
/// Implementations must preserve the relative order of both inputs, never tag
/// identical content as `Delete`/`Insert`, and place every `Hint` line directly
/// after the `Delete` or `Insert` line it annotates, aligned to that line's
/// characters.
pub trait LineDiffer {
    /// Compares `left` against `right`.
    fn diff(&self, left: &[&str], right: &[&str]) -> Vec<RawDiffLine>;
}

/// The default [`LineDiffer`]: ndiff-style output built on `similar`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdiffDiffer {
    cutoff: f32,
    algorithm: DiffAlgorithm,
}

impl Default for NdiffDiffer {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF, DiffAlgorithm::default())
    }
}

impl NdiffDiffer {
    /// Creates a differ pairing lines whose similarity ratio reaches `cutoff`.
    pub fn new(cutoff: f32, algorithm: DiffAlgorithm) -> Self {
        Self { cutoff, algorithm }
    }

    /// Similarity cutoff for intraline pairing.
    pub fn cutoff(&self) -> f32 {
        self.cutoff
    }

    /// Character-level similarity of two lines in `0.0..=1.0`.
    ///
    /// Computed as `2 * matched / total` over the characters of both lines, so
    /// two empty lines are fully similar.
    pub fn ratio(&self, old_line: &str, new_line: &str) -> f32 {
        TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_chars(old_line, new_line)
            .ratio()
    }

    /// Handles a block of left lines replaced by a block of right lines.
    ///
    /// Finds the most similar pair in the block and uses it as a sync point:
    /// everything before it is handled recursively, the pair itself is emitted
    /// with hint lines, then everything after it is handled recursively. When
    /// no pair reaches the cutoff an identical pair is used as the sync point
    /// instead; with neither, the block is emitted as plain deletes and inserts.
    fn fancy_replace(
        &self,
        left: &[&str],
        old: Range<usize>,
        right: &[&str],
        new: Range<usize>,
        out: &mut Vec<RawDiffLine>,
    ) {
        let mut best_ratio = self.cutoff - 0.01;
        let mut best = None;
        let mut identical = None;

        for j in new.clone() {
            for i in old.clone() {
                if left[i] == right[j] {
                    if identical.is_none() {
                        identical = Some((i, j));
                    }
                    continue;
                }
                let ratio = self.ratio(left[i], right[j]);
                if ratio > best_ratio {
                    best_ratio = ratio;
                    best = Some((i, j));
                }
            }
        }

        let (i, j, is_similar) = match (best.filter(|_| best_ratio >= self.cutoff), identical) {
            (Some((i, j)), _) => (i, j, true),
            (None, Some((i, j))) => (i, j, false),
            (None, None) => {
                plain_replace(left, old, right, new, out);
                return;
            }
        };

        self.fancy_helper(left, old.start..i, right, new.start..j, out);
        if is_similar {
            log::trace!("pairing line {i} with line {j} (ratio {best_ratio:.3})");
            self.push_pair(left[i], right[j], out);
        } else {
            out.push(RawDiffLine::new(RawTag::Equal, left[i]));
        }
        self.fancy_helper(left, i + 1..old.end, right, j + 1..new.end, out);
    }

    fn fancy_helper(
        &self,
        left: &[&str],
        old: Range<usize>,
        right: &[&str],
        new: Range<usize>,
        out: &mut Vec<RawDiffLine>,
    ) {
        match (old.is_empty(), new.is_empty()) {
            (false, false) => self.fancy_replace(left, old, right, new, out),
            (false, true) => dump(out, RawTag::Delete, &left[old]),
            (true, false) => dump(out, RawTag::Insert, &right[new]),
            (true, true) => {}
        }
    }

    /// Emits a similar delete/insert pair, each followed by its hint if any.
    fn push_pair(&self, old_line: &str, new_line: &str, out: &mut Vec<RawDiffLine>) {
        let chars = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_chars(old_line, new_line);

        let mut old_marks = String::with_capacity(old_line.len());
        let mut new_marks = String::with_capacity(new_line.len());
        for (tag, old, new) in opcodes(chars.ops()) {
            match tag {
                DiffTag::Replace => {
                    push_repeated(&mut old_marks, '^', old.len());
                    push_repeated(&mut new_marks, '^', new.len());
                }
                DiffTag::Delete => push_repeated(&mut old_marks, '-', old.len()),
                DiffTag::Insert => push_repeated(&mut new_marks, '+', new.len()),
                DiffTag::Equal => {
                    push_repeated(&mut old_marks, ' ', old.len());
                    push_repeated(&mut new_marks, ' ', new.len());
                }
            }
        }

        out.push(RawDiffLine::new(RawTag::Delete, old_line));
        out.extend(hint_line(old_line, &old_marks));
        out.push(RawDiffLine::new(RawTag::Insert, new_line));
        out.extend(hint_line(new_line, &new_marks));
    }
}

impl LineDiffer for NdiffDiffer {
    fn diff(&self, left: &[&str], right: &[&str]) -> Vec<RawDiffLine> {
        let lines = TextDiff::configure()
            .algorithm(self.algorithm.into())
            .diff_slices(left, right);

        let mut out = Vec::with_capacity(left.len().max(right.len()));
        for (tag, old, new) in opcodes(lines.ops()) {
            match tag {
                DiffTag::Equal => dump(&mut out, RawTag::Equal, &left[old]),
                DiffTag::Delete => dump(&mut out, RawTag::Delete, &left[old]),
                DiffTag::Insert => dump(&mut out, RawTag::Insert, &right[new]),
                DiffTag::Replace => self.fancy_replace(left, old, right, new, &mut out),
            }
        }
        log::debug!(
            "line diff: {} left / {} right lines -> {} raw lines",
            left.len(),
            right.len(),
            out.len()
        );
        out
    }
}

/// Flattens `similar` ops into `(tag, old, new)` opcodes.
///
/// A `Delete` directly followed by an `Insert` is folded into one `Replace`.
fn opcodes(ops: &[DiffOp]) -> Vec<(DiffTag, Range<usize>, Range<usize>)> {
    let mut out: Vec<(DiffTag, Range<usize>, Range<usize>)> = Vec::with_capacity(ops.len());
    for op in ops {
        let (tag, old, new) = op.as_tag_tuple();
        let folds = tag == DiffTag::Insert && matches!(out.last(), Some((DiffTag::Delete, _, _)));
        if let Some(last) = out.last_mut().filter(|_| folds) {
            last.0 = DiffTag::Replace;
            last.2 = new;
            continue;
        }
        out.push((tag, old, new));
    }
    out
}

/// Emits a block with no pairing; the shorter side goes first.
fn plain_replace(
    left: &[&str],
    old: Range<usize>,
    right: &[&str],
    new: Range<usize>,
    out: &mut Vec<RawDiffLine>,
) {
    if new.len() < old.len() {
        dump(out, RawTag::Insert, &right[new]);
        dump(out, RawTag::Delete, &left[old]);
    } else {
        dump(out, RawTag::Delete, &left[old]);
        dump(out, RawTag::Insert, &right[new]);
    }
}

fn dump(out: &mut Vec<RawDiffLine>, tag: RawTag, lines: &[&str]) {
    out.extend(lines.iter().map(|line| RawDiffLine::new(tag, *line)));
}

fn push_repeated(buf: &mut String, ch: char, count: usize) {
    buf.extend(std::iter::repeat(ch).take(count));
}

/// Builds the hint line for `line`, or `None` when nothing is marked.
///
/// Blank marker columns keep the original whitespace character (so tabs stay
/// aligned) and trailing whitespace is trimmed.
fn hint_line(line: &str, marks: &str) -> Option<RawDiffLine> {
    let hint: String = line
        .chars()
        .zip(marks.chars())
        .map(|(ch, mark)| if mark == ' ' && ch.is_whitespace() { ch } else { mark })
        .collect();
    let hint = hint.trim_end();
    (!hint.is_empty()).then(|| RawDiffLine::new(RawTag::Hint, hint))
}
