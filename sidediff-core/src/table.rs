//! Row records with per-side line numbers.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::highlight::{Columns, SideCell};
use crate::merge::LineTag;

/// A line-number label such as `3=` or `7-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLabel {
    /// 1-based line number on this side.
    pub number: usize,
    /// Tag of the cell the label belongs to.
    pub tag: LineTag,
}

impl LineLabel {
    /// `true` for a removed left line or an added right line; renderers flag
    /// these labels visually.
    pub fn is_flagged(&self) -> bool {
        self.tag != LineTag::Equal
    }
}

impl fmt::Display for LineLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.tag.symbol())
    }
}

impl Serialize for LineLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    /// Same line on both sides.
    Equal,
    /// A deleted line and its edited counterpart on the same row.
    Changed,
    /// Left only; right side blank.
    Deleted,
    /// Right only; left side blank.
    Inserted,
}

/// One row of the side-by-side table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    /// Left label, `None` when the left side is blank.
    pub left_index: Option<LineLabel>,
    /// Left text with highlight markup; empty when blank.
    pub left_text: String,
    /// Right label, `None` when the right side is blank.
    pub right_index: Option<LineLabel>,
    /// Right text with highlight markup; empty when blank.
    pub right_text: String,
}

impl DisplayRow {
    /// Classifies the row from which sides are populated.
    pub fn kind(&self) -> RowKind {
        match (&self.left_index, &self.right_index) {
            (Some(l), Some(_)) if l.tag == LineTag::Equal => RowKind::Equal,
            (Some(_), Some(_)) => RowKind::Changed,
            (Some(_), None) => RowKind::Deleted,
            (None, _) => RowKind::Inserted,
        }
    }
}

/// Zips the highlighter's columns into rows.
///
/// Each side keeps its own 1-based counter, advanced only when that side's
/// cell is present, so numbers always match the original line positions.
pub fn assemble(columns: Columns) -> Vec<DisplayRow> {
    let mut left_number = 1;
    let mut right_number = 1;

    columns
        .left
        .into_iter()
        .zip(columns.right)
        .map(|(left, right)| {
            let (left_index, left_text) = label_cell(left, &mut left_number);
            let (right_index, right_text) = label_cell(right, &mut right_number);
            DisplayRow { left_index, left_text, right_index, right_text }
        })
        .collect()
}

fn label_cell(cell: Option<SideCell>, counter: &mut usize) -> (Option<LineLabel>, String) {
    match cell {
        Some(cell) => {
            let label = LineLabel { number: *counter, tag: cell.tag };
            *counter += 1;
            (Some(label), cell.text)
        }
        None => (None, String::new()),
    }
}

/// Row counts of one comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    /// Unchanged rows.
    pub equal: usize,
    /// Rows pairing a deleted line with its edited counterpart.
    pub changed: usize,
    /// Left-only rows.
    pub deleted: usize,
    /// Right-only rows.
    pub inserted: usize,
}

impl DiffSummary {
    /// Counts the kinds of `rows`.
    pub fn from_rows(rows: &[DisplayRow]) -> Self {
        rows.iter().fold(Self::default(), |mut acc, row| {
            match row.kind() {
                RowKind::Equal => acc.equal += 1,
                RowKind::Changed => acc.changed += 1,
                RowKind::Deleted => acc.deleted += 1,
                RowKind::Inserted => acc.inserted += 1,
            }
            acc
        })
    }

    /// `true` when every row is unchanged.
    pub fn is_identical(&self) -> bool {
        self.changed == 0 && self.deleted == 0 && self.inserted == 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "={} ~{} -{} +{}",
            self.equal, self.changed, self.deleted, self.inserted
        )
    }
}
