//! Aligns merged lines into two parallel columns.
//!
//! Each position of the output is one future table row. A deleted line and the
//! inserted line after it share a row only when the merger already related them
//! through intraline markup; otherwise each gets its own row with the opposite
//! side left blank and the whole line highlighted.

use crate::markup::{Markup, Side};
use crate::merge::{LineTag, MergedLine};

/// One side of a row: its tag and (possibly marked-up) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SideCell {
    /// `Equal` on both sides of an unchanged row, `Delete` on the left or
    /// `Insert` on the right of a changed one.
    pub tag: LineTag,
    /// Display text with highlight spans.
    pub text: String,
}

impl SideCell {
    fn new(tag: LineTag, text: String) -> Self {
        Self { tag, text }
    }
}

/// The two aligned columns; both vectors always have the same length.
///
/// `None` marks a blank cell with no counterpart on that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns {
    /// Left (original) column.
    pub left: Vec<Option<SideCell>>,
    /// Right (new) column.
    pub right: Vec<Option<SideCell>>,
}

impl Columns {
    fn push(&mut self, left: Option<SideCell>, right: Option<SideCell>) {
        self.left.push(left);
        self.right.push(right);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.left.len()
    }

    /// `true` when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

/// Builds the two aligned columns from merged lines.
///
/// Pairing rule: a `Delete` followed by an `Insert` lands on one row iff either
/// of the two carries merge-stage markup. Unpaired lines are wrapped whole in
/// their side's color unless they already carry markup, so spans never nest.
pub fn highlight(merged: Vec<MergedLine>, markup: &Markup) -> Columns {
    let mut columns = Columns::default();
    let mut queue = merged.into_iter().peekable();

    while let Some(line) = queue.next() {
        match line.tag {
            LineTag::Equal => {
                let cell = SideCell::new(LineTag::Equal, line.content);
                columns.push(Some(cell.clone()), Some(cell));
            }
            LineTag::Delete => {
                let paired = queue.peek().is_some_and(|next| {
                    next.tag == LineTag::Insert && (next.highlighted || line.highlighted)
                });
                match queue.next_if(|_| paired) {
                    Some(insert) => columns.push(
                        Some(SideCell::new(LineTag::Delete, line.content)),
                        Some(SideCell::new(LineTag::Insert, insert.content)),
                    ),
                    None => columns.push(
                        Some(SideCell::new(LineTag::Delete, whole_line(line, markup, Side::Left))),
                        None,
                    ),
                }
            }
            LineTag::Insert => columns.push(
                None,
                Some(SideCell::new(LineTag::Insert, whole_line(line, markup, Side::Right))),
            ),
        }
    }

    log::debug!("highlight: {} rows", columns.len());
    columns
}

fn whole_line(line: MergedLine, markup: &Markup, side: Side) -> String {
    if line.highlighted {
        line.content
    } else {
        markup.wrap(&line.content, side)
    }
}
