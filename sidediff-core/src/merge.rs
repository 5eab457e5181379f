//! Folds hint lines into the line they annotate.
//!
//! The raw stream carries intraline information as separate `Hint` lines. This
//! stage turns each `Delete`/`Insert` + `Hint` couple into a single merged line
//! whose content already has color spans around the hinted characters, so the
//! highlighter only ever sees `Equal`, `Delete` and `Insert`.

use crate::differ::{RawDiffLine, RawTag};
use crate::error::{Error, Result};
use crate::markup::{HighlightRange, Markup, Side};

/// Classification of a merged line (and of one side of a display row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTag {
    /// Unchanged on both sides.
    Equal,
    /// Removed from the left text.
    Delete,
    /// Added to the right text.
    Insert,
}

impl LineTag {
    /// The one-character tag used in row labels.
    pub fn symbol(self) -> char {
        match self {
            LineTag::Equal => '=',
            LineTag::Delete => '-',
            LineTag::Insert => '+',
        }
    }

    /// The side whose highlight color this tag uses, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            LineTag::Equal => None,
            LineTag::Delete => Some(Side::Left),
            LineTag::Insert => Some(Side::Right),
        }
    }
}

/// A diff line with any intraline markup already embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedLine {
    /// Line classification.
    pub tag: LineTag,
    /// Line content, possibly containing highlight spans.
    pub content: String,
    /// `true` when a hint placed highlight spans in `content`.
    pub highlighted: bool,
}

impl MergedLine {
    /// Creates a merged line with no embedded markup.
    pub fn plain(tag: LineTag, content: impl Into<String>) -> Self {
        Self { tag, content: content.into(), highlighted: false }
    }
}

/// Merges hint lines into their subject lines in one left-to-right pass.
///
/// - `Equal` lines pass through.
/// - A `Delete`/`Insert` line directly followed by a `Hint` is held back; the
///   hint emits it with spans inserted at the hinted ranges, in the left color
///   for a deletion and the right color for an insertion.
/// - A `Delete`/`Insert` line with no hint passes through unchanged.
///
/// # Errors
///
/// Returns [`Error::OrphanHint`] if a hint is first in the stream or follows an
/// `Equal` or another `Hint`. Nothing is returned in that case.
pub fn merge(raw: &[RawDiffLine], markup: &Markup) -> Result<Vec<MergedLine>> {
    let mut merged = Vec::with_capacity(raw.len());

    for (idx, line) in raw.iter().enumerate() {
        match line.tag {
            RawTag::Equal => merged.push(MergedLine::plain(LineTag::Equal, line.content.as_str())),
            RawTag::Hint => {
                let subject = idx.checked_sub(1).and_then(|prev| raw.get(prev));
                let (tag, side, subject) = match subject {
                    Some(s) if s.tag == RawTag::Delete => (LineTag::Delete, Side::Left, s),
                    Some(s) if s.tag == RawTag::Insert => (LineTag::Insert, Side::Right, s),
                    _ => return Err(Error::OrphanHint { index: idx }),
                };
                let ranges = HighlightRange::find_all(&line.content);
                log::trace!("hint at {idx}: {} range(s) on the {side}", ranges.len());
                merged.push(MergedLine {
                    tag,
                    content: markup.insert_tags(&subject.content, &ranges, side),
                    highlighted: !ranges.is_empty(),
                });
            }
            RawTag::Delete | RawTag::Insert => {
                if raw.get(idx + 1).is_some_and(|next| next.tag == RawTag::Hint) {
                    continue;
                }
                let tag = if line.tag == RawTag::Delete { LineTag::Delete } else { LineTag::Insert };
                merged.push(MergedLine::plain(tag, line.content.as_str()));
            }
        }
    }

    log::debug!("merge: {} raw lines -> {} merged lines", raw.len(), merged.len());
    Ok(merged)
}
