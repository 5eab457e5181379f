//! sidediff-core: side-by-side line diff with intraline highlighting.
//!
//! Turns two blocks of text into table rows: unchanged lines on both sides,
//! edited lines paired on one row with only the changed characters wrapped in
//! color spans, and lines present on one side only next to a blank cell.
//!
//! ```
//! use sidediff_core::{TextDiffVisualizer, VisualizerConfig};
//!
//! let visualizer = TextDiffVisualizer::new(VisualizerConfig::default())?;
//! let rows = visualizer.compare("A\nB", "A\nB")?;
//! assert_eq!(rows.len(), 2);
//! assert_eq!(rows[0].left_index.map(|l| l.to_string()).as_deref(), Some("1="));
//! # Ok::<(), sidediff_core::Error>(())
//! ```
//!
//! # Pipeline
//!
//! 1. [`differ`]: ndiff-style line comparison with intraline hint lines.
//! 2. [`merge`]: folds each hint into its line as color markup.
//! 3. [`highlight`]: aligns lines into left and right columns.
//! 4. [`table`]: numbers each side and builds [`DisplayRow`]s.
//!
//! [`render`] turns rows into Markdown or HTML tables.

pub mod config;
pub mod differ;
pub mod error;
pub mod highlight;
pub mod markup;
pub mod merge;
pub mod render;
pub mod table;
pub mod visualizer;

pub use config::VisualizerConfig;
pub use differ::{DiffAlgorithm, LineDiffer, NdiffDiffer, RawDiffLine, RawTag};
pub use error::{Error, Result};
pub use markup::{Markup, Side};
pub use merge::LineTag;
pub use table::{DiffSummary, DisplayRow, LineLabel, RowKind};
pub use visualizer::TextDiffVisualizer;
