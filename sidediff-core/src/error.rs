//! Error type shared by every stage of a comparison.
//!
//! Configuration problems surface at construction time; a comparison itself
//! only fails when a [`LineDiffer`](crate::differ::LineDiffer) breaks its
//! output contract. Degenerate inputs (empty, identical, fully different text)
//! are never errors.

use thiserror::Error;

use crate::markup::Side;

/// Errors raised while building a visualizer or running a comparison.
#[derive(Debug, Error)]
pub enum Error {
    /// The line split string was empty, so the input could never be split.
    #[error("line split character must not be empty")]
    EmptySplit,

    /// A highlight color was empty or whitespace only.
    #[error("{side} highlight color must not be empty")]
    EmptyColor {
        /// Which side the color belongs to.
        side: Side,
    },

    /// The similarity cutoff was outside `0.0..=1.0` or not a number.
    #[error("similarity cutoff must be within 0.0..=1.0, got {0}")]
    InvalidCutoff(f32),

    /// A hint line did not directly follow the deleted or inserted line it
    /// annotates.
    #[error("hint line at index {index} has no deleted or inserted line before it")]
    OrphanHint {
        /// Position of the offending hint in the raw diff stream.
        index: usize,
    },

    /// A TOML configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
