//! Visualizer configuration.
//!
//! Every field has a default, so an empty TOML table (or `Default::default()`)
//! is a valid configuration. Validation happens when a
//! [`TextDiffVisualizer`](crate::TextDiffVisualizer) is built from it.

use serde::{Deserialize, Serialize};

use crate::differ::{DiffAlgorithm, DEFAULT_CUTOFF};
use crate::error::{Error, Result};
use crate::markup::Side;

/// Default highlight color for removed text.
pub const DEFAULT_LEFT_COLOR: &str = "rgba(255, 0, 0, 0.6)";
/// Default highlight color for added text.
pub const DEFAULT_RIGHT_COLOR: &str = "rgba(0, 255, 0, 0.6)";
/// Default filler for blank table cells.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "&nbsp;";

/// Options fixed for the lifetime of a visualizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Background color of removed spans.
    pub left_highlight_color: String,
    /// Background color of added spans.
    pub right_highlight_color: String,
    /// String the inputs are split on.
    pub line_split_character: String,
    /// Filler renderers put in blank text cells.
    pub empty_placeholder: String,
    /// Text color of flagged left labels in rendered tables.
    pub removed_label_color: String,
    /// Text color of flagged right labels in rendered tables.
    pub added_label_color: String,
    /// Similarity a deleted/inserted pair needs to get intraline highlights.
    pub similarity_cutoff: f32,
    /// Alignment algorithm for lines and characters.
    pub algorithm: DiffAlgorithm,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            left_highlight_color: DEFAULT_LEFT_COLOR.to_owned(),
            right_highlight_color: DEFAULT_RIGHT_COLOR.to_owned(),
            line_split_character: "\n".to_owned(),
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_owned(),
            removed_label_color: "red".to_owned(),
            added_label_color: "green".to_owned(),
            similarity_cutoff: DEFAULT_CUTOFF,
            algorithm: DiffAlgorithm::default(),
        }
    }
}

impl VisualizerConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// Missing keys take their defaults; unknown keys are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] on malformed TOML or a wrongly typed value,
    /// and the [`validate`](Self::validate) errors otherwise.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the values a comparison depends on.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySplit`] for an empty split string.
    /// - [`Error::EmptyColor`] for a blank highlight color.
    /// - [`Error::InvalidCutoff`] for a cutoff outside `0.0..=1.0`.
    pub fn validate(&self) -> Result<()> {
        if self.line_split_character.is_empty() {
            return Err(Error::EmptySplit);
        }
        if self.left_highlight_color.trim().is_empty() {
            return Err(Error::EmptyColor { side: Side::Left });
        }
        if self.right_highlight_color.trim().is_empty() {
            return Err(Error::EmptyColor { side: Side::Right });
        }
        if !(0.0..=1.0).contains(&self.similarity_cutoff) {
            return Err(Error::InvalidCutoff(self.similarity_cutoff));
        }
        Ok(())
    }
}
