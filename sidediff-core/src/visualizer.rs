//! The comparison pipeline: split → line diff → merge → highlight → assemble.

use crate::config::VisualizerConfig;
use crate::differ::{LineDiffer, NdiffDiffer, RawDiffLine};
use crate::error::Result;
use crate::highlight::highlight;
use crate::markup::Markup;
use crate::merge::merge;
use crate::table::{assemble, DisplayRow};

/// Compares text blocks and lays them out side by side.
///
/// Holds only immutable configuration, so one instance can serve any number of
/// comparisons, including concurrent ones.
#[derive(Debug, Clone)]
pub struct TextDiffVisualizer<D = NdiffDiffer> {
    config: VisualizerConfig,
    markup: Markup,
    differ: D,
}

impl TextDiffVisualizer<NdiffDiffer> {
    /// Builds a visualizer using the ndiff line differ configured from `config`.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`VisualizerConfig::validate`].
    pub fn new(config: VisualizerConfig) -> Result<Self> {
        let differ = NdiffDiffer::new(config.similarity_cutoff, config.algorithm);
        Self::with_differ(config, differ)
    }
}

impl<D: LineDiffer> TextDiffVisualizer<D> {
    /// Builds a visualizer around a custom [`LineDiffer`].
    ///
    /// # Errors
    ///
    /// Fails if `config` does not pass [`VisualizerConfig::validate`].
    pub fn with_differ(config: VisualizerConfig, differ: D) -> Result<Self> {
        config.validate()?;
        let markup = Markup::new(&config.left_highlight_color, &config.right_highlight_color);
        Ok(Self { config, markup, differ })
    }

    /// The configuration this visualizer was built with.
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    /// The span markup used in row text.
    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Trims `text` and splits it into lines.
    ///
    /// Empty (or whitespace-only) text yields a single empty line.
    pub fn split_lines<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.trim().split(self.config.line_split_character.as_str()).collect()
    }

    /// Runs only the line differ on the two texts.
    pub fn raw_diff(&self, text_left: &str, text_right: &str) -> Vec<RawDiffLine> {
        let left = self.split_lines(text_left);
        let right = self.split_lines(text_right);
        self.differ.diff(&left, &right)
    }

    /// Compares two texts and returns one [`DisplayRow`] per table row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrphanHint`](crate::Error::OrphanHint) when the line
    /// differ breaks its hint-placement contract. The default differ never does.
    pub fn compare(&self, text_left: &str, text_right: &str) -> Result<Vec<DisplayRow>> {
        let raw = self.raw_diff(text_left, text_right);
        let merged = merge(&raw, &self.markup)?;
        let rows = assemble(highlight(merged, &self.markup));
        log::debug!("compare: {} rows", rows.len());
        Ok(rows)
    }
}
