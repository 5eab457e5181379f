//! Command-line interface for sidediff.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// sidediff - side-by-side line diff with intraline highlighting
#[derive(Parser, Debug)]
#[command(name = "sidediff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Original text file (`-` for stdin)
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// New text file (`-` for stdin)
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,

    /// Output format (defaults to the config file's `format`, else markdown)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the XDG default
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Highlight color for removed text, e.g. "rgba(255, 0, 0, 0.6)"
    #[arg(long, value_name = "COLOR")]
    pub left_color: Option<String>,

    /// Highlight color for added text, e.g. "rgba(0, 255, 0, 0.6)"
    #[arg(long, value_name = "COLOR")]
    pub right_color: Option<String>,

    /// String the inputs are split into lines on
    #[arg(long, value_name = "STR")]
    pub split: Option<String>,

    /// Similarity (0.0-1.0) a changed line pair needs for intraline highlights
    #[arg(long, value_name = "RATIO")]
    pub cutoff: Option<f32>,

    /// Viewer theme: dark or catppuccin-mocha
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Write log output to this file (the viewer otherwise suppresses logs)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// How the comparison is presented.
#[derive(ValueEnum, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pipe table with inline HTML spans.
    #[default]
    Markdown,
    /// Standalone HTML table with stylesheet.
    Html,
    /// Display rows as a JSON array.
    Json,
    /// Raw line-differ output with `?` hint lines.
    Ndiff,
    /// Interactive two-panel terminal viewer.
    Tui,
}

impl Cli {
    /// Returns `true` when both inputs ask for stdin, which cannot be satisfied.
    pub fn both_stdin(&self) -> bool {
        is_stdin(&self.left) && is_stdin(&self.right)
    }
}

/// `true` for the conventional `-` stdin path.
pub fn is_stdin(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}
