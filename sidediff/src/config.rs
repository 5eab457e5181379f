//! Config-file loading for sidediff.
//!
//! The file lives at `$XDG_CONFIG_HOME/sidediff/config.toml`, falling back to
//! `~/.config/sidediff/config.toml`:
//!
//! ```toml
//! theme = "catppuccin-mocha"
//! format = "tui"
//!
//! [visualizer]
//! left_highlight_color = "rgba(255, 0, 0, 0.6)"
//! right_highlight_color = "rgba(0, 255, 0, 0.6)"
//! similarity_cutoff = 0.75
//! ```
//!
//! A missing default file means defaults. A file named explicitly with
//! `--config` must exist. Command-line flags override file values.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use sidediff_core::VisualizerConfig;

use crate::cli::{Cli, OutputFormat};

/// Top-level layout of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Viewer theme name.
    pub theme: Option<String>,
    /// Default output format.
    pub format: Option<OutputFormat>,
    /// Comparison options.
    pub visualizer: VisualizerConfig,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub theme: String,
    pub format: OutputFormat,
    pub visualizer: VisualizerConfig,
}

/// Returns the path to the default sidediff config file.
///
/// Prefers `$XDG_CONFIG_HOME/sidediff/config.toml`; falls back to
/// `~/.config/sidediff/config.toml` when the env var is absent.
pub fn config_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| std::env::var("HOME").ok().map(|h| PathBuf::from(h).join(".config")))
        .unwrap_or_else(|| PathBuf::from(".config"));
    base.join("sidediff").join("config.toml")
}

/// Parses the config file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be read or is not valid sidediff TOML.
pub fn load_file(path: &Path) -> anyhow::Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: FileConfig =
        toml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}

/// Loads the config file (explicit or default) and applies CLI overrides.
///
/// # Errors
///
/// Fails on an unreadable or invalid explicit config file, or on an invalid
/// default file that exists. The merged visualizer options are validated too.
pub fn resolve(cli: &Cli) -> anyhow::Result<Settings> {
    let file = match &cli.config {
        Some(path) => load_file(path)?,
        None => {
            let path = config_path();
            if path.exists() {
                load_file(&path)?
            } else {
                log::debug!("no config at {}, using defaults", path.display());
                FileConfig::default()
            }
        }
    };
    Ok(apply_overrides(file, cli)?)
}

fn apply_overrides(file: FileConfig, cli: &Cli) -> Result<Settings, sidediff_core::Error> {
    let mut visualizer = file.visualizer;
    if let Some(color) = &cli.left_color {
        visualizer.left_highlight_color = color.clone();
    }
    if let Some(color) = &cli.right_color {
        visualizer.right_highlight_color = color.clone();
    }
    if let Some(split) = &cli.split {
        visualizer.line_split_character = split.clone();
    }
    if let Some(cutoff) = cli.cutoff {
        visualizer.similarity_cutoff = cutoff;
    }
    visualizer.validate()?;

    Ok(Settings {
        theme: cli
            .theme
            .clone()
            .or(file.theme)
            .unwrap_or_else(|| "catppuccin-mocha".to_owned()),
        format: cli.format.or(file.format).unwrap_or_default(),
        visualizer,
    })
}
