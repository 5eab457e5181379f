//! Color themes for the sidediff viewer.
//!
//! Two built-in themes:
//!
//! - `dark`: ANSI 16 colors, safe on any terminal including SSH sessions
//!   without truecolor.
//! - `catppuccin_mocha`: Catppuccin Mocha palette in RGB; requires truecolor.
//!
//! Highlight backgrounds stand in for the HTML span colors: removed spans get
//! `removed_bg`, added spans `added_bg`.

use ratatui::style::Color;

/// All color values used by the viewer.
#[derive(Debug, Clone)]
pub struct Theme {
    // Panel borders
    /// Border color of the help overlay.
    pub border_active: Color,
    /// Border color of the comparison panels.
    pub border_inactive: Color,

    // Comparison rows
    /// Foreground of unchanged text.
    pub text: Color,
    /// Foreground of text on changed rows.
    pub text_changed: Color,
    /// Background of removed spans.
    pub removed_bg: Color,
    /// Background of added spans.
    pub added_bg: Color,
    /// Foreground of flagged removed-line labels (`3-`).
    pub label_removed: Color,
    /// Foreground of flagged added-line labels (`3+`).
    pub label_added: Color,
    /// Foreground of unchanged labels (`3=`).
    pub label_equal: Color,
    /// Background of rows with no content on this side.
    pub filler_bg: Color,

    // Status bar
    /// Status bar background.
    pub status_bar_bg: Color,
    /// Status bar foreground.
    pub status_bar_fg: Color,
    /// Mode indicator color.
    pub status_mode: Color,
}

impl Theme {
    /// Returns the built-in dark theme using ANSI 16 colors.
    pub fn dark() -> Self {
        Self {
            border_active: Color::Cyan,
            border_inactive: Color::DarkGray,

            text: Color::Reset,
            text_changed: Color::White,
            removed_bg: Color::Red,
            added_bg: Color::Green,
            label_removed: Color::Red,
            label_added: Color::Green,
            label_equal: Color::DarkGray,
            filler_bg: Color::Reset,

            status_bar_bg: Color::DarkGray,
            status_bar_fg: Color::White,
            status_mode: Color::Cyan,
        }
    }

    /// Returns the Catppuccin Mocha theme using RGB truecolor values.
    ///
    /// Palette source: <https://github.com/catppuccin/catppuccin> Mocha variant.
    pub fn catppuccin_mocha() -> Self {
        let green = Color::Rgb(166, 227, 161); // #a6e3a1
        let red = Color::Rgb(243, 139, 168); // #f38ba8
        let lavender = Color::Rgb(180, 190, 254); // #b4befe
        let overlay1 = Color::Rgb(127, 132, 156); // #7f849c
        let surface0 = Color::Rgb(49, 50, 68); // #313244
        let surface1 = Color::Rgb(69, 71, 90); // #45475a
        let text = Color::Rgb(205, 214, 244); // #cdd6f4
        let red_dim = Color::Rgb(92, 52, 68);
        let green_dim = Color::Rgb(56, 86, 62);

        Self {
            border_active: lavender,
            border_inactive: overlay1,

            text,
            text_changed: text,
            removed_bg: red_dim,
            added_bg: green_dim,
            label_removed: red,
            label_added: green,
            label_equal: overlay1,
            filler_bg: surface0,

            status_bar_bg: surface1,
            status_bar_fg: text,
            status_mode: lavender,
        }
    }

    /// Resolves a theme name to the corresponding built-in theme.
    ///
    /// Unknown names fall back to `dark()` with a warning, so a typo in config
    /// never prevents startup.
    pub fn from_name(name: &str) -> Self {
        match name {
            "catppuccin-mocha" | "catppuccin_mocha" => Self::catppuccin_mocha(),
            "dark" => Self::dark(),
            other => {
                log::warn!("unknown theme '{other}', falling back to 'dark'");
                Self::dark()
            }
        }
    }
}
