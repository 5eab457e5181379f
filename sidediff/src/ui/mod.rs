//! UI rendering for the sidediff viewer.
//!
//! `render()` is the single entry point called from the event loop's
//! `terminal.draw()` closure. Layout arithmetic lives in `layout.rs`; panel
//! content in `diff_view.rs`.

mod layout;
pub mod diff_view;
pub mod help;
pub mod keybindings;

use ratatui::Frame;

use crate::app::{AppState, Mode};
use crate::theme::Theme;
use layout::{compute_layout, inner_rect, render_status_bar};

/// Renders one complete frame: both panels, the status bar and, in help mode,
/// the overlay on top.
///
/// The panel viewport height and rects are written back into `state` so the
/// next keypress or wheel event can use them.
pub fn render(frame: &mut Frame, state: &mut AppState, theme: &Theme) {
    let [left, right, status_bar] = compute_layout(frame, state);

    state.viewport_height = inner_rect(left).height;
    state.panel_rects = [left, right];

    diff_view::render_panel(frame, left, &state.left_title, &state.left_lines, state, theme);
    diff_view::render_panel(frame, right, &state.right_title, &state.right_lines, state, theme);

    render_status_bar(frame, status_bar, state, theme);

    if state.mode == Mode::HelpOverlay {
        help::render_help_overlay(frame, theme, state.help_scroll);
    }
}
