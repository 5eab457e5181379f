//! Two-panel layout for the sidediff viewer.
//!
//! Pure layout arithmetic, recomputed inside every `terminal.draw()` so the
//! panels always follow the current terminal size. `Spacing::Overlap(1)` with
//! `MergeStrategy::Fuzzy` borders makes the two panels share their middle
//! border column.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect, Spacing},
    style::{Modifier, Style},
    symbols::merge::MergeStrategy,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
};

use crate::app::{AppState, Mode};
use crate::theme::Theme;

/// Returns `[left, right, status_bar]` rects for the current frame.
///
/// The left panel takes `state.left_pct` percent of the width; the right panel
/// fills the rest. The status bar is the bottom row.
pub fn compute_layout(frame: &Frame, state: &AppState) -> [Rect; 3] {
    let [main_area, status_bar] =
        frame.area().layout(&Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]));

    let horizontal =
        Layout::horizontal([Constraint::Percentage(state.left_pct), Constraint::Fill(1)])
            .spacing(Spacing::Overlap(1));
    let [left, right] = main_area.layout(&horizontal);

    [left, right, status_bar]
}

/// Returns the inner `Rect` of a panel after removing its 1-cell border.
pub fn inner_rect(area: Rect) -> Rect {
    area.inner(Margin { vertical: 1, horizontal: 1 })
}

/// Builds the bordered `Block` of a comparison panel.
pub fn panel_block<'a>(title: &'a str, theme: &'a Theme) -> Block<'a> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(theme.border_inactive))
        .merge_borders(MergeStrategy::Fuzzy)
}

/// Renders the 1-row status bar.
///
/// Shows the mode, the compared inputs, the row summary, the current change
/// run (when one was jumped to) and the scroll position.
pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mode_text = match state.mode {
        Mode::Normal => " NORMAL ",
        Mode::HelpOverlay => " HELP ",
    };
    let mode_span = Span::styled(
        mode_text,
        Style::default().fg(theme.status_mode).add_modifier(Modifier::BOLD),
    );

    let change = match state.change_cursor {
        Some(idx) => format!("  change {}/{}", idx + 1, state.change_offsets.len()),
        None => format!("  {} change(s)", state.change_offsets.len()),
    };
    let position = format!(
        "  row {}/{}",
        (state.scroll + 1).min(state.row_count()),
        state.row_count()
    );

    let status_line = Line::from(vec![
        mode_span,
        Span::raw(format!(" {} ↔ {}  ", state.left_title, state.right_title)),
        Span::raw(state.summary.to_string()),
        Span::raw(change),
        Span::raw(position),
    ]);

    frame.render_widget(
        Paragraph::new(status_line)
            .style(Style::default().bg(theme.status_bar_bg).fg(theme.status_bar_fg)),
        area,
    );
}
