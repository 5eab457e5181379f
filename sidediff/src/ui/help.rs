//! Help overlay for the sidediff viewer.
//!
//! Drawn inside the same `terminal.draw()` closure as the panels: `Clear` erases
//! the overlay area first, then a bordered `Paragraph` lists the keys.

use ratatui::{
    Frame,
    layout::Constraint,
    style::Style,
    text::{Line, Text},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::theme::Theme;

/// Renders the help overlay as a centred modal above the two panels.
///
/// The paragraph scrolls vertically by `help_scroll` rows so the list stays
/// reachable on short terminals. Terminals narrower than 60 columns get no
/// overlay.
pub fn render_help_overlay(frame: &mut Frame, theme: &Theme, help_scroll: u16) {
    if frame.area().width < 60 {
        return;
    }

    let overlay_area = frame
        .area()
        .centered(Constraint::Percentage(80), Constraint::Percentage(80));
    frame.render_widget(Clear, overlay_area);

    let block = Block::bordered()
        .title(" Help  (j/k scroll, ? or Esc to dismiss) ")
        .border_style(Style::default().fg(theme.border_active));

    frame.render_widget(
        Paragraph::new(build_help_text())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((help_scroll, 0)),
        overlay_area,
    );
}

fn build_help_text() -> Text<'static> {
    Text::from(vec![
        Line::from("Navigation"),
        Line::from("  j / k         Scroll down / up one row"),
        Line::from("  g / G         Jump to first / last row"),
        Line::from("  Ctrl-d / u    Scroll half page down / up"),
        Line::from("  Ctrl-f / b    Scroll full page down / up"),
        Line::from("  [ / ]         Previous / next block of changed rows"),
        Line::from(""),
        Line::from("Layout"),
        Line::from("  < / >         Shrink / grow the left panel by 5%"),
        Line::from(""),
        Line::from("Labels"),
        Line::from("  12=           Line 12, unchanged"),
        Line::from("  12-           Line 12 of the left text, removed or changed"),
        Line::from("  12+           Line 12 of the right text, added or changed"),
        Line::from(""),
        Line::from("General"),
        Line::from("  ?             Open / close this help overlay"),
        Line::from("  q / Esc       Quit"),
    ])
}
