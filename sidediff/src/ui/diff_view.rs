//! Comparison panels for the sidediff viewer.
//!
//! Rows are converted once into styled `Line<'static>` values per side (the
//! HTML spans in row text become background colors). Each frame then only
//! materialises `lines[scroll..scroll + viewport_height]`, so rendering cost
//! follows the viewport, not the comparison size.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem},
};
use sidediff_core::{DisplayRow, LineLabel, Markup, RowKind, Side};

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::layout::{inner_rect, panel_block};

/// Builds the styled lines of one side, one per row.
///
/// Each line starts with a right-aligned label column (`12=`, `7-`, `3+`).
/// Rows with nothing on this side become a filler line.
pub fn build_side_lines(
    rows: &[DisplayRow],
    markup: &Markup,
    theme: &Theme,
    side: Side,
) -> Vec<Line<'static>> {
    let label_width = rows.len().to_string().len() + 1;

    rows.iter()
        .map(|row| {
            let (label, text) = match side {
                Side::Left => (row.left_index, row.left_text.as_str()),
                Side::Right => (row.right_index, row.right_text.as_str()),
            };
            match label {
                Some(label) => row_line(label, text, row.kind(), label_width, markup, theme, side),
                None => filler_line(label_width, theme),
            }
        })
        .collect()
}

fn row_line(
    label: LineLabel,
    text: &str,
    kind: RowKind,
    label_width: usize,
    markup: &Markup,
    theme: &Theme,
    side: Side,
) -> Line<'static> {
    let label_color = match (label.is_flagged(), side) {
        (false, _) => theme.label_equal,
        (true, Side::Left) => theme.label_removed,
        (true, Side::Right) => theme.label_added,
    };
    let highlight_bg = match side {
        Side::Left => theme.removed_bg,
        Side::Right => theme.added_bg,
    };
    let text_fg = if kind == RowKind::Equal { theme.text } else { theme.text_changed };

    let mut spans = vec![Span::styled(
        format!("{:>label_width$} ", label.to_string()),
        Style::default().fg(label_color),
    )];
    spans.extend(markup.segments(text, side).into_iter().map(|segment| {
        let style = if segment.highlighted {
            Style::default().fg(text_fg).bg(highlight_bg)
        } else {
            Style::default().fg(text_fg)
        };
        Span::styled(segment.text.to_owned(), style)
    }));
    Line::from(spans)
}

fn filler_line(label_width: usize, theme: &Theme) -> Line<'static> {
    Line::from(Span::raw(" ".repeat(label_width + 1))).style(Style::default().bg(theme.filler_bg))
}

/// Renders one comparison panel using virtual scrolling.
///
/// # Arguments
///
/// * `frame`: current render frame
/// * `area`: the panel `Rect` (including borders)
/// * `title`: input name shown in the top border
/// * `lines`: pre-styled lines of this side
/// * `state`: read-only state supplying the shared scroll offset
/// * `theme`: active color theme
pub fn render_panel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[Line<'static>],
    state: &AppState,
    theme: &Theme,
) {
    let block = panel_block(title, theme);
    let inner = inner_rect(area);
    frame.render_widget(block, area);

    let total = lines.len();
    let visible_start = state.scroll.min(total.saturating_sub(1));
    let visible_end = (visible_start + inner.height as usize).min(total);

    let items: Vec<ListItem> = lines[visible_start..visible_end]
        .iter()
        .map(|l| ListItem::new(l.clone()))
        .collect();
    frame.render_widget(List::new(items), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidediff_core::{TextDiffVisualizer, VisualizerConfig};

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn spans_become_separate_styled_segments() {
        let visualizer = TextDiffVisualizer::new(VisualizerConfig::default()).unwrap();
        let rows = visualizer.compare("abcdX", "abcdY").unwrap();
        let theme = Theme::dark();
        let left = build_side_lines(&rows, visualizer.markup(), &theme, Side::Left);

        assert_eq!(left.len(), 1);
        assert_eq!(line_text(&left[0]), "1- abcdX");
        let last = left[0].spans.last().unwrap();
        assert_eq!(last.content, "X");
        assert_eq!(last.style.bg, Some(theme.removed_bg));
    }

    #[test]
    fn missing_side_becomes_filler() {
        let visualizer = TextDiffVisualizer::new(VisualizerConfig::default()).unwrap();
        let rows = visualizer.compare("A", "A\nB").unwrap();
        let left = build_side_lines(&rows, visualizer.markup(), &Theme::dark(), Side::Left);

        assert_eq!(left.len(), 2);
        assert_eq!(line_text(&left[1]).trim(), "");
    }
}
