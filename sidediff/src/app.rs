//! Central viewer state for sidediff.
//!
//! Holds the comparison rows, the shared scroll position, the split between
//! the two panels and the overlay mode. No rendering lives here; `ui` reads
//! this state and `ui::keybindings` mutates it.

use ratatui::layout::Rect;
use ratatui::text::Line;
use sidediff_core::{DiffSummary, DisplayRow, RowKind};

/// Which overlay, if any, sits above the panels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Plain navigation.
    #[default]
    Normal,
    /// Full-screen help overlay.
    HelpOverlay,
}

/// All mutable viewer state passed through every render cycle.
pub struct AppState {
    /// Current overlay mode.
    pub mode: Mode,

    /// Display name of the left input.
    pub left_title: String,
    /// Display name of the right input.
    pub right_title: String,

    /// Pre-styled left column, one line per row.
    pub left_lines: Vec<Line<'static>>,
    /// Pre-styled right column, one line per row.
    pub right_lines: Vec<Line<'static>>,
    /// Row kind counts shown in the status bar.
    pub summary: DiffSummary,

    /// First visible row; both panels scroll together.
    pub scroll: usize,
    /// Inner height of the panels, cached after each render.
    pub viewport_height: u16,
    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,

    /// Width percentage of the left panel; the right panel takes the rest.
    pub left_pct: u16,
    /// Panel rects from the last render, used for mouse hit-testing.
    pub panel_rects: [Rect; 2],

    /// Row indices where a run of changed rows starts.
    pub change_offsets: Vec<usize>,
    /// Index into `change_offsets` of the last jump target.
    pub change_cursor: Option<usize>,
}

impl AppState {
    /// Builds viewer state for a finished comparison.
    ///
    /// `left_lines` and `right_lines` must have one entry per row of `rows`.
    pub fn new(
        left_title: impl Into<String>,
        right_title: impl Into<String>,
        rows: &[DisplayRow],
        left_lines: Vec<Line<'static>>,
        right_lines: Vec<Line<'static>>,
    ) -> Self {
        Self {
            mode: Mode::default(),
            left_title: left_title.into(),
            right_title: right_title.into(),
            left_lines,
            right_lines,
            summary: DiffSummary::from_rows(rows),
            scroll: 0,
            viewport_height: 0,
            help_scroll: 0,
            left_pct: 50,
            panel_rects: [Rect::default(); 2],
            change_offsets: change_offsets(rows),
            change_cursor: None,
        }
    }

    /// Number of rows in the comparison.
    pub fn row_count(&self) -> usize {
        self.left_lines.len()
    }

    fn max_scroll(&self) -> usize {
        self.row_count().saturating_sub(1)
    }

    /// Scrolls both panels down by `lines` rows, stopping at the last row.
    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines as usize).min(self.max_scroll());
    }

    /// Scrolls both panels up by `lines` rows.
    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines as usize);
    }

    /// Jumps to the first row.
    pub fn scroll_top(&mut self) {
        self.scroll = 0;
        self.change_cursor = None;
    }

    /// Jumps to the last row.
    pub fn scroll_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Scrolls down by half the cached viewport height (at least one row).
    pub fn half_page_down(&mut self) {
        self.scroll_down((self.viewport_height / 2).max(1));
    }

    /// Scrolls up by half the cached viewport height (at least one row).
    pub fn half_page_up(&mut self) {
        self.scroll_up((self.viewport_height / 2).max(1));
    }

    /// Scrolls down by the full cached viewport height.
    pub fn full_page_down(&mut self) {
        self.scroll_down(self.viewport_height.max(1));
    }

    /// Scrolls up by the full cached viewport height.
    pub fn full_page_up(&mut self) {
        self.scroll_up(self.viewport_height.max(1));
    }

    /// Jumps to the next run of changed rows below the current position.
    pub fn next_change(&mut self) {
        let next = self.change_offsets.iter().position(|&row| row > self.scroll);
        if let Some(idx) = next {
            self.change_cursor = Some(idx);
            self.scroll = self.change_offsets[idx];
        }
    }

    /// Jumps to the previous run of changed rows above the current position.
    pub fn prev_change(&mut self) {
        let prev = self.change_offsets.iter().rposition(|&row| row < self.scroll);
        if let Some(idx) = prev {
            self.change_cursor = Some(idx);
            self.scroll = self.change_offsets[idx];
        }
    }

    /// Moves 5% of width from the left panel to the right one (left stays ≥ 20%).
    pub fn shrink_left_panel(&mut self) {
        const MIN_LEFT: u16 = 20;
        const STEP: u16 = 5;
        self.left_pct = self.left_pct.saturating_sub(STEP).max(MIN_LEFT);
    }

    /// Moves 5% of width from the right panel to the left one (left stays ≤ 80%).
    pub fn grow_left_panel(&mut self) {
        const MAX_LEFT: u16 = 80;
        const STEP: u16 = 5;
        self.left_pct = (self.left_pct + STEP).min(MAX_LEFT);
    }
}

/// Row indices where a run of non-equal rows begins.
fn change_offsets(rows: &[DisplayRow]) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut in_change = false;
    for (idx, row) in rows.iter().enumerate() {
        let changed = row.kind() != RowKind::Equal;
        if changed && !in_change {
            offsets.push(idx);
        }
        in_change = changed;
    }
    offsets
}
