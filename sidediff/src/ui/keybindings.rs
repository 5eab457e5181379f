//! Keybinding dispatcher for the sidediff viewer.
//!
//! Translates crossterm key and mouse events into `AppState` mutations and
//! returns a `KeyAction` telling the event loop whether to continue or quit.
//! Dispatch branches first on `state.mode`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::{AppState, Mode};

/// Rows moved per mouse wheel notch.
const WHEEL_STEP: u16 = 3;

/// Control-flow signal returned from the dispatchers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Keep running; the next render tick redraws.
    Continue,
    /// Leave the event loop and restore the terminal.
    Quit,
}

/// Dispatches a key event to the handler of the current mode.
pub fn handle_key(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match state.mode {
        Mode::HelpOverlay => handle_help(key, state),
        Mode::Normal => handle_normal(key, state),
    }
}

// ---------------------------------------------------------------------------
// Normal mode
// ---------------------------------------------------------------------------

fn handle_normal(key: KeyEvent, state: &mut AppState) -> KeyAction {
    if let Some(action) = handle_scroll_key(key, state) {
        return action;
    }

    match key.code {
        KeyCode::Char('[') => { state.prev_change(); KeyAction::Continue }
        KeyCode::Char(']') => { state.next_change(); KeyAction::Continue }

        KeyCode::Char('<') => { state.shrink_left_panel(); KeyAction::Continue }
        KeyCode::Char('>') => { state.grow_left_panel(); KeyAction::Continue }

        KeyCode::Char('?') => {
            state.help_scroll = 0;
            state.mode = Mode::HelpOverlay;
            KeyAction::Continue
        }

        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        _ => KeyAction::Continue,
    }
}

/// Handles j / k / g / G and the Ctrl page keys.
///
/// Returns `None` when the key is not a scroll key.
fn handle_scroll_key(key: KeyEvent, state: &mut AppState) -> Option<KeyAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => state.scroll_down(1),
        KeyCode::Char('k') | KeyCode::Up => state.scroll_up(1),
        KeyCode::Char('g') | KeyCode::Home => state.scroll_top(),
        KeyCode::Char('G') | KeyCode::End => state.scroll_bottom(),
        KeyCode::Char('d') if ctrl => state.half_page_down(),
        KeyCode::Char('u') if ctrl => state.half_page_up(),
        KeyCode::Char('f') if ctrl => state.full_page_down(),
        KeyCode::Char('b') if ctrl => state.full_page_up(),
        KeyCode::PageDown => state.full_page_down(),
        KeyCode::PageUp => state.full_page_up(),
        _ => return None,
    }
    Some(KeyAction::Continue)
}

// ---------------------------------------------------------------------------
// HelpOverlay mode
// ---------------------------------------------------------------------------

/// `?`, `Esc` and `q` close the overlay; j / k / g / G scroll it.
fn handle_help(key: KeyEvent, state: &mut AppState) -> KeyAction {
    match key.code {
        KeyCode::Char('j') => state.help_scroll = state.help_scroll.saturating_add(1),
        KeyCode::Char('k') => state.help_scroll = state.help_scroll.saturating_sub(1),
        KeyCode::Char('g') => state.help_scroll = 0,
        KeyCode::Char('G') => state.help_scroll = u16::MAX,
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => state.mode = Mode::Normal,
        _ => {}
    }
    KeyAction::Continue
}

// ---------------------------------------------------------------------------
// Mouse events
// ---------------------------------------------------------------------------

/// Handles the scroll wheel.
///
/// Wheel events over either panel scroll both panels; in HelpOverlay mode
/// they scroll the overlay instead. Other mouse events are ignored.
pub fn handle_mouse(mouse: MouseEvent, state: &mut AppState) -> KeyAction {
    let help = state.mode == Mode::HelpOverlay;
    match mouse.kind {
        MouseEventKind::ScrollUp if help => {
            state.help_scroll = state.help_scroll.saturating_sub(WHEEL_STEP);
        }
        MouseEventKind::ScrollDown if help => {
            state.help_scroll = state.help_scroll.saturating_add(WHEEL_STEP);
        }
        MouseEventKind::ScrollUp if over_panels(mouse, state) => state.scroll_up(WHEEL_STEP),
        MouseEventKind::ScrollDown if over_panels(mouse, state) => state.scroll_down(WHEEL_STEP),
        _ => {}
    }
    KeyAction::Continue
}

fn over_panels(mouse: MouseEvent, state: &AppState) -> bool {
    let pos = ratatui::layout::Position { x: mouse.column, y: mouse.row };
    state.panel_rects.iter().any(|rect| rect.contains(pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use ratatui::text::Line;
    use sidediff_core::{TextDiffVisualizer, VisualizerConfig};

    fn state() -> AppState {
        let rows = TextDiffVisualizer::new(VisualizerConfig::default())
            .unwrap()
            .compare("a\nb\nc\nd\ne", "a\nb\nx\nd\ne")
            .unwrap();
        let lines: Vec<Line<'static>> = rows.iter().map(|_| Line::raw("")).collect();
        let mut state = AppState::new("left", "right", &rows, lines.clone(), lines);
        state.panel_rects = [Rect::new(0, 0, 40, 20), Rect::new(39, 0, 41, 20)];
        state
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn wheel(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent { kind, column, row: 5, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn q_and_esc_quit_from_normal_mode() {
        let mut s = state();
        assert_eq!(handle_key(key(KeyCode::Char('q')), &mut s), KeyAction::Quit);
        assert_eq!(handle_key(key(KeyCode::Esc), &mut s), KeyAction::Quit);
    }

    #[test]
    fn help_overlay_swallows_quit_keys() {
        let mut s = state();
        handle_key(key(KeyCode::Char('?')), &mut s);
        assert_eq!(s.mode, Mode::HelpOverlay);

        assert_eq!(handle_key(key(KeyCode::Char('j')), &mut s), KeyAction::Continue);
        assert_eq!(s.help_scroll, 1);
        assert_eq!(s.scroll, 0);

        assert_eq!(handle_key(key(KeyCode::Esc), &mut s), KeyAction::Continue);
        assert_eq!(s.mode, Mode::Normal);
    }

    #[test]
    fn bracket_keys_jump_between_changes() {
        let mut s = state();
        handle_key(key(KeyCode::Char(']')), &mut s);
        assert_eq!(s.scroll, 2);
        assert_eq!(s.change_cursor, Some(0));
        handle_key(key(KeyCode::Char('g')), &mut s);
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn ctrl_page_keys_use_viewport_height() {
        let mut s = state();
        s.viewport_height = 4;
        let mut ctrl_d = key(KeyCode::Char('d'));
        ctrl_d.modifiers = KeyModifiers::CONTROL;
        handle_key(ctrl_d, &mut s);
        assert_eq!(s.scroll, 2);
    }

    #[test]
    fn wheel_scrolls_only_over_panels() {
        let mut s = state();
        handle_mouse(wheel(MouseEventKind::ScrollDown, 10), &mut s);
        assert_eq!(s.scroll, 3);
        handle_mouse(wheel(MouseEventKind::ScrollUp, 200), &mut s);
        assert_eq!(s.scroll, 3);
    }
}
