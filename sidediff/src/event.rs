//! Event bus for the sidediff viewer.
//!
//! Terminal input and the render timer are normalised into [`AppEvent`] and
//! sent over a tokio unbounded MPSC channel read by the main loop. The render
//! interval is 33 ms (about 30 FPS).

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::time::interval;

/// All events the viewer can receive.
#[derive(Debug)]
pub enum AppEvent {
    /// A key press (`KeyEventKind::Press` only; release and repeat are dropped
    /// so Windows does not double-fire).
    Key(KeyEvent),
    /// A mouse event (click, wheel).
    Mouse(MouseEvent),
    /// Terminal was resized to (columns, rows).
    Resize(u16, u16),
    /// Render tick, triggers one `terminal.draw()`.
    Render,
}

/// Sender and receiver ends of the event channel.
pub struct EventHandler {
    /// Send half, handed to the event task.
    pub tx: mpsc::UnboundedSender<AppEvent>,
    /// Receive half, owned by the main loop.
    pub rx: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Creates a handler with a fresh unbounded channel.
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawns the task that feeds terminal input and render ticks into `tx`.
///
/// The task ends when the stream of terminal events ends or the receiver is
/// dropped. `reader.next().fuse()` keeps `select!` from polling a finished
/// future.
pub fn spawn_event_task(tx: mpsc::UnboundedSender<AppEvent>) {
    tokio::spawn(async move {
        let mut render_interval = interval(Duration::from_millis(33));
        let mut reader = EventStream::new();

        loop {
            let render_tick = render_interval.tick();
            let crossterm_event = reader.next().fuse();

            let sent = tokio::select! {
                _ = render_tick => tx.send(AppEvent::Render),
                maybe_event = crossterm_event => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        tx.send(AppEvent::Key(key))
                    }
                    Some(Ok(Event::Resize(w, h))) => tx.send(AppEvent::Resize(w, h)),
                    Some(Ok(Event::Mouse(mouse))) => tx.send(AppEvent::Mouse(mouse)),
                    Some(Ok(_)) => Ok(()),
                    Some(Err(e)) => {
                        log::warn!("terminal event stream error: {e}");
                        Ok(())
                    }
                    None => break,
                },
            };
            if sent.is_err() {
                break;
            }
        }
    });
}
