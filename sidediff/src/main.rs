//! sidediff: side-by-side line diff with intraline highlighting.
//!
//! Entry point for the `sidediff` binary. Reads the two inputs, resolves the
//! config file and flags into [`config::Settings`], runs the comparison in
//! `sidediff-core` and either prints one of the table formats to stdout or
//! opens the two-panel terminal viewer.
//!
//! # Viewer startup sequence
//!
//! 1. `install_panic_hook()` first, so a panic restores the terminal before
//!    its message prints.
//! 2. `register_sigterm()` returns the flag polled by the event loop.
//! 3. `init_tui()` enters the alternate screen and raw mode.
//! 4. The event channel is created and `spawn_event_task()` started.
//!
//! `restore_tui()` runs once after the loop, whatever ended it (quit key,
//! SIGTERM, channel close or a draw error). Errors from the loop propagate only
//! after the terminal is restored.

mod app;
mod cli;
mod config;
mod event;
mod theme;
mod tui;
mod ui;

use std::io::{Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{bail, Context};
use clap::Parser;
use sidediff_core::{render, Side, TextDiffVisualizer};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::cli::{Cli, OutputFormat};
use crate::ui::keybindings::{handle_key, handle_mouse, KeyAction};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    if cli.both_stdin() {
        bail!("only one input can be read from stdin");
    }

    let settings = config::resolve(&cli)?;
    if settings.format == OutputFormat::Tui && cli.log_file.is_none() {
        // The viewer owns the terminal; stray log lines would corrupt it.
        log::set_max_level(log::LevelFilter::Off);
    }

    let left = read_input(&cli.left)?;
    let right = read_input(&cli.right)?;
    let visualizer = TextDiffVisualizer::new(settings.visualizer)?;

    let mut out = std::io::stdout().lock();
    match settings.format {
        OutputFormat::Markdown => {
            let rows = visualizer.compare(&left, &right)?;
            write!(out, "{}", render::markdown_table(&rows, visualizer.config()))?;
        }
        OutputFormat::Html => {
            let rows = visualizer.compare(&left, &right)?;
            write!(out, "{}", render::html_table(&rows, visualizer.config()))?;
        }
        OutputFormat::Json => {
            let rows = visualizer.compare(&left, &right)?;
            serde_json::to_writer_pretty(&mut out, &rows).context("serializing rows")?;
            writeln!(out)?;
        }
        OutputFormat::Ndiff => {
            for line in visualizer.raw_diff(&left, &right) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Tui => {
            drop(out);
            let rows = visualizer.compare(&left, &right)?;
            let theme = theme::Theme::from_name(&settings.theme);
            let markup = visualizer.markup();
            let mut state = app::AppState::new(
                input_title(&cli.left),
                input_title(&cli.right),
                &rows,
                ui::diff_view::build_side_lines(&rows, markup, &theme, Side::Left),
                ui::diff_view::build_side_lines(&rows, markup, &theme, Side::Right),
            );
            return run_viewer(&mut state, &theme).await;
        }
    }
    out.flush()?;
    Ok(())
}

/// Initialises `env_logger` from `RUST_LOG` (default `warn`).
///
/// With `--log-file` the output goes to that file instead of stderr.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(path) = &cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if cli::is_stdin(path) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn input_title(path: &Path) -> String {
    if cli::is_stdin(path) {
        " stdin ".to_owned()
    } else {
        format!(" {} ", path.display())
    }
}

/// Runs the terminal viewer until the user quits or SIGTERM arrives.
async fn run_viewer(state: &mut app::AppState, theme: &theme::Theme) -> anyhow::Result<()> {
    tui::install_panic_hook();
    let term_flag = tui::register_sigterm().context("registering SIGTERM handler")?;
    let mut terminal = tui::init_tui().context("initialising terminal")?;

    let handler = event::EventHandler::new();
    event::spawn_event_task(handler.tx.clone());
    let mut rx = handler.rx;

    let result = event_loop(&mut terminal, &mut rx, &term_flag, state, theme).await;

    tui::restore_tui().context("restoring terminal")?;
    result.context("drawing viewer")
}

/// Exits only through `break` or a draw error, never mid-frame.
async fn event_loop(
    terminal: &mut tui::Tui,
    rx: &mut UnboundedReceiver<event::AppEvent>,
    term_flag: &AtomicBool,
    state: &mut app::AppState,
    theme: &theme::Theme,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            // Heartbeat so SIGTERM is seen even when no events arrive.
            _ = tokio::time::sleep(std::time::Duration::from_millis(50)) => {}
            maybe_event = rx.recv() => {
                match maybe_event {
                    Some(event::AppEvent::Render) => {
                        terminal.draw(|frame| ui::render(frame, state, theme))?;
                    }
                    Some(event::AppEvent::Key(key)) => {
                        if handle_key(key, state) == KeyAction::Quit {
                            break;
                        }
                    }
                    Some(event::AppEvent::Mouse(mouse)) => {
                        handle_mouse(mouse, state);
                    }
                    // frame.area() picks up the new size on the next Render.
                    Some(event::AppEvent::Resize(_, _)) => {}
                    None => break,
                }
            }
        }
        if term_flag.load(Ordering::Relaxed) {
            log::info!("SIGTERM received, leaving viewer");
            break;
        }
    }
    Ok(())
}
