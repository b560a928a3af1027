mod app;
mod config;
mod content;
mod logging;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging).context("Failed to set up session logging")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "session aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let tick_rate = Duration::from_millis(cfg.ui.tick_rate_ms);

    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::error!(error = %e, "terminal input failed");
                    let _ = term_tx.send(AppEvent::InputClosed);
                    break;
                }
                None => {
                    let _ = term_tx.send(AppEvent::InputClosed);
                    break;
                }
            }
        }
    });

    // Spawn animation tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial render, then the one-shot post-mount effect
    let area = terminal.draw(|f| ui::render(f, &state))?.area;
    state.viewport = area;
    state.dirty = false;
    let _ = event_tx.send(AppEvent::Mounted);

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::Quit => state.should_quit = true,
                Action::Bell => {
                    let _ = io::stdout().write_all(b"\x07");
                    let _ = io::stdout().flush();
                }
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            let area = terminal.draw(|f| ui::render(f, &state))?.area;
            state.viewport = area;
            state.dirty = false;
        }
    }

    Ok(())
}
