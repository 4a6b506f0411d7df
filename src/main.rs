//! Roster TUI - actor-based user management screen
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async calls to the user store

use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use roster_tui::app::{AppActor, AppState};
use roster_tui::config::{Cli, Config};
use roster_tui::constants::DEFAULT_LOG_FILE;
use roster_tui::messages::ui_events::{key_to_ui_event, mouse_to_ui_event};
use roster_tui::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use roster_tui::network::{HttpUserApi, NetworkActor};
use roster_tui::ui::draw_ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

/// Log to a file; the terminal belongs to the UI
fn init_logging(log_file: &Path) -> tracing_appender::non_blocking::WorkerGuard {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = log_file
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.into());

    let file_appender = tracing_appender::rolling::never(dir, name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_env("ROSTER_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    guard
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load(Cli::parse())?;
    let _log_guard = init_logging(&config.log_file);

    let api = HttpUserApi::new(config.api_url.clone(), config.request_timeout)?;
    tracing::info!(api_url = api.base_url(), "Starting");

    // Terminal setup
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(Arc::new(api), net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(AppState::new(config.toast_ttl), net_cmd_tx, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    tracing::info!("Shut down");
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        let area = terminal.draw(|f| draw_ui(f, &current_state))?.area;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            let ui_event = match event::read()? {
                Event::Key(key) => {
                    key_to_ui_event(key, current_state.modal_kind(), current_state.focused_field)
                }
                Event::Mouse(mouse) => mouse_to_ui_event(mouse, &current_state, area),
                _ => None,
            };
            if let Some(event) = ui_event {
                let quit = matches!(event, UiEvent::Quit);
                let _ = ui_tx.send(event);
                if quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}
