//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;

use mdeck_app::config::Settings;
use mdeck_app::{AppState, Message};
use mdeck_client::{DiagnosticBackend, HttpBackend};
use mdeck_core::prelude::*;

use crate::{event, process, render, terminal};

/// Run the TUI application against the configured backend.
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let backend = HttpBackend::new(&settings.backend.url, settings.backend.timeout_secs)?;
    info!("backend at {}", backend.base());

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Startup health probe; the header shows "probing" until it lands.
    {
        let backend = backend.clone();
        let tx = msg_tx.clone();
        tokio::spawn(async move {
            let online = backend.health().await;
            let _ = tx.send(Message::HealthProbed { online }).await;
        });
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &backend);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    backend: &HttpBackend,
) -> Result<()> {
    while !state.should_quit() {
        // Drain completions from background tasks (non-blocking).
        while let Ok(message) = msg_rx.try_recv() {
            process::process_message(state, message, &msg_tx, backend);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        // Terminal events (50ms poll; timeout yields a Tick).
        if let Some(message) = event::poll()? {
            process::process_message(state, message, &msg_tx, backend);
        }
    }

    Ok(())
}
