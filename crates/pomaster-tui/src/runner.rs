//! Main TUI runner - entry point and event loop
//!
//! Lifecycle:
//! - `run`: builds the generation client, initializes the terminal, and
//!   enters the loop
//! - `run_loop`: drains background-task messages, renders, then polls the
//!   terminal
//! - `spawn_generation`: one background task per dispatched generation,
//!   sending exactly one completion message back

use tokio::sync::mpsc;

use pomaster_app::handler::{Task, UpdateAction};
use pomaster_app::message::Message;
use pomaster_app::state::AppState;
use pomaster_app::{update, Settings};
use pomaster_core::prelude::*;
use pomaster_gemini::GeminiClient;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits.
///
/// The API credential is resolved before the terminal enters raw mode so a
/// missing `GEMINI_API_KEY` fails with a readable message instead of a
/// garbled screen.
pub async fn run(settings: Settings, initial_context: Option<String>) -> Result<()> {
    terminal::install_panic_hook();

    let client = GeminiClient::from_env(
        settings.generator.model.clone(),
        settings.generator.base_url.clone(),
        settings.generator.kpi_count,
    )
    .map_err(|_| Error::missing_credential(pomaster_gemini::API_KEY_VAR))?;

    let mut term = ratatui::init();

    let mut state = AppState::with_settings(settings);
    if let Some(context) = initial_context {
        state.product_context = context;
    }

    // Unified message channel for background task completions
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    let result = run_loop(&mut term, &mut state, msg_rx, &msg_tx, &client);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    client: &GeminiClient,
) -> Result<()> {
    while !state.should_quit() {
        // Process completions from background tasks (non-blocking)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, msg_tx, client);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, msg_tx, client);
        }
    }

    Ok(())
}

/// Process a message through the TEA update function, following any
/// follow-up messages and dispatching requested actions.
fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    client: &GeminiClient,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, client);
        }

        msg = result.message;
    }
}

/// Dispatch an update action onto the tokio runtime
fn handle_action(action: UpdateAction, msg_tx: &mpsc::Sender<Message>, client: &GeminiClient) {
    match action {
        UpdateAction::SpawnTask(Task::GenerateKpis { context }) => {
            spawn_generation(context, msg_tx.clone(), client.clone());
        }
    }
}

/// Spawn one KPI generation round trip.
///
/// The task sends exactly one completion message on every path, success or
/// failure. The update handlers rely on that to clear the in-flight flag.
fn spawn_generation(context: String, msg_tx: mpsc::Sender<Message>, client: GeminiClient) {
    tokio::spawn(async move {
        let message = match client.generate_kpis(&context).await {
            Ok(kpis) => Message::KpisGenerated { kpis },
            Err(e) => Message::KpiGenerationFailed {
                error: e.to_string(),
            },
        };

        if msg_tx.send(message).await.is_err() {
            warn!("Message channel closed before generation completed");
        }
    });
}
