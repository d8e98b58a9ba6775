//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, error};

use crate::message::Message;
use crate::state::{AppState, Focus};

use super::{keys::handle_key, Task, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick_spinner();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectSection(section) => {
            state.select_section(section);
            UpdateResult::none()
        }

        Message::NextSection => {
            state.select_section(state.section.next());
            UpdateResult::none()
        }

        Message::PrevSection => {
            state.select_section(state.section.prev());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Product Context Editing
        // ─────────────────────────────────────────────────────────
        Message::FocusContext => {
            state.focus = Focus::ContextInput;
            UpdateResult::none()
        }

        Message::BlurContext => {
            state.focus = Focus::Nav;
            UpdateResult::none()
        }

        Message::ContextInput { c } => {
            state.product_context.push(c);
            UpdateResult::none()
        }

        Message::ContextBackspace => {
            state.product_context.pop();
            UpdateResult::none()
        }

        Message::ContextClear => {
            state.product_context.clear();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // KPI Generation
        // ─────────────────────────────────────────────────────────
        Message::GenerateKpis => {
            // One call in flight at a time; empty context is a silent no-op.
            if !state.can_generate() {
                debug!(
                    generating = state.generating,
                    "Generation request ignored"
                );
                return UpdateResult::none();
            }

            state.begin_generation();
            UpdateResult::action(UpdateAction::SpawnTask(Task::GenerateKpis {
                context: state.product_context.clone(),
            }))
        }

        Message::KpisGenerated { kpis } => {
            state.complete_generation(kpis);
            UpdateResult::none()
        }

        Message::KpiGenerationFailed { error } => {
            // Logged only: prior results and the active section stay as-is,
            // and the loading indicator returns to idle.
            error!(%error, "KPI generation failed");
            state.abort_generation();
            UpdateResult::none()
        }
    }
}
