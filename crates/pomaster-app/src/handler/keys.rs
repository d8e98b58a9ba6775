//! Key event handlers for the two focus modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};
use pomaster_core::Section;

/// Convert key events to messages based on current focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.focus {
        Focus::Nav => handle_key_nav(key),
        Focus::ContextInput => handle_key_context_input(key),
    }
}

/// Handle key events while the sidebar navigation has focus
fn handle_key_nav(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Jump straight to a section
        InputKey::Char('1') => Some(Message::SelectSection(Section::Activities)),
        InputKey::Char('2') => Some(Message::SelectSection(Section::Workplan)),
        InputKey::Char('3') => Some(Message::SelectSection(Section::Controls)),
        InputKey::Char('4') => Some(Message::SelectSection(Section::Kpis)),

        // Cycle sections
        InputKey::Tab | InputKey::Down | InputKey::Char('j') => Some(Message::NextSection),
        InputKey::BackTab | InputKey::Up | InputKey::Char('k') => Some(Message::PrevSection),

        // Consultant panel
        InputKey::Char('e') | InputKey::Char('i') => Some(Message::FocusContext),
        InputKey::Char('g') | InputKey::Enter => Some(Message::GenerateKpis),

        _ => None,
    }
}

/// Handle key events while the product-context input has focus
fn handle_key_context_input(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Tab => Some(Message::BlurContext),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Submit: dispatch a generation (guarded in update())
        InputKey::Enter => Some(Message::GenerateKpis),

        InputKey::Backspace => Some(Message::ContextBackspace),
        InputKey::CharCtrl('u') => Some(Message::ContextClear),

        InputKey::Char(c) => Some(Message::ContextInput { c }),

        _ => None,
    }
}
