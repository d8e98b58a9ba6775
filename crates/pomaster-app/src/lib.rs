//! pomaster-app - Application state and orchestration for pomaster
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the [`AppState`] model, the [`Message`] vocabulary, and the
//! pure [`handler::update`] dispatch function. It also owns configuration
//! loading. Rendering and IO live in pomaster-tui.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use config::{load_settings, GeneratorSettings, Settings, UiSettings};
pub use handler::{update, Task, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Focus};
