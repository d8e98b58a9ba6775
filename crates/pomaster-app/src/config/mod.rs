//! Configuration file parsing for pomaster
//!
//! Supports `~/.config/pomaster/config.toml` (or an explicit path via
//! `--config`). The API credential is never read from the file; it stays in
//! the process environment.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings};
pub use types::{GeneratorSettings, Settings, UiSettings};
