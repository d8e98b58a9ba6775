//! pomaster-tui - Terminal UI for the Product Owner dashboard
//!
//! This crate provides the ratatui-based terminal interface. It renders the
//! pomaster-app state, polls terminal events, and spawns the background KPI
//! generation tasks dispatched by the update loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
