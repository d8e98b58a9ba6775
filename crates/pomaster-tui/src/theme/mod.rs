//! Centralized theme system for the dashboard.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `symbols` — Unicode glyphs with ASCII fallbacks

pub mod palette;
pub mod styles;
pub mod symbols;
