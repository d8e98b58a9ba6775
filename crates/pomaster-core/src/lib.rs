//! # pomaster-core - Core Domain Types
//!
//! Foundation crate for pomaster. Provides domain types, error handling,
//! logging setup, and the static reference content shown in the dashboard.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`] - The one-of-four view selector (activities, workplan, controls, kpis)
//! - [`KpiItem`] - One generated KPI record (name, formula, target, category, action)
//! - [`KpiPlan`] - The decoded generation payload (`{ "kpis": [...] }`)
//! - [`Impact`] - Impact rating on a responsibility area
//!
//! ### Static Content (`content`)
//! - [`activities()`] - The six responsibility-area cards
//! - [`workplan()`] - The four lifecycle phases
//! - [`controls()`] - The six-row controls matrix
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pomaster_core::prelude::*;
//! ```

pub mod content;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all pomaster crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use content::{activities, controls, section_header, workplan};
pub use error::{Error, Result, ResultExt};
pub use types::{Activity, ControlRow, Impact, KpiItem, KpiPlan, Section, TimelinePhase};
