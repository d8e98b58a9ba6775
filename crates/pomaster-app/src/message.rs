//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use pomaster_core::{KpiItem, Section};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (loading spinner)
    Tick,

    /// Quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Make a section the active one, unconditionally
    SelectSection(Section),
    /// Cycle to the next section
    NextSection,
    /// Cycle to the previous section
    PrevSection,

    // ─────────────────────────────────────────────────────────
    // Product Context Editing
    // ─────────────────────────────────────────────────────────
    /// Move focus into the product-context input
    FocusContext,
    /// Leave the product-context input, back to section navigation
    BlurContext,
    /// Append a character to the product context
    ContextInput { c: char },
    /// Delete the last character of the product context
    ContextBackspace,
    /// Clear the product context entirely
    ContextClear,

    // ─────────────────────────────────────────────────────────
    // KPI Generation
    // ─────────────────────────────────────────────────────────
    /// Request a KPI generation for the current product context.
    /// Ignored while a generation is already in flight or when the
    /// context is empty.
    GenerateKpis,

    /// A generation completed successfully (from background task)
    KpisGenerated { kpis: Vec<KpiItem> },

    /// A generation failed (from background task). The error is logged;
    /// KPI list and section stay untouched.
    KpiGenerationFailed { error: String },
}
