//! Core domain types

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Sections
// ─────────────────────────────────────────────────────────────────────────────

/// The dashboard section currently on screen.
///
/// Exactly one section is active at a time. Switching is unconditional and
/// has no side effect beyond re-rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// Responsibility areas (static cards)
    #[default]
    Activities,

    /// PO lifecycle timeline (static)
    Workplan,

    /// Controls matrix (static table)
    Controls,

    /// Generated KPI cards (dynamic)
    Kpis,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::Activities,
        Section::Workplan,
        Section::Controls,
        Section::Kpis,
    ];

    /// Sidebar label for this section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Activities => "Responsibility Areas",
            Section::Workplan => "PO Lifecycle",
            Section::Controls => "Controls Matrix",
            Section::Kpis => "Generated KPIs",
        }
    }

    /// Position within [`Section::ALL`].
    pub fn index(&self) -> usize {
        Section::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The section after this one, wrapping around.
    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    /// The section before this one, wrapping around.
    pub fn prev(&self) -> Section {
        Section::ALL[(self.index() + Section::ALL.len() - 1) % Section::ALL.len()]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Generated KPIs
// ─────────────────────────────────────────────────────────────────────────────

/// One generated key-performance-indicator record.
///
/// All fields are opaque display strings produced by the generative service;
/// no numeric parsing or validation is performed. Every field is required:
/// a response item missing any of them fails the whole decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiItem {
    pub name: String,
    pub formula: String,
    pub target: String,
    pub category: String,
    pub action: String,
}

/// The decoded generation payload: `{ "kpis": [...] }`.
///
/// The service answers with a JSON-encoded string that decodes into this
/// shape. The `kpis` array replaces the application's KPI list wholesale,
/// in order, with no field transformation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KpiPlan {
    pub kpis: Vec<KpiItem>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Static reference content
// ─────────────────────────────────────────────────────────────────────────────

/// Impact rating on a responsibility area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Impact {
    Medium,
    High,
    Critical,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::Medium => "Medium",
            Impact::High => "High",
            Impact::Critical => "Critical",
        }
    }
}

/// One responsibility-area card.
#[derive(Debug, Clone, Copy)]
pub struct Activity {
    pub title: &'static str,
    pub description: &'static str,
    pub frequency: &'static str,
    pub impact: Impact,
}

/// One phase of the PO lifecycle timeline.
#[derive(Debug, Clone, Copy)]
pub struct TimelinePhase {
    pub phase: &'static str,
    pub status: &'static str,
    pub tasks: [&'static str; 3],
}

/// One row of the controls matrix.
#[derive(Debug, Clone, Copy)]
pub struct ControlRow {
    pub artifact: &'static str,
    pub responsibility: &'static str,
    pub indicator: &'static str,
}
