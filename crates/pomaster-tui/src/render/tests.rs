//! Full-screen rendering tests

use super::view;
use crate::test_utils::{test_kpi, TestTerminal};
use pomaster_app::state::AppState;
use pomaster_core::Section;

#[test]
fn test_initial_screen_shows_activities() {
    let mut term = TestTerminal::wide();
    let state = AppState::new();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("PO Master"));
    assert!(term.buffer_contains("High-Impact Responsibilities"));
    assert!(term.buffer_contains("Strategy & Vision"));
    assert!(term.buffer_contains("AI Consultant"));
}

#[test]
fn test_sidebar_lists_every_section() {
    let mut term = TestTerminal::wide();
    let state = AppState::new();

    term.draw_with(|frame| view(frame, &state));

    for section in Section::ALL {
        assert!(term.buffer_contains(section.label()));
    }
}

#[test]
fn test_workplan_section_renders_timeline() {
    let mut term = TestTerminal::wide();
    let mut state = AppState::new();
    state.section = Section::Workplan;

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("PO Working Roadmap"));
    assert!(term.buffer_contains("Phase 1: Strategy & Alignment"));
}

#[test]
fn test_controls_section_renders_table() {
    let mut term = TestTerminal::wide();
    let mut state = AppState::new();
    state.section = Section::Controls;

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("DORA Metrics"));
}

#[test]
fn test_kpi_section_empty_state() {
    let mut term = TestTerminal::wide();
    let mut state = AppState::new();
    state.section = Section::Kpis;

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("No KPIs generated yet."));
}

#[test]
fn test_kpi_section_shows_generated_cards() {
    let mut term = TestTerminal::wide();
    let mut state = AppState::new();
    state.section = Section::Kpis;
    state.kpis = vec![test_kpi("Monthly Recurring Revenue"), test_kpi("Churn Rate")];

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Monthly Recurring Revenue"));
    assert!(term.buffer_contains("Churn Rate"));
}

#[test]
fn test_spinner_visible_while_generating() {
    let mut term = TestTerminal::wide();
    let mut state = AppState::new();
    state.product_context = "B2B delivery app".to_string();
    state.begin_generation();

    term.draw_with(|frame| view(frame, &state));

    assert!(term.buffer_contains("Analyzing product context"));
}

#[test]
fn test_view_survives_compact_terminal() {
    let mut term = TestTerminal::compact();
    let state = AppState::new();

    // Must not panic on a small screen
    term.draw_with(|frame| view(frame, &state));
}
