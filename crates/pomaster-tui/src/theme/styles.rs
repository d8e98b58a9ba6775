//! Semantic style builders for the dashboard theme.

use pomaster_core::Impact;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the selected sidebar entry
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Tag style for an activity's impact rating
pub fn impact_tag(impact: Impact) -> Style {
    let color = match impact {
        Impact::Medium => palette::STATUS_YELLOW,
        Impact::High => palette::STATUS_BLUE,
        Impact::Critical => palette::STATUS_RED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Tag style for a generated KPI's category
pub fn category_tag(category: &str) -> Style {
    let color = match category.to_ascii_lowercase().as_str() {
        "business" => palette::STATUS_GREEN,
        "product" => palette::STATUS_BLUE,
        "user" => palette::STATUS_MAGENTA,
        _ => palette::ACCENT,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Spinner style while a generation is in flight
pub fn spinner() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}
