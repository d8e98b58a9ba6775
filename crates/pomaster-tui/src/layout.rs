//! Screen layout definitions for the TUI
//!
//! One fixed-width sidebar column (navigation on top, consultant panel at
//! the bottom) and a main column split into section header and content.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the left sidebar column, borders included.
const SIDEBAR_WIDTH: u16 = 32;

/// Height of the consultant panel at the bottom of the sidebar.
const CONSULTANT_HEIGHT: u16 = 10;

/// Height of the section header (border + title + subtitle + border).
const HEADER_HEIGHT: u16 = 4;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Section navigation list
    pub sidebar: Rect,

    /// AI consultant panel (context input + generate action)
    pub consultant: Rect,

    /// Section title and subtitle
    pub header: Rect,

    /// Active section's content (cards, timeline, or table)
    pub content: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let columns = Layout::horizontal([
        Constraint::Length(SIDEBAR_WIDTH),
        Constraint::Min(20),
    ])
    .split(area);

    let left = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(CONSULTANT_HEIGHT),
    ])
    .split(columns[0]);

    let right = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
    ])
    .split(columns[1]);

    ScreenAreas {
        sidebar: left[0],
        consultant: left[1],
        header: right[0],
        content: right[1],
    }
}
