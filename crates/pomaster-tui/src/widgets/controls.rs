//! Strategic controls matrix

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Row, Table, Widget},
};

use pomaster_core::ControlRow;

use crate::theme::styles;

/// Three-column table of control artifacts
pub struct ControlsTable<'a> {
    rows: &'a [ControlRow],
}

impl<'a> ControlsTable<'a> {
    pub fn new(rows: &'a [ControlRow]) -> Self {
        Self { rows }
    }
}

impl Widget for ControlsTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(["Artifact", "What it controls", "Indicator"])
            .style(styles::accent_bold())
            .bottom_margin(1);

        let rows = self.rows.iter().map(|row| {
            Row::new([row.artifact, row.responsibility, row.indicator])
                .style(styles::text_secondary())
        });

        Table::new(
            rows,
            [
                Constraint::Percentage(32),
                Constraint::Percentage(43),
                Constraint::Percentage(25),
            ],
        )
        .header(header)
        .column_spacing(1)
        .block(styles::glass_block(false))
        .render(area, buf);
    }
}
