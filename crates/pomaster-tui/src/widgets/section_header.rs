//! Section title bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pomaster_core::{content, Section};

use crate::theme::styles;

/// Header above the content area: section title plus one-line subtitle
pub struct SectionHeader {
    section: Section,
}

impl SectionHeader {
    pub fn new(section: Section) -> Self {
        Self { section }
    }
}

impl Widget for SectionHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, subtitle) = content::section_header(self.section);

        let lines = vec![
            Line::from(Span::styled(title, styles::text_bright())),
            Line::from(Span::styled(subtitle, styles::text_secondary())),
        ];

        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}
