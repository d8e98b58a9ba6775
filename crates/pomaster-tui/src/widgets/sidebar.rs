//! Section navigation sidebar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pomaster_app::state::{AppState, Focus};
use pomaster_core::Section;

use crate::theme::{styles, symbols::SymbolSet};

/// Sidebar with the four section entries and global key hints
pub struct Sidebar<'a> {
    state: &'a AppState,
    symbols: SymbolSet,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState, symbols: SymbolSet) -> Self {
        Self { state, symbols }
    }

    fn nav_line(&self, section: Section) -> Line<'static> {
        let active = self.state.section == section;
        let marker = if active { self.symbols.pointer() } else { " " };

        let label_style = if active {
            styles::selected_highlight()
        } else {
            styles::text_secondary()
        };

        Line::from(vec![
            Span::styled(format!(" {marker} "), styles::accent()),
            Span::styled(format!("{}", section.index() + 1), styles::keybinding()),
            Span::raw(" "),
            Span::styled(section.label().to_string(), label_style),
        ])
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.state.focus == Focus::Nav)
            .title(Span::styled(" PO Master ", styles::accent_bold()));

        let mut lines: Vec<Line> = vec![Line::raw("")];
        for section in Section::ALL {
            lines.push(self.nav_line(section));
        }

        lines.push(Line::raw(""));
        for (key, action) in [
            ("j/k", "Navigate"),
            ("1-4", "Jump to section"),
            ("e", "Edit context"),
            ("g", "Generate KPIs"),
            ("q", "Quit"),
        ] {
            lines.push(Line::from(vec![
                Span::styled(format!(" [{key}] "), styles::keybinding()),
                Span::styled(action, styles::text_muted()),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
