//! PO lifecycle timeline

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use pomaster_core::TimelinePhase;

use crate::theme::{styles, symbols::SymbolSet};

/// Vertical timeline of lifecycle phases with their tasks
pub struct WorkplanTimeline<'a> {
    phases: &'a [TimelinePhase],
    symbols: SymbolSet,
}

impl<'a> WorkplanTimeline<'a> {
    pub fn new(phases: &'a [TimelinePhase], symbols: SymbolSet) -> Self {
        Self { phases, symbols }
    }
}

impl Widget for WorkplanTimeline<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = Vec::new();

        for phase in self.phases {
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", self.symbols.bullet()), styles::accent()),
                Span::styled(phase.phase, styles::text_bright()),
                Span::styled(format!("  [{}]", phase.status), styles::keybinding()),
            ]));

            for task in &phase.tasks {
                lines.push(Line::from(vec![
                    Span::styled(format!("   {} ", self.symbols.check()), styles::accent()),
                    Span::styled(*task, styles::text_secondary()),
                ]));
            }

            lines.push(Line::raw(""));
        }

        Paragraph::new(lines)
            .block(styles::glass_block(false))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pomaster_core::content;

    fn symbols() -> SymbolSet {
        SymbolSet::new(true)
    }

    #[test]
    fn test_timeline_shows_phases_in_order() {
        let mut term = TestTerminal::wide();
        term.render_widget(
            WorkplanTimeline::new(content::workplan(), symbols()),
            term.area(),
        );

        assert!(term.buffer_contains("Phase 1: Strategy & Alignment"));
        assert!(term.buffer_contains("Phase 4: Measure & Optimize"));
    }

    #[test]
    fn test_timeline_shows_tasks_and_status() {
        let mut term = TestTerminal::wide();
        term.render_widget(
            WorkplanTimeline::new(content::workplan(), symbols()),
            term.area(),
        );

        assert!(term.buffer_contains("Sprint planning"));
        assert!(term.buffer_contains("[Foundation]"));
    }
}
