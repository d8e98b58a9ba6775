//! Responsibility-area cards

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pomaster_core::Activity;

use crate::theme::styles;

/// Two-column grid of responsibility-area cards
pub struct ActivityCards<'a> {
    activities: &'a [Activity],
}

impl<'a> ActivityCards<'a> {
    pub fn new(activities: &'a [Activity]) -> Self {
        Self { activities }
    }

    fn render_card(activity: &Activity, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(activity.title, styles::text_bright()));

        let lines = vec![
            Line::from(vec![
                Span::styled(activity.impact.label(), styles::impact_tag(activity.impact)),
                Span::styled(format!("  {}", activity.frequency), styles::text_muted()),
            ]),
            Line::from(Span::styled(activity.description, styles::text_secondary())),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for ActivityCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.activities.is_empty() || area.height == 0 {
            return;
        }

        let rows = self.activities.len().div_ceil(2) as u32;
        let row_areas =
            Layout::vertical(vec![Constraint::Ratio(1, rows); rows as usize]).split(area);

        for (row, pair) in self.activities.chunks(2).enumerate() {
            let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(row_areas[row]);
            for (col, activity) in pair.iter().enumerate() {
                Self::render_card(activity, columns[col], buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use pomaster_core::content;

    #[test]
    fn test_all_activity_titles_render() {
        let mut term = TestTerminal::wide();
        term.render_widget(ActivityCards::new(content::activities()), term.area());

        assert!(term.buffer_contains("Strategy & Vision"));
        assert!(term.buffer_contains("Risk Management"));
    }

    #[test]
    fn test_cards_show_impact_and_frequency() {
        let mut term = TestTerminal::wide();
        term.render_widget(ActivityCards::new(content::activities()), term.area());

        assert!(term.buffer_contains("Critical"));
        assert!(term.buffer_contains("Quarterly"));
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let mut term = TestTerminal::new();
        term.render_widget(ActivityCards::new(&[]), term.area());

        assert!(term.content().trim().is_empty());
    }
}
