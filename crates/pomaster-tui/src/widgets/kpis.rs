//! Generated KPI cards

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pomaster_core::KpiItem;

use crate::theme::styles;

/// Grid of generated KPI cards, or the empty-state hint before the
/// first successful generation.
pub struct KpiCards<'a> {
    kpis: &'a [KpiItem],
}

impl<'a> KpiCards<'a> {
    pub fn new(kpis: &'a [KpiItem]) -> Self {
        Self { kpis }
    }

    fn render_empty_state(area: Rect, buf: &mut Buffer) {
        let pad = (area.height / 2).saturating_sub(2) as usize;
        let mut lines: Vec<Line> = vec![Line::raw(""); pad];
        lines.push(Line::from(Span::styled(
            "No KPIs generated yet.",
            styles::text_primary(),
        )));
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Describe your product in the AI Consultant panel,",
            styles::text_muted(),
        )));
        lines.push(Line::from(Span::styled(
            "then press [Enter] to generate a metrics plan.",
            styles::text_muted(),
        )));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(styles::glass_block(false))
            .render(area, buf);
    }

    fn render_card(kpi: &KpiItem, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Span::styled(kpi.name.clone(), styles::text_bright()));

        let lines = vec![
            Line::from(Span::styled(
                kpi.category.clone(),
                styles::category_tag(&kpi.category),
            )),
            Line::from(Span::styled(kpi.formula.clone(), styles::text_secondary())),
            Line::from(vec![
                Span::styled("Target: ", styles::text_muted()),
                Span::styled(kpi.target.clone(), styles::accent_bold()),
            ]),
            Line::from(vec![
                Span::styled("Next: ", styles::text_muted()),
                Span::styled(kpi.action.clone(), styles::text_secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

impl Widget for KpiCards<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        if self.kpis.is_empty() {
            Self::render_empty_state(area, buf);
            return;
        }

        let rows = self.kpis.len().div_ceil(2) as u32;
        let row_areas =
            Layout::vertical(vec![Constraint::Ratio(1, rows); rows as usize]).split(area);

        for (row, pair) in self.kpis.chunks(2).enumerate() {
            let columns = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(row_areas[row]);
            for (col, kpi) in pair.iter().enumerate() {
                Self::render_card(kpi, columns[col], buf);
            }
        }
    }
}
