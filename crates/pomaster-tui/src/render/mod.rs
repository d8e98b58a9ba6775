//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use pomaster_app::state::AppState;
use pomaster_core::{content, Section};

use crate::theme::{palette, symbols::SymbolSet};
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let symbols = SymbolSet::new(state.settings.ui.unicode_symbols);

    frame.render_widget(widgets::Sidebar::new(state, symbols), areas.sidebar);
    frame.render_widget(widgets::ConsultantPanel::new(state, symbols), areas.consultant);
    frame.render_widget(widgets::SectionHeader::new(state.section), areas.header);

    match state.section {
        Section::Activities => frame.render_widget(
            widgets::ActivityCards::new(content::activities()),
            areas.content,
        ),
        Section::Workplan => frame.render_widget(
            widgets::WorkplanTimeline::new(content::workplan(), symbols),
            areas.content,
        ),
        Section::Controls => frame.render_widget(
            widgets::ControlsTable::new(content::controls()),
            areas.content,
        ),
        Section::Kpis => frame.render_widget(widgets::KpiCards::new(&state.kpis), areas.content),
    }
}
