//! AI consultant panel: product-context input and generate action

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use pomaster_app::state::{AppState, Focus};

use crate::theme::{styles, symbols::SymbolSet};

/// Bottom sidebar panel holding the product-context input.
///
/// The border lights up while the input owns keyboard focus, and the
/// action line doubles as the loading indicator during a generation.
pub struct ConsultantPanel<'a> {
    state: &'a AppState,
    symbols: SymbolSet,
}

impl<'a> ConsultantPanel<'a> {
    pub fn new(state: &'a AppState, symbols: SymbolSet) -> Self {
        Self { state, symbols }
    }

    fn context_line(&self) -> Line<'static> {
        let focused = self.state.focus == Focus::ContextInput;
        let context = &self.state.product_context;

        if context.is_empty() && !focused {
            return Line::from(Span::styled(
                "Describe your product here...",
                styles::text_muted(),
            ));
        }

        let mut spans = vec![Span::styled(context.clone(), styles::text_primary())];
        if focused {
            spans.push(Span::styled(
                self.symbols.cursor().to_string(),
                styles::accent(),
            ));
        }
        Line::from(spans)
    }

    fn action_line(&self) -> Line<'static> {
        if self.state.generating {
            return Line::from(vec![
                Span::styled(
                    self.symbols.spinner(self.state.spinner_frame).to_string(),
                    styles::spinner(),
                ),
                Span::styled(" Analyzing product context...", styles::spinner()),
            ]);
        }

        if self.state.focus == Focus::ContextInput {
            return Line::from(vec![
                Span::styled("[Enter] ", styles::keybinding()),
                Span::styled("Generate  ", styles::text_muted()),
                Span::styled("[Esc] ", styles::keybinding()),
                Span::styled("Done  ", styles::text_muted()),
                Span::styled("[^U] ", styles::keybinding()),
                Span::styled("Clear", styles::text_muted()),
            ]);
        }

        if self.state.can_generate() {
            Line::from(Span::styled(
                "[Enter] Generate KPI plan",
                styles::accent_bold(),
            ))
        } else {
            Line::from(Span::styled(
                "[e] Describe your product first",
                styles::text_muted(),
            ))
        }
    }
}

impl Widget for ConsultantPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = self.state.focus == Focus::ContextInput;
        let block = styles::glass_block(focused)
            .title(Span::styled(" AI Consultant ", styles::accent_bold()));

        let lines = vec![
            Line::from(Span::styled("Your product:", styles::text_secondary())),
            self.context_line(),
            Line::raw(""),
            self.action_line(),
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
