//! Application state (Model in TEA pattern)

use pomaster_core::{KpiItem, Section};

use crate::config::Settings;

/// Which part of the UI owns keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Section navigation (sidebar)
    #[default]
    Nav,

    /// The product-context input in the consultant panel
    ContextInput,
}

/// Top-level application state.
///
/// All session state lives here and is mutated only by the update handlers
/// on the main loop thread. Nothing is persisted: the state is created empty
/// at startup and discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Active dashboard section. Initial: activities.
    pub section: Section,

    /// User-entered product description. Never reset; survives generations.
    pub product_context: String,

    /// Generated KPI records. Only ever replaced wholesale, and only by a
    /// successful generation.
    pub kpis: Vec<KpiItem>,

    /// True strictly while a generation round trip is in flight. Gates the
    /// generate action and drives the loading spinner.
    pub generating: bool,

    /// Keyboard focus
    pub focus: Focus,

    /// Loading spinner animation frame, advanced on Tick while generating
    pub spinner_frame: usize,

    /// Loaded settings
    pub settings: Settings,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Whether the main loop should exit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Unconditionally make `section` the active one.
    pub fn select_section(&mut self, section: Section) {
        self.section = section;
    }

    /// Whether a generation may be dispatched right now.
    ///
    /// Explicit guard: one call in flight at a time, and only for a
    /// non-empty (non-whitespace) product context.
    pub fn can_generate(&self) -> bool {
        !self.generating && !self.product_context.trim().is_empty()
    }

    /// Mark a generation as in flight.
    pub fn begin_generation(&mut self) {
        self.generating = true;
        self.spinner_frame = 0;
    }

    /// Apply a successful generation: replace the KPI list wholesale and
    /// switch to the KPIs section.
    pub fn complete_generation(&mut self, kpis: Vec<KpiItem>) {
        self.kpis = kpis;
        self.section = Section::Kpis;
        self.generating = false;
    }

    /// Clear the in-flight flag after a failed generation. KPI list and
    /// section are deliberately untouched.
    pub fn abort_generation(&mut self) {
        self.generating = false;
    }

    /// Advance the loading spinner one frame.
    pub fn tick_spinner(&mut self) {
        if self.generating {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}
