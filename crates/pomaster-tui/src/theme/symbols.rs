//! Symbol set for the TUI.
//!
//! Resolves glyphs at runtime based on the `unicode_symbols` UI setting.
//! The ASCII fallback keeps the dashboard legible on terminals without
//! full Unicode fonts.

const SPINNER_UNICODE: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const SPINNER_ASCII: [&str; 4] = ["|", "/", "-", "\\"];

/// Runtime symbol resolver.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSet {
    unicode: bool,
}

impl SymbolSet {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    /// Phase marker on the workplan timeline.
    pub fn bullet(&self) -> &'static str {
        if self.unicode {
            "\u{25cf}" // ●
        } else {
            "*"
        }
    }

    /// Task marker under a workplan phase.
    pub fn check(&self) -> &'static str {
        if self.unicode {
            "\u{2713}" // ✓
        } else {
            "+"
        }
    }

    /// Prompt marker for the active sidebar entry.
    pub fn pointer(&self) -> &'static str {
        if self.unicode {
            "\u{276f}" // ❯
        } else {
            ">"
        }
    }

    /// Text cursor in the context input.
    pub fn cursor(&self) -> &'static str {
        if self.unicode {
            "\u{2588}" // █
        } else {
            "_"
        }
    }

    /// Loading spinner frame for the given tick count.
    pub fn spinner(&self, frame: usize) -> &'static str {
        if self.unicode {
            SPINNER_UNICODE[frame % SPINNER_UNICODE.len()]
        } else {
            SPINNER_ASCII[frame % SPINNER_ASCII.len()]
        }
    }
}
