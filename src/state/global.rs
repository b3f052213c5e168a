//! Global application state shared across all screens.

/// State that survives screen changes.
#[derive(Debug, Clone, Default)]
pub struct GlobalState {
    /// Whether the help overlay is visible.
    pub show_help_overlay: bool,

    /// Where requests go, shown in the header (e.g. "gateway: https://...").
    pub source: String,
}

impl GlobalState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            show_help_overlay: false,
            source: source.into(),
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help_overlay = !self.show_help_overlay;
    }
}
