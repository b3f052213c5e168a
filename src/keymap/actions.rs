//! Semantic actions the reader responds to.

use serde::{Deserialize, Serialize};

/// Every action a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Moving through lists and posts
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,

    /// Open the selected topic or category
    Confirm,
    /// Leave a detail view
    Back,
    /// Re-issue the current screen's request
    Retry,

    // Main views
    ShowLatest,
    ShowCategories,
    /// Toggle between the two main views
    NextTab,

    Quit,
    Help,
}

impl Action {
    /// Human-readable description shown in the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open selection",
            Action::Back => "Go back",
            Action::Retry => "Retry / refresh",
            Action::ShowLatest => "Latest topics",
            Action::ShowCategories => "Categories",
            Action::NextTab => "Switch view",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Group heading in the help overlay
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",
            Action::Confirm | Action::Back | Action::Retry => "Screen",
            Action::ShowLatest | Action::ShowCategories | Action::NextTab => "Views",
            Action::Quit | Action::Help => "Global",
        }
    }
}
