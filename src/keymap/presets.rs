//! Built-in keymaps.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl-style
    Vim,
    /// Ctrl+N/P-style
    Emacs,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let specific: &[(&str, Action)] = match self {
            KeymapPreset::Standard => &[
                ("up", Action::MoveUp),
                ("down", Action::MoveDown),
                ("pageup", Action::PageUp),
                ("pagedown", Action::PageDown),
                ("home", Action::GoToTop),
                ("end", Action::GoToEnd),
                ("enter", Action::Confirm),
                ("esc", Action::Back),
                ("backspace", Action::Back),
            ],
            KeymapPreset::Vim => &[
                ("k", Action::MoveUp),
                ("up", Action::MoveUp),
                ("j", Action::MoveDown),
                ("down", Action::MoveDown),
                ("ctrl+u", Action::PageUp),
                ("ctrl+d", Action::PageDown),
                ("g", Action::GoToTop),
                ("shift+g", Action::GoToEnd),
                ("l", Action::Confirm),
                ("enter", Action::Confirm),
                ("h", Action::Back),
                ("esc", Action::Back),
            ],
            KeymapPreset::Emacs => &[
                ("ctrl+p", Action::MoveUp),
                ("up", Action::MoveUp),
                ("ctrl+n", Action::MoveDown),
                ("down", Action::MoveDown),
                ("alt+v", Action::PageUp),
                ("ctrl+v", Action::PageDown),
                ("alt+<", Action::GoToTop),
                ("alt+>", Action::GoToEnd),
                ("enter", Action::Confirm),
                ("ctrl+g", Action::Back),
                ("esc", Action::Back),
            ],
        };

        // Shared by every preset
        let common: &[(&str, Action)] = &[
            ("r", Action::Retry),
            ("1", Action::ShowLatest),
            ("2", Action::ShowCategories),
            ("tab", Action::NextTab),
            ("q", Action::Quit),
            ("ctrl+c", Action::Quit),
            ("?", Action::Help),
        ];

        specific
            .iter()
            .chain(common)
            .map(|(key, action)| KeyBinding::new(key, *action))
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}
