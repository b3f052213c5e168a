//! Keymap configuration module
//!
//! Preset keymaps (standard, vim, emacs) plus per-user overrides.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset; an overridden action loses its preset keys
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides followed by the preset bindings they do not shadow
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|b| !self.overrides.iter().any(|o| o.action == b.action)),
        );
        bindings
    }

    /// First key bound to `action`, formatted for display
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| "-".to_string())
    }

    /// Footer hint for list screens
    pub fn footer_list(&self, has_back: bool) -> String {
        let mut parts = vec![
            format!(
                "Navigate: {}/{}",
                self.key_for(Action::MoveUp),
                self.key_for(Action::MoveDown)
            ),
            format!("Open: {}", self.key_for(Action::Confirm)),
        ];
        if has_back {
            parts.push(format!("Back: {}", self.key_for(Action::Back)));
        }
        parts.push(format!("Refresh: {}", self.key_for(Action::Retry)));
        parts.push(format!("Help: {}", self.key_for(Action::Help)));
        parts.push(format!("Quit: {}", self.key_for(Action::Quit)));
        parts.join(" | ")
    }

    /// Footer hint for the post reader
    pub fn footer_reader(&self) -> String {
        format!(
            "Posts: {}/{} | Back: {} | Refresh: {} | Help: {} | Quit: {}",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown),
            self.key_for(Action::Back),
            self.key_for(Action::Retry),
            self.key_for(Action::Help),
            self.key_for(Action::Quit)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Esc, KeyModifiers::NONE),
            Some(Action::Back)
        );
    }

    #[test]
    fn test_override_shadows_preset() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("x", Action::Retry)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(Action::Retry)
        );
        // 'r' no longer retries once Retry is overridden
        assert_eq!(keymap.get_action(KeyCode::Char('r'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_footer_mentions_back_only_when_asked() {
        let keymap = Keymap::default();
        assert!(keymap.footer_list(true).contains("Back: Esc"));
        assert!(!keymap.footer_list(false).contains("Back"));
    }
}
