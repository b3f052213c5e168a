//! Key strings ("ctrl+d", "shift+g", "?") and their crossterm equivalents.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// One key string bound to one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
}

/// A key string resolved to crossterm terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys: (accepted spellings, code, display label)
const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["up"], KeyCode::Up, "↑"),
    (&["down"], KeyCode::Down, "↓"),
    (&["left"], KeyCode::Left, "←"),
    (&["right"], KeyCode::Right, "→"),
    (&["home"], KeyCode::Home, "Home"),
    (&["end"], KeyCode::End, "End"),
    (&["pageup", "pgup"], KeyCode::PageUp, "PgUp"),
    (&["pagedown", "pgdn"], KeyCode::PageDown, "PgDn"),
    (&["enter", "return"], KeyCode::Enter, "Enter"),
    (&["esc", "escape"], KeyCode::Esc, "Esc"),
    (&["space"], KeyCode::Char(' '), "Space"),
    (&["tab"], KeyCode::Tab, "Tab"),
    (&["backtab"], KeyCode::BackTab, "Shift+Tab"),
    (&["backspace", "bs"], KeyCode::Backspace, "Backspace"),
];

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Shift is ignored for printable characters: terminals report `?` and
    /// `G` with the shift modifier already applied to the character.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        let Ok(parsed) = parse_key_string(&self.key) else {
            return false;
        };
        match (parsed.code, code) {
            (KeyCode::Char(want), KeyCode::Char(got)) => {
                want == got
                    && parsed.modifiers.difference(KeyModifiers::SHIFT)
                        == modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => parsed.code == code && parsed.modifiers == modifiers,
        }
    }

    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Parse "ctrl+shift+x" style strings.
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let lowered = key.trim().to_lowercase();
    let mut parts: Vec<&str> = lowered.split('+').map(str::trim).collect();
    // "ctrl++" binds the plus key itself
    if lowered.ends_with("++") || lowered == "+" {
        parts.retain(|p| !p.is_empty());
        parts.push("+");
    }
    let Some((last, mods)) = parts.split_last() else {
        return Err(format!("Empty key: {:?}", key));
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods {
        modifiers |= match *part {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = if let Some((_, code, _)) = NAMED_KEYS.iter().find(|(names, _, _)| names.contains(last)) {
        *code
    } else if let Some(n) = last.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
        KeyCode::F(n)
    } else {
        let mut chars = last.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if modifiers.contains(KeyModifiers::SHIFT) => {
                KeyCode::Char(c.to_ascii_uppercase())
            }
            (Some(c), None) => KeyCode::Char(c),
            _ => return Err(format!("Unknown key: {}", last)),
        }
    };

    Ok(ParsedKey { code, modifiers })
}

/// Display form: "ctrl+d" -> "Ctrl+D", "up" -> "↑".
pub fn format_key_display(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split('+')
        .map(|part| match part {
            "ctrl" | "control" => "Ctrl".to_string(),
            "alt" | "option" => "Alt".to_string(),
            "shift" => "Shift".to_string(),
            other => NAMED_KEYS
                .iter()
                .find(|(names, _, _)| names.contains(&other))
                .map(|(_, _, label)| (*label).to_string())
                .unwrap_or_else(|| other.to_uppercase()),
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_char_keys() {
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("pgdn").unwrap().code, KeyCode::PageDown);
        assert_eq!(parse_key_string("r").unwrap().code, KeyCode::Char('r'));
        assert_eq!(parse_key_string("f5").unwrap().code, KeyCode::F(5));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+d").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('d'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);

        let parsed = parse_key_string("shift+g").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('G'));
        assert_eq!(parsed.modifiers, KeyModifiers::SHIFT);

        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("banana").is_err());
    }

    #[test]
    fn test_shift_is_ignored_for_characters() {
        let help = KeyBinding::new("?", Action::Help);
        assert!(help.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(help.matches(KeyCode::Char('?'), KeyModifiers::NONE));

        let end = KeyBinding::new("shift+g", Action::GoToEnd);
        assert!(end.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(!end.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_must_match() {
        let binding = KeyBinding::new("ctrl+d", Action::PageDown);
        assert!(binding.matches(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('d'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+d"), "Ctrl+D");
        assert_eq!(format_key_display("down"), "↓");
        assert_eq!(format_key_display("esc"), "Esc");
        assert_eq!(format_key_display("?"), "?");
    }
}
