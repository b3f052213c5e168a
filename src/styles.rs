//! Theme and style system for forumdeck
//!
//! A process-wide palette (dark, light or no-color) read by every screen.

use crate::utils::text::hex_color;
use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// List selection indicator shown next to the selected row
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Global theme instance
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (`NO_COLOR=1`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Titles, active tab, focused borders
    pub primary: Color,
    /// Authors and category names
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    /// Counters, dates, hints
    pub text_muted: Color,
    pub text_emphasis: Color,

    pub border: Color,
    pub highlight_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::DarkGray,
            highlight_bg: Color::Gray,
        }
    }

    /// No-color theme: the style helpers only use modifiers in this mode
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            text_emphasis: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
        }
    }

    fn colored(&self) -> bool {
        self.theme_type != ThemeType::NoColor
    }

    pub fn title_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colored() {
            style.fg(self.primary)
        } else {
            style
        }
    }

    pub fn text_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text)
        } else {
            Style::default()
        }
    }

    pub fn muted_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text_muted)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    }

    pub fn emphasis_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.text_emphasis)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Post authors
    pub fn author_style(&self) -> Style {
        let style = Style::default().add_modifier(Modifier::BOLD);
        if self.colored() {
            style.fg(self.secondary)
        } else {
            style
        }
    }

    pub fn warning_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.warning)
        } else {
            Style::default()
        }
    }

    pub fn error_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.error).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    pub fn border_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.border)
        } else {
            Style::default()
        }
    }

    pub fn border_focused_style(&self) -> Style {
        if self.colored() {
            Style::default().fg(self.primary)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        }
    }

    /// Selected row
    pub fn highlight_style(&self) -> Style {
        if self.colored() {
            Style::default()
                .fg(self.text_emphasis)
                .bg(self.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        }
    }

    /// Color bar of a category row; falls back to the border color when
    /// the server color does not parse.
    pub fn category_style(&self, color_hex: &str) -> Style {
        if !self.colored() {
            return Style::default();
        }
        Style::default().fg(hex_color(color_hex).unwrap_or(self.border))
    }
}
