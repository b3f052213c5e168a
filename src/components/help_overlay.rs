//! Help Overlay Component
//!
//! Displays the active keybindings when the user presses the help key.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Binding lines grouped by action category, one key per line.
    pub fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let mut bindings = keymap.all_bindings();
        // Group by category while keeping the order inside each group
        let order = |a: Action| match a.category() {
            "Navigation" => 0,
            "Screen" => 1,
            "Views" => 2,
            _ => 3,
        };
        bindings.sort_by_key(|b| order(b.action));

        let mut lines: Vec<Line> = vec![Line::from("")];
        let mut current_category = "";
        for binding in &bindings {
            let category = binding.action.category();
            if category != current_category {
                if !current_category.is_empty() {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!("  {} ", category),
                    t.author_style(),
                )));
                current_category = category;
            }
            lines.push(Line::from(vec![
                Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                Span::styled(binding.action.description().to_string(), t.text_style()),
            ]));
        }
        lines
    }

    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();

        let popup_width = (area.width as f32 * 0.80).min(80.0) as u16;
        let popup_height = (area.height as f32 * 0.90).min(40.0) as u16;
        let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let title = format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name());
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(inner_area);

        let bindings_paragraph = Paragraph::new(Self::binding_lines(keymap))
            .wrap(Wrap { trim: false })
            .alignment(Alignment::Left);
        frame.render_widget(bindings_paragraph, chunks[0]);

        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        let footer = Paragraph::new(footer_text)
            .style(t.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_grouped_by_category() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        let nav = text.iter().position(|l| l.trim() == "Navigation").unwrap();
        let global = text.iter().position(|l| l.trim() == "Global").unwrap();
        assert!(nav < global);
        assert!(text.iter().any(|l| l.contains("Quit")));
    }
}
