use crate::state::MainView;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Tabs};

/// Common header component for all screens
pub struct Header;

impl Header {
    /// Render the header.
    ///
    /// Main views get the Latest / Categories tabs; detail views only show
    /// the title. `source` names where requests are sent.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        tabs: Option<MainView>,
        source: &str,
    ) -> Result<u16> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(" forumdeck ")
            .title_style(t.title_style())
            .title_alignment(Alignment::Center)
            .padding(Padding::new(1, 1, 0, 0));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(source.len() as u16 + 1)])
            .split(inner);

        match tabs {
            Some(active) => {
                let selected = MainView::ALL
                    .iter()
                    .position(|v| *v == active)
                    .unwrap_or(0);
                let tabs = Tabs::new(vec!["1 Latest", "2 Categories"])
                    .select(selected)
                    .style(t.muted_style())
                    .highlight_style(t.title_style().add_modifier(Modifier::UNDERLINED))
                    .divider(" ");
                frame.render_widget(tabs, columns[0]);
            }
            None => {
                let heading = Paragraph::new(Line::from(Span::styled(
                    title.to_string(),
                    t.title_style(),
                )));
                frame.render_widget(heading, columns[0]);
            }
        }

        let source_para = Paragraph::new(source.to_string())
            .style(t.muted_style())
            .alignment(Alignment::Right);
        frame.render_widget(source_para, columns[1]);

        Ok(area.height)
    }
}
