//! The non-data states of a screen: loading, error, empty and not found.

use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

/// What a screen shows instead of its rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusPanel<'a> {
    Loading(&'a str),
    /// Message plus the retry key and, on detail views, the back key.
    Error {
        message: &'a str,
        retry_key: String,
        back: Option<(String, &'a str)>,
    },
    /// Successful fetch with nothing in it.
    Empty(&'a str),
    /// Absent-but-not-failed payload: only back is offered.
    NotFound {
        label: &'a str,
        back_key: String,
        back_label: &'a str,
    },
}

impl StatusPanel<'_> {
    /// The lines shown in the panel.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let t = theme();
        match self {
            StatusPanel::Loading(label) => {
                vec![Line::from(Span::styled(label.to_string(), t.muted_style()))]
            }
            StatusPanel::Error {
                message,
                retry_key,
                back,
            } => {
                let mut lines = vec![
                    Line::from(Span::styled("Oops! Something went wrong.", t.error_style())),
                    Line::from(""),
                    Line::from(Span::styled(message.to_string(), t.text_style())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(retry_key.clone(), t.emphasis_style()),
                        Span::styled(" Try Again", t.muted_style()),
                    ]),
                ];
                if let Some((key, label)) = back {
                    lines.push(Line::from(vec![
                        Span::styled(key.clone(), t.emphasis_style()),
                        Span::styled(format!(" {}", label), t.muted_style()),
                    ]));
                }
                lines
            }
            StatusPanel::Empty(label) => {
                vec![Line::from(Span::styled(label.to_string(), t.muted_style()))]
            }
            StatusPanel::NotFound {
                label,
                back_key,
                back_label,
            } => vec![
                Line::from(Span::styled(label.to_string(), t.warning_style())),
                Line::from(""),
                Line::from(vec![
                    Span::styled(back_key.clone(), t.emphasis_style()),
                    Span::styled(format!(" {}", back_label), t.muted_style()),
                ]),
            ],
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, title: &str) -> Result<()> {
        let t = theme();
        let border = match self {
            StatusPanel::Error { .. } => t.error_style(),
            _ => t.border_style(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", title))
            .title_style(t.title_style())
            .padding(Padding::new(2, 2, 1, 1));
        let para = Paragraph::new(self.lines())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(para, area);
        Ok(())
    }
}
