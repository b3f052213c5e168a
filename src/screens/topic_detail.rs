//! A topic and its posts.

use super::resource::{ForumResource, ResourceScreen};
use crate::forum::models::parse_topic_detail;
use crate::forum::{paths, FetchError, TopicDetailRecord};
use crate::keymap::Keymap;
use crate::state::{NavEvent, View};
use crate::styles::theme;
use crate::utils::format_timestamp;
use crate::utils::text::wrap_text;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use serde_json::Value;

pub struct TopicThread;

pub type TopicScreen = ResourceScreen<TopicThread>;

impl ForumResource for TopicThread {
    type Params = u64;
    /// `None` is the not-found payload.
    type Data = Option<TopicDetailRecord>;

    const VIEW: View = View::TopicDetail;
    const LOADING: &'static str = "Loading topic...";
    const EMPTY: &'static str = "No posts found";
    const NOT_FOUND: &'static str = "Topic not found";
    const BACK: Option<&'static str> = Some("Back");
    const HIGHLIGHT_ROWS: bool = false;

    fn path(topic_id: &u64) -> Option<String> {
        paths::topic(*topic_id)
    }

    fn parse(body: Value) -> Result<Self::Data, FetchError> {
        parse_topic_detail(body)
    }

    fn heading(topic_id: &u64, data: Option<&Self::Data>) -> String {
        match data {
            Some(Some(record)) => record.title.clone(),
            _ => format!("Topic #{}", topic_id),
        }
    }

    fn item_count(data: &Self::Data) -> usize {
        data.as_ref().map_or(0, |record| record.posts.len())
    }

    fn is_missing(data: &Self::Data) -> bool {
        data.is_none()
    }

    fn activate(_data: &Self::Data, _index: usize) -> Option<NavEvent> {
        None
    }

    /// One item per post in server order: author line, wrapped body, gap.
    fn items(data: &Self::Data, width: u16) -> Vec<ListItem<'static>> {
        let t = theme();
        let Some(record) = data else {
            return Vec::new();
        };
        record
            .posts
            .iter()
            .map(|post| {
                let posted = post
                    .created_at
                    .as_ref()
                    .map(format_timestamp)
                    .unwrap_or_default();
                let mut lines = vec![Line::from(vec![
                    Span::styled(post.author_username.clone(), t.author_style()),
                    Span::styled(format!("  {}", posted), t.muted_style()),
                ])];
                lines.extend(
                    wrap_text(&post.body_text, width as usize)
                        .into_iter()
                        .map(|line| Line::from(Span::styled(line, t.text_style()))),
                );
                lines.push(Line::from(""));
                ListItem::new(lines)
            })
            .collect()
    }

    fn footer(keymap: &Keymap) -> String {
        keymap.footer_reader()
    }
}
