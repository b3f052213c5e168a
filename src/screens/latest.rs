//! Latest topics across the forum.

use super::resource::{ForumResource, ResourceScreen};
use crate::forum::models::parse_latest;
use crate::forum::{paths, FetchError, TopicSummary};
use crate::state::{NavEvent, View};
use crate::styles::theme;
use crate::utils::text::format_date;
use crate::utils::truncate;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use serde_json::Value;

pub struct LatestTopics;

pub type LatestScreen = ResourceScreen<LatestTopics>;

impl ForumResource for LatestTopics {
    type Params = ();
    type Data = Vec<TopicSummary>;

    const VIEW: View = View::Latest;
    const LOADING: &'static str = "Loading latest topics...";
    const EMPTY: &'static str = "No topics found";

    fn path(_params: &()) -> Option<String> {
        Some(paths::LATEST.to_string())
    }

    fn parse(body: Value) -> Result<Self::Data, FetchError> {
        parse_latest(body)
    }

    fn heading(_params: &(), _data: Option<&Self::Data>) -> String {
        "Latest Topics".to_string()
    }

    fn item_count(data: &Self::Data) -> usize {
        data.len()
    }

    fn activate(data: &Self::Data, index: usize) -> Option<NavEvent> {
        data.get(index).map(|topic| NavEvent::SelectTopic(topic.id))
    }

    fn items(data: &Self::Data, width: u16) -> Vec<ListItem<'static>> {
        data.iter().map(|topic| topic_row(topic, width)).collect()
    }
}

/// Two-line topic row shared with the per-category list.
pub(crate) fn topic_row(topic: &TopicSummary, width: u16) -> ListItem<'static> {
    let t = theme();
    let last_post = topic
        .last_posted_at
        .as_ref()
        .map_or_else(|| "never".to_string(), format_date);
    ListItem::new(vec![
        Line::from(Span::styled(
            truncate(&topic.title, width as usize),
            t.text_style(),
        )),
        Line::from(Span::styled(
            format!("Replies: {} • Last Post: {}", topic.reply_count, last_post),
            t.muted_style(),
        )),
    ])
}
