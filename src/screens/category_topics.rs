//! Topics of one category.

use super::latest::topic_row;
use super::resource::{ForumResource, ResourceScreen};
use crate::forum::models::{parse_category_topics, CategoryTopics as CategoryTopicList};
use crate::forum::{paths, FetchError};
use crate::state::{CategoryRef, NavEvent, View};
use crate::utils::title_case_slug;
use ratatui::widgets::ListItem;
use serde_json::Value;

pub struct CategoryTopics;

pub type CategoryTopicsScreen = ResourceScreen<CategoryTopics>;

/// Server-provided name, else the title-cased slug.
pub fn display_name(category: &CategoryRef, data: Option<&CategoryTopicList>) -> String {
    if let Some(name) = data.and_then(|d| d.name.as_deref()) {
        return name.to_string();
    }
    let name = title_case_slug(category.slug.trim());
    if name.is_empty() {
        "Category".to_string()
    } else {
        name
    }
}

impl ForumResource for CategoryTopics {
    type Params = CategoryRef;
    type Data = CategoryTopicList;

    const VIEW: View = View::CategoryDetail;
    const LOADING: &'static str = "Loading topics...";
    const EMPTY: &'static str = "No topics found in this category";
    const BACK: Option<&'static str> = Some("Back to Categories");

    fn path(params: &CategoryRef) -> Option<String> {
        paths::category_topics(&params.slug, params.id)
    }

    fn parse(body: Value) -> Result<Self::Data, FetchError> {
        parse_category_topics(body)
    }

    fn heading(params: &CategoryRef, data: Option<&Self::Data>) -> String {
        format!("Topics in: {}", display_name(params, data))
    }

    fn item_count(data: &Self::Data) -> usize {
        data.topics.len()
    }

    fn activate(data: &Self::Data, index: usize) -> Option<NavEvent> {
        data.topics
            .get(index)
            .map(|topic| NavEvent::SelectTopic(topic.id))
    }

    fn items(data: &Self::Data, width: u16) -> Vec<ListItem<'static>> {
        data.topics.iter().map(|topic| topic_row(topic, width)).collect()
    }
}
