//! Discourse wire models and response validation.
//!
//! Only the fields the reader displays are modeled. Each `parse_*` function
//! checks the envelope a screen depends on and reports anything else as
//! [`FetchError::Shape`].

use super::FetchError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A forum category as listed by `categories.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Hex color without the leading `#`, e.g. `"0088CC"`.
    #[serde(rename = "color", default)]
    pub color_hex: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topic_count: u64,
    #[serde(default)]
    pub post_count: u64,
    #[serde(rename = "position", default)]
    pub sort_position: i64,
}

/// One row of a topic list (latest or per-category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub last_posted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_id: Option<u64>,
}

/// A single post inside a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    #[serde(rename = "username")]
    pub author_username: String,
    /// Server-rendered HTML (`cooked` in Discourse terms).
    #[serde(rename = "cooked", default)]
    pub rendered_html_body: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Terminal rendition of `rendered_html_body`, filled in by [`parse_topic_detail`].
    #[serde(skip)]
    pub body_text: String,
}

/// A topic with its posts in server order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicDetailRecord {
    pub id: u64,
    pub title: String,
    pub posts: Vec<Post>,
}

/// Payload of `c/{slug}/{id}.json`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTopics {
    /// Display name when the server supplies one.
    pub name: Option<String>,
    pub topics: Vec<TopicSummary>,
}

#[derive(Deserialize)]
struct TopicListEnvelope {
    topic_list: Option<TopicListBody>,
    #[serde(default)]
    category: Option<CategoryName>,
}

#[derive(Deserialize)]
struct TopicListBody {
    #[serde(default)]
    topics: Option<Vec<TopicSummary>>,
}

#[derive(Deserialize)]
struct CategoryName {
    name: Option<String>,
}

#[derive(Deserialize)]
struct CategoryListEnvelope {
    category_list: Option<CategoryListBody>,
}

#[derive(Deserialize)]
struct CategoryListBody {
    categories: Option<Vec<Category>>,
}

#[derive(Deserialize)]
struct TopicDetailWire {
    id: u64,
    title: String,
    #[serde(default)]
    post_stream: Option<PostStreamWire>,
}

#[derive(Deserialize)]
struct PostStreamWire {
    #[serde(default)]
    posts: Vec<Post>,
}

fn decode<T: for<'de> Deserialize<'de>>(body: Value, expected: &'static str) -> Result<T, FetchError> {
    serde_json::from_value(body).map_err(|err| {
        tracing::debug!("Response for {} did not match: {}", expected, err);
        FetchError::shape(expected)
    })
}

/// `latest.json`: requires `topic_list.topics`. Server order is kept.
pub fn parse_latest(body: Value) -> Result<Vec<TopicSummary>, FetchError> {
    let envelope: TopicListEnvelope = decode(body, "topic_list.topics")?;
    envelope
        .topic_list
        .and_then(|list| list.topics)
        .ok_or_else(|| FetchError::shape("topic_list.topics"))
}

/// `categories.json`: requires `category_list.categories`, sorted by position.
pub fn parse_categories(body: Value) -> Result<Vec<Category>, FetchError> {
    let envelope: CategoryListEnvelope = decode(body, "category_list.categories")?;
    let mut categories = envelope
        .category_list
        .and_then(|list| list.categories)
        .ok_or_else(|| FetchError::shape("category_list.categories"))?;
    categories.sort_by_key(|c| c.sort_position);
    Ok(categories)
}

/// `c/{slug}/{id}.json`: requires `topic_list`; a missing topic array is empty.
pub fn parse_category_topics(body: Value) -> Result<CategoryTopics, FetchError> {
    let envelope: TopicListEnvelope = decode(body, "topic_list")?;
    let list = envelope
        .topic_list
        .ok_or_else(|| FetchError::shape("topic_list"))?;
    Ok(CategoryTopics {
        name: envelope
            .category
            .and_then(|c| c.name)
            .filter(|n| !n.trim().is_empty()),
        topics: list.topics.unwrap_or_default(),
    })
}

/// `t/{id}.json`.
///
/// A JSON `null` body is the "not found" payload and yields `Ok(None)`.
/// A missing `post_stream` yields a record with no posts.
pub fn parse_topic_detail(body: Value) -> Result<Option<TopicDetailRecord>, FetchError> {
    if body.is_null() {
        return Ok(None);
    }
    let wire: TopicDetailWire = decode(body, "topic id and title")?;
    let mut posts = wire.post_stream.map(|s| s.posts).unwrap_or_default();
    for post in &mut posts {
        post.body_text = crate::utils::html::to_terminal_text(&post.rendered_html_body);
    }
    Ok(Some(TopicDetailRecord {
        id: wire.id,
        title: wire.title,
        posts,
    }))
}
