//! Non-interactive renditions of the four screens.

use super::Commands;
use crate::config::Config;
use crate::fetcher::fetch_json;
use crate::forum::models::{
    parse_categories, parse_category_topics, parse_latest, parse_topic_detail,
};
use crate::forum::{paths, Category, ForumProxy, ProxyClient, TopicDetailRecord, TopicSummary};
use crate::screens::category_topics::display_name;
use crate::state::CategoryRef;
use crate::utils::text::format_date;
use crate::utils::format_timestamp;
use anyhow::{bail, Context, Result};
use std::io::{self, Write};
use tokio::runtime::Runtime;
use tracing::info;

pub(super) fn run(command: Commands, config: &Config) -> Result<()> {
    if !config.forum.is_reachable() {
        super::print_warning(
            "No forum configured: set DISCOURSE_BASE_URL and DISCOURSE_API_KEY, or --gateway",
        );
    }
    let runtime = Runtime::new().context("Failed to create tokio runtime")?;
    let proxy = ProxyClient::from_config(&config.forum);
    info!("Running {:?} via {}", command, proxy.describe());

    let mut stdout = io::stdout().lock();
    runtime.block_on(run_remote(&proxy, command, &mut stdout))
}

/// Fetch and print the resource named by `command`.
pub async fn run_remote<P: ForumProxy, W: Write>(
    proxy: &P,
    command: Commands,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Latest => {
            let body = fetch_json(proxy, paths::LATEST)
                .await
                .context("Failed to load latest topics")?;
            write_latest(out, &parse_latest(body)?)
        }
        Commands::Categories => {
            let body = fetch_json(proxy, paths::CATEGORIES)
                .await
                .context("Failed to load categories")?;
            write_categories(out, &parse_categories(body)?)
        }
        Commands::Category { slug, id } => {
            let Some(category) = CategoryRef::new(id, slug) else {
                bail!("A category needs a non-empty slug and a non-zero id");
            };
            let Some(path) = paths::category_topics(&category.slug, category.id) else {
                bail!("A category needs a non-empty slug and a non-zero id");
            };
            let body = fetch_json(proxy, &path)
                .await
                .with_context(|| format!("Failed to load {}", path))?;
            let data = parse_category_topics(body)?;
            write_category(
                out,
                &format!("Topics in: {}", display_name(&category, Some(&data))),
                &data.topics,
            )
        }
        Commands::Topic { id } => {
            let Some(path) = paths::topic(id) else {
                bail!("Topic id must be non-zero");
            };
            let body = fetch_json(proxy, &path)
                .await
                .with_context(|| format!("Failed to load {}", path))?;
            write_topic(out, parse_topic_detail(body)?.as_ref())
        }
        Commands::Fetch { path } => {
            let response = proxy
                .get(&path)
                .await
                .with_context(|| format!("Failed to fetch {}", path))?;
            writeln!(out, "HTTP {}", response.status)?;
            match response.body {
                Some(body) => writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?,
                None => writeln!(out, "(no JSON body)")?,
            }
            Ok(())
        }
        Commands::Completions { .. } => bail!("completions do not contact the forum"),
    }
}

fn write_topic_rows<W: Write>(out: &mut W, topics: &[TopicSummary]) -> Result<()> {
    for topic in topics {
        let last_post = topic
            .last_posted_at
            .as_ref()
            .map_or_else(|| "never".to_string(), format_date);
        writeln!(out, "{:>7}  {}", topic.id, topic.title)?;
        writeln!(
            out,
            "         Replies: {} • Last Post: {}",
            topic.reply_count, last_post
        )?;
    }
    Ok(())
}

pub fn write_latest<W: Write>(out: &mut W, topics: &[TopicSummary]) -> Result<()> {
    if topics.is_empty() {
        writeln!(out, "No topics found")?;
        return Ok(());
    }
    write_topic_rows(out, topics)
}

pub fn write_categories<W: Write>(out: &mut W, categories: &[Category]) -> Result<()> {
    if categories.is_empty() {
        writeln!(out, "No categories found")?;
        return Ok(());
    }
    for category in categories {
        writeln!(out, "{:>5}  {} ({})", category.id, category.name, category.slug)?;
        if let Some(description) = category
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
        {
            writeln!(out, "       {}", description)?;
        }
        writeln!(
            out,
            "       Topics: {} • Posts: {}",
            category.topic_count, category.post_count
        )?;
    }
    Ok(())
}

pub fn write_category<W: Write>(out: &mut W, heading: &str, topics: &[TopicSummary]) -> Result<()> {
    writeln!(out, "{}", heading)?;
    writeln!(out)?;
    if topics.is_empty() {
        writeln!(out, "No topics found in this category")?;
        return Ok(());
    }
    write_topic_rows(out, topics)
}

/// `None` is the not-found payload.
pub fn write_topic<W: Write>(out: &mut W, record: Option<&TopicDetailRecord>) -> Result<()> {
    let Some(record) = record else {
        writeln!(out, "Topic not found")?;
        return Ok(());
    };
    writeln!(out, "{}", record.title)?;
    if record.posts.is_empty() {
        writeln!(out)?;
        writeln!(out, "No posts found")?;
        return Ok(());
    }
    for post in &record.posts {
        let posted = post
            .created_at
            .as_ref()
            .map(format_timestamp)
            .unwrap_or_default();
        writeln!(out)?;
        writeln!(out, "{}  {}", post.author_username, posted)?;
        for line in post.body_text.lines() {
            writeln!(out, "  {}", line)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_latest() {
        assert_eq!(render(|o| write_latest(o, &[])), "No topics found\n");
    }

    #[test]
    fn test_categories_listed_in_given_order() {
        let categories = parse_categories(json!({"category_list": {"categories": [
            {"id": 2, "name": "Two", "slug": "two", "position": 5, "topic_count": 3, "post_count": 9},
            {"id": 1, "name": "One", "slug": "one", "position": 1}
        ]}}))
        .unwrap();
        let text = render(|o| write_categories(o, &categories));
        assert!(text.find("One (one)").unwrap() < text.find("Two (two)").unwrap());
        assert!(text.contains("Topics: 3 • Posts: 9"));
    }

    #[test]
    fn test_topic_without_posts() {
        let record = parse_topic_detail(json!({"id": 123, "title": "Hello"}))
            .unwrap()
            .unwrap();
        let text = render(|o| write_topic(o, Some(&record)));
        assert_eq!(text, "Hello\n\nNo posts found\n");
        assert_eq!(render(|o| write_topic(o, None)), "Topic not found\n");
    }
}
