//! Non-interactive commands against an in-memory forum.

mod common;

use common::{category_list, topic_list, FakeProxy};
use forumdeck::cli::{run_remote, Commands};
use serde_json::json;

async fn run(proxy: &FakeProxy, command: Commands) -> anyhow::Result<String> {
    let mut out = Vec::new();
    run_remote(proxy, command, &mut out).await?;
    Ok(String::from_utf8(out)?)
}

#[tokio::test]
async fn test_latest_lists_topics_in_server_order() {
    let proxy = FakeProxy::new().with_json("latest.json", topic_list(&[(9, "Newest"), (3, "Older")]));
    let text = run(&proxy, Commands::Latest).await.unwrap();

    assert!(text.find("Newest").unwrap() < text.find("Older").unwrap());
    assert!(text.contains("Replies: 0 • Last Post: "));
    assert!(text.contains("2024"));
}

#[tokio::test]
async fn test_categories_sorted_by_position() {
    let proxy = FakeProxy::new().with_json(
        "categories.json",
        category_list(&[(2, "later", 7), (1, "sooner", 0)]),
    );
    let text = run(&proxy, Commands::Categories).await.unwrap();
    assert!(text.find("SOONER (sooner)").unwrap() < text.find("LATER (later)").unwrap());
}

#[tokio::test]
async fn test_category_uses_server_name_or_slug() {
    let proxy = FakeProxy::new()
        .with_json(
            "c/site-feedback/2.json",
            json!({"category": {"name": "Site Feedback"}, "topic_list": {"topics": []}}),
        )
        .with_json("c/general-talk/4.json", json!({"topic_list": {}}));

    let named = run(
        &proxy,
        Commands::Category {
            slug: "site-feedback".to_string(),
            id: 2,
        },
    )
    .await
    .unwrap();
    assert_eq!(
        named,
        "Topics in: Site Feedback\n\nNo topics found in this category\n"
    );

    let from_slug = run(
        &proxy,
        Commands::Category {
            slug: "general-talk".to_string(),
            id: 4,
        },
    )
    .await
    .unwrap();
    assert!(from_slug.starts_with("Topics in: General Talk\n"));
}

#[tokio::test]
async fn test_invalid_category_does_not_hit_the_network() {
    let proxy = FakeProxy::new();
    let result = run(
        &proxy,
        Commands::Category {
            slug: " ".to_string(),
            id: 4,
        },
    )
    .await;
    assert!(result.is_err());
    assert!(run(&proxy, Commands::Topic { id: 0 }).await.is_err());
    assert!(proxy.calls().is_empty());
}

#[tokio::test]
async fn test_topic_prints_posts_as_text() {
    let proxy = FakeProxy::new().with_json(
        "t/42.json",
        json!({"id": 42, "title": "Gas costs", "post_stream": {"posts": [
            {"id": 1, "username": "alice", "cooked": "<p>Hello <b>world</b></p><script>x()</script>",
             "created_at": "2024-01-01T00:00:00Z"}
        ]}}),
    );
    let text = run(&proxy, Commands::Topic { id: 42 }).await.unwrap();

    assert!(text.starts_with("Gas costs\n"));
    assert!(text.contains("alice"));
    assert!(text.contains("  Hello world"));
    assert!(!text.contains("<b>"));
    assert!(!text.contains("x()"));
}

#[tokio::test]
async fn test_http_error_is_reported_with_status() {
    let proxy = FakeProxy::new();
    let err = run(&proxy, Commands::Latest).await.unwrap_err();
    let chain = format!("{:#}", err);
    assert!(chain.contains("Failed to load latest topics"));
    assert!(chain.contains("Error from Discourse API: Not Found (HTTP 404)"));
}

#[tokio::test]
async fn test_fetch_prints_raw_response() {
    let proxy = FakeProxy::new().with_status("t/5.json", 403, "Error from Discourse API: Forbidden");
    let text = run(
        &proxy,
        Commands::Fetch {
            path: "t/5.json".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(text.starts_with("HTTP 403\n"));
    assert!(text.contains("Forbidden"));
}
