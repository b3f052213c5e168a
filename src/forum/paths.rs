//! Remote resource paths, relative to the proxy root.

/// Latest topics across the forum.
pub const LATEST: &str = "latest.json";

/// Every visible category.
pub const CATEGORIES: &str = "categories.json";

/// Topics inside one category. `None` when the category cannot be addressed.
pub fn category_topics(slug: &str, id: u64) -> Option<String> {
    let slug = slug.trim();
    if slug.is_empty() || id == 0 {
        return None;
    }
    Some(format!("c/{}/{}.json", slug, id))
}

/// A topic with its embedded post stream.
pub fn topic(id: u64) -> Option<String> {
    (id != 0).then(|| format!("t/{}.json", id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_topics_path() {
        assert_eq!(category_topics("general", 4).as_deref(), Some("c/general/4.json"));
        assert_eq!(category_topics("  ", 4), None);
        assert_eq!(category_topics("general", 0), None);
    }

    #[test]
    fn test_topic_path() {
        assert_eq!(topic(123).as_deref(), Some("t/123.json"));
        assert_eq!(topic(0), None);
    }
}
