//! The category index.

use super::resource::{ForumResource, ResourceScreen};
use crate::forum::models::parse_categories;
use crate::forum::{paths, Category, FetchError};
use crate::state::{NavEvent, View};
use crate::styles::theme;
use crate::utils::truncate;
use ratatui::text::{Line, Span};
use ratatui::widgets::ListItem;
use serde_json::Value;

pub struct CategoryIndex;

pub type CategoriesScreen = ResourceScreen<CategoryIndex>;

impl ForumResource for CategoryIndex {
    type Params = ();
    /// Sorted by ascending position.
    type Data = Vec<Category>;

    const VIEW: View = View::Categories;
    const LOADING: &'static str = "Loading categories...";
    const EMPTY: &'static str = "No categories found";

    fn path(_params: &()) -> Option<String> {
        Some(paths::CATEGORIES.to_string())
    }

    fn parse(body: Value) -> Result<Self::Data, FetchError> {
        parse_categories(body)
    }

    fn heading(_params: &(), _data: Option<&Self::Data>) -> String {
        "Categories".to_string()
    }

    fn item_count(data: &Self::Data) -> usize {
        data.len()
    }

    fn activate(data: &Self::Data, index: usize) -> Option<NavEvent> {
        data.get(index).map(|category| NavEvent::SelectCategory {
            id: category.id,
            slug: category.slug.clone(),
        })
    }

    fn items(data: &Self::Data, width: u16) -> Vec<ListItem<'static>> {
        let t = theme();
        let text_width = width.saturating_sub(2) as usize;
        data.iter()
            .map(|category| {
                let bar = Span::styled("▌ ", t.category_style(&category.color_hex));
                let mut lines = vec![Line::from(vec![
                    bar.clone(),
                    Span::styled(truncate(&category.name, text_width), t.title_style()),
                ])];
                if let Some(description) = category
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                {
                    lines.push(Line::from(vec![
                        bar.clone(),
                        Span::styled(truncate(description, text_width), t.text_style()),
                    ]));
                }
                lines.push(Line::from(vec![
                    bar,
                    Span::styled(
                        format!(
                            "Topics: {} • Posts: {}",
                            category.topic_count, category.post_count
                        ),
                        t.muted_style(),
                    ),
                ]));
                ListItem::new(lines)
            })
            .collect()
    }
}
