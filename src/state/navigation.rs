//! Which view is shown and what it needs to re-enter it.
//!
//! The [`Navigator`] is the only owner of the current [`Route`]. Screens
//! never mutate it; they hand it a [`NavEvent`] and the navigator decides
//! the next route. Detail routes carry their parameters inside the variant,
//! so a detail view without its identifiers cannot be constructed.

use tracing::debug;

/// The four screens of the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Latest,
    Categories,
    CategoryDetail,
    TopicDetail,
}

impl View {
    pub fn title(self) -> &'static str {
        match self {
            View::Latest => "Latest",
            View::Categories => "Categories",
            View::CategoryDetail => "Category",
            View::TopicDetail => "Topic",
        }
    }
}

/// Views reachable from the top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MainView {
    Latest,
    Categories,
}

impl MainView {
    pub const ALL: [MainView; 2] = [MainView::Latest, MainView::Categories];

    pub fn other(self) -> Self {
        match self {
            MainView::Latest => MainView::Categories,
            MainView::Categories => MainView::Latest,
        }
    }
}

impl From<MainView> for View {
    fn from(view: MainView) -> Self {
        match view {
            MainView::Latest => View::Latest,
            MainView::Categories => View::Categories,
        }
    }
}

/// A selected category: both halves are needed to build its resource path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRef {
    pub id: u64,
    pub slug: String,
}

impl CategoryRef {
    /// `None` for an id of zero or a blank slug.
    pub fn new(id: u64, slug: impl Into<String>) -> Option<Self> {
        let slug = slug.into();
        (id != 0 && !slug.trim().is_empty()).then_some(Self { id, slug })
    }
}

/// The current view together with the parameters it was entered with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Latest,
    Categories,
    CategoryDetail(CategoryRef),
    TopicDetail {
        topic_id: u64,
        /// The category list the topic was opened from, if any.
        category: Option<CategoryRef>,
    },
}

impl Route {
    pub fn view(&self) -> View {
        match self {
            Route::Latest => View::Latest,
            Route::Categories => View::Categories,
            Route::CategoryDetail(_) => View::CategoryDetail,
            Route::TopicDetail { .. } => View::TopicDetail,
        }
    }

    /// The tab this route belongs to, for main views only.
    pub fn main_view(&self) -> Option<MainView> {
        match self {
            Route::Latest => Some(MainView::Latest),
            Route::Categories => Some(MainView::Categories),
            _ => None,
        }
    }

    pub fn topic_id(&self) -> Option<u64> {
        match self {
            Route::TopicDetail { topic_id, .. } => Some(*topic_id),
            _ => None,
        }
    }

    pub fn category(&self) -> Option<&CategoryRef> {
        match self {
            Route::CategoryDetail(category) => Some(category),
            Route::TopicDetail { category, .. } => category.as_ref(),
            _ => None,
        }
    }

    fn main(view: MainView) -> Self {
        match view {
            MainView::Latest => Route::Latest,
            MainView::Categories => Route::Categories,
        }
    }
}

/// Flat snapshot of the navigation state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub current_view: View,
    pub selected_topic_id: Option<u64>,
    pub selected_category_id: Option<u64>,
    pub selected_category_slug: Option<String>,
}

impl NavigationState {
    /// A topic view always has a topic id; a category view always has
    /// both category id and slug.
    pub fn is_consistent(&self) -> bool {
        match self.current_view {
            View::TopicDetail => self.selected_topic_id.is_some(),
            View::CategoryDetail => {
                self.selected_category_id.is_some() && self.selected_category_slug.is_some()
            }
            View::Latest | View::Categories => {
                self.selected_topic_id.is_none()
                    && self.selected_category_id.is_none()
                    && self.selected_category_slug.is_none()
            }
        }
    }
}

impl From<&Route> for NavigationState {
    fn from(route: &Route) -> Self {
        let category = route.category();
        Self {
            current_view: route.view(),
            selected_topic_id: route.topic_id(),
            selected_category_id: category.map(|c| c.id),
            selected_category_slug: category.map(|c| c.slug.clone()),
        }
    }
}

/// User intents that can move the reader to another view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    SelectMainView(MainView),
    SelectTopic(u64),
    SelectCategory { id: u64, slug: String },
    Back,
}

/// Owner of the current route.
#[derive(Debug, Default)]
pub struct Navigator {
    route: Route,
}

impl Navigator {
    /// Starts on the latest topics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn view(&self) -> View {
        self.route.view()
    }

    pub fn state(&self) -> NavigationState {
        NavigationState::from(&self.route)
    }

    /// Apply one event. Returns true when the route changed.
    ///
    /// Events that make no sense from the current view are ignored.
    pub fn apply(&mut self, event: NavEvent) -> bool {
        let next = match event {
            NavEvent::SelectMainView(view) => Some(Route::main(view)),
            NavEvent::SelectTopic(topic_id) => self.select_topic(topic_id),
            NavEvent::SelectCategory { id, slug } => self.select_category(id, slug),
            NavEvent::Back => self.back(),
        };
        match next {
            Some(route) if route != self.route => {
                debug!("Navigating {:?} -> {:?}", self.route, route);
                self.route = route;
                true
            }
            _ => false,
        }
    }

    fn select_topic(&self, topic_id: u64) -> Option<Route> {
        if topic_id == 0 {
            return None;
        }
        match &self.route {
            Route::Latest => Some(Route::TopicDetail {
                topic_id,
                category: None,
            }),
            Route::CategoryDetail(category) => Some(Route::TopicDetail {
                topic_id,
                category: Some(category.clone()),
            }),
            _ => None,
        }
    }

    fn select_category(&self, id: u64, slug: String) -> Option<Route> {
        match self.route {
            Route::Categories => CategoryRef::new(id, slug).map(Route::CategoryDetail),
            _ => None,
        }
    }

    fn back(&self) -> Option<Route> {
        match &self.route {
            Route::TopicDetail {
                category: Some(category),
                ..
            } => Some(Route::CategoryDetail(category.clone())),
            Route::TopicDetail { category: None, .. } => Some(Route::Latest),
            Route::CategoryDetail(_) => Some(Route::Categories),
            Route::Latest | Route::Categories => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn general() -> NavEvent {
        NavEvent::SelectCategory {
            id: 4,
            slug: "general".to_string(),
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new();
        assert_eq!(
            nav.state(),
            NavigationState {
                current_view: View::Latest,
                selected_topic_id: None,
                selected_category_id: None,
                selected_category_slug: None,
            }
        );
    }

    #[test]
    fn test_topic_from_latest_backs_to_latest() {
        let mut nav = Navigator::new();
        assert!(nav.apply(NavEvent::SelectTopic(123)));
        assert_eq!(nav.state().selected_topic_id, Some(123));
        assert!(nav.apply(NavEvent::Back));
        assert_eq!(nav.route(), &Route::Latest);
    }

    #[test]
    fn test_topic_from_category_backs_to_category() {
        let mut nav = Navigator::new();
        nav.apply(NavEvent::SelectMainView(MainView::Categories));
        nav.apply(general());
        nav.apply(NavEvent::SelectTopic(9));

        let state = nav.state();
        assert_eq!(state.current_view, View::TopicDetail);
        assert_eq!(state.selected_category_slug.as_deref(), Some("general"));

        nav.apply(NavEvent::Back);
        let state = nav.state();
        assert_eq!(state.current_view, View::CategoryDetail);
        assert_eq!(state.selected_topic_id, None);
        assert_eq!(state.selected_category_id, Some(4));

        nav.apply(NavEvent::Back);
        assert_eq!(nav.route(), &Route::Categories);
    }

    #[test]
    fn test_main_view_clears_selections() {
        let mut nav = Navigator::new();
        nav.apply(NavEvent::SelectMainView(MainView::Categories));
        nav.apply(general());
        nav.apply(NavEvent::SelectTopic(9));
        assert!(nav.apply(NavEvent::SelectMainView(MainView::Latest)));
        assert_eq!(nav.state(), NavigationState::from(&Route::Latest));
    }

    #[test]
    fn test_out_of_place_events_are_ignored() {
        let mut nav = Navigator::new();
        assert!(!nav.apply(general()));
        assert!(!nav.apply(NavEvent::Back));
        assert!(!nav.apply(NavEvent::SelectMainView(MainView::Latest)));

        nav.apply(NavEvent::SelectMainView(MainView::Categories));
        assert!(!nav.apply(NavEvent::SelectTopic(1)));

        nav.apply(general());
        nav.apply(NavEvent::SelectTopic(2));
        assert!(!nav.apply(NavEvent::SelectTopic(3)));
        assert_eq!(nav.route().topic_id(), Some(2));
    }

    #[test]
    fn test_unusable_parameters_are_ignored() {
        let mut nav = Navigator::new();
        assert!(!nav.apply(NavEvent::SelectTopic(0)));

        nav.apply(NavEvent::SelectMainView(MainView::Categories));
        assert!(!nav.apply(NavEvent::SelectCategory {
            id: 0,
            slug: "general".to_string()
        }));
        assert!(!nav.apply(NavEvent::SelectCategory {
            id: 4,
            slug: " ".to_string()
        }));
        assert_eq!(nav.view(), View::Categories);
    }

    #[test]
    fn test_main_view_other() {
        assert_eq!(MainView::Latest.other(), MainView::Categories);
        assert_eq!(View::from(MainView::Categories), View::Categories);
    }
}
