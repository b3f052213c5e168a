//! Screen controllers.
//!
//! All four screens are instances of [`ResourceScreen`]; [`ActiveScreen`]
//! holds whichever one the current route mounts.

pub mod categories;
pub mod category_topics;
pub mod latest;
pub mod resource;
pub mod screen_trait;
pub mod topic_detail;

pub use categories::{CategoriesScreen, CategoryIndex};
pub use category_topics::{CategoryTopics, CategoryTopicsScreen};
pub use latest::{LatestScreen, LatestTopics};
pub use resource::{ForumResource, ResourceScreen};
pub use screen_trait::{RenderContext, Screen, ScreenAction};
pub use topic_detail::{TopicScreen, TopicThread};

use crate::fetcher::{FetchReply, FetchRequest};
use crate::ready::ReadySignal;
use crate::state::{Route, View};

/// The mounted screen.
pub enum ActiveScreen {
    Latest(LatestScreen),
    Categories(CategoriesScreen),
    CategoryTopics(CategoryTopicsScreen),
    Topic(TopicScreen),
}

impl ActiveScreen {
    /// Mount the screen for `route` together with its first request.
    pub fn for_route(route: &Route) -> (Self, Option<FetchRequest>) {
        match route {
            Route::Latest => {
                let (screen, request) = LatestScreen::mount(());
                (ActiveScreen::Latest(screen), request)
            }
            Route::Categories => {
                let (screen, request) = CategoriesScreen::mount(());
                (ActiveScreen::Categories(screen), request)
            }
            Route::CategoryDetail(category) => {
                let (screen, request) = CategoryTopicsScreen::mount(category.clone());
                (ActiveScreen::CategoryTopics(screen), request)
            }
            Route::TopicDetail { topic_id, .. } => {
                let (screen, request) = TopicScreen::mount(*topic_id);
                (ActiveScreen::Topic(screen), request)
            }
        }
    }

    pub fn view(&self) -> View {
        match self {
            ActiveScreen::Latest(_) => View::Latest,
            ActiveScreen::Categories(_) => View::Categories,
            ActiveScreen::CategoryTopics(_) => View::CategoryDetail,
            ActiveScreen::Topic(_) => View::TopicDetail,
        }
    }

    /// Rebind to the parameters of `route` when it shows the same view.
    ///
    /// Returns `None` when nothing needs fetching; callers remount on a
    /// view change instead.
    pub fn rebind(&mut self, route: &Route) -> Option<FetchRequest> {
        match (self, route) {
            (ActiveScreen::CategoryTopics(screen), Route::CategoryDetail(category)) => {
                screen.rebind(category.clone())
            }
            (ActiveScreen::Topic(screen), Route::TopicDetail { topic_id, .. }) => {
                screen.rebind(*topic_id)
            }
            _ => None,
        }
    }

    pub fn apply(&mut self, reply: FetchReply, ready: &ReadySignal) -> bool {
        match self {
            ActiveScreen::Latest(screen) => screen.apply(reply, ready),
            ActiveScreen::Categories(screen) => screen.apply(reply, ready),
            ActiveScreen::CategoryTopics(screen) => screen.apply(reply, ready),
            ActiveScreen::Topic(screen) => screen.apply(reply, ready),
        }
    }

    pub fn retry(&mut self) -> Option<FetchRequest> {
        match self {
            ActiveScreen::Latest(screen) => screen.retry(),
            ActiveScreen::Categories(screen) => screen.retry(),
            ActiveScreen::CategoryTopics(screen) => screen.retry(),
            ActiveScreen::Topic(screen) => screen.retry(),
        }
    }

    pub fn as_screen(&self) -> &dyn Screen {
        match self {
            ActiveScreen::Latest(screen) => screen as &dyn Screen,
            ActiveScreen::Categories(screen) => screen as &dyn Screen,
            ActiveScreen::CategoryTopics(screen) => screen as &dyn Screen,
            ActiveScreen::Topic(screen) => screen as &dyn Screen,
        }
    }

    pub fn as_screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            ActiveScreen::Latest(screen) => screen as &mut dyn Screen,
            ActiveScreen::Categories(screen) => screen as &mut dyn Screen,
            ActiveScreen::CategoryTopics(screen) => screen as &mut dyn Screen,
            ActiveScreen::Topic(screen) => screen as &mut dyn Screen,
        }
    }
}
