//! The reader's core loop, without a terminal.
//!
//! A [`Session`] ties the navigator to the mounted screen. Network calls
//! run as tokio tasks and report back over a channel; every reply is
//! applied here, on the caller's thread, so screen state is only ever
//! touched from one place.

use crate::fetcher::{fetch_json, FetchReply, FetchRequest};
use crate::forum::ForumProxy;
use crate::keymap::Action;
use crate::ready::ReadySignal;
use crate::screens::{ActiveScreen, ScreenAction};
use crate::state::{MainView, NavEvent, Navigator, Route};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info};

pub struct Session<P: ForumProxy> {
    proxy: Arc<P>,
    runtime: Handle,
    navigator: Navigator,
    screen: ActiveScreen,
    ready: Arc<ReadySignal>,
    replies_tx: UnboundedSender<FetchReply>,
    replies_rx: UnboundedReceiver<FetchReply>,
}

impl<P: ForumProxy> Session<P> {
    /// Mount the initial route (latest topics) and dispatch its fetch.
    pub fn start(proxy: Arc<P>, ready: Arc<ReadySignal>, runtime: Handle) -> Self {
        let navigator = Navigator::new();
        let (screen, request) = ActiveScreen::for_route(navigator.route());
        let (replies_tx, replies_rx) = unbounded_channel();
        let mut session = Self {
            proxy,
            runtime,
            navigator,
            screen,
            ready,
            replies_tx,
            replies_rx,
        };
        session.dispatch(request);
        session
    }

    pub fn route(&self) -> &Route {
        self.navigator.route()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn screen(&self) -> &ActiveScreen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut ActiveScreen {
        &mut self.screen
    }

    pub fn ready(&self) -> &ReadySignal {
        &self.ready
    }

    /// Send `request` to the proxy on the runtime. `None` is a no-op.
    pub fn dispatch(&self, request: Option<FetchRequest>) {
        let Some(FetchRequest { ticket, path }) = request else {
            return;
        };
        debug!("Dispatching {:?} for {}", ticket, path);
        let proxy = Arc::clone(&self.proxy);
        let replies = self.replies_tx.clone();
        self.runtime.spawn(async move {
            let outcome = fetch_json(proxy.as_ref(), &path).await;
            if replies.send(FetchReply { ticket, outcome }).is_err() {
                debug!("Session closed before {} answered", path);
            }
        });
    }

    /// Apply a navigation event, remounting or rebinding the screen.
    ///
    /// Returns whether the route changed.
    pub fn navigate(&mut self, event: NavEvent) -> bool {
        if !self.navigator.apply(event) {
            return false;
        }
        let route = self.navigator.route().clone();
        info!("Showing {:?}", route);
        if self.screen.view() == route.view() {
            let request = self.screen.rebind(&route);
            self.dispatch(request);
        } else {
            let (screen, request) = ActiveScreen::for_route(&route);
            self.screen = screen;
            self.dispatch(request);
        }
        true
    }

    /// Retry the mounted screen's request.
    pub fn retry(&mut self) -> bool {
        let request = self.screen.retry();
        let issued = request.is_some();
        self.dispatch(request);
        issued
    }

    /// Route a keymap action. Quit and Help belong to the application.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::ShowLatest => {
                self.navigate(NavEvent::SelectMainView(MainView::Latest));
            }
            Action::ShowCategories => {
                self.navigate(NavEvent::SelectMainView(MainView::Categories));
            }
            Action::NextTab => {
                if let Some(view) = self.route().main_view() {
                    self.navigate(NavEvent::SelectMainView(view.other()));
                }
            }
            other => match self.screen.as_screen_mut().handle_action(other) {
                ScreenAction::Navigate(event) => {
                    self.navigate(event);
                }
                ScreenAction::Fetch(request) => self.dispatch(Some(request)),
                ScreenAction::None => {}
            },
        }
    }

    fn apply(&mut self, reply: FetchReply) -> bool {
        self.screen.apply(reply, &self.ready)
    }

    /// Apply every reply that has already arrived. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(reply) = self.replies_rx.try_recv() {
            if self.apply(reply) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next reply and apply it. Returns false if it was stale.
    pub async fn next_reply(&mut self) -> bool {
        match self.replies_rx.recv().await {
            Some(reply) => self.apply(reply),
            // The session holds a sender, so the channel never closes first
            None => false,
        }
    }
}
