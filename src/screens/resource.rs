//! The one generic screen controller.
//!
//! Every screen binds a [`Fetcher`] to a remote resource described by a
//! [`ForumResource`] and maps its [`FetchState`] onto the same four
//! presentations: loading, error with retry, empty, and the rows. Retry and
//! stale-response handling therefore live here and nowhere else.

use super::screen_trait::{RenderContext, Screen, ScreenAction};
use crate::components::StatusPanel;
use crate::fetcher::{FetchReply, FetchRequest, FetchState, FetchStatus, Fetcher};
use crate::forum::FetchError;
use crate::keymap::{Action, Keymap};
use crate::ready::ReadySignal;
use crate::state::{NavEvent, View};
use crate::styles::{theme, LIST_HIGHLIGHT_SYMBOL};
use crate::utils::{ListStateExt, DEFAULT_PAGE_SIZE};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use serde_json::Value;
use std::fmt::Debug;
use tracing::debug;

/// A remote resource a screen is bound to, and how it is presented.
pub trait ForumResource {
    /// Binding parameters; a change triggers a new fetch.
    type Params: Clone + PartialEq + Debug;
    type Data;

    const VIEW: View;
    const LOADING: &'static str;
    /// Shown for a successful fetch with no rows.
    const EMPTY: &'static str;
    const NOT_FOUND: &'static str = "Not found";
    /// Label of the back action; `None` on main views.
    const BACK: Option<&'static str> = None;
    /// Whether the selected row gets the full highlight style.
    const HIGHLIGHT_ROWS: bool = true;

    /// Remote path, or `None` when the parameters cannot name a resource.
    fn path(params: &Self::Params) -> Option<String>;

    fn parse(body: Value) -> Result<Self::Data, FetchError>;

    fn heading(params: &Self::Params, data: Option<&Self::Data>) -> String;

    fn item_count(data: &Self::Data) -> usize;

    /// Successful payload that means "does not exist".
    fn is_missing(_data: &Self::Data) -> bool {
        false
    }

    /// Navigation triggered by opening row `index`.
    fn activate(data: &Self::Data, index: usize) -> Option<NavEvent>;

    fn items(data: &Self::Data, width: u16) -> Vec<ListItem<'static>>;

    fn footer(keymap: &Keymap) -> String {
        keymap.footer_list(Self::BACK.is_some())
    }
}

/// A mounted screen controller.
pub struct ResourceScreen<R: ForumResource> {
    params: R::Params,
    fetcher: Fetcher<R::Data>,
    list_state: ListState,
}

impl<R: ForumResource> ResourceScreen<R>
where
    R::Data: Debug,
{
    /// Mount with `params`; the returned request (if any) must be dispatched.
    pub fn mount(params: R::Params) -> (Self, Option<FetchRequest>) {
        let mut screen = Self {
            params,
            fetcher: Fetcher::new(),
            list_state: ListState::default(),
        };
        let request = screen.fetcher.begin(R::path(&screen.params));
        if request.is_none() {
            debug!("{:?} mounted without a usable path: {:?}", R::VIEW, screen.params);
        }
        (screen, request)
    }

    pub fn params(&self) -> &R::Params {
        &self.params
    }

    pub fn state(&self) -> &FetchState<R::Data> {
        self.fetcher.state()
    }

    /// Rebind to new parameters. Unchanged parameters do not refetch.
    pub fn rebind(&mut self, params: R::Params) -> Option<FetchRequest> {
        if params == self.params {
            return None;
        }
        self.params = params;
        self.list_state = ListState::default();
        match self.fetcher.begin(R::path(&self.params)) {
            Some(request) => Some(request),
            None => {
                // Nothing can be fetched, so whatever was in flight is obsolete
                self.fetcher.abandon();
                None
            }
        }
    }

    /// Re-issue the current request. Refused only for the not-found payload.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        if self.fetcher.state().data().is_some_and(R::is_missing) {
            return None;
        }
        self.fetcher.retry()
    }

    /// Apply a reply. Stale replies are dropped and return false.
    ///
    /// The readiness signal fires on every successful apply; it only reaches
    /// the host the first time.
    pub fn apply(&mut self, reply: FetchReply, ready: &ReadySignal) -> bool {
        if !self.fetcher.accepts(reply.ticket) {
            debug!("{:?} dropped stale reply {:?}", R::VIEW, reply.ticket);
            return false;
        }
        let outcome = reply.outcome.and_then(R::parse);
        self.fetcher.resolve(reply.ticket, outcome);
        if let FetchState::Success(data) = self.fetcher.state() {
            self.list_state.clamp_to(R::item_count(data));
            ready.fire();
        }
        true
    }

    fn item_count(&self) -> usize {
        self.fetcher.state().data().map_or(0, R::item_count)
    }

    fn panel<'a>(state: &'a FetchState<R::Data>, keymap: &Keymap) -> Option<StatusPanel<'a>> {
        let back = R::BACK.map(|label| (keymap.key_for(Action::Back), label));
        match state {
            FetchState::Loading => Some(StatusPanel::Loading(R::LOADING)),
            FetchState::Error(message) => Some(StatusPanel::Error {
                message,
                retry_key: keymap.key_for(Action::Retry),
                back,
            }),
            FetchState::Success(data) if R::is_missing(data) => Some(StatusPanel::NotFound {
                label: R::NOT_FOUND,
                back_key: keymap.key_for(Action::Back),
                back_label: R::BACK.unwrap_or("Back"),
            }),
            FetchState::Success(data) if R::item_count(data) == 0 => {
                Some(StatusPanel::Empty(R::EMPTY))
            }
            FetchState::Success(_) => None,
        }
    }
}

impl<R: ForumResource> Screen for ResourceScreen<R>
where
    R::Data: Debug,
{
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let title = R::heading(&self.params, self.fetcher.state().data());
        let state = self.fetcher.state();

        if let Some(panel) = Self::panel(state, ctx.keymap) {
            return panel.render(frame, area, &title);
        }
        let Some(data) = state.data() else {
            return Ok(());
        };

        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .title(format!(" {} ", title))
            .title_style(t.title_style());
        let width = block
            .inner(area)
            .width
            .saturating_sub(LIST_HIGHLIGHT_SYMBOL.chars().count() as u16);

        let highlight = if R::HIGHLIGHT_ROWS {
            t.highlight_style()
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(R::items(data, width))
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol(LIST_HIGHLIGHT_SYMBOL);

        frame.render_stateful_widget(list, area, &mut self.list_state);
        Ok(())
    }

    fn handle_action(&mut self, action: Action) -> ScreenAction {
        let total = self.item_count();
        match action {
            Action::MoveUp => self.list_state.move_up_by(1, total),
            Action::MoveDown => self.list_state.move_down_by(1, total),
            Action::PageUp => self.list_state.move_up_by(DEFAULT_PAGE_SIZE, total),
            Action::PageDown => self.list_state.move_down_by(DEFAULT_PAGE_SIZE, total),
            Action::GoToTop => self.list_state.select_first_item(total),
            Action::GoToEnd => self.list_state.select_last_item(total),
            Action::Confirm => {
                let event = self
                    .fetcher
                    .state()
                    .data()
                    .zip(self.list_state.selected())
                    .and_then(|(data, index)| R::activate(data, index));
                if let Some(event) = event {
                    return ScreenAction::Navigate(event);
                }
            }
            Action::Back if R::BACK.is_some() => return ScreenAction::Navigate(NavEvent::Back),
            Action::Retry => {
                if let Some(request) = self.retry() {
                    return ScreenAction::Fetch(request);
                }
            }
            _ => {}
        }
        ScreenAction::None
    }

    fn title(&self) -> String {
        R::heading(&self.params, self.fetcher.state().data())
    }

    fn footer_hint(&self, keymap: &Keymap) -> String {
        R::footer(keymap)
    }

    fn status(&self) -> FetchStatus {
        self.fetcher.state().status()
    }
}
