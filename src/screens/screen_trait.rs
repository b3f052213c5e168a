//! Screen trait and associated types.
//!
//! Screens own their state and never touch navigation directly: handling an
//! action returns a [`ScreenAction`] that the session carries out.

use crate::fetcher::{FetchRequest, FetchStatus};
use crate::keymap::{Action, Keymap};
use crate::state::NavEvent;
use anyhow::Result;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Active keymap, for key hints inside panels.
    pub keymap: &'a Keymap,
}

impl<'a> RenderContext<'a> {
    pub fn new(keymap: &'a Keymap) -> Self {
        Self { keymap }
    }
}

/// What a screen asks for after handling an action.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScreenAction {
    /// Nothing beyond the screen's own state changed.
    #[default]
    None,
    /// Ask the navigator for another view.
    Navigate(NavEvent),
    /// Dispatch a request (retry).
    Fetch(FetchRequest),
}

/// Trait for screen controllers.
pub trait Screen {
    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle a keymap action that the application did not consume.
    fn handle_action(&mut self, action: Action) -> ScreenAction;

    /// Title for the header on detail views.
    fn title(&self) -> String;

    /// Key hints for the footer.
    fn footer_hint(&self, keymap: &Keymap) -> String;

    fn status(&self) -> FetchStatus;
}
