use crate::components::{Footer, Header, HelpOverlay};
use crate::config::Config;
use crate::forum::{ForumProxy, ProxyClient};
use crate::keymap::{Action, Keymap};
use crate::ready::{HostBridge, LogHost, MarkerFileHost, ReadySignal};
use crate::screens::RenderContext;
use crate::session::Session;
use crate::state::GlobalState;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use tracing::{error, info};

/// Main application state
pub struct App {
    config: Config,
    config_path: PathBuf,
    tui: Tui,
    global: GlobalState,
    session: Session<ProxyClient>,
    should_quit: bool,
    /// Owns the worker threads the fetches run on; dropped last.
    _runtime: Runtime,
}

/// Pick the host side of the readiness contract from configuration.
pub fn host_for(config: &Config) -> Box<dyn HostBridge> {
    match &config.ready_file {
        Some(path) => Box::new(MarkerFileHost::new(path)),
        None => Box::new(LogHost),
    }
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let proxy = ProxyClient::from_config(&config.forum);
        if !config.forum.is_reachable() {
            error!("No forum configured; set DISCOURSE_BASE_URL and DISCOURSE_API_KEY or a gateway URL");
        }
        let global = GlobalState::new(proxy.describe());
        let ready = Arc::new(ReadySignal::new(host_for(&config)));
        let session = Session::start(Arc::new(proxy), ready, runtime.handle().clone());
        let tui = Tui::new()?;

        Ok(Self {
            config,
            config_path,
            tui,
            global,
            session,
            should_quit: false,
            _runtime: runtime,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Reader started ({})", self.global.source);

        loop {
            self.session.pump();
            self.draw()?;

            if self.should_quit {
                break;
            }

            // Short poll so replies show up without a key press
            if let Some(event) = self.tui.poll_event(Duration::from_millis(100))? {
                self.handle_event(event);
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let Self {
            tui,
            session,
            config,
            config_path,
            global,
            ..
        } = self;
        let mut outcome = Ok(());
        tui.draw(|frame| {
            outcome = render_frame(frame, session, &config.keymap, global, config_path);
        })?;
        outcome
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };

        if self.global.show_help_overlay {
            // Any key closes the overlay
            self.global.toggle_help();
            return;
        }

        match self.config.keymap.get_action(code, modifiers) {
            Some(Action::Quit) => self.should_quit = true,
            Some(Action::Help) => self.global.toggle_help(),
            Some(action) => self.session.handle_action(action),
            None => {}
        }
    }
}

fn render_frame<P: ForumProxy>(
    frame: &mut Frame,
    session: &mut Session<P>,
    keymap: &Keymap,
    global: &GlobalState,
    config_path: &Path,
) -> Result<()> {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    let tabs = session.route().main_view();
    let screen = session.screen_mut().as_screen_mut();
    Header::render(frame, chunks[0], &screen.title(), tabs, &global.source)?;
    screen.render(frame, chunks[1], &RenderContext::new(keymap))?;
    Footer::render(frame, chunks[2], &screen.footer_hint(keymap))?;

    if global.show_help_overlay {
        HelpOverlay::render(frame, area, keymap, &config_path.display().to_string())?;
    }
    Ok(())
}
