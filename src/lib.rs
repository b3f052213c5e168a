//! forumdeck - a read-only terminal reader for Discourse forums
//!
//! The reader shows the latest topics, the category index, the topics of a
//! category and single topics with their posts. Every request goes through
//! a [`forum::ForumProxy`]; every screen is the same generic controller
//! bound to a different resource.

// Core modules
pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod fetcher;
pub mod forum;
pub mod keymap;
pub mod ready;
pub mod screens;
pub mod session;
pub mod state;
pub mod styles;
pub mod tui;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use fetcher::{FetchState, FetchStatus, Fetcher};
pub use ready::{HostBridge, ReadySignal};
pub use session::Session;

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
