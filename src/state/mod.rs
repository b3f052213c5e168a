//! Application state management.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Session                    │
//! ├──────────────────────────────────────────────┤
//! │  ┌─────────────┐   ┌──────────────────────┐  │
//! │  │ Navigator   │   │ ActiveScreen         │  │
//! │  │ - route     │──▶│  one mounted screen  │  │
//! │  └─────────────┘   │  with its Fetcher    │  │
//! │  ┌─────────────┐   └──────────────────────┘  │
//! │  │ GlobalState │                             │
//! │  │ - help      │                             │
//! │  └─────────────┘                             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Navigation state lives only in the [`Navigator`]; screens ask for route
//! changes with a [`NavEvent`].

pub mod global;
pub mod navigation;

pub use global::GlobalState;
pub use navigation::{CategoryRef, MainView, NavEvent, NavigationState, Navigator, Route, View};
