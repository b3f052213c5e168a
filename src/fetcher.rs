//! The data fetcher shared by every screen.
//!
//! A [`Fetcher`] owns the tri-state [`FetchState`] of one bound resource.
//! Starting an attempt hands out a [`FetchRequest`] carrying a fresh
//! [`FetchTicket`]; the network call runs elsewhere and comes back as a
//! [`FetchReply`]. Only the reply whose ticket matches the attempt the
//! fetcher is currently waiting for is applied, so a response that was
//! overtaken by a retry, a parameter change or an unmount is dropped.

use crate::forum::{FetchError, ForumProxy};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Outcome of the latest fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    /// Human-readable message
    Error(String),
    Success(T),
}

/// Data-less tag of a [`FetchState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Error,
    Success,
}

impl<T> FetchState<T> {
    pub fn status(&self) -> FetchStatus {
        match self {
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Error(_) => FetchStatus::Error,
            FetchState::Success(_) => FetchStatus::Success,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Identity of one fetch attempt, unique for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        FetchTicket(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// A GET that a screen wants dispatched to the proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub path: String,
}

/// The raw answer to a [`FetchRequest`].
#[derive(Debug, Clone)]
pub struct FetchReply {
    pub ticket: FetchTicket,
    pub outcome: Result<Value, FetchError>,
}

/// Fetch state machine for one bound resource.
#[derive(Debug)]
pub struct Fetcher<T> {
    state: FetchState<T>,
    path: Option<String>,
    in_flight: Option<FetchTicket>,
}

impl<T> Default for Fetcher<T> {
    fn default() -> Self {
        Self {
            state: FetchState::Loading,
            path: None,
            in_flight: None,
        }
    }
}

impl<T> Fetcher<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Start a new attempt for `path`.
    ///
    /// An absent or blank path is a no-op: nothing is requested and the
    /// current state is left alone. Otherwise the state is reset to
    /// `Loading`, any earlier attempt is superseded, and the request to
    /// dispatch is returned.
    pub fn begin(&mut self, path: Option<String>) -> Option<FetchRequest> {
        let path = path.filter(|p| !p.trim().is_empty())?;
        let ticket = FetchTicket::next();
        if let Some(previous) = self.in_flight.replace(ticket) {
            debug!("Fetch {:?} superseded by {:?} ({})", previous, ticket, path);
        }
        self.state = FetchState::Loading;
        self.path = Some(path.clone());
        Some(FetchRequest { ticket, path })
    }

    /// Re-issue the last attempt with the same path.
    pub fn retry(&mut self) -> Option<FetchRequest> {
        let path = self.path.clone();
        self.begin(path)
    }

    /// True when `ticket` is the attempt this fetcher is waiting for.
    pub fn accepts(&self, ticket: FetchTicket) -> bool {
        self.in_flight == Some(ticket)
    }

    /// Apply an outcome. Returns false (and changes nothing) for a stale ticket.
    pub fn resolve(&mut self, ticket: FetchTicket, outcome: Result<T, FetchError>) -> bool {
        if !self.accepts(ticket) {
            debug!("Discarding stale response {:?}", ticket);
            return false;
        }
        self.in_flight = None;
        self.state = match outcome {
            Ok(data) => FetchState::Success(data),
            Err(err) => {
                let path = self.path.as_deref().unwrap_or("?");
                if err.is_network() {
                    warn!("Fetch of {} failed: {}", path, err);
                } else {
                    warn!("Unexpected response shape for {}: {:?}", path, err);
                }
                FetchState::Error(err.to_string())
            }
        };
        true
    }

    /// Forget the in-flight attempt so its reply is ignored.
    pub fn abandon(&mut self) {
        self.in_flight = None;
    }
}

/// One GET through the proxy, mapped onto the fetch error taxonomy.
///
/// Non-2xx responses carry the proxy's `error` text when there is one.
/// A 2xx response without a JSON body is a shape error.
pub async fn fetch_json<P: ForumProxy>(proxy: &P, path: &str) -> Result<Value, FetchError> {
    let response = proxy.get(path).await?;
    if !response.is_success() {
        return Err(FetchError::from_status(response.status, response.body.as_ref()));
    }
    response.body.ok_or_else(|| FetchError::shape("JSON body"))
}
