//! Shared test utilities for the reader's integration tests.
//!
//! Provides `FakeProxy` - an in-memory forum with per-path responses,
//! gates that hold a response back until released, and a call log - plus
//! readiness hosts that count or fail.

use anyhow::Result;
use forumdeck::forum::{FetchError, ForumProxy, ProxyResponse};
use forumdeck::keymap::Keymap;
use forumdeck::ready::{HostBridge, ReadySignal};
use forumdeck::screens::{RenderContext, Screen};
use forumdeck::session::Session;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::runtime::Handle;
use tokio::sync::Notify;

type Canned = Result<ProxyResponse, FetchError>;

/// An in-memory forum.
///
/// Unknown paths answer like the proxy does for an upstream 404.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeProxy {
    responses: Arc<Mutex<HashMap<String, Canned>>>,
    gates: Mutex<HashMap<String, Arc<Notify>>>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl FakeProxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `path` with a 200 and `body`.
    pub fn with_json(self, path: &str, body: Value) -> Self {
        self.respond(path, Ok(ProxyResponse::json(200, body)));
        self
    }

    /// Answer `path` with `status` and the proxy's error envelope.
    pub fn with_status(self, path: &str, status: u16, error: &str) -> Self {
        self.respond(
            path,
            Ok(ProxyResponse::json(status, json!({"error": error, "details": ""}))),
        );
        self
    }

    /// Hold every response for `path` until [`FakeProxy::release`].
    pub fn with_gate(self, path: &str) -> Self {
        self.gates
            .lock()
            .unwrap()
            .insert(path.to_string(), Arc::new(Notify::new()));
        self
    }

    /// Replace the answer for `path`; also affects requests already waiting at a gate.
    pub fn respond(&self, path: &str, response: Canned) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
    }

    /// Let one gated request for `path` through.
    pub fn release(&self, path: &str) {
        if let Some(gate) = self.gates.lock().unwrap().get(path) {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }
}

impl ForumProxy for FakeProxy {
    fn get(&self, path: &str) -> impl Future<Output = Result<ProxyResponse, FetchError>> + Send {
        let path = path.to_string();
        self.calls.lock().unwrap().push(path.clone());
        let gate = self.gates.lock().unwrap().get(&path).cloned();
        let responses = Arc::clone(&self.responses);
        async move {
            if let Some(gate) = gate {
                gate.notified().await;
            }
            let canned = responses.lock().unwrap().get(&path).cloned();
            canned.unwrap_or_else(|| {
                Ok(ProxyResponse::json(
                    404,
                    json!({"error": "Error from Discourse API: Not Found", "details": ""}),
                ))
            })
        }
    }
}

/// Host that counts `ready()` calls.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CountingHost(pub Arc<AtomicUsize>);

#[allow(dead_code)]
impl CountingHost {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl HostBridge for CountingHost {
    fn ready(&self) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Host whose `ready()` always fails.
#[allow(dead_code)]
pub struct FailingHost;

impl HostBridge for FailingHost {
    fn ready(&self) -> Result<()> {
        anyhow::bail!("host container unavailable")
    }
}

/// Start a session on the current runtime with a counting host.
#[allow(dead_code)]
pub fn start_session(proxy: Arc<FakeProxy>) -> (Session<FakeProxy>, CountingHost) {
    let host = CountingHost::default();
    let ready = Arc::new(ReadySignal::new(Box::new(host.clone())));
    let session = Session::start(proxy, ready, Handle::current());
    (session, host)
}

/// `latest.json` / `c/{slug}/{id}.json` style body.
#[allow(dead_code)]
pub fn topic_list(topics: &[(u64, &str)]) -> Value {
    let topics: Vec<Value> = topics
        .iter()
        .map(|(id, title)| {
            json!({
                "id": id,
                "title": title,
                "reply_count": 0,
                "last_posted_at": "2024-05-01T10:00:00.000Z",
                "category_id": 4
            })
        })
        .collect();
    json!({"topic_list": {"topics": topics}})
}

/// `categories.json` body; tuples are (id, slug, position).
#[allow(dead_code)]
pub fn category_list(categories: &[(u64, &str, i64)]) -> Value {
    let categories: Vec<Value> = categories
        .iter()
        .map(|(id, slug, position)| {
            json!({
                "id": id,
                "name": slug.to_uppercase(),
                "slug": slug,
                "color": "0088CC",
                "description": null,
                "topic_count": 1,
                "post_count": 2,
                "position": position
            })
        })
        .collect();
    json!({"category_list": {"categories": categories}})
}

/// Render a screen into an off-screen buffer and return its text.
#[allow(dead_code)]
pub fn render_to_string(screen: &mut dyn Screen, width: u16, height: u16) -> String {
    let keymap = Keymap::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|frame| {
            screen
                .render(frame, frame.area(), &RenderContext::new(&keymap))
                .unwrap();
        })
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|y| {
            (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
