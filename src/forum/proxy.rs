//! The proxy boundary between the reader and the forum.
//!
//! Screens never talk to Discourse directly. Every request is a GET of a
//! relative resource path through a [`ForumProxy`], which either forwards it
//! to the forum itself with credentials attached ([`DirectProxy`]) or to a
//! deployed gateway exposing `/api/discourse/{path}` ([`GatewayProxy`]).
//! Both report upstream failures as a JSON `{error, details}` body with the
//! upstream status code preserved.

use super::FetchError;
use crate::config::ForumConfig;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

const USER_AGENT: &str = concat!("forumdeck/", env!("CARGO_PKG_VERSION"));

/// Status and body of one proxied request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyResponse {
    pub status: u16,
    /// `None` when the response body was not JSON.
    pub body: Option<Value>,
}

impl ProxyResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A GET-only gateway to the forum API.
pub trait ForumProxy: Send + Sync + 'static {
    /// Fetch `path` (relative, may carry a query string).
    ///
    /// `Err` is reserved for requests that produced no response at all.
    fn get(&self, path: &str) -> impl Future<Output = Result<ProxyResponse, FetchError>> + Send;
}

/// Credentials the direct proxy appends to every upstream request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumCredentials {
    pub base_url: String,
    pub api_key: String,
    pub api_username: String,
}

impl ForumCredentials {
    /// Credentials are usable only when both the base URL and the key are set.
    pub fn from_config(config: &ForumConfig) -> Option<Self> {
        let base_url = config.base_url.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        let api_key = config.api_key.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            api_username: config.api_username.clone(),
        })
    }

    /// `{base}/{path}`; the query string is only appended when present.
    pub fn upstream_url(&self, path: &str) -> String {
        let path = path.trim_start_matches('/');
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        if query.is_empty() {
            format!("{}/{}", self.base_url, path)
        } else {
            format!("{}/{}?{}", self.base_url, path, query)
        }
    }
}

struct CachedResponse {
    stored_at: Instant,
    response: ProxyResponse,
}

/// Forwards requests straight to the forum, attaching API credentials.
///
/// Successful responses are reused for the revalidation window, so screens
/// may see data up to that old.
pub struct DirectProxy {
    http: Client,
    credentials: Option<ForumCredentials>,
    revalidate: Duration,
    cache: Mutex<HashMap<String, CachedResponse>>,
}

impl DirectProxy {
    pub fn new(credentials: Option<ForumCredentials>, revalidate: Duration) -> Self {
        Self {
            http: Client::new(),
            credentials,
            revalidate,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_config(config: &ForumConfig) -> Self {
        Self::new(ForumCredentials::from_config(config), config.revalidate_window())
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn cached(&self, url: &str) -> Option<ProxyResponse> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache
            .get(url)
            .filter(|entry| entry.stored_at.elapsed() < self.revalidate)
            .map(|entry| entry.response.clone())
    }

    /// Insert `response`, dropping every entry past the revalidation window.
    fn store(&self, url: String, response: &ProxyResponse) {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.retain(|_, entry| entry.stored_at.elapsed() < self.revalidate);
        cache.insert(
            url,
            CachedResponse {
                stored_at: Instant::now(),
                response: response.clone(),
            },
        );
    }

    async fn forward(&self, path: &str) -> ProxyResponse {
        let Some(credentials) = &self.credentials else {
            error!("Discourse base URL or API key missing; cannot proxy {}", path);
            return ProxyResponse::json(500, json!({"error": "Discourse environment variables not set"}));
        };

        let url = credentials.upstream_url(path);
        if let Some(hit) = self.cached(&url) {
            debug!("Serving {} from revalidation cache", url);
            return hit;
        }

        info!("Proxying request to: {}", url);
        let sent = self
            .http
            .get(&url)
            .header("Api-Key", &credentials.api_key)
            .header("Api-Username", &credentials.api_username)
            .header(ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await;

        let response = match sent {
            Ok(response) => response,
            Err(err) => {
                error!("Error in Discourse API proxy: {}", err);
                return internal_error();
            }
        };

        let status = response.status();
        if !status.is_success() {
            let details = response.text().await.unwrap_or_default();
            error!(
                "Error fetching from Discourse API ({}): {}",
                status.as_u16(),
                details
            );
            return ProxyResponse::json(
                status.as_u16(),
                json!({
                    "error": format!(
                        "Error from Discourse API: {}",
                        status.canonical_reason().unwrap_or("Unknown status")
                    ),
                    "details": details,
                }),
            );
        }

        match response.json::<Value>().await {
            Ok(body) => {
                let proxied = ProxyResponse::json(status.as_u16(), body);
                self.store(url, &proxied);
                proxied
            }
            Err(err) => {
                error!("Discourse returned a non-JSON body for {}: {}", url, err);
                internal_error()
            }
        }
    }
}

fn internal_error() -> ProxyResponse {
    ProxyResponse::json(500, json!({"error": "Internal Server Error proxying to Discourse"}))
}

impl ForumProxy for DirectProxy {
    fn get(&self, path: &str) -> impl Future<Output = Result<ProxyResponse, FetchError>> + Send {
        async move { Ok(self.forward(path).await) }
    }
}

/// Talks to a deployed gateway that already holds the forum credentials.
pub struct GatewayProxy {
    http: Client,
    root: String,
}

impl GatewayProxy {
    pub fn new(gateway_url: &str) -> Self {
        Self {
            http: Client::new(),
            root: format!("{}/api/discourse", gateway_url.trim().trim_end_matches('/')),
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.root, path.trim_start_matches('/'))
    }

    async fn request(&self, path: &str) -> Result<ProxyResponse, FetchError> {
        let url = self.url_for(path);
        debug!("GET {}", url);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = serde_json::from_str::<Value>(&text).ok();
        if body.is_none() {
            debug!("Gateway response for {} was not JSON ({} bytes)", url, text.len());
        }
        Ok(ProxyResponse { status, body })
    }
}

impl ForumProxy for GatewayProxy {
    fn get(&self, path: &str) -> impl Future<Output = Result<ProxyResponse, FetchError>> + Send {
        self.request(path)
    }
}

/// The proxy picked from configuration.
pub enum ProxyClient {
    Direct(DirectProxy),
    Gateway(GatewayProxy),
}

impl ProxyClient {
    /// A gateway URL wins; otherwise requests go straight to the forum.
    pub fn from_config(config: &ForumConfig) -> Self {
        match config.gateway_url.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => {
                info!("Using forum gateway at {}", url);
                ProxyClient::Gateway(GatewayProxy::new(url))
            }
            None => ProxyClient::Direct(DirectProxy::from_config(config)),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ProxyClient::Direct(proxy) => match &proxy.credentials {
                Some(credentials) => format!("direct: {}", credentials.base_url),
                None => "direct: not configured".to_string(),
            },
            ProxyClient::Gateway(proxy) => format!("gateway: {}", proxy.root),
        }
    }
}

impl ForumProxy for ProxyClient {
    fn get(&self, path: &str) -> impl Future<Output = Result<ProxyResponse, FetchError>> + Send {
        async move {
            match self {
                ProxyClient::Direct(proxy) => Ok(proxy.forward(path).await),
                ProxyClient::Gateway(proxy) => proxy.request(path).await,
            }
        }
    }
}
