//! Discourse forum access.
//!
//! Everything that knows about the remote forum lives here: the proxy
//! boundary requests go through, the resource paths the screens use, and the
//! wire models with their minimal validation.

pub mod error;
pub mod models;
pub mod paths;
pub mod proxy;

pub use error::FetchError;
pub use models::{Category, CategoryTopics, Post, TopicDetailRecord, TopicSummary};
pub use proxy::{DirectProxy, ForumCredentials, ForumProxy, GatewayProxy, ProxyClient, ProxyResponse};
