//! The request value threaded through pre-send passes.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// HTTP methods used by node routing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    #[serde(rename = "GET")]
    Get,
    #[serde(rename = "POST")]
    Post,
}

/// An outgoing request under construction.
///
/// The host seeds one of these from the node's request defaults and routing
/// rule, fills `body` with the raw collected parameter values, then hands it
/// through the operation's pre-send passes before dispatching it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpRequestOptions {
    pub method: HttpMethod,
    /// Absolute base; `url` is resolved relative to it.
    pub base_url: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    /// JSON body under construction; `None` for body-less requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
}

impl HttpRequestOptions {
    pub fn new(method: HttpMethod, base_url: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method,
            base_url: base_url.into(),
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Attach a JSON body (raw parameter values, not yet normalized).
    pub fn json_body(mut self, body: Map<String, Value>) -> Self {
        self.body = Some(body);
        self
    }
}

/// A single pre-send pass over the request.
///
/// Declared async to match the host's uniform calling convention; passes do
/// no I/O. A pass must only touch the body field it owns and must be a safe
/// no-op on a missing body, so the host can run the passes of one operation
/// in any order without coordination.
#[async_trait]
pub trait PreSend: Send + Sync {
    async fn run(&self, request: HttpRequestOptions) -> HttpRequestOptions;
}
