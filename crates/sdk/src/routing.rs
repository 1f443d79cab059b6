//! Request routing — how the host turns selected parameters into requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::request::{HttpMethod, HttpRequestOptions};

/// Defaults applied to every request a node issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDefaults {
    pub base_url: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
}

impl RequestDefaults {
    /// JSON-in/JSON-out defaults against the given base URL.
    pub fn json(base_url: impl Into<String>) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Accept".to_owned(), "application/json".to_owned());
        headers.insert("Content-Type".to_owned(), "application/json".to_owned());
        Self {
            base_url: base_url.into(),
            headers,
        }
    }

    /// Seed a request from these defaults.
    pub fn request(&self, method: HttpMethod, url: impl Into<String>) -> HttpRequestOptions {
        let mut request = HttpRequestOptions::new(method, self.base_url.clone(), url);
        request.headers = self.headers.clone();
        request
    }
}

/// Per-operation routing rule.
///
/// `url` may carry host-side expression placeholders (for example
/// `{{$parameter.companyId}}`); expression evaluation stays with the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRouting {
    pub method: HttpMethod,
    pub url: String,
}
