//! Credential descriptors — how the host stores and injects API secrets.

use serde::{Deserialize, Serialize};

use crate::property::NodeProperty;
use crate::request::{HttpMethod, HttpRequestOptions};

/// How the stored secret is attached to outgoing requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Authenticate {
    /// Static header injection: the secret becomes the value of `header`.
    Header { header: String },
}

impl Authenticate {
    /// Host-side helper: attach the secret to a request under construction.
    pub fn apply(&self, request: &mut HttpRequestOptions, secret: &str) {
        match self {
            Self::Header { header } => {
                request.headers.insert(header.clone(), secret.to_owned());
            }
        }
    }
}

/// Request issued once at credential-setup time to verify the secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialTest {
    pub base_url: String,
    pub url: String,
    pub method: HttpMethod,
}

impl CredentialTest {
    /// Build the probe request the host fires (credential already injected
    /// via [`Authenticate::apply`]).
    pub fn request(&self) -> HttpRequestOptions {
        HttpRequestOptions::new(self.method, self.base_url.clone(), self.url.clone())
    }
}

/// A complete credential type exposed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
    /// Identifier referenced from node descriptors.
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation_url: Option<String>,
    /// Form fields the user fills when creating the credential.
    pub properties: Vec<NodeProperty>,
    pub authenticate: Authenticate,
    pub test: CredentialTest,
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_authentication_injects_the_secret() {
        let auth = Authenticate::Header {
            header: "x-api-key".into(),
        };
        let mut request =
            HttpRequestOptions::new(HttpMethod::Get, "https://api.example.com", "/health");

        auth.apply(&mut request, "s3cr3t");

        assert_eq!(request.headers["x-api-key"], "s3cr3t");
    }
}
