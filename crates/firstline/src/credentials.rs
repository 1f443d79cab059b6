//! The `firstlineApi` credential type.

use sdk::{Authenticate, CredentialDescriptor, CredentialTest, HttpMethod, NodeProperty};

use crate::constants::{BASE_URL, CREDENTIAL_NAME};

/// A single API key, injected as the `x-api-key` header on every request
/// and verified at setup time with a `GET /health` probe.
pub fn firstline_api() -> CredentialDescriptor {
    CredentialDescriptor {
        name: CREDENTIAL_NAME.into(),
        display_name: "Firstline API".into(),
        documentation_url: Some("https://docs.firstline.sh".into()),
        properties: vec![NodeProperty::string("apiKey", "API Key").password().required()],
        authenticate: Authenticate::Header {
            header: "x-api-key".into(),
        },
        test: CredentialTest {
            base_url: BASE_URL.into(),
            url: "/health".into(),
            method: HttpMethod::Get,
        },
    }
}
