//! Shared constants for the Firstline node.

/// Base URL of the Firstline API. Routing URLs are resolved relative to it.
pub const BASE_URL: &str = "https://api.firstline.sh";

/// Credential type identifier, referenced from the node descriptor.
pub const CREDENTIAL_NAME: &str = "firstlineApi";
