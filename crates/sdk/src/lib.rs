//! `sdk` crate — the host-platform contract an integration node is written
//! against.
//!
//! A node package has two halves: declarative descriptors (what the host
//! renders as forms and turns into HTTP requests) and pre-send passes (the
//! only executable surface, run against the request right before dispatch).
//! This crate defines the shared vocabulary for both. The host runtime owns
//! everything else — HTTP dispatch, credential injection, and expression
//! evaluation.

pub mod credential;
pub mod descriptor;
pub mod error;
pub mod property;
pub mod request;
pub mod routing;

pub use credential::{Authenticate, CredentialDescriptor, CredentialTest};
pub use descriptor::{CredentialRef, NodeDefaults, NodeDescriptor};
pub use error::DescriptorError;
pub use property::{CollectionGroup, DisplayOptions, NodeProperty, PropertyKind, PropertyOption};
pub use request::{HttpMethod, HttpRequestOptions, PreSend};
pub use routing::{OperationRouting, RequestDefaults};
