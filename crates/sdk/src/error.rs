//! Descriptor-level error type.

use thiserror::Error;

/// Errors surfaced by [`crate::NodeDescriptor::validate`].
///
/// The host rejects the node at registration time on any of these; nothing
/// here is recoverable at request time.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// Two properties in the same scope share a name.
    #[error("duplicate property name: '{0}'")]
    DuplicateProperty(String),

    /// An options/multi-options field declares no selectable options.
    #[error("property '{0}' declares an empty options list")]
    EmptyOptions(String),

    /// A fixed collection declares no groups.
    #[error("fixed collection '{0}' declares no groups")]
    EmptyCollection(String),

    /// A visibility rule references a parameter that doesn't exist.
    #[error("property '{property}' is shown based on unknown parameter '{referenced}'")]
    UnknownDisplayReference {
        property: String,
        referenced: String,
    },
}
