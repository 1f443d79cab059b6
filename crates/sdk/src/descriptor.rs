//! The node descriptor — everything the host needs to render and route a
//! node — and its registration-time validation.
//!
//! Rules enforced by [`NodeDescriptor::validate`]:
//! 1. Property names must be unique (top level, and within each collection
//!    group).
//! 2. Options/multi-options fields must declare at least one option; fixed
//!    collections at least one group.
//! 3. Every visibility rule must reference a declared top-level property.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;
use crate::property::{NodeProperty, PropertyKind};
use crate::routing::RequestDefaults;

/// Reference to a credential type the node needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CredentialRef {
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

/// Defaults applied when the node is dropped onto a canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefaults {
    pub name: String,
}

/// A complete node type exposed to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
    pub display_name: String,
    /// Identifier the host registers the node under.
    pub name: String,
    pub group: Vec<String>,
    pub version: u32,
    /// Host-side expression rendered under the node name on the canvas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub description: String,
    pub defaults: NodeDefaults,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credentials: Vec<CredentialRef>,
    pub request_defaults: RequestDefaults,
    pub properties: Vec<NodeProperty>,
}

impl NodeDescriptor {
    /// Validate the descriptor before registering it with the host.
    ///
    /// # Errors
    /// - [`DescriptorError::DuplicateProperty`] if two properties in one
    ///   scope share a name.
    /// - [`DescriptorError::EmptyOptions`] / [`DescriptorError::EmptyCollection`]
    ///   for selector fields with nothing to select.
    /// - [`DescriptorError::UnknownDisplayReference`] if a `show` rule points
    ///   at a parameter that doesn't exist.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        // -------------------------------------------------------------------
        // 1. Top-level property names are unique.
        // -------------------------------------------------------------------
        let mut seen: HashSet<&str> = HashSet::new();
        for property in &self.properties {
            if !seen.insert(property.name.as_str()) {
                return Err(DescriptorError::DuplicateProperty(property.name.clone()));
            }
        }

        // -------------------------------------------------------------------
        // 2. Selector fields actually offer choices (recursing into groups).
        // -------------------------------------------------------------------
        for property in &self.properties {
            validate_property(property)?;
        }

        // -------------------------------------------------------------------
        // 3. Visibility rules only reference declared parameters.
        // -------------------------------------------------------------------
        for property in &self.properties {
            if let Some(display) = &property.display_options {
                for referenced in display.show.keys() {
                    if !seen.contains(referenced.as_str()) {
                        return Err(DescriptorError::UnknownDisplayReference {
                            property: property.name.clone(),
                            referenced: referenced.clone(),
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn validate_property(property: &NodeProperty) -> Result<(), DescriptorError> {
    match &property.kind {
        PropertyKind::Options { options } | PropertyKind::MultiOptions { options } => {
            if options.is_empty() {
                return Err(DescriptorError::EmptyOptions(property.name.clone()));
            }
        }
        PropertyKind::FixedCollection { options: groups, .. } => {
            if groups.is_empty() {
                return Err(DescriptorError::EmptyCollection(property.name.clone()));
            }
            for group in groups {
                let mut seen: HashSet<&str> = HashSet::new();
                for value in &group.values {
                    if !seen.insert(value.name.as_str()) {
                        return Err(DescriptorError::DuplicateProperty(value.name.clone()));
                    }
                    validate_property(value)?;
                }
            }
        }
        PropertyKind::String { .. } | PropertyKind::Number { .. } | PropertyKind::Boolean => {}
    }
    Ok(())
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{CollectionGroup, PropertyOption};
    use serde_json::json;

    fn minimal_descriptor(properties: Vec<NodeProperty>) -> NodeDescriptor {
        NodeDescriptor {
            display_name: "Test".into(),
            name: "test".into(),
            group: vec!["transform".into()],
            version: 1,
            subtitle: None,
            description: "test node".into(),
            defaults: NodeDefaults { name: "Test".into() },
            credentials: vec![],
            request_defaults: RequestDefaults::json("https://api.example.com"),
            properties,
        }
    }

    #[test]
    fn well_formed_descriptor_passes() {
        let descriptor = minimal_descriptor(vec![
            NodeProperty::options(
                "resource",
                "Resource",
                vec![PropertyOption::new("Thing", "thing")],
            )
            .default_value(json!("thing")),
            NodeProperty::string("query", "Query").show_only_when("resource", ["thing"]),
        ]);
        descriptor.validate().expect("should be valid");
    }

    #[test]
    fn duplicate_property_name_is_rejected() {
        let descriptor = minimal_descriptor(vec![
            NodeProperty::string("query", "Query"),
            NodeProperty::string("query", "Query Again"),
        ]);
        assert!(matches!(
            descriptor.validate(),
            Err(DescriptorError::DuplicateProperty(name)) if name == "query"
        ));
    }

    #[test]
    fn empty_options_list_is_rejected() {
        let descriptor =
            minimal_descriptor(vec![NodeProperty::options("resource", "Resource", vec![])]);
        assert!(matches!(
            descriptor.validate(),
            Err(DescriptorError::EmptyOptions(name)) if name == "resource"
        ));
    }

    #[test]
    fn collection_without_groups_is_rejected() {
        let descriptor =
            minimal_descriptor(vec![NodeProperty::fixed_collection("location", "Location", vec![])]);
        assert!(matches!(
            descriptor.validate(),
            Err(DescriptorError::EmptyCollection(name)) if name == "location"
        ));
    }

    #[test]
    fn duplicate_name_inside_a_group_is_rejected() {
        let descriptor = minimal_descriptor(vec![NodeProperty::fixed_collection(
            "location",
            "Location",
            vec![CollectionGroup::new(
                "locationFilter",
                "Location",
                vec![
                    NodeProperty::string("country", "Country"),
                    NodeProperty::string("country", "Country Again"),
                ],
            )],
        )]);
        assert!(matches!(
            descriptor.validate(),
            Err(DescriptorError::DuplicateProperty(name)) if name == "country"
        ));
    }

    #[test]
    fn show_rule_referencing_unknown_parameter_is_rejected() {
        let descriptor = minimal_descriptor(vec![
            NodeProperty::string("query", "Query").show_only_when("operation", ["search"]),
        ]);
        assert!(matches!(
            descriptor.validate(),
            Err(DescriptorError::UnknownDisplayReference { property, referenced })
                if property == "query" && referenced == "operation"
        ));
    }
}
