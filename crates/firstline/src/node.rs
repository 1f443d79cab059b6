//! The top-level node descriptor.

use serde_json::json;

use sdk::{
    CredentialRef, NodeDefaults, NodeDescriptor, NodeProperty, PropertyOption, RequestDefaults,
};

use crate::company;
use crate::constants::{BASE_URL, CREDENTIAL_NAME};

/// Build the full Firstline node descriptor.
///
/// The descriptor is pure data: the host renders its properties as form
/// fields and builds requests from the per-operation routing rules in
/// [`company`].
pub fn firstline_node() -> NodeDescriptor {
    let mut properties = vec![NodeProperty::options(
        "resource",
        "Resource",
        vec![PropertyOption::new("Company", "company")],
    )
    .default_value(json!("company"))
    .no_data_expression()];
    properties.extend(company::properties());

    NodeDescriptor {
        display_name: "Firstline".into(),
        name: "firstline".into(),
        group: vec!["transform".into()],
        version: 1,
        subtitle: Some("={{$parameter[\"operation\"] + \": \" + $parameter[\"resource\"]}}".into()),
        description: "Interact with the Firstline API".into(),
        defaults: NodeDefaults {
            name: "Firstline".into(),
        },
        credentials: vec![CredentialRef {
            name: CREDENTIAL_NAME.into(),
            required: true,
        }],
        request_defaults: RequestDefaults::json(BASE_URL),
        properties,
    }
}
