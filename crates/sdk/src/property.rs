//! Declarative parameter schema — what the host renders as form fields.
//!
//! Properties are pure data. Serialization follows the host's camelCase
//! JSON convention so a descriptor dump can be fed straight to the host's
//! registration endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// One selectable choice in an `options`/`multiOptions` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyOption {
    /// Human-readable label.
    pub name: String,
    /// Wire value sent upstream.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Action label shown by hosts that surface operations as actions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl PropertyOption {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            description: None,
            action: None,
        }
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Conditional visibility
// ---------------------------------------------------------------------------

/// Show a field only when every listed parameter currently holds one of the
/// listed values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptions {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub show: BTreeMap<String, Vec<String>>,
}

// ---------------------------------------------------------------------------
// Fixed collections
// ---------------------------------------------------------------------------

/// A named group of sub-fields inside a fixed collection.
///
/// The host collects each group as a repeatable list keyed by `name`, which
/// is exactly the nested shape the pre-send composers flatten away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionGroup {
    pub name: String,
    pub display_name: String,
    pub values: Vec<NodeProperty>,
}

impl CollectionGroup {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        values: Vec<NodeProperty>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            values,
        }
    }
}

// ---------------------------------------------------------------------------
// Property kinds
// ---------------------------------------------------------------------------

/// Field type plus its type-specific configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PropertyKind {
    #[serde(rename_all = "camelCase")]
    String {
        #[serde(default)]
        password: bool,
    },
    #[serde(rename_all = "camelCase")]
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_value: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_value: Option<f64>,
    },
    Boolean,
    Options { options: Vec<PropertyOption> },
    #[serde(rename_all = "camelCase")]
    MultiOptions { options: Vec<PropertyOption> },
    #[serde(rename_all = "camelCase")]
    FixedCollection {
        #[serde(default)]
        multiple_values: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
        /// The collection's groups, keyed by group name at collection time.
        options: Vec<CollectionGroup>,
    },
}

// ---------------------------------------------------------------------------
// NodeProperty
// ---------------------------------------------------------------------------

/// A single form field in a node or credential schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
    pub display_name: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: PropertyKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub default: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<DisplayOptions>,
    /// Disallow host-side expressions in this field (selectors only).
    #[serde(default)]
    pub no_data_expression: bool,
}

impl NodeProperty {
    fn with_kind(
        name: impl Into<String>,
        display_name: impl Into<String>,
        kind: PropertyKind,
        default: Value,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            name: name.into(),
            kind,
            required: false,
            default,
            description: None,
            display_options: None,
            no_data_expression: false,
        }
    }

    pub fn string(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            display_name,
            PropertyKind::String { password: false },
            Value::String(String::new()),
        )
    }

    pub fn number(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_kind(
            name,
            display_name,
            PropertyKind::Number {
                min_value: None,
                max_value: None,
            },
            Value::Null,
        )
    }

    pub fn boolean(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self::with_kind(name, display_name, PropertyKind::Boolean, Value::Bool(false))
    }

    pub fn options(
        name: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<PropertyOption>,
    ) -> Self {
        Self::with_kind(
            name,
            display_name,
            PropertyKind::Options { options },
            Value::Null,
        )
    }

    pub fn multi_options(
        name: impl Into<String>,
        display_name: impl Into<String>,
        options: Vec<PropertyOption>,
    ) -> Self {
        Self::with_kind(
            name,
            display_name,
            PropertyKind::MultiOptions { options },
            Value::Array(Vec::new()),
        )
    }

    pub fn fixed_collection(
        name: impl Into<String>,
        display_name: impl Into<String>,
        groups: Vec<CollectionGroup>,
    ) -> Self {
        Self::with_kind(
            name,
            display_name,
            PropertyKind::FixedCollection {
                multiple_values: true,
                placeholder: None,
                options: groups,
            },
            Value::Object(serde_json::Map::new()),
        )
    }

    // ------ builder-style modifiers ------

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Mask the value in the host UI. Only meaningful on string fields.
    pub fn password(mut self) -> Self {
        if let PropertyKind::String { password } = &mut self.kind {
            *password = true;
        }
        self
    }

    pub fn no_data_expression(mut self) -> Self {
        self.no_data_expression = true;
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn default_value(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn min_value(mut self, min: f64) -> Self {
        if let PropertyKind::Number { min_value, .. } = &mut self.kind {
            *min_value = Some(min);
        }
        self
    }

    pub fn max_value(mut self, max: f64) -> Self {
        if let PropertyKind::Number { max_value, .. } = &mut self.kind {
            *max_value = Some(max);
        }
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        if let PropertyKind::FixedCollection { placeholder, .. } = &mut self.kind {
            *placeholder = Some(text.into());
        }
        self
    }

    /// Restrict visibility: shown only while `parameter` holds one of
    /// `values`. Chainable; conditions on different parameters are ANDed.
    pub fn show_only_when<I, S>(mut self, parameter: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let display = self.display_options.get_or_insert_with(DisplayOptions::default);
        display
            .show
            .insert(parameter.into(), values.into_iter().map(Into::into).collect());
        self
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_property_serializes_in_host_convention() {
        let prop = NodeProperty::string("apiKey", "API Key").password().required();
        let value = serde_json::to_value(&prop).expect("serializable");

        assert_eq!(
            value,
            json!({
                "displayName": "API Key",
                "name": "apiKey",
                "type": "string",
                "password": true,
                "required": true,
                "default": "",
                "noDataExpression": false,
            })
        );
    }

    #[test]
    fn show_conditions_on_distinct_parameters_accumulate() {
        let prop = NodeProperty::string("companyId", "Company ID")
            .show_only_when("resource", ["company"])
            .show_only_when("operation", ["get"]);

        let show = &prop.display_options.expect("display options set").show;
        assert_eq!(show["resource"], vec!["company"]);
        assert_eq!(show["operation"], vec!["get"]);
    }

    #[test]
    fn property_round_trips_through_json() {
        let prop = NodeProperty::number("page", "Page")
            .min_value(1.0)
            .default_value(json!(1))
            .describe("Page number for pagination");

        let value = serde_json::to_value(&prop).expect("serializable");
        let back: NodeProperty = serde_json::from_value(value).expect("deserializable");
        assert_eq!(back, prop);
    }
}
