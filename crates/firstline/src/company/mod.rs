//! The `company` resource — `get` and `search` operations.

pub mod get;
pub mod search;

use serde_json::json;

use sdk::{HttpMethod, NodeProperty, OperationRouting, PropertyOption};

/// Operations available on the company resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyOperation {
    Get,
    Search,
}

impl CompanyOperation {
    /// Routing rule the host applies when this operation is selected.
    pub fn routing(self) -> OperationRouting {
        match self {
            Self::Get => OperationRouting {
                method: HttpMethod::Get,
                url: "=/company/{{$parameter.companyId}}".into(),
            },
            Self::Search => OperationRouting {
                method: HttpMethod::Post,
                url: "/search".into(),
            },
        }
    }
}

/// All form fields for the company resource: the operation selector first,
/// then the per-operation fields in declaration order.
pub fn properties() -> Vec<NodeProperty> {
    let mut properties = vec![operation_selector()];
    properties.extend(get::properties());
    properties.extend(search::properties());
    properties
}

fn operation_selector() -> NodeProperty {
    NodeProperty::options(
        "operation",
        "Operation",
        vec![
            PropertyOption::new("Get", "get")
                .action("Get a company")
                .describe("Get a single company by ID"),
            PropertyOption::new("Search", "search")
                .action("Search companies")
                .describe("Search for companies with filters"),
        ],
    )
    .default_value(json!("search"))
    .no_data_expression()
    .show_only_when("resource", ["company"])
}
