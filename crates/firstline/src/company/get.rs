//! `company:get` — fetch a single company by ID.

use sdk::{HttpMethod, HttpRequestOptions, NodeProperty, RequestDefaults};

use crate::constants::BASE_URL;

pub fn properties() -> Vec<NodeProperty> {
    vec![NodeProperty::string("companyId", "Company ID")
        .required()
        .describe("The UUID of the company to retrieve")
        .show_only_when("resource", ["company"])
        .show_only_when("operation", ["get"])]
}

/// Build the request for one company, with the routing expression already
/// resolved to a concrete ID.
pub fn request(company_id: &str) -> HttpRequestOptions {
    RequestDefaults::json(BASE_URL).request(HttpMethod::Get, format!("/company/{company_id}"))
}
