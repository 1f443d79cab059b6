//! `company:search` — filtered company search.
//!
//! The form exposes scalar filters, multi-select enum filters, and two
//! grouped repeatable filters (location, industry). Right before dispatch
//! the pipeline in [`normalize`] prunes empty values and flattens the
//! grouped filters into the shape `POST /search` expects.

pub mod filters;
pub mod normalize;

use serde_json::{json, Map, Value};

use sdk::{CollectionGroup, HttpMethod, HttpRequestOptions, NodeProperty, PropertyOption, RequestDefaults};

use crate::constants::BASE_URL;
use filters::{EarningsRange, FoundingDateRange, IndustryStandard, MandatoryField, RevenueRange};

/// All search form fields, in declaration order. The pipeline in
/// [`normalize::SEARCH_PASSES`] mirrors this order.
pub fn properties() -> Vec<NodeProperty> {
    vec![
        // Basic text search
        search_field(
            NodeProperty::string("query", "Query")
                .describe("Search by company name (contains logic, case-insensitive)"),
        ),
        search_field(
            NodeProperty::string("legalForm", "Legal Form")
                .describe("Filter by legal form (e.g., \"GmbH\", \"AG\")"),
        ),
        search_field(
            NodeProperty::number("page", "Page")
                .min_value(1.0)
                .default_value(json!(1))
                .describe("Page number for pagination"),
        ),
        search_field(
            NodeProperty::boolean("includeNonActive", "Include Non-Active").describe(
                "Whether to include companies with non-active status (dissolved, liquidation, etc.)",
            ),
        ),
        // Multi-select enum filters
        search_field(
            NodeProperty::multi_options(
                "foundingDateRanges",
                "Founding Date Ranges",
                FoundingDateRange::options(),
            )
            .describe("Filter by company age (multiple selections connected with OR)"),
        ),
        search_field(
            NodeProperty::multi_options("revenueRange", "Revenue Range", RevenueRange::options())
                .describe("Filter by revenue range (multiple selections connected with OR)"),
        ),
        search_field(
            NodeProperty::multi_options("earningsRange", "Earnings Range", EarningsRange::options())
                .describe("Filter by earnings range (multiple selections connected with OR)"),
        ),
        search_field(
            NodeProperty::multi_options(
                "mandatoryFields",
                "Mandatory Fields",
                MandatoryField::options(),
            )
            .describe("Only return companies that have these fields populated"),
        ),
        // Grouped repeatable filters, flattened by the pre-send pipeline
        search_field(
            NodeProperty::fixed_collection(
                "location",
                "Location Filters",
                vec![area_group(), radius_group()],
            )
            .placeholder("Add Location Filter")
            .describe("Filter by location (country/city or radius search)"),
        ),
        search_field(
            NodeProperty::fixed_collection("industries", "Industry Filters", vec![industry_group()])
                .placeholder("Add Industry Filter")
                .describe("Filter by industry codes (multiple selections connected with OR)"),
        ),
    ]
}

fn search_field(property: NodeProperty) -> NodeProperty {
    property
        .show_only_when("resource", ["company"])
        .show_only_when("operation", ["search"])
}

fn area_group() -> CollectionGroup {
    CollectionGroup::new(
        "locationFilter",
        "Location",
        vec![
            NodeProperty::options(
                "country",
                "Country",
                vec![
                    PropertyOption::new("Austria", "AT"),
                    PropertyOption::new("Germany", "DE"),
                ],
            )
            .default_value(json!("DE"))
            .required()
            .describe("Country to filter by"),
            NodeProperty::string("state", "State").describe("State/region to filter by (optional)"),
            NodeProperty::string("city", "City").describe("City to filter by (optional)"),
        ],
    )
}

fn radius_group() -> CollectionGroup {
    CollectionGroup::new(
        "radiusFilter",
        "Radius Search",
        vec![
            NodeProperty::number("latitude", "Latitude")
                .min_value(-90.0)
                .max_value(90.0)
                .default_value(json!(48.2082))
                .required()
                .describe("Latitude of the center point"),
            NodeProperty::number("longitude", "Longitude")
                .min_value(-180.0)
                .max_value(180.0)
                .default_value(json!(16.3738))
                .required()
                .describe("Longitude of the center point"),
            NodeProperty::number("radius", "Radius (Km)")
                .min_value(0.0)
                .default_value(json!(10))
                .required()
                .describe("Search radius in kilometers"),
        ],
    )
}

fn industry_group() -> CollectionGroup {
    CollectionGroup::new(
        "industryFilter",
        "Industry",
        vec![
            NodeProperty::options("standard", "Standard", IndustryStandard::options())
                .default_value(json!("nace"))
                .required()
                .describe("Industry classification standard"),
            NodeProperty::string("code", "Code")
                .required()
                .describe("Industry code (e.g., \"62.01\" for software development)"),
        ],
    )
}

/// Seed the search request: routing defaults plus the raw collected
/// parameter values as body. The body is not yet normalized — the host runs
/// [`normalize::apply`] immediately before transmission.
pub fn request(raw_params: Map<String, Value>) -> HttpRequestOptions {
    RequestDefaults::json(BASE_URL)
        .request(HttpMethod::Post, "/search")
        .json_body(raw_params)
}
