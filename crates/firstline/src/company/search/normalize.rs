//! Pre-send normalization of the search body.
//!
//! Field values arrive exactly as collected from the form: blank scalars,
//! empty multi-selects, and grouped repeatable collections. The upstream
//! API wants none of that — empty values must be absent and the grouped
//! filters flattened. Each pass owns exactly one body field and never reads
//! another, so the pipeline only has to preserve field declaration order,
//! never coordinate between passes.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use sdk::{HttpRequestOptions, PreSend};

use super::filters::{IndustryFilter, LocationFilter};

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

/// A named body transformation scoped to a single field.
#[derive(Debug, Clone, Copy)]
pub struct NormalizePass {
    field: &'static str,
    action: Action,
}

#[derive(Debug, Clone, Copy)]
enum Action {
    /// Drop the field when its value is `""`, `null`, or `[]`.
    PruneEmpty,
    /// Flatten `{locationFilter, radiusFilter}` groups into one tagged list.
    ComposeLocation,
    /// Unwrap the `{industryFilter}` group into a flat list.
    ComposeIndustries,
}

impl NormalizePass {
    pub const fn prune(field: &'static str) -> Self {
        Self {
            field,
            action: Action::PruneEmpty,
        }
    }

    pub const fn location(field: &'static str) -> Self {
        Self {
            field,
            action: Action::ComposeLocation,
        }
    }

    pub const fn industries(field: &'static str) -> Self {
        Self {
            field,
            action: Action::ComposeIndustries,
        }
    }

    /// The one body field this pass owns.
    pub fn field(&self) -> &'static str {
        self.field
    }

    fn apply(&self, body: &mut Map<String, Value>) {
        match self.action {
            Action::PruneEmpty => prune_empty(body, self.field),
            Action::ComposeLocation => compose_location(body, self.field),
            Action::ComposeIndustries => compose_industries(body, self.field),
        }
    }
}

#[async_trait]
impl PreSend for NormalizePass {
    async fn run(&self, mut request: HttpRequestOptions) -> HttpRequestOptions {
        if let Some(body) = request.body.as_mut() {
            self.apply(body);
        }
        request
    }
}

/// Passes for `company:search`, in field declaration order. `page` and
/// `includeNonActive` always carry a value and have no pass.
pub const SEARCH_PASSES: [NormalizePass; 8] = [
    NormalizePass::prune("query"),
    NormalizePass::prune("legalForm"),
    NormalizePass::prune("foundingDateRanges"),
    NormalizePass::prune("revenueRange"),
    NormalizePass::prune("earningsRange"),
    NormalizePass::prune("mandatoryFields"),
    NormalizePass::location("location"),
    NormalizePass::industries("industries"),
];

/// Run the full pipeline; the host calls this immediately before dispatch.
pub async fn apply(mut request: HttpRequestOptions) -> HttpRequestOptions {
    for pass in &SEARCH_PASSES {
        request = pass.run(request).await;
    }
    request
}

// ---------------------------------------------------------------------------
// Pruning
// ---------------------------------------------------------------------------

fn prune_empty(body: &mut Map<String, Value>, field: &str) {
    let empty = match body.get(field) {
        Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(_) | None => false,
    };
    if empty {
        debug!(field, "dropping empty field from search body");
        body.remove(field);
    }
}

// ---------------------------------------------------------------------------
// Location composition
// ---------------------------------------------------------------------------

/// Grouped location input as collected from the form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LocationGroups {
    #[serde(default)]
    location_filter: Vec<AreaEntry>,
    #[serde(default)]
    radius_filter: Vec<RadiusEntry>,
}

#[derive(Debug, Deserialize)]
struct AreaEntry {
    country: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    city: String,
}

#[derive(Debug, Deserialize)]
struct RadiusEntry {
    latitude: f64,
    longitude: f64,
    radius: f64,
}

/// Merge the two repeatable groups into one tagged list: area entries first
/// (in entry order), then radius entries. Anything that doesn't parse as
/// the grouped form — including a body that was already normalized — counts
/// as an absent grouping and the field is deleted.
fn compose_location(body: &mut Map<String, Value>, field: &str) {
    let Some(raw) = body.get(field) else { return };

    let groups = match LocationGroups::deserialize(raw) {
        Ok(groups) => groups,
        Err(_) => {
            debug!(field, "location grouping not in collected form, dropping");
            body.remove(field);
            return;
        }
    };

    let mut composed: Vec<LocationFilter> =
        Vec::with_capacity(groups.location_filter.len() + groups.radius_filter.len());

    for area in groups.location_filter {
        composed.push(LocationFilter::Area {
            country: area.country,
            state: non_empty(area.state),
            city: non_empty(area.city),
        });
    }
    for radius in groups.radius_filter {
        composed.push(LocationFilter::Radius {
            latitude: radius.latitude,
            longitude: radius.longitude,
            radius: radius.radius,
        });
    }

    replace_or_remove(body, field, &composed);
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

// ---------------------------------------------------------------------------
// Industry composition
// ---------------------------------------------------------------------------

/// Grouped industry input as collected from the form.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IndustryGroups {
    #[serde(default)]
    industry_filter: Vec<IndustryFilter>,
}

/// Unwrap the single group, preserving entry order; entries pass through
/// unchanged. Absent, unparseable, or empty groupings delete the field.
fn compose_industries(body: &mut Map<String, Value>, field: &str) {
    let Some(raw) = body.get(field) else { return };

    let groups = match IndustryGroups::deserialize(raw) {
        Ok(groups) => groups,
        Err(_) => {
            debug!(field, "industry grouping not in collected form, dropping");
            body.remove(field);
            return;
        }
    };

    replace_or_remove(body, field, &groups.industry_filter);
}

/// Replace the field with the composed list, or delete it when the list is
/// empty (or, unexpectedly, unserializable).
fn replace_or_remove<T: serde::Serialize>(body: &mut Map<String, Value>, field: &str, list: &[T]) {
    if list.is_empty() {
        body.remove(field);
        return;
    }
    match serde_json::to_value(list) {
        Ok(value) => {
            body.insert(field.to_owned(), value);
        }
        Err(_) => {
            body.remove(field);
        }
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;
    use sdk::HttpMethod;
    use serde_json::json;

    fn body_from(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    fn search_request(body: Value) -> HttpRequestOptions {
        HttpRequestOptions::new(HttpMethod::Post, "https://api.firstline.sh", "/search")
            .json_body(body_from(body))
    }

    // ------ pruning ------

    #[test]
    fn empty_string_null_and_empty_list_are_pruned() {
        let mut body = body_from(json!({
            "query": "",
            "legalForm": null,
            "revenueRange": [],
        }));

        prune_empty(&mut body, "query");
        prune_empty(&mut body, "legalForm");
        prune_empty(&mut body, "revenueRange");

        assert!(body.is_empty());
    }

    #[test]
    fn non_empty_values_survive_pruning_unchanged() {
        let mut body = body_from(json!({
            "query": "Acme",
            "foundingDateRanges": ["less_than_1y"],
            "page": 1,
            "includeNonActive": false,
        }));

        for field in ["query", "foundingDateRanges", "page", "includeNonActive"] {
            prune_empty(&mut body, field);
        }

        assert_eq!(body["query"], json!("Acme"));
        assert_eq!(body["foundingDateRanges"], json!(["less_than_1y"]));
        // Numbers and booleans are never "empty", even falsy ones.
        assert_eq!(body["page"], json!(1));
        assert_eq!(body["includeNonActive"], json!(false));
    }

    #[test]
    fn pruning_an_absent_field_is_a_no_op() {
        let mut body = body_from(json!({ "query": "Acme" }));
        prune_empty(&mut body, "legalForm");
        assert_eq!(body.len(), 1);
    }

    // ------ location composition ------

    #[test]
    fn area_entries_precede_radius_entries() {
        let mut body = body_from(json!({
            "location": {
                "locationFilter": [{ "country": "DE", "city": "Berlin" }],
                "radiusFilter": [{ "latitude": 48.2, "longitude": 16.3, "radius": 5.0 }],
            }
        }));

        compose_location(&mut body, "location");

        assert_eq!(
            body["location"],
            json!([
                { "type": "location", "country": "DE", "city": "Berlin" },
                { "type": "radius", "latitude": 48.2, "longitude": 16.3, "radius": 5.0 },
            ])
        );
    }

    #[test]
    fn blank_state_and_city_are_omitted_not_sent_empty() {
        let mut body = body_from(json!({
            "location": {
                "locationFilter": [
                    { "country": "AT", "state": "", "city": "" },
                    { "country": "DE", "state": "Bayern", "city": "" },
                ],
            }
        }));

        compose_location(&mut body, "location");

        assert_eq!(
            body["location"],
            json!([
                { "type": "location", "country": "AT" },
                { "type": "location", "country": "DE", "state": "Bayern" },
            ])
        );
    }

    #[test]
    fn entry_order_within_each_group_is_preserved() {
        let mut body = body_from(json!({
            "location": {
                "locationFilter": [
                    { "country": "DE", "city": "Berlin" },
                    { "country": "DE", "city": "Hamburg" },
                    { "country": "AT", "city": "Wien" },
                ],
            }
        }));

        compose_location(&mut body, "location");

        let cities: Vec<&str> = body["location"]
            .as_array()
            .expect("composed list")
            .iter()
            .map(|entry| entry["city"].as_str().expect("city set"))
            .collect();
        assert_eq!(cities, vec!["Berlin", "Hamburg", "Wien"]);
    }

    #[test]
    fn empty_or_missing_location_grouping_is_deleted() {
        let mut body = body_from(json!({ "location": {} }));
        compose_location(&mut body, "location");
        assert!(!body.contains_key("location"));

        let mut body = body_from(json!({ "location": null }));
        compose_location(&mut body, "location");
        assert!(!body.contains_key("location"));

        let mut body = body_from(json!({
            "location": { "locationFilter": [], "radiusFilter": [] }
        }));
        compose_location(&mut body, "location");
        assert!(!body.contains_key("location"));

        // Absent altogether: nothing to delete, nothing inserted.
        let mut body = body_from(json!({ "query": "Acme" }));
        compose_location(&mut body, "location");
        assert!(!body.contains_key("location"));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn recomposing_already_flat_output_deletes_the_field() {
        // The flat list is not the grouped form, so a second run treats it
        // as an absent grouping.
        let mut body = body_from(json!({
            "location": [
                { "type": "location", "country": "DE", "city": "Berlin" },
            ]
        }));

        compose_location(&mut body, "location");

        assert!(!body.contains_key("location"));
    }

    // ------ industry composition ------

    #[test]
    fn industry_group_is_unwrapped_verbatim() {
        let mut body = body_from(json!({
            "industries": {
                "industryFilter": [
                    { "standard": "nace", "code": "62.01" },
                    { "standard": "wz", "code": "62.01.9" },
                ],
            }
        }));

        compose_industries(&mut body, "industries");

        assert_eq!(
            body["industries"],
            json!([
                { "standard": "nace", "code": "62.01" },
                { "standard": "wz", "code": "62.01.9" },
            ])
        );
    }

    #[test]
    fn empty_industry_group_is_deleted() {
        let mut body = body_from(json!({ "industries": { "industryFilter": [] } }));
        compose_industries(&mut body, "industries");
        assert!(!body.contains_key("industries"));

        let mut body = body_from(json!({ "industries": {} }));
        compose_industries(&mut body, "industries");
        assert!(!body.contains_key("industries"));
    }

    #[test]
    fn recomposing_already_flat_industries_deletes_the_field() {
        let mut body = body_from(json!({
            "industries": [{ "standard": "nace", "code": "62.01" }]
        }));
        compose_industries(&mut body, "industries");
        assert!(!body.contains_key("industries"));
    }

    // ------ the full pipeline ------

    #[tokio::test]
    async fn pipeline_normalizes_a_mixed_body() {
        let request = search_request(json!({
            "query": "",
            "legalForm": "GmbH",
            "page": 2,
            "includeNonActive": true,
            "foundingDateRanges": [],
            "revenueRange": ["more_than_1b"],
            "earningsRange": [],
            "mandatoryFields": [],
            "location": {
                "locationFilter": [{ "country": "DE", "city": "Berlin" }],
                "radiusFilter": [{ "latitude": 48.2, "longitude": 16.3, "radius": 5.0 }],
            },
            "industries": {
                "industryFilter": [{ "standard": "nace", "code": "62.01" }],
            },
        }));

        let normalized = apply(request).await;
        let body = normalized.body.expect("body survives the pipeline");

        assert_eq!(
            serde_json::to_value(&body).expect("serializable"),
            json!({
                "legalForm": "GmbH",
                "page": 2,
                "includeNonActive": true,
                "revenueRange": ["more_than_1b"],
                "location": [
                    { "type": "location", "country": "DE", "city": "Berlin" },
                    { "type": "radius", "latitude": 48.2, "longitude": 16.3, "radius": 5.0 },
                ],
                "industries": [{ "standard": "nace", "code": "62.01" }],
            })
        );
    }

    #[tokio::test]
    async fn pipeline_is_idempotent_on_surviving_scalar_fields() {
        let request = search_request(json!({
            "query": "Acme",
            "legalForm": "",
            "location": {},
        }));

        let once = apply(request).await;
        let twice = apply(once.clone()).await;

        assert_eq!(once, twice);
        let body = twice.body.expect("body set");
        assert_eq!(body["query"], json!("Acme"));
        assert!(!body.contains_key("legalForm"));
        assert!(!body.contains_key("location"));
    }

    #[tokio::test]
    async fn passes_are_safe_on_a_missing_body() {
        let request =
            HttpRequestOptions::new(HttpMethod::Post, "https://api.firstline.sh", "/search");

        let out = apply(request.clone()).await;

        assert_eq!(out, request);
        assert!(out.body.is_none());
    }

    #[tokio::test]
    async fn passes_never_touch_fields_they_do_not_own() {
        let request = search_request(json!({
            "query": "",
            "somethingElse": "",
        }));

        let out = apply(request).await;
        let body = out.body.expect("body set");

        // "somethingElse" has no pass, so even though it's empty it stays.
        assert!(!body.contains_key("query"));
        assert_eq!(body["somethingElse"], json!(""));
    }
}
