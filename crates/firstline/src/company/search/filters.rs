//! Typed wire shapes for the search filters.
//!
//! The form collects location and industry filters as grouped repeatable
//! fields; the upstream API expects flat lists. These are the flat shapes,
//! plus the enum filter sets whose wire values double as the descriptor's
//! option lists (one source of truth for both).

use serde::{Deserialize, Serialize};

use sdk::PropertyOption;

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// One entry of the `location` list, tagged with its variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LocationFilter {
    /// Administrative-area filter. Blank state/city are omitted entirely
    /// rather than sent as empty strings.
    #[serde(rename = "location")]
    Area {
        country: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        state: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        city: Option<String>,
    },
    /// Geo-radius filter around a centre point, radius in kilometres.
    Radius {
        latitude: f64,
        longitude: f64,
        radius: f64,
    },
}

// ---------------------------------------------------------------------------
// Industry
// ---------------------------------------------------------------------------

/// Industry classification standards accepted by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndustryStandard {
    Isic,
    Nace,
    Nace2025,
    Naics,
    Uksic,
    Wz,
}

impl IndustryStandard {
    pub const ALL: [Self; 6] = [
        Self::Isic,
        Self::Nace,
        Self::Nace2025,
        Self::Naics,
        Self::Uksic,
        Self::Wz,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Self::Isic => "isic",
            Self::Nace => "nace",
            Self::Nace2025 => "nace2025",
            Self::Naics => "naics",
            Self::Uksic => "uksic",
            Self::Wz => "wz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Isic => "ISIC",
            Self::Nace => "NACE",
            Self::Nace2025 => "NACE 2025",
            Self::Naics => "NAICS",
            Self::Uksic => "UK SIC",
            Self::Wz => "WZ (German)",
        }
    }

    pub fn options() -> Vec<PropertyOption> {
        Self::ALL
            .iter()
            .map(|standard| PropertyOption::new(standard.label(), standard.wire()))
            .collect()
    }
}

/// One entry of the `industries` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryFilter {
    pub standard: IndustryStandard,
    pub code: String,
}

// ---------------------------------------------------------------------------
// Enum filter sets (OR semantics upstream)
// ---------------------------------------------------------------------------

/// Company-age buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoundingDateRange {
    #[serde(rename = "between_1y_and_5y")]
    Between1yAnd5y,
    #[serde(rename = "between_10y_and_25y")]
    Between10yAnd25y,
    #[serde(rename = "between_5y_and_10y")]
    Between5yAnd10y,
    #[serde(rename = "less_than_1y")]
    LessThan1y,
    #[serde(rename = "more_than_25y")]
    MoreThan25y,
}

impl FoundingDateRange {
    pub const ALL: [Self; 5] = [
        Self::Between1yAnd5y,
        Self::Between10yAnd25y,
        Self::Between5yAnd10y,
        Self::LessThan1y,
        Self::MoreThan25y,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Self::Between1yAnd5y => "between_1y_and_5y",
            Self::Between10yAnd25y => "between_10y_and_25y",
            Self::Between5yAnd10y => "between_5y_and_10y",
            Self::LessThan1y => "less_than_1y",
            Self::MoreThan25y => "more_than_25y",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Between1yAnd5y => "Between 1 and 5 Years",
            Self::Between10yAnd25y => "Between 10 and 25 Years",
            Self::Between5yAnd10y => "Between 5 and 10 Years",
            Self::LessThan1y => "Less Than 1 Year",
            Self::MoreThan25y => "More Than 25 Years",
        }
    }

    pub fn options() -> Vec<PropertyOption> {
        Self::ALL
            .iter()
            .map(|range| PropertyOption::new(range.label(), range.wire()))
            .collect()
    }
}

/// Annual-revenue buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueRange {
    #[serde(rename = "between_100m_and_1b")]
    Between100mAnd1b,
    #[serde(rename = "between_10m_and_100m")]
    Between10mAnd100m,
    #[serde(rename = "between_1m_and_10m")]
    Between1mAnd10m,
    #[serde(rename = "less_than_1m")]
    LessThan1m,
    #[serde(rename = "more_than_1b")]
    MoreThan1b,
}

impl RevenueRange {
    pub const ALL: [Self; 5] = [
        Self::Between100mAnd1b,
        Self::Between10mAnd100m,
        Self::Between1mAnd10m,
        Self::LessThan1m,
        Self::MoreThan1b,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Self::Between100mAnd1b => "between_100m_and_1b",
            Self::Between10mAnd100m => "between_10m_and_100m",
            Self::Between1mAnd10m => "between_1m_and_10m",
            Self::LessThan1m => "less_than_1m",
            Self::MoreThan1b => "more_than_1b",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Between100mAnd1b => "Between 100M and 1B",
            Self::Between10mAnd100m => "Between 10M and 100M",
            Self::Between1mAnd10m => "Between 1M and 10M",
            Self::LessThan1m => "Less Than 1M",
            Self::MoreThan1b => "More Than 1B",
        }
    }

    pub fn options() -> Vec<PropertyOption> {
        Self::ALL
            .iter()
            .map(|range| PropertyOption::new(range.label(), range.wire()))
            .collect()
    }
}

/// Annual-earnings buckets, split by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EarningsRange {
    #[serde(rename = "negative_between_0_and_1m")]
    NegativeBetween0And1m,
    #[serde(rename = "negative_between_100m_and_1b")]
    NegativeBetween100mAnd1b,
    #[serde(rename = "negative_between_10m_and_100m")]
    NegativeBetween10mAnd100m,
    #[serde(rename = "negative_between_1m_and_10m")]
    NegativeBetween1mAnd10m,
    #[serde(rename = "negative_more_than_1b")]
    NegativeMoreThan1b,
    #[serde(rename = "positive_between_0_and_1m")]
    PositiveBetween0And1m,
    #[serde(rename = "positive_between_100m_and_1b")]
    PositiveBetween100mAnd1b,
    #[serde(rename = "positive_between_10m_and_100m")]
    PositiveBetween10mAnd100m,
    #[serde(rename = "positive_between_1m_and_10m")]
    PositiveBetween1mAnd10m,
    #[serde(rename = "positive_more_than_1b")]
    PositiveMoreThan1b,
}

impl EarningsRange {
    pub const ALL: [Self; 10] = [
        Self::NegativeBetween0And1m,
        Self::NegativeBetween100mAnd1b,
        Self::NegativeBetween10mAnd100m,
        Self::NegativeBetween1mAnd10m,
        Self::NegativeMoreThan1b,
        Self::PositiveBetween0And1m,
        Self::PositiveBetween100mAnd1b,
        Self::PositiveBetween10mAnd100m,
        Self::PositiveBetween1mAnd10m,
        Self::PositiveMoreThan1b,
    ];

    pub fn wire(self) -> &'static str {
        match self {
            Self::NegativeBetween0And1m => "negative_between_0_and_1m",
            Self::NegativeBetween100mAnd1b => "negative_between_100m_and_1b",
            Self::NegativeBetween10mAnd100m => "negative_between_10m_and_100m",
            Self::NegativeBetween1mAnd10m => "negative_between_1m_and_10m",
            Self::NegativeMoreThan1b => "negative_more_than_1b",
            Self::PositiveBetween0And1m => "positive_between_0_and_1m",
            Self::PositiveBetween100mAnd1b => "positive_between_100m_and_1b",
            Self::PositiveBetween10mAnd100m => "positive_between_10m_and_100m",
            Self::PositiveBetween1mAnd10m => "positive_between_1m_and_10m",
            Self::PositiveMoreThan1b => "positive_more_than_1b",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::NegativeBetween0And1m => "Negative: 0 to 1M Loss",
            Self::NegativeBetween100mAnd1b => "Negative: 100M to 1B Loss",
            Self::NegativeBetween10mAnd100m => "Negative: 10M to 100M Loss",
            Self::NegativeBetween1mAnd10m => "Negative: 1M to 10M Loss",
            Self::NegativeMoreThan1b => "Negative: More Than 1B Loss",
            Self::PositiveBetween0And1m => "Positive: 0 to 1M Profit",
            Self::PositiveBetween100mAnd1b => "Positive: 100M to 1B Profit",
            Self::PositiveBetween10mAnd100m => "Positive: 10M to 100M Profit",
            Self::PositiveBetween1mAnd10m => "Positive: 1M to 10M Profit",
            Self::PositiveMoreThan1b => "Positive: More Than 1B Profit",
        }
    }

    pub fn options() -> Vec<PropertyOption> {
        Self::ALL
            .iter()
            .map(|range| PropertyOption::new(range.label(), range.wire()))
            .collect()
    }
}

/// Fields a matching company must have populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MandatoryField {
    Website,
}

impl MandatoryField {
    pub const ALL: [Self; 1] = [Self::Website];

    pub fn wire(self) -> &'static str {
        match self {
            Self::Website => "website",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Website => "Website",
        }
    }

    pub fn options() -> Vec<PropertyOption> {
        Self::ALL
            .iter()
            .map(|field| PropertyOption::new(field.label(), field.wire()))
            .collect()
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
    fn location_variants_serialize_with_type_tags() {
        let area = LocationFilter::Area {
            country: "DE".into(),
            state: None,
            city: Some("Berlin".into()),
        };
        assert_eq!(
            serde_json::to_value(&area).expect("serializable"),
            json!({ "type": "location", "country": "DE", "city": "Berlin" })
        );

        let radius = LocationFilter::Radius {
            latitude: 48.2,
            longitude: 16.3,
            radius: 5.0,
        };
        assert_eq!(
            serde_json::to_value(&radius).expect("serializable"),
            json!({ "type": "radius", "latitude": 48.2, "longitude": 16.3, "radius": 5.0 })
        );
    }

    #[test]
    fn wire_values_match_serde_renames() {
        for range in FoundingDateRange::ALL {
            assert_eq!(serde_json::to_value(range).expect("serializable"), json!(range.wire()));
        }
        for range in RevenueRange::ALL {
            assert_eq!(serde_json::to_value(range).expect("serializable"), json!(range.wire()));
        }
        for range in EarningsRange::ALL {
            assert_eq!(serde_json::to_value(range).expect("serializable"), json!(range.wire()));
        }
        for standard in IndustryStandard::ALL {
            assert_eq!(
                serde_json::to_value(standard).expect("serializable"),
                json!(standard.wire())
            );
        }
        for field in MandatoryField::ALL {
            assert_eq!(serde_json::to_value(field).expect("serializable"), json!(field.wire()));
        }
    }

    #[test]
    fn industry_filter_round_trips() {
        let filter = IndustryFilter {
            standard: IndustryStandard::Nace,
            code: "62.01".into(),
        };
        let value = serde_json::to_value(&filter).expect("serializable");
        assert_eq!(value, json!({ "standard": "nace", "code": "62.01" }));
        let back: IndustryFilter = serde_json::from_value(value).expect("deserializable");
        assert_eq!(back, filter);
    }
}
