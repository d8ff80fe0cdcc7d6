use serde::Serialize;

/// Placeholder written for any field the report did not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Casualty count written when the details text has no death count.
pub const DEFAULT_DEATHS: &str = "0";

/// Constant value of the trailing `Source Link` column.
pub const SOURCE_MARKER: &str = "#map_div";

/// Column headers of the output table, in record field order.
pub const RECORD_HEADERS: [&str; 11] = [
    "Event Type",
    "Location",
    "Region",
    "Country",
    "Latitude",
    "Longitude",
    "Date",
    "Time UTC",
    "Details",
    "Deaths",
    "Source Link",
];

/// One severe-weather report, normalized to the fixed 11-column schema.
///
/// Every field is always present. Data the report did not carry is the
/// literal [`NOT_AVAILABLE`] (or [`DEFAULT_DEATHS`] for `deaths`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedRecord {
    #[serde(rename = "Event Type")]
    pub event_type: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Region")]
    pub region: String,
    /// Always the configured target country name.
    #[serde(rename = "Country")]
    pub country: String,
    /// Decimal degrees north, copied verbatim from the report.
    #[serde(rename = "Latitude")]
    pub latitude: String,
    /// Decimal degrees west, copied verbatim from the report.
    #[serde(rename = "Longitude")]
    pub longitude: String,
    /// `DD-MM-YYYY`.
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time UTC")]
    pub time_utc: String,
    #[serde(rename = "Details")]
    pub details: String,
    #[serde(rename = "Deaths")]
    pub deaths: String,
    #[serde(rename = "Source Link")]
    pub source_marker: String,
}

/// The country a run harvests reports for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCountry {
    /// Value of the query form's country selector, e.g. `"MA"`.
    pub code: String,
    /// Name as printed in report base info, e.g. `"Morocco"`.
    pub name: String,
}

impl TargetCountry {
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Prefix of the `id` attribute carried by this country's report rows.
    #[must_use]
    pub fn row_id_prefix(&self) -> String {
        format!("{}_", self.code)
    }
}

impl Default for TargetCountry {
    fn default() -> Self {
        Self::new("MA", "Morocco")
    }
}
