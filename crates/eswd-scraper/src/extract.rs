//! Record extraction: one [`ReportFragment`] in, one [`NormalizedRecord`] out.
//!
//! Base-info lines carry no labels, so each line is classified by an ordered
//! chain of text rules ([`LINE_RULES`]). The first rule that accepts a line
//! decides what it is; a line no rule accepts becomes the region, then the
//! location, and is ignored once both are known.
//!
//! Everything here is pure text processing with no HTML or network access.

use std::sync::LazyLock;

use eswd_core::{
    NormalizedRecord, TargetCountry, DEFAULT_DEATHS, NOT_AVAILABLE, SOURCE_MARKER,
};
use regex::Regex;

use crate::error::ScraperError;
use crate::types::ReportFragment;

static COORDINATES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([\d\.]+)\s*N,\s*([\d\.]+)\s*W\)").expect("valid coordinates regex")
});

static DEATHS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Number of people dead: (\d+)").expect("valid deaths regex")
});

/// Separator between region and location on a combined line.
const REGION_LOCATION_SEPARATOR: &str = " | ";

/// Character length of a `DD-MM-YYYY` date.
const DATE_LEN: usize = 10;

/// What a single base-info line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    /// Mentions the target country.
    Country,
    Date(&'a str),
    Time(&'a str),
    Coordinates {
        latitude: &'a str,
        longitude: &'a str,
    },
    /// Parenthesised, but not in the `(<lat> N, <lon> W)` shape. Dropped.
    UnparsedCoordinates,
    /// Contains the `" | "` separator; split when applied.
    RegionLocation(&'a str),
    /// Accepted by no rule.
    Bare(&'a str),
}

type LineRule = for<'a, 'c> fn(&'a str, &'c str) -> Option<LineKind<'a>>;

/// Classification rules in priority order.
pub(crate) const LINE_RULES: [LineRule; 5] = [
    country_rule,
    date_rule,
    time_rule,
    coordinates_rule,
    region_location_rule,
];

pub(crate) fn country_rule<'a>(line: &'a str, country_name: &str) -> Option<LineKind<'a>> {
    line.contains(country_name).then_some(LineKind::Country)
}

pub(crate) fn date_rule<'a>(line: &'a str, _country_name: &str) -> Option<LineKind<'a>> {
    (line.contains('-') && line.chars().count() == DATE_LEN).then_some(LineKind::Date(line))
}

pub(crate) fn time_rule<'a>(line: &'a str, _country_name: &str) -> Option<LineKind<'a>> {
    line.contains(':').then_some(LineKind::Time(line))
}

pub(crate) fn coordinates_rule<'a>(line: &'a str, _country_name: &str) -> Option<LineKind<'a>> {
    if !(line.contains('(') && line.contains(')')) {
        return None;
    }
    let kind = match COORDINATES_RE.captures(line) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(lat), Some(lon)) => LineKind::Coordinates {
                latitude: lat.as_str(),
                longitude: lon.as_str(),
            },
            _ => LineKind::UnparsedCoordinates,
        },
        None => LineKind::UnparsedCoordinates,
    };
    Some(kind)
}

pub(crate) fn region_location_rule<'a>(
    line: &'a str,
    _country_name: &str,
) -> Option<LineKind<'a>> {
    line.contains(REGION_LOCATION_SEPARATOR)
        .then_some(LineKind::RegionLocation(line))
}

/// Runs `line` through [`LINE_RULES`], falling back to [`LineKind::Bare`].
pub(crate) fn classify_line<'a>(line: &'a str, country_name: &str) -> LineKind<'a> {
    LINE_RULES
        .iter()
        .find_map(|rule| rule(line, country_name))
        .unwrap_or(LineKind::Bare(line))
}

/// Fields collected from the base-info block.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct BaseInfo {
    pub region: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl BaseInfo {
    /// Classifies every line in order and folds the results together.
    ///
    /// Fails only when a region/location line does not split into exactly
    /// two parts.
    pub(crate) fn from_lines<S: AsRef<str>>(
        lines: &[S],
        country_name: &str,
    ) -> Result<Self, String> {
        let mut info = Self::default();
        for line in lines {
            let line = line.as_ref().trim();
            info.apply(classify_line(line, country_name))?;
        }
        Ok(info)
    }

    fn apply(&mut self, kind: LineKind<'_>) -> Result<(), String> {
        match kind {
            LineKind::Country | LineKind::UnparsedCoordinates => {}
            LineKind::Date(date) => self.date = Some(date.to_owned()),
            LineKind::Time(time) => self.time = Some(time.to_owned()),
            LineKind::Coordinates {
                latitude,
                longitude,
            } => {
                self.latitude = Some(latitude.to_owned());
                self.longitude = Some(longitude.to_owned());
            }
            LineKind::RegionLocation(line) => {
                let parts: Vec<&str> = line.split(REGION_LOCATION_SEPARATOR).collect();
                let [region, location] = parts.as_slice() else {
                    return Err(format!(
                        "expected one \"{REGION_LOCATION_SEPARATOR}\" separator in {line:?}, found {}",
                        parts.len() - 1
                    ));
                };
                self.region = Some((*region).to_owned());
                self.location = Some((*location).to_owned());
            }
            LineKind::Bare(line) => {
                if self.region.is_none() {
                    self.region = Some(line.to_owned());
                } else if self.location.is_none() {
                    self.location = Some(line.to_owned());
                }
            }
        }
        Ok(())
    }
}

/// Pulls `N` out of `"Number of people dead: N"`, or `"0"`.
#[must_use]
pub fn parse_deaths(details: &str) -> String {
    DEATHS_RE
        .captures(details)
        .and_then(|caps| caps.get(1))
        .map_or_else(|| DEFAULT_DEATHS.to_owned(), |m| m.as_str().to_owned())
}

/// Normalizes one report fragment.
///
/// # Errors
///
/// Returns [`ScraperError::FragmentParse`] when the fragment has no base-info
/// or details block, or when a region/location line is malformed. Callers
/// drop the fragment and continue with the rest of the page.
pub fn extract(
    fragment: &ReportFragment,
    country: &TargetCountry,
) -> Result<NormalizedRecord, ScraperError> {
    let parse_error = |reason: String| ScraperError::FragmentParse {
        row_id: fragment.row_id.clone(),
        reason,
    };

    let event_type = if let Some(label) = fragment.event_label.as_deref() {
        label.trim().to_owned()
    } else {
        tracing::warn!(row_id = %fragment.row_id, "event type not found in report row");
        NOT_AVAILABLE.to_owned()
    };

    let (Some(lines), Some(details)) = (&fragment.base_info, &fragment.details) else {
        return Err(parse_error("missing base info or details block".to_owned()));
    };

    let info = BaseInfo::from_lines(lines, &country.name).map_err(parse_error)?;
    let deaths = parse_deaths(details);

    let or_na = |value: Option<String>| value.unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    let location = info.location.or_else(|| info.region.clone());

    Ok(NormalizedRecord {
        event_type,
        location: or_na(location),
        region: or_na(info.region),
        country: country.name.clone(),
        latitude: or_na(info.latitude),
        longitude: or_na(info.longitude),
        date: or_na(info.date),
        time_utc: or_na(info.time),
        details: details.clone(),
        deaths,
        source_marker: SOURCE_MARKER.to_owned(),
    })
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
