//! Locating report rows in an ESWD result document.
//!
//! Result pages render one `<tr>` per report with an `id` of the form
//! `<country code>_<report id>`. Inside a row, the first cell holds the event
//! type in `<p><b>…</b></p>`, `td.base_info` holds location/date/coordinate
//! lines separated by `<br>`, and `td.detail_info` holds the narrative.

use std::sync::LazyLock;

use eswd_core::TargetCountry;
use scraper::{ElementRef, Html, Selector};

use crate::error::ScraperError;
use crate::types::ReportFragment;

/// Text the ESWD prints when a query matched nothing.
pub const ZERO_REPORTS_MARKER: &str = "number of selected reports: 0";

static P_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("valid p selector"));
static TD_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid td selector"));
static B_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("b").expect("valid b selector"));
static BASE_INFO_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.base_info").expect("valid base_info selector"));
static DETAIL_INFO_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td.detail_info").expect("valid detail_info selector"));

/// What a result document contained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page reported zero matching reports.
    NoReports,
    /// No report rows for the target country were found.
    Empty,
    /// Report rows in document order.
    Fragments(Vec<ReportFragment>),
}

impl PageOutcome {
    #[must_use]
    pub fn into_fragments(self) -> Vec<ReportFragment> {
        match self {
            Self::Fragments(fragments) => fragments,
            Self::NoReports | Self::Empty => Vec::new(),
        }
    }
}

/// Finds every report row for `country` in `html`.
///
/// # Errors
///
/// Returns [`ScraperError::PageParse`] if the document is blank or the row
/// selector cannot be built from the country code.
pub fn locate_fragments(
    html: &str,
    country: &TargetCountry,
) -> Result<PageOutcome, ScraperError> {
    if html.trim().is_empty() {
        return Err(ScraperError::PageParse {
            reason: "empty result document".to_owned(),
        });
    }

    let row_selector = format!(r#"tr[id^="{}"]"#, country.row_id_prefix());
    let row_sel = Selector::parse(&row_selector).map_err(|e| ScraperError::PageParse {
        reason: format!("invalid row selector '{row_selector}': {e}"),
    })?;

    let document = Html::parse_document(html);

    let zero_reports = document
        .select(&P_SEL)
        .any(|p| p.text().collect::<String>().contains(ZERO_REPORTS_MARKER));
    if zero_reports {
        tracing::warn!(country = %country.code, "no reports found for this period");
        return Ok(PageOutcome::NoReports);
    }

    let fragments: Vec<ReportFragment> = document.select(&row_sel).map(fragment_from_row).collect();
    if fragments.is_empty() {
        tracing::warn!(country = %country.code, "no report rows retrieved");
        return Ok(PageOutcome::Empty);
    }

    tracing::debug!(count = fragments.len(), "located report rows");
    Ok(PageOutcome::Fragments(fragments))
}

fn fragment_from_row(row: ElementRef<'_>) -> ReportFragment {
    let event_label = row
        .select(&TD_SEL)
        .next()
        .and_then(|td| td.select(&P_SEL).next())
        .and_then(|p| p.select(&B_SEL).next())
        .map(|b| stripped_text(b).collect::<String>());

    let base_info = row.select(&BASE_INFO_SEL).next().map(text_lines);
    let details = row
        .select(&DETAIL_INFO_SEL)
        .next()
        .map(|td| stripped_text(td).collect::<Vec<_>>().join(" "));

    ReportFragment {
        row_id: row.value().id().unwrap_or_default().to_owned(),
        event_label,
        base_info,
        details,
    }
}

/// Text nodes of `el`, each trimmed, blanks dropped.
fn stripped_text<'a>(el: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    el.text().map(str::trim).filter(|s| !s.is_empty())
}

/// Trimmed text nodes joined with `\n`, then split back into trimmed lines.
///
/// A text node containing embedded newlines yields several lines.
fn text_lines(el: ElementRef<'_>) -> Vec<String> {
    stripped_text(el)
        .collect::<Vec<_>>()
        .join("\n")
        .split('\n')
        .map(|line| line.trim().to_owned())
        .collect()
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
