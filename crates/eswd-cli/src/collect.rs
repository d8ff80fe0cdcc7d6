//! Month-by-month harvest driver.
//!
//! Windows are processed strictly in order, one fetch-then-parse cycle at a
//! time. Failures are logged and skipped at the narrowest level that
//! contains them: a failed fetch or unusable page drops that month, a bad
//! row drops that row. Nothing here aborts the run.

use std::time::Duration;

use eswd_core::{DateWindow, NormalizedRecord, TargetCountry};
use eswd_scraper::{extract, locate_fragments, PageOutcome, ReportSource};

/// Records collected so far plus per-run tallies.
///
/// Owned by the driver loop and passed through each window by value.
#[derive(Debug, Default)]
pub(crate) struct Harvest {
    pub records: Vec<NormalizedRecord>,
    pub windows_fetched: usize,
    pub windows_failed: usize,
    pub pages_unparsed: usize,
    pub fragments_skipped: usize,
}

impl Harvest {
    /// Locates and extracts every report in `html`, appending the records.
    fn absorb_page(mut self, html: &str, country: &TargetCountry, window: &DateWindow) -> Self {
        let fragments = match locate_fragments(html, country) {
            Ok(PageOutcome::Fragments(fragments)) => fragments,
            Ok(PageOutcome::NoReports | PageOutcome::Empty) => return self,
            Err(e) => {
                tracing::error!(%window, error = %e, "could not parse result page");
                self.pages_unparsed += 1;
                return self;
            }
        };

        let before = self.records.len();
        for fragment in &fragments {
            match extract(fragment, country) {
                Ok(record) => self.records.push(record),
                Err(e) => {
                    tracing::warn!(%window, error = %e, "skipping report row");
                    self.fragments_skipped += 1;
                }
            }
        }
        tracing::info!(
            %window,
            rows = fragments.len(),
            records = self.records.len() - before,
            "window parsed"
        );
        self
    }
}

/// Fetches and extracts one window.
async fn collect_window<S: ReportSource>(
    mut harvest: Harvest,
    source: &S,
    country: &TargetCountry,
    window: &DateWindow,
) -> Harvest {
    tracing::info!(%window, "fetching reports");
    match source.fetch_window(window).await {
        Ok(html) => {
            harvest.windows_fetched += 1;
            harvest.absorb_page(&html, country, window)
        }
        Err(e) => {
            tracing::error!(%window, error = %e, "query failed, skipping window");
            harvest.windows_failed += 1;
            harvest
        }
    }
}

/// Runs every window in order and returns the accumulated harvest.
///
/// `pacing` is slept between consecutive windows.
pub(crate) async fn run_harvest<S: ReportSource>(
    source: &S,
    country: &TargetCountry,
    windows: &[DateWindow],
    pacing: Duration,
) -> Harvest {
    let mut harvest = Harvest::default();

    for (idx, window) in windows.iter().enumerate() {
        if idx > 0 && !pacing.is_zero() {
            tokio::time::sleep(pacing).await;
        }
        harvest = collect_window(harvest, source, country, window).await;
    }

    tracing::info!(
        windows = windows.len(),
        fetched = harvest.windows_fetched,
        failed = harvest.windows_failed,
        unparsed = harvest.pages_unparsed,
        skipped_rows = harvest.fragments_skipped,
        records = harvest.records.len(),
        "harvest complete"
    );
    harvest
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
