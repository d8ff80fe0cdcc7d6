use std::path::PathBuf;

use crate::records::TargetCountry;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// URL of the ESWD query form (`eswd.cgi`).
    pub base_url: String,
    pub country: TargetCountry,
    /// First year queried, inclusive.
    pub start_year: i32,
    /// Last year queried, inclusive. May precede `start_year`; the range is
    /// checked once command-line overrides are applied.
    pub end_year: i32,
    pub output_path: PathBuf,
    pub log_level: String,
    pub scraper_request_timeout_secs: u64,
    pub scraper_user_agent: String,
    /// Pause between consecutive monthly windows, in milliseconds.
    pub scraper_pacing_delay_ms: u64,
}
