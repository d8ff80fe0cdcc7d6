use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {domain} (retry after {retry_after_secs}s)")]
    RateLimited {
        domain: String,
        retry_after_secs: u64,
    },

    #[error("endpoint not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid query form URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    /// A month's query could not be completed; that month contributes no records.
    #[error("form submission failed for {window}: {source}")]
    FormSubmission {
        window: String,
        #[source]
        source: Box<ScraperError>,
    },

    /// The result document as a whole could not be interpreted.
    #[error("page parse error: {reason}")]
    PageParse { reason: String },

    /// One report row could not be interpreted; the row is dropped.
    #[error("fragment parse error for row {row_id}: {reason}")]
    FragmentParse { row_id: String, reason: String },
}
