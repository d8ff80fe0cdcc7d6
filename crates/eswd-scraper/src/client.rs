use std::future::Future;
use std::time::Duration;

use eswd_core::{DateWindow, TargetCountry};
use reqwest::{Client, Url};

use crate::error::ScraperError;

/// Value sent for the form's submit button.
const SUBMIT_VALUE: &str = "Submit query";

/// Hours covered on each day of the window: the whole day.
const QUERY_START_HOUR: &str = "00";
const QUERY_END_HOUR: &str = "24";

/// Anything that can return the result document for one query window.
pub trait ReportSource {
    /// Returns the result document for `window`.
    ///
    /// # Errors
    ///
    /// Any failure is reported as [`ScraperError::FormSubmission`]; the caller
    /// skips the window.
    fn fetch_window(
        &self,
        window: &DateWindow,
    ) -> impl Future<Output = Result<String, ScraperError>>;
}

/// HTTP client for the ESWD advanced query form.
///
/// Submits the same fields a user would fill in on the form: period
/// selection enabled, start/end dates, full-day hours and the target country.
pub struct EswdClient {
    client: Client,
    base_url: Url,
    country: TargetCountry,
}

impl EswdClient {
    /// Creates an `EswdClient` with the configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an
    /// absolute http(s) URL, or [`ScraperError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(
        base_url: &str,
        country: TargetCountry,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ScraperError> {
        let base_url = Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ScraperError::InvalidBaseUrl {
                reason: format!("unsupported scheme '{}'", base_url.scheme()),
                base_url: base_url.into(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            country,
        })
    }

    #[must_use]
    pub fn country(&self) -> &TargetCountry {
        &self.country
    }

    /// Form fields submitted for `window`.
    pub(crate) fn form_fields(&self, window: &DateWindow) -> Vec<(&'static str, String)> {
        vec![
            ("date_selected", "on".to_owned()),
            ("start_date", window.start_form()),
            ("end_date", window.end_form()),
            ("query_start_hour", QUERY_START_HOUR.to_owned()),
            ("query_end_hour", QUERY_END_HOUR.to_owned()),
            ("selected_countries", self.country.code.clone()),
            ("BUT_adv_query", SUBMIT_VALUE.to_owned()),
        ]
    }

    /// Host of the query form URL, for error messages.
    fn domain(&self) -> String {
        self.base_url
            .host_str()
            .map_or_else(|| self.base_url.to_string(), str::to_owned)
    }

    /// Submits the query form for `window` once and returns the raw result page.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::RateLimited`]: HTTP 429.
    /// - [`ScraperError::NotFound`]: HTTP 404.
    /// - [`ScraperError::UnexpectedStatus`]: any other non-2xx status.
    /// - [`ScraperError::Http`]: network failure or timeout.
    pub async fn submit_query(&self, window: &DateWindow) -> Result<String, ScraperError> {
        let response = self
            .client
            .post(self.base_url.clone())
            .form(&self.form_fields(window))
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);

            return Err(ScraperError::RateLimited {
                domain: self.domain(),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(ScraperError::NotFound {
                url: self.base_url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.base_url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

impl ReportSource for EswdClient {
    async fn fetch_window(&self, window: &DateWindow) -> Result<String, ScraperError> {
        tracing::debug!(%window, country = %self.country.code, "submitting query form");
        self.submit_query(window)
            .await
            .map_err(|e| ScraperError::FormSubmission {
                window: window.to_string(),
                source: Box::new(e),
            })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
