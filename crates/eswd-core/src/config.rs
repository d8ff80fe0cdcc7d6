use crate::app_config::AppConfig;
use crate::records::TargetCountry;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://eswd.eu/cgi-bin/eswd.cgi";
pub const DEFAULT_OUTPUT_PATH: &str = "morocco_weather_events.csv";
pub const DEFAULT_USER_AGENT: &str = "eswd-harvest/0.1 (research)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields the stock
/// Morocco 2000–2024 run.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_i32 = |var: &str, default: &str| -> Result<i32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<i32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let non_empty = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(raw)
    };

    let base_url = non_empty("ESWD_BASE_URL", DEFAULT_BASE_URL)?;
    let country = TargetCountry::new(
        non_empty("ESWD_COUNTRY_CODE", "MA")?,
        non_empty("ESWD_COUNTRY_NAME", "Morocco")?,
    );

    let start_year = parse_i32("ESWD_START_YEAR", "2000")?;
    let end_year = parse_i32("ESWD_END_YEAR", "2024")?;

    let output_path = PathBuf::from(or_default("ESWD_OUTPUT_PATH", DEFAULT_OUTPUT_PATH));
    let log_level = or_default("ESWD_LOG_LEVEL", "info");

    let scraper_request_timeout_secs = parse_u64("ESWD_REQUEST_TIMEOUT_SECS", "30")?;
    let scraper_user_agent = or_default("ESWD_USER_AGENT", DEFAULT_USER_AGENT);
    let scraper_pacing_delay_ms = parse_u64("ESWD_PACING_DELAY_MS", "3000")?;

    Ok(AppConfig {
        base_url,
        country,
        start_year,
        end_year,
        output_path,
        log_level,
        scraper_request_timeout_secs,
        scraper_user_agent,
        scraper_pacing_delay_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
