pub mod app_config;
pub mod config;
pub mod records;
pub mod window;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use records::{
    NormalizedRecord, TargetCountry, DEFAULT_DEATHS, NOT_AVAILABLE, RECORD_HEADERS, SOURCE_MARKER,
};
pub use window::{month_windows, DateWindow};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
