mod collect;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use eswd_core::{month_windows, AppConfig, DateWindow};
use eswd_scraper::EswdClient;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "eswd-cli")]
#[command(about = "Harvest severe weather reports for one country from the ESWD")]
struct Cli {
    /// First year to query (inclusive). Overrides `ESWD_START_YEAR`.
    #[arg(long)]
    start_year: Option<i32>,

    /// Last year to query (inclusive). Overrides `ESWD_END_YEAR`.
    #[arg(long)]
    end_year: Option<i32>,

    /// CSV file to write. Overrides `ESWD_OUTPUT_PATH`.
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Print the query windows and exit without contacting the server.
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line overrides on top of the environment config, then
    /// rejects a start year after the end year.
    fn apply(&self, mut config: AppConfig) -> anyhow::Result<AppConfig> {
        if let Some(year) = self.start_year {
            config.start_year = year;
        }
        if let Some(year) = self.end_year {
            config.end_year = year;
        }
        if let Some(path) = &self.output {
            config.output_path.clone_from(path);
        }
        if config.start_year > config.end_year {
            anyhow::bail!(
                "start year {} is after end year {}",
                config.start_year,
                config.end_year
            );
        }
        Ok(config)
    }
}

fn print_windows(config: &AppConfig, windows: &[DateWindow]) {
    println!(
        "dry-run: would query {} windows for {} ({}) and write {}",
        windows.len(),
        config.country.name,
        config.country.code,
        config.output_path.display()
    );
    for window in windows {
        println!("  {window}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.apply(eswd_core::load_app_config()?)?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let windows = month_windows(config.start_year, config.end_year);

    if cli.dry_run {
        print_windows(&config, &windows);
        return Ok(());
    }

    let client = EswdClient::new(
        &config.base_url,
        config.country.clone(),
        config.scraper_request_timeout_secs,
        &config.scraper_user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build ESWD client: {e}"))?;

    tracing::info!(
        country = %config.country.name,
        start_year = config.start_year,
        end_year = config.end_year,
        windows = windows.len(),
        "starting harvest"
    );

    let harvest = collect::run_harvest(
        &client,
        &config.country,
        &windows,
        Duration::from_millis(config.scraper_pacing_delay_ms),
    )
    .await;

    output::write_records(&config.output_path, &harvest.records)?;
    println!(
        "saved {} records to {} ({} of {} windows failed)",
        harvest.records.len(),
        config.output_path.display(),
        harvest.windows_failed,
        windows.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests;
