use std::path::PathBuf;

use eswd_core::TargetCountry;

use super::*;

fn stock_config() -> AppConfig {
    AppConfig {
        base_url: "https://eswd.eu/cgi-bin/eswd.cgi".to_owned(),
        country: TargetCountry::default(),
        start_year: 2000,
        end_year: 2024,
        output_path: PathBuf::from("morocco_weather_events.csv"),
        log_level: "info".to_owned(),
        scraper_request_timeout_secs: 30,
        scraper_user_agent: "eswd-test/0.1".to_owned(),
        scraper_pacing_delay_ms: 3000,
    }
}

#[test]
fn no_flags_keeps_everything_unset() {
    let cli = Cli::try_parse_from(["eswd-cli"]).expect("expected valid cli args");
    assert!(cli.start_year.is_none());
    assert!(cli.end_year.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.dry_run);
}

#[test]
fn parses_year_range_and_output() {
    let cli = Cli::try_parse_from([
        "eswd-cli",
        "--start-year",
        "2010",
        "--end-year",
        "2012",
        "-o",
        "out.csv",
    ])
    .expect("expected valid cli args");

    assert_eq!(cli.start_year, Some(2010));
    assert_eq!(cli.end_year, Some(2012));
    assert_eq!(cli.output, Some(PathBuf::from("out.csv")));
}

#[test]
fn parses_dry_run() {
    let cli = Cli::try_parse_from(["eswd-cli", "--dry-run"]).unwrap();
    assert!(cli.dry_run);
}

#[test]
fn rejects_non_numeric_year() {
    assert!(Cli::try_parse_from(["eswd-cli", "--start-year", "twenty"]).is_err());
}

#[test]
fn overrides_replace_env_config() {
    let cli = Cli::try_parse_from([
        "eswd-cli",
        "--start-year",
        "2015",
        "--output",
        "fes.csv",
    ])
    .unwrap();
    let config = cli.apply(stock_config()).unwrap();

    assert_eq!(config.start_year, 2015);
    assert_eq!(config.end_year, 2024);
    assert_eq!(config.output_path, PathBuf::from("fes.csv"));
}

#[test]
fn inverted_range_after_overrides_is_rejected() {
    let cli = Cli::try_parse_from(["eswd-cli", "--start-year", "2030"]).unwrap();
    let err = cli.apply(stock_config()).unwrap_err();
    assert!(err.to_string().contains("2030"), "got: {err}");
}

#[test]
fn end_year_flag_repairs_inverted_env_range() {
    let env_config = AppConfig {
        start_year: 2025,
        ..stock_config()
    };
    let cli = Cli::try_parse_from(["eswd-cli", "--end-year", "2030"]).unwrap();
    let config = cli.apply(env_config).unwrap();
    assert_eq!((config.start_year, config.end_year), (2025, 2030));
}

#[test]
fn inverted_env_range_without_flags_is_rejected() {
    let env_config = AppConfig {
        start_year: 2025,
        ..stock_config()
    };
    let cli = Cli::try_parse_from(["eswd-cli", "--dry-run"]).unwrap();
    let err = cli.apply(env_config).unwrap_err();
    assert!(err.to_string().contains("2025"), "got: {err}");
}

#[test]
fn single_year_range_yields_twelve_windows() {
    let cli = Cli::try_parse_from(["eswd-cli", "--start-year", "2010", "--end-year", "2010"])
        .unwrap();
    let config = cli.apply(stock_config()).unwrap();
    let windows = month_windows(config.start_year, config.end_year);

    assert_eq!(windows.len(), 12);
    assert_eq!(windows[0].start_form(), "01-01-2010");
    assert_eq!(windows[11].start_form(), "01-12-2010");
}
