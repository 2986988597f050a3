//! fallible smoke runner
//!
//! Runs the behavioural scenarios against the public API and prints one
//! pass/fail line per scenario.

use std::process;

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use fallible::config::{LogFilterSource, RunnerConfig, DEFAULT_LOG_LEVEL};
use fallible::error::panic_message;
use fallible::scenarios;
use fallible::testing::{run_with, EXIT_USAGE};

#[derive(Parser, Debug)]
#[command(name = "fallible-smoke")]
#[command(about = "Smoke-test the fallible Result contract", long_about = None)]
struct Cli {
    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,

    /// Only run scenarios whose name contains this substring
    #[arg(long)]
    filter: Option<String>,

    /// Log level (trace, debug, info, warn, error, off); falls back to RUST_LOG, then warn
    #[arg(short, long)]
    log_level: Option<String>,

    /// Print only the summary line
    #[arg(short, long)]
    quiet: bool,

    /// List scenario names and exit
    #[arg(long)]
    list: bool,
}

impl Cli {
    fn into_config(self) -> RunnerConfig {
        let config = RunnerConfig::new()
            .with_color(!self.no_color)
            .with_filter(self.filter.unwrap_or_default())
            .with_quiet(self.quiet)
            .with_list(self.list);
        match self.log_level {
            Some(level) => config.with_log_level(level),
            None => config,
        }
    }
}

fn build_filter(source: LogFilterSource) -> Result<EnvFilter, String> {
    match source {
        LogFilterSource::Explicit(level) => EnvFilter::try_new(level).map_err(|err| err.to_string()),
        LogFilterSource::Environment => EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_LEVEL))
            .map_err(|err| err.to_string()),
        LogFilterSource::Default => {
            EnvFilter::try_new(DEFAULT_LOG_LEVEL).map_err(|err| err.to_string())
        }
    }
}

fn init_logging(config: &RunnerConfig) -> Result<(), String> {
    let env_is_set = std::env::var_os(EnvFilter::DEFAULT_ENV).is_some();
    let filter = build_filter(config.log_filter_source(env_is_set))?;
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(config.color)
        .with_writer(std::io::stderr)
        .try_init()
    {
        debug!(error = %err, "tracing subscriber already installed");
    }
    Ok(())
}

fn main() {
    let config = Cli::parse().into_config();

    if let Err(e) = config.validate().and_then(|_| init_logging(&config)) {
        eprintln!("fallible-smoke: {}", e);
        process::exit(EXIT_USAGE);
    }

    // Scenarios panic on purpose; keep the default hook's stderr noise out of the report.
    std::panic::set_hook(Box::new(|info| {
        debug!(
            payload = panic_message(info.payload()).unwrap_or("<non-string payload>"),
            "caught scenario panic"
        );
    }));

    let runner = scenarios::default_runner();
    info!(scenarios = runner.len(), filter = ?config.filter, "starting smoke run");
    let report = run_with(&runner, &config);
    let _ = std::panic::take_hook();

    for line in &report.lines {
        println!("{}", line);
    }
    if let Some(error) = &report.error {
        eprintln!("fallible-smoke: {}", error);
    }
    process::exit(report.exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> RunnerConfig {
        let argv = std::iter::once("fallible-smoke").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap().into_config()
    }

    #[test]
    fn test_no_flags_maps_to_defaults() {
        assert_eq!(parse(&[]), RunnerConfig::new());
    }

    #[test]
    fn test_flags_map_onto_config() {
        let config = parse(&["--no-color", "--filter", "map", "-q", "--list", "-l", "debug"]);
        assert_eq!(
            config,
            RunnerConfig::new()
                .with_color(false)
                .with_filter("map")
                .with_quiet(true)
                .with_list(true)
                .with_log_level("debug")
        );
    }

    #[test]
    fn test_missing_level_defers_to_environment() {
        let config = parse(&[]);
        assert_eq!(config.log_filter_source(true), LogFilterSource::Environment);
        assert_eq!(config.log_filter_source(false), LogFilterSource::Default);
    }

    #[test]
    fn test_build_filter_accepts_every_source() {
        assert!(build_filter(LogFilterSource::Explicit("debug".to_string())).is_ok());
        assert!(build_filter(LogFilterSource::Default).is_ok());
        assert!(build_filter(LogFilterSource::Environment).is_ok());
    }

    #[test]
    fn test_invalid_level_from_cli_exits_with_usage() {
        let report = run_with(&scenarios::default_runner(), &parse(&["-l", "loud"]));
        assert_eq!(report.exit_code, EXIT_USAGE);
    }

    #[test]
    fn test_list_prints_scenarios_in_order() {
        let report = run_with(&scenarios::default_runner(), &parse(&["--list"]));
        assert_eq!(
            report.lines,
            vec!["construction", "unwrap", "map", "map_err", "and_then", "or_else", "expect"]
        );
    }
}
