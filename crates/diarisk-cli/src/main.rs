//! Diabetes risk estimator CLI.

use clap::{ColorChoice, Parser};
use diarisk_cli::logging::{LogConfig, LogFormat, init_logging};
use diarisk_model::RiskError;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_features, run_predict, run_report, run_train};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Predict(args) => match run_predict(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Train(args) => match run_train(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Report(args) => match run_report(&args) {
            Ok(()) => 0,
            Err(error) => report_error(&error),
        },
        Command::Features => {
            run_features();
            0
        }
    };
    std::process::exit(exit_code);
}

/// Prints the error and maps an unavailable model onto its own exit code so
/// callers can tell bad input apart from missing artifacts.
fn report_error(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error}");
    if matches!(
        error.downcast_ref::<RiskError>(),
        Some(RiskError::ModelUnavailable { .. })
    ) {
        eprintln!("hint: run `diarisk train` to produce the model artifacts");
        2
    } else {
        1
    }
}

/// Maps CLI flags onto a `LogConfig`. An explicit `--log-level` wins over
/// `-v`/`-q`, and either one disables the `RUST_LOG` override.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        level_filter,
        use_env_filter: !(cli.verbosity.is_present() || cli.log_level.is_some()),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        with_ansi,
        ..LogConfig::default()
    }
}
