//! CLI argument definitions for the diabetes risk estimator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "diarisk",
    version,
    about = "Diabetes risk estimator - predict risk and render PDF reports",
    long_about = "Estimate diabetes risk from patient health metrics.\n\n\
                  Derives missing features (BMI, dataset means), scores a\n\
                  pre-trained logistic-regression classifier, and renders a\n\
                  PDF risk report. `diarisk train` produces the artifacts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Predict diabetes risk from FIELD=VALUE pairs.
    Predict(PredictArgs),

    /// Train the classifier and scaler from a synthetic reference dataset.
    Train(TrainArgs),

    /// Render a PDF risk report for a known result.
    Report(ReportArgs),

    /// List the canonical model feature schema.
    Features,
}

#[derive(Parser)]
pub struct PredictArgs {
    /// Patient fields, e.g. Age=45 Height=160 Weight=80 Glucose=160 FamilyHistory=1.
    ///
    /// Required fields: Age, Height, Weight, Glucose, FamilyHistory.
    /// Optional: BloodPressure, Pregnancies, Insulin, SkinThickness,
    /// DiabetesPedigreeFunction. Missing optional fields are substituted
    /// with reference-dataset means.
    #[arg(value_name = "FIELD=VALUE", required = true)]
    pub fields: Vec<String>,

    /// Directory holding model.json, scaler.json, and reference.csv.
    #[arg(long = "artifact-dir", value_name = "DIR", default_value = "artifacts")]
    pub artifact_dir: PathBuf,

    /// Print the response as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write a PDF report to the given path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct TrainArgs {
    /// Output directory for the trained artifacts.
    #[arg(long = "artifact-dir", value_name = "DIR", default_value = "artifacts")]
    pub artifact_dir: PathBuf,

    /// RNG seed for the synthetic dataset.
    #[arg(long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// Number of synthetic rows to generate.
    #[arg(long = "rows", default_value_t = 500)]
    pub rows: usize,

    /// Gradient-descent epochs.
    #[arg(long = "epochs", default_value_t = 500)]
    pub epochs: usize,

    /// Gradient-descent learning rate.
    #[arg(long = "learning-rate", default_value_t = 0.1)]
    pub learning_rate: f64,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Which result the report describes.
    #[arg(long = "result", value_enum)]
    pub result: ResultArg,

    /// Risk probability percentage (0-100).
    #[arg(long = "probability")]
    pub probability: f64,

    /// Where to write the PDF.
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = "diabetes_report.pdf"
    )]
    pub output: PathBuf,
}

/// CLI result choices for report generation.
#[derive(Clone, Copy, ValueEnum)]
pub enum ResultArg {
    Elevated,
    Low,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_predict_with_fields() {
        let cli = Cli::try_parse_from([
            "diarisk",
            "predict",
            "Age=45",
            "Height=160",
            "Weight=80",
            "Glucose=160",
            "FamilyHistory=1",
            "--json",
        ])
        .expect("parse");
        match cli.command {
            Command::Predict(args) => {
                assert_eq!(args.fields.len(), 5);
                assert!(args.json);
                assert_eq!(args.artifact_dir, PathBuf::from("artifacts"));
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn predict_requires_at_least_one_field() {
        assert!(Cli::try_parse_from(["diarisk", "predict"]).is_err());
    }

    #[test]
    fn parses_train_defaults() {
        let cli = Cli::try_parse_from(["diarisk", "train"]).expect("parse");
        match cli.command {
            Command::Train(args) => {
                assert_eq!(args.seed, 42);
                assert_eq!(args.rows, 500);
                assert_eq!(args.epochs, 500);
            }
            _ => panic!("expected train"),
        }
    }

    #[test]
    fn parses_report_args() {
        let cli = Cli::try_parse_from([
            "diarisk",
            "report",
            "--result",
            "elevated",
            "--probability",
            "87.7",
        ])
        .expect("parse");
        match cli.command {
            Command::Report(args) => {
                assert!(matches!(args.result, ResultArg::Elevated));
                assert_eq!(args.probability, 87.7);
            }
            _ => panic!("expected report"),
        }
    }
}
