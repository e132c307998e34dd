//! Subcommand implementations.

use anyhow::{Context, Result, bail};
use tracing::info;

use diarisk_core::{EstimatorConfig, RiskEstimator, observation_from_form};
use diarisk_model::RiskLabel;
use diarisk_report::{ReportContent, write_pdf};
use diarisk_train::{FitParams, TrainOptions, train_and_save};

use crate::cli::{PredictArgs, ReportArgs, ResultArg, TrainArgs};
use crate::summary::{print_feature_schema, print_prediction, print_train_report};

pub fn run_predict(args: &PredictArgs) -> Result<()> {
    let pairs = parse_pairs(&args.fields)?;
    let observation =
        observation_from_form(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())))?;
    let estimator = RiskEstimator::load(&EstimatorConfig::new(&args.artifact_dir));
    let result = estimator.predict(&observation)?;
    let response = estimator.respond(&observation)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_prediction(&response);
    }

    if let Some(path) = &args.report {
        let content = ReportContent::for_today(result.label, response.probability_pct)
            .with_confidence(result.confidence);
        let written = write_pdf(&content, path)?;
        info!(path = %written.display(), "report written");
        println!("Report: {}", written.display());
    }
    Ok(())
}

pub fn run_train(args: &TrainArgs) -> Result<()> {
    if args.rows == 0 {
        bail!("--rows must be at least 1");
    }
    let options = TrainOptions {
        artifact_dir: args.artifact_dir.clone(),
        seed: args.seed,
        rows: args.rows,
        fit: FitParams {
            learning_rate: args.learning_rate,
            epochs: args.epochs,
        },
    };
    let report = train_and_save(&options).context("training failed")?;
    print_train_report(&report);
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<()> {
    if !(0.0..=100.0).contains(&args.probability) {
        bail!("--probability must be between 0 and 100");
    }
    let label = match args.result {
        ResultArg::Elevated => RiskLabel::Elevated,
        ResultArg::Low => RiskLabel::Low,
    };
    let content = ReportContent::for_today(label, args.probability);
    let written = write_pdf(&content, &args.output)?;
    println!("Report: {}", written.display());
    Ok(())
}

pub fn run_features() {
    print_feature_schema();
}

/// Splits `KEY=VALUE` arguments into pairs, rejecting malformed entries
/// before intake validation sees them.
fn parse_pairs(fields: &[String]) -> Result<Vec<(String, String)>> {
    fields
        .iter()
        .map(|field| match field.split_once('=') {
            Some((key, value)) if !key.is_empty() => {
                Ok((key.to_string(), value.to_string()))
            }
            _ => bail!("expected FIELD=VALUE, got {field:?}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_pairs_splits_on_first_equals() {
        let pairs = parse_pairs(&["Age=45".to_string(), "Glucose=160.5".to_string()])
            .expect("parse pairs");
        assert_eq!(
            pairs,
            vec![
                ("Age".to_string(), "45".to_string()),
                ("Glucose".to_string(), "160.5".to_string()),
            ]
        );
    }

    #[test]
    fn parse_pairs_rejects_missing_equals() {
        assert!(parse_pairs(&["Age".to_string()]).is_err());
        assert!(parse_pairs(&["=45".to_string()]).is_err());
    }

    #[test]
    fn train_then_predict_round_trip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let train_args = TrainArgs {
            artifact_dir: dir.path().to_path_buf(),
            seed: 7,
            rows: 200,
            epochs: 200,
            learning_rate: 0.1,
        };
        run_train(&train_args).expect("train");

        let predict_args = PredictArgs {
            fields: vec![
                "Age=52".to_string(),
                "Height=160".to_string(),
                "Weight=95".to_string(),
                "Glucose=185".to_string(),
                "FamilyHistory=1".to_string(),
            ],
            artifact_dir: dir.path().to_path_buf(),
            json: true,
            report: None,
        };
        run_predict(&predict_args).expect("predict");
    }

    #[test]
    fn predict_without_artifacts_reports_unavailable_model() {
        let dir = tempfile::tempdir().expect("tempdir");
        let args = PredictArgs {
            fields: vec![
                "Age=45".to_string(),
                "Height=160".to_string(),
                "Weight=80".to_string(),
                "Glucose=160".to_string(),
                "FamilyHistory=1".to_string(),
            ],
            artifact_dir: dir.path().join("missing"),
            json: false,
            report: None,
        };
        let error = run_predict(&args).expect_err("no artifacts");
        let risk = error
            .downcast_ref::<diarisk_model::RiskError>()
            .expect("risk error");
        assert!(matches!(risk, diarisk_model::RiskError::ModelUnavailable { .. }));
    }

    #[test]
    fn report_rejects_out_of_range_probability() {
        let args = ReportArgs {
            result: ResultArg::Low,
            probability: 123.0,
            output: PathBuf::from("unused.pdf"),
        };
        assert!(run_report(&args).is_err());
    }
}
