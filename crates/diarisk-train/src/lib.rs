//! Offline training batch job.
//!
//! Generates the synthetic reference dataset, fits the scaler and the
//! logistic classifier, and persists all three artifacts into a directory
//! the estimator loads at process start.

pub mod dataset;
pub mod logistic;
pub mod scaler;

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use diarisk_model::{ModelArtifacts, reference_data_path};

pub use dataset::{SyntheticDataset, generate};
pub use logistic::{FitParams, accuracy, fit_logistic};
pub use scaler::{fit_scaler, transform_rows};

/// Training job configuration.
#[derive(Debug, Clone)]
pub struct TrainOptions {
    pub artifact_dir: PathBuf,
    pub seed: u64,
    pub rows: usize,
    pub fit: FitParams,
}

impl TrainOptions {
    pub fn new(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
            seed: 42,
            rows: 500,
            fit: FitParams::default(),
        }
    }
}

/// Summary of a completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    pub artifact_dir: PathBuf,
    pub rows: usize,
    pub positive_rate: f64,
    pub training_accuracy: f64,
}

/// Runs the whole job and writes model.json, scaler.json, and
/// reference.csv into the artifact directory.
pub fn train_and_save(options: &TrainOptions) -> Result<TrainReport> {
    info!(rows = options.rows, seed = options.seed, "generating synthetic dataset");
    let dataset = generate(options.seed, options.rows);

    std::fs::create_dir_all(&options.artifact_dir).with_context(|| {
        format!("create artifact dir {}", options.artifact_dir.display())
    })?;
    let reference_path = reference_data_path(&options.artifact_dir);
    dataset.write_csv(&reference_path)?;

    let scaler = fit_scaler(&dataset.rows);
    let scaled = transform_rows(&scaler, &dataset.rows);
    let model = fit_logistic(&scaled, &dataset.outcomes, options.fit);
    let training_accuracy = accuracy(&model, &scaled, &dataset.outcomes);
    info!(training_accuracy, "classifier fitted");

    let artifacts = ModelArtifacts { scaler, model };
    artifacts
        .save(&options.artifact_dir)
        .context("save artifacts")?;

    Ok(TrainReport {
        artifact_dir: options.artifact_dir.clone(),
        rows: dataset.len(),
        positive_rate: dataset.positive_rate(),
        training_accuracy,
    })
}
