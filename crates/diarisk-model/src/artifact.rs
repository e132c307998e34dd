//! Serialized classifier and scaler artifacts.
//!
//! Both artifacts are opaque to callers: loaded once at process start,
//! never mutated, and validated against the canonical feature schema before
//! any prediction can use them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::schema::{FEATURE_COUNT, FeatureVector, matches_schema, schema_names};

/// File name of the serialized classifier inside an artifact directory.
pub const MODEL_FILE: &str = "model.json";

/// File name of the serialized scaler inside an artifact directory.
pub const SCALER_FILE: &str = "scaler.json";

/// File name of the reference dataset used for feature means.
pub const REFERENCE_DATA_FILE: &str = "reference.csv";

/// A fitted per-feature standardization transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub feature_names: Vec<String>,
    pub means: Vec<f64>,
    pub stds: Vec<f64>,
}

impl StandardScaler {
    /// Applies (x - mean) / std per feature, in schema order.
    pub fn transform(&self, vector: &FeatureVector) -> [f64; FEATURE_COUNT] {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (idx, value) in vector.as_slice().iter().enumerate() {
            scaled[idx] = (value - self.means[idx]) / self.stds[idx];
        }
        scaled
    }

    fn validate(&self, path: &Path) -> Result<()> {
        check_schema(&self.feature_names)?;
        if self.means.len() != FEATURE_COUNT || self.stds.len() != FEATURE_COUNT {
            return Err(RiskError::artifact(
                path,
                format!(
                    "scaler carries {} means and {} stds for {FEATURE_COUNT} features",
                    self.means.len(),
                    self.stds.len()
                ),
            ));
        }
        if let Some(idx) = self.stds.iter().position(|std| !(*std > 0.0)) {
            return Err(RiskError::artifact(
                path,
                format!(
                    "scaler std for {} is not positive",
                    self.feature_names[idx]
                ),
            ));
        }
        Ok(())
    }
}

/// A trained binary logistic-regression classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Positive-class probability for an already-scaled feature row.
    pub fn predict_proba(&self, scaled: &[f64; FEATURE_COUNT]) -> f64 {
        let z = self
            .weights
            .iter()
            .zip(scaled)
            .fold(self.intercept, |acc, (weight, value)| acc + weight * value);
        sigmoid(z)
    }

    /// Binary label at the 0.5 decision boundary.
    pub fn predict(&self, scaled: &[f64; FEATURE_COUNT]) -> u8 {
        u8::from(self.predict_proba(scaled) >= 0.5)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        check_schema(&self.feature_names)?;
        if self.weights.len() != FEATURE_COUNT {
            return Err(RiskError::artifact(
                path,
                format!(
                    "model carries {} weights for {FEATURE_COUNT} features",
                    self.weights.len()
                ),
            ));
        }
        Ok(())
    }
}

/// Numerically stable logistic function.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

/// The immutable artifact pair every prediction depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    pub scaler: StandardScaler,
    pub model: LogisticModel,
}

impl ModelArtifacts {
    /// Loads and validates both artifacts from `dir`.
    ///
    /// Callers that want the degrade-instead-of-crash behavior map the
    /// error into an unavailable state and keep serving typed failures.
    pub fn load(dir: &Path) -> Result<Self> {
        let scaler: StandardScaler = read_json(&dir.join(SCALER_FILE))?;
        scaler.validate(&dir.join(SCALER_FILE))?;
        let model: LogisticModel = read_json(&dir.join(MODEL_FILE))?;
        model.validate(&dir.join(MODEL_FILE))?;
        Ok(Self { scaler, model })
    }

    /// Writes both artifacts into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| RiskError::io(dir, source))?;
        write_json(&dir.join(SCALER_FILE), &self.scaler)?;
        write_json(&dir.join(MODEL_FILE), &self.model)?;
        Ok(())
    }
}

fn check_schema(names: &[String]) -> Result<()> {
    if matches_schema(names) {
        return Ok(());
    }
    Err(RiskError::SchemaMismatch {
        expected: schema_names().join(", "),
        found: names.join(", "),
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).map_err(|source| RiskError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|err| RiskError::artifact(path, err.to_string()))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let raw = serde_json::to_string_pretty(value)
        .map_err(|err| RiskError::artifact(path, err.to_string()))?;
    fs::write(path, raw).map_err(|source| RiskError::io(path, source))
}

/// Path of the reference dataset inside an artifact directory.
pub fn reference_data_path(dir: &Path) -> PathBuf {
    dir.join(REFERENCE_DATA_FILE)
}
