//! The risk estimator: immutable artifacts plus startup-loaded means,
//! injected into every prediction instead of living in process globals.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use diarisk_model::{
    InputSummary, ModelArtifacts, ModelFeature, PatientObservation, PredictionResponse,
    PredictionResult, Result, RiskError, reference_data_path,
};

use crate::classify::classify;
use crate::confidence::confidence_tier;
use crate::features::{FeatureMeans, derive_features};
use crate::recommend::diet_plan;

/// Where the estimator finds its artifacts.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Directory holding model.json, scaler.json, and reference.csv.
    pub artifact_dir: PathBuf,
}

impl EstimatorConfig {
    pub fn new(artifact_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifact_dir: artifact_dir.into(),
        }
    }
}

enum ModelState {
    Ready {
        artifacts: ModelArtifacts,
        means: FeatureMeans,
    },
    /// Artifacts were missing or unreadable at load; predictions return
    /// ModelUnavailable instead of crashing the process.
    Unavailable(String),
}

/// Shared read-only prediction state. Safe for concurrent readers; nothing
/// here mutates after construction.
pub struct RiskEstimator {
    state: ModelState,
}

impl RiskEstimator {
    /// Builds an estimator from already-loaded artifacts and means.
    pub fn new(artifacts: ModelArtifacts, means: FeatureMeans) -> Self {
        Self {
            state: ModelState::Ready { artifacts, means },
        }
    }

    /// Loads artifacts from the configured directory, degrading to an
    /// unavailable estimator on any load failure.
    pub fn load(config: &EstimatorConfig) -> Self {
        match Self::try_load(&config.artifact_dir) {
            Ok(estimator) => estimator,
            Err(err) => {
                warn!(error = %err, dir = %config.artifact_dir.display(), "model artifacts unavailable");
                Self {
                    state: ModelState::Unavailable(err.to_string()),
                }
            }
        }
    }

    fn try_load(dir: &Path) -> Result<Self> {
        let artifacts = ModelArtifacts::load(dir)?;
        let means = FeatureMeans::from_csv(&reference_data_path(dir))?;
        debug!(dir = %dir.display(), "model artifacts loaded");
        Ok(Self::new(artifacts, means))
    }

    /// Returns the degradation reason when the estimator cannot predict.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            ModelState::Ready { .. } => None,
            ModelState::Unavailable(reason) => Some(reason),
        }
    }

    /// Runs the full observation -> feature vector -> classification ->
    /// recommendation pipeline.
    pub fn predict(&self, observation: &PatientObservation) -> Result<PredictionResult> {
        let ModelState::Ready { artifacts, means } = &self.state else {
            let reason = self.unavailable_reason().unwrap_or_default();
            return Err(RiskError::model_unavailable(reason));
        };
        let vector = derive_features(observation, means)?;
        let classification = classify(artifacts, &vector);
        Ok(PredictionResult {
            label: classification.label,
            probability: classification.probability,
            confidence: confidence_tier(observation.provided_count()),
            diet_plan: diet_plan(classification.label),
        })
    }

    /// Predicts and packages the response for the rendering layer, echoing
    /// the values the classifier actually saw.
    pub fn respond(&self, observation: &PatientObservation) -> Result<PredictionResponse> {
        let ModelState::Ready { means, .. } = &self.state else {
            let reason = self.unavailable_reason().unwrap_or_default();
            return Err(RiskError::model_unavailable(reason));
        };
        let result = self.predict(observation)?;
        let vector = derive_features(observation, means)?;
        let summary = InputSummary {
            age: vector.get(ModelFeature::Age),
            bmi: vector.get(ModelFeature::Bmi),
            glucose: vector.get(ModelFeature::Glucose),
            blood_pressure: vector.get(ModelFeature::BloodPressure),
        };
        Ok(PredictionResponse::from_result(&result, summary))
    }
}
