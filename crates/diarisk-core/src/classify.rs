//! Classification against the loaded artifacts.

use diarisk_model::{FeatureVector, ModelArtifacts, RiskLabel};

/// Label plus the positive-class probability behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: RiskLabel,
    pub probability: f64,
}

/// Scales the vector with the stored scaler and scores it with the
/// classifier. The decision boundary and logistic output both belong to the
/// artifacts; nothing is reimplemented here.
pub fn classify(artifacts: &ModelArtifacts, vector: &FeatureVector) -> Classification {
    let scaled = artifacts.scaler.transform(vector);
    let probability = artifacts.model.predict_proba(&scaled);
    Classification {
        label: RiskLabel::from_binary(artifacts.model.predict(&scaled)),
        probability,
    }
}
