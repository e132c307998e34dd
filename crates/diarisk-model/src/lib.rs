pub mod artifact;
pub mod error;
pub mod observation;
pub mod prediction;
pub mod schema;

pub use artifact::{
    LogisticModel, MODEL_FILE, ModelArtifacts, REFERENCE_DATA_FILE, SCALER_FILE, StandardScaler,
    reference_data_path, sigmoid,
};
pub use error::{Result, RiskError};
pub use observation::{PatientField, PatientObservation};
pub use prediction::{
    ConfidenceTier, InputSummary, PredictionResponse, PredictionResult, RiskLabel,
    round_one_decimal,
};
pub use schema::{
    FEATURE_COUNT, FEATURE_SCHEMA, FeatureVector, ModelFeature, matches_schema, schema_names,
};
