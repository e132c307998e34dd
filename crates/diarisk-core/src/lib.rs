//! Risk estimation core.
//!
//! Every operation is a single-shot pure transformation:
//! observation -> feature vector -> prediction result -> response.

pub mod classify;
pub mod confidence;
pub mod estimator;
pub mod features;
pub mod recommend;
pub mod request;

pub use classify::{Classification, classify};
pub use confidence::confidence_tier;
pub use estimator::{EstimatorConfig, RiskEstimator};
pub use features::{FeatureMeans, compute_bmi, derive_features};
pub use recommend::{BALANCED_DIET, ELEVATED_RISK_DIET, diet_plan};
pub use request::observation_from_form;
