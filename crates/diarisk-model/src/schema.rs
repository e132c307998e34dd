//! Canonical model feature schema.
//!
//! The classifier and scaler were fit against this exact name order. A
//! vector built in any other order scores meaninglessly, so the schema is a
//! single typed source of truth that artifacts are checked against at load.

use serde::{Deserialize, Serialize};

/// A feature the classifier consumes, in no particular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelFeature {
    Age,
    Bmi,
    Glucose,
    BloodPressure,
    FamilyHistory,
    Pregnancies,
    Insulin,
    SkinThickness,
}

/// Number of features the classifier expects.
pub const FEATURE_COUNT: usize = 8;

/// Canonical training-time feature order.
pub const FEATURE_SCHEMA: [ModelFeature; FEATURE_COUNT] = [
    ModelFeature::Age,
    ModelFeature::Bmi,
    ModelFeature::Glucose,
    ModelFeature::BloodPressure,
    ModelFeature::FamilyHistory,
    ModelFeature::Pregnancies,
    ModelFeature::Insulin,
    ModelFeature::SkinThickness,
];

impl ModelFeature {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelFeature::Age => "Age",
            ModelFeature::Bmi => "BMI",
            ModelFeature::Glucose => "Glucose",
            ModelFeature::BloodPressure => "BloodPressure",
            ModelFeature::FamilyHistory => "FamilyHistory",
            ModelFeature::Pregnancies => "Pregnancies",
            ModelFeature::Insulin => "Insulin",
            ModelFeature::SkinThickness => "SkinThickness",
        }
    }

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        FEATURE_SCHEMA
            .iter()
            .position(|feature| *feature == self)
            .unwrap_or(0)
    }
}

impl std::fmt::Display for ModelFeature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical feature names, in order.
pub fn schema_names() -> [&'static str; FEATURE_COUNT] {
    FEATURE_SCHEMA.map(ModelFeature::as_str)
}

/// Returns true when `names` matches the canonical schema exactly,
/// including order.
pub fn matches_schema(names: &[String]) -> bool {
    names.len() == FEATURE_COUNT
        && names
            .iter()
            .zip(schema_names())
            .all(|(found, expected)| found == expected)
}

/// An ordered feature vector matching [`FEATURE_SCHEMA`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    values: [f64; FEATURE_COUNT],
}

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: ModelFeature) -> f64 {
        self.values[feature.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_has_stable_order() {
        assert_eq!(
            schema_names(),
            [
                "Age",
                "BMI",
                "Glucose",
                "BloodPressure",
                "FamilyHistory",
                "Pregnancies",
                "Insulin",
                "SkinThickness",
            ]
        );
    }

    #[test]
    fn index_round_trips() {
        for (idx, feature) in FEATURE_SCHEMA.iter().enumerate() {
            assert_eq!(feature.index(), idx);
        }
    }

    #[test]
    fn matches_schema_rejects_reordered_names() {
        let mut names: Vec<String> = schema_names().map(String::from).to_vec();
        assert!(matches_schema(&names));
        names.swap(0, 1);
        assert!(!matches_schema(&names));
        names.swap(0, 1);
        names.pop();
        assert!(!matches_schema(&names));
    }

    #[test]
    fn vector_indexes_by_feature() {
        let vector = FeatureVector::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(vector.get(ModelFeature::Age), 1.0);
        assert_eq!(vector.get(ModelFeature::Bmi), 2.0);
        assert_eq!(vector.get(ModelFeature::SkinThickness), 8.0);
    }
}
