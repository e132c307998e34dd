//! Feature derivation: BMI computation and dataset-mean substitution.

use std::path::Path;

use diarisk_model::{
    FEATURE_COUNT, FEATURE_SCHEMA, FeatureVector, ModelFeature, PatientField, PatientObservation,
    Result, RiskError,
};

/// BMI = weight(kg) / height(m)^2, with height supplied in centimeters.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Result<f64> {
    if !(height_cm > 0.0) {
        return Err(RiskError::invalid_input(
            PatientField::Height.as_str(),
            "height must be greater than zero",
        ));
    }
    if !(weight_kg > 0.0) {
        return Err(RiskError::invalid_input(
            PatientField::Weight.as_str(),
            "weight must be greater than zero",
        ));
    }
    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Per-feature means of the reference dataset, computed once at startup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureMeans {
    values: [f64; FEATURE_COUNT],
}

impl FeatureMeans {
    /// Means in canonical schema order.
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, feature: ModelFeature) -> f64 {
        self.values[feature.index()]
    }

    /// Computes column means from a reference CSV whose header carries the
    /// canonical feature names (extra columns such as Outcome are ignored).
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|err| unavailable(path, &err.to_string()))?;
        let headers = reader
            .headers()
            .map_err(|err| unavailable(path, &err.to_string()))?
            .clone();

        let mut columns = [usize::MAX; FEATURE_COUNT];
        for (slot, feature) in columns.iter_mut().zip(FEATURE_SCHEMA) {
            *slot = headers
                .iter()
                .position(|name| name.trim() == feature.as_str())
                .ok_or_else(|| {
                    unavailable(path, &format!("missing column {}", feature.as_str()))
                })?;
        }

        let mut sums = [0.0; FEATURE_COUNT];
        let mut rows = 0usize;
        for record in reader.records() {
            let record = record.map_err(|err| unavailable(path, &err.to_string()))?;
            for (idx, column) in columns.iter().enumerate() {
                let raw = record.get(*column).unwrap_or_default().trim();
                let value: f64 = raw.parse().map_err(|_| {
                    unavailable(
                        path,
                        &format!(
                            "non-numeric value {raw:?} in column {}",
                            FEATURE_SCHEMA[idx].as_str()
                        ),
                    )
                })?;
                sums[idx] += value;
            }
            rows += 1;
        }
        if rows == 0 {
            return Err(unavailable(path, "reference dataset has no rows"));
        }

        let mut values = [0.0; FEATURE_COUNT];
        for (mean, sum) in values.iter_mut().zip(sums) {
            *mean = sum / rows as f64;
        }
        Ok(Self { values })
    }
}

fn unavailable(path: &Path, message: &str) -> RiskError {
    RiskError::model_unavailable(format!("reference dataset {}: {message}", path.display()))
}

/// Builds the canonical feature vector for an observation.
///
/// BMI is derived when height and weight are both present; every schema
/// feature absent from the observation is substituted with the dataset mean.
/// Pure apart from the startup-loaded means.
pub fn derive_features(
    observation: &PatientObservation,
    means: &FeatureMeans,
) -> Result<FeatureVector> {
    let bmi = match (observation.height, observation.weight) {
        (Some(height), Some(weight)) => Some(compute_bmi(height, weight)?),
        _ => None,
    };

    let mut values = [0.0; FEATURE_COUNT];
    for (slot, feature) in values.iter_mut().zip(FEATURE_SCHEMA) {
        let provided = match feature {
            ModelFeature::Age => observation.age,
            ModelFeature::Bmi => bmi,
            ModelFeature::Glucose => observation.glucose,
            ModelFeature::BloodPressure => observation.blood_pressure,
            ModelFeature::FamilyHistory => observation.family_history,
            ModelFeature::Pregnancies => observation.pregnancies,
            ModelFeature::Insulin => observation.insulin,
            ModelFeature::SkinThickness => observation.skin_thickness,
        };
        *slot = provided.unwrap_or_else(|| means.get(feature));
    }
    Ok(FeatureVector::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn test_means() -> FeatureMeans {
        FeatureMeans::new([33.0, 32.0, 120.0, 72.0, 0.4, 3.8, 80.0, 20.0])
    }

    #[test]
    fn bmi_matches_definition_exactly() {
        let bmi = compute_bmi(160.0, 80.0).expect("bmi");
        assert!((bmi - 31.25).abs() < 1e-9);
        let bmi = compute_bmi(172.5, 63.0).expect("bmi");
        assert!((bmi - 63.0 / (1.725_f64 * 1.725)).abs() < 1e-9);
    }

    #[test]
    fn bmi_rejects_non_positive_height() {
        for height in [0.0, -160.0] {
            let err = compute_bmi(height, 80.0).expect_err("invalid height");
            assert!(matches!(err, RiskError::InvalidInput { ref field, .. } if field == "Height"));
        }
    }

    #[test]
    fn missing_features_take_means_not_zero() {
        let obs = PatientObservation::new()
            .with(PatientField::Age, 45.0)
            .with(PatientField::Glucose, 160.0)
            .with(PatientField::FamilyHistory, 1.0);
        let vector = derive_features(&obs, &test_means()).expect("derive");
        // Explicit inputs pass through unchanged.
        assert_eq!(vector.get(ModelFeature::Age), 45.0);
        assert_eq!(vector.get(ModelFeature::Glucose), 160.0);
        assert_eq!(vector.get(ModelFeature::FamilyHistory), 1.0);
        // Everything else is a dataset mean, never zero.
        assert_eq!(vector.get(ModelFeature::Bmi), 32.0);
        assert_eq!(vector.get(ModelFeature::BloodPressure), 72.0);
        assert_eq!(vector.get(ModelFeature::Pregnancies), 3.8);
        assert_eq!(vector.get(ModelFeature::Insulin), 80.0);
        assert_eq!(vector.get(ModelFeature::SkinThickness), 20.0);
    }

    #[test]
    fn derives_bmi_when_height_and_weight_present() {
        let obs = PatientObservation::new()
            .with(PatientField::Height, 160.0)
            .with(PatientField::Weight, 80.0);
        let vector = derive_features(&obs, &test_means()).expect("derive");
        assert!((vector.get(ModelFeature::Bmi) - 31.25).abs() < 1e-9);
    }

    #[test]
    fn means_load_from_reference_csv() {
        let mut file = tempfile::NamedTempFile::new().expect("temp csv");
        writeln!(
            file,
            "Age,BMI,Glucose,BloodPressure,FamilyHistory,Pregnancies,Insulin,SkinThickness,Outcome"
        )
        .unwrap();
        writeln!(file, "40,30.0,100,70,0,2,60,18,0").unwrap();
        writeln!(file, "60,34.0,140,90,1,4,100,22,1").unwrap();
        let means = FeatureMeans::from_csv(file.path()).expect("means");
        assert_eq!(means.get(ModelFeature::Age), 50.0);
        assert_eq!(means.get(ModelFeature::Bmi), 32.0);
        assert_eq!(means.get(ModelFeature::Glucose), 120.0);
        assert_eq!(means.get(ModelFeature::FamilyHistory), 0.5);
    }

    #[test]
    fn means_report_missing_dataset_as_unavailable() {
        let err = FeatureMeans::from_csv(Path::new("does-not-exist.csv")).expect_err("missing");
        assert!(matches!(err, RiskError::ModelUnavailable { .. }));
    }
}
