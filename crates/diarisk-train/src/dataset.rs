//! Synthetic reference dataset generation.
//!
//! The outcome is a rough screening rule, not medical truth: elevated
//! glucose, BMI, or blood pressure, or a positive family history.

use std::path::Path;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use diarisk_model::{FEATURE_COUNT, ModelFeature, schema_names};

/// Feature rows plus binary outcomes, in canonical schema order.
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub rows: Vec<[f64; FEATURE_COUNT]>,
    pub outcomes: Vec<u8>,
}

/// Generates `count` rows from a seeded RNG; the same seed always yields
/// the same dataset.
pub fn generate(seed: u64, count: usize) -> SyntheticDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(count);
    let mut outcomes = Vec::with_capacity(count);
    for _ in 0..count {
        let age = rng.gen_range(20..70) as f64;
        let bmi = rng.gen_range(18.0..40.0);
        let glucose = rng.gen_range(70..200) as f64;
        let blood_pressure = rng.gen_range(60..150) as f64;
        let family_history = f64::from(rng.gen_bool(0.5));
        let pregnancies = rng.gen_range(0..6) as f64;
        let insulin = rng.gen_range(15.0..276.0);
        let skin_thickness = rng.gen_range(7.0..50.0);

        let mut row = [0.0; FEATURE_COUNT];
        row[ModelFeature::Age.index()] = age;
        row[ModelFeature::Bmi.index()] = bmi;
        row[ModelFeature::Glucose.index()] = glucose;
        row[ModelFeature::BloodPressure.index()] = blood_pressure;
        row[ModelFeature::FamilyHistory.index()] = family_history;
        row[ModelFeature::Pregnancies.index()] = pregnancies;
        row[ModelFeature::Insulin.index()] = insulin;
        row[ModelFeature::SkinThickness.index()] = skin_thickness;

        let outcome = glucose > 140.0 || bmi > 30.0 || blood_pressure > 130.0
            || family_history > 0.0;
        rows.push(row);
        outcomes.push(u8::from(outcome));
    }
    SyntheticDataset { rows, outcomes }
}

impl SyntheticDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fraction of positive outcomes.
    pub fn positive_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let positives = self.outcomes.iter().filter(|o| **o == 1).count();
        positives as f64 / self.outcomes.len() as f64
    }

    /// Writes the dataset as the reference CSV the estimator computes its
    /// feature means from.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)
            .with_context(|| format!("create reference csv {}", path.display()))?;
        let mut header: Vec<&str> = schema_names().to_vec();
        header.push("Outcome");
        writer.write_record(&header).context("write csv header")?;
        for (row, outcome) in self.rows.iter().zip(&self.outcomes) {
            let mut record: Vec<String> = row.iter().map(|value| format!("{value}")).collect();
            record.push(outcome.to_string());
            writer.write_record(&record).context("write csv row")?;
        }
        writer.flush().context("flush reference csv")?;
        Ok(())
    }
}
