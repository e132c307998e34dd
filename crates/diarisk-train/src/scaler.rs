//! Standard scaler fitting.

use diarisk_model::{FEATURE_COUNT, StandardScaler, schema_names};

/// Fits per-feature mean and (population) standard deviation.
///
/// A constant column gets std 1.0 so the transform stays defined.
pub fn fit_scaler(rows: &[[f64; FEATURE_COUNT]]) -> StandardScaler {
    let count = rows.len().max(1) as f64;
    let mut means = [0.0; FEATURE_COUNT];
    for row in rows {
        for (mean, value) in means.iter_mut().zip(row) {
            *mean += value;
        }
    }
    for mean in &mut means {
        *mean /= count;
    }

    let mut variances = [0.0; FEATURE_COUNT];
    for row in rows {
        for (idx, value) in row.iter().enumerate() {
            let diff = value - means[idx];
            variances[idx] += diff * diff;
        }
    }
    let mut stds = [0.0; FEATURE_COUNT];
    for (std, variance) in stds.iter_mut().zip(variances) {
        let sigma = (variance / count).sqrt();
        *std = if sigma > 0.0 { sigma } else { 1.0 };
    }

    StandardScaler {
        feature_names: schema_names().map(String::from).to_vec(),
        means: means.to_vec(),
        stds: stds.to_vec(),
    }
}

/// Applies the fitted transform to every row.
pub fn transform_rows(
    scaler: &StandardScaler,
    rows: &[[f64; FEATURE_COUNT]],
) -> Vec<[f64; FEATURE_COUNT]> {
    rows.iter()
        .map(|row| {
            let mut scaled = [0.0; FEATURE_COUNT];
            for (idx, value) in row.iter().enumerate() {
                scaled[idx] = (value - scaler.means[idx]) / scaler.stds[idx];
            }
            scaled
        })
        .collect()
}
