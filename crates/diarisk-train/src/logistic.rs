//! Logistic regression fitting by batch gradient descent.

use diarisk_model::{FEATURE_COUNT, LogisticModel, schema_names, sigmoid};

/// Gradient-descent hyperparameters.
#[derive(Debug, Clone, Copy)]
pub struct FitParams {
    pub learning_rate: f64,
    pub epochs: usize,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: 500,
        }
    }
}

/// Fits weights and intercept on already-scaled rows.
pub fn fit_logistic(
    rows: &[[f64; FEATURE_COUNT]],
    outcomes: &[u8],
    params: FitParams,
) -> LogisticModel {
    let count = rows.len().max(1) as f64;
    let mut weights = [0.0; FEATURE_COUNT];
    let mut intercept = 0.0;

    for _ in 0..params.epochs {
        let mut weight_grads = [0.0; FEATURE_COUNT];
        let mut intercept_grad = 0.0;
        for (row, outcome) in rows.iter().zip(outcomes) {
            let z = row
                .iter()
                .zip(weights)
                .fold(intercept, |acc, (value, weight)| acc + weight * value);
            let residual = sigmoid(z) - f64::from(*outcome);
            for (grad, value) in weight_grads.iter_mut().zip(row) {
                *grad += residual * value;
            }
            intercept_grad += residual;
        }
        for (weight, grad) in weights.iter_mut().zip(weight_grads) {
            *weight -= params.learning_rate * grad / count;
        }
        intercept -= params.learning_rate * intercept_grad / count;
    }

    LogisticModel {
        feature_names: schema_names().map(String::from).to_vec(),
        weights: weights.to_vec(),
        intercept,
    }
}

/// Fraction of rows the model labels correctly.
pub fn accuracy(model: &LogisticModel, rows: &[[f64; FEATURE_COUNT]], outcomes: &[u8]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let mut correct = 0usize;
    for (row, outcome) in rows.iter().zip(outcomes) {
        if model.predict(row) == *outcome {
            correct += 1;
        }
    }
    correct as f64 / rows.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A linearly separable toy problem: outcome is the sign of the first
    /// feature.
    #[test]
    fn fits_a_separable_problem() {
        let rows: Vec<[f64; FEATURE_COUNT]> = (0..100)
            .map(|i| {
                let v = if i % 2 == 0 { 1.0 } else { -1.0 };
                let mut row = [0.0; FEATURE_COUNT];
                row[0] = v + (i as f64 % 7.0) * 0.01;
                row
            })
            .collect();
        let outcomes: Vec<u8> = rows.iter().map(|row| u8::from(row[0] > 0.0)).collect();

        let model = fit_logistic(&rows, &outcomes, FitParams::default());
        assert!(model.weights[0] > 0.0);
        assert!(accuracy(&model, &rows, &outcomes) > 0.99);
    }

    #[test]
    fn accuracy_of_empty_input_is_zero() {
        let model = LogisticModel {
            feature_names: schema_names().map(String::from).to_vec(),
            weights: vec![0.0; FEATURE_COUNT],
            intercept: 0.0,
        };
        assert_eq!(accuracy(&model, &[], &[]), 0.0);
    }
}
