//! Prediction outcomes and the response handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// Binary risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLabel {
    Low,
    Elevated,
}

impl RiskLabel {
    pub fn from_binary(label: u8) -> Self {
        if label == 1 {
            RiskLabel::Elevated
        } else {
            RiskLabel::Low
        }
    }

    pub fn as_binary(self) -> u8 {
        match self {
            RiskLabel::Low => 0,
            RiskLabel::Elevated => 1,
        }
    }

    /// User-facing result text.
    pub fn message(self) -> &'static str {
        match self {
            RiskLabel::Low => "Low Diabetes Risk",
            RiskLabel::Elevated => "Possible Diabetes Risk",
        }
    }

    pub fn is_elevated(self) -> bool {
        matches!(self, RiskLabel::Elevated)
    }
}

/// Coarse reliability estimate based on how many inputs were supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Low,
    Medium,
    High,
}

impl ConfidenceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            ConfidenceTier::Low => "Low",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::High => "High",
        }
    }
}

impl std::fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full outcome of one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// Positive-class probability in 0.0..=1.0.
    pub probability: f64,
    pub confidence: ConfidenceTier,
    /// Five ordered recommendations matching the label.
    pub diet_plan: Vec<String>,
}

/// Echo of the derived inputs, for display next to the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSummary {
    pub age: f64,
    pub bmi: f64,
    pub glucose: f64,
    pub blood_pressure: f64,
}

/// What the rendering layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub result: String,
    /// Probability as a percentage, rounded to one decimal.
    pub probability_pct: f64,
    pub confidence: ConfidenceTier,
    pub diet: Vec<String>,
    pub summary: InputSummary,
}

impl PredictionResponse {
    pub fn from_result(result: &PredictionResult, summary: InputSummary) -> Self {
        Self {
            result: result.label.message().to_string(),
            probability_pct: round_one_decimal(result.probability * 100.0),
            confidence: result.confidence,
            diet: result.diet_plan.clone(),
            summary: InputSummary {
                bmi: round_one_decimal(summary.bmi),
                ..summary
            },
        }
    }
}

/// Rounds half away from zero to one decimal place.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_binary_round_trip() {
        assert_eq!(RiskLabel::from_binary(1), RiskLabel::Elevated);
        assert_eq!(RiskLabel::from_binary(0), RiskLabel::Low);
        assert_eq!(RiskLabel::Elevated.as_binary(), 1);
        assert_eq!(RiskLabel::Low.as_binary(), 0);
    }

    #[test]
    fn tiers_order_low_to_high() {
        assert!(ConfidenceTier::Low < ConfidenceTier::Medium);
        assert!(ConfidenceTier::Medium < ConfidenceTier::High);
    }

    #[test]
    fn response_rounds_percentage_and_bmi() {
        let result = PredictionResult {
            label: RiskLabel::Elevated,
            probability: 0.87654,
            confidence: ConfidenceTier::Medium,
            diet_plan: vec!["Eat high-fiber foods".to_string()],
        };
        let response = PredictionResponse::from_result(
            &result,
            InputSummary {
                age: 45.0,
                bmi: 31.249_999,
                glucose: 160.0,
                blood_pressure: 130.0,
            },
        );
        assert_eq!(response.probability_pct, 87.7);
        assert_eq!(response.summary.bmi, 31.2);
        assert_eq!(response.result, "Possible Diabetes Risk");
    }
}
