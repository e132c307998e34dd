//! Deterministic report content.
//!
//! Identical (label, probability, date) inputs always produce identical
//! content lines; only the embedded date varies between days.

use chrono::{Local, NaiveDate};

use diarisk_core::diet_plan;
use diarisk_model::{ConfidenceTier, RiskLabel, round_one_decimal};

/// Fixed report title.
pub const REPORT_TITLE: &str = "Diabetes Risk Report";

/// Fixed disclaimer shown at the bottom of every report.
pub const DISCLAIMER: &str = "This report is produced by a statistical screening model and is \
not a medical diagnosis. Discuss the result with a qualified healthcare professional before \
acting on it.";

/// Everything the document layer needs to lay out one report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContent {
    pub title: String,
    pub date: NaiveDate,
    pub result: String,
    /// Probability percentage, one decimal.
    pub probability_pct: f64,
    pub confidence: Option<ConfidenceTier>,
    pub diet: Vec<String>,
    pub disclaimer: String,
}

impl ReportContent {
    /// Builds the content for a given label and probability percentage with
    /// an explicit date, which keeps generation idempotent for callers that
    /// pin the date.
    pub fn new(label: RiskLabel, probability_pct: f64, date: NaiveDate) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            date,
            result: label.message().to_string(),
            probability_pct: round_one_decimal(probability_pct),
            confidence: None,
            diet: diet_plan(label),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Same as [`ReportContent::new`] with today's local date.
    pub fn for_today(label: RiskLabel, probability_pct: f64) -> Self {
        Self::new(label, probability_pct, Local::now().date_naive())
    }

    pub fn with_confidence(mut self, confidence: ConfidenceTier) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Flat content lines, in layout order. The PDF renderer and the text
    /// output both derive from this.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.title.clone(),
            format!("Date: {}", self.date.format("%Y-%m-%d")),
            format!("Prediction: {}", self.result),
            format!("Risk Probability: {:.1}%", self.probability_pct),
        ];
        if let Some(confidence) = self.confidence {
            lines.push(format!("Confidence: {confidence}"));
        }
        lines.push("Recommended Diet:".to_string());
        for (number, item) in self.diet_rows() {
            lines.push(format!("{number}. {item}"));
        }
        lines.push(self.disclaimer.clone());
        lines
    }

    /// The five numbered diet table rows.
    pub fn diet_rows(&self) -> impl Iterator<Item = (usize, &str)> {
        self.diet
            .iter()
            .enumerate()
            .map(|(idx, item)| (idx + 1, item.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 26).expect("date")
    }

    #[test]
    fn lines_are_idempotent() {
        let a = ReportContent::new(RiskLabel::Elevated, 87.65, date());
        let b = ReportContent::new(RiskLabel::Elevated, 87.65, date());
        assert_eq!(a.lines(), b.lines());
    }

    #[test]
    fn lines_carry_prediction_probability_and_table() {
        let content = ReportContent::new(RiskLabel::Elevated, 87.65, date());
        let lines = content.lines();
        assert_eq!(lines[0], "Diabetes Risk Report");
        assert_eq!(lines[1], "Date: 2026-08-26");
        assert_eq!(lines[2], "Prediction: Possible Diabetes Risk");
        assert_eq!(lines[3], "Risk Probability: 87.7%");
        assert_eq!(lines[4], "Recommended Diet:");
        assert!(lines[5].starts_with("1. "));
        assert!(lines[9].starts_with("5. "));
        assert_eq!(lines[10], DISCLAIMER);
    }

    #[test]
    fn label_selects_the_diet_variant() {
        let elevated = ReportContent::new(RiskLabel::Elevated, 80.0, date());
        let low = ReportContent::new(RiskLabel::Low, 12.0, date());
        assert_eq!(elevated.diet.len(), 5);
        assert_eq!(low.diet.len(), 5);
        for item in &elevated.diet {
            assert!(!low.diet.contains(item));
        }
    }

    #[test]
    fn confidence_line_is_optional() {
        let plain = ReportContent::new(RiskLabel::Low, 10.0, date());
        assert!(!plain.lines().iter().any(|line| line.starts_with("Confidence:")));
        let tiered = plain.with_confidence(ConfidenceTier::Medium);
        assert!(tiered.lines().contains(&"Confidence: Medium".to_string()));
    }
}
