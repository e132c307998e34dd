//! Static diet recommendations keyed by risk label.

use diarisk_model::RiskLabel;

/// Recommendations shown for an elevated-risk result.
pub const ELEVATED_RISK_DIET: [&str; 5] = [
    "Avoid sugary drinks and junk foods",
    "Eat high-fiber foods",
    "Limit white rice and white bread",
    "Include green leafy vegetables",
    "Prefer grilled fish or chicken instead of fried",
];

/// Recommendations shown for a low-risk result.
pub const BALANCED_DIET: [&str; 5] = [
    "Maintain a balanced diet",
    "Stay hydrated",
    "Exercise at least 30 minutes a day",
    "Include fresh fruits and vegetables",
    "Avoid too much fast food",
];

/// The ordered five-item diet plan for a label.
pub fn diet_plan(label: RiskLabel) -> Vec<String> {
    let items = match label {
        RiskLabel::Elevated => ELEVATED_RISK_DIET,
        RiskLabel::Low => BALANCED_DIET,
    };
    items.iter().map(|item| (*item).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plans_have_five_disjoint_items() {
        let elevated = diet_plan(RiskLabel::Elevated);
        let balanced = diet_plan(RiskLabel::Low);
        assert_eq!(elevated.len(), 5);
        assert_eq!(balanced.len(), 5);
        for item in &elevated {
            assert!(!balanced.contains(item));
        }
    }

    #[test]
    fn plan_matches_label() {
        assert_eq!(diet_plan(RiskLabel::Elevated)[0], ELEVATED_RISK_DIET[0]);
        assert_eq!(diet_plan(RiskLabel::Low)[0], BALANCED_DIET[0]);
    }
}
