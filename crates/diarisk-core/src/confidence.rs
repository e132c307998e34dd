//! Confidence tier policy.

use diarisk_model::ConfidenceTier;

/// Maps the number of caller-supplied fields to a confidence tier.
///
/// High above six fields, Medium above four, Low otherwise. Stateless and
/// monotonic non-decreasing in the count.
pub fn confidence_tier(provided: usize) -> ConfidenceTier {
    if provided > 6 {
        ConfidenceTier::High
    } else if provided > 4 {
        ConfidenceTier::Medium
    } else {
        ConfidenceTier::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(confidence_tier(0), ConfidenceTier::Low);
        assert_eq!(confidence_tier(4), ConfidenceTier::Low);
        assert_eq!(confidence_tier(5), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(6), ConfidenceTier::Medium);
        assert_eq!(confidence_tier(7), ConfidenceTier::High);
        assert_eq!(confidence_tier(10), ConfidenceTier::High);
    }

    proptest! {
        #[test]
        fn tier_is_monotonic(a in 0usize..16, b in 0usize..16) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(confidence_tier(lo) <= confidence_tier(hi));
        }
    }
}
