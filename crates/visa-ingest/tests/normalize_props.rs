//! Property tests for requirement normalization.

use proptest::prelude::*;

use visa_ingest::normalize_requirement;
use visa_model::{VisaCategory, VisaRule};

const VOCABULARY: [&str; 6] = [
    "visa free",
    "visa on arrival",
    "eta",
    "e-visa",
    "visa required",
    "no admission",
];

proptest! {
    #[test]
    fn positive_day_counts_normalize_to_visa_free(days in 1u32..=100_000) {
        let rule = normalize_requirement(&days.to_string());
        prop_assert_eq!(rule, Some(VisaRule::visa_free_for(days)));
    }

    #[test]
    fn whitespace_around_day_counts_is_ignored(days in 1u32..=365) {
        let rule = normalize_requirement(&format!("  {days}\t"));
        prop_assert_eq!(rule, Some(VisaRule::visa_free_for(days)));
    }

    #[test]
    fn free_text_is_never_dropped(token in "[a-z]{2,10}( [a-z]{2,10}){0,2}") {
        prop_assume!(!VOCABULARY.contains(&token.as_str()));
        prop_assume!(token.parse::<f64>().is_err());

        let rule = normalize_requirement(&token).expect("free text yields a rule");
        prop_assert_eq!(rule.category, VisaCategory::Unknown);
        prop_assert_eq!(rule.raw.as_deref(), Some(token.as_str()));
        prop_assert_eq!(rule.max_stay_days, None);
    }
}
