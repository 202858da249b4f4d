//! Requirement token normalization.

use visa_model::{VisaCategory, VisaRule};

/// Maps a raw dataset token to a visa rule.
///
/// Returns `None` only for the literal `-1`, the dataset's "no data" marker.
/// A positive integer token means visa-free with that many days of stay. The
/// remaining vocabulary is matched case-insensitively; anything else becomes
/// an `unknown` rule that keeps the trimmed original token, so no dataset
/// entry is ever dropped for unrecognized text.
pub fn normalize_requirement(requirement: &str) -> Option<VisaRule> {
    let token = requirement.trim();
    if token == "-1" {
        return None;
    }

    if let Some(days) = parse_stay_days(token) {
        return Some(VisaRule::visa_free_for(days));
    }

    let category = match token.to_ascii_lowercase().as_str() {
        "visa free" => VisaCategory::VisaFree,
        "visa on arrival" => VisaCategory::VisaOnArrival,
        "eta" => VisaCategory::Eta,
        "e-visa" => VisaCategory::EVisa,
        "visa required" => VisaCategory::VisaRequired,
        "no admission" => VisaCategory::NoAdmission,
        _ => return Some(VisaRule::unknown(token)),
    };
    Some(VisaRule::new(category))
}

/// Parses a stay-length token: finite, strictly positive, integral.
///
/// The dataset only carries whole day counts; fractional or overflowing
/// numerics fall through to the unknown branch instead of being rounded.
fn parse_stay_days(token: &str) -> Option<u32> {
    let value: f64 = token.parse().ok()?;
    if !value.is_finite() || value <= 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_data_marker_yields_no_rule() {
        assert_eq!(normalize_requirement("-1"), None);
        assert_eq!(normalize_requirement("  -1  "), None);
    }

    #[test]
    fn numeric_tokens_become_visa_free_with_stay() {
        assert_eq!(normalize_requirement("90"), Some(VisaRule::visa_free_for(90)));
        assert_eq!(normalize_requirement("1"), Some(VisaRule::visa_free_for(1)));
        assert_eq!(
            normalize_requirement(" 360 "),
            Some(VisaRule::visa_free_for(360))
        );
    }

    #[test]
    fn vocabulary_matches_case_insensitively() {
        assert_eq!(
            normalize_requirement("Visa Free"),
            Some(VisaRule::new(VisaCategory::VisaFree))
        );
        assert_eq!(
            normalize_requirement("visa on arrival"),
            Some(VisaRule::new(VisaCategory::VisaOnArrival))
        );
        assert_eq!(
            normalize_requirement("ETA"),
            Some(VisaRule::new(VisaCategory::Eta))
        );
        assert_eq!(
            normalize_requirement("e-visa"),
            Some(VisaRule::new(VisaCategory::EVisa))
        );
        assert_eq!(
            normalize_requirement("Visa Required"),
            Some(VisaRule::new(VisaCategory::VisaRequired))
        );
        assert_eq!(
            normalize_requirement("no admission"),
            Some(VisaRule::new(VisaCategory::NoAdmission))
        );
    }

    #[test]
    fn unrecognized_tokens_are_preserved() {
        assert_eq!(
            normalize_requirement("  covid ban "),
            Some(VisaRule::unknown("covid ban"))
        );
        assert_eq!(normalize_requirement(""), Some(VisaRule::unknown("")));
        // Negative numbers other than the literal -1 are not a no-data marker.
        assert_eq!(normalize_requirement("-2"), Some(VisaRule::unknown("-2")));
    }

    #[test]
    fn non_integral_numerics_fall_through_to_unknown() {
        assert_eq!(
            normalize_requirement("90.5"),
            Some(VisaRule::unknown("90.5"))
        );
        assert_eq!(normalize_requirement("0"), Some(VisaRule::unknown("0")));
        assert_eq!(normalize_requirement("inf"), Some(VisaRule::unknown("inf")));
        assert_eq!(normalize_requirement("NaN"), Some(VisaRule::unknown("NaN")));
    }
}
