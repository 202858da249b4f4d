//! Human-readable labels for visa vocabulary.

use crate::entry::VisaType;
use crate::matrix::VisaCategory;

/// Label for a curated visa type; `None` falls back to a generic prompt.
pub fn visa_type_label(visa_type: Option<VisaType>) -> &'static str {
    match visa_type {
        Some(VisaType::VisaFree) => "Visa-free",
        Some(VisaType::VisaOnArrival) => "Visa on arrival",
        Some(VisaType::Evisa) => "eVisa",
        Some(VisaType::Eta) => "ETA required",
        Some(VisaType::VisaRequired) => "Visa required",
        None => "Check requirements",
    }
}

/// Label for a generated matrix category.
pub fn visa_category_label(category: Option<VisaCategory>) -> &'static str {
    match category {
        Some(VisaCategory::VisaFree) => "Visa-free",
        Some(VisaCategory::VisaOnArrival) => "Visa on arrival",
        Some(VisaCategory::EVisa) => "eVisa",
        Some(VisaCategory::Eta) => "ETA required",
        Some(VisaCategory::VisaRequired) => "Visa required",
        Some(VisaCategory::NoAdmission) => "No admission",
        Some(VisaCategory::Unknown) | None => "Check requirements",
    }
}

/// Canonical "FR->US" key for a citizenship/destination pair.
pub fn route_key(citizenship: &str, destination: &str) -> String {
    if citizenship.trim().is_empty() || destination.trim().is_empty() {
        return String::new();
    }
    format!(
        "{}->{}",
        citizenship.trim().to_ascii_uppercase(),
        destination.trim().to_ascii_uppercase()
    )
}
