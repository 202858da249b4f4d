//! The serving-side guide query: everything a results page needs for one
//! citizenship/destination question, including an optional transit leg.

use visa_model::{EntryRule, Purpose, VisaRule};

use crate::index::RuleIndex;

/// Query parameters, all optional; mirrors the guide page's query string.
#[derive(Debug, Clone, Default)]
pub struct GuideRequest {
    pub citizenship: Option<String>,
    pub destination: Option<String>,
    pub purpose: Option<Purpose>,
    pub stay_days: Option<u32>,
    pub transit: Option<String>,
    pub transit_hours: Option<u32>,
}

/// Everything resolved for one guide query. Borrows from the index.
#[derive(Debug, Clone)]
pub struct GuideResponse<'a> {
    /// Uppercased citizenship code, when given.
    pub citizenship: Option<String>,
    /// Uppercased destination code, when given.
    pub destination: Option<String>,
    pub purpose: Purpose,
    pub stay_days: Option<u32>,
    pub rule: Option<&'a EntryRule>,
    pub visa_matrix_rule: Option<&'a VisaRule>,
    /// Uppercased transit-leg destination, when given.
    pub transit: Option<String>,
    pub transit_hours: Option<u32>,
    pub transit_rule: Option<&'a EntryRule>,
    pub transit_visa_matrix_rule: Option<&'a VisaRule>,
    /// Both codes were given but no curated entry rule exists for them.
    pub missing_data: bool,
}

impl RuleIndex {
    /// Resolves a guide request against the index.
    ///
    /// The transit leg, when present, is looked up with purpose forced to
    /// transit. Matrix rules resolve independently of entry rules, so a pair
    /// can have dataset coverage even when nothing is hand-curated for it.
    pub fn guide(&self, request: &GuideRequest) -> GuideResponse<'_> {
        let citizenship = normalize(request.citizenship.as_deref());
        let destination = normalize(request.destination.as_deref());
        let transit = normalize(request.transit.as_deref());
        let purpose = request.purpose.unwrap_or_default();

        let (rule, visa_matrix_rule) = match (&citizenship, &destination) {
            (Some(citizenship), Some(destination)) => (
                self.find_entry_rule(citizenship, destination, Some(purpose)),
                self.find_visa_matrix_rule(citizenship, destination),
            ),
            _ => (None, None),
        };

        let (transit_rule, transit_visa_matrix_rule) = match (&citizenship, &transit) {
            (Some(citizenship), Some(transit)) => (
                self.find_entry_rule(citizenship, transit, Some(Purpose::Transit)),
                self.find_visa_matrix_rule(citizenship, transit),
            ),
            _ => (None, None),
        };

        let missing_data = rule.is_none() && citizenship.is_some() && destination.is_some();

        GuideResponse {
            citizenship,
            destination,
            purpose,
            stay_days: request.stay_days,
            rule,
            visa_matrix_rule,
            transit,
            transit_hours: request.transit_hours,
            transit_rule,
            transit_visa_matrix_rule,
            missing_data,
        }
    }
}

fn normalize(code: Option<&str>) -> Option<String> {
    let code = code?.trim();
    if code.is_empty() {
        None
    } else {
        Some(code.to_ascii_uppercase())
    }
}
