//! Generated visa matrix types.
//!
//! The matrix is rebuilt from the upstream dataset on every generation run;
//! nothing in here is hand-curated. `BTreeMap` keeps both key levels sorted
//! so rendered output is deterministic.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Visa requirement category as derived from the upstream dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaCategory {
    /// No visa needed for entry.
    VisaFree,
    /// Visa issued at the border on arrival.
    VisaOnArrival,
    /// Electronic travel authorization required before departure.
    Eta,
    /// Electronic visa required before departure.
    EVisa,
    /// Visa must be obtained in advance.
    VisaRequired,
    /// Entry not permitted.
    NoAdmission,
    /// Token not in the known vocabulary; preserved for manual review.
    Unknown,
}

impl VisaCategory {
    /// Returns the category as it appears in generated rule files.
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaCategory::VisaFree => "visa_free",
            VisaCategory::VisaOnArrival => "visa_on_arrival",
            VisaCategory::Eta => "eta",
            VisaCategory::EVisa => "e_visa",
            VisaCategory::VisaRequired => "visa_required",
            VisaCategory::NoAdmission => "no_admission",
            VisaCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for VisaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisaCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visa_free" => Ok(VisaCategory::VisaFree),
            "visa_on_arrival" => Ok(VisaCategory::VisaOnArrival),
            "eta" => Ok(VisaCategory::Eta),
            "e_visa" => Ok(VisaCategory::EVisa),
            "visa_required" => Ok(VisaCategory::VisaRequired),
            "no_admission" => Ok(VisaCategory::NoAdmission),
            "unknown" => Ok(VisaCategory::Unknown),
            other => Err(format!("unknown visa category: {other}")),
        }
    }
}

/// One cell of the visa matrix: what a citizenship needs for a destination.
///
/// Invariants: `max_stay_days` is only present for `visa_free` rules derived
/// from a numeric dataset token; `raw` is only present for `unknown` rules and
/// carries the original token verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRule {
    pub category: VisaCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stay_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl VisaRule {
    /// Rule with a bare category and no metadata.
    pub fn new(category: VisaCategory) -> Self {
        Self {
            category,
            max_stay_days: None,
            raw: None,
        }
    }

    /// Visa-free rule with a maximum stay in days.
    pub fn visa_free_for(days: u32) -> Self {
        Self {
            category: VisaCategory::VisaFree,
            max_stay_days: Some(days),
            raw: None,
        }
    }

    /// Unrecognized rule keeping the original dataset token.
    pub fn unknown(raw: impl Into<String>) -> Self {
        Self {
            category: VisaCategory::Unknown,
            max_stay_days: None,
            raw: Some(raw.into()),
        }
    }
}

/// Citizenship code -> visa rule, for a single destination.
pub type VisaMatrix = BTreeMap<String, VisaRule>;

/// Destination code -> visa matrix.
pub type DestinationMatrices = BTreeMap<String, VisaMatrix>;
