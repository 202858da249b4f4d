//! Hand-curated entry rule types.
//!
//! Entry rules are authored by humans in the per-destination rule files and
//! are read-only to the generator. They carry richer context than the
//! generated matrix: purpose of travel, concrete requirements, sources, and a
//! last-reviewed date.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Purpose of travel for an entry rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Purpose {
    #[default]
    Tourism,
    Business,
    Transit,
}

impl Purpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            Purpose::Tourism => "tourism",
            Purpose::Business => "business",
            Purpose::Transit => "transit",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Purpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tourism" => Ok(Purpose::Tourism),
            "business" => Ok(Purpose::Business),
            "transit" => Ok(Purpose::Transit),
            other => Err(format!("unknown purpose: {other}")),
        }
    }
}

/// Visa type vocabulary used by hand-curated entry rules.
///
/// This is a smaller, slightly different vocabulary than [`VisaCategory`]:
/// curated rules write `evisa` where the dataset writes `e_visa`, and have no
/// `no_admission` or `unknown` values.
///
/// [`VisaCategory`]: crate::matrix::VisaCategory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaType {
    VisaFree,
    VisaOnArrival,
    Evisa,
    VisaRequired,
    Eta,
}

impl VisaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisaType::VisaFree => "visa_free",
            VisaType::VisaOnArrival => "visa_on_arrival",
            VisaType::Evisa => "evisa",
            VisaType::VisaRequired => "visa_required",
            VisaType::Eta => "eta",
        }
    }
}

impl fmt::Display for VisaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad grouping for a single entry requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    Passport,
    Visa,
    Health,
    Money,
    Arrival,
    Other,
}

/// One concrete requirement within an entry rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequirement {
    pub id: String,
    pub title: String,
    pub details: String,
    pub category: RequirementCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_urls: Option<Vec<String>>,
}

/// A curated entry rule for one (citizenship, destination, purpose) triple.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRule {
    pub citizenship: String,
    pub destination: String,
    #[serde(default)]
    pub purpose: Purpose,
    pub visa_type: VisaType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stay_days: Option<u32>,
    #[serde(default)]
    pub requirements: Vec<EntryRequirement>,
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub sources: Vec<String>,
}

impl EntryRule {
    /// True when this rule answers the given query triple. Codes are matched
    /// case-insensitively.
    pub fn matches(&self, citizenship: &str, destination: &str, purpose: Purpose) -> bool {
        self.citizenship.eq_ignore_ascii_case(citizenship)
            && self.destination.eq_ignore_ascii_case(destination)
            && self.purpose == purpose
    }
}
