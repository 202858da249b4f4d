//! Country catalog used by the lookup surfaces.
//!
//! A curated static list rather than the full ISO registry: it covers the
//! destinations and citizenships the guide currently serves. Codes are ISO
//! 3166-1 alpha-2, plus `XK` for Kosovo.

/// One selectable country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
}

/// Curated country catalog, sorted by code.
pub const COUNTRIES: &[Country] = &[
    Country { code: "AE", name: "United Arab Emirates", region: "Middle East" },
    Country { code: "AR", name: "Argentina", region: "South America" },
    Country { code: "AT", name: "Austria", region: "Europe" },
    Country { code: "AU", name: "Australia", region: "Oceania" },
    Country { code: "BE", name: "Belgium", region: "Europe" },
    Country { code: "BR", name: "Brazil", region: "South America" },
    Country { code: "CA", name: "Canada", region: "North America" },
    Country { code: "CH", name: "Switzerland", region: "Europe" },
    Country { code: "CL", name: "Chile", region: "South America" },
    Country { code: "CN", name: "China", region: "Asia" },
    Country { code: "CO", name: "Colombia", region: "South America" },
    Country { code: "CZ", name: "Czechia", region: "Europe" },
    Country { code: "DE", name: "Germany", region: "Europe" },
    Country { code: "DK", name: "Denmark", region: "Europe" },
    Country { code: "EG", name: "Egypt", region: "Africa" },
    Country { code: "ES", name: "Spain", region: "Europe" },
    Country { code: "FI", name: "Finland", region: "Europe" },
    Country { code: "FR", name: "France", region: "Europe" },
    Country { code: "GB", name: "United Kingdom", region: "Europe" },
    Country { code: "GR", name: "Greece", region: "Europe" },
    Country { code: "HR", name: "Croatia", region: "Europe" },
    Country { code: "HU", name: "Hungary", region: "Europe" },
    Country { code: "ID", name: "Indonesia", region: "Asia" },
    Country { code: "IE", name: "Ireland", region: "Europe" },
    Country { code: "IL", name: "Israel", region: "Middle East" },
    Country { code: "IN", name: "India", region: "Asia" },
    Country { code: "IS", name: "Iceland", region: "Europe" },
    Country { code: "IT", name: "Italy", region: "Europe" },
    Country { code: "JP", name: "Japan", region: "Asia" },
    Country { code: "KE", name: "Kenya", region: "Africa" },
    Country { code: "KR", name: "South Korea", region: "Asia" },
    Country { code: "MA", name: "Morocco", region: "Africa" },
    Country { code: "MX", name: "Mexico", region: "North America" },
    Country { code: "MY", name: "Malaysia", region: "Asia" },
    Country { code: "NG", name: "Nigeria", region: "Africa" },
    Country { code: "NL", name: "Netherlands", region: "Europe" },
    Country { code: "NO", name: "Norway", region: "Europe" },
    Country { code: "NZ", name: "New Zealand", region: "Oceania" },
    Country { code: "PE", name: "Peru", region: "South America" },
    Country { code: "PH", name: "Philippines", region: "Asia" },
    Country { code: "PL", name: "Poland", region: "Europe" },
    Country { code: "PT", name: "Portugal", region: "Europe" },
    Country { code: "QA", name: "Qatar", region: "Middle East" },
    Country { code: "RO", name: "Romania", region: "Europe" },
    Country { code: "SA", name: "Saudi Arabia", region: "Middle East" },
    Country { code: "SE", name: "Sweden", region: "Europe" },
    Country { code: "SG", name: "Singapore", region: "Asia" },
    Country { code: "TH", name: "Thailand", region: "Asia" },
    Country { code: "TR", name: "Turkey", region: "Middle East" },
    Country { code: "TW", name: "Taiwan", region: "Asia" },
    Country { code: "US", name: "United States", region: "North America" },
    Country { code: "VN", name: "Vietnam", region: "Asia" },
    Country { code: "XK", name: "Kosovo", region: "Europe" },
    Country { code: "ZA", name: "South Africa", region: "Africa" },
];

/// Finds a country by code, name, or a "Name (CC)" combo, case-insensitively.
pub fn find_country(value: &str) -> Option<&'static Country> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }
    COUNTRIES.iter().find(|country| {
        country.code.to_lowercase() == normalized
            || country.name.to_lowercase() == normalized
            || format!(
                "{} ({})",
                country.name.to_lowercase(),
                country.code.to_lowercase()
            ) == normalized
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_sorted_and_uppercase() {
        for pair in COUNTRIES.windows(2) {
            assert!(pair[0].code < pair[1].code, "catalog out of order");
        }
        for country in COUNTRIES {
            assert_eq!(country.code.len(), 2);
            assert_eq!(country.code, country.code.to_uppercase());
        }
    }

    #[test]
    fn finds_by_code_name_and_combo() {
        assert_eq!(find_country("fr").map(|c| c.name), Some("France"));
        assert_eq!(find_country("France").map(|c| c.code), Some("FR"));
        assert_eq!(find_country("france (fr)").map(|c| c.code), Some("FR"));
        assert_eq!(find_country(" JP "), find_country("jp"));
        assert!(find_country("Atlantis").is_none());
        assert!(find_country("").is_none());
    }
}
