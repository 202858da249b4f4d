//! Per-destination rule file loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use visa_model::{EntryRule, VisaMatrix};

use crate::error::{Result, RulesError};

/// One parsed `rules.toml`: hand-authored checklist and entry rules plus the
/// generated matrix. Every section is optional; a fresh scaffold parses to
/// all-empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuleFile {
    #[serde(default)]
    pub checklist: Vec<String>,
    #[serde(default)]
    pub rules: Vec<EntryRule>,
    #[serde(default)]
    pub matrix: VisaMatrix,
}

/// Reads and parses a rule file.
pub fn load_rule_file(path: &Path) -> Result<RuleFile> {
    let content = fs::read_to_string(path).map_err(|source| RulesError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| RulesError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;
    use visa_model::{Purpose, VisaCategory, VisaType};

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write");
        file
    }

    #[test]
    fn parses_full_rule_file() {
        let file = write_file(
            r#"# US entry rules

checklist = ["passport", "esta"]

[[rules]]
citizenship = "FR"
destination = "US"
purpose = "tourism"
visaType = "eta"
maxStayDays = 90
lastUpdated = "2024-05-01"
sources = ["https://travel.state.gov"]

[[rules.requirements]]
id = "us-esta"
title = "ESTA approval"
details = "Apply online before departure."
category = "visa"

# --- AUTO-GENERATED VISA MATRIX START ---
[matrix]
DE = { category = "visa_free", maxStayDays = 90 }
FR = { category = "eta" }
# --- AUTO-GENERATED VISA MATRIX END ---
"#,
        );

        let parsed = load_rule_file(file.path()).expect("load");
        assert_eq!(parsed.checklist, vec!["passport", "esta"]);
        assert_eq!(parsed.rules.len(), 1);

        let rule = &parsed.rules[0];
        assert_eq!(rule.citizenship, "FR");
        assert_eq!(rule.purpose, Purpose::Tourism);
        assert_eq!(rule.visa_type, VisaType::Eta);
        assert_eq!(rule.max_stay_days, Some(90));
        assert_eq!(rule.requirements.len(), 1);

        assert_eq!(parsed.matrix.len(), 2);
        assert_eq!(parsed.matrix["FR"].category, VisaCategory::Eta);
        assert_eq!(parsed.matrix["DE"].max_stay_days, Some(90));
    }

    #[test]
    fn scaffold_parses_to_empty_sections() {
        let file = write_file(
            "# JP entry rules\n\nchecklist = []\n\n# --- AUTO-GENERATED VISA MATRIX START ---\n[matrix]\n# --- AUTO-GENERATED VISA MATRIX END ---\n",
        );
        let parsed = load_rule_file(file.path()).expect("load");
        assert!(parsed.checklist.is_empty());
        assert!(parsed.rules.is_empty());
        assert!(parsed.matrix.is_empty());
    }

    #[test]
    fn purpose_defaults_to_tourism_when_omitted() {
        let file = write_file(
            r#"[[rules]]
citizenship = "DE"
destination = "JP"
visaType = "visa_free"
lastUpdated = "2024-03-12"
"#,
        );
        let parsed = load_rule_file(file.path()).expect("load");
        assert_eq!(parsed.rules[0].purpose, Purpose::Tourism);
    }

    #[test]
    fn invalid_toml_reports_the_path() {
        let file = write_file("checklist = [unterminated");
        let err = load_rule_file(file.path()).expect_err("parse should fail");
        assert!(matches!(err, RulesError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn missing_file_reports_read_error() {
        let err =
            load_rule_file(Path::new("/nonexistent/rules.toml")).expect_err("missing file");
        assert!(matches!(err, RulesError::Read { .. }));
    }
}
