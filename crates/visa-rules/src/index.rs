//! The in-memory lookup index, built once at startup.
//!
//! One explicit load step, no global registry: enumerate the rules tree,
//! parse each file, and keep two views, a flat entry rule list and a
//! destination-keyed matrix map.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use visa_model::{DestinationMatrices, EntryRule, Purpose, VisaRule};

use crate::error::{Result, RulesError};
use crate::loader::load_rule_file;

/// File name of the per-destination rule file.
pub const RULES_FILE_NAME: &str = "rules.toml";

/// All loaded rule data, queryable by the page handlers.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    entry_rules: Vec<EntryRule>,
    matrices: DestinationMatrices,
}

impl RuleIndex {
    /// Loads every destination's rule file under `rules_root`.
    ///
    /// Destination directories are visited in sorted order, which makes the
    /// entry rule list order deterministic. Directories without a rule file
    /// are skipped. Duplicate (citizenship, destination, purpose) triples are
    /// tolerated and logged; lookups return the first match in load order.
    pub fn load(rules_root: &Path) -> Result<Self> {
        if !rules_root.is_dir() {
            return Err(RulesError::RootNotFound {
                path: rules_root.to_path_buf(),
            });
        }

        let read_err = |source| RulesError::DirectoryRead {
            path: rules_root.to_path_buf(),
            source,
        };

        let mut destinations = Vec::new();
        for entry in fs::read_dir(rules_root).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            destinations.push((name.to_ascii_uppercase(), path));
        }
        destinations.sort();

        let mut index = RuleIndex::default();
        let mut seen = HashSet::new();
        for (code, dir) in destinations {
            let path = dir.join(RULES_FILE_NAME);
            if !path.is_file() {
                continue;
            }
            let file = load_rule_file(&path)?;
            for rule in &file.rules {
                let key = (
                    rule.citizenship.to_ascii_uppercase(),
                    rule.destination.to_ascii_uppercase(),
                    rule.purpose,
                );
                if !seen.insert(key) {
                    tracing::warn!(
                        citizenship = %rule.citizenship,
                        destination = %rule.destination,
                        purpose = %rule.purpose,
                        path = %path.display(),
                        "duplicate entry rule; first loaded rule wins"
                    );
                }
            }
            index.entry_rules.extend(file.rules);
            index.matrices.insert(code, file.matrix);
        }

        tracing::info!(
            destinations = index.matrices.len(),
            entry_rules = index.entry_rules.len(),
            "rule index loaded"
        );
        Ok(index)
    }

    /// All loaded entry rules, in load order.
    pub fn entry_rules(&self) -> &[EntryRule] {
        &self.entry_rules
    }

    /// Destination codes with a loaded matrix, sorted.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.matrices.keys().map(String::as_str)
    }

    /// Finds the curated entry rule for a query triple.
    ///
    /// Codes are matched case-insensitively; a missing purpose defaults to
    /// tourism. First match in load order wins.
    pub fn find_entry_rule(
        &self,
        citizenship: &str,
        destination: &str,
        purpose: Option<Purpose>,
    ) -> Option<&EntryRule> {
        let citizenship = citizenship.trim();
        let destination = destination.trim();
        if citizenship.is_empty() || destination.is_empty() {
            return None;
        }
        let purpose = purpose.unwrap_or_default();
        self.entry_rules
            .iter()
            .find(|rule| rule.matches(citizenship, destination, purpose))
    }

    /// Looks up the generated matrix rule for a citizenship/destination pair.
    pub fn find_visa_matrix_rule(
        &self,
        citizenship: &str,
        destination: &str,
    ) -> Option<&VisaRule> {
        self.matrices
            .get(&destination.trim().to_ascii_uppercase())?
            .get(&citizenship.trim().to_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use visa_model::VisaCategory;

    fn seed(dir: &TempDir, dest: &str, content: &str) {
        let subdir = dir.path().join(dest);
        fs::create_dir_all(&subdir).expect("destination dir");
        fs::write(subdir.join(RULES_FILE_NAME), content).expect("seed rule file");
    }

    fn sample_tree() -> TempDir {
        let dir = TempDir::new().expect("temp dir");
        seed(
            &dir,
            "US",
            r#"[[rules]]
citizenship = "FR"
destination = "US"
purpose = "tourism"
visaType = "eta"
maxStayDays = 90
lastUpdated = "2024-05-01"

[[rules]]
citizenship = "FR"
destination = "US"
purpose = "business"
visaType = "eta"
lastUpdated = "2024-05-01"

[matrix]
FR = { category = "visa_free", maxStayDays = 90 }
DE = { category = "visa_free", maxStayDays = 90 }
"#,
        );
        seed(
            &dir,
            "FR",
            r#"[[rules]]
citizenship = "US"
destination = "FR"
visaType = "visa_free"
maxStayDays = 90
lastUpdated = "2024-02-20"

[matrix]
US = { category = "visa_free" }
"#,
        );
        dir
    }

    #[test]
    fn loads_all_destinations() {
        let dir = sample_tree();
        let index = RuleIndex::load(dir.path()).expect("load index");

        assert_eq!(index.entry_rules().len(), 3);
        assert_eq!(index.destinations().collect::<Vec<_>>(), vec!["FR", "US"]);
    }

    #[test]
    fn entry_rule_lookup_is_case_insensitive_and_defaults_to_tourism() {
        let dir = sample_tree();
        let index = RuleIndex::load(dir.path()).expect("load index");

        let rule = index
            .find_entry_rule("fr", "us", None)
            .expect("tourism rule");
        assert_eq!(rule.purpose, Purpose::Tourism);
        assert_eq!(rule.max_stay_days, Some(90));

        let business = index
            .find_entry_rule("FR", "US", Some(Purpose::Business))
            .expect("business rule");
        assert_eq!(business.purpose, Purpose::Business);

        assert!(index.find_entry_rule("FR", "US", Some(Purpose::Transit)).is_none());
        assert!(index.find_entry_rule("", "US", None).is_none());
    }

    #[test]
    fn matrix_lookup_follows_both_key_levels() {
        let dir = sample_tree();
        let index = RuleIndex::load(dir.path()).expect("load index");

        let rule = index
            .find_visa_matrix_rule("fr", "us")
            .expect("matrix rule");
        assert_eq!(rule.category, VisaCategory::VisaFree);
        assert_eq!(rule.max_stay_days, Some(90));

        assert!(index.find_visa_matrix_rule("FR", "JP").is_none());
        assert!(index.find_visa_matrix_rule("JP", "US").is_none());
    }

    #[test]
    fn directories_without_rule_files_are_skipped() {
        let dir = sample_tree();
        fs::create_dir_all(dir.path().join("JP")).expect("empty destination dir");

        let index = RuleIndex::load(dir.path()).expect("load index");
        assert_eq!(index.destinations().collect::<Vec<_>>(), vec!["FR", "US"]);
    }

    #[test]
    fn duplicate_triples_resolve_to_first_loaded() {
        let dir = TempDir::new().expect("temp dir");
        // FR sorts before US, so the FR file's rule loads first.
        seed(
            &dir,
            "FR",
            r#"[[rules]]
citizenship = "DE"
destination = "AT"
visaType = "visa_free"
maxStayDays = 30
lastUpdated = "2024-01-01"
"#,
        );
        seed(
            &dir,
            "US",
            r#"[[rules]]
citizenship = "DE"
destination = "AT"
visaType = "visa_free"
maxStayDays = 60
lastUpdated = "2024-06-01"
"#,
        );

        let index = RuleIndex::load(dir.path()).expect("load index");
        let rule = index.find_entry_rule("DE", "AT", None).expect("rule");
        assert_eq!(rule.max_stay_days, Some(30));
    }

    #[test]
    fn missing_root_fails() {
        let err = RuleIndex::load(Path::new("/nonexistent/rules")).expect_err("missing root");
        assert!(matches!(err, RulesError::RootNotFound { .. }));
    }
}
