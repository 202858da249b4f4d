//! Rule file loading and the in-memory lookup index that serves page
//! handlers. Built once per process with an explicit [`RuleIndex::load`]
//! call; there is no global registry.

pub mod error;
pub mod index;
pub mod loader;
pub mod query;

pub use error::{Result, RulesError};
pub use index::{RULES_FILE_NAME, RuleIndex};
pub use loader::{RuleFile, load_rule_file};
pub use query::{GuideRequest, GuideResponse};
