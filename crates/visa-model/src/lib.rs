pub mod country;
pub mod entry;
pub mod flags;
pub mod labels;
pub mod matrix;

pub use country::{COUNTRIES, Country, find_country};
pub use entry::{EntryRequirement, EntryRule, Purpose, RequirementCategory, VisaType};
pub use flags::flag_emoji;
pub use labels::{route_key, visa_category_label, visa_type_label};
pub use matrix::{DestinationMatrices, VisaCategory, VisaMatrix, VisaRule};
