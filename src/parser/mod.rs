pub mod builder;
pub mod extractor;
pub mod scanner;

pub use builder::build_catalog;
pub use extractor::{ExtractorSchema, FieldRule, FieldTarget};
pub use scanner::scan_entries;
