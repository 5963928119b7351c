use std::collections::HashMap;

use crate::models::CatalogEntry;
use crate::parser::extractor::ExtractorSchema;
use crate::parser::scanner::scan_entries;

/// Merge one or more catalog source texts into a single name-keyed map.
///
/// Sources are processed in order; on a name collision the later source
/// overwrites the earlier entry. Empty or entirely unparseable input yields
/// an empty map, never an error.
pub fn build_catalog<'a, I>(texts: I, schema: &ExtractorSchema) -> HashMap<String, CatalogEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut catalog = HashMap::new();
    for text in texts {
        for block in scan_entries(text) {
            if let Some(entry) = schema.extract(&block) {
                catalog.insert(entry.key(), entry);
            }
        }
    }
    catalog
}
