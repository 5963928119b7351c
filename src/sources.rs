use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;

/// Read a catalog source text, or an empty string when the file is missing.
///
/// Retrieval is a collaborator concern; files stand in for it here, and a
/// missing source degrades to "nothing extracted" rather than failing the
/// run.
pub fn load_source_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        eprintln!("Source not found, skipping: {}", path.display());
        return Ok(String::new());
    }
    Ok(fs::read_to_string(path)?)
}

/// Read the quote JSON payload, or `Null` when the file is missing.
///
/// `Null` normalizes to an empty quote map downstream. Syntactically invalid
/// JSON is still an error; shape tolerance belongs to the normalizer.
pub fn load_quote_payload<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    if !path.exists() {
        eprintln!("Quote payload not found, skipping: {}", path.display());
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}
