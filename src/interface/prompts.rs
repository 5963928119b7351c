use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::ComputedItem;

/// Minimum similarity score for a fuzzy name suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

/// Simple yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    let result = Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?;
    Ok(result)
}

/// Ask which item's price to override, resolving the typed name fuzzily
/// against the computed rows.
///
/// Returns `None` when the user finishes with an empty input or rejects all
/// suggestions.
pub fn prompt_override_target(items: &[ComputedItem]) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("Item to override (or press Enter to finish)")
        .allow_empty(true)
        .interact_text()?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    // Exact match first (case-insensitive).
    if let Some(item) = items.iter().find(|i| i.key() == input.to_lowercase()) {
        return Ok(Some(item.name.clone()));
    }

    // Fuzzy suggestions.
    let mut candidates: Vec<(&ComputedItem, f64)> = items
        .iter()
        .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if candidates.is_empty() {
        println!("No matching item found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let item = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", item.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then(|| item.name.clone()));
    }

    let options: Vec<String> = candidates
        .iter()
        .take(5)
        .map(|(i, _)| i.name.clone())
        .collect();
    let mut selection_options = options.clone();
    selection_options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&selection_options)
        .default(0)
        .interact()?;

    if selection < options.len() {
        Ok(Some(options[selection].clone()))
    } else {
        Ok(None)
    }
}

/// Ask for the raw override value for an item.
///
/// Returns `None` for an empty input, which means "revert to the observed
/// quote." Validation of the value itself belongs to the engine's override
/// contract.
pub fn prompt_override_value(name: &str) -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt(format!("New P2P price for {} (empty to revert)", name))
        .allow_empty(true)
        .interact_text()?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}
