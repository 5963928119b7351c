use std::collections::HashMap;

use serde_json::Value;

/// Flatten a market-quote payload into a lowercase name → price map.
///
/// Payload shapes are tried in order: `{data:{p2p:{...}}}`, `{p2p:{...}}`,
/// or the payload itself as a flat object; the first structural match wins.
/// Values are coerced from JSON numbers or numeric strings; anything else
/// becomes 0. An unrecognized payload yields an empty map, never an error.
pub fn normalize_quotes(payload: &Value) -> HashMap<String, f64> {
    let source = payload
        .get("data")
        .and_then(|d| d.get("p2p"))
        .and_then(Value::as_object)
        .or_else(|| payload.get("p2p").and_then(Value::as_object))
        .or_else(|| payload.as_object());

    let Some(map) = source else {
        return HashMap::new();
    };

    map.iter()
        .map(|(name, value)| (name.trim().to_lowercase(), coerce_price(value)))
        .collect()
}

fn coerce_price(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0),
        _ => 0.0,
    }
}
