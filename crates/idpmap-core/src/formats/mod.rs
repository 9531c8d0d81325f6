//! GeoJSON feature parsing for the two survey products
//!
//! The site survey export (point features, one per site per survey date) and
//! the regional aggregate (polygon features with a precomputed count) are
//! both best-effort inputs: individual malformed features are skipped without
//! error, since the files are assumed pre-cleaned upstream.

use geojson::JsonObject;

pub mod regions;
pub mod sites;

pub use regions::region_records;
pub use sites::site_observations;

/// Read a property as a string. Numeric values are accepted and stringified
/// (site identifiers are sometimes exported as numbers); empty or
/// whitespace-only strings count as missing.
pub(crate) fn prop_str(properties: &JsonObject, key: &str) -> Option<String> {
    match properties.get(key)? {
        serde_json::Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Read a property as a finite number. Numeric strings are accepted (survey
/// exports occasionally quote their counts); anything else is missing.
pub(crate) fn prop_f64(properties: &JsonObject, key: &str) -> Option<f64> {
    let value = match properties.get(key)? {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Read a property as a boolean flag. The exports use a mix of real
/// booleans, yes/no strings, and 0/1 numbers.
pub(crate) fn prop_bool(properties: &JsonObject, key: &str) -> Option<bool> {
    match properties.get(key)? {
        serde_json::Value::Bool(b) => Some(*b),
        serde_json::Value::String(s) => match s.trim().to_lowercase().as_str() {
            "yes" | "y" | "true" | "1" | "open" => Some(true),
            "no" | "n" | "false" | "0" | "closed" => Some(false),
            _ => None,
        },
        serde_json::Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        _ => None,
    }
}
