//! Normalized JSON record for one converted instance.
//!
//! A record is an ordered list of fields. Raw TSPLIB keywords are renamed to
//! camelCase, the best known cost is attached, and the explicit weight section
//! is replaced by the upper-triangular distances matrix when one was collected.

use crate::matrix::DistanceTable;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Written as `bestKnownCost` when no best known solution exists for an instance.
pub const UNKNOWN_BEST_COST: f64 = -1.0;

/// Raw field superseded by `distancesMatrix`.
pub const EDGE_WEIGHT_SECTION: &str = "EDGE_WEIGHT_SECTION";
pub const BEST_KNOWN_COST: &str = "best_known_cost";
pub const DISTANCES_MATRIX: &str = "distances_matrix";

/// JSON number for `x`, an integer when `x` is integral.
pub fn json_number(x: f64) -> Value {
    if x.fract() == 0.0 && x.abs() < 9.0e15 {
        Value::from(x as i64)
    } else {
        serde_json::Number::from_f64(x)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Rename a lower or upper case, underscore separated key to camelCase.
///
/// The first segment is lower-cased, each following segment is capitalized.
/// Keys without underscores that already contain a lower-case letter are
/// returned unchanged, so `bestKnownCost` stays `bestKnownCost`.
pub fn normalize_key(key: &str) -> String {
    if !key.contains('_') && key.chars().any(|c| c.is_lowercase()) {
        return key.to_string();
    }

    let mut parts = key.split('_');
    let mut normalized = parts.next().unwrap_or_default().to_lowercase();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            normalized.extend(first.to_uppercase());
            normalized.push_str(&chars.as_str().to_lowercase());
        }
    }
    normalized
}

/// Apply [`normalize_key`] to every key, keeping order and values.
pub fn normalize_keys<T>(fields: Vec<(String, T)>) -> Vec<(String, T)> {
    fields
        .into_iter()
        .map(|(key, value)| (normalize_key(&key), value))
        .collect()
}

/// Value of a record field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Json(Value),
    Distances(DistanceTable),
}

/// A converted instance, ready to be written as a single JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn distances(&self) -> Option<&DistanceTable> {
        self.fields.iter().find_map(|(_, v)| match v {
            FieldValue::Distances(table) => Some(table),
            FieldValue::Json(_) => None,
        })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Merge instance metadata, the best known cost, and an optional distances matrix
/// into a normalized record.
///
/// `best_known_cost` is already resolved, [`UNKNOWN_BEST_COST`] included.
pub fn normalize(
    metadata: &[(String, Value)],
    best_known_cost: f64,
    distances: Option<DistanceTable>,
) -> Record {
    let mut fields: Vec<(String, FieldValue)> = metadata
        .iter()
        .filter(|(key, _)| key != EDGE_WEIGHT_SECTION)
        .map(|(key, value)| (key.clone(), FieldValue::Json(value.clone())))
        .collect();

    fields.push((
        BEST_KNOWN_COST.to_string(),
        FieldValue::Json(json_number(best_known_cost)),
    ));

    if let Some(table) = distances {
        fields.push((DISTANCES_MATRIX.to_string(), FieldValue::Distances(table)));
    }

    Record {
        fields: normalize_keys(fields),
    }
}
