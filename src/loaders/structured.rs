//! Structured nutrition loader
//!
//! Handles sources whose nutrition facts arrive pre-split into JSON fields
//! (Walmart, Voila, Mintel): `sodium`, `sodium_unit`, `sodium_dv`, and so on.
//! Amounts are numbers already; what remains is sentinel cleanup and unit
//! scaling.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::{NutrientColumns, NutrientRecord};
use crate::nutrition::{milligrams_to_grams, percent_to_fraction};

const UNIT_MARKER: &str = "_unit";
const DV_MARKER: &str = "_dv";

/// Retailer feed delivering structured nutrition fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StructuredSource {
    Walmart,
    Voila,
    Mintel,
}

impl StructuredSource {
    /// Field copies applied before cleanup, `(from, to)`
    pub fn aliases(&self) -> &'static [(&'static str, &'static str)] {
        const CARBOHYDRATE: [(&str, &str); 3] = [
            ("carbohydrate", "totalcarbohydrate"),
            ("carbohydrate_dv", "totalcarbohydrate_dv"),
            ("carbohydrate_unit", "totalcarbohydrate_unit"),
        ];
        const MINTEL: [(&str, &str); 9] = [
            CARBOHYDRATE[0],
            CARBOHYDRATE[1],
            CARBOHYDRATE[2],
            ("fat", "totalfat"),
            ("fat_dv", "totalfat_dv"),
            ("fat_unit", "totalfat_unit"),
            ("fiber", "dietaryfiber"),
            ("fiber_dv", "dietaryfiber_dv"),
            ("fiber_unit", "dietaryfiber_unit"),
        ];

        match self {
            StructuredSource::Walmart => &[],
            StructuredSource::Voila => &CARBOHYDRATE,
            StructuredSource::Mintel => &MINTEL,
        }
    }
}

/// Resolve placeholder strings the feeds use instead of numbers
///
/// "absent" means the nutrient is listed as zero, "conflict" means sources
/// disagreed. Any string in a `_dv` field is checked first: "o" is an OCR
/// zero and everything else, "absent" included, is dropped.
fn clean_sentinel(key: &str, value: Value) -> Value {
    if key.contains(DV_MARKER) {
        if let Some(s) = value.as_str() {
            return if s.eq_ignore_ascii_case("o") {
                Value::from(0)
            } else {
                Value::Null
            };
        }
    }

    match value.as_str() {
        Some("absent") => Value::from(0),
        Some("conflict") => Value::Null,
        _ => value,
    }
}

/// Normalize one product's structured nutrition fields into a record
pub fn normalize_structured(
    source: StructuredSource,
    fields: &Map<String, Value>,
    columns: &NutrientColumns,
) -> NutrientRecord {
    let mut fields = fields.clone();
    for (from, to) in source.aliases() {
        if let Some(value) = fields.get(*from).cloned() {
            fields.insert(to.to_string(), value);
        }
    }

    let mut amounts: Map<String, Value> = fields
        .into_iter()
        .map(|(key, value)| {
            let cleaned = clean_sentinel(&key, value);
            (key, cleaned)
        })
        .collect();

    let milligram_fields: Vec<String> = amounts
        .iter()
        .filter(|(key, value)| {
            key.contains(UNIT_MARKER)
                && value.as_str().is_some_and(|unit| unit.eq_ignore_ascii_case("mg"))
        })
        .map(|(key, _)| key.replace(UNIT_MARKER, ""))
        .collect();

    for base in milligram_fields {
        if let Some(amount) = amounts.get(&base).and_then(Value::as_f64) {
            amounts.insert(base, Value::from(milligrams_to_grams(amount)));
        }
    }

    let mut record = NutrientRecord::new();
    for (key, value) in &amounts {
        if key.contains(UNIT_MARKER) || value.is_null() {
            continue;
        }
        let Some(amount) = value.as_f64() else {
            tracing::debug!("Skipping non-numeric {:?} field '{}': {}", source, key, value);
            continue;
        };
        if !columns.is_valid(key) {
            continue;
        }
        let amount = if key.contains(DV_MARKER) {
            percent_to_fraction(amount)
        } else {
            amount
        };
        record.insert(key.as_str(), amount);
    }

    record
}
