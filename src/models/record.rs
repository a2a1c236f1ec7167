//! Normalized nutrient record
//!
//! Per-product map of nutrient column to canonical value, as handed to the
//! persistence layer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::columns::DV_SUFFIX;
use crate::nutrition::NutrientValue;

/// Normalized nutrient values keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientRecord {
    values: BTreeMap<String, f64>,
}

impl NutrientRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw column value
    pub fn insert(&mut self, column: impl Into<String>, value: f64) {
        self.values.insert(column.into(), value);
    }

    /// Store an extracted value; `None` leaves the column unset
    pub fn insert_value(&mut self, column: impl Into<String>, value: Option<NutrientValue>) {
        if let Some(v) = value {
            self.insert(column, v.value());
        }
    }

    /// Store the percent-daily-value variant of `nutrient`
    pub fn insert_dv(&mut self, nutrient: &str, value: Option<NutrientValue>) {
        self.insert_value(format!("{}{}", nutrient, DV_SUFFIX), value);
    }

    /// Value stored for a column
    pub fn get(&self, column: &str) -> Option<f64> {
        self.values.get(column).copied()
    }

    /// Number of columns set
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no column is set
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
