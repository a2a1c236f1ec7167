//! Nutrient column allow-list
//!
//! The set of nutrient names the persistence layer has columns for. Retailer
//! APIs occasionally grow new nutrient keys; anything outside this set is
//! rejected before it reaches storage.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Suffix of the percent-daily-value variant of a nutrient column
pub const DV_SUFFIX: &str = "_dv";

/// Built-in nutrient columns
pub const DEFAULT_NUTRIENT_COLUMNS: &[&str] = &[
    "calories",
    "totalfat",
    "totalfat_dv",
    "saturatedfat",
    "saturatedfat_dv",
    "transfat",
    "transfat_dv",
    "monounsaturatedfat",
    "polyunsaturatedfat",
    "cholesterol",
    "cholesterol_dv",
    "sodium",
    "sodium_dv",
    "potassium",
    "potassium_dv",
    "totalcarbohydrate",
    "totalcarbohydrate_dv",
    "dietaryfiber",
    "dietaryfiber_dv",
    "sugar",
    "sugar_dv",
    "protein",
    "vitamina",
    "vitamina_dv",
    "vitaminc",
    "vitaminc_dv",
    "vitamind",
    "vitamind_dv",
    "vitamine",
    "vitaminb6",
    "vitaminb12",
    "calcium",
    "calcium_dv",
    "iron",
    "iron_dv",
    "niacin",
    "riboflavin",
    "thiamine",
    "folate",
    "folacin",
    "pantothenate",
    "pantothenic_acid",
    "selenium",
    "magnesium",
    "phosphorus",
    "zinc",
    "alcohol",
    "erythritol",
    "glycerol",
    "isomalt",
    "lactitol",
    "maltitol",
    "mannitol",
    "polydextrose",
    "sorbitol",
    "xylitol",
];

/// Check a nutrient name against an allow-list
pub fn is_valid_nutrient_column(name: &str, known_columns: &HashSet<String>) -> bool {
    known_columns.contains(name)
}

/// Normalize a label nutrient name into column form
///
/// Lowercases, turns spaces into underscores, drops periods, and uses the
/// "fibre" spelling:
/// - "Sodium" -> "sodium"
/// - "Vitamin A" -> "vitamin_a"
/// - "Dietary Fiber" -> "dietary_fibre"
pub fn normalize_nutrient_name(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .replace("iber", "ibre")
        .replace(' ', "_")
        .replace('.', "")
}

/// Owned set of recognized nutrient column names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NutrientColumns {
    columns: HashSet<String>,
}

impl NutrientColumns {
    /// Build an allow-list from any collection of names
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Silent membership check
    pub fn contains(&self, name: &str) -> bool {
        is_valid_nutrient_column(name, &self.columns)
    }

    /// Membership check that logs the outcome
    pub fn is_valid(&self, name: &str) -> bool {
        if self.contains(name) {
            tracing::debug!("Detected '{}'", name);
            true
        } else {
            tracing::warn!("Value '{}' is not a valid nutrient column", name);
            false
        }
    }

    /// Columns holding percent-daily-value fractions, sorted
    pub fn dv_columns(&self) -> Vec<&str> {
        let mut dv: Vec<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|c| c.ends_with(DV_SUFFIX))
            .collect();
        dv.sort_unstable();
        dv
    }

    /// Number of recognized columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no column is recognized
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for NutrientColumns {
    fn default() -> Self {
        Self::from_names(DEFAULT_NUTRIENT_COLUMNS.iter().copied())
    }
}
