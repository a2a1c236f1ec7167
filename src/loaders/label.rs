//! Nutrition label loader
//!
//! Handles sources that render the nutrition facts table as text (Loblaws,
//! No Frills): one line naming a nutrient, followed by its amount line and,
//! when printed, its % daily value line.

use serde::{Deserialize, Serialize};

use crate::models::{normalize_nutrient_name, NutrientColumns, NutrientRecord, DV_SUFFIX};
use crate::nutrition::{extract_number, NutrientResult};

/// Nutrient names looked for in label text, most specific first
pub const EXPECTED_NUTRIENTS: &[&str] = &[
    "Calories",
    "Saturated",
    "Trans",
    "Fat",
    "Cholesterol",
    "Sodium",
    "Potassium",
    "Carbohydrate",
    "Fibre",
    "Fiber",
    "Sugars",
    "Protein",
    "Vitamin A",
    "Vitamin C",
    "Vitamin D",
    "Calcium",
    "Iron",
];

/// Markers of a line carrying an amount
const UNIT_LINE_MARKERS: [&str; 4] = [" %", " g", " mg", " cal"];

/// Label spellings that differ from the column name, after normalization
const LABEL_ALIASES: &[(&str, &str)] = &[
    ("fat", "totalfat"),
    ("total_fat", "totalfat"),
    ("saturated", "saturatedfat"),
    ("saturated_fat", "saturatedfat"),
    ("trans", "transfat"),
    ("trans_fat", "transfat"),
    ("carbohydrate", "totalcarbohydrate"),
    ("carbohydrates", "totalcarbohydrate"),
    ("total_carbohydrate", "totalcarbohydrate"),
    ("fibre", "dietaryfiber"),
    ("dietary_fibre", "dietaryfiber"),
    ("sugars", "sugar"),
    ("vitamin_a", "vitamina"),
    ("vitamin_c", "vitaminc"),
    ("vitamin_d", "vitamind"),
];

/// One nutrient row of a label: its name and the amount strings printed for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelRow {
    pub name: String,
    pub values: Vec<String>,
}

/// Map a normalized label name onto its column name
pub fn label_column(normalized: &str) -> &str {
    LABEL_ALIASES
        .iter()
        .find(|(label, _)| *label == normalized)
        .map(|(_, column)| *column)
        .unwrap_or(normalized)
}

/// Group rendered label lines into nutrient rows
///
/// A line containing a not-yet-seen expected name opens a row named after the
/// whole line. Each expected name opens at most one row. Lines with an amount
/// marker are appended to the open row, with a decimal comma read as a point.
pub fn parse_label_table<S: AsRef<str>>(lines: &[S], expected: &[&str]) -> Vec<LabelRow> {
    let mut remaining: Vec<&str> = expected.to_vec();
    let mut rows: Vec<LabelRow> = Vec::new();

    for line in lines {
        let line = line.as_ref();

        if let Some(pos) = remaining.iter().position(|exp| line.contains(exp)) {
            remaining.remove(pos);
            let mut name = line.to_string();
            if name.to_lowercase().contains("iber") {
                name = name.replace("iber", "ibre");
            }
            rows.push(LabelRow {
                name,
                values: Vec::new(),
            });
        }

        let lower = line.to_lowercase();
        if UNIT_LINE_MARKERS.iter().any(|m| lower.contains(m)) {
            if let Some(row) = rows.last_mut() {
                row.values.push(line.replace(',', "."));
            }
        }
    }

    tracing::debug!("Parsed {} nutrient rows from {} label lines", rows.len(), lines.len());
    rows
}

/// Normalize label rows into a nutrient record
///
/// The first value of a row is the amount, stored under the row's column; the
/// second is the % daily value, stored under `<column>_dv` when that column
/// is also allowed.
pub fn normalize_label_table(
    rows: &[LabelRow],
    columns: &NutrientColumns,
) -> NutrientResult<NutrientRecord> {
    let mut record = NutrientRecord::new();

    for row in rows {
        let normalized = normalize_nutrient_name(&row.name);
        let column = label_column(&normalized);
        if !columns.is_valid(column) {
            continue;
        }

        let Some(amount) = row.values.first() else {
            tracing::debug!("No values printed for '{}'", row.name);
            continue;
        };
        record.insert_value(column, extract_number(amount.as_str())?);

        if let Some(dv) = row.values.get(1) {
            if columns.is_valid(&format!("{}{}", column, DV_SUFFIX)) {
                record.insert_dv(column, extract_number(dv.as_str())?);
            }
        }
    }

    Ok(record)
}
