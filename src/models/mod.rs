//! Data models
//!
//! Column allow-list and normalized per-product records.

mod columns;
mod record;

pub use columns::{
    is_valid_nutrient_column, normalize_nutrient_name, NutrientColumns, DEFAULT_NUTRIENT_COLUMNS,
    DV_SUFFIX,
};
pub use record::NutrientRecord;
