//! Nutrition normalization module
//!
//! Unit detection, value extraction and unit conversion for raw nutrient strings.

pub mod converter;
pub mod error;
pub mod extractor;
pub mod units;

pub use converter::{convert, milligrams_to_grams, percent_to_fraction, to_whole_calories};
pub use error::{NutrientError, NutrientResult};
pub use extractor::{detect_unit, extract_number};
pub use units::{NormalizedUnit, NutrientValue, UnitToken, DETECTION_ORDER};
