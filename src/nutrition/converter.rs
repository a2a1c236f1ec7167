//! Unit conversion functions
//!
//! Pure conversions from a parsed label amount into its canonical form.

use super::units::{NutrientValue, UnitToken, G_PER_MG, PERCENT_SCALE};

/// Convert a milligram amount to grams
pub fn milligrams_to_grams(value: f64) -> f64 {
    value * G_PER_MG
}

/// Convert a 0-100 label percentage to the stored 0-1 fraction
pub fn percent_to_fraction(value: f64) -> f64 {
    value / PERCENT_SCALE
}

/// Whether a calorie amount truncates to an `i64` without saturating
pub fn fits_whole_calories(value: f64) -> bool {
    let whole = value.trunc();
    whole.is_finite() && whole >= i64::MIN as f64 && whole < i64::MAX as f64
}

/// Truncate a calorie amount toward zero
///
/// Out-of-range amounts saturate; check [`fits_whole_calories`] first.
pub fn to_whole_calories(value: f64) -> i64 {
    value.trunc() as i64
}

/// Convert an amount read in front of `unit` into its canonical value
///
/// Returns None for volume tokens (ml, millilitres, l, litres), which have
/// no defined conversion.
pub fn convert(value: f64, unit: UnitToken) -> Option<NutrientValue> {
    match unit {
        UnitToken::G | UnitToken::Grams => Some(NutrientValue::Grams(value)),
        UnitToken::Mg | UnitToken::Milligrams => {
            Some(NutrientValue::Grams(milligrams_to_grams(value)))
        }
        UnitToken::Dv | UnitToken::Percent => {
            Some(NutrientValue::Percent(percent_to_fraction(value)))
        }
        UnitToken::Cal | UnitToken::Calories | UnitToken::K => {
            Some(NutrientValue::Calories(to_whole_calories(value)))
        }
        UnitToken::Ml | UnitToken::Millilitres | UnitToken::L | UnitToken::Litres => None,
    }
}
