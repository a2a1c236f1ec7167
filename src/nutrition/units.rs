//! Unit tokens and normalized value types
//!
//! Provides the closed set of unit tokens recognized in raw nutrient strings,
//! their detection precedence, and the canonical value they normalize into.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unit token as it appears (lowercased) inside a raw nutrient string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitToken {
    Mg,
    Milligrams,
    Ml,
    Millilitres,
    G,
    Grams,
    L,
    Litres,
    #[serde(rename = "%")]
    Percent,
    Dv,
    /// Bare `k`, as in "kcal" or "kj"
    K,
    Cal,
    Calories,
}

/// Detection order for [`UnitToken`]; the first token contained in the value wins.
///
/// `K` precedes `Cal`, so "50 kcal" is detected as `K`. `Grams`, `Litres` and
/// `Calories` each contain an earlier token and are never reached.
pub const DETECTION_ORDER: [UnitToken; 12] = [
    UnitToken::Mg,
    UnitToken::Milligrams,
    UnitToken::Ml,
    UnitToken::Millilitres,
    UnitToken::K,
    UnitToken::Cal,
    UnitToken::Percent,
    UnitToken::Dv,
    UnitToken::G,
    UnitToken::Grams,
    UnitToken::L,
    UnitToken::Litres,
];

/// Substrings marking a label value rendered as an inequality ("< 1 g")
pub const COMPARISON_OPERATORS: [&str; 4] = ["<=", ">=", "<", ">"];

impl UnitToken {
    /// The literal text searched for in a lowercased value
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitToken::Mg => "mg",
            UnitToken::Milligrams => "milligrams",
            UnitToken::Ml => "ml",
            UnitToken::Millilitres => "millilitres",
            UnitToken::G => "g",
            UnitToken::Grams => "grams",
            UnitToken::L => "l",
            UnitToken::Litres => "litres",
            UnitToken::Percent => "%",
            UnitToken::Dv => "dv",
            UnitToken::K => "k",
            UnitToken::Cal => "cal",
            UnitToken::Calories => "calories",
        }
    }

    /// The canonical unit this token normalizes into, if any.
    ///
    /// Volume tokens are detected but have no conversion.
    pub fn normalized_unit(&self) -> Option<NormalizedUnit> {
        match self {
            UnitToken::G | UnitToken::Grams | UnitToken::Mg | UnitToken::Milligrams => {
                Some(NormalizedUnit::Grams)
            }
            UnitToken::Percent | UnitToken::Dv => Some(NormalizedUnit::Percent),
            UnitToken::K | UnitToken::Cal | UnitToken::Calories => Some(NormalizedUnit::Calories),
            UnitToken::Ml | UnitToken::Millilitres | UnitToken::L | UnitToken::Litres => None,
        }
    }
}

impl fmt::Display for UnitToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical unit of a normalized nutrient value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizedUnit {
    #[serde(rename = "g")]
    Grams,
    /// Percent daily value stored as a 0-1 fraction
    #[serde(rename = "%")]
    Percent,
    #[serde(rename = "cal")]
    Calories,
}

impl NormalizedUnit {
    /// Unit tag as stored alongside the value
    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizedUnit::Grams => "g",
            NormalizedUnit::Percent => "%",
            NormalizedUnit::Calories => "cal",
        }
    }
}

impl fmt::Display for NormalizedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A nutrient amount in canonical form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value")]
pub enum NutrientValue {
    #[serde(rename = "g")]
    Grams(f64),
    /// Fraction of daily value, 0.15 for "15 %"
    #[serde(rename = "%")]
    Percent(f64),
    #[serde(rename = "cal")]
    Calories(i64),
}

impl NutrientValue {
    /// The numeric amount; calories widen to `f64`
    pub fn value(&self) -> f64 {
        match *self {
            NutrientValue::Grams(v) | NutrientValue::Percent(v) => v,
            NutrientValue::Calories(c) => c as f64,
        }
    }

    /// The canonical unit of this value
    pub fn unit(&self) -> NormalizedUnit {
        match self {
            NutrientValue::Grams(_) => NormalizedUnit::Grams,
            NutrientValue::Percent(_) => NormalizedUnit::Percent,
            NutrientValue::Calories(_) => NormalizedUnit::Calories,
        }
    }

    /// The `(value, unit)` pair handed to persistence
    pub fn into_pair(self) -> (f64, NormalizedUnit) {
        (self.value(), self.unit())
    }
}

// ============================================================================
// Conversion Constants
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Label percentages are on a 0-100 scale
pub const PERCENT_SCALE: f64 = 100.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_order_is_literal() {
        let order: Vec<&str> = DETECTION_ORDER.iter().map(|u| u.as_str()).collect();
        assert_eq!(
            order,
            vec!["mg", "milligrams", "ml", "millilitres", "k", "cal", "%", "dv", "g", "grams", "l", "litres"]
        );
    }

    #[test]
    fn test_normalized_unit_mapping() {
        assert_eq!(UnitToken::Mg.normalized_unit(), Some(NormalizedUnit::Grams));
        assert_eq!(UnitToken::Dv.normalized_unit(), Some(NormalizedUnit::Percent));
        assert_eq!(UnitToken::K.normalized_unit(), Some(NormalizedUnit::Calories));
        assert_eq!(UnitToken::Ml.normalized_unit(), None);
        assert_eq!(UnitToken::Litres.normalized_unit(), None);
    }

    #[test]
    fn test_nutrient_value_pair() {
        assert_eq!(NutrientValue::Grams(30.0).into_pair(), (30.0, NormalizedUnit::Grams));
        assert_eq!(NutrientValue::Calories(12).into_pair(), (12.0, NormalizedUnit::Calories));
    }

    #[test]
    fn test_nutrient_value_serializes_with_unit_tag() {
        let json = serde_json::to_value(NutrientValue::Percent(0.15)).unwrap();
        assert_eq!(json, serde_json::json!({"unit": "%", "value": 0.15}));

        let json = serde_json::to_value(UnitToken::Percent).unwrap();
        assert_eq!(json, serde_json::json!("%"));
    }
}
