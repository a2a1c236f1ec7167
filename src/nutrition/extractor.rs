//! Nutrient value extraction
//!
//! Turns a raw nutrient string scraped from a retailer ("30 g", "500mg",
//! "15 %", "12 Cal") into a [`NutrientValue`].

use super::converter::{convert, fits_whole_calories};
use super::error::{NutrientError, NutrientResult};
use super::units::{
    NormalizedUnit, NutrientValue, UnitToken, COMPARISON_OPERATORS, DETECTION_ORDER,
};

/// Detect which unit token a lowercased nutrient value carries
///
/// Values containing a comparison operator ("< 1 g") are rejected before any
/// unit is considered. Otherwise tokens are tried in [`DETECTION_ORDER`] by
/// substring containment and the first hit wins.
pub fn detect_unit(value: &str) -> Option<UnitToken> {
    if COMPARISON_OPERATORS.iter().any(|op| value.contains(op)) {
        tracing::debug!("Skipping inequality nutrient value '{}'", value);
        return None;
    }

    let detected = DETECTION_ORDER
        .iter()
        .copied()
        .find(|unit| value.contains(unit.as_str()));

    if detected.is_none() {
        tracing::warn!("Could not detect any units in value ({})", value);
    }
    detected
}

/// Extract the canonical value from a raw nutrient string
///
/// Accepts either `&str` or `Option<&str>`; a missing value yields `Ok(None)`.
///
/// Returns `Ok(None)` for values that are expected to be unusable: bare
/// numbers without a unit, inequalities, unrecognized units and volume units.
/// Returns [`NutrientError::MalformedAmount`] when a unit was detected but the
/// text in front of it is not a number, and
/// [`NutrientError::AmountOutOfRange`] when that number is NaN, infinite, or a
/// calorie amount too large for a whole-number count.
///
/// Examples:
/// - "30 g" -> Grams(30.0)
/// - "500 mg" -> Grams(0.5)
/// - "15 %" -> Percent(0.15)
/// - "12 Cal" -> Calories(12)
/// - "50 kcal" -> Calories(50), matched on `k`
pub fn extract_number<'a>(raw: impl Into<Option<&'a str>>) -> NutrientResult<Option<NutrientValue>> {
    let Some(raw) = raw.into() else {
        return Ok(None);
    };

    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        tracing::debug!("Discarding unitless nutrient value '{}'", raw);
        return Ok(None);
    }

    let lower = raw.to_lowercase();
    let Some(unit) = detect_unit(&lower) else {
        return Ok(None);
    };

    let amount = match lower.split_once(unit.as_str()) {
        Some((left, _)) => left.trim(),
        None => "",
    };

    let value: f64 = amount.parse().map_err(|source| {
        tracing::error!(
            "Failed to parse amount '{}' from nutrient value '{}' (unit: {})",
            amount,
            raw,
            unit
        );
        NutrientError::MalformedAmount {
            raw: raw.to_string(),
            unit,
            source,
        }
    })?;

    let is_calories = unit.normalized_unit() == Some(NormalizedUnit::Calories);
    if !value.is_finite() || (is_calories && !fits_whole_calories(value)) {
        tracing::error!("Amount {} in nutrient value '{}' is out of range", value, raw);
        return Err(NutrientError::AmountOutOfRange {
            raw: raw.to_string(),
            unit,
        });
    }

    let converted = convert(value, unit);
    if converted.is_none() {
        tracing::debug!("No conversion for unit '{}' in nutrient value '{}'", unit, raw);
    }
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> Option<NutrientValue> {
        extract_number(raw).unwrap()
    }

    #[test]
    fn test_detect_unit_precedence() {
        assert_eq!(detect_unit("500 mg"), Some(UnitToken::Mg));
        assert_eq!(detect_unit("500 milligrams"), Some(UnitToken::Milligrams));
        assert_eq!(detect_unit("250 ml"), Some(UnitToken::Ml));
        assert_eq!(detect_unit("250 millilitres"), Some(UnitToken::Millilitres));
        assert_eq!(detect_unit("50 kcal"), Some(UnitToken::K));
        assert_eq!(detect_unit("110 calories"), Some(UnitToken::Cal));
        assert_eq!(detect_unit("15 %"), Some(UnitToken::Percent));
        assert_eq!(detect_unit("15 dv"), Some(UnitToken::Dv));
        assert_eq!(detect_unit("30 grams"), Some(UnitToken::G));
        assert_eq!(detect_unit("2 litres"), Some(UnitToken::L));
    }

    #[test]
    fn test_detect_unit_rejects_comparisons() {
        for value in ["< 1 g", "> 5 mg", "<= 2 %", ">= 10 cal", "<1g"] {
            assert_eq!(detect_unit(value), None, "{}", value);
        }
    }

    #[test]
    fn test_detect_unit_none() {
        assert_eq!(detect_unit("30"), None);
        assert_eq!(detect_unit("trace"), None);
        assert_eq!(detect_unit(""), None);
    }

    #[test]
    fn test_extract_grams() {
        assert_eq!(extract("30 g"), Some(NutrientValue::Grams(30.0)));
        assert_eq!(extract("2.5g"), Some(NutrientValue::Grams(2.5)));
        assert_eq!(extract("0 g"), Some(NutrientValue::Grams(0.0)));
        assert_eq!(extract("30 grams"), Some(NutrientValue::Grams(30.0)));
    }

    #[test]
    fn test_extract_milligrams() {
        match extract("500 mg") {
            Some(NutrientValue::Grams(v)) => assert!((v - 0.5).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        match extract("500 Milligrams") {
            Some(NutrientValue::Grams(v)) => assert!((v - 0.5).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        match extract("15mg") {
            Some(NutrientValue::Grams(v)) => assert!((v - 0.015).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_extract_percent() {
        match extract("15 %") {
            Some(NutrientValue::Percent(v)) => assert!((v - 0.15).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
        match extract("8 DV") {
            Some(NutrientValue::Percent(v)) => assert!((v - 0.08).abs() < 1e-12),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_extract_calories() {
        assert_eq!(extract("12 Cal"), Some(NutrientValue::Calories(12)));
        assert_eq!(extract("110 calories"), Some(NutrientValue::Calories(110)));
        assert_eq!(extract("90 k"), Some(NutrientValue::Calories(90)));
        assert_eq!(extract("45.8 cal"), Some(NutrientValue::Calories(45)));
    }

    #[test]
    fn test_extract_kcal_matches_k() {
        assert_eq!(extract("50 kcal"), Some(NutrientValue::Calories(50)));
        assert_eq!(extract("50 kCal"), Some(NutrientValue::Calories(50)));
    }

    #[test]
    fn test_extract_expected_empty() {
        assert_eq!(extract("< 1 g"), None);
        assert_eq!(extract(">= 5 mg"), None);
        assert_eq!(extract("30"), None);
        assert_eq!(extract("trace"), None);
        assert_eq!(extract(""), None);
        assert_eq!(extract_number(None::<&str>).unwrap(), None);
    }

    #[test]
    fn test_extract_volume_units_unhandled() {
        assert_eq!(extract("250 ml"), None);
        assert_eq!(extract("250 millilitres"), None);
        assert_eq!(extract("1 L"), None);
        assert_eq!(extract("2 litres"), None);
    }

    #[test]
    fn test_extract_malformed_amount_is_error() {
        let err = extract_number("sugars 5 g").unwrap_err();
        match err {
            NutrientError::MalformedAmount { raw, unit, .. } => {
                assert_eq!(raw, "sugars 5 g");
                assert_eq!(unit, UnitToken::G);
            }
            other => panic!("unexpected {:?}", other),
        }

        assert!(extract_number("g").is_err());
        assert!(extract_number("about 1 mg").is_err());
    }

    #[test]
    fn test_extract_non_finite_or_oversized_amount_is_error() {
        for raw in ["nan cal", "inf cal", "1e30 cal", "NaN g", "-inf mg", "inf %"] {
            match extract_number(raw) {
                Err(NutrientError::AmountOutOfRange { raw: r, .. }) => assert_eq!(r, raw),
                other => panic!("{}: unexpected {:?}", raw, other),
            }
        }
        assert_eq!(extract("1e30 g"), Some(NutrientValue::Grams(1e30)));
    }

    #[test]
    fn test_extract_is_deterministic() {
        for raw in ["30 g", "500 mg", "15 %", "12 Cal", "< 1 g", "50 kcal", "30"] {
            assert_eq!(extract(raw), extract(raw));
        }
    }
}
