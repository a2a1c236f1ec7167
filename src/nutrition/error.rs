//! Normalization error types

use std::num::ParseFloatError;

use thiserror::Error;

use super::units::UnitToken;

/// Errors raised while normalizing nutrient values
///
/// Only unexpected input is an error. Values that are routinely unparseable
/// (inequalities, bare numbers, unknown units) come back as `Ok(None)`.
#[derive(Debug, Error)]
pub enum NutrientError {
    #[error("detected unit '{unit}' in nutrient value '{raw}' but no numeric amount precedes it")]
    MalformedAmount {
        raw: String,
        unit: UnitToken,
        #[source]
        source: ParseFloatError,
    },

    #[error("amount in nutrient value '{raw}' (unit '{unit}') is not a storable number")]
    AmountOutOfRange { raw: String, unit: UnitToken },
}

/// Result type for normalization operations
pub type NutrientResult<T> = Result<T, NutrientError>;
