//! Retailer loaders
//!
//! Adapters from each retailer's raw nutrition payload to a normalized
//! [`NutrientRecord`]. Fetching and persistence stay with the caller.

pub mod label;
pub mod structured;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::{NutrientColumns, NutrientRecord};
use crate::nutrition::NutrientError;

pub use label::{normalize_label_table, parse_label_table, LabelRow, EXPECTED_NUTRIENTS};
pub use structured::{normalize_structured, StructuredSource};

/// Retailer a product was scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Loblaws,
    #[serde(rename = "nofrills")]
    NoFrills,
    Walmart,
    Voila,
    Mintel,
}

impl Source {
    /// The structured feed for this retailer, if it delivers one
    pub fn structured(&self) -> Option<StructuredSource> {
        match self {
            Source::Walmart => Some(StructuredSource::Walmart),
            Source::Voila => Some(StructuredSource::Voila),
            Source::Mintel => Some(StructuredSource::Mintel),
            Source::Loblaws | Source::NoFrills => None,
        }
    }
}

/// Label payload: either grouped rows or the raw rendered lines
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LabelInput {
    Rows(Vec<LabelRow>),
    Lines(Vec<String>),
}

/// One scraped product's nutrition payload
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub source: Source,
    pub product_code: String,
    pub nutrition: Value,
}

/// A product's normalized nutrients, ready for persistence
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedProduct {
    pub product_code: String,
    pub source: Source,
    pub normalized_at: DateTime<Utc>,
    pub nutrients: NutrientRecord,
}

/// Ingestion error types
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("Invalid {retailer:?} nutrition payload: {error}")]
    Payload {
        retailer: Source,
        #[source]
        error: serde_json::Error,
    },

    #[error(transparent)]
    Nutrient(#[from] NutrientError),
}

/// Normalize one product's nutrition payload
pub fn normalize_product(
    product: &RawProduct,
    columns: &NutrientColumns,
) -> Result<NormalizedProduct, IngestError> {
    let payload_error = |error: serde_json::Error| IngestError::Payload {
        retailer: product.source,
        error,
    };

    let nutrients = match product.source.structured() {
        Some(feed) => {
            let fields: Map<String, Value> =
                serde_json::from_value(product.nutrition.clone()).map_err(payload_error)?;
            normalize_structured(feed, &fields, columns)
        }
        None => {
            let input: LabelInput =
                serde_json::from_value(product.nutrition.clone()).map_err(payload_error)?;
            let rows = match input {
                LabelInput::Rows(rows) => rows,
                LabelInput::Lines(lines) => parse_label_table(&lines, EXPECTED_NUTRIENTS),
            };
            normalize_label_table(&rows, columns)?
        }
    };

    tracing::debug!(
        "Normalized {} nutrients for {} ({:?})",
        nutrients.len(),
        product.product_code,
        product.source
    );

    Ok(NormalizedProduct {
        product_code: product.product_code.clone(),
        source: product.source,
        normalized_at: Utc::now(),
        nutrients,
    })
}
