//! Structured pricing errors.

use serde::{Deserialize, Serialize};

use quote_model::Dimension;

/// Why a single row with complete data could not be priced.
///
/// The display strings are the messages surfaced to the user, so they are
/// full sentences rather than the usual lowercase fragments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceError {
    #[error("Incomplete item data.")]
    IncompleteItem,

    #[error("Price matrix not found for fabric type: {fabric_type}")]
    MatrixNotFound { fabric_type: String },

    #[error("Width {width} exceeds the maximum width in the price matrix.")]
    WidthExceedsMaximum { width: u32 },

    #[error("Height {height} exceeds the maximum height in the price matrix.")]
    HeightExceedsMaximum { height: u32 },

    #[error("Price not found for the given dimensions.")]
    PriceNotFound,
}

impl PriceError {
    /// The column the caller should focus when surfacing this error.
    /// Width only for a width overrun; everything else points at height.
    pub fn column(&self) -> Dimension {
        match self {
            PriceError::WidthExceedsMaximum { .. } => Dimension::Width,
            PriceError::IncompleteItem
            | PriceError::MatrixNotFound { .. }
            | PriceError::HeightExceedsMaximum { .. }
            | PriceError::PriceNotFound => Dimension::Height,
        }
    }
}

/// The first validation failure of an orchestration pass, addressed to a
/// row and column so the caller can focus the offending cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowError {
    /// Human-readable message, prefixed with the 1-based row number.
    pub message: String,
    /// 0-based index into the document's item list.
    pub row_index: usize,
    pub column: Dimension,
}

impl RowError {
    pub fn new(row_index: usize, error: &PriceError) -> Self {
        Self {
            message: format!("Row {}: {error}", row_index + 1),
            row_index,
            column: error.column(),
        }
    }
}
