//! Serde shape of the external rate file and its loader.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use quote_model::RateMatrix;

/// Errors from reading the rate file. Loader failures are the only place
/// the catalog surfaces an error; once installed, lookups degrade to
/// "not found" instead.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read rate file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rate file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One accessory entry in the rate file. Kept as a record so the file can
/// grow extra per-accessory fields without breaking older readers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessoryRate {
    pub price: f64,
}

/// The rate document supplied once by the external rate source: fabric
/// matrices, accessory unit prices, and the ordered fabric-type sequence
/// used for cycling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateDocument {
    #[serde(default)]
    pub matrices: BTreeMap<String, RateMatrix>,
    #[serde(default)]
    pub accessories: BTreeMap<String, AccessoryRate>,
    #[serde(default)]
    pub fabric_type_sequence: Vec<String>,
}

impl RateDocument {
    /// Parse a rate document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Read and parse a rate document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}
