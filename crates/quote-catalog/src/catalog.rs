//! The catalog itself: a one-time-installable lookup service.

use std::fmt;
use std::sync::OnceLock;

use tracing::{debug, warn};

use quote_model::{AccessoryKind, RateMatrix};

use crate::document::RateDocument;

/// Catalog price keys for accessories, matching the keys in the rate
/// file's `accessories` map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessoryPriceKey {
    ComboBracket,
    WinderHd,
    MotorStandard,
    RemoteStandard,
    ChargerStandard,
    Cord3m,
}

impl AccessoryPriceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryPriceKey::ComboBracket => "comboBracket",
            AccessoryPriceKey::WinderHd => "winderHD",
            AccessoryPriceKey::MotorStandard => "motorStandard",
            AccessoryPriceKey::RemoteStandard => "remoteStandard",
            AccessoryPriceKey::ChargerStandard => "chargerStandard",
            AccessoryPriceKey::Cord3m => "cord3m",
        }
    }

    /// The price key used when aggregating the given accessory kind.
    pub fn for_kind(kind: AccessoryKind) -> Self {
        match kind {
            AccessoryKind::Dual => AccessoryPriceKey::ComboBracket,
            AccessoryKind::Winder => AccessoryPriceKey::WinderHd,
            AccessoryKind::Motor => AccessoryPriceKey::MotorStandard,
            AccessoryKind::Remote => AccessoryPriceKey::RemoteStandard,
            AccessoryKind::Charger => AccessoryPriceKey::ChargerStandard,
            AccessoryKind::Cord => AccessoryPriceKey::Cord3m,
        }
    }
}

impl fmt::Display for AccessoryPriceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only rate lookup behind a one-time readiness gate.
///
/// `install` is the single asynchronous boundary of the core (§ resource
/// model): until it has run, every lookup reports "not found" and the rest
/// of the system shows degraded zero/null pricing.
#[derive(Debug, Default)]
pub struct RateCatalog {
    data: OnceLock<RateDocument>,
}

impl RateCatalog {
    /// A catalog in the not-ready state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog that is ready immediately; convenience for tests and
    /// batch tools that load rates up front.
    pub fn with_document(document: RateDocument) -> Self {
        let catalog = Self::new();
        catalog.install(document);
        catalog
    }

    /// Install the rate document. Returns false (and keeps the original
    /// data) if the catalog was already populated.
    pub fn install(&self, document: RateDocument) -> bool {
        let matrices = document.matrices.len();
        let accessories = document.accessories.len();
        match self.data.set(document) {
            Ok(()) => {
                debug!(matrices, accessories, "rate catalog installed");
                true
            }
            Err(_) => {
                warn!("rate catalog already installed; ignoring new document");
                false
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.data.get().is_some()
    }

    /// The rate matrix for a fabric-type code, or `None` when the catalog
    /// is not ready or the code is unknown.
    pub fn rate_matrix(&self, fabric_type: &str) -> Option<&RateMatrix> {
        self.data.get()?.matrices.get(fabric_type)
    }

    /// The unit price for an accessory key, or `None` when the catalog is
    /// not ready or the key is absent from the rate file.
    pub fn accessory_unit_price(&self, key: AccessoryPriceKey) -> Option<f64> {
        self.data
            .get()?
            .accessories
            .get(key.as_str())
            .map(|rate| rate.price)
    }

    /// The canonical ordered fabric-type sequence; empty before install.
    pub fn fabric_type_sequence(&self) -> &[String] {
        self.data
            .get()
            .map(|doc| doc.fabric_type_sequence.as_slice())
            .unwrap_or(&[])
    }
}
