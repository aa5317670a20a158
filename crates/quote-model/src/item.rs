//! Line items and their identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::options::{ChainSide, DualBracket, MountStyle, RollDirection, Winder};

/// Opaque stable identifier for a line item. Assigned once at creation and
/// never reassigned, including when a row is cleared in place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Monotonic id source. Owned by the document store; one per session.
#[derive(Debug, Clone, Default)]
pub struct ItemIdGen {
    next: u64,
}

impl ItemIdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume issuing ids above every id already present in `existing`,
    /// used when a document is restored from a snapshot.
    pub fn resuming_after<'a>(existing: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let next = existing
            .into_iter()
            .map(|id| id.0 + 1)
            .max()
            .unwrap_or(0);
        Self { next }
    }

    pub fn next_id(&mut self) -> ItemId {
        let id = ItemId(self.next);
        self.next += 1;
        id
    }
}

/// One quoted roller-blind row.
///
/// `width`/`height` are millimeters; `None` means unset. `line_price` is
/// derived: it must be `None` whenever width, height, or fabric type is
/// unset or has changed since the last orchestration pass, and only the
/// pricing orchestrator writes a `Some` value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    #[serde(rename = "itemId")]
    pub id: ItemId,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fabric_type: Option<String>,
    pub line_price: Option<f64>,
    /// Installation location, free text.
    #[serde(default)]
    pub location: String,
    /// Fabric name, free text.
    #[serde(default)]
    pub fabric: String,
    /// Fabric color, free text.
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub over: RollDirection,
    #[serde(rename = "oi", default)]
    pub mount: MountStyle,
    #[serde(rename = "lr", default)]
    pub chain_side: ChainSide,
    #[serde(default)]
    pub dual: DualBracket,
    /// Chain length in millimeters.
    #[serde(default)]
    pub chain: Option<u32>,
    #[serde(default)]
    pub winder: Winder,
    /// Motor model, free text; empty means no motor. Mutually exclusive
    /// with `winder`.
    #[serde(default)]
    pub motor: String,
}

impl LineItem {
    /// A fresh blank row with the given id and every other field at its
    /// empty default.
    pub fn blank(id: ItemId) -> Self {
        Self {
            id,
            width: None,
            height: None,
            fabric_type: None,
            line_price: None,
            location: String::new(),
            fabric: String::new(),
            color: String::new(),
            over: RollDirection::default(),
            mount: MountStyle::default(),
            chain_side: ChainSide::default(),
            dual: DualBracket::default(),
            chain: None,
            winder: Winder::default(),
            motor: String::new(),
        }
    }

    /// A row is empty when none of width, height, or fabric type is set.
    /// Secondary attributes do not count; the trailing-row invariant and
    /// consolidation both use this predicate.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none() && self.fabric_type.is_none()
    }

    pub fn has_dimensions(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// Area in square millimeters, when both dimensions are set.
    pub fn area(&self) -> Option<u64> {
        Some(u64::from(self.width?) * u64::from(self.height?))
    }

    pub fn has_motor(&self) -> bool {
        !self.motor.is_empty()
    }
}
