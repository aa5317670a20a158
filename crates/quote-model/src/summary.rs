//! Quote summary aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One aggregate accessory entry: how many were counted and the total
/// price for that accessory kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessoryLine {
    pub count: u32,
    pub price: f64,
}

impl AccessoryLine {
    pub fn new(count: u32, price: f64) -> Self {
        Self { count, price }
    }
}

/// The fixed set of accessory aggregates carried on a quote. Entries are
/// overwritten wholesale by the flows that own them, never patched
/// incrementally from unrelated code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Accessories {
    pub winder: AccessoryLine,
    pub motor: AccessoryLine,
    pub remote: AccessoryLine,
    pub charger: AccessoryLine,
    pub cord3m: AccessoryLine,
    pub dual: AccessoryLine,
}

impl Accessories {
    /// Sum of every entry's price.
    pub fn price_total(&self) -> f64 {
        self.winder.price
            + self.motor.price
            + self.remote.price
            + self.charger.price
            + self.cord3m.price
            + self.dual.price
    }
}

/// Aggregate state of the whole quote.
///
/// `total_sum == None` signals "stale, must recompute before trusting";
/// only an orchestration pass writes a `Some` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_sum: Option<f64>,
    #[serde(default)]
    pub accessories: Accessories,
}

/// The accessory kinds a quote aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessoryKind {
    Dual,
    Winder,
    Motor,
    Remote,
    Charger,
    Cord,
}

impl AccessoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessoryKind::Dual => "dual",
            AccessoryKind::Winder => "winder",
            AccessoryKind::Motor => "motor",
            AccessoryKind::Remote => "remote",
            AccessoryKind::Charger => "charger",
            AccessoryKind::Cord => "cord",
        }
    }
}

impl fmt::Display for AccessoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
