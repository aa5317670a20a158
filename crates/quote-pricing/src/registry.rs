//! Explicit strategy registry, keyed by product kind.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::roller::RollerBlindStrategy;
use crate::strategy::PricingStrategy;

/// The product families the quoting core knows about. One strategy per
/// kind; adding a product means adding a variant and a `strategy_for` arm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductKind {
    #[default]
    RollerBlind,
}

impl ProductKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductKind::RollerBlind => "rollerBlind",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static ROLLER_BLIND: RollerBlindStrategy = RollerBlindStrategy;

/// The strategy for a product kind. Total over [`ProductKind`]; there is
/// no fallible string-keyed lookup.
pub fn strategy_for(product: ProductKind) -> &'static dyn PricingStrategy {
    match product {
        ProductKind::RollerBlind => &ROLLER_BLIND,
    }
}
