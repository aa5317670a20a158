//! Rate catalog: read-only lookup of price matrices, accessory unit
//! prices, and the canonical fabric-type sequence.
//!
//! The catalog starts "not ready" and is populated exactly once from a
//! [`RateDocument`] supplied by an external loader. Every lookup made
//! before that, or with an unknown key, reports "not found" rather than
//! failing; callers treat a miss as a recoverable condition that blocks
//! pricing for that row or accessory only.

pub mod catalog;
pub mod document;

pub use catalog::{AccessoryPriceKey, RateCatalog};
pub use document::{AccessoryRate, CatalogError, RateDocument};
