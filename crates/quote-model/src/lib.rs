//! Data model for the roller-blind quoting core.
//!
//! This crate defines the value types shared by every other crate: the
//! quote document with its line items and summary, the closed option
//! enumerations used on a line item, the rate matrix consumed by pricing,
//! and the dimension validation rules. All types serialize as plain nested
//! records so a quote document can round-trip through JSON unchanged.

pub mod document;
pub mod item;
pub mod options;
pub mod rates;
pub mod summary;

pub use document::{Customer, QuoteDocument};
pub use item::{ItemId, ItemIdGen, LineItem};
pub use options::{ChainSide, DualBracket, MountStyle, RollDirection, Winder};
pub use rates::{Dimension, DimensionRule, RateMatrix, ValidationRules};
pub use summary::{AccessoryKind, AccessoryLine, Accessories, Summary};
