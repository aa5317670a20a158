//! Pricing for the roller-blind product family.
//!
//! The [`PricingStrategy`] trait is the capability seam between the
//! generic orchestrator and product-specific rules; one concrete strategy
//! ([`RollerBlindStrategy`]) is implemented. The orchestrator in
//! [`calculate`] walks a quote document, prices each complete row against
//! the rate catalog, and aggregates the grand total, surfacing at most one
//! structured error per pass.

pub mod calculate;
pub mod error;
pub mod registry;
pub mod roller;
pub mod strategy;

pub use calculate::{AccessoryInput, PricingOutcome, accessory_price, calculate_and_sum};
pub use error::{PriceError, RowError};
pub use registry::{ProductKind, strategy_for};
pub use roller::{DUAL_PAIR_RATE, RollerBlindStrategy, check_dimension};
pub use strategy::PricingStrategy;
