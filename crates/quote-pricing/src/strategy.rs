//! The product-family capability interface.

use quote_model::{ItemId, LineItem, RateMatrix, ValidationRules};

use crate::error::PriceError;

/// Everything the quoting core needs from one product family.
///
/// Implementations are pure: `calculate_price` is deterministic for a
/// given (item, matrix) pair and no method touches shared state. Strategy
/// selection goes through [`strategy_for`](crate::registry::strategy_for).
pub trait PricingStrategy: Send + Sync {
    /// Resolve a complete line item against its rate matrix.
    ///
    /// `matrix` is `None` when the catalog had no entry for the item's
    /// fabric type (or is not ready yet); that is reported as a matrix
    /// error rather than a panic so sibling rows keep pricing.
    fn calculate_price(
        &self,
        item: &LineItem,
        matrix: Option<&RateMatrix>,
    ) -> Result<f64, PriceError>;

    /// Inclusive manual-entry bounds per dimension.
    fn validation_rules(&self) -> ValidationRules;

    /// The canonical blank row for this product, with the given id and
    /// every other field at its empty default.
    fn initial_item(&self, id: ItemId) -> LineItem;

    /// Dual-bracket total: brackets are sold in pairs, so the count of
    /// dual-flagged rows is halved (rounding down) before pricing.
    fn dual_price(&self, items: &[LineItem], unit_price: f64) -> f64;

    /// Heavy-duty winder total over the given rows.
    fn winder_price(&self, items: &[LineItem], unit_price: f64) -> f64;

    /// Motor total over the given rows (any non-empty motor value counts).
    fn motor_price(&self, items: &[LineItem], unit_price: f64) -> f64;

    /// Remote total for an externally tracked count.
    fn remote_price(&self, count: u32, unit_price: f64) -> f64;

    /// Charger total for an externally tracked count.
    fn charger_price(&self, count: u32, unit_price: f64) -> f64;

    /// 3-meter extension cord total for an externally tracked count.
    fn cord_price(&self, count: u32, unit_price: f64) -> f64;
}
