//! The pricing orchestrator: one full recompute of line prices and the
//! grand total.

use tracing::debug;

use quote_catalog::{AccessoryPriceKey, RateCatalog};
use quote_model::{AccessoryKind, LineItem, QuoteDocument};

use crate::error::RowError;
use crate::registry::{ProductKind, strategy_for};
use crate::strategy::PricingStrategy;

/// Result of an orchestration pass: the repriced document (a new value,
/// built from a copy of the caller's) and the first validation error
/// encountered, if any.
#[derive(Debug, Clone)]
pub struct PricingOutcome {
    pub document: QuoteDocument,
    pub first_error: Option<RowError>,
}

/// Walk every row of the document, reprice the complete ones, and sum the
/// grand total into the summary.
///
/// Rows with incomplete data are skipped silently; rows with complete data
/// that fail keep a null line price. The scan never stops early, but only
/// the first error is surfaced. The caller's document is untouched; the
/// returned copy replaces it.
pub fn calculate_and_sum(
    document: &QuoteDocument,
    strategy: &dyn PricingStrategy,
    catalog: &RateCatalog,
) -> PricingOutcome {
    let mut updated = document.clone();
    let mut first_error: Option<RowError> = None;

    for (index, item) in updated.items.iter_mut().enumerate() {
        item.line_price = None;
        if item.width.is_none() || item.height.is_none() || item.fabric_type.is_none() {
            continue;
        }
        let matrix = item
            .fabric_type
            .as_deref()
            .and_then(|fabric| catalog.rate_matrix(fabric));
        match strategy.calculate_price(item, matrix) {
            Ok(price) => item.line_price = Some(price),
            Err(error) => {
                if first_error.is_none() {
                    first_error = Some(RowError::new(index, &error));
                }
            }
        }
    }

    let items_total: f64 = updated
        .items
        .iter()
        .map(|item| item.line_price.unwrap_or(0.0))
        .sum();
    let total = items_total + updated.summary.accessories.price_total();
    updated.summary.total_sum = Some(total);

    debug!(
        rows = updated.items.len(),
        total,
        errored = first_error.is_some(),
        "orchestration pass complete"
    );

    PricingOutcome {
        document: updated,
        first_error,
    }
}

/// Input to an accessory aggregation: either the rows to count over, or an
/// externally tracked count (remotes, chargers, cords).
#[derive(Debug, Clone, Copy)]
pub enum AccessoryInput<'a> {
    Items(&'a [LineItem]),
    Count(u32),
}

/// Price one accessory kind for a product.
///
/// Resolves the catalog price key and the strategy method for the kind.
/// Any resolution failure (catalog not ready, key missing, input shape
/// mismatch) degrades to 0 rather than blocking the rest of the quote.
pub fn accessory_price(
    product: ProductKind,
    kind: AccessoryKind,
    input: AccessoryInput<'_>,
    catalog: &RateCatalog,
) -> f64 {
    let strategy = strategy_for(product);
    let Some(unit_price) = catalog.accessory_unit_price(AccessoryPriceKey::for_kind(kind)) else {
        debug!(%kind, "accessory unit price unresolved; pricing as zero");
        return 0.0;
    };

    match (kind, input) {
        (AccessoryKind::Dual, AccessoryInput::Items(items)) => strategy.dual_price(items, unit_price),
        (AccessoryKind::Winder, AccessoryInput::Items(items)) => {
            strategy.winder_price(items, unit_price)
        }
        (AccessoryKind::Motor, AccessoryInput::Items(items)) => {
            strategy.motor_price(items, unit_price)
        }
        (AccessoryKind::Remote, AccessoryInput::Count(count)) => {
            strategy.remote_price(count, unit_price)
        }
        (AccessoryKind::Charger, AccessoryInput::Count(count)) => {
            strategy.charger_price(count, unit_price)
        }
        (AccessoryKind::Cord, AccessoryInput::Count(count)) => strategy.cord_price(count, unit_price),
        _ => 0.0,
    }
}
