//! Roller-blind pricing rules.

use quote_model::{
    Dimension, DimensionRule, DualBracket, ItemId, LineItem, RateMatrix, ValidationRules, Winder,
};

use crate::error::PriceError;
use crate::strategy::PricingStrategy;

/// Price per dual-bracket pair.
///
/// Unlike every other accessory, the pair rate is a strategy constant
/// rather than a catalog entry; the `comboBracket` catalog key is still
/// required to resolve before dual pricing runs. Kept as a named constant
/// until the rate file grows a wired-in entry.
pub const DUAL_PAIR_RATE: f64 = 10.0;

/// The one concrete product family.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollerBlindStrategy;

impl PricingStrategy for RollerBlindStrategy {
    fn calculate_price(
        &self,
        item: &LineItem,
        matrix: Option<&RateMatrix>,
    ) -> Result<f64, PriceError> {
        let (Some(width), Some(height), Some(_)) =
            (item.width, item.height, item.fabric_type.as_deref())
        else {
            return Err(PriceError::IncompleteItem);
        };
        let Some(matrix) = matrix else {
            return Err(PriceError::MatrixNotFound {
                fabric_type: item.fabric_type.clone().unwrap_or_default(),
            });
        };

        let width_index = matrix
            .width_index(width)
            .ok_or(PriceError::WidthExceedsMaximum { width })?;
        let drop_index = matrix
            .drop_index(height)
            .ok_or(PriceError::HeightExceedsMaximum { height })?;

        // The cell price is returned as-is; no rounding or interpolation.
        matrix
            .price_at(drop_index, width_index)
            .ok_or(PriceError::PriceNotFound)
    }

    fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            width: DimensionRule {
                min: 250,
                max: 3300,
                name: "Width",
            },
            height: DimensionRule {
                min: 300,
                max: 3300,
                name: "Height",
            },
        }
    }

    fn initial_item(&self, id: ItemId) -> LineItem {
        LineItem::blank(id)
    }

    fn dual_price(&self, items: &[LineItem], _unit_price: f64) -> f64 {
        let count = items
            .iter()
            .filter(|item| item.dual == DualBracket::Dual)
            .count() as u32;
        f64::from(count / 2) * DUAL_PAIR_RATE
    }

    fn winder_price(&self, items: &[LineItem], unit_price: f64) -> f64 {
        let count = items
            .iter()
            .filter(|item| item.winder == Winder::HeavyDuty)
            .count() as u32;
        f64::from(count) * unit_price
    }

    fn motor_price(&self, items: &[LineItem], unit_price: f64) -> f64 {
        let count = items.iter().filter(|item| item.has_motor()).count() as u32;
        f64::from(count) * unit_price
    }

    fn remote_price(&self, count: u32, unit_price: f64) -> f64 {
        f64::from(count) * unit_price
    }

    fn charger_price(&self, count: u32, unit_price: f64) -> f64 {
        f64::from(count) * unit_price
    }

    fn cord_price(&self, count: u32, unit_price: f64) -> f64 {
        f64::from(count) * unit_price
    }
}

/// Validation helper for manual dimension entry: `None` passes (clearing a
/// cell is always allowed), out-of-range values return the rejection
/// message for the caller to surface.
pub fn check_dimension(
    rules: &ValidationRules,
    dimension: Dimension,
    value: Option<u32>,
) -> Result<(), String> {
    let rule = rules.rule(dimension);
    match value {
        Some(v) if !rule.contains(v) => Err(rule.rejection_message()),
        _ => Ok(()),
    }
}
