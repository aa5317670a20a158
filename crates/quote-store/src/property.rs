//! Typed field patches for line items.

use quote_model::{ChainSide, DualBracket, LineItem, MountStyle, RollDirection};

/// One secondary-attribute change, carried with its typed value.
///
/// Winder and motor are deliberately absent: they are mutually exclusive
/// and go through [`QuoteStore::set_winder`](crate::QuoteStore::set_winder)
/// and [`set_motor`](crate::QuoteStore::set_motor) so the mutex cannot be
/// bypassed.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemProperty {
    Location(String),
    Fabric(String),
    Color(String),
    Over(RollDirection),
    Mount(MountStyle),
    ChainSide(ChainSide),
    Dual(DualBracket),
    /// Chain length in millimeters; `None` clears.
    Chain(Option<u32>),
}

impl ItemProperty {
    /// Apply to an item; true when the stored value actually changed.
    pub(crate) fn apply(&self, item: &mut LineItem) -> bool {
        match self {
            ItemProperty::Location(value) => replace(&mut item.location, value),
            ItemProperty::Fabric(value) => replace(&mut item.fabric, value),
            ItemProperty::Color(value) => replace(&mut item.color, value),
            ItemProperty::Over(value) => replace_copy(&mut item.over, *value),
            ItemProperty::Mount(value) => replace_copy(&mut item.mount, *value),
            ItemProperty::ChainSide(value) => replace_copy(&mut item.chain_side, *value),
            ItemProperty::Dual(value) => replace_copy(&mut item.dual, *value),
            ItemProperty::Chain(value) => replace_copy(&mut item.chain, *value),
        }
    }
}

fn replace(slot: &mut String, value: &str) -> bool {
    if slot == value {
        false
    } else {
        value.clone_into(slot);
        true
    }
}

fn replace_copy<T: Copy + PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// The cyclable option columns: clicking one advances the value through
/// its fixed order (see the `cycled` methods on the option enums).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionField {
    Over,
    Mount,
    ChainSide,
}
