//! The dual-bracket / chain-length tab flow.
//!
//! Dual brackets are priced in pairs, so the flow refuses to price an odd
//! count: leaving dual mode with an odd number of `D` rows keeps the mode
//! active and returns a notice instead. Chain lengths are free-entry
//! positive integers, committed through the shared input buffer.

use tracing::debug;

use quote_model::{AccessoryKind, AccessoryLine};
use quote_pricing::{AccessoryInput, accessory_price};
use quote_store::{DualChainMode, ItemProperty};

use crate::notice::Notice;
use crate::session::Session;

impl Session {
    /// Toggle a dual/chain tab mode. Entering records the mode and, for
    /// dual mode, discards the previously displayed dual price; leaving
    /// dual mode prices the dual brackets and writes the summary line,
    /// unless the count is odd. Leaving either mode abandons the input
    /// buffer and the target cell.
    pub fn toggle_dual_chain_mode(&mut self, mode: DualChainMode) -> Option<Notice> {
        if self.view.dual_chain_mode != Some(mode) {
            if mode == DualChainMode::Dual {
                self.view.set_dual_price(None);
            }
            self.view.set_dual_chain_mode(Some(mode));
            return None;
        }
        if mode == DualChainMode::Dual {
            let count = self.store.document().dual_count();
            if count % 2 != 0 {
                debug!(count, "odd dual-bracket count; pricing refused");
                return Some(Notice::warning(
                    "Dual brackets are priced in pairs; the D count must be even.",
                ));
            }
            let price = accessory_price(
                self.store.product(),
                AccessoryKind::Dual,
                AccessoryInput::Items(self.store.items()),
                &self.catalog,
            );
            self.view.set_dual_price(Some(price));
            self.store
                .set_accessory_line(AccessoryKind::Dual, AccessoryLine::new(count, price));
            self.view.set_sum_outdated(true);
        }
        self.view.set_dual_chain_mode(None);
        self.view.clear_dual_chain_input();
        self.view.set_target_cell(None);
        None
    }

    /// Toggle a row's dual-bracket flag.
    pub fn toggle_dual(&mut self, index: usize) -> bool {
        let Some(item) = self.store.items().get(index) else {
            return false;
        };
        let next = item.dual.toggled();
        self.store.update_property(index, &ItemProperty::Dual(next))
    }

    /// Commit the dual/chain input buffer as a chain length for a row.
    /// Empty clears; anything but a positive whole number is refused with
    /// the document untouched.
    pub fn commit_chain_length(&mut self, index: usize) -> Option<Notice> {
        let raw = self.view.dual_chain_input.trim().to_string();
        self.view.clear_dual_chain_input();

        let value = if raw.is_empty() {
            None
        } else {
            match raw.parse::<u32>() {
                Ok(v) if v > 0 => Some(v),
                _ => {
                    return Some(Notice::warning(
                        "Chain length must be a positive whole number.",
                    ));
                }
            }
        };
        self.store.update_property(index, &ItemProperty::Chain(value));
        None
    }
}
