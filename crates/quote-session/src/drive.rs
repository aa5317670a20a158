//! The drive/accessories tab flow.
//!
//! Winder and motor cells toggle directly except when the row already
//! carries the opposing drive; that case (and dropping the remote or
//! charger counter to zero on a motorized quote) is returned as a deferred
//! [`Confirmation`] the shell must echo back through
//! [`Session::confirm`] before anything mutates. Leaving a drive mode
//! recomputes every accessory total and writes the summary lines
//! wholesale.

use tracing::debug;

use quote_model::{AccessoryKind, AccessoryLine, Winder};
use quote_pricing::{AccessoryInput, accessory_price};
use quote_store::{CounterAccessory, DriveAccessoryMode};

use crate::session::Session;

/// Which drive a confirmed replacement installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriveTarget {
    Winder,
    Motor(String),
}

/// A mutation held back for explicit user confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// Replace the row's current drive with the opposing one.
    ReplaceDrive { row: usize, target: DriveTarget },
    /// Drop an accessory counter to zero even though the quote has a
    /// motor.
    ZeroCount { accessory: CounterAccessory },
}

impl Session {
    /// Toggle a drive-tab mode. Entering the remote or charger mode on a
    /// motorized quote seeds the counter with one unit; leaving any mode
    /// recomputes the accessory totals.
    pub fn toggle_drive_mode(&mut self, mode: DriveAccessoryMode) {
        if self.view.drive_mode == Some(mode) {
            self.view.set_drive_mode(None);
            self.recompute_accessory_totals();
            return;
        }
        self.view.set_drive_mode(Some(mode));
        let seeded = match mode {
            DriveAccessoryMode::Remote => Some(CounterAccessory::Remote),
            DriveAccessoryMode::Charger => Some(CounterAccessory::Charger),
            _ => None,
        };
        if let Some(accessory) = seeded
            && self.store.document().has_motor()
            && self.view.drive_count(accessory) == 0
        {
            self.view.set_drive_count(accessory, 1);
        }
    }

    /// Toggle a row's winder. Clearing is immediate; assigning over an
    /// existing motor is deferred to a confirmation.
    pub fn toggle_winder(&mut self, index: usize) -> Option<Confirmation> {
        let Some(item) = self.store.items().get(index) else {
            return None;
        };
        if item.winder.is_set() {
            self.store.set_winder(index, Winder::None);
        } else if item.has_motor() {
            return Some(Confirmation::ReplaceDrive {
                row: index,
                target: DriveTarget::Winder,
            });
        } else {
            self.store.set_winder(index, Winder::HeavyDuty);
        }
        None
    }

    /// Toggle a row's motor to the given model. Clearing is immediate;
    /// assigning over an existing winder is deferred to a confirmation.
    pub fn toggle_motor(&mut self, index: usize, model: &str) -> Option<Confirmation> {
        let Some(item) = self.store.items().get(index) else {
            return None;
        };
        if item.has_motor() {
            self.store.set_motor(index, "");
        } else if item.winder.is_set() {
            return Some(Confirmation::ReplaceDrive {
                row: index,
                target: DriveTarget::Motor(model.to_string()),
            });
        } else {
            self.store.set_motor(index, model);
        }
        None
    }

    pub fn increment_drive_count(&mut self, accessory: CounterAccessory) {
        let count = self.view.drive_count(accessory);
        self.view.set_drive_count(accessory, count.saturating_add(1));
    }

    /// Decrement an accessory counter. Dropping the remote or charger to
    /// zero while the quote has a motor is deferred to a confirmation;
    /// the cord is not tied to the motor and decrements freely. At zero
    /// the decrement is a no-op.
    pub fn decrement_drive_count(&mut self, accessory: CounterAccessory) -> Option<Confirmation> {
        let count = self.view.drive_count(accessory);
        if count == 0 {
            return None;
        }
        if count == 1
            && matches!(
                accessory,
                CounterAccessory::Remote | CounterAccessory::Charger
            )
            && self.store.document().has_motor()
        {
            return Some(Confirmation::ZeroCount { accessory });
        }
        self.view.set_drive_count(accessory, count - 1);
        None
    }

    /// Apply a previously returned confirmation.
    pub fn confirm(&mut self, confirmation: &Confirmation) {
        match confirmation {
            Confirmation::ReplaceDrive { row, target } => match target {
                DriveTarget::Winder => {
                    self.store.set_winder(*row, Winder::HeavyDuty);
                }
                DriveTarget::Motor(model) => {
                    self.store.set_motor(*row, model);
                }
            },
            Confirmation::ZeroCount { accessory } => {
                self.view.set_drive_count(*accessory, 0);
            }
        }
    }

    /// Recompute every drive accessory total, writing the summary lines
    /// and the view's working totals wholesale.
    pub fn recompute_accessory_totals(&mut self) {
        let product = self.store.product();
        let document = self.store.document();
        let winder_count = document.winder_count();
        let motor_count = document.motor_count();
        let remote_count = self.view.drive_count(CounterAccessory::Remote);
        let charger_count = self.view.drive_count(CounterAccessory::Charger);
        let cord_count = self.view.drive_count(CounterAccessory::Cord);

        let items = AccessoryInput::Items(self.store.items());
        let lines = [
            (
                AccessoryKind::Winder,
                DriveAccessoryMode::Winder,
                winder_count,
                accessory_price(product, AccessoryKind::Winder, items, &self.catalog),
            ),
            (
                AccessoryKind::Motor,
                DriveAccessoryMode::Motor,
                motor_count,
                accessory_price(product, AccessoryKind::Motor, items, &self.catalog),
            ),
            (
                AccessoryKind::Remote,
                DriveAccessoryMode::Remote,
                remote_count,
                accessory_price(
                    product,
                    AccessoryKind::Remote,
                    AccessoryInput::Count(remote_count),
                    &self.catalog,
                ),
            ),
            (
                AccessoryKind::Charger,
                DriveAccessoryMode::Charger,
                charger_count,
                accessory_price(
                    product,
                    AccessoryKind::Charger,
                    AccessoryInput::Count(charger_count),
                    &self.catalog,
                ),
            ),
            (
                AccessoryKind::Cord,
                DriveAccessoryMode::Cord,
                cord_count,
                accessory_price(
                    product,
                    AccessoryKind::Cord,
                    AccessoryInput::Count(cord_count),
                    &self.catalog,
                ),
            ),
        ];

        let mut grand_total = 0.0;
        for (kind, mode, count, price) in lines {
            self.store
                .set_accessory_line(kind, AccessoryLine::new(count, price));
            self.view.set_drive_total(mode, Some(price));
            grand_total += price;
        }
        self.view.set_drive_grand_total(Some(grand_total));
        self.view.set_sum_outdated(true);
        debug!(grand_total, "accessory totals recomputed");
    }
}
