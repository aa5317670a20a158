//! The session core and the quick-quote grid flow.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use quote_catalog::RateCatalog;
use quote_model::{Dimension, QuoteDocument};
use quote_pricing::{
    PricingStrategy, ProductKind, RowError, calculate_and_sum, check_dimension, strategy_for,
};
use quote_store::{Column, QuoteStore, Tab, ViewState};

use crate::notice::Notice;

/// One interactive quoting session: the document store, the view state,
/// and the catalog handle the flows price against.
#[derive(Debug)]
pub struct Session {
    pub(crate) store: QuoteStore,
    pub(crate) view: ViewState,
    pub(crate) catalog: Arc<RateCatalog>,
}

impl Session {
    pub fn new(product: ProductKind, catalog: Arc<RateCatalog>) -> Self {
        Self {
            store: QuoteStore::new(product, Arc::clone(&catalog)),
            view: ViewState::new(),
            catalog,
        }
    }

    /// A session resumed from a saved document.
    pub fn from_document(
        document: QuoteDocument,
        product: ProductKind,
        catalog: Arc<RateCatalog>,
    ) -> Self {
        Self {
            store: QuoteStore::from_document(document, product, Arc::clone(&catalog)),
            view: ViewState::new(),
            catalog,
        }
    }

    pub fn store(&self) -> &QuoteStore {
        &self.store
    }

    /// Direct store access for mutations without per-tab rules; the store
    /// enforces its own invariants.
    pub fn store_mut(&mut self) -> &mut QuoteStore {
        &mut self.store
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }

    pub(crate) fn strategy(&self) -> &'static dyn PricingStrategy {
        strategy_for(self.store.product())
    }

    // --- quick-quote grid ---

    /// Commit the numeric input buffer into the active cell.
    ///
    /// An empty buffer clears the cell (always allowed); an out-of-range
    /// or unparseable value leaves the document untouched, clears the
    /// buffer, and returns the rule's rejection message. A successful
    /// commit marks the sum outdated when the value actually changed.
    pub fn commit_input(&mut self) -> Option<Notice> {
        let rules = self.strategy().validation_rules();
        let dimension = self.view.input_mode;
        let raw = self.view.input_value.trim().to_string();
        self.view.clear_input_value();

        let value = if raw.is_empty() {
            None
        } else {
            match raw.parse::<u32>() {
                Ok(v) => Some(v),
                Err(_) => return Some(Notice::warning(rules.rule(dimension).rejection_message())),
            }
        };
        if let Err(message) = check_dimension(&rules, dimension, value) {
            return Some(Notice::warning(message));
        }

        let row = self.view.active_cell.row;
        if self.store.set_dimension(row, dimension, value) {
            self.view.set_sum_outdated(true);
        }
        None
    }

    /// Insert a blank row after `index`. Refused after the last row and
    /// directly before an already-empty row, where the insert would be a
    /// no-op visually.
    pub fn insert_row(&mut self, index: usize) -> bool {
        let items = self.store.items();
        let Some(next) = items.get(index + 1) else {
            return false;
        };
        if next.is_empty() {
            return false;
        }
        self.store.insert_row(index).is_some()
    }

    /// Toggle a row into the current selection (single or multi-delete).
    /// The trailing blank row is never selectable.
    pub fn toggle_row_selection(&mut self, index: usize) -> bool {
        let items = self.store.items();
        let Some(item) = items.get(index) else {
            return false;
        };
        if index + 1 == items.len() && item.is_empty() {
            return false;
        }
        if self.view.is_multi_delete_mode() {
            self.view.toggle_multi_delete_row(index);
        } else {
            self.view.toggle_row_selection(index);
        }
        true
    }

    pub fn toggle_multi_delete_mode(&mut self) -> bool {
        self.view.toggle_multi_delete_mode()
    }

    /// Delete the current selection: the multi-delete set when that mode
    /// is active (refused while empty), the single selected row otherwise.
    pub fn delete_selected(&mut self) -> Option<Notice> {
        if self.view.is_multi_delete_mode() {
            let rows: BTreeSet<usize> = match self.view.multi_delete_rows() {
                Some(rows) if !rows.is_empty() => rows.clone(),
                _ => return Some(Notice::warning("No rows selected for deletion.")),
            };
            self.store.delete_multiple_rows(&rows);
            self.view.toggle_multi_delete_mode();
            self.view.set_sum_outdated(true);
            return None;
        }
        let Some(row) = self.view.selected_row() else {
            return Some(Notice::warning("Select a row to delete first."));
        };
        self.store.delete_row(row);
        self.store.consolidate_empty_rows();
        self.view.clear_row_selection();
        self.view.set_sum_outdated(true);
        None
    }

    /// Clear the selected row's content, keeping the row in place.
    pub fn clear_selected(&mut self) -> Option<Notice> {
        let Some(row) = self.view.selected_row() else {
            return Some(Notice::warning("Select a row to clear first."));
        };
        if self.store.clear_row(row) {
            self.store.consolidate_empty_rows();
            self.view.set_sum_outdated(true);
        }
        self.view.clear_row_selection();
        None
    }

    pub fn cycle_fabric_type(&mut self, index: usize) -> bool {
        let changed = self.store.cycle_fabric_type(index);
        if changed {
            self.view.set_sum_outdated(true);
        }
        changed
    }

    pub fn cycle_all_fabric_types(&mut self) -> bool {
        let changed = self.store.cycle_all_fabric_types();
        if changed {
            self.view.set_sum_outdated(true);
        }
        changed
    }

    /// One full orchestration pass. The repriced document replaces the
    /// store's copy; the sum-outdated flag clears only when every row
    /// priced. On a validation error the flag stays set, the active cell
    /// jumps to the offending dimension cell, and the error is returned
    /// for display.
    pub fn recalculate(&mut self) -> Option<RowError> {
        let outcome = calculate_and_sum(self.store.document(), self.strategy(), &self.catalog);
        self.store.replace_document(outcome.document);
        if let Some(error) = &outcome.first_error {
            self.view.set_sum_outdated(true);
            let column = match error.column {
                Dimension::Width => Column::Width,
                Dimension::Height => Column::Height,
            };
            self.view.set_active_cell(error.row_index, column);
            debug!(row = error.row_index, "recalculation stopped on row error");
        } else {
            self.view.set_sum_outdated(false);
        }
        outcome.first_error
    }

    // --- detail-config navigation ---

    /// Switch tabs, updating the visible column set for the new tab.
    pub fn activate_tab(&mut self, tab: Tab) {
        let mut columns = vec![
            Column::Sequence,
            Column::Width,
            Column::Height,
            Column::FabricType,
        ];
        match tab {
            Tab::Location => columns.push(Column::Location),
            Tab::Fabric => columns.extend([Column::Fabric, Column::Color]),
            Tab::Options => columns.extend([Column::Over, Column::Mount, Column::ChainSide]),
            Tab::Drive => columns.extend([Column::Winder, Column::Motor]),
            Tab::DualChain => columns.extend([Column::Dual, Column::Chain]),
        }
        columns.push(Column::Price);
        self.view.set_active_tab(tab);
        self.view.set_visible_columns(columns);
    }

    /// Refresh the summary display values from the drive totals and the
    /// dual price.
    pub fn refresh_summary_display(&mut self) {
        self.view.mirror_drive_totals();
        self.view.refresh_summary_accessories_total();
    }

    /// Drop the quote and the view state back to their initial states.
    pub fn reset(&mut self) {
        self.store.reset();
        self.view.reset();
    }
}
