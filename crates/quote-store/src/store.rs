//! The quote document store.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use quote_catalog::RateCatalog;
use quote_model::{
    AccessoryKind, AccessoryLine, Dimension, ItemIdGen, LineItem, QuoteDocument, Summary, Winder,
};
use quote_pricing::{ProductKind, strategy_for};

use crate::property::{ItemProperty, OptionField};

/// Above this area (mm²) a blind is too heavy for a standard winder; the
/// store auto-upgrades to heavy-duty unless a motor is already assigned.
const HEAVY_DUTY_AREA: u64 = 4_000_000;

/// Owner of the single mutable quote document for a session.
///
/// All structural mutations (insert/delete/clear/consolidate) and field
/// mutations funnel through this type. Operations on a missing row index
/// are silent no-ops returning false. After any operation settles, the
/// item list ends in exactly one empty row (see
/// [`consolidate_empty_rows`](Self::consolidate_empty_rows)).
#[derive(Debug)]
pub struct QuoteStore {
    document: QuoteDocument,
    initial_summary: Summary,
    product: ProductKind,
    catalog: Arc<RateCatalog>,
    id_gen: ItemIdGen,
}

impl QuoteStore {
    /// A store holding a fresh single-blank-row document.
    pub fn new(product: ProductKind, catalog: Arc<RateCatalog>) -> Self {
        let mut id_gen = ItemIdGen::new();
        let first = strategy_for(product).initial_item(id_gen.next_id());
        let document = QuoteDocument::new(first);
        let initial_summary = document.summary.clone();
        Self {
            document,
            initial_summary,
            product,
            catalog,
            id_gen,
        }
    }

    /// A store restored from a document snapshot (session restore, file
    /// load). Id issuance resumes above every id in the snapshot.
    pub fn from_document(
        document: QuoteDocument,
        product: ProductKind,
        catalog: Arc<RateCatalog>,
    ) -> Self {
        let id_gen = ItemIdGen::resuming_after(document.items.iter().map(|item| &item.id));
        let initial_summary = document.summary.clone();
        let mut store = Self {
            document,
            initial_summary,
            product,
            catalog,
            id_gen,
        };
        // A snapshot may end mid-edit; restore the trailing-row invariant.
        store.consolidate_empty_rows();
        store
    }

    pub fn product(&self) -> ProductKind {
        self.product
    }

    pub fn document(&self) -> &QuoteDocument {
        &self.document
    }

    pub fn items(&self) -> &[LineItem] {
        &self.document.items
    }

    /// Read snapshot for the notification channel and persistence layers.
    pub fn snapshot(&self) -> QuoteDocument {
        self.document.clone()
    }

    /// Replace the document with the copy produced by an orchestration
    /// pass over this store's items.
    pub fn replace_document(&mut self, document: QuoteDocument) {
        self.document = document;
    }

    /// Insert a blank row immediately after `after_index`; returns the new
    /// row's index.
    pub fn insert_row(&mut self, after_index: usize) -> Option<usize> {
        if after_index >= self.document.items.len() {
            return None;
        }
        let item = strategy_for(self.product).initial_item(self.id_gen.next_id());
        let new_index = after_index + 1;
        self.document.items.insert(new_index, item);
        debug!(new_index, "row inserted");
        Some(new_index)
    }

    /// Delete a row. The last row (when non-empty) and the sole remaining
    /// row are cleared in place instead of removed, which keeps the
    /// trailing-empty invariant without reshuffling.
    pub fn delete_row(&mut self, index: usize) -> bool {
        let len = self.document.items.len();
        let Some(item) = self.document.items.get(index) else {
            return false;
        };
        let is_last = index == len - 1;
        if (is_last && !item.is_empty()) || len == 1 {
            return self.clear_row(index);
        }
        self.document.items.remove(index);
        debug!(index, "row deleted");
        true
    }

    /// Replace a row's content with a fresh blank row, preserving its id.
    pub fn clear_row(&mut self, index: usize) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        *item = strategy_for(self.product).initial_item(item.id);
        true
    }

    /// Set a width or height cell. Invalidate the derived line price on
    /// change, auto-assign a heavy-duty winder for oversized blinds, and
    /// restore the trailing-row invariant.
    pub fn set_dimension(&mut self, index: usize, dimension: Dimension, value: Option<u32>) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        let slot = match dimension {
            Dimension::Width => &mut item.width,
            Dimension::Height => &mut item.height,
        };
        if *slot == value {
            return false;
        }
        *slot = value;
        item.line_price = None;
        if let Some(area) = item.area()
            && area > HEAVY_DUTY_AREA
            && !item.has_motor()
        {
            item.winder = Winder::HeavyDuty;
        }
        self.consolidate_empty_rows();
        true
    }

    /// Set one secondary attribute through a typed patch.
    pub fn update_property(&mut self, index: usize, property: &ItemProperty) -> bool {
        match self.document.items.get_mut(index) {
            Some(item) => property.apply(item),
            None => false,
        }
    }

    /// Set the winder value. Assigning a winder clears any motor (the two
    /// drives are mutually exclusive).
    pub fn set_winder(&mut self, index: usize, value: Winder) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        if item.winder == value {
            return false;
        }
        item.winder = value;
        if value.is_set() {
            item.motor.clear();
        }
        true
    }

    /// Set the motor value (empty clears). Assigning a motor clears any
    /// winder.
    pub fn set_motor(&mut self, index: usize, value: &str) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        if item.motor == value {
            return false;
        }
        value.clone_into(&mut item.motor);
        if !value.is_empty() {
            item.winder = Winder::None;
        }
        true
    }

    /// Advance a cyclable option column to its next value.
    pub fn cycle_option(&mut self, index: usize, field: OptionField) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        match field {
            OptionField::Over => item.over = item.over.cycled(),
            OptionField::Mount => item.mount = item.mount.cycled(),
            OptionField::ChainSide => item.chain_side = item.chain_side.cycled(),
        }
        true
    }

    /// Set the fabric type directly, invalidating the line price on
    /// change.
    pub fn set_fabric_type(&mut self, index: usize, value: Option<String>) -> bool {
        let Some(item) = self.document.items.get_mut(index) else {
            return false;
        };
        if item.fabric_type == value {
            return false;
        }
        item.fabric_type = value;
        item.line_price = None;
        true
    }

    /// Advance a row's fabric type through the catalog's type sequence,
    /// wrapping at the end. An unset (or unknown) type advances to the
    /// first entry. No-op for rows without dimensions and while the
    /// catalog has no sequence.
    pub fn cycle_fabric_type(&mut self, index: usize) -> bool {
        let next = {
            let Some(item) = self.document.items.get(index) else {
                return false;
            };
            if !item.has_dimensions() {
                return false;
            }
            let sequence = self.catalog.fabric_type_sequence();
            if sequence.is_empty() {
                return false;
            }
            let current = item
                .fabric_type
                .as_deref()
                .and_then(|t| sequence.iter().position(|code| code == t));
            let next_index = current.map_or(0, |i| (i + 1) % sequence.len());
            sequence[next_index].clone()
        };
        self.set_fabric_type(index, Some(next))
    }

    /// Advance the fabric type of every dimensioned row, using the first
    /// dimensioned row's current type as the cycle position.
    pub fn cycle_all_fabric_types(&mut self) -> bool {
        let next = {
            let sequence = self.catalog.fabric_type_sequence();
            if sequence.is_empty() {
                return false;
            }
            let Some(first) = self.document.items.iter().find(|item| item.has_dimensions())
            else {
                return false;
            };
            let current = first
                .fabric_type
                .as_deref()
                .and_then(|t| sequence.iter().position(|code| code == t));
            let next_index = current.map_or(0, |i| (i + 1) % sequence.len());
            sequence[next_index].clone()
        };
        let mut changed = false;
        for item in &mut self.document.items {
            if item.has_dimensions() && item.fabric_type.as_deref() != Some(next.as_str()) {
                item.fabric_type = Some(next.clone());
                item.line_price = None;
                changed = true;
            }
        }
        changed
    }

    /// Apply a property change to every dimensioned row.
    pub fn batch_update_property(&mut self, property: &ItemProperty) -> bool {
        let mut changed = false;
        for item in &mut self.document.items {
            if item.has_dimensions() {
                changed |= property.apply(item);
            }
        }
        changed
    }

    /// Apply a property change to every row of the given fabric type.
    pub fn batch_update_property_by_type(&mut self, fabric_type: &str, property: &ItemProperty) -> bool {
        let mut changed = false;
        for item in &mut self.document.items {
            if item.fabric_type.as_deref() == Some(fabric_type) {
                changed |= property.apply(item);
            }
        }
        changed
    }

    /// Stamp the light-filter fabric line onto an explicit row set. The
    /// fabric name carries the `L-Filter` prefix so the rows are
    /// recognizable for later removal.
    pub fn batch_update_fabric_selection(
        &mut self,
        indexes: &BTreeSet<usize>,
        fabric_name: &str,
        fabric_color: &str,
    ) -> bool {
        let name = format!("L-Filter {fabric_name}");
        let mut changed = false;
        for &index in indexes {
            let Some(item) = self.document.items.get_mut(index) else {
                continue;
            };
            if item.fabric != name {
                item.fabric.clone_from(&name);
                changed = true;
            }
            if item.color != fabric_color {
                fabric_color.clone_into(&mut item.color);
                changed = true;
            }
        }
        changed
    }

    /// Remove the light-filter fabric line from an explicit row set.
    pub fn clear_fabric_selection(&mut self, indexes: &BTreeSet<usize>) -> bool {
        let mut changed = false;
        for &index in indexes {
            let Some(item) = self.document.items.get_mut(index) else {
                continue;
            };
            if !item.fabric.is_empty() {
                item.fabric.clear();
                changed = true;
            }
            if !item.color.is_empty() {
                item.color.clear();
                changed = true;
            }
        }
        changed
    }

    /// Delete an explicit row set, highest index first so the remaining
    /// indexes stay valid during the loop, then consolidate once.
    pub fn delete_multiple_rows(&mut self, indexes: &BTreeSet<usize>) {
        for &index in indexes.iter().rev() {
            self.delete_row(index);
        }
        self.consolidate_empty_rows();
    }

    /// Restore the trailing-row invariant: collapse redundant empty rows
    /// at the tail, then append one blank row if the list no longer ends
    /// empty. Interior empty rows are left alone.
    pub fn consolidate_empty_rows(&mut self) {
        let items = &mut self.document.items;
        while items.len() > 1 {
            let tail_empty = items[items.len() - 1].is_empty();
            let before_tail_empty = items[items.len() - 2].is_empty();
            if tail_empty && before_tail_empty {
                items.pop();
            } else {
                break;
            }
        }
        if items.last().is_some_and(|item| !item.is_empty()) {
            let item = strategy_for(self.product).initial_item(self.id_gen.next_id());
            self.document.items.push(item);
        }
    }

    /// Overwrite one accessory aggregate line.
    pub fn set_accessory_line(&mut self, kind: AccessoryKind, line: AccessoryLine) {
        let accessories = &mut self.document.summary.accessories;
        match kind {
            AccessoryKind::Winder => accessories.winder = line,
            AccessoryKind::Motor => accessories.motor = line,
            AccessoryKind::Remote => accessories.remote = line,
            AccessoryKind::Charger => accessories.charger = line,
            AccessoryKind::Cord => accessories.cord3m = line,
            AccessoryKind::Dual => accessories.dual = line,
        }
    }

    /// Replace the item list with a single fresh blank row and restore the
    /// creation-time summary.
    pub fn reset(&mut self) {
        let first = strategy_for(self.product).initial_item(self.id_gen.next_id());
        self.document.items = vec![first];
        self.document.summary = self.initial_summary.clone();
        debug!("quote document reset");
    }

    /// True when the quote holds anything worth keeping: more than one
    /// row, or a sole row with a dimension set.
    pub fn has_data(&self) -> bool {
        let items = &self.document.items;
        items.len() > 1 || items.first().is_some_and(LineItem::has_dimensions)
    }
}
