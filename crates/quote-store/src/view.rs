//! Transient UI/view state for a quoting session.
//!
//! Nothing here is pricing data: rows are referenced by index only, mode
//! flags are closed enums with "no active mode" represented as `None`, and
//! the counters floor at zero. The whole state serializes so the
//! notification channel can hand renderers a read snapshot.

use std::collections::BTreeSet;

use serde::Serialize;

use quote_model::Dimension;

/// Top-level screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    #[default]
    QuickQuote,
    DetailConfig,
}

/// Left-panel tab on the detail-config screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Location,
    Fabric,
    Options,
    Drive,
    DualChain,
}

/// A table column, as referenced by the active cell and the per-tab
/// visible-column sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    Sequence,
    Width,
    Height,
    FabricType,
    Price,
    Location,
    Fabric,
    Color,
    Over,
    Mount,
    ChainSide,
    Dual,
    Chain,
    Winder,
    Motor,
}

/// A cell address: row index plus column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellRef {
    pub row: usize,
    pub column: Column,
}

/// Row selection. Single selection and the multi-select-for-deletion set
/// are mutually exclusive by construction: entering multi-delete mode
/// consumes the single selection, leaving it clears the set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Selection {
    Single(Option<usize>),
    MultiDelete(BTreeSet<usize>),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Single(None)
    }
}

/// Active editing mode on the location/fabric/options tabs. At most one
/// mode per feature area is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EditMode {
    Location,
    FabricSelect,
    FabricDeleteSelect,
    Options,
}

/// Active mode on the dual/chain tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DualChainMode {
    Dual,
    Chain,
}

/// Active mode on the drive/accessories tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DriveAccessoryMode {
    Winder,
    Motor,
    Remote,
    Charger,
    Cord,
}

/// The accessories whose counts are tracked in view state rather than
/// derived from line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CounterAccessory {
    Remote,
    Charger,
    Cord,
}

/// Working accessory totals on the drive tab, filled in when a drive mode
/// is exited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveTotals {
    pub winder: Option<f64>,
    pub motor: Option<f64>,
    pub remote: Option<f64>,
    pub charger: Option<f64>,
    pub cord: Option<f64>,
    pub grand_total: Option<f64>,
}

/// Display values mirrored onto the summary tab from the drive totals and
/// the dual price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMirror {
    pub winder: Option<f64>,
    pub motor: Option<f64>,
    pub remote: Option<f64>,
    pub charger: Option<f64>,
    pub cord: Option<f64>,
    pub accessories_total: Option<f64>,
}

/// All transient interaction state for one session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub current_view: ViewKind,
    pub active_tab: Tab,
    pub visible_columns: Vec<Column>,
    pub active_cell: CellRef,
    pub input_value: String,
    pub input_mode: Dimension,
    selection: Selection,
    pub sum_outdated: bool,
    pub target_cell: Option<CellRef>,
    pub active_edit_mode: Option<EditMode>,
    pub location_input: String,
    pub dual_chain_mode: Option<DualChainMode>,
    pub dual_chain_input: String,
    pub dual_price: Option<f64>,
    pub drive_mode: Option<DriveAccessoryMode>,
    remote_count: u32,
    charger_count: u32,
    cord_count: u32,
    pub drive_totals: DriveTotals,
    pub summary_mirror: SummaryMirror,
    lf_selected: BTreeSet<usize>,
    lf_modified: BTreeSet<usize>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_view: ViewKind::QuickQuote,
            active_tab: Tab::Location,
            visible_columns: vec![
                Column::Sequence,
                Column::Width,
                Column::Height,
                Column::FabricType,
                Column::Price,
            ],
            active_cell: CellRef {
                row: 0,
                column: Column::Width,
            },
            input_value: String::new(),
            input_mode: Dimension::Width,
            selection: Selection::default(),
            sum_outdated: false,
            target_cell: None,
            active_edit_mode: None,
            location_input: String::new(),
            dual_chain_mode: None,
            dual_chain_input: String::new(),
            dual_price: None,
            drive_mode: None,
            remote_count: 0,
            charger_count: 0,
            cord_count: 0,
            drive_totals: DriveTotals::default(),
            summary_mirror: SummaryMirror::default(),
            lf_selected: BTreeSet::new(),
            lf_modified: BTreeSet::new(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the initial state, dropping every mode, selection, and
    /// counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // --- active cell & input buffer ---

    /// Focus a cell. Width/height cells also switch the numeric input
    /// buffer's interpretation mode.
    pub fn set_active_cell(&mut self, row: usize, column: Column) {
        self.active_cell = CellRef { row, column };
        match column {
            Column::Width => self.input_mode = Dimension::Width,
            Column::Height => self.input_mode = Dimension::Height,
            _ => {}
        }
    }

    pub fn set_input_value(&mut self, value: Option<u32>) {
        self.input_value = value.map(|v| v.to_string()).unwrap_or_default();
    }

    pub fn append_input_digit(&mut self, digit: char) {
        if digit.is_ascii_digit() {
            self.input_value.push(digit);
        }
    }

    pub fn delete_last_input_char(&mut self) {
        self.input_value.pop();
    }

    pub fn clear_input_value(&mut self) {
        self.input_value.clear();
    }

    // --- selection ---

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_row(&self) -> Option<usize> {
        match &self.selection {
            Selection::Single(row) => *row,
            Selection::MultiDelete(_) => None,
        }
    }

    pub fn is_multi_delete_mode(&self) -> bool {
        matches!(self.selection, Selection::MultiDelete(_))
    }

    pub fn multi_delete_rows(&self) -> Option<&BTreeSet<usize>> {
        match &self.selection {
            Selection::MultiDelete(rows) => Some(rows),
            Selection::Single(_) => None,
        }
    }

    /// Toggle the single row selection. Ignored while multi-delete mode is
    /// active.
    pub fn toggle_row_selection(&mut self, row: usize) {
        if let Selection::Single(current) = &mut self.selection {
            *current = if *current == Some(row) { None } else { Some(row) };
        }
    }

    pub fn clear_row_selection(&mut self) {
        if let Selection::Single(current) = &mut self.selection {
            *current = None;
        }
    }

    /// Toggle multi-delete mode; returns true when the toggle entered the
    /// mode. Entering seeds the set with the current single selection and
    /// clears it; leaving drops the set.
    pub fn toggle_multi_delete_mode(&mut self) -> bool {
        match &self.selection {
            Selection::Single(selected) => {
                let mut rows = BTreeSet::new();
                if let Some(row) = selected {
                    rows.insert(*row);
                }
                self.selection = Selection::MultiDelete(rows);
                true
            }
            Selection::MultiDelete(_) => {
                self.selection = Selection::Single(None);
                false
            }
        }
    }

    /// Toggle a row's membership in the multi-delete set. Ignored outside
    /// multi-delete mode.
    pub fn toggle_multi_delete_row(&mut self, row: usize) {
        if let Selection::MultiDelete(rows) = &mut self.selection {
            if !rows.remove(&row) {
                rows.insert(row);
            }
        }
    }

    // --- view/tab plumbing ---

    pub fn set_current_view(&mut self, view: ViewKind) {
        self.current_view = view;
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_visible_columns(&mut self, columns: Vec<Column>) {
        self.visible_columns = columns;
    }

    pub fn set_sum_outdated(&mut self, outdated: bool) {
        self.sum_outdated = outdated;
    }

    pub fn set_target_cell(&mut self, cell: Option<CellRef>) {
        self.target_cell = cell;
    }

    pub fn set_active_edit_mode(&mut self, mode: Option<EditMode>) {
        self.active_edit_mode = mode;
    }

    pub fn set_location_input(&mut self, value: &str) {
        value.clone_into(&mut self.location_input);
    }

    // --- light-filter row tracking ---

    pub fn lf_selected_rows(&self) -> &BTreeSet<usize> {
        &self.lf_selected
    }

    pub fn toggle_lf_selection(&mut self, row: usize) {
        if !self.lf_selected.remove(&row) {
            self.lf_selected.insert(row);
        }
    }

    pub fn clear_lf_selection(&mut self) {
        self.lf_selected.clear();
    }

    pub fn lf_modified_rows(&self) -> &BTreeSet<usize> {
        &self.lf_modified
    }

    pub fn add_lf_modified_rows(&mut self, rows: impl IntoIterator<Item = usize>) {
        self.lf_modified.extend(rows);
    }

    pub fn remove_lf_modified_rows<'a>(&mut self, rows: impl IntoIterator<Item = &'a usize>) {
        for row in rows {
            self.lf_modified.remove(row);
        }
    }

    pub fn has_lf_modified_rows(&self) -> bool {
        !self.lf_modified.is_empty()
    }

    // --- dual/chain tab ---

    pub fn set_dual_chain_mode(&mut self, mode: Option<DualChainMode>) {
        self.dual_chain_mode = mode;
    }

    pub fn set_dual_chain_input(&mut self, value: &str) {
        value.clone_into(&mut self.dual_chain_input);
    }

    pub fn clear_dual_chain_input(&mut self) {
        self.dual_chain_input.clear();
    }

    pub fn set_dual_price(&mut self, price: Option<f64>) {
        self.dual_price = price;
    }

    // --- drive/accessories tab ---

    pub fn set_drive_mode(&mut self, mode: Option<DriveAccessoryMode>) {
        self.drive_mode = mode;
    }

    pub fn drive_count(&self, accessory: CounterAccessory) -> u32 {
        match accessory {
            CounterAccessory::Remote => self.remote_count,
            CounterAccessory::Charger => self.charger_count,
            CounterAccessory::Cord => self.cord_count,
        }
    }

    /// Counters floor at zero; the u32 representation makes that a type
    /// guarantee, decrementing callers saturate.
    pub fn set_drive_count(&mut self, accessory: CounterAccessory, count: u32) {
        match accessory {
            CounterAccessory::Remote => self.remote_count = count,
            CounterAccessory::Charger => self.charger_count = count,
            CounterAccessory::Cord => self.cord_count = count,
        }
    }

    pub fn set_drive_total(&mut self, accessory: DriveAccessoryMode, price: Option<f64>) {
        match accessory {
            DriveAccessoryMode::Winder => self.drive_totals.winder = price,
            DriveAccessoryMode::Motor => self.drive_totals.motor = price,
            DriveAccessoryMode::Remote => self.drive_totals.remote = price,
            DriveAccessoryMode::Charger => self.drive_totals.charger = price,
            DriveAccessoryMode::Cord => self.drive_totals.cord = price,
        }
    }

    pub fn set_drive_grand_total(&mut self, price: Option<f64>) {
        self.drive_totals.grand_total = price;
    }

    // --- summary tab mirror ---

    /// Copy the drive totals onto the summary display values, done when
    /// the summary tab activates.
    pub fn mirror_drive_totals(&mut self) {
        self.summary_mirror.winder = self.drive_totals.winder;
        self.summary_mirror.motor = self.drive_totals.motor;
        self.summary_mirror.remote = self.drive_totals.remote;
        self.summary_mirror.charger = self.drive_totals.charger;
        self.summary_mirror.cord = self.drive_totals.cord;
    }

    /// Recompute the displayed accessories total from the mirrored values
    /// and the dual price, treating unset as zero.
    pub fn refresh_summary_accessories_total(&mut self) {
        let mirror = &self.summary_mirror;
        let total = self.dual_price.unwrap_or(0.0)
            + mirror.winder.unwrap_or(0.0)
            + mirror.motor.unwrap_or(0.0)
            + mirror.remote.unwrap_or(0.0)
            + mirror.charger.unwrap_or(0.0)
            + mirror.cord.unwrap_or(0.0);
        self.summary_mirror.accessories_total = Some(total);
    }
}
