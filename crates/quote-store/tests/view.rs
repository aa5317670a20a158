//! View-state tests: selection modes, input buffer, counters, mirrors.

use quote_model::Dimension;
use quote_store::{CellRef, Column, CounterAccessory, DriveAccessoryMode, ViewKind, ViewState};

#[test]
fn starts_on_the_quick_quote_grid() {
    let view = ViewState::new();
    assert_eq!(view.current_view, ViewKind::QuickQuote);
    assert_eq!(
        view.active_cell,
        CellRef {
            row: 0,
            column: Column::Width
        }
    );
    assert_eq!(view.input_mode, Dimension::Width);
    assert_eq!(view.selected_row(), None);
    assert!(!view.is_multi_delete_mode());
}

#[test]
fn focusing_a_dimension_cell_switches_the_input_mode() {
    let mut view = ViewState::new();
    view.set_active_cell(2, Column::Height);
    assert_eq!(view.input_mode, Dimension::Height);

    // Non-dimension cells leave the interpretation mode alone.
    view.set_active_cell(2, Column::Price);
    assert_eq!(view.input_mode, Dimension::Height);

    view.set_active_cell(0, Column::Width);
    assert_eq!(view.input_mode, Dimension::Width);
}

#[test]
fn input_buffer_accepts_digits_only() {
    let mut view = ViewState::new();
    view.append_input_digit('1');
    view.append_input_digit('x');
    view.append_input_digit('2');
    assert_eq!(view.input_value, "12");

    view.delete_last_input_char();
    assert_eq!(view.input_value, "1");
    view.delete_last_input_char();
    view.delete_last_input_char();
    assert_eq!(view.input_value, "");

    view.set_input_value(Some(1500));
    assert_eq!(view.input_value, "1500");
    view.set_input_value(None);
    assert_eq!(view.input_value, "");
}

#[test]
fn single_selection_toggles() {
    let mut view = ViewState::new();
    view.toggle_row_selection(3);
    assert_eq!(view.selected_row(), Some(3));
    view.toggle_row_selection(3);
    assert_eq!(view.selected_row(), None);

    view.toggle_row_selection(1);
    view.toggle_row_selection(4);
    assert_eq!(view.selected_row(), Some(4));
    view.clear_row_selection();
    assert_eq!(view.selected_row(), None);
}

#[test]
fn entering_multi_delete_consumes_the_single_selection() {
    let mut view = ViewState::new();
    view.toggle_row_selection(2);

    assert!(view.toggle_multi_delete_mode());
    assert!(view.is_multi_delete_mode());
    assert_eq!(view.selected_row(), None);
    assert_eq!(
        view.multi_delete_rows().map(|rows| rows.contains(&2)),
        Some(true)
    );

    view.toggle_multi_delete_row(5);
    view.toggle_multi_delete_row(2);
    let rows: Vec<usize> = view
        .multi_delete_rows()
        .expect("multi mode")
        .iter()
        .copied()
        .collect();
    assert_eq!(rows, vec![5]);

    // Single-selection toggles are ignored while the mode is active.
    view.toggle_row_selection(1);
    assert_eq!(view.selected_row(), None);

    assert!(!view.toggle_multi_delete_mode());
    assert!(!view.is_multi_delete_mode());
    assert_eq!(view.multi_delete_rows(), None);
    assert_eq!(view.selected_row(), None);
}

#[test]
fn multi_delete_row_toggle_is_inert_in_single_mode() {
    let mut view = ViewState::new();
    view.toggle_multi_delete_row(3);
    assert_eq!(view.multi_delete_rows(), None);
    assert_eq!(view.selected_row(), None);
}

#[test]
fn light_filter_row_tracking() {
    let mut view = ViewState::new();
    view.toggle_lf_selection(0);
    view.toggle_lf_selection(2);
    view.toggle_lf_selection(0);
    assert_eq!(view.lf_selected_rows().len(), 1);
    assert!(view.lf_selected_rows().contains(&2));

    view.add_lf_modified_rows([0, 2]);
    assert!(view.has_lf_modified_rows());
    view.remove_lf_modified_rows(&[0usize, 2]);
    assert!(!view.has_lf_modified_rows());

    view.clear_lf_selection();
    assert!(view.lf_selected_rows().is_empty());
}

#[test]
fn drive_counters_are_per_accessory() {
    let mut view = ViewState::new();
    assert_eq!(view.drive_count(CounterAccessory::Remote), 0);

    view.set_drive_count(CounterAccessory::Remote, 2);
    view.set_drive_count(CounterAccessory::Cord, 1);
    assert_eq!(view.drive_count(CounterAccessory::Remote), 2);
    assert_eq!(view.drive_count(CounterAccessory::Charger), 0);
    assert_eq!(view.drive_count(CounterAccessory::Cord), 1);
}

#[test]
fn summary_mirror_copies_drive_totals_and_sums_with_dual() {
    let mut view = ViewState::new();
    view.set_drive_total(DriveAccessoryMode::Winder, Some(60.0));
    view.set_drive_total(DriveAccessoryMode::Motor, Some(240.0));
    view.set_drive_total(DriveAccessoryMode::Remote, Some(90.0));
    view.set_drive_grand_total(Some(390.0));
    view.set_dual_price(Some(20.0));

    view.mirror_drive_totals();
    view.refresh_summary_accessories_total();

    assert_eq!(view.summary_mirror.winder, Some(60.0));
    assert_eq!(view.summary_mirror.motor, Some(240.0));
    assert_eq!(view.summary_mirror.remote, Some(90.0));
    // Charger and cord never ran; they contribute zero.
    assert_eq!(view.summary_mirror.charger, None);
    assert_eq!(view.summary_mirror.accessories_total, Some(410.0));
}

#[test]
fn reset_drops_modes_selections_and_counters() {
    let mut view = ViewState::new();
    view.set_current_view(ViewKind::DetailConfig);
    view.toggle_row_selection(1);
    view.set_drive_count(CounterAccessory::Remote, 3);
    view.set_dual_price(Some(20.0));
    view.set_sum_outdated(true);
    view.append_input_digit('9');

    view.reset();
    assert_eq!(view.current_view, ViewKind::QuickQuote);
    assert_eq!(view.selected_row(), None);
    assert_eq!(view.drive_count(CounterAccessory::Remote), 0);
    assert_eq!(view.dual_price, None);
    assert!(!view.sum_outdated);
    assert_eq!(view.input_value, "");
}
