//! End-to-end flow tests: quick-quote editing, dual/chain, and drive
//! accessories against a small in-memory rate catalog.

use std::collections::BTreeMap;
use std::sync::Arc;

use quote_catalog::{AccessoryRate, RateCatalog, RateDocument};
use quote_model::{AccessoryKind, Dimension, DualBracket, RateMatrix, Winder};
use quote_pricing::ProductKind;
use quote_session::{Confirmation, DriveTarget, Session, Severity};
use quote_store::{CellRef, Column, CounterAccessory, DriveAccessoryMode, DualChainMode};

fn test_catalog() -> Arc<RateCatalog> {
    let matrix = RateMatrix {
        widths: vec![1000, 2000, 3000],
        drops: vec![1000, 2000, 3000],
        prices: vec![
            vec![10.0, 20.0, 30.0],
            vec![40.0, 50.0, 60.0],
            vec![70.0, 80.0, 90.0],
        ],
    };
    let mut matrices = BTreeMap::new();
    matrices.insert("BO".to_string(), matrix);

    let mut accessories = BTreeMap::new();
    for (key, price) in [
        ("comboBracket", 25.0),
        ("winderHD", 30.0),
        ("motorStandard", 120.0),
        ("remoteStandard", 45.0),
        ("chargerStandard", 25.0),
        ("cord3m", 15.0),
    ] {
        accessories.insert(key.to_string(), AccessoryRate { price });
    }

    Arc::new(RateCatalog::with_document(RateDocument {
        matrices,
        accessories,
        fabric_type_sequence: vec!["BO".to_string(), "SN".to_string()],
    }))
}

fn new_session() -> Session {
    Session::new(ProductKind::RollerBlind, test_catalog())
}

#[test]
fn committing_a_valid_width_updates_the_row() {
    let mut session = new_session();
    session.view_mut().append_input_digit('1');
    session.view_mut().append_input_digit('5');
    session.view_mut().append_input_digit('0');
    session.view_mut().append_input_digit('0');

    assert_eq!(session.commit_input(), None);
    assert_eq!(session.store().items()[0].width, Some(1500));
    assert!(session.view().sum_outdated);
    assert_eq!(session.view().input_value, "");
}

#[test]
fn out_of_range_values_are_rejected_without_mutation() {
    let mut session = new_session();
    session.view_mut().set_input_value(Some(200));

    let notice = session.commit_input().expect("rejection");
    assert_eq!(notice.message, "Width must be between 250 and 3300.");
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(session.store().items()[0].width, None);
    assert!(!session.view().sum_outdated);
    assert_eq!(session.view().input_value, "");
}

#[test]
fn height_rejection_uses_the_height_rule() {
    let mut session = new_session();
    session.view_mut().set_active_cell(0, Column::Height);
    session.view_mut().set_input_value(Some(250));

    let notice = session.commit_input().expect("rejection");
    assert_eq!(notice.message, "Height must be between 300 and 3300.");
}

#[test]
fn an_empty_buffer_clears_the_cell() {
    let mut session = new_session();
    session.view_mut().set_input_value(Some(1500));
    session.commit_input();
    assert_eq!(session.store().items()[0].width, Some(1500));

    session.view_mut().clear_input_value();
    assert_eq!(session.commit_input(), None);
    assert_eq!(session.store().items()[0].width, None);
}

#[test]
fn insert_is_refused_next_to_the_trailing_blank() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    // [data, blank]: inserting after row 0 would land before a blank.
    assert!(!session.insert_row(0));
    // Inserting after the last row is never allowed.
    assert!(!session.insert_row(1));

    session.store_mut().set_dimension(1, Dimension::Width, Some(2000));
    // [data, data, blank]: a real gap exists now.
    assert!(session.insert_row(0));
    assert_eq!(session.store().items().len(), 4);
    assert!(session.store().items()[1].is_empty());
}

#[test]
fn the_trailing_blank_row_is_not_selectable() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));

    assert!(!session.toggle_row_selection(1));
    assert_eq!(session.view().selected_row(), None);

    assert!(session.toggle_row_selection(0));
    assert_eq!(session.view().selected_row(), Some(0));
}

#[test]
fn delete_selected_removes_the_single_selection() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.store_mut().set_dimension(1, Dimension::Width, Some(2000));
    session.toggle_row_selection(0);

    assert_eq!(session.delete_selected(), None);
    assert_eq!(session.store().items().len(), 2);
    assert_eq!(session.store().items()[0].width, Some(2000));
    assert_eq!(session.view().selected_row(), None);
    assert!(session.view().sum_outdated);
}

#[test]
fn multi_delete_requires_a_non_empty_set() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.store_mut().set_dimension(1, Dimension::Width, Some(2000));
    session.toggle_multi_delete_mode();

    let notice = session.delete_selected().expect("refusal");
    assert_eq!(notice.message, "No rows selected for deletion.");
    assert!(session.view().is_multi_delete_mode());

    session.toggle_row_selection(0);
    session.toggle_row_selection(1);
    assert_eq!(session.delete_selected(), None);
    assert!(!session.view().is_multi_delete_mode());
    assert_eq!(session.store().items().len(), 1);
    assert!(session.store().items()[0].is_empty());
}

#[test]
fn recalculate_prices_the_quote_and_clears_the_flag() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1500));
    session.store_mut().set_dimension(0, Dimension::Height, Some(1500));
    session.store_mut().set_fabric_type(0, Some("BO".to_string()));
    session.view_mut().set_sum_outdated(true);

    assert_eq!(session.recalculate(), None);
    assert_eq!(session.store().items()[0].line_price, Some(50.0));
    assert_eq!(session.store().document().summary.total_sum, Some(50.0));
    assert!(!session.view().sum_outdated);
}

#[test]
fn recalculate_focuses_the_offending_cell() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(3200));
    session.store_mut().set_dimension(0, Dimension::Height, Some(1000));
    session.store_mut().set_fabric_type(0, Some("BO".to_string()));

    let error = session.recalculate().expect("width overrun");
    assert_eq!(
        error.message,
        "Row 1: Width 3200 exceeds the maximum width in the price matrix."
    );
    assert_eq!(session.view().active_cell.row, 0);
    assert_eq!(session.view().active_cell.column, Column::Width);
    assert_eq!(session.view().input_mode, Dimension::Width);
}

#[test]
fn a_failed_recalculation_keeps_the_sum_flagged_as_stale() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(3200));
    session.store_mut().set_dimension(0, Dimension::Height, Some(1000));
    session.store_mut().set_fabric_type(0, Some("BO".to_string()));
    session.view_mut().set_sum_outdated(true);

    assert!(session.recalculate().is_some());
    assert!(session.view().sum_outdated);

    // Fixing the width lets the next pass clear the flag.
    session.store_mut().set_dimension(0, Dimension::Width, Some(1500));
    assert_eq!(session.recalculate(), None);
    assert!(!session.view().sum_outdated);
}

#[test]
fn leaving_dual_mode_with_an_odd_count_is_refused() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    assert_eq!(session.toggle_dual_chain_mode(DualChainMode::Dual), None);
    session.toggle_dual(0);

    let notice = session
        .toggle_dual_chain_mode(DualChainMode::Dual)
        .expect("odd count");
    assert_eq!(
        notice.message,
        "Dual brackets are priced in pairs; the D count must be even."
    );
    assert_eq!(session.view().dual_chain_mode, Some(DualChainMode::Dual));
    assert_eq!(session.view().dual_price, None);
}

#[test]
fn leaving_dual_mode_with_an_even_count_writes_the_summary_line() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.store_mut().set_dimension(1, Dimension::Width, Some(2000));
    session.toggle_dual_chain_mode(DualChainMode::Dual);
    session.toggle_dual(0);
    session.toggle_dual(1);
    assert_eq!(session.store().items()[0].dual, DualBracket::Dual);

    assert_eq!(session.toggle_dual_chain_mode(DualChainMode::Dual), None);
    assert_eq!(session.view().dual_chain_mode, None);
    // One pair at the fixed pair rate.
    assert_eq!(session.view().dual_price, Some(10.0));
    let line = session.store().document().summary.accessories.dual;
    assert_eq!(line.count, 2);
    assert_eq!(line.price, 10.0);
    assert!(session.view().sum_outdated);
}

#[test]
fn entering_dual_mode_discards_the_previous_dual_price() {
    let mut session = new_session();
    session.view_mut().set_dual_price(Some(10.0));

    session.toggle_dual_chain_mode(DualChainMode::Dual);
    assert_eq!(session.view().dual_price, None);
}

#[test]
fn leaving_a_dual_chain_mode_abandons_the_input_and_target_cell() {
    let mut session = new_session();
    session.toggle_dual_chain_mode(DualChainMode::Chain);
    session.view_mut().set_dual_chain_input("1200");
    session.view_mut().set_target_cell(Some(CellRef {
        row: 0,
        column: Column::Chain,
    }));

    assert_eq!(session.toggle_dual_chain_mode(DualChainMode::Chain), None);
    assert_eq!(session.view().dual_chain_mode, None);
    assert_eq!(session.view().dual_chain_input, "");
    assert_eq!(session.view().target_cell, None);
}

#[test]
fn chain_lengths_must_be_positive_integers() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));

    session.view_mut().set_dual_chain_input("1200");
    assert_eq!(session.commit_chain_length(0), None);
    assert_eq!(session.store().items()[0].chain, Some(1200));

    session.view_mut().set_dual_chain_input("0");
    let notice = session.commit_chain_length(0).expect("zero refused");
    assert_eq!(notice.message, "Chain length must be a positive whole number.");
    assert_eq!(session.store().items()[0].chain, Some(1200));

    session.view_mut().set_dual_chain_input("12.5");
    assert!(session.commit_chain_length(0).is_some());

    session.view_mut().set_dual_chain_input("");
    assert_eq!(session.commit_chain_length(0), None);
    assert_eq!(session.store().items()[0].chain, None);
}

#[test]
fn drive_toggles_defer_when_the_opposing_drive_is_set() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    assert_eq!(session.toggle_motor(0, "STD"), None);
    assert_eq!(session.store().items()[0].motor, "STD");

    let pending = session.toggle_winder(0).expect("deferred");
    assert_eq!(
        pending,
        Confirmation::ReplaceDrive {
            row: 0,
            target: DriveTarget::Winder,
        }
    );
    // Nothing changed until the confirmation comes back.
    assert_eq!(session.store().items()[0].winder, Winder::None);

    session.confirm(&pending);
    assert_eq!(session.store().items()[0].winder, Winder::HeavyDuty);
    assert_eq!(session.store().items()[0].motor, "");

    // And the mirror case, replacing a winder with a motor.
    let pending = session.toggle_motor(0, "STD").expect("deferred");
    session.confirm(&pending);
    assert_eq!(session.store().items()[0].motor, "STD");
    assert_eq!(session.store().items()[0].winder, Winder::None);
}

#[test]
fn counter_decrement_to_zero_defers_on_a_motorized_quote() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.toggle_motor(0, "STD");
    session.increment_drive_count(CounterAccessory::Remote);

    let pending = session
        .decrement_drive_count(CounterAccessory::Remote)
        .expect("deferred");
    assert_eq!(
        pending,
        Confirmation::ZeroCount {
            accessory: CounterAccessory::Remote,
        }
    );
    assert_eq!(session.view().drive_count(CounterAccessory::Remote), 1);

    session.confirm(&pending);
    assert_eq!(session.view().drive_count(CounterAccessory::Remote), 0);

    // Without a motor the decrement applies directly.
    session.toggle_motor(0, "STD");
    session.increment_drive_count(CounterAccessory::Cord);
    assert_eq!(session.decrement_drive_count(CounterAccessory::Cord), None);
    assert_eq!(session.view().drive_count(CounterAccessory::Cord), 0);
    assert_eq!(session.decrement_drive_count(CounterAccessory::Cord), None);
}

#[test]
fn the_cord_counter_drops_to_zero_without_confirmation() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.toggle_motor(0, "STD");
    session.increment_drive_count(CounterAccessory::Cord);

    // The cord is not tied to the motor, so no deferral even here.
    assert_eq!(session.decrement_drive_count(CounterAccessory::Cord), None);
    assert_eq!(session.view().drive_count(CounterAccessory::Cord), 0);
}

#[test]
fn entering_remote_mode_seeds_one_unit_for_motorized_quotes() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.toggle_motor(0, "STD");

    session.toggle_drive_mode(DriveAccessoryMode::Remote);
    assert_eq!(session.view().drive_count(CounterAccessory::Remote), 1);

    // A second entry does not double-seed.
    session.toggle_drive_mode(DriveAccessoryMode::Remote);
    session.toggle_drive_mode(DriveAccessoryMode::Remote);
    assert_eq!(session.view().drive_count(CounterAccessory::Remote), 1);
}

#[test]
fn leaving_a_drive_mode_recomputes_every_accessory_total() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.store_mut().set_dimension(1, Dimension::Width, Some(2000));
    session.toggle_winder(0);
    session.toggle_motor(1, "STD");
    session.increment_drive_count(CounterAccessory::Remote);
    session.increment_drive_count(CounterAccessory::Remote);

    session.toggle_drive_mode(DriveAccessoryMode::Winder);
    session.toggle_drive_mode(DriveAccessoryMode::Winder);

    let accessories = &session.store().document().summary.accessories;
    assert_eq!(accessories.winder.count, 1);
    assert_eq!(accessories.winder.price, 30.0);
    assert_eq!(accessories.motor.price, 120.0);
    assert_eq!(accessories.remote.count, 2);
    assert_eq!(accessories.remote.price, 90.0);
    assert_eq!(accessories.charger.price, 0.0);
    assert_eq!(accessories.cord3m.price, 0.0);
    assert_eq!(session.view().drive_totals.grand_total, Some(240.0));
    assert!(session.view().sum_outdated);

    // The next orchestration pass folds the lines into the grand total.
    session.store_mut().set_dimension(0, Dimension::Height, Some(1000));
    session.store_mut().set_fabric_type(0, Some("BO".to_string()));
    assert_eq!(session.recalculate(), None);
    assert_eq!(
        session.store().document().summary.total_sum,
        Some(10.0 + 240.0)
    );
}

#[test]
fn summary_display_mirrors_drive_totals_and_dual_price() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.toggle_winder(0);
    session.toggle_drive_mode(DriveAccessoryMode::Winder);
    session.toggle_drive_mode(DriveAccessoryMode::Winder);
    session.view_mut().set_dual_price(Some(10.0));

    session.refresh_summary_display();
    assert_eq!(session.view().summary_mirror.winder, Some(30.0));
    assert_eq!(session.view().summary_mirror.accessories_total, Some(40.0));
}

#[test]
fn reset_returns_the_session_to_its_initial_state() {
    let mut session = new_session();
    session.store_mut().set_dimension(0, Dimension::Width, Some(1000));
    session.toggle_row_selection(0);
    session.increment_drive_count(CounterAccessory::Cord);

    session.reset();
    assert_eq!(session.store().items().len(), 1);
    assert!(session.store().items()[0].is_empty());
    assert_eq!(session.view().selected_row(), None);
    assert_eq!(session.view().drive_count(CounterAccessory::Cord), 0);
}
