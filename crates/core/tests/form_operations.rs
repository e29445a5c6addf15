//! Integration tests for the check-in form state machine.
//!
//! Exercises the operation set end to end: id assignment, field update
//! isolation, and the minimum-count guards on both collection levels.

use tally::{
    form::{CheckInForm, Entry, EntryField, FormError, StoreField, StoreRow},
    notice::{Notice, Severity},
};

fn entry_ids(form: &CheckInForm) -> Vec<u32> {
    form.entries().iter().map(Entry::id).collect()
}

fn store_ids(form: &CheckInForm, entry_id: u32) -> Vec<u32> {
    form.entry(entry_id)
        .map(|entry| entry.stores().iter().map(StoreRow::id).collect())
        .unwrap_or_default()
}

#[test]
fn entry_count_never_drops_below_one() {
    let mut form = CheckInForm::new();
    form.add_entry();
    form.add_entry();

    // remove everything we can, then keep trying
    let mut warnings = 0;
    for entry_id in [1, 2, 3, 3] {
        if form.remove_entry(entry_id).is_err() {
            warnings += 1;
        }
    }

    assert_eq!(form.len(), 1);
    assert_eq!(entry_ids(&form), vec![3]);
    assert_eq!(warnings, 2, "only the guarded calls should warn");
}

#[test]
fn store_count_never_drops_below_one_per_entry() {
    let mut form = CheckInForm::new();
    form.add_store(1);
    form.add_store(1);

    let mut warnings = 0;
    for store_id in [1, 2, 3, 3] {
        if form.remove_store(1, store_id).is_err() {
            warnings += 1;
        }
    }

    assert_eq!(store_ids(&form, 1), vec![3]);
    assert_eq!(warnings, 2, "only the guarded calls should warn");
}

#[test]
fn new_entry_id_is_max_plus_one() {
    let mut form = CheckInForm::new();
    form.add_entry();
    form.add_entry();
    form.add_entry();

    // leave ids {1, 3, 4}
    assert!(form.remove_entry(2).is_ok());
    assert_eq!(entry_ids(&form), vec![1, 3, 4]);

    assert_eq!(form.add_entry(), 5);
}

#[test]
fn new_entry_id_on_empty_form_is_one() {
    let mut form = CheckInForm::empty();

    assert_eq!(form.add_entry(), 1);
}

#[test]
fn usage_update_touches_nothing_else() {
    let mut form = CheckInForm::new();
    form.add_entry();
    form.update_entry(2, EntryField::ProductName("Product D".to_string()));
    form.update_store(2, 1, StoreField::Quantity(9));

    let before = form.clone();

    form.update_entry(2, EntryField::Usage("x".to_string()));

    // the targeted entry changed only in its usage field
    let updated = form.entry(2).expect("entry 2 exists");
    let original = before.entry(2).expect("entry 2 exists");
    assert_eq!(updated.usage(), "x");
    assert_eq!(updated.product_name(), original.product_name());
    assert_eq!(updated.reason(), original.reason());
    assert_eq!(updated.stores(), original.stores());
    assert_eq!(
        updated.serial_numbers_added(),
        original.serial_numbers_added()
    );

    // every other entry is structurally unchanged
    assert_eq!(form.entry(1), before.entry(1));
}

#[test]
fn guard_rejections_surface_as_warnings() {
    let mut form = CheckInForm::new();

    let error = form.remove_entry(1).expect_err("removal must be rejected");
    let notice = Notice::from_form_error(&error);

    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(notice.title, "Action Not Allowed");

    let error = form
        .remove_store(1, 1)
        .expect_err("removal must be rejected");
    let notice = Notice::from_form_error(&error);

    assert_eq!(notice.severity, Severity::Warning);
    assert!(notice.description.contains("at least one store"));
}

#[test]
fn store_editing_scenario_end_to_end() {
    // Start with one entry (id 1) holding one store row (id 1).
    let mut form = CheckInForm::new();
    assert_eq!(store_ids(&form, 1), vec![1]);

    // Add a second store row.
    assert_eq!(form.add_store(1), Some(2));
    assert_eq!(store_ids(&form, 1), vec![1, 2]);

    // Remove the first row; the second remains.
    assert!(form.remove_store(1, 1).is_ok());
    assert_eq!(store_ids(&form, 1), vec![2]);

    // Removing the last remaining row is rejected and changes nothing.
    assert_eq!(
        form.remove_store(1, 2),
        Err(FormError::LastStore { entry_id: 1 })
    );
    assert_eq!(store_ids(&form, 1), vec![2]);
}
