//! Actions
//!
//! Reducer-style view of the form operations: every user interaction maps to
//! one [`FormAction`], dispatched through [`CheckInForm::apply`]. A rendering
//! layer can drive the whole form through this single entry point and
//! subscribe to the resulting state.

use crate::form::{CheckInForm, EntryField, FormError, StoreField};

/// A single state-update operation on a [`CheckInForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Append a fresh entry.
    AddEntry,

    /// Replace one scalar field on an entry.
    UpdateEntry {
        /// Target entry id.
        entry_id: u32,

        /// Field replacement to apply.
        field: EntryField,
    },

    /// Remove an entry, guarded by the minimum-entry invariant.
    RemoveEntry {
        /// Target entry id.
        entry_id: u32,
    },

    /// Append a blank store row to an entry.
    AddStore {
        /// Target entry id.
        entry_id: u32,
    },

    /// Replace one scalar field on a store row.
    UpdateStore {
        /// Target entry id.
        entry_id: u32,

        /// Target store row id within the entry.
        store_id: u32,

        /// Field replacement to apply.
        field: StoreField,
    },

    /// Remove a store row, guarded by the minimum-store invariant.
    RemoveStore {
        /// Target entry id.
        entry_id: u32,

        /// Target store row id within the entry.
        store_id: u32,
    },
}

impl CheckInForm {
    /// Apply one action to the form.
    ///
    /// # Errors
    ///
    /// Returns the [`FormError`] of the underlying operation when a guarded
    /// removal is rejected; the state is unchanged in that case. All other
    /// actions always succeed (unmatched ids no-op).
    pub fn apply(&mut self, action: FormAction) -> Result<(), FormError> {
        match action {
            FormAction::AddEntry => {
                self.add_entry();
                Ok(())
            }
            FormAction::UpdateEntry { entry_id, field } => {
                self.update_entry(entry_id, field);
                Ok(())
            }
            FormAction::RemoveEntry { entry_id } => self.remove_entry(entry_id),
            FormAction::AddStore { entry_id } => {
                self.add_store(entry_id);
                Ok(())
            }
            FormAction::UpdateStore {
                entry_id,
                store_id,
                field,
            } => {
                self.update_store(entry_id, store_id, field);
                Ok(())
            }
            FormAction::RemoveStore { entry_id, store_id } => {
                self.remove_store(entry_id, store_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Entry, StoreRow};

    #[test]
    fn apply_matches_direct_operations() {
        let mut direct = CheckInForm::new();
        let mut reduced = CheckInForm::new();

        direct.add_entry();
        direct.update_entry(2, EntryField::ProductName("Product A".to_string()));
        direct.add_store(2);
        direct.update_store(2, 2, StoreField::Quantity(4));

        for action in [
            FormAction::AddEntry,
            FormAction::UpdateEntry {
                entry_id: 2,
                field: EntryField::ProductName("Product A".to_string()),
            },
            FormAction::AddStore { entry_id: 2 },
            FormAction::UpdateStore {
                entry_id: 2,
                store_id: 2,
                field: StoreField::Quantity(4),
            },
        ] {
            assert!(reduced.apply(action).is_ok());
        }

        assert_eq!(direct, reduced);
    }

    #[test]
    fn apply_propagates_guard_rejections() {
        let mut form = CheckInForm::new();
        let before = form.clone();

        let entry_result = form.apply(FormAction::RemoveEntry { entry_id: 1 });
        let store_result = form.apply(FormAction::RemoveStore {
            entry_id: 1,
            store_id: 1,
        });

        assert!(entry_result.is_err());
        assert!(store_result.is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn apply_drives_a_full_editing_session() {
        let mut form = CheckInForm::empty();

        assert!(form.apply(FormAction::AddEntry).is_ok());
        assert!(form.apply(FormAction::AddStore { entry_id: 1 }).is_ok());
        assert!(
            form.apply(FormAction::UpdateStore {
                entry_id: 1,
                store_id: 2,
                field: StoreField::Name("Store 5".to_string()),
            })
            .is_ok()
        );
        assert!(
            form.apply(FormAction::RemoveStore {
                entry_id: 1,
                store_id: 1,
            })
            .is_ok()
        );

        let ids: Vec<u32> = form.entries().iter().map(Entry::id).collect();
        assert_eq!(ids, vec![1]);

        let stores: Vec<(u32, &str)> = form
            .entry(1)
            .expect("entry 1 exists")
            .stores()
            .iter()
            .map(|store| (StoreRow::id(store), store.name()))
            .collect();
        assert_eq!(stores, vec![(2, "Store 5")]);
    }
}
