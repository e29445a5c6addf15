//! Form
//!
//! The check-in form state machine: an ordered collection of entries, each
//! holding an ordered collection of store rows, mutated only through the
//! operations defined here. Both collection levels carry a minimum-count
//! invariant (at least one entry overall, at least one store row per entry);
//! a removal that would violate it is rejected before any mutation.

use thiserror::Error;

pub mod action;
pub mod entry;

pub use action::FormAction;
pub use entry::{Entry, EntryField, StoreField, StoreRow};

/// Errors raised by rejected form operations.
///
/// These are the only error conditions the form models: unmatched ids in
/// update operations silently no-op instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Removing this entry would leave the form without any entries.
    #[error("at least one entry is required")]
    LastEntry,

    /// Removing this store row would leave its entry without any stores.
    #[error("entry {entry_id} must keep at least one store")]
    LastStore {
        /// Id of the entry whose store removal was rejected.
        entry_id: u32,
    },
}

/// In-memory state of the check-in form.
///
/// The default form starts with exactly one entry (id 1) containing exactly
/// one store row (id 1). All mutation goes through the operation methods (or
/// [`CheckInForm::apply`]); every operation runs to completion synchronously
/// and either succeeds or leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckInForm {
    entries: Vec<Entry>,
}

impl Default for CheckInForm {
    fn default() -> Self {
        CheckInForm {
            entries: vec![Entry::new(1)],
        }
    }
}

impl CheckInForm {
    /// The initial form: one blank entry with one blank store row.
    #[must_use]
    pub fn new() -> Self {
        CheckInForm::default()
    }

    /// A form with no entries at all.
    ///
    /// Not reachable through the operation set (removals are guarded), but
    /// useful as a starting point when entries are added programmatically.
    #[must_use]
    pub fn empty() -> Self {
        CheckInForm {
            entries: Vec::new(),
        }
    }

    /// Entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry with the given id, if any.
    #[must_use]
    pub fn entry(&self, entry_id: u32) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == entry_id)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the form has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a fresh entry and return its id.
    ///
    /// The new id is `max(existing ids) + 1`, or 1 for an empty form, so ids
    /// are never reused after a deletion. The new entry has empty
    /// product/reason/usage, an unset serial-numbers flag, and exactly one
    /// blank store row with id 1.
    pub fn add_entry(&mut self) -> u32 {
        let id = self
            .entries
            .iter()
            .map(Entry::id)
            .max()
            .map_or(1, |max_id| max_id + 1);

        self.entries.push(Entry::new(id));

        id
    }

    /// Replace one scalar field on the entry with the given id.
    ///
    /// Silently no-ops when no entry matches. The value is not validated
    /// against the option lists; the presentation layer restricts input to
    /// valid choices.
    pub fn update_entry(&mut self, entry_id: u32, field: EntryField) {
        if let Some(entry) = self.entry_mut(entry_id) {
            match field {
                EntryField::ProductName(value) => entry.product_name = value,
                EntryField::Reason(value) => entry.reason = value,
                EntryField::Usage(value) => entry.usage = value,
                EntryField::SerialNumbersAdded(value) => entry.serial_numbers_added = value,
            }
        }
    }

    /// Remove the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::LastEntry`], without mutating anything, when the
    /// form currently holds exactly one entry.
    pub fn remove_entry(&mut self, entry_id: u32) -> Result<(), FormError> {
        if self.entries.len() > 1 {
            self.entries.retain(|entry| entry.id != entry_id);
            Ok(())
        } else {
            Err(FormError::LastEntry)
        }
    }

    /// Append a blank store row to the entry with the given id and return
    /// the new row's id, or `None` when no entry matches.
    ///
    /// The new id is the entry's current store count plus one, matching the
    /// form's observed assignment scheme, saturating at [`u32::MAX`].
    pub fn add_store(&mut self, entry_id: u32) -> Option<u32> {
        let entry = self.entry_mut(entry_id)?;

        let id = next_store_id(entry.stores.len());

        entry.stores.push(StoreRow::new(id));

        Some(id)
    }

    /// Replace one scalar field on a store row.
    ///
    /// Silently no-ops when either the entry id or the store id is
    /// unmatched.
    pub fn update_store(&mut self, entry_id: u32, store_id: u32, field: StoreField) {
        if let Some(store) = self
            .entry_mut(entry_id)
            .and_then(|entry| entry.store_mut(store_id))
        {
            match field {
                StoreField::Name(value) => store.name = value,
                StoreField::Quantity(value) => store.quantity = value,
            }
        }
    }

    /// Remove a store row from the entry with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::LastStore`], without mutating anything, when the
    /// entry holds exactly one store row. An unmatched entry id is rejected
    /// the same way, matching the original form's behavior.
    pub fn remove_store(&mut self, entry_id: u32, store_id: u32) -> Result<(), FormError> {
        match self.entry_mut(entry_id) {
            Some(entry) if entry.stores.len() > 1 => {
                entry.stores.retain(|store| store.id != store_id);
                Ok(())
            }
            _ => Err(FormError::LastStore { entry_id }),
        }
    }

    fn entry_mut(&mut self, entry_id: u32) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == entry_id)
    }
}

fn next_store_id(store_count: usize) -> u32 {
    u32::try_from(store_count)
        .unwrap_or(u32::MAX)
        .saturating_add(1)
}
