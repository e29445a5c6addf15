//! Entries
//!
//! Row types owned by the check-in form: an [`Entry`] per product check-in
//! event, each holding one or more [`StoreRow`]s.

use smallvec::{SmallVec, smallvec};

/// One store/quantity pair nested within an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRow {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) quantity: i64,
}

impl StoreRow {
    pub(crate) fn new(id: u32) -> Self {
        StoreRow {
            id,
            name: String::new(),
            quantity: 0,
        }
    }

    /// Row id, locally unique within the owning entry.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Store name, or empty when unselected.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// User-entered quantity. Defaults to 0; no bounds are enforced.
    #[must_use]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// One row of the check-in form: a single product's check-in event across
/// one or more stores.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub(crate) id: u32,
    pub(crate) product_name: String,
    pub(crate) stores: SmallVec<[StoreRow; 1]>,
    pub(crate) reason: String,
    pub(crate) usage: String,
    pub(crate) serial_numbers_added: bool,
}

impl Entry {
    /// A fresh entry with empty fields and exactly one blank store row.
    pub(crate) fn new(id: u32) -> Self {
        Entry {
            id,
            product_name: String::new(),
            stores: smallvec![StoreRow::new(1)],
            reason: String::new(),
            usage: String::new(),
            serial_numbers_added: false,
        }
    }

    /// Entry id, unique across the form and never reused after deletion.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Selected product name, or empty when unselected.
    #[must_use]
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Store rows, in insertion order. Never empty.
    #[must_use]
    pub fn stores(&self) -> &[StoreRow] {
        &self.stores
    }

    /// Selected reason code, or empty when unselected.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Free-text usage notes.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Whether serial numbers have been recorded for this entry.
    #[must_use]
    pub fn serial_numbers_added(&self) -> bool {
        self.serial_numbers_added
    }

    pub(crate) fn store_mut(&mut self, store_id: u32) -> Option<&mut StoreRow> {
        self.stores.iter_mut().find(|store| store.id == store_id)
    }
}

/// A scalar field replacement on an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryField {
    /// Replace the product name.
    ProductName(String),

    /// Replace the reason code.
    Reason(String),

    /// Replace the usage notes.
    Usage(String),

    /// Replace the serial-numbers flag.
    SerialNumbersAdded(bool),
}

/// A scalar field replacement on a [`StoreRow`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreField {
    /// Replace the store name.
    Name(String),

    /// Replace the quantity.
    Quantity(i64),
}
