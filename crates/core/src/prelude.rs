//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{Catalog, CatalogItem},
    fixtures::{FixtureError, catalog::load_catalog},
    form::{CheckInForm, Entry, EntryField, FormAction, FormError, StoreField, StoreRow},
    notice::{Notice, Severity},
    options::{PRODUCT_OPTIONS, REASON_OPTIONS, STORE_OPTIONS},
    sheet::SheetError,
};
