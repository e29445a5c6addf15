//! Options
//!
//! Fixed option lists offered by the check-in form's select controls. These
//! are compiled-in constants; the form itself stores plain strings and does
//! not validate values against these lists.

/// Products that can be checked in.
pub const PRODUCT_OPTIONS: [&str; 5] = [
    "Product A",
    "Product B",
    "Product C",
    "Product D",
    "Product E",
];

/// Stores a product can be checked in to.
pub const STORE_OPTIONS: [&str; 5] = ["Store 1", "Store 2", "Store 3", "Store 4", "Store 5"];

/// Reasons for a check-in event.
pub const REASON_OPTIONS: [&str; 5] = ["New Stock", "Replacement", "Return", "Transfer", "Other"];
