//! Sheet
//!
//! Plain-text rendering of a check-in form: one table row per entry, one
//! line per store row inside the store and quantity cells.

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::form::{CheckInForm, Entry};

/// Errors that can occur when writing a check-in sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Error writing to the output.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Write the form as a text table.
///
/// # Errors
///
/// Returns a [`SheetError`] if the output cannot be written.
pub fn write_to(form: &CheckInForm, mut out: impl io::Write) -> Result<(), SheetError> {
    let mut builder = Builder::default();

    push_sheet_header(&mut builder);

    for (index, entry) in form.entries().iter().enumerate() {
        append_entry_row(&mut builder, index, entry);
    }

    let mut table = builder.build();
    table.with(Style::sharp());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..4), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

fn push_sheet_header(builder: &mut Builder) {
    builder.push_record([
        "No.", "Product", "Stores", "Quantity", "Reason", "Usage", "Serials",
    ]);
}

fn append_entry_row(builder: &mut Builder, index: usize, entry: &Entry) {
    let stores = entry
        .stores()
        .iter()
        .map(|store| store.name().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    let quantities = entry
        .stores()
        .iter()
        .map(|store| store.quantity().to_string())
        .collect::<Vec<_>>()
        .join("\n");

    builder.push_record([
        (index + 1).to_string(),
        entry.product_name().to_string(),
        stores,
        quantities,
        entry.reason().to_string(),
        entry.usage().to_string(),
        if entry.serial_numbers_added() { "yes" } else { "no" }.to_string(),
    ]);
}
