//! Tally
//!
//! Tally is a small component-block gallery and product check-in engine: a
//! framework-independent state machine for a multi-row check-in form, plus a
//! searchable catalog of gallery components.

pub mod catalog;
pub mod fixtures;
pub mod form;
pub mod notice;
pub mod options;
pub mod prelude;
pub mod sheet;
