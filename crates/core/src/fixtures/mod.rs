//! Fixtures
//!
//! YAML fixture parsing for data the app ships with (currently the gallery
//! catalog). Fixture files live under the repository's `fixtures/` directory
//! and are embedded by consumers with `include_str!`.

use thiserror::Error;

pub mod catalog;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),
}
