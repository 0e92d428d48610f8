//! Error types for the fallible edges of the crate
//!
//! The simulation itself never fails; only map construction from caller data
//! and settings parsing can.

use thiserror::Error;

/// Failure to build a [`GridMap`](crate::sim::GridMap) from caller data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The grid has no rows or no columns.
    #[error("map must have at least one row and one column")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("map row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Failure to load or validate [`Settings`](crate::Settings).
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("settings are not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}
