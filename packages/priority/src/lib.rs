#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Inspection priority engine.
//!
//! Turns raw water body, facility and sensor records into canonical
//! [`InspectableObject`](hydro_map_facility_models::InspectableObject)s,
//! scores them for inspection urgency and provides the filtering, sorting
//! and export operations used by the prioritization dashboards.
//!
//! Everything here is pure and synchronous: no I/O, no shared state. The
//! default passport age is always passed in by the caller (usually from
//! [`PriorityConfig`](hydro_map_priority_models::PriorityConfig)).

pub mod collation;
pub mod condition;
pub mod export;
pub mod ingest;
pub mod passport;
pub mod rank;
pub mod scoring;
pub mod sort;

use thiserror::Error;

pub use condition::{compute_technical_condition, resolve_condition};
pub use ingest::{RawRecord, records_from_json};
pub use passport::compute_passport_age;
pub use rank::{apply_filter, filter_by_level, rank_objects};
pub use scoring::calculate_priority;
pub use sort::sort_ranked;

/// Errors raised by the priority engine.
///
/// Missing optional fields are never errors; only caller contract
/// violations at the ingestion boundary and export failures are.
#[derive(Debug, Error)]
pub enum PriorityError {
    /// Bulk input was not a JSON array.
    #[error("Expected a JSON array of records, got {found}")]
    NotAnArray {
        /// JSON type that was supplied instead.
        found: &'static str,
    },

    /// An element of the input array was not a JSON object.
    #[error("Record {index} is not a JSON object")]
    NotAnObject {
        /// Position of the element in the input array.
        index: usize,
    },

    /// A record lacks a field that has no default (the identifier).
    #[error("Record {index} is invalid: {message}")]
    InvalidRecord {
        /// Position of the record in the input array.
        index: usize,
        /// Description of what went wrong.
        message: String,
    },

    /// CSV export failed.
    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON export failed.
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),

    /// Exported bytes were not valid UTF-8.
    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
