#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard statistics over scored water bodies, facilities and sensors.
//!
//! Every function is a pure, total computation over the collections it is
//! given. Functions taking plain objects accept anything that is
//! `AsRef<InspectableObject>`, so both raw and ranked lists can be passed.

pub mod regional;
pub mod report;
pub mod sensors;
pub mod stats;

pub use regional::regional_distribution;
pub use report::build_report;
pub use sensors::{danger_level_counts, overall_stats, trend_buckets};
pub use stats::{count_by_condition, count_by_level};
