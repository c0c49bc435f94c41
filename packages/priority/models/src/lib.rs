#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Inspection priority types.
//!
//! Holds the result of scoring an [`InspectableObject`] together with the
//! selection types (level filter, combined dashboard filter, sort key) used
//! by the prioritization views, and the engine configuration.

pub mod config;

use hydro_map_facility_models::{InspectableObject, ObjectKind, TechnicalCondition};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

pub use config::{ConfigError, PriorityConfig};

/// Inspection urgency bucket.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PriorityLevel {
    /// Score below the medium threshold.
    Low,
    /// Score at or above the medium threshold.
    Medium,
    /// Score at or above the high threshold.
    High,
}

/// Score and bucket computed for one object. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityResult {
    /// `(6 - condition) * 3 + passport_age`.
    pub score: i32,
    /// Bucket derived from `score`.
    pub level: PriorityLevel,
    /// Whether the object should be scheduled for inspection.
    pub needs_inspection: bool,
}

/// An object with its computed priority attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedObject {
    /// The scored object.
    #[serde(flatten)]
    pub object: InspectableObject,
    /// Whole years since the passport was issued (or the default age).
    pub passport_age: i32,
    /// Computed priority.
    pub priority: PriorityResult,
}

impl AsRef<InspectableObject> for RankedObject {
    fn as_ref(&self) -> &InspectableObject {
        &self.object
    }
}

/// Priority level selection, `all` or one specific level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelFilter {
    /// Keep every object.
    #[default]
    All,
    /// Keep only objects at this level.
    Level(PriorityLevel),
}

impl LevelFilter {
    /// Whether `level` passes this filter.
    #[must_use]
    pub fn matches(self, level: PriorityLevel) -> bool {
        match self {
            Self::All => true,
            Self::Level(wanted) => wanted == level,
        }
    }
}

impl std::str::FromStr for LevelFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Level)
        }
    }
}

impl std::fmt::Display for LevelFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Level(level) => write!(f, "{level}"),
        }
    }
}

impl From<PriorityLevel> for LevelFilter {
    fn from(value: PriorityLevel) -> Self {
        Self::Level(value)
    }
}

/// Ordering applied to a ranked list.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SortKey {
    /// Highest score first.
    #[default]
    PriorityDesc,
    /// Lowest score first.
    PriorityAsc,
    /// Name, alphabetical.
    NameAsc,
    /// Name, reverse alphabetical.
    NameDesc,
    /// Worst condition first.
    ConditionDesc,
    /// Best condition first.
    ConditionAsc,
    /// Oldest passport (largest age) first.
    PassportOld,
    /// Most recent passport (smallest age) first.
    PassportNew,
}

impl SortKey {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::PriorityDesc,
            Self::PriorityAsc,
            Self::NameAsc,
            Self::NameDesc,
            Self::ConditionDesc,
            Self::ConditionAsc,
            Self::PassportOld,
            Self::PassportNew,
        ]
    }
}

/// Combined selection used by the prioritization dashboards.
///
/// Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityFilter {
    /// Case-insensitive substring matched against name and region.
    pub search: Option<String>,
    /// Exact region name.
    pub region: Option<String>,
    /// Source collection.
    pub kind: Option<ObjectKind>,
    /// Priority level.
    pub level: LevelFilter,
    /// Exact technical condition.
    pub condition: Option<TechnicalCondition>,
}
