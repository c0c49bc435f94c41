#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Inspectable object types for water bodies, hydraulic facilities and
//! sensors.
//!
//! Every data source (REST payloads, database rows, fixtures) is normalized
//! into the canonical [`InspectableObject`] shape before any scoring or
//! aggregation happens. The qualitative hazard vocabulary and the 1-5
//! technical condition scale shared by all crates are defined here.

pub mod regions;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Stable identifier of an inspectable object.
///
/// Upstream sources use both numeric and string keys, so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ObjectId {
    /// Numeric database key.
    Int(i64),
    /// String key (UUIDs, registry codes).
    Text(String),
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ObjectId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Which collection an object came from.
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
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ObjectKind {
    /// Lake, river, reservoir or canal.
    WaterBody,
    /// Hydraulic structure (dam, hydropower plant, lock, pumping station).
    Facility,
    /// Monitoring sensor attached to a water body or facility.
    Sensor,
}

/// Technical condition category, from 1 (excellent) to 5 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TechnicalCondition {
    /// Category 1: no defects.
    Excellent = 1,
    /// Category 2: minor defects that do not affect operation.
    Good = 2,
    /// Category 3: defects requiring scheduled repair.
    Satisfactory = 3,
    /// Category 4: defects that limit safe operation.
    Poor = 4,
    /// Category 5: emergency state.
    Critical = 5,
}

impl TechnicalCondition {
    /// Returns the numeric category of this condition.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a condition from its numeric category.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-5.
    pub const fn from_value(value: u8) -> Result<Self, InvalidConditionError> {
        match value {
            1 => Ok(Self::Excellent),
            2 => Ok(Self::Good),
            3 => Ok(Self::Satisfactory),
            4 => Ok(Self::Poor),
            5 => Ok(Self::Critical),
            _ => Err(InvalidConditionError { value }),
        }
    }

    /// Returns all variants of this enum, best to worst.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Excellent,
            Self::Good,
            Self::Satisfactory,
            Self::Poor,
            Self::Critical,
        ]
    }
}

impl std::fmt::Display for TechnicalCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl From<TechnicalCondition> for u8 {
    fn from(value: TechnicalCondition) -> Self {
        value.value()
    }
}

impl TryFrom<u8> for TechnicalCondition {
    type Error = InvalidConditionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

/// Error returned when attempting to create a [`TechnicalCondition`] from an
/// invalid numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidConditionError {
    /// The invalid category value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidConditionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid technical condition {}: expected 1-5",
            self.value
        )
    }
}

impl std::error::Error for InvalidConditionError {}

/// Qualitative hazard reading carried by `riskLevel` / `dangerLevel` fields.
///
/// Parsing is exact: `"Critical"` is not recognized, matching how upstream
/// payloads are compared.
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
pub enum HazardLevel {
    /// Readings within normal limits.
    Safe,
    /// Readings approaching limits.
    Warning,
    /// Readings beyond limits.
    Danger,
    /// Emergency readings.
    Critical,
}

/// Where an object's [`TechnicalCondition`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionSource {
    /// Taken from the record's own `technicalCondition` field.
    Measured,
    /// Approximated from the qualitative hazard level. Lossy.
    Derived,
}

/// Canonical record for a water body, facility or sensor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectableObject {
    /// Stable identifier.
    pub id: ObjectId,
    /// Source collection.
    pub kind: ObjectKind,
    /// Display name.
    pub name: String,
    /// Free-form type label from the source (e.g. "Плотина").
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    /// Administrative region, `None` when the source omitted it.
    pub region: Option<String>,
    /// Technical condition category.
    #[serde(rename = "technicalCondition")]
    pub condition: TechnicalCondition,
    /// Whether `condition` was measured or derived.
    pub condition_source: ConditionSource,
    /// Raw `riskLevel` value.
    pub risk_level: Option<String>,
    /// Raw `dangerLevel` value.
    pub danger_level: Option<String>,
    /// Raw passport issue date (ISO 8601).
    pub passport_date: Option<String>,
}

impl InspectableObject {
    /// Parsed `dangerLevel`, or `None` when absent or unrecognized.
    #[must_use]
    pub fn danger_hazard(&self) -> Option<HazardLevel> {
        self.danger_level.as_deref().and_then(|s| s.parse().ok())
    }
}

impl AsRef<Self> for InspectableObject {
    fn as_ref(&self) -> &Self {
        self
    }
}
