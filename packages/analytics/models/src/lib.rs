#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Dashboard statistics types.
//!
//! These are the summary shapes the dashboards render: priority level
//! counts, technical condition buckets, regional distribution and sensor
//! danger-level counts. They are computed fresh from the current input
//! collections and never persisted.

use hydro_map_facility_models::{InspectableObject, TechnicalCondition};
use serde::{Deserialize, Serialize};

/// Input collections for a full analytics report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsInput {
    /// Lakes, rivers, reservoirs and canals.
    pub water_bodies: Vec<InspectableObject>,
    /// Hydraulic structures.
    pub facilities: Vec<InspectableObject>,
    /// Monitoring sensors.
    pub sensors: Vec<InspectableObject>,
}

/// Number of objects per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelCounts {
    /// High priority objects.
    pub high: usize,
    /// Medium priority objects.
    pub medium: usize,
    /// Low priority objects.
    pub low: usize,
    /// All objects; always `high + medium + low`.
    pub total: usize,
    /// Objects flagged for inspection.
    pub needs_inspection: usize,
}

/// Number of objects per technical condition category.
///
/// Serialized with the category numbers `"1"`..`"5"` as keys; every key is
/// always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionDistribution {
    /// Category 1.
    #[serde(rename = "1")]
    pub excellent: usize,
    /// Category 2.
    #[serde(rename = "2")]
    pub good: usize,
    /// Category 3.
    #[serde(rename = "3")]
    pub satisfactory: usize,
    /// Category 4.
    #[serde(rename = "4")]
    pub poor: usize,
    /// Category 5.
    #[serde(rename = "5")]
    pub critical: usize,
}

impl ConditionDistribution {
    /// Count for one category.
    #[must_use]
    pub const fn get(&self, condition: TechnicalCondition) -> usize {
        match condition {
            TechnicalCondition::Excellent => self.excellent,
            TechnicalCondition::Good => self.good,
            TechnicalCondition::Satisfactory => self.satisfactory,
            TechnicalCondition::Poor => self.poor,
            TechnicalCondition::Critical => self.critical,
        }
    }

    /// Adds one object to the bucket for `condition`.
    pub const fn record(&mut self, condition: TechnicalCondition) {
        match condition {
            TechnicalCondition::Excellent => self.excellent += 1,
            TechnicalCondition::Good => self.good += 1,
            TechnicalCondition::Satisfactory => self.satisfactory += 1,
            TechnicalCondition::Poor => self.poor += 1,
            TechnicalCondition::Critical => self.critical += 1,
        }
    }

    /// Sum over all categories.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.excellent + self.good + self.satisfactory + self.poor + self.critical
    }
}

/// Share of a batch located in one region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalStat {
    /// Region name, or the configured label for objects without one.
    pub region: String,
    /// Objects in this region.
    pub count: usize,
    /// `count / total * 100`, rounded half-up. Percentages of a batch are
    /// rounded independently and need not sum to 100.
    pub percentage: u32,
}

/// Sensor counts by current danger level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DangerLevelCounts {
    /// Sensors reading `safe`.
    pub safe: usize,
    /// Sensors reading `danger`.
    pub danger: usize,
    /// Sensors reading `critical`.
    pub critical: usize,
    /// Sensors with any other or no reading (including `warning`).
    pub unclassified: usize,
}

/// Legacy "trend" view of [`DangerLevelCounts`].
///
/// The names suggest a before/after comparison, but each bucket is just a
/// current reading: `improved` = `safe`, `stable` = `danger`,
/// `worsened` = `critical`. Kept for consumers of the old payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendBucket {
    /// Sensors reading `safe`.
    pub improved: usize,
    /// Sensors reading `danger`.
    pub stable: usize,
    /// Sensors reading `critical`.
    pub worsened: usize,
}

impl From<DangerLevelCounts> for TrendBucket {
    fn from(counts: DangerLevelCounts) -> Self {
        Self {
            improved: counts.safe,
            stable: counts.danger,
            worsened: counts.critical,
        }
    }
}

/// Headline numbers for the dashboard header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallStats {
    /// Number of sensors.
    pub total_sensors: usize,
    /// Number of water bodies.
    pub total_water_bodies: usize,
    /// Number of facilities.
    pub total_facilities: usize,
    /// Water bodies plus facilities.
    pub total_objects: usize,
    /// Sensors reading `critical`.
    pub critical_count: usize,
    /// Sensors reading `danger`.
    pub danger_count: usize,
    /// Sensors reading `safe`.
    pub safe_count: usize,
}

/// Everything the analytics dashboard shows, computed in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    /// Year used for passport ages.
    pub current_year: i32,
    /// Headline numbers.
    pub overall_stats: OverallStats,
    /// Priority levels over water bodies and facilities.
    pub priority_distribution: LevelCounts,
    /// Technical condition buckets over water bodies and facilities.
    pub technical_condition: ConditionDistribution,
    /// Regional distribution over water bodies and facilities.
    pub regional_distribution: Vec<RegionalStat>,
    /// Sensor danger levels.
    pub danger_levels: DangerLevelCounts,
    /// Legacy view of `danger_levels`.
    pub trends: TrendBucket,
}
