//! Sensor danger-level counts and headline statistics.

use hydro_map_analytics_models::{DangerLevelCounts, OverallStats, TrendBucket};
use hydro_map_facility_models::{HazardLevel, InspectableObject};

/// Counts sensors by their current `dangerLevel`.
///
/// Only `safe`, `danger` and `critical` are tallied individually; anything
/// else (including `warning` and missing readings) is `unclassified`.
#[must_use]
pub fn danger_level_counts<T: AsRef<InspectableObject>>(sensors: &[T]) -> DangerLevelCounts {
    let mut counts = DangerLevelCounts::default();
    for sensor in sensors {
        match sensor.as_ref().danger_hazard() {
            Some(HazardLevel::Safe) => counts.safe += 1,
            Some(HazardLevel::Danger) => counts.danger += 1,
            Some(HazardLevel::Critical) => counts.critical += 1,
            Some(HazardLevel::Warning) | None => counts.unclassified += 1,
        }
    }
    counts
}

/// Legacy "trend" buckets: `safe` → improved, `danger` → stable,
/// `critical` → worsened.
///
/// No before/after comparison happens; see [`TrendBucket`].
#[must_use]
pub fn trend_buckets<T: AsRef<InspectableObject>>(sensors: &[T]) -> TrendBucket {
    danger_level_counts(sensors).into()
}

/// Headline totals for the dashboard header.
#[must_use]
pub fn overall_stats<T: AsRef<InspectableObject>>(
    water_bodies: &[T],
    facilities: &[T],
    sensors: &[T],
) -> OverallStats {
    let danger = danger_level_counts(sensors);

    OverallStats {
        total_sensors: sensors.len(),
        total_water_bodies: water_bodies.len(),
        total_facilities: facilities.len(),
        total_objects: water_bodies.len() + facilities.len(),
        critical_count: danger.critical,
        danger_count: danger.danger,
        safe_count: danger.safe,
    }
}
