//! Priority level and technical condition counts.

use hydro_map_analytics_models::{ConditionDistribution, LevelCounts};
use hydro_map_facility_models::InspectableObject;
use hydro_map_priority_models::{PriorityLevel, RankedObject};

/// Partitions a ranked list by priority level.
#[must_use]
pub fn count_by_level(ranked: &[RankedObject]) -> LevelCounts {
    let mut counts = LevelCounts {
        total: ranked.len(),
        ..LevelCounts::default()
    };

    for r in ranked {
        match r.priority.level {
            PriorityLevel::High => counts.high += 1,
            PriorityLevel::Medium => counts.medium += 1,
            PriorityLevel::Low => counts.low += 1,
        }
        if r.priority.needs_inspection {
            counts.needs_inspection += 1;
        }
    }

    counts
}

/// Counts objects per technical condition category.
#[must_use]
pub fn count_by_condition<T: AsRef<InspectableObject>>(objects: &[T]) -> ConditionDistribution {
    let mut distribution = ConditionDistribution::default();
    for object in objects {
        distribution.record(object.as_ref().condition);
    }
    distribution
}
