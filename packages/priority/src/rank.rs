//! Ranking and filtering.

use hydro_map_facility_models::InspectableObject;
use hydro_map_priority_models::{LevelFilter, PriorityFilter, PriorityLevel, RankedObject};

use crate::passport::compute_passport_age;
use crate::scoring::calculate_priority;

/// Scores a single object.
#[must_use]
pub fn rank_object(
    object: &InspectableObject,
    current_year: i32,
    default_age: i32,
) -> RankedObject {
    let passport_age =
        compute_passport_age(object.passport_date.as_deref(), current_year, default_age);

    RankedObject {
        object: object.clone(),
        passport_age,
        priority: calculate_priority(object.condition, passport_age),
    }
}

/// Attaches a priority to every object, preserving input order and length.
#[must_use]
pub fn rank_objects(
    objects: &[InspectableObject],
    current_year: i32,
    default_age: i32,
) -> Vec<RankedObject> {
    let ranked: Vec<RankedObject> = objects
        .iter()
        .map(|object| rank_object(object, current_year, default_age))
        .collect();

    log::debug!(
        "Ranked {} objects ({} high priority)",
        ranked.len(),
        ranked
            .iter()
            .filter(|r| r.priority.level == PriorityLevel::High)
            .count()
    );

    ranked
}

/// Keeps objects at the requested level. [`LevelFilter::All`] is the
/// identity.
#[must_use]
pub fn filter_by_level(ranked: &[RankedObject], level: LevelFilter) -> Vec<RankedObject> {
    ranked
        .iter()
        .filter(|r| level.matches(r.priority.level))
        .cloned()
        .collect()
}

/// Applies every set criterion of `filter`, preserving order.
#[must_use]
pub fn apply_filter(ranked: &[RankedObject], filter: &PriorityFilter) -> Vec<RankedObject> {
    let query = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    ranked
        .iter()
        .filter(|r| {
            let object = &r.object;
            query.as_deref().is_none_or(|q| matches_search(object, q))
                && filter
                    .region
                    .as_deref()
                    .is_none_or(|region| object.region.as_deref() == Some(region))
                && filter.kind.is_none_or(|kind| object.kind == kind)
                && filter.condition.is_none_or(|c| object.condition == c)
                && filter.level.matches(r.priority.level)
        })
        .cloned()
        .collect()
}

/// `query` must already be lowercased.
fn matches_search(object: &InspectableObject, query: &str) -> bool {
    object.name.to_lowercase().contains(query)
        || object
            .region
            .as_deref()
            .is_some_and(|region| region.to_lowercase().contains(query))
}
