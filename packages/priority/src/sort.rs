//! Stable ordering of ranked objects.

use std::cmp::Ordering;

use hydro_map_priority_models::{RankedObject, SortKey};

use crate::collation::compare_names;

/// Returns a copy of `ranked` ordered by `key`.
///
/// The sort is stable: objects with equal keys keep their input order, and
/// no secondary key is applied.
#[must_use]
pub fn sort_ranked(ranked: &[RankedObject], key: SortKey) -> Vec<RankedObject> {
    let mut sorted = ranked.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key));
    sorted
}

fn compare(a: &RankedObject, b: &RankedObject, key: SortKey) -> Ordering {
    match key {
        SortKey::PriorityDesc => b.priority.score.cmp(&a.priority.score),
        SortKey::PriorityAsc => a.priority.score.cmp(&b.priority.score),
        SortKey::NameAsc => compare_names(&a.object.name, &b.object.name),
        SortKey::NameDesc => compare_names(&b.object.name, &a.object.name),
        SortKey::ConditionDesc => b.object.condition.cmp(&a.object.condition),
        SortKey::ConditionAsc => a.object.condition.cmp(&b.object.condition),
        SortKey::PassportOld => b.passport_age.cmp(&a.passport_age),
        SortKey::PassportNew => a.passport_age.cmp(&b.passport_age),
    }
}
