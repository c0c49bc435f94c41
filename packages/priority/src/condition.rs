//! Technical condition resolution.
//!
//! A record either carries a measured 1-5 `technicalCondition`, or the
//! condition is approximated from its qualitative hazard level. The
//! approximation is lossy (every non-hazardous record collapses to
//! [`TechnicalCondition::Good`]) and is kept only because downstream scores
//! depend on it. [`resolve_condition`] reports which path was taken.

use hydro_map_facility_models::{ConditionSource, HazardLevel, TechnicalCondition};

use crate::ingest::RawRecord;

/// Condition assumed when neither a measurement nor a recognized hazard
/// level is available.
pub const FALLBACK_CONDITION: TechnicalCondition = TechnicalCondition::Good;

/// Returns the technical condition for a raw record. Never fails.
#[must_use]
pub fn compute_technical_condition(record: &RawRecord) -> TechnicalCondition {
    resolve_condition(record).0
}

/// Returns the technical condition together with where it came from.
///
/// A `technicalCondition` in `1..=5` is used as-is. Otherwise the first
/// present of `riskLevel` / `dangerLevel` is mapped: `critical` → 5,
/// `danger` or `warning` → 4, anything else → 2.
#[must_use]
pub fn resolve_condition(record: &RawRecord) -> (TechnicalCondition, ConditionSource) {
    if let Some(condition) = record
        .technical_condition
        .and_then(|value| u8::try_from(value).ok())
        .and_then(|value| TechnicalCondition::from_value(value).ok())
    {
        return (condition, ConditionSource::Measured);
    }

    let qualitative = record
        .risk_level
        .as_deref()
        .or(record.danger_level.as_deref());
    let derived = condition_from_hazard(qualitative.and_then(|s| s.parse().ok()));

    log::trace!(
        "Derived technical condition {derived} for record {:?} from hazard level {qualitative:?}",
        record.id
    );

    (derived, ConditionSource::Derived)
}

/// Maps a qualitative hazard level onto the condition scale.
#[must_use]
pub const fn condition_from_hazard(hazard: Option<HazardLevel>) -> TechnicalCondition {
    match hazard {
        Some(HazardLevel::Critical) => TechnicalCondition::Critical,
        Some(HazardLevel::Danger | HazardLevel::Warning) => TechnicalCondition::Poor,
        Some(HazardLevel::Safe) | None => FALLBACK_CONDITION,
    }
}
