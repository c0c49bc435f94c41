//! Priority score formula and level thresholds.
//!
//! This module is the only place the formula and thresholds are defined.

use hydro_map_facility_models::TechnicalCondition;
use hydro_map_priority_models::{PriorityLevel, PriorityResult};

/// Scores at or above this are [`PriorityLevel::High`].
pub const HIGH_PRIORITY_THRESHOLD: i32 = 12;

/// Scores at or above this (and below [`HIGH_PRIORITY_THRESHOLD`]) are
/// [`PriorityLevel::Medium`].
pub const MEDIUM_PRIORITY_THRESHOLD: i32 = 6;

/// Weight applied to the condition term of the score.
const CONDITION_WEIGHT: i32 = 3;

/// Maps a score onto its priority bucket.
#[must_use]
pub const fn level_for_score(score: i32) -> PriorityLevel {
    if score >= HIGH_PRIORITY_THRESHOLD {
        PriorityLevel::High
    } else if score >= MEDIUM_PRIORITY_THRESHOLD {
        PriorityLevel::Medium
    } else {
        PriorityLevel::Low
    }
}

/// Computes `(6 - condition) * 3 + passport_age` and its bucket.
#[must_use]
pub fn calculate_priority(condition: TechnicalCondition, passport_age: i32) -> PriorityResult {
    let condition_term = (6 - i32::from(condition.value())) * CONDITION_WEIGHT;
    let score = condition_term.saturating_add(passport_age);
    let level = level_for_score(score);

    PriorityResult {
        score,
        level,
        needs_inspection: level == PriorityLevel::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_over_domain() {
        for condition in TechnicalCondition::all() {
            for age in 0..=100 {
                assert_eq!(
                    calculate_priority(*condition, age),
                    calculate_priority(*condition, age)
                );
            }
        }
    }

    #[test]
    fn bucket_boundaries() {
        assert_eq!(level_for_score(11), PriorityLevel::Medium);
        assert_eq!(level_for_score(12), PriorityLevel::High);
        assert_eq!(level_for_score(5), PriorityLevel::Low);
        assert_eq!(level_for_score(6), PriorityLevel::Medium);
        assert_eq!(level_for_score(-4), PriorityLevel::Low);
    }

    #[test]
    fn good_condition_old_passport_is_high() {
        let result = calculate_priority(TechnicalCondition::Good, 10);
        assert_eq!(result.score, 22);
        assert_eq!(result.level, PriorityLevel::High);
        assert!(result.needs_inspection);
    }

    #[test]
    fn critical_condition_new_passport_is_low() {
        let result = calculate_priority(TechnicalCondition::Critical, 0);
        assert_eq!(result.score, 3);
        assert_eq!(result.level, PriorityLevel::Low);
        assert!(!result.needs_inspection);
    }

    #[test]
    fn medium_is_not_flagged_for_inspection() {
        let result = calculate_priority(TechnicalCondition::Good, 0);
        assert_eq!(result.score, 12);
        assert!(result.needs_inspection);

        let result = calculate_priority(TechnicalCondition::Satisfactory, 2);
        assert_eq!(result.score, 11);
        assert_eq!(result.level, PriorityLevel::Medium);
        assert!(!result.needs_inspection);
    }

    #[test]
    fn negative_age_lowers_score() {
        let result = calculate_priority(TechnicalCondition::Poor, -2);
        assert_eq!(result.score, 4);
        assert_eq!(result.level, PriorityLevel::Low);
    }

    #[test]
    fn score_saturates_instead_of_overflowing() {
        let result = calculate_priority(TechnicalCondition::Excellent, i32::MAX);
        assert_eq!(result.score, i32::MAX);
        assert_eq!(result.level, PriorityLevel::High);
    }
}
