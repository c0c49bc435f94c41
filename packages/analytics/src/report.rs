//! Full analytics report for the dashboard.

use hydro_map_analytics_models::{AnalyticsInput, AnalyticsReport};
use hydro_map_facility_models::InspectableObject;
use hydro_map_priority::rank_objects;
use hydro_map_priority_models::PriorityConfig;

use crate::regional::regional_distribution;
use crate::sensors::{danger_level_counts, overall_stats};
use crate::stats::{count_by_condition, count_by_level};

/// Computes every dashboard statistic from the current collections.
///
/// Priority, condition and regional figures cover water bodies and
/// facilities together; sensor figures cover sensors only.
#[must_use]
pub fn build_report(
    input: &AnalyticsInput,
    config: &PriorityConfig,
    current_year: i32,
) -> AnalyticsReport {
    let objects: Vec<InspectableObject> = input
        .water_bodies
        .iter()
        .chain(&input.facilities)
        .cloned()
        .collect();

    let ranked = rank_objects(&objects, current_year, config.default_passport_age);
    let danger_levels = danger_level_counts(&input.sensors);

    log::debug!(
        "Building analytics report for {} objects and {} sensors",
        objects.len(),
        input.sensors.len()
    );

    AnalyticsReport {
        current_year,
        overall_stats: overall_stats(&input.water_bodies, &input.facilities, &input.sensors),
        priority_distribution: count_by_level(&ranked),
        technical_condition: count_by_condition(&objects),
        regional_distribution: regional_distribution(&objects, &config.unknown_region_label),
        danger_levels,
        trends: danger_levels.into(),
    }
}

#[cfg(test)]
mod tests {
    use hydro_map_facility_models::{ConditionSource, ObjectId, ObjectKind, TechnicalCondition};

    use super::*;

    fn object(
        id: i64,
        kind: ObjectKind,
        region: Option<&str>,
        condition: TechnicalCondition,
        danger_level: Option<&str>,
    ) -> InspectableObject {
        InspectableObject {
            id: ObjectId::Int(id),
            kind,
            name: format!("{kind} {id}"),
            object_type: None,
            region: region.map(str::to_string),
            condition,
            condition_source: ConditionSource::Measured,
            risk_level: None,
            danger_level: danger_level.map(str::to_string),
            passport_date: None,
        }
    }

    fn input() -> AnalyticsInput {
        AnalyticsInput {
            water_bodies: vec![
                object(1, ObjectKind::WaterBody, Some("Алматы"), TechnicalCondition::Good, None),
                object(2, ObjectKind::WaterBody, None, TechnicalCondition::Critical, None),
            ],
            facilities: vec![object(
                3,
                ObjectKind::Facility,
                Some("Алматы"),
                TechnicalCondition::Poor,
                None,
            )],
            sensors: vec![
                object(4, ObjectKind::Sensor, None, TechnicalCondition::Good, Some("critical")),
                object(5, ObjectKind::Sensor, None, TechnicalCondition::Good, Some("safe")),
            ],
        }
    }

    #[test]
    fn report_combines_all_statistics() {
        let report = build_report(&input(), &PriorityConfig::default(), 2026);

        assert_eq!(report.current_year, 2026);
        assert_eq!(report.overall_stats.total_objects, 3);
        assert_eq!(report.overall_stats.total_sensors, 2);

        // Default age 3: scores 15, 6 and 9.
        assert_eq!(report.priority_distribution.high, 1);
        assert_eq!(report.priority_distribution.medium, 2);
        assert_eq!(report.priority_distribution.low, 0);
        assert_eq!(report.priority_distribution.total, 3);

        assert_eq!(report.technical_condition.total(), 3);
        assert_eq!(report.regional_distribution[0].region, "Алматы");
        assert_eq!(report.regional_distribution[0].count, 2);
        assert_eq!(report.regional_distribution[1].region, "Неизвестный регион");

        assert_eq!(report.trends.worsened, 1);
        assert_eq!(report.trends.improved, 1);
        assert_eq!(report.danger_levels.critical, 1);
    }

    #[test]
    fn default_age_from_config() {
        let config = PriorityConfig {
            default_passport_age: 0,
            ..PriorityConfig::default()
        };
        let report = build_report(&input(), &config, 2026);

        // Scores 12, 3 and 6.
        assert_eq!(report.priority_distribution.high, 1);
        assert_eq!(report.priority_distribution.medium, 1);
        assert_eq!(report.priority_distribution.low, 1);
    }

    #[test]
    fn report_serializes_dashboard_keys() {
        let report = build_report(&input(), &PriorityConfig::default(), 2026);
        let json = serde_json::to_value(&report).unwrap();

        for key in [
            "currentYear",
            "overallStats",
            "priorityDistribution",
            "technicalCondition",
            "regionalDistribution",
            "dangerLevels",
            "trends",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(json["technicalCondition"]["5"], 1);
    }

    #[test]
    fn empty_input() {
        let report = build_report(&AnalyticsInput::default(), &PriorityConfig::default(), 2026);
        assert_eq!(report.priority_distribution.total, 0);
        assert!(report.regional_distribution.is_empty());
    }
}
