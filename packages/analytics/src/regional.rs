//! Regional distribution.

use std::collections::HashMap;

use hydro_map_analytics_models::RegionalStat;
use hydro_map_facility_models::InspectableObject;

/// Groups objects by region and computes each region's share of the batch.
///
/// Objects without a region are grouped under `unknown_region_label`.
/// Percentages are rounded half-up independently, so they may not sum to
/// exactly 100. The result is ordered by descending count; regions with
/// equal counts keep the order in which they were first seen.
#[must_use]
pub fn regional_distribution<T: AsRef<InspectableObject>>(
    objects: &[T],
    unknown_region_label: &str,
) -> Vec<RegionalStat> {
    let mut groups: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for object in objects {
        let region = object
            .as_ref()
            .region
            .as_deref()
            .unwrap_or(unknown_region_label);
        match index.get(region) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(region, groups.len());
                groups.push((region, 1));
            }
        }
    }

    let total = objects.len();
    let mut stats: Vec<RegionalStat> = groups
        .into_iter()
        .map(|(region, count)| RegionalStat {
            region: region.to_string(),
            count,
            percentage: rounded_percentage(count, total),
        })
        .collect();

    stats.sort_by(|a, b| b.count.cmp(&a.count));

    log::debug!(
        "Regional distribution: {} objects across {} regions",
        total,
        stats.len()
    );

    stats
}

/// `round(count / total * 100)` with halves rounded up, in integer math.
fn rounded_percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let scaled = (count * 200 + total) / (total * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use hydro_map_facility_models::{ConditionSource, ObjectId, ObjectKind, TechnicalCondition};

    use super::*;

    const UNKNOWN: &str = "Неизвестный регион";

    fn in_region(id: i64, region: Option<&str>) -> InspectableObject {
        InspectableObject {
            id: ObjectId::Int(id),
            kind: ObjectKind::WaterBody,
            name: format!("Водоём {id}"),
            object_type: None,
            region: region.map(str::to_string),
            condition: TechnicalCondition::Good,
            condition_source: ConditionSource::Measured,
            risk_level: None,
            danger_level: None,
            passport_date: None,
        }
    }

    #[test]
    fn thirds_round_down_and_are_not_corrected() {
        let objects = vec![
            in_region(1, Some("Алматы")),
            in_region(2, Some("Астана")),
            in_region(3, Some("Шымкент")),
        ];
        let stats = regional_distribution(&objects, UNKNOWN);

        assert_eq!(stats.len(), 3);
        assert!(stats.iter().all(|s| s.percentage == 33));
        assert_eq!(stats.iter().map(|s| s.percentage).sum::<u32>(), 99);
    }

    #[test]
    fn half_rounds_up() {
        assert_eq!(rounded_percentage(1, 8), 13);
        assert_eq!(rounded_percentage(1, 200), 1);
        assert_eq!(rounded_percentage(2, 3), 67);
        assert_eq!(rounded_percentage(3, 3), 100);
    }

    #[test]
    fn missing_region_uses_label() {
        let objects = vec![in_region(1, None), in_region(2, Some("Алматы")), in_region(3, None)];
        let stats = regional_distribution(&objects, UNKNOWN);

        assert_eq!(
            stats,
            vec![
                RegionalStat {
                    region: UNKNOWN.to_string(),
                    count: 2,
                    percentage: 67,
                },
                RegionalStat {
                    region: "Алматы".to_string(),
                    count: 1,
                    percentage: 33,
                },
            ]
        );
    }

    #[test]
    fn label_is_configurable() {
        let stats = regional_distribution(&[in_region(1, None)], "Unknown region");
        assert_eq!(stats[0].region, "Unknown region");
        assert_eq!(stats[0].percentage, 100);
    }

    #[test]
    fn sorted_by_count_with_stable_ties() {
        let objects = vec![
            in_region(1, Some("Павлодарская область")),
            in_region(2, Some("Алматинская область")),
            in_region(3, Some("Восточно-Казахстанская область")),
            in_region(4, Some("Восточно-Казахстанская область")),
            in_region(5, Some("Алматинская область")),
            in_region(6, Some("Восточно-Казахстанская область")),
        ];
        let regions: Vec<String> = regional_distribution(&objects, UNKNOWN)
            .into_iter()
            .map(|s| s.region)
            .collect();

        assert_eq!(
            regions,
            vec![
                "Восточно-Казахстанская область",
                "Алматинская область",
                "Павлодарская область",
            ]
        );
    }

    #[test]
    fn equal_counts_keep_first_seen_order() {
        let objects = vec![
            in_region(1, Some("Шымкент")),
            in_region(2, None),
            in_region(3, Some("Астана")),
            in_region(4, Some("Астана")),
            in_region(5, Some("Шымкент")),
            in_region(6, None),
        ];
        let regions: Vec<String> = regional_distribution(&objects, UNKNOWN)
            .into_iter()
            .map(|s| s.region)
            .collect();

        assert_eq!(regions, vec!["Шымкент", UNKNOWN, "Астана"]);
    }

    #[test]
    fn many_distinct_regions() {
        let names: Vec<String> = (0..50_000).map(|i| format!("Район {i}")).collect();
        let objects: Vec<InspectableObject> = names
            .iter()
            .enumerate()
            .map(|(i, name)| in_region(i64::try_from(i).unwrap(), Some(name)))
            .collect();
        let stats = regional_distribution(&objects, UNKNOWN);

        assert_eq!(stats.len(), names.len());
        assert!(stats.iter().all(|s| s.count == 1 && s.percentage == 0));
        assert_eq!(stats[0].region, "Район 0");
        assert_eq!(stats[49_999].region, "Район 49999");
    }

    #[test]
    fn empty_batch() {
        let objects: Vec<InspectableObject> = Vec::new();
        assert!(regional_distribution(&objects, UNKNOWN).is_empty());
    }
}
