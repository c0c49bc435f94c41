//! Loads object collections from JSON files.

use std::path::Path;

use hydro_map_analytics_models::AnalyticsInput;
use hydro_map_facility_models::{InspectableObject, ObjectKind};
use hydro_map_priority::records_from_json;

/// Reads a JSON array of records. A missing path yields an empty collection.
///
/// Accepts either a bare array or an API envelope of the form
/// `{ "data": [...] }`.
pub fn load(
    path: Option<&Path>,
    kind: ObjectKind,
) -> Result<Vec<InspectableObject>, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };

    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .map_err(|e| format!("Invalid JSON in {}: {e}", path.display()))?;
    let records = match value {
        serde_json::Value::Object(mut envelope) if envelope.contains_key("data") => {
            envelope.remove("data").unwrap_or_default()
        }
        other => other,
    };

    let objects = records_from_json(&records, kind)
        .map_err(|e| format!("{}: {e}", path.display()))?;
    log::info!("Loaded {} {kind} records from {}", objects.len(), path.display());

    Ok(objects)
}

/// Loads all three collections for an analytics report.
pub fn load_all(
    water_bodies: Option<&Path>,
    facilities: Option<&Path>,
    sensors: Option<&Path>,
) -> Result<AnalyticsInput, Box<dyn std::error::Error>> {
    Ok(AnalyticsInput {
        water_bodies: load(water_bodies, ObjectKind::WaterBody)?,
        facilities: load(facilities, ObjectKind::Facility)?,
        sensors: load(sensors, ObjectKind::Sensor)?,
    })
}
