//! Export of ranked lists for download and reporting.

use hydro_map_priority_models::{PriorityLevel, RankedObject};
use serde::Serialize;

use crate::PriorityError;

/// Flat CSV row for one ranked object.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    id: String,
    kind: &'a str,
    name: &'a str,
    region: &'a str,
    technical_condition: u8,
    passport_age: i32,
    score: i32,
    level: PriorityLevel,
}

/// Serializes a ranked list as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`PriorityError::Json`] if serialization fails.
pub fn export_json(ranked: &[RankedObject]) -> Result<String, PriorityError> {
    Ok(serde_json::to_string_pretty(ranked)?)
}

/// Serializes a ranked list as CSV with a header row.
///
/// Objects without a region get an empty `region` cell.
///
/// # Errors
///
/// Returns [`PriorityError::Csv`] if a row cannot be written.
pub fn export_csv(ranked: &[RankedObject]) -> Result<String, PriorityError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for r in ranked {
        writer.serialize(CsvRow {
            id: r.object.id.to_string(),
            kind: r.object.kind.as_ref(),
            name: &r.object.name,
            region: r.object.region.as_deref().unwrap_or_default(),
            technical_condition: r.object.condition.value(),
            passport_age: r.passport_age,
            score: r.priority.score,
            level: r.priority.level,
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;

    Ok(String::from_utf8(bytes)?)
}
