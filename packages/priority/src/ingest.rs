//! Ingestion boundary: raw JSON records to [`InspectableObject`]s.
//!
//! Upstream payloads are duck-typed: optional fields may be missing, `null`,
//! or of the wrong JSON type, and `technicalCondition` sometimes arrives as a
//! string. Everything except the identifier degrades to a default here, so
//! the scoring code only ever sees the canonical shape.

use hydro_map_facility_models::{InspectableObject, ObjectId, ObjectKind, regions::canonical_region};
use serde_json::Value;

use crate::PriorityError;
use crate::condition::resolve_condition;

/// A record as received from a data source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Identifier, if the source provided a usable one.
    pub id: Option<ObjectId>,
    /// Display name.
    pub name: Option<String>,
    /// Free-form type label.
    pub object_type: Option<String>,
    /// Region name.
    pub region: Option<String>,
    /// Numeric `technicalCondition`, not yet range-checked.
    pub technical_condition: Option<i64>,
    /// Qualitative `riskLevel`.
    pub risk_level: Option<String>,
    /// Qualitative `dangerLevel`.
    pub danger_level: Option<String>,
    /// Passport issue date string.
    pub passport_date: Option<String>,
}

impl RawRecord {
    /// Extracts the known fields from a JSON object.
    ///
    /// Fields of an unexpected JSON type are treated as absent.
    #[must_use]
    pub fn from_json(fields: &serde_json::Map<String, Value>) -> Self {
        Self {
            id: fields.get("id").and_then(object_id),
            name: string_field(fields, "name"),
            object_type: string_field(fields, "type"),
            region: string_field(fields, "region"),
            technical_condition: fields.get("technicalCondition").and_then(lenient_int),
            risk_level: string_field(fields, "riskLevel"),
            danger_level: string_field(fields, "dangerLevel"),
            passport_date: string_field(fields, "passportDate"),
        }
    }

    /// Normalizes this record into the canonical shape.
    ///
    /// Returns `None` only when the record has no identifier.
    #[must_use]
    pub fn normalize(self, kind: ObjectKind) -> Option<InspectableObject> {
        let (condition, condition_source) = resolve_condition(&self);
        let id = self.id?;

        Some(InspectableObject {
            id,
            kind,
            name: self.name.unwrap_or_default(),
            object_type: self.object_type,
            region: self.region.as_deref().and_then(normalize_region),
            condition,
            condition_source,
            risk_level: self.risk_level,
            danger_level: self.danger_level,
            passport_date: self.passport_date,
        })
    }
}

/// Parses a JSON array of raw records into canonical objects of one kind.
///
/// # Errors
///
/// * [`PriorityError::NotAnArray`] if `value` is not an array
/// * [`PriorityError::NotAnObject`] if an element is not an object
/// * [`PriorityError::InvalidRecord`] if an element has no usable `id`
pub fn records_from_json(
    value: &Value,
    kind: ObjectKind,
) -> Result<Vec<InspectableObject>, PriorityError> {
    let Value::Array(items) = value else {
        return Err(PriorityError::NotAnArray {
            found: json_type_name(value),
        });
    };

    let objects = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let Value::Object(fields) = item else {
                return Err(PriorityError::NotAnObject { index });
            };
            RawRecord::from_json(fields)
                .normalize(kind)
                .ok_or_else(|| PriorityError::InvalidRecord {
                    index,
                    message: "missing or non-scalar id".to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!("Ingested {} {kind} records", objects.len());

    Ok(objects)
}

/// Integral numbers become [`ObjectId::Int`]; any other number keeps its
/// JSON spelling as [`ObjectId::Text`].
fn object_id(value: &Value) -> Option<ObjectId> {
    match value {
        Value::Number(n) => Some(
            integral_number(n).map_or_else(|| ObjectId::Text(n.to_string()), ObjectId::Int),
        ),
        Value::String(s) => Some(ObjectId::Text(s.clone())),
        _ => None,
    }
}

fn string_field(fields: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Accepts integers, integral floats and numeric strings.
fn lenient_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => integral_number(n),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// `n` as an `i64` if it is an integer or a float with no fractional part.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_number(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| {
        n.as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() < 1e15)
            .map(|f| f as i64)
    })
}

fn normalize_region(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(canonical_region(trimmed).map_or_else(|| trimmed.to_string(), str::to_string))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
