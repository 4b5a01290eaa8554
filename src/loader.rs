//! JSON instance loader.
//!
//! Reads the instance format produced by the timetabling instance
//! generator: a top-level object with `schedules`, `buildings`,
//! `classrooms`, `meetings`, `preferences` and `reservations` arrays.
//! Unknown sections (`professors`, `subjects`, `restrictions`, ...) are
//! ignored.
//!
//! # Leniency
//!
//! Instance files come from several generators, so fields are read
//! tolerantly:
//! - several key spellings per field (first usable one wins);
//! - integers given as numeric strings;
//! - booleans given as `"true"`/`"1"` strings or integers;
//! - string lists holding numbers or `{ "id": ... }` objects;
//! - preference building ids read from their leading digits (`"12abc"` is
//!   building 12, `"north"` is no building);
//! - missing ids of slots, buildings and classrooms default to their
//!   1-based position.
//!
//! A file that cannot be read, is not JSON, or fails
//! [`validate_problem`] is rejected as a whole. Unknown slot references
//! are only logged as warnings.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::models::{
    Building, Classroom, Meeting, Preference, PreferenceCategory, Problem, Reservation, TimeSlot,
};
use crate::validation::{slot_reference_warnings, validate_problem};

/// Reads, parses and validates the instance at `path`.
pub fn load_problem(path: impl AsRef<Path>) -> Result<Problem, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let problem = parse_problem(&content)?;
    info!(
        path = %path.display(),
        classrooms = problem.classrooms.len(),
        meetings = problem.meetings.len(),
        preferences = problem.preferences.len(),
        reservations = problem.reservations().len(),
        "loaded instance"
    );
    Ok(problem)
}

/// Parses and validates an instance from JSON text.
pub fn parse_problem(json: &str) -> Result<Problem, LoadError> {
    let root: Value = serde_json::from_str(json)?;
    let root = root
        .as_object()
        .ok_or_else(|| LoadError::Format("instance root must be a JSON object".into()))?;

    let mut problem = Problem::new();
    for (position, record) in records(root, "schedules")? {
        problem = problem.with_slot(parse_slot(&record, position)?);
    }
    for (position, record) in records(root, "buildings")? {
        problem = problem.with_building(parse_building(&record, position)?);
    }
    for (position, record) in records(root, "classrooms")? {
        problem = problem.with_classroom(parse_classroom(&record, position)?);
    }
    for (_, record) in records(root, "meetings")? {
        problem = problem.with_meeting(parse_meeting(&record)?);
    }
    for (_, record) in records(root, "preferences")? {
        problem = problem.with_preference(parse_preference(&record)?);
    }
    for (_, record) in records(root, "reservations")? {
        problem = problem.with_reservation(parse_reservation(&record)?);
    }

    validate_problem(&problem).map_err(LoadError::Invalid)?;
    for warning in slot_reference_warnings(&problem) {
        warn!("{warning}");
    }
    Ok(problem)
}

fn parse_slot(r: &Record<'_>, position: usize) -> Result<TimeSlot, LoadError> {
    Ok(TimeSlot::new(
        r.u32_or(&["ID", "id"], position_id(position))?,
        r.string(&["startTime"]),
        r.string(&["endTime"]),
    ))
}

fn parse_building(r: &Record<'_>, position: usize) -> Result<Building, LoadError> {
    Ok(Building::new(
        r.u32_or(&["ID", "id"], position_id(position))?,
        r.string(&["name"]),
    ))
}

fn parse_classroom(r: &Record<'_>, position: usize) -> Result<Classroom, LoadError> {
    Ok(
        Classroom::new(
            r.u32_or(&["ID", "id"], position_id(position))?,
            r.u32_or(&["capacity", "vacancies"], 0)?,
        )
        .with_lab(r.boolean(&["isLab", "isLaboratory"]))
        .with_building(r.u32_or(&["buildingID", "buildingId", "building"], 0)?)
        .with_floor(r.i32_or(&["floor"], 0)?)
        .with_board(r.string(&["board"]))
        .with_projector(r.boolean(&["projector"]))
        .with_description(r.string(&["description"])),
    )
}

fn parse_meeting(r: &Record<'_>) -> Result<Meeting, LoadError> {
    let mut meeting = Meeting::new(
        r.string(&["id"]),
        r.u32_or(&["demand"], 0)?,
        r.u8_or(&["dayOfWeek", "day"], 0)?,
    )
    .with_practical(r.boolean(&["isPractical", "practical"]))
    .with_subject(r.string(&["subjectCode", "subject"]))
    .with_vacancies(r.u32_or(&["vacancies"], 0)?);

    meeting.professor_codes = r.strings(&["professorCodes", "professors"]);
    meeting.class_codes = r.strings(&["classIds"]);
    meeting.slot_ids = r
        .ints(&["scheduleIds", "schedules"])
        .into_iter()
        .map(|v| r.convert("scheduleIds", v))
        .collect::<Result<_, _>>()?;
    Ok(meeting)
}

fn parse_preference(r: &Record<'_>) -> Result<Preference, LoadError> {
    let mut pref = Preference::new(
        r.string(&["id"]),
        PreferenceCategory::from_name(&r.string(&["category"])),
        r.string(&["categoryCode"]),
    );
    pref.building_id = leading_u32(&r.string(&["buildingId"]));
    pref.floor = match r.i32_or(&["floor"], -1)? {
        -1 => None,
        floor => Some(floor),
    };
    pref.board = Some(r.string(&["board"])).filter(|b| !b.is_empty());
    pref.projector = r.boolean(&["projector"]);
    Ok(pref)
}

fn parse_reservation(r: &Record<'_>) -> Result<Reservation, LoadError> {
    Ok(Reservation::new(
        r.string(&["id"]),
        r.u32_or(&["classroomID", "classroomId", "classroom"], 0)?,
        r.u8_or(&["dayOfWeek", "day"], 0)?,
        r.u32_or(&["scheduleID", "scheduleId", "schedule"], 0)?,
    ))
}

fn position_id(position: usize) -> u32 {
    u32::try_from(position + 1).unwrap_or(u32::MAX)
}

/// Object records of a top-level section with their positions.
fn records<'a>(
    root: &'a Map<String, Value>,
    section: &'static str,
) -> Result<Vec<(usize, Record<'a>)>, LoadError> {
    let Some(items) = root.get(section).and_then(Value::as_array) else {
        debug!(section, "section absent, treating as empty");
        return Ok(Vec::new());
    };
    items
        .iter()
        .enumerate()
        .map(|(position, item)| {
            item.as_object()
                .map(|fields| {
                    (
                        position,
                        Record {
                            section,
                            position,
                            fields,
                        },
                    )
                })
                .ok_or_else(|| {
                    LoadError::Format(format!("{section}[{position}] is not a JSON object"))
                })
        })
        .collect()
}

/// One JSON object with tolerant field accessors.
struct Record<'a> {
    section: &'static str,
    position: usize,
    fields: &'a Map<String, Value>,
}

impl Record<'_> {
    /// Non-null values stored under `keys`, in key order.
    fn values(&self, keys: &[&str]) -> Vec<&Value> {
        keys.iter()
            .filter_map(|k| self.fields.get(*k))
            .filter(|v| !v.is_null())
            .collect()
    }

    fn int(&self, keys: &[&str]) -> Option<i64> {
        self.values(keys).into_iter().find_map(coerce_int)
    }

    fn convert<T: TryFrom<i64>>(&self, field: &str, value: i64) -> Result<T, LoadError> {
        T::try_from(value).map_err(|_| {
            LoadError::Format(format!(
                "{}[{}].{}: value {} out of range",
                self.section, self.position, field, value
            ))
        })
    }

    fn int_or<T: TryFrom<i64>>(&self, keys: &[&str], default: T) -> Result<T, LoadError> {
        match self.int(keys) {
            Some(value) => self.convert(keys[0], value),
            None => Ok(default),
        }
    }

    fn u32_or(&self, keys: &[&str], default: u32) -> Result<u32, LoadError> {
        self.int_or(keys, default)
    }

    fn u8_or(&self, keys: &[&str], default: u8) -> Result<u8, LoadError> {
        self.int_or(keys, default)
    }

    fn i32_or(&self, keys: &[&str], default: i32) -> Result<i32, LoadError> {
        self.int_or(keys, default)
    }

    fn boolean(&self, keys: &[&str]) -> bool {
        self.values(keys)
            .into_iter()
            .find_map(coerce_bool)
            .unwrap_or(false)
    }

    fn string(&self, keys: &[&str]) -> String {
        self.values(keys)
            .into_iter()
            .filter_map(coerce_string)
            .find(|s| !s.is_empty())
            .unwrap_or_default()
    }

    fn strings(&self, keys: &[&str]) -> Vec<String> {
        self.values(keys)
            .into_iter()
            .filter_map(Value::as_array)
            .map(|items| items.iter().filter_map(coerce_list_string).collect::<Vec<_>>())
            .find(|list| !list.is_empty())
            .unwrap_or_default()
    }

    fn ints(&self, keys: &[&str]) -> Vec<i64> {
        self.values(keys)
            .into_iter()
            .filter_map(Value::as_array)
            .map(|items| items.iter().filter_map(coerce_int).collect::<Vec<_>>())
            .find(|list| !list.is_empty())
            .unwrap_or_default()
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Unsigned integer formed by the leading digits of `s`, after optional
/// whitespace and `+`.
fn leading_u32(s: &str) -> Option<u32> {
    let s = s.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => {
            let s = s.trim().to_ascii_lowercase();
            Some(s == "true" || s == "1")
        }
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    }
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_list_string(value: &Value) -> Option<String> {
    match value {
        Value::Object(fields) => fields.get("id").and_then(coerce_string),
        other => coerce_string(other),
    }
}
