//! Input validation for timetabling instances.
//!
//! Checks structural integrity of an instance before construction. Detects:
//! - Duplicate classroom, meeting and slot IDs
//! - Reservations referencing unknown classrooms
//! - Pre-loaded reservations double-booking a classroom
//!
//! Slot references missing from a non-empty slot catalog are reported
//! separately by [`slot_reference_warnings`]; construction only needs slot
//! ids, so they do not make an instance unusable.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::models::{OccupancyKey, Problem};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// A reservation references a classroom that doesn't exist.
    InvalidClassroomReference,
    /// A meeting or reservation references a slot missing from the catalog.
    InvalidSlotReference,
    /// Two pre-loaded reservations hold the same classroom, day and slot.
    ConflictingReservation,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// Checks:
/// 1. No duplicate classroom IDs
/// 2. No duplicate meeting IDs
/// 3. No duplicate slot IDs
/// 4. Every reservation references an existing classroom
/// 5. No two pre-loaded reservations share (classroom, day, slot)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &Problem) -> ValidationResult {
    let mut errors = Vec::new();

    let mut classroom_ids = HashSet::new();
    for c in &problem.classrooms {
        if !classroom_ids.insert(c.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate classroom ID: {}", c.id),
            ));
        }
    }

    let mut meeting_ids = HashSet::new();
    for m in &problem.meetings {
        if !meeting_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate meeting ID: {}", m.id),
            ));
        }
    }

    let mut slot_ids = HashSet::new();
    for s in &problem.slots {
        if !slot_ids.insert(s.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate slot ID: {}", s.id),
            ));
        }
    }

    // Check reservation references and double bookings
    let mut holders: HashMap<OccupancyKey, &str> = HashMap::new();
    for r in problem.reservations() {
        if !classroom_ids.contains(&r.classroom_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidClassroomReference,
                format!(
                    "Reservation '{}' references unknown classroom {}",
                    r.meeting_id, r.classroom_id
                ),
            ));
        }
        if let Some(previous) = holders.insert(r.key(), r.meeting_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::ConflictingReservation,
                format!(
                    "Reservations '{}' and '{}' both hold classroom {} on day {} slot {}",
                    previous, r.meeting_id, r.classroom_id, r.day_of_week, r.slot_id
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Meetings and reservations referencing slots absent from the catalog.
///
/// Empty when the instance has no slot catalog.
pub fn slot_reference_warnings(problem: &Problem) -> Vec<ValidationError> {
    let slot_ids: HashSet<_> = problem.slots.iter().map(|s| s.id).collect();
    if slot_ids.is_empty() {
        return Vec::new();
    }

    let mut warnings = Vec::new();
    for m in &problem.meetings {
        for slot in m.slot_ids.iter().filter(|s| !slot_ids.contains(*s)) {
            warnings.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotReference,
                format!("Meeting '{}' references unknown slot {}", m.id, slot),
            ));
        }
    }
    for r in problem.reservations() {
        if !slot_ids.contains(&r.slot_id) {
            warnings.push(ValidationError::new(
                ValidationErrorKind::InvalidSlotReference,
                format!(
                    "Reservation '{}' references unknown slot {}",
                    r.meeting_id, r.slot_id
                ),
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Meeting, Reservation, TimeSlot};

    fn sample_problem() -> Problem {
        Problem::new()
            .with_slot(TimeSlot::new(1, "08:00", "09:40"))
            .with_slot(TimeSlot::new(2, "10:00", "11:40"))
            .with_classroom(Classroom::new(1, 30))
            .with_classroom(Classroom::lab(2, 20))
            .with_meeting(Meeting::new("M1", 25, 0).with_slots([1, 2]))
            .with_meeting(Meeting::new("M2", 15, 1).with_slot(2))
            .with_reservation(Reservation::new("fixed", 1, 0, 1))
    }

    fn has_kind(errors: &[ValidationError], kind: ValidationErrorKind) -> bool {
        errors.iter().any(|e| e.kind == kind)
    }

    #[test]
    fn test_valid_problem() {
        assert!(validate_problem(&sample_problem()).is_ok());
    }

    #[test]
    fn test_duplicate_classroom_id() {
        let p = sample_problem().with_classroom(Classroom::new(1, 99));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("classroom")));
    }

    #[test]
    fn test_duplicate_meeting_id() {
        let p = sample_problem().with_meeting(Meeting::new("M1", 5, 0).with_slot(1));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("meeting")));
    }

    #[test]
    fn test_duplicate_slot_id() {
        let p = sample_problem().with_slot(TimeSlot::new(2, "x", "y"));
        let errors = validate_problem(&p).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("slot")));
    }

    #[test]
    fn test_unknown_classroom_reference() {
        let p = sample_problem().with_reservation(Reservation::new("ext", 42, 0, 1));
        let errors = validate_problem(&p).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::InvalidClassroomReference));
    }

    #[test]
    fn test_conflicting_reservations() {
        let p = sample_problem().with_reservation(Reservation::new("other", 1, 0, 1));
        let errors = validate_problem(&p).unwrap_err();
        assert!(has_kind(&errors, ValidationErrorKind::ConflictingReservation));
    }

    #[test]
    fn test_unknown_slot_reference_is_warning() {
        let p = sample_problem()
            .with_meeting(Meeting::new("M3", 5, 0).with_slot(9))
            .with_reservation(Reservation::new("late", 2, 4, 8));
        assert!(validate_problem(&p).is_ok());

        let warnings = slot_reference_warnings(&p);
        assert_eq!(warnings.len(), 2);
        assert!(has_kind(&warnings, ValidationErrorKind::InvalidSlotReference));
        assert!(warnings[0].message.contains("Meeting 'M3'"));
        assert!(warnings[1].message.contains("Reservation 'late'"));
    }

    #[test]
    fn test_slots_unchecked_without_catalog() {
        let p = Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_meeting(Meeting::new("M1", 10, 0).with_slot(77));
        assert!(validate_problem(&p).is_ok());
        assert!(slot_reference_warnings(&p).is_empty());
        assert!(slot_reference_warnings(&sample_problem()).is_empty());
    }

    #[test]
    fn test_multiple_errors() {
        let p = sample_problem()
            .with_classroom(Classroom::new(2, 10))
            .with_reservation(Reservation::new("ext", 42, 3, 9));
        let errors = validate_problem(&p).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
