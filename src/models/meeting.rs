//! Meeting model.
//!
//! A meeting is one weekly class session: a subject taught by one or more
//! professors to zero or more class groups, on a fixed day of the week, in
//! any one of an ordered list of acceptable time slots.

use serde::{Deserialize, Serialize};

/// Day of the week (0-based, as given by the instance).
pub type DayOfWeek = u8;

/// Time slot identifier.
pub type SlotId = u32;

/// A weekly class session to be placed into exactly one classroom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    /// Unique meeting identifier.
    pub id: String,
    /// Whether the session is practical (needs a lab).
    pub is_practical: bool,
    /// Required seats.
    pub demand: u32,
    /// Declared vacancies (informational only).
    pub vacancies: u32,
    /// Fixed day of the week.
    pub day_of_week: DayOfWeek,
    /// Acceptable slots, in order of preference.
    pub slot_ids: Vec<SlotId>,
    /// Professors teaching this meeting.
    pub professor_codes: Vec<String>,
    /// Subject taught.
    pub subject_code: String,
    /// Class groups attending.
    pub class_codes: Vec<String>,
}

impl Meeting {
    /// Creates a theoretical meeting with the given demand on `day_of_week`.
    pub fn new(id: impl Into<String>, demand: u32, day_of_week: DayOfWeek) -> Self {
        Self {
            id: id.into(),
            is_practical: false,
            demand,
            vacancies: 0,
            day_of_week,
            slot_ids: Vec::new(),
            professor_codes: Vec::new(),
            subject_code: String::new(),
            class_codes: Vec::new(),
        }
    }

    /// Sets the practical flag.
    pub fn with_practical(mut self, is_practical: bool) -> Self {
        self.is_practical = is_practical;
        self
    }

    /// Appends an acceptable slot.
    pub fn with_slot(mut self, slot_id: SlotId) -> Self {
        self.slot_ids.push(slot_id);
        self
    }

    /// Replaces the acceptable slots.
    pub fn with_slots(mut self, slot_ids: impl IntoIterator<Item = SlotId>) -> Self {
        self.slot_ids = slot_ids.into_iter().collect();
        self
    }

    /// Adds a professor.
    pub fn with_professor(mut self, code: impl Into<String>) -> Self {
        self.professor_codes.push(code.into());
        self
    }

    /// Sets the subject.
    pub fn with_subject(mut self, code: impl Into<String>) -> Self {
        self.subject_code = code.into();
        self
    }

    /// Adds a class group.
    pub fn with_class(mut self, code: impl Into<String>) -> Self {
        self.class_codes.push(code.into());
        self
    }

    /// Sets the declared vacancies.
    pub fn with_vacancies(mut self, vacancies: u32) -> Self {
        self.vacancies = vacancies;
        self
    }

    /// Whether the meeting has any slot it could be placed in.
    pub fn has_slots(&self) -> bool {
        !self.slot_ids.is_empty()
    }

    /// Whether the meeting is taught by `code`.
    pub fn has_professor(&self, code: &str) -> bool {
        self.professor_codes.iter().any(|p| p == code)
    }

    /// Whether class group `code` attends the meeting.
    pub fn has_class(&self, code: &str) -> bool {
        self.class_codes.iter().any(|c| c == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeting_builder() {
        let m = Meeting::new("M1", 35, 2)
            .with_practical(true)
            .with_slots([4, 5])
            .with_slot(6)
            .with_professor("P1")
            .with_professor("P2")
            .with_subject("CALC1")
            .with_class("T01")
            .with_vacancies(40);

        assert_eq!(m.id, "M1");
        assert_eq!(m.demand, 35);
        assert_eq!(m.day_of_week, 2);
        assert!(m.is_practical);
        assert_eq!(m.slot_ids, vec![4, 5, 6]);
        assert_eq!(m.subject_code, "CALC1");
        assert_eq!(m.vacancies, 40);
        assert!(m.has_slots());
    }

    #[test]
    fn test_code_lookups() {
        let m = Meeting::new("M1", 10, 0)
            .with_professor("P1")
            .with_class("T01");

        assert!(m.has_professor("P1"));
        assert!(!m.has_professor("P2"));
        assert!(m.has_class("T01"));
        assert!(!m.has_class("T02"));
    }

    #[test]
    fn test_meeting_without_slots() {
        let m = Meeting::new("M1", 10, 0);
        assert!(!m.has_slots());
    }
}
