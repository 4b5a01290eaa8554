//! Soft placement preferences.
//!
//! A preference targets every meeting of a professor, a subject or a class
//! group and asks for rooms with particular attributes. Unmet requirements
//! are penalized during scoring but never disqualify a room.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Classroom, Meeting};

/// What a preference is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PreferenceCategory {
    /// Matches meetings taught by the professor code.
    Professor,
    /// Matches meetings of the subject code.
    Subject,
    /// Matches meetings attended by the class-group code.
    Class,
    /// Unrecognized category. Never matches any meeting.
    Custom(String),
}

impl PreferenceCategory {
    /// Parses a category name as written in instance files.
    pub fn from_name(name: &str) -> Self {
        match name {
            "professor" => Self::Professor,
            "subject" => Self::Subject,
            "class" => Self::Class,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Category name as written in instance files and reports.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Professor => "professor",
            Self::Subject => "subject",
            Self::Class => "class",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for PreferenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A soft constraint on room attributes.
///
/// Each `Some`/`true` field is an independent requirement; a classroom
/// failing two of them counts as two violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// Preference identifier.
    pub id: String,
    /// What the preference is keyed on.
    pub category: PreferenceCategory,
    /// Professor, subject or class code, depending on `category`.
    pub category_code: String,
    /// Desired building.
    pub building_id: Option<u32>,
    /// Desired floor.
    pub floor: Option<i32>,
    /// Desired board type.
    pub board: Option<String>,
    /// Whether a projector is wanted.
    pub projector: bool,
}

impl Preference {
    /// Creates a preference with no requirements yet.
    pub fn new(
        id: impl Into<String>,
        category: PreferenceCategory,
        category_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            category_code: category_code.into(),
            building_id: None,
            floor: None,
            board: None,
            projector: false,
        }
    }

    /// Preference on every meeting taught by `code`.
    pub fn professor(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(id, PreferenceCategory::Professor, code)
    }

    /// Preference on every meeting of subject `code`.
    pub fn subject(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(id, PreferenceCategory::Subject, code)
    }

    /// Preference on every meeting attended by class group `code`.
    pub fn class(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(id, PreferenceCategory::Class, code)
    }

    /// Requires a building.
    pub fn with_building(mut self, building_id: u32) -> Self {
        self.building_id = Some(building_id);
        self
    }

    /// Requires a floor.
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Requires a board type.
    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = Some(board.into());
        self
    }

    /// Requires a projector.
    pub fn with_projector(mut self) -> Self {
        self.projector = true;
        self
    }

    /// Whether this preference targets `meeting`.
    pub fn applies_to(&self, meeting: &Meeting) -> bool {
        match self.category {
            PreferenceCategory::Professor => meeting.has_professor(&self.category_code),
            PreferenceCategory::Subject => meeting.subject_code == self.category_code,
            PreferenceCategory::Class => meeting.has_class(&self.category_code),
            PreferenceCategory::Custom(_) => false,
        }
    }

    /// Number of requirements `classroom` fails to meet.
    pub fn unmet_requirements(&self, classroom: &Classroom) -> u32 {
        let mut unmet = 0;
        if self.building_id.is_some_and(|b| b != classroom.building_id) {
            unmet += 1;
        }
        if self.floor.is_some_and(|f| f != classroom.floor) {
            unmet += 1;
        }
        if self.board.as_deref().is_some_and(|b| b != classroom.board) {
            unmet += 1;
        }
        if self.projector && !classroom.projector {
            unmet += 1;
        }
        unmet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(PreferenceCategory::from_name("professor"), PreferenceCategory::Professor);
        assert_eq!(PreferenceCategory::from_name("subject"), PreferenceCategory::Subject);
        assert_eq!(PreferenceCategory::from_name("class"), PreferenceCategory::Class);
        assert_eq!(
            PreferenceCategory::from_name("building"),
            PreferenceCategory::Custom("building".into())
        );
        assert_eq!(PreferenceCategory::Class.to_string(), "class");
        assert_eq!(PreferenceCategory::Custom("x".into()).as_str(), "x");
    }

    #[test]
    fn test_applies_to() {
        let m = Meeting::new("M1", 30, 1)
            .with_professor("P1")
            .with_subject("S1")
            .with_class("C1");

        assert!(Preference::professor("p", "P1").applies_to(&m));
        assert!(!Preference::professor("p", "P2").applies_to(&m));
        assert!(Preference::subject("p", "S1").applies_to(&m));
        assert!(!Preference::subject("p", "S2").applies_to(&m));
        assert!(Preference::class("p", "C1").applies_to(&m));
        assert!(!Preference::class("p", "C2").applies_to(&m));
        assert!(!Preference::new("p", PreferenceCategory::Custom("x".into()), "P1").applies_to(&m));
    }

    #[test]
    fn test_unmet_requirements_counts_each_attribute() {
        let room = Classroom::new(1, 30)
            .with_building(1)
            .with_floor(0)
            .with_board("white");

        let pref = Preference::professor("p", "P1")
            .with_building(2)
            .with_floor(1)
            .with_board("smart")
            .with_projector();
        assert_eq!(pref.unmet_requirements(&room), 4);

        let satisfied = Preference::professor("p", "P1")
            .with_building(1)
            .with_floor(0)
            .with_board("white");
        assert_eq!(satisfied.unmet_requirements(&room), 0);
    }

    #[test]
    fn test_empty_preference_is_always_met() {
        let room = Classroom::new(1, 30);
        assert_eq!(Preference::subject("p", "S1").unmet_requirements(&room), 0);
    }
}
