//! Classroom model.
//!
//! Classrooms are the rooms meetings are placed into. Each has a seat
//! capacity, an optional lab designation and the physical attributes
//! (building, floor, board, projector) that soft preferences refer to.

use serde::{Deserialize, Serialize};

/// Classroom identifier.
pub type ClassroomId = u32;

/// A room that can host meetings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: ClassroomId,
    /// Number of seats.
    pub capacity: u32,
    /// Whether the room is equipped as a lab (required by practical meetings).
    pub is_lab: bool,
    /// Building the room belongs to.
    pub building_id: u32,
    /// Floor within the building.
    pub floor: i32,
    /// Board type tag (e.g. "white", "smart").
    pub board: String,
    /// Whether a projector is installed.
    pub projector: bool,
    /// Free-text description.
    pub description: String,
}

impl Classroom {
    /// Creates a plain (non-lab) classroom with the given capacity.
    pub fn new(id: ClassroomId, capacity: u32) -> Self {
        Self {
            id,
            capacity,
            is_lab: false,
            building_id: 0,
            floor: 0,
            board: String::new(),
            projector: false,
            description: String::new(),
        }
    }

    /// Creates a lab classroom with the given capacity.
    pub fn lab(id: ClassroomId, capacity: u32) -> Self {
        Self::new(id, capacity).with_lab(true)
    }

    /// Sets the lab flag.
    pub fn with_lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }

    /// Sets the building.
    pub fn with_building(mut self, building_id: u32) -> Self {
        self.building_id = building_id;
        self
    }

    /// Sets the floor.
    pub fn with_floor(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Sets the board type.
    pub fn with_board(mut self, board: impl Into<String>) -> Self {
        self.board = board.into();
        self
    }

    /// Sets the projector flag.
    pub fn with_projector(mut self, projector: bool) -> Self {
        self.projector = projector;
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether this room can seat `demand` students.
    #[inline]
    pub fn fits(&self, demand: u32) -> bool {
        self.capacity >= demand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classroom_builder() {
        let c = Classroom::new(7, 40)
            .with_building(2)
            .with_floor(3)
            .with_board("smart")
            .with_projector(true)
            .with_description("Room 307");

        assert_eq!(c.id, 7);
        assert_eq!(c.capacity, 40);
        assert!(!c.is_lab);
        assert_eq!(c.building_id, 2);
        assert_eq!(c.floor, 3);
        assert_eq!(c.board, "smart");
        assert!(c.projector);
        assert_eq!(c.description, "Room 307");
    }

    #[test]
    fn test_lab_constructor() {
        let c = Classroom::lab(1, 20);
        assert!(c.is_lab);
        assert_eq!(c.capacity, 20);
    }

    #[test]
    fn test_fits() {
        let c = Classroom::new(1, 30);
        assert!(c.fits(30));
        assert!(c.fits(0));
        assert!(!c.fits(31));
    }
}
