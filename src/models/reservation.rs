//! Reservation (committed placement) model.
//!
//! A reservation occupies one classroom during one (day, slot) pair. Two
//! reservations conflict iff they share classroom, day and slot.

use serde::{Deserialize, Serialize};

use super::{ClassroomId, DayOfWeek, SlotId};

/// The occupancy key a reservation holds exclusively.
pub type OccupancyKey = (ClassroomId, DayOfWeek, SlotId);

/// A committed (meeting, classroom, day, slot) assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Reservation {
    /// Meeting (or external booking) that holds the room.
    pub meeting_id: String,
    /// Reserved classroom.
    pub classroom_id: ClassroomId,
    /// Day of the week.
    pub day_of_week: DayOfWeek,
    /// Time slot.
    pub slot_id: SlotId,
}

impl Reservation {
    /// Creates a new reservation.
    pub fn new(
        meeting_id: impl Into<String>,
        classroom_id: ClassroomId,
        day_of_week: DayOfWeek,
        slot_id: SlotId,
    ) -> Self {
        Self {
            meeting_id: meeting_id.into(),
            classroom_id,
            day_of_week,
            slot_id,
        }
    }

    /// The (classroom, day, slot) triple this reservation occupies.
    #[inline]
    pub fn key(&self) -> OccupancyKey {
        (self.classroom_id, self.day_of_week, self.slot_id)
    }

    /// Whether both reservations hold the same room at the same time.
    #[inline]
    pub fn conflicts_with(&self, other: &Reservation) -> bool {
        self.key() == other.key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_requires_all_three() {
        let a = Reservation::new("M1", 1, 2, 3);
        assert!(a.conflicts_with(&Reservation::new("M2", 1, 2, 3)));
        assert!(!a.conflicts_with(&Reservation::new("M2", 9, 2, 3)));
        assert!(!a.conflicts_with(&Reservation::new("M2", 1, 9, 3)));
        assert!(!a.conflicts_with(&Reservation::new("M2", 1, 2, 9)));
    }

    #[test]
    fn test_key() {
        assert_eq!(Reservation::new("M1", 4, 1, 7).key(), (4, 1, 7));
    }
}
