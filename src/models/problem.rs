//! Problem instance.
//!
//! Aggregates every entity collection of a timetabling instance. All
//! collections are read-only during construction except the reservation
//! list, which only ever grows.

use super::{Building, Classroom, ClassroomId, Meeting, Preference, Reservation, TimeSlot};

/// A complete timetabling instance plus its reservation list.
///
/// Reservations added through [`Problem::with_reservation`] are *pre-loaded*
/// (fixed occupancy). Construction appends further reservations after them
/// and never touches the pre-loaded prefix.
#[derive(Debug, Clone, Default)]
pub struct Problem {
    /// Time slot catalog. May be empty when the instance carries none.
    pub slots: Vec<TimeSlot>,
    /// Building catalog.
    pub buildings: Vec<Building>,
    /// Rooms available for placement.
    pub classrooms: Vec<Classroom>,
    /// Meetings to place.
    pub meetings: Vec<Meeting>,
    /// Soft placement preferences.
    pub preferences: Vec<Preference>,
    reservations: Vec<Reservation>,
    preloaded: usize,
}

impl Problem {
    /// Creates an empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a time slot to the catalog.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Adds a building to the catalog.
    pub fn with_building(mut self, building: Building) -> Self {
        self.buildings.push(building);
        self
    }

    /// Adds a classroom.
    pub fn with_classroom(mut self, classroom: Classroom) -> Self {
        self.classrooms.push(classroom);
        self
    }

    /// Adds a meeting.
    pub fn with_meeting(mut self, meeting: Meeting) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Adds a preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preferences.push(preference);
        self
    }

    /// Adds a pre-loaded (fixed) reservation.
    pub fn with_reservation(mut self, reservation: Reservation) -> Self {
        self.reservations.insert(self.preloaded, reservation);
        self.preloaded += 1;
        self
    }

    /// All reservations: pre-loaded first, then constructed in commit order.
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Fixed occupancy supplied with the instance.
    pub fn preloaded_reservations(&self) -> &[Reservation] {
        &self.reservations[..self.preloaded]
    }

    /// Reservations committed by construction runs.
    pub fn constructed_reservations(&self) -> &[Reservation] {
        &self.reservations[self.preloaded..]
    }

    /// Appends a constructed reservation.
    pub(crate) fn commit(&mut self, reservation: Reservation) {
        self.reservations.push(reservation);
    }

    /// Finds a classroom by id.
    pub fn classroom(&self, id: ClassroomId) -> Option<&Classroom> {
        self.classrooms.iter().find(|c| c.id == id)
    }

    /// Finds a meeting by id.
    pub fn meeting(&self, id: &str) -> Option<&Meeting> {
        self.meetings.iter().find(|m| m.id == id)
    }

    /// Preferences targeting `meeting`, in instance order.
    pub fn applicable_preferences(&self, meeting: &Meeting) -> Vec<&Preference> {
        self.preferences
            .iter()
            .filter(|p| p.applies_to(meeting))
            .collect()
    }

    /// Sum of demand over all meetings.
    pub fn total_demand(&self) -> u64 {
        self.meetings.iter().map(|m| u64::from(m.demand)).sum()
    }
}
