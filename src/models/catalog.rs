//! Reference entities carried by instance files.

use serde::{Deserialize, Serialize};

use super::SlotId;

/// A weekly time slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot identifier referenced by meetings and reservations.
    pub id: SlotId,
    /// Start time label (e.g. "08:00").
    pub start_time: String,
    /// End time label.
    pub end_time: String,
}

impl TimeSlot {
    /// Creates a time slot.
    pub fn new(id: SlotId, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            id,
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// A campus building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Building identifier referenced by classrooms and preferences.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
}

impl Building {
    /// Creates a building.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
