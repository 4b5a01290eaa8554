//! Construction quality statistics.
//!
//! Accumulated while the constructor commits placements; read-only for
//! everyone else.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement rate | placed / meetings considered |
//! | Demand rate | demand placed / total demand |
//! | Waste | capacity − demand of each placement |
//! | Preference satisfaction | applicable preferences whose placement had zero violations |
//! | Under-utilized seats | Σ(capacity − demand) over rooms filled below half capacity |
//! | Standing students | Σ(demand − capacity) over overfull placements |

use std::collections::BTreeMap;

use crate::models::{
    Classroom, ClassroomId, DayOfWeek, Meeting, Preference, PreferenceCategory, SlotId,
};

use super::candidate::Candidate;

/// Aggregate usage of one classroom.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassroomUsage {
    /// Meetings placed in the room.
    pub meetings: usize,
    /// Sum of their demand.
    pub demand: u64,
    /// Room capacity.
    pub capacity: u32,
}

impl ClassroomUsage {
    /// Assigned demand over capacity (0.0 for zero-capacity rooms).
    pub fn utilization(&self) -> f64 {
        if self.capacity == 0 {
            0.0
        } else {
            self.demand as f64 / f64::from(self.capacity)
        }
    }
}

/// Aggregate usage of one day of the week.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayUsage {
    /// Meetings placed on the day.
    pub meetings: usize,
    /// Sum of their demand.
    pub demand: u64,
}

/// Satisfaction counts for one preference category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreferenceTally {
    /// Applicable preference instances over placed meetings.
    pub total: usize,
    /// Instances whose placement had no violations.
    pub satisfied: usize,
    /// Instances whose placement had at least one violation.
    pub violated: usize,
}

impl PreferenceTally {
    /// Satisfied fraction (0.0..1.0). 0.0 when nothing was counted.
    pub fn satisfaction_rate(&self) -> f64 {
        ratio(self.satisfied as f64, self.total as f64)
    }
}

/// Statistics of one construction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    meetings_considered: usize,
    placed: usize,
    unplaced: Vec<String>,
    total_demand: u64,
    demand_placed: u64,
    waste_values: Vec<u32>,
    classrooms: BTreeMap<ClassroomId, ClassroomUsage>,
    days: BTreeMap<DayOfWeek, DayUsage>,
    slot_demand: BTreeMap<(DayOfWeek, SlotId), u64>,
    preferences: BTreeMap<PreferenceCategory, PreferenceTally>,
    standing_students: u64,
}

impl Statistics {
    /// Records a committed placement of `meeting` into `classroom` at `slot`.
    pub(crate) fn record_placement(
        &mut self,
        meeting: &Meeting,
        classroom: &Classroom,
        slot: SlotId,
        candidate: &Candidate,
        preferences: &[&Preference],
    ) {
        let demand = u64::from(meeting.demand);
        self.meetings_considered += 1;
        self.placed += 1;
        self.total_demand += demand;
        self.demand_placed += demand;
        self.waste_values.push(candidate.waste);

        if meeting.demand > classroom.capacity {
            self.standing_students += u64::from(meeting.demand - classroom.capacity);
        }

        let usage = self.classrooms.entry(classroom.id).or_default();
        usage.meetings += 1;
        usage.demand += demand;
        usage.capacity = classroom.capacity;

        let day = self.days.entry(meeting.day_of_week).or_default();
        day.meetings += 1;
        day.demand += demand;

        *self
            .slot_demand
            .entry((meeting.day_of_week, slot))
            .or_insert(0) += demand;

        for pref in preferences {
            let tally = self.preferences.entry(pref.category.clone()).or_default();
            tally.total += 1;
            if candidate.violations == 0 {
                tally.satisfied += 1;
            } else {
                tally.violated += 1;
            }
        }
    }

    /// Records a meeting that could not be placed.
    pub(crate) fn record_unplaced(&mut self, meeting: &Meeting) {
        self.meetings_considered += 1;
        self.total_demand += u64::from(meeting.demand);
        self.unplaced.push(meeting.id.clone());
    }

    /// Meetings the run considered.
    pub fn meetings_considered(&self) -> usize {
        self.meetings_considered
    }

    /// Meetings that received a reservation.
    pub fn placed_count(&self) -> usize {
        self.placed
    }

    /// Meetings left without a reservation.
    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }

    /// Ids of unplaced meetings, in processing order.
    pub fn unplaced_meetings(&self) -> &[String] {
        &self.unplaced
    }

    /// Demand over all considered meetings.
    pub fn total_demand(&self) -> u64 {
        self.total_demand
    }

    /// Demand of placed meetings.
    pub fn demand_placed(&self) -> u64 {
        self.demand_placed
    }

    /// Students whose meeting was left unplaced.
    pub fn unallocated_students(&self) -> u64 {
        self.total_demand - self.demand_placed
    }

    /// Placed fraction of considered meetings (0.0..1.0).
    pub fn placement_rate(&self) -> f64 {
        ratio(self.placed as f64, self.meetings_considered as f64)
    }

    /// Placed fraction of total demand (0.0..1.0).
    pub fn demand_rate(&self) -> f64 {
        ratio(self.demand_placed as f64, self.total_demand as f64)
    }

    /// Waste of each placement, in commit order.
    pub fn waste_values(&self) -> &[u32] {
        &self.waste_values
    }

    /// Sum of waste over all placements.
    pub fn total_waste(&self) -> u64 {
        self.waste_values.iter().map(|&w| u64::from(w)).sum()
    }

    /// Mean waste per placement.
    pub fn average_waste(&self) -> f64 {
        ratio(self.total_waste() as f64, self.waste_values.len() as f64)
    }

    /// Smallest placement waste.
    pub fn min_waste(&self) -> Option<u32> {
        self.waste_values.iter().copied().min()
    }

    /// Largest placement waste.
    pub fn max_waste(&self) -> Option<u32> {
        self.waste_values.iter().copied().max()
    }

    /// Usage per classroom that received at least one placement.
    pub fn classroom_usage(&self) -> &BTreeMap<ClassroomId, ClassroomUsage> {
        &self.classrooms
    }

    /// Usage per day of the week.
    pub fn day_usage(&self) -> &BTreeMap<DayOfWeek, DayUsage> {
        &self.days
    }

    /// Placed demand per (day, slot).
    pub fn slot_demand(&self) -> &BTreeMap<(DayOfWeek, SlotId), u64> {
        &self.slot_demand
    }

    /// Preference satisfaction per category.
    pub fn preference_tallies(&self) -> &BTreeMap<PreferenceCategory, PreferenceTally> {
        &self.preferences
    }

    /// Idle seats in classrooms whose assigned demand is below half capacity.
    pub fn under_utilized_seats(&self) -> u64 {
        self.classrooms
            .values()
            .filter(|u| u.capacity > 0 && (u.demand as f64) < f64::from(u.capacity) / 2.0)
            .map(|u| u64::from(u.capacity).saturating_sub(u.demand))
            .sum()
    }

    /// Students placed in rooms smaller than their meeting.
    ///
    /// Always zero while feasibility excludes undersized rooms.
    pub fn standing_students(&self) -> u64 {
        self.standing_students
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
