//! Feasibility filtering and candidate scoring.
//!
//! For one meeting and one of its slots, enumerates classrooms in ascending
//! id order, drops the infeasible ones and scores the rest.
//!
//! # Feasibility
//! A classroom is a candidate iff it is free at `(day, slot)`, is a lab when
//! the meeting is practical, and seats the whole demand.
//!
//! # Score
//! `score = waste + violations × penalty` where `waste = capacity − demand`
//! and `violations` counts unmet preference requirements. Lower is better.

use std::collections::HashSet;

use crate::models::{
    Classroom, ClassroomId, DayOfWeek, Meeting, OccupancyKey, Preference, Reservation, SlotId,
};

/// Candidate desirability. Lower = better.
pub type Score = u64;

/// Preference penalty used by the deterministic best-fit policy.
pub const BEST_FIT_PREFERENCE_PENALTY: Score = 10_000;

/// Preference penalty used by the RCL policy. The smaller value widens the
/// quality band the RCL threshold is computed over.
pub const RCL_PREFERENCE_PENALTY: Score = 1_000;

/// A feasible classroom for a meeting in a given slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Candidate classroom.
    pub classroom_id: ClassroomId,
    /// Position of the classroom in the instance's classroom list.
    pub classroom_index: usize,
    /// Combined score.
    pub score: Score,
    /// Spare seats (`capacity − demand`).
    pub waste: u32,
    /// Unmet preference requirements.
    pub violations: u32,
}

/// Set of occupied `(classroom, day, slot)` keys.
#[derive(Debug, Clone, Default)]
pub struct Occupancy {
    occupied: HashSet<OccupancyKey>,
}

impl Occupancy {
    /// Builds the occupancy implied by existing reservations.
    pub fn from_reservations(reservations: &[Reservation]) -> Self {
        Self {
            occupied: reservations.iter().map(Reservation::key).collect(),
        }
    }

    /// Whether the classroom is free at `(day, slot)`.
    #[inline]
    pub fn is_free(&self, classroom_id: ClassroomId, day: DayOfWeek, slot: SlotId) -> bool {
        !self.occupied.contains(&(classroom_id, day, slot))
    }

    /// Marks a key occupied. Returns `false` if it already was.
    pub fn occupy(&mut self, key: OccupancyKey) -> bool {
        self.occupied.insert(key)
    }

    /// Number of occupied keys.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Whether nothing is occupied.
    pub fn is_empty(&self) -> bool {
        self.occupied.is_empty()
    }
}

/// Enumerates and scores feasible classrooms.
#[derive(Debug, Clone)]
pub struct CandidateEvaluator<'a> {
    classrooms: &'a [Classroom],
    by_id: Vec<usize>,
    preference_penalty: Score,
}

impl<'a> CandidateEvaluator<'a> {
    /// Creates an evaluator over `classrooms`.
    pub fn new(classrooms: &'a [Classroom], preference_penalty: Score) -> Self {
        let mut by_id: Vec<usize> = (0..classrooms.len()).collect();
        by_id.sort_by_key(|&i| classrooms[i].id);
        Self {
            classrooms,
            by_id,
            preference_penalty,
        }
    }

    /// Penalty added per unmet preference requirement.
    pub fn preference_penalty(&self) -> Score {
        self.preference_penalty
    }

    /// Whether `classroom` can host `meeting` at `slot`.
    pub fn is_feasible(
        classroom: &Classroom,
        meeting: &Meeting,
        slot: SlotId,
        occupancy: &Occupancy,
    ) -> bool {
        occupancy.is_free(classroom.id, meeting.day_of_week, slot)
            && (!meeting.is_practical || classroom.is_lab)
            && classroom.fits(meeting.demand)
    }

    /// Unmet requirements of `preferences` for `classroom`.
    pub fn violations(classroom: &Classroom, preferences: &[&Preference]) -> u32 {
        preferences
            .iter()
            .map(|p| p.unmet_requirements(classroom))
            .sum()
    }

    /// Feasible candidates for `meeting` at `slot`, by ascending classroom id.
    ///
    /// `preferences` must be the preferences applicable to `meeting`.
    pub fn evaluate(
        &self,
        meeting: &Meeting,
        slot: SlotId,
        preferences: &[&Preference],
        occupancy: &Occupancy,
    ) -> Vec<Candidate> {
        self.by_id
            .iter()
            .map(|&index| (index, &self.classrooms[index]))
            .filter(|(_, c)| Self::is_feasible(c, meeting, slot, occupancy))
            .map(|(index, c)| {
                let waste = c.capacity - meeting.demand;
                let violations = Self::violations(c, preferences);
                Candidate {
                    classroom_id: c.id,
                    classroom_index: index,
                    score: Score::from(waste).saturating_add(
                        Score::from(violations).saturating_mul(self.preference_penalty),
                    ),
                    waste,
                    violations,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooms() -> Vec<Classroom> {
        vec![
            Classroom::new(3, 50).with_projector(true),
            Classroom::new(1, 30),
            Classroom::lab(2, 40),
        ]
    }

    #[test]
    fn test_candidates_sorted_by_id() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, BEST_FIT_PREFERENCE_PENALTY);
        let m = Meeting::new("M1", 30, 0).with_slot(1);

        let cands = eval.evaluate(&m, 1, &[], &Occupancy::default());
        let ids: Vec<_> = cands.iter().map(|c| c.classroom_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(cands[0].classroom_index, 1);
        assert_eq!(cands[0].waste, 0);
        assert_eq!(cands[2].waste, 20);
        assert_eq!(cands[2].score, 20);
    }

    #[test]
    fn test_capacity_filter() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, BEST_FIT_PREFERENCE_PENALTY);
        let m = Meeting::new("M1", 45, 0);

        let cands = eval.evaluate(&m, 1, &[], &Occupancy::default());
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].classroom_id, 3);
    }

    #[test]
    fn test_lab_filter() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, BEST_FIT_PREFERENCE_PENALTY);
        let m = Meeting::new("M1", 10, 0).with_practical(true);

        let cands = eval.evaluate(&m, 1, &[], &Occupancy::default());
        assert_eq!(cands.len(), 1);
        assert_eq!(cands[0].classroom_id, 2);
    }

    #[test]
    fn test_occupied_room_excluded() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, BEST_FIT_PREFERENCE_PENALTY);
        let m = Meeting::new("M1", 10, 4);
        let occ = Occupancy::from_reservations(&[Reservation::new("X", 1, 4, 7)]);

        let ids: Vec<_> = eval
            .evaluate(&m, 7, &[], &occ)
            .iter()
            .map(|c| c.classroom_id)
            .collect();
        assert_eq!(ids, vec![2, 3]);

        // Same room, other slot or day is free.
        assert!(occ.is_free(1, 4, 8));
        assert!(occ.is_free(1, 5, 7));
    }

    #[test]
    fn test_preference_penalty_applied() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, 1_000);
        let m = Meeting::new("M1", 30, 0).with_professor("P1");
        let pref = Preference::professor("p", "P1").with_projector();

        let cands = eval.evaluate(&m, 1, &[&pref], &Occupancy::default());
        let room1 = cands.iter().find(|c| c.classroom_id == 1).unwrap();
        let room3 = cands.iter().find(|c| c.classroom_id == 3).unwrap();
        assert_eq!(room1.violations, 1);
        assert_eq!(room1.score, 1_000);
        assert_eq!(room3.violations, 0);
        assert_eq!(room3.score, 20);
    }

    #[test]
    fn test_score_saturates_with_huge_penalty() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, Score::MAX);
        let m = Meeting::new("M1", 30, 0).with_professor("P1");
        let pref = Preference::professor("p", "P1").with_projector();

        let cands = eval.evaluate(&m, 1, &[&pref], &Occupancy::default());
        let room1 = cands.iter().find(|c| c.classroom_id == 1).unwrap();
        let room3 = cands.iter().find(|c| c.classroom_id == 3).unwrap();
        assert_eq!(room1.score, Score::MAX);
        assert_eq!(room3.score, 20);
    }

    #[test]
    fn test_no_feasible_room() {
        let rooms = rooms();
        let eval = CandidateEvaluator::new(&rooms, BEST_FIT_PREFERENCE_PENALTY);
        let m = Meeting::new("M1", 500, 0);
        assert!(eval.evaluate(&m, 1, &[], &Occupancy::default()).is_empty());
    }

    #[test]
    fn test_occupy_reports_duplicates() {
        let mut occ = Occupancy::default();
        assert!(occ.is_empty());
        assert!(occ.occupy((1, 0, 1)));
        assert!(!occ.occupy((1, 0, 1)));
        assert_eq!(occ.len(), 1);
    }
}
