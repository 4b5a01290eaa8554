//! Constructive classroom assignment.
//!
//! # Algorithm
//!
//! 1. Order meetings by descending demand (stable).
//! 2. For each meeting, try its allowed slots in the given order.
//! 3. In the first slot with any feasible classroom, let the selection
//!    policy pick one and commit the reservation.
//! 4. A meeting with no slots, or no feasible classroom in any slot, stays
//!    unplaced.
//!
//! Only the classroom choice within a slot is optimized; slots are tried
//! first-fit.
//!
//! # Complexity
//! O(n · s · c · p) where n=meetings, s=slots per meeting, c=classrooms,
//! p=applicable preferences.

use tracing::{debug, info, info_span, trace};

use crate::models::{Meeting, Problem, Reservation};

use super::candidate::{CandidateEvaluator, Occupancy, Score};
use super::policy::{SeedMode, SelectionPolicy};
use super::stats::Statistics;

/// Greedy constructor parameterized by a selection policy.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Classroom, Meeting, Problem};
/// use u_timetable::scheduler::Constructor;
///
/// let mut problem = Problem::new()
///     .with_classroom(Classroom::new(1, 30))
///     .with_classroom(Classroom::new(2, 50))
///     .with_meeting(Meeting::new("M1", 30, 0).with_slot(1));
///
/// let stats = Constructor::best_fit().run(&mut problem);
/// assert_eq!(stats.placed_count(), 1);
/// assert_eq!(problem.constructed_reservations()[0].classroom_id, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Constructor {
    policy: SelectionPolicy,
    preference_penalty: Score,
}

impl Constructor {
    /// Creates a constructor with the policy's default preference penalty.
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            preference_penalty: policy.default_preference_penalty(),
            policy,
        }
    }

    /// Deterministic best-fit constructor.
    pub fn best_fit() -> Self {
        Self::new(SelectionPolicy::BestFit)
    }

    /// Randomized RCL constructor. `alpha` is clamped to `[0, 1]`.
    pub fn rcl(alpha: f64, seed: impl Into<SeedMode>) -> Self {
        Self::new(SelectionPolicy::rcl(alpha, seed))
    }

    /// Overrides the penalty per unmet preference requirement.
    pub fn with_preference_penalty(mut self, penalty: Score) -> Self {
        self.preference_penalty = penalty;
        self
    }

    /// The selection policy.
    pub fn policy(&self) -> &SelectionPolicy {
        &self.policy
    }

    /// The penalty per unmet preference requirement.
    pub fn preference_penalty(&self) -> Score {
        self.preference_penalty
    }

    /// Places the problem's meetings, appending one reservation per placed
    /// meeting, and returns the run statistics.
    ///
    /// Existing reservations are respected and left untouched.
    pub fn run(&self, problem: &mut Problem) -> Statistics {
        let _span = info_span!("construct", policy = self.policy.name()).entered();

        let (placements, stats) = self.construct(problem);
        for reservation in placements {
            problem.commit(reservation);
        }

        info!(
            placed = stats.placed_count(),
            total = stats.meetings_considered(),
            demand_placed = stats.demand_placed(),
            total_demand = stats.total_demand(),
            "construction finished"
        );
        stats
    }

    fn construct(&self, problem: &Problem) -> (Vec<Reservation>, Statistics) {
        let evaluator = CandidateEvaluator::new(&problem.classrooms, self.preference_penalty);
        let mut occupancy = Occupancy::from_reservations(problem.reservations());
        let mut selector = self.policy.selector();
        let mut stats = Statistics::default();
        let mut placements = Vec::new();

        for index in Self::order_meetings(&problem.meetings) {
            let meeting = &problem.meetings[index];
            if !meeting.has_slots() {
                debug!(meeting = %meeting.id, "no allowed slots, leaving unplaced");
                stats.record_unplaced(meeting);
                continue;
            }

            let preferences = problem.applicable_preferences(meeting);
            let mut placed = false;

            for &slot in &meeting.slot_ids {
                let candidates = evaluator.evaluate(meeting, slot, &preferences, &occupancy);
                trace!(
                    meeting = %meeting.id,
                    slot,
                    candidates = candidates.len(),
                    "evaluated slot"
                );

                let Some(chosen) = selector.select(&candidates) else {
                    continue;
                };
                let classroom = &problem.classrooms[chosen.classroom_index];
                let reservation =
                    Reservation::new(&meeting.id, classroom.id, meeting.day_of_week, slot);

                occupancy.occupy(reservation.key());
                stats.record_placement(meeting, classroom, slot, chosen, &preferences);
                debug!(
                    meeting = %meeting.id,
                    classroom = classroom.id,
                    day = meeting.day_of_week,
                    slot,
                    score = chosen.score,
                    waste = chosen.waste,
                    violations = chosen.violations,
                    "placed meeting"
                );
                placements.push(reservation);
                placed = true;
                break;
            }

            if !placed {
                debug!(meeting = %meeting.id, demand = meeting.demand, "no feasible classroom");
                stats.record_unplaced(meeting);
            }
        }

        (placements, stats)
    }

    /// Meeting indices by descending demand; ties keep instance order.
    fn order_meetings(meetings: &[Meeting]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..meetings.len()).collect();
        indices.sort_by(|&a, &b| meetings[b].demand.cmp(&meetings[a].demand));
        indices
    }
}

impl Default for Constructor {
    fn default() -> Self {
        Self::best_fit()
    }
}

/// Runs the deterministic best-fit heuristic on `problem`.
pub fn run_best_fit(problem: &mut Problem) -> Statistics {
    Constructor::best_fit().run(problem)
}

/// Runs the RCL heuristic on `problem`.
///
/// `alpha` is clamped to `[0, 1]`. `seed == 0` seeds from entropy; any
/// other seed makes the run reproducible.
pub fn run_rcl(problem: &mut Problem, alpha: f64, seed: u64) -> Statistics {
    Constructor::rcl(alpha, seed).run(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Classroom, Preference};

    fn two_room_problem(practical: bool) -> Problem {
        Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_classroom(Classroom::new(2, 50).with_lab(practical))
            .with_meeting(
                Meeting::new("M1", 30, 1)
                    .with_practical(practical)
                    .with_slot(1),
            )
    }

    #[test]
    fn test_best_fit_minimizes_waste() {
        let mut p = two_room_problem(false);
        let stats = run_best_fit(&mut p);

        assert_eq!(stats.placed_count(), 1);
        let r = &p.constructed_reservations()[0];
        assert_eq!(r.classroom_id, 1);
        assert_eq!(r.meeting_id, "M1");
        assert_eq!(r.day_of_week, 1);
        assert_eq!(r.slot_id, 1);
        assert_eq!(stats.waste_values(), &[0]);
    }

    #[test]
    fn test_practical_meeting_takes_lab() {
        let mut p = two_room_problem(true);
        let stats = run_best_fit(&mut p);

        assert_eq!(stats.placed_count(), 1);
        assert_eq!(p.constructed_reservations()[0].classroom_id, 2);
        assert_eq!(stats.waste_values(), &[20]);
    }

    #[test]
    fn test_projector_preference_outweighs_waste() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_classroom(Classroom::new(2, 40).with_projector(true))
            .with_meeting(Meeting::new("M1", 30, 0).with_professor("P1").with_slot(1))
            .with_preference(Preference::professor("pr", "P1").with_projector());

        let stats = run_best_fit(&mut p);
        assert_eq!(p.constructed_reservations()[0].classroom_id, 2);

        let tally = stats.preference_tallies()[&crate::models::PreferenceCategory::Professor];
        assert_eq!(tally.satisfied, 1);
        assert_eq!(tally.violated, 0);
    }

    #[test]
    fn test_reserved_slot_leaves_meeting_unplaced() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_meeting(Meeting::new("M1", 20, 3).with_slot(2))
            .with_reservation(Reservation::new("fixed", 1, 3, 2));

        let stats = run_best_fit(&mut p);
        assert_eq!(stats.placed_count(), 0);
        assert_eq!(stats.unplaced_meetings(), &["M1".to_string()]);
        assert!(p.constructed_reservations().is_empty());
        assert_eq!(p.reservations().len(), 1);
    }

    #[test]
    fn test_first_feasible_slot_wins() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_classroom(Classroom::new(2, 100))
            .with_meeting(Meeting::new("M1", 30, 0).with_slots([5, 6]))
            .with_reservation(Reservation::new("fixed", 1, 0, 5));

        run_best_fit(&mut p);
        // Slot 5 still has room 2, so slot 6's perfect fit is never tried.
        let r = &p.constructed_reservations()[0];
        assert_eq!((r.classroom_id, r.slot_id), (2, 5));
    }

    #[test]
    fn test_larger_demand_placed_first() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 50))
            .with_meeting(Meeting::new("small", 10, 0).with_slot(1))
            .with_meeting(Meeting::new("big", 45, 0).with_slot(1));

        let stats = run_best_fit(&mut p);
        assert_eq!(p.constructed_reservations()[0].meeting_id, "big");
        assert_eq!(stats.unplaced_meetings(), &["small".to_string()]);
    }

    #[test]
    fn test_order_meetings_is_stable() {
        let meetings = vec![
            Meeting::new("a", 10, 0),
            Meeting::new("b", 30, 0),
            Meeting::new("c", 10, 0),
            Meeting::new("d", 30, 0),
        ];
        assert_eq!(Constructor::order_meetings(&meetings), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_meeting_without_slots_counted_unplaced() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 50))
            .with_meeting(Meeting::new("M1", 10, 0));

        let stats = run_best_fit(&mut p);
        assert_eq!(stats.meetings_considered(), 1);
        assert_eq!(stats.unplaced_count(), 1);
    }

    #[test]
    fn test_no_double_booking_within_run() {
        let mut p = Problem::new()
            .with_classroom(Classroom::new(1, 30))
            .with_meeting(Meeting::new("A", 20, 0).with_slot(1))
            .with_meeting(Meeting::new("B", 20, 0).with_slot(1))
            .with_meeting(Meeting::new("C", 20, 0).with_slots([1, 2]));

        let stats = run_best_fit(&mut p);
        assert_eq!(stats.placed_count(), 2);
        let keys: Vec<_> = p.constructed_reservations().iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec![(1, 0, 1), (1, 0, 2)]);
    }

    #[test]
    fn test_penalty_override() {
        let c = Constructor::rcl(0.5, 3).with_preference_penalty(10_000);
        assert_eq!(c.preference_penalty(), 10_000);
        assert_eq!(c.policy().name(), "rcl");
        assert_eq!(Constructor::rcl(0.5, 3).preference_penalty(), 1_000);
        assert_eq!(Constructor::default().preference_penalty(), 10_000);
    }

    #[test]
    fn test_huge_penalty_keeps_ranking() {
        let build = || {
            Problem::new()
                .with_classroom(Classroom::new(1, 30))
                .with_classroom(Classroom::new(2, 40).with_projector(true))
                .with_meeting(Meeting::new("M1", 30, 0).with_professor("P1").with_slot(1))
                .with_preference(Preference::professor("pr", "P1").with_projector())
        };

        let mut p = build();
        let stats = Constructor::best_fit()
            .with_preference_penalty(Score::MAX)
            .run(&mut p);
        assert_eq!(stats.placed_count(), 1);
        assert_eq!(p.constructed_reservations()[0].classroom_id, 2);

        let mut p = build();
        let stats = Constructor::rcl(1.0, 5)
            .with_preference_penalty(Score::MAX)
            .run(&mut p);
        assert_eq!(stats.placed_count(), 1);
    }

    #[test]
    fn test_empty_problem() {
        let mut p = Problem::new();
        let stats = run_rcl(&mut p, 0.5, 1);
        assert_eq!(stats.meetings_considered(), 0);
        assert!(p.reservations().is_empty());
    }
}
