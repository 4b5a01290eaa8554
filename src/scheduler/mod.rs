//! Constructive heuristics and solution statistics.
//!
//! Builds initial timetables by greedily placing meetings into classrooms.
//! One driver serves both heuristics; they differ only in the
//! [`SelectionPolicy`] that picks among the scored candidates.
//!
//! # Algorithm
//!
//! `Constructor` orders meetings by descending demand and, for each, takes
//! the first allowed slot with a feasible classroom. Candidates are scored by
//! wasted seats plus a penalty per unmet preference requirement.
//!
//! - **Best-Fit** picks the minimum score deterministically.
//! - **RCL** picks uniformly among candidates within `α` of the best score.
//!
//! # Statistics
//!
//! `Statistics` grades the result: placement and demand coverage, waste,
//! per-room/day/slot occupancy, and preference satisfaction.
//!
//! # References
//!
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod candidate;
mod constructive;
mod policy;
mod stats;

pub use candidate::{
    Candidate, CandidateEvaluator, Occupancy, Score, BEST_FIT_PREFERENCE_PENALTY,
    RCL_PREFERENCE_PENALTY,
};
pub use constructive::{run_best_fit, run_rcl, Constructor};
pub use policy::{
    best_fit, clamp_alpha, rcl_threshold, restricted_candidates, SeedMode, SelectionPolicy,
};
pub use stats::{ClassroomUsage, DayUsage, PreferenceTally, Statistics};
