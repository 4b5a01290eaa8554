//! Constructive heuristics for university classroom timetabling.
//!
//! Places class meetings into classrooms at their fixed day and time slots,
//! respecting capacity, lab requirements and existing reservations, while
//! minimizing wasted seats and unmet classroom preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Classroom`, `Meeting`, `Preference`,
//!   `Reservation`, `Problem`
//! - **`scheduler`**: Best-fit and RCL constructive heuristics, candidate
//!   scoring, run statistics
//! - **`loader`**: JSON instance loading with field aliases and coercion
//! - **`validation`**: Instance integrity checks (duplicate IDs, unknown
//!   classrooms/slots, double-booked reservations)
//! - **`report`**: Console, CSV and JSON output of a run
//! - **`logging`**: `tracing` subscriber setup
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Classroom, Meeting, Problem};
//! use u_timetable::run_best_fit;
//!
//! let mut problem = Problem::new()
//!     .with_classroom(Classroom::new(1, 40))
//!     .with_meeting(Meeting::new("CALC-1", 35, 1).with_slot(3));
//!
//! let stats = run_best_fit(&mut problem);
//! assert_eq!(stats.placed_count(), 1);
//! assert_eq!(problem.reservations()[0].classroom_id, 1);
//! ```
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"
//! - Feo & Resende (1995), "Greedy Randomized Adaptive Search Procedures"

pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{LoadError, ReportError};
pub use loader::{load_problem, parse_problem};
pub use models::Problem;
pub use scheduler::{run_best_fit, run_rcl, Constructor, SelectionPolicy, Statistics};
