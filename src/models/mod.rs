//! Timetabling domain models.
//!
//! Provides the value types of a classroom timetabling instance and the
//! [`Problem`] aggregate that owns them.
//!
//! # Domain Mappings
//!
//! | u-timetable | Generic scheduling | Meaning |
//! |-------------|--------------------|---------|
//! | Meeting | Activity | Weekly class session with a seat demand |
//! | Classroom | Resource | Room with capacity and equipment |
//! | Reservation | Assignment | Room held during one (day, slot) |
//! | Preference | Soft constraint | Penalized room-attribute wish |

mod catalog;
mod classroom;
mod meeting;
mod preference;
mod problem;
mod reservation;

pub use catalog::{Building, TimeSlot};
pub use classroom::{Classroom, ClassroomId};
pub use meeting::{DayOfWeek, Meeting, SlotId};
pub use preference::{Preference, PreferenceCategory};
pub use problem::Problem;
pub use reservation::{OccupancyKey, Reservation};
