//! Scheduling domain models.
//!
//! Provides the data types for a wedding-day beauty schedule: who works,
//! who gets ready, how long each service takes, and the resulting
//! appointments.
//!
//! # Domain Mappings
//!
//! | glam-schedule | General scheduling |
//! |---------------|--------------------|
//! | Artist | Resource (with skills) |
//! | Client | Task (single activity) |
//! | Service | Required skill |
//! | Appointment | Assignment |
//! | Schedule | Solution |

mod artist;
mod calendar;
mod client;
mod duration;
mod schedule;

pub use artist::{Artist, ArtistId, ArtistRegistry};
pub use calendar::DayWindow;
pub use client::{Client, ClientId, ClientRegistry};
pub use duration::{DurationTable, ServiceDuration};
pub use schedule::{
    Appointment, ClientOutcome, Schedule, UnmatchedReason, UnscheduledClient, Violation,
    ViolationType,
};
