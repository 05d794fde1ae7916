//! Wedding-day beauty scheduling.
//!
//! Assigns makeup and hair appointments for wedding clients to qualified
//! artists across a single day. Clients are taken in preferred-time order
//! and each is committed greedily to the first artist able to perform every
//! requested service, back-to-back after that artist's earlier bookings.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Artist`, `Client`, `DurationTable`,
//!   `Appointment`, `Schedule`, `DayWindow`, plus the artist and client
//!   registries
//! - **`scheduler`**: `GreedyScheduler` and `ScheduleKpi`
//! - **`validation`**: Roster checks (repeated names, uncovered requests)
//! - **`config`**: TOML configuration for durations, day window and policy
//! - **`report`**: Plain-text schedule table
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use glam_schedule::models::{ArtistRegistry, ClientRegistry};
//! use glam_schedule::scheduler::GreedyScheduler;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
//! let at = |h, m| day.and_hms_opt(h, m, 0).unwrap();
//!
//! let mut artists = ArtistRegistry::new();
//! artists.register("Sarah", ["makeup", "hair"]);
//! artists.register("Emily", ["makeup"]);
//!
//! let mut clients = ClientRegistry::new();
//! clients.register("Bride", ["makeup", "hair"], at(8, 0));
//! clients.register("Mother of Bride", ["makeup"], at(7, 0));
//!
//! let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
//! assert_eq!(schedule.appointments[0].artist, "Sarah");
//! assert_eq!(schedule.appointments[0].start, at(7, 0));
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
