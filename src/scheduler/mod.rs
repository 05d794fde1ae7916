//! Greedy scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `GreedyScheduler` makes one deterministic pass over the clients in
//! preferred-start order and commits each to a capable artist without ever
//! reconsidering. It is not optimal; it is predictable.
//!
//! # KPI
//!
//! `ScheduleKpi` summarises a finished schedule: span, start delays,
//! on-time rate and per-artist load.

mod greedy;
mod kpi;

pub use greedy::{AssignmentPolicy, GreedyScheduler};
pub use kpi::ScheduleKpi;
