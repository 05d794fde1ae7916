//! Schedule quality metrics (KPIs).
//!
//! Computes summary indicators from a completed schedule and the clients
//! it was built from.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Span | Last end minus first start |
//! | Delay | max(0, start - preferred start) per client |
//! | Total / Max Delay | Sum and maximum of delays |
//! | On-Time Rate | Fraction of booked clients with zero delay |
//! | Busy Minutes | Booked minutes per artist |

use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

use crate::models::{ClientRegistry, Schedule};

/// Schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Number of booked clients.
    pub scheduled: usize,
    /// Number of clients left out.
    pub unscheduled: usize,
    /// Earliest appointment start.
    pub first_start: Option<NaiveDateTime>,
    /// Latest appointment end.
    pub last_end: Option<NaiveDateTime>,
    /// Sum of start delays over booked clients.
    pub total_delay: Duration,
    /// Largest single start delay.
    pub max_delay: Duration,
    /// Fraction of booked clients starting at or before their preference (0.0..1.0).
    pub on_time_rate: f64,
    /// Booked minutes per artist name.
    pub busy_minutes_by_artist: BTreeMap<String, i64>,
    /// Appointment count per artist name.
    pub appointments_by_artist: BTreeMap<String, usize>,
}

impl ScheduleKpi {
    /// Computes KPIs from a schedule and its clients.
    ///
    /// Clients are matched to appointments by id; appointments whose client
    /// is not in `clients` count towards span and load but not delay.
    pub fn calculate(schedule: &Schedule, clients: &ClientRegistry) -> Self {
        let mut total_delay = Duration::zero();
        let mut max_delay = Duration::zero();
        let mut on_time: usize = 0;
        let mut counted: usize = 0;
        let mut busy_minutes_by_artist: BTreeMap<String, i64> = BTreeMap::new();
        let mut appointments_by_artist: BTreeMap<String, usize> = BTreeMap::new();

        for appt in &schedule.appointments {
            *busy_minutes_by_artist.entry(appt.artist.clone()).or_insert(0) +=
                appt.duration().num_minutes();
            *appointments_by_artist.entry(appt.artist.clone()).or_insert(0) += 1;

            if let Some(client) = clients.get(appt.client_id) {
                counted += 1;
                let delay = (appt.start - client.preferred_start).max(Duration::zero());
                if delay == Duration::zero() {
                    on_time += 1;
                }
                total_delay = total_delay + delay;
                max_delay = max_delay.max(delay);
            }
        }

        let on_time_rate = if counted == 0 {
            1.0
        } else {
            on_time as f64 / counted as f64
        };

        Self {
            scheduled: schedule.appointment_count(),
            unscheduled: schedule.unscheduled.len(),
            first_start: schedule.first_start(),
            last_end: schedule.last_end(),
            total_delay,
            max_delay,
            on_time_rate,
            busy_minutes_by_artist,
            appointments_by_artist,
        }
    }

    /// Last end minus first start; zero for an empty schedule.
    pub fn span(&self) -> Duration {
        match (self.first_start, self.last_end) {
            (Some(start), Some(end)) => end - start,
            _ => Duration::zero(),
        }
    }

    /// Whether nobody was left out and nobody waited longer than `max_delay`.
    pub fn meets_thresholds(&self, max_delay: Duration) -> bool {
        self.unscheduled == 0 && self.max_delay <= max_delay
    }
}
