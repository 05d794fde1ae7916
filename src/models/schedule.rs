//! Schedule (appointment ledger) model.
//!
//! A schedule is the result of one scheduling pass: the appointments that
//! were created, in the order clients were processed, plus every client
//! that could not be placed and any day-window violations.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{ArtistId, ClientId};
use crate::error::ScheduleError;

/// A concrete booking of one client with one artist.
///
/// Serializes to the interchange shape
/// `{client, artist, services, start, end}` with ISO-8601 timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appointment {
    /// Booked client.
    #[serde(skip)]
    pub client_id: ClientId,
    /// Performing artist.
    #[serde(skip)]
    pub artist_id: ArtistId,
    /// Client display name.
    pub client: String,
    /// Artist display name.
    pub artist: String,
    /// The client's requested services.
    pub services: Vec<String>,
    /// Start time.
    pub start: NaiveDateTime,
    /// End time (start + the client's estimated duration).
    pub end: NaiveDateTime,
}

impl Appointment {
    /// Creates an appointment.
    pub fn new(
        client_id: ClientId,
        artist_id: ArtistId,
        client: impl Into<String>,
        artist: impl Into<String>,
        services: Vec<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            client_id,
            artist_id,
            client: client.into(),
            artist: artist.into(),
            services,
            start,
            end,
        }
    }

    /// Length of the appointment.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether two appointments share any instant.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Why a client could not be scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnmatchedReason {
    /// No artists were registered at all.
    NoArtists,
    /// Artists exist, but none covers every requested service.
    NoQualifiedArtist,
    /// The client requested no services.
    NoServices,
    /// The appointment end would fall outside the representable calendar.
    TimeOverflow,
}

/// A client left out of the schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnscheduledClient {
    /// Client identifier.
    #[serde(skip)]
    pub client_id: ClientId,
    /// Client display name.
    pub client: String,
    /// Requested services.
    pub services: Vec<String>,
    /// Preferred start that could not be honoured.
    pub preferred_start: NaiveDateTime,
    /// Reason the client was not placed.
    pub reason: UnmatchedReason,
}

impl UnscheduledClient {
    /// Converts to a reportable error.
    pub fn to_error(&self) -> ScheduleError {
        match self.reason {
            UnmatchedReason::NoServices => ScheduleError::NoServices {
                client: self.client.clone(),
            },
            UnmatchedReason::TimeOverflow => ScheduleError::TimeOverflow {
                client: self.client.clone(),
                start: self.preferred_start.to_string(),
            },
            UnmatchedReason::NoArtists | UnmatchedReason::NoQualifiedArtist => {
                ScheduleError::NoQualifiedArtist {
                    client: self.client.clone(),
                    services: self.services.clone(),
                }
            }
        }
    }
}

/// Per-client result of one assignment attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientOutcome {
    /// The client was booked.
    Scheduled(Appointment),
    /// The client could not be booked.
    Unmatched(UnscheduledClient),
}

impl ClientOutcome {
    /// Whether the client was booked.
    pub fn is_scheduled(&self) -> bool {
        matches!(self, Self::Scheduled(_))
    }

    /// The appointment, if booked.
    pub fn appointment(&self) -> Option<&Appointment> {
        match self {
            Self::Scheduled(a) => Some(a),
            Self::Unmatched(_) => None,
        }
    }
}

/// A day-window violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Affected client.
    #[serde(skip)]
    pub client_id: ClientId,
    /// Human-readable description.
    pub message: String,
}

/// Classification of violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Appointment starts before the working day starts.
    EarlyStart,
    /// Appointment ends after the working day finishes.
    DayOverrun,
}

impl Violation {
    /// Creates an early-start violation.
    pub fn early_start(client_id: ClientId, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::EarlyStart,
            client_id,
            message: message.into(),
        }
    }

    /// Creates a day-overrun violation.
    pub fn day_overrun(client_id: ClientId, message: impl Into<String>) -> Self {
        Self {
            violation_type: ViolationType::DayOverrun,
            client_id,
            message: message.into(),
        }
    }
}

/// The appointment ledger produced by one scheduling pass.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schedule {
    /// Appointments in client-processing order.
    pub appointments: Vec<Appointment>,
    /// Clients that could not be placed, in processing order.
    pub unscheduled: Vec<UnscheduledClient>,
    /// Day-window violations.
    pub violations: Vec<Violation>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one client outcome.
    pub fn record(&mut self, outcome: ClientOutcome) {
        match outcome {
            ClientOutcome::Scheduled(a) => self.appointments.push(a),
            ClientOutcome::Unmatched(u) => self.unscheduled.push(u),
        }
    }

    /// Adds a violation.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Whether every client was placed.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// Whether the schedule has no violations.
    pub fn is_within_day(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of appointments.
    pub fn appointment_count(&self) -> usize {
        self.appointments.len()
    }

    /// Earliest appointment start.
    pub fn first_start(&self) -> Option<NaiveDateTime> {
        self.appointments.iter().map(|a| a.start).min()
    }

    /// Latest appointment end.
    pub fn last_end(&self) -> Option<NaiveDateTime> {
        self.appointments.iter().map(|a| a.end).max()
    }

    /// Finds the appointment for a client.
    pub fn appointment_for_client(&self, client_id: ClientId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.client_id == client_id)
    }

    /// All appointments for an artist, in booking order.
    pub fn appointments_for_artist(&self, artist_id: ArtistId) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.artist_id == artist_id)
            .collect()
    }

    /// All appointments whose artist carries the given display name.
    pub fn appointments_for_artist_name(&self, artist: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.artist == artist)
            .collect()
    }

    /// Reportable errors for every unscheduled client.
    pub fn unscheduled_errors(&self) -> Vec<ScheduleError> {
        self.unscheduled.iter().map(UnscheduledClient::to_error).collect()
    }

    /// The appointment list in its JSON interchange shape.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.appointments)
    }
}
