//! Error types.
//!
//! Scheduling itself never fails as a whole: per-client problems are
//! reported as values on the [`Schedule`](crate::models::Schedule) and can
//! be converted into a [`ScheduleError`] when a caller wants to surface them.
//! Configuration loading is the only fallible entry point.

use thiserror::Error;

/// Errors and reportable conditions of the scheduling crate.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// No registered artist covers every service the client requested.
    #[error("no qualified artist for client '{client}' (services: {})", .services.join(", "))]
    NoQualifiedArtist {
        /// Client display name.
        client: String,
        /// Services the client requested.
        services: Vec<String>,
    },

    /// A client requested nothing, so there is nothing to book.
    #[error("client '{client}' requested no services")]
    NoServices {
        /// Client display name.
        client: String,
    },

    /// Adding the client's duration to its start leaves the calendar range.
    #[error("appointment for client '{client}' starting near {start} ends out of range")]
    TimeOverflow {
        /// Client display name.
        client: String,
        /// Preferred start of the client.
        start: String,
    },

    /// A service has no configured duration; the fallback was used.
    #[error("unknown service '{service}', using fallback duration")]
    UnknownService {
        /// The unrecognised service name.
        service: String,
    },

    /// A configured duration is not strictly positive.
    #[error("invalid duration for '{service}': {minutes} minutes")]
    InvalidDuration {
        /// Service name (or `fallback`).
        service: String,
        /// Configured value.
        minutes: u32,
    },

    /// The working-day window does not end after it starts.
    #[error("invalid day window: {starts_at} to {finishes_at}")]
    InvalidDayWindow {
        /// Configured start of the day.
        starts_at: String,
        /// Configured end of the day.
        finishes_at: String,
    },

    /// Configuration text could not be parsed.
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fallible crate operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
