//! Service duration table.
//!
//! Maps a service name to its default duration. Services absent from the
//! table are priced at a single fallback duration. The table is plain
//! configuration: it is built once and passed explicitly to whoever needs
//! to estimate durations.
//!
//! # Defaults
//!
//! | Service | Minutes |
//! |---------|---------|
//! | makeup | 45 |
//! | hair | 30 |
//! | *(anything else)* | 30 |

use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, ScheduleError};

const DEFAULT_FALLBACK_MINUTES: u32 = 30;
const DEFAULT_SERVICES: [(&str, u32); 2] = [("makeup", 45), ("hair", 30)];

/// Default duration per service, in minutes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationTable {
    /// Duration used for any service not in `services`.
    #[serde(default = "default_fallback_minutes")]
    pub fallback_minutes: u32,
    /// Configured services (service name → minutes). Omitted in
    /// configuration, the built-in entries apply.
    #[serde(default = "default_services")]
    pub services: BTreeMap<String, u32>,
}

fn default_fallback_minutes() -> u32 {
    DEFAULT_FALLBACK_MINUTES
}

fn default_services() -> BTreeMap<String, u32> {
    DEFAULT_SERVICES
        .iter()
        .map(|&(service, minutes)| (service.to_string(), minutes))
        .collect()
}

/// Result of looking up one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceDuration {
    /// The service has a configured duration.
    Configured(Duration),
    /// The service is unknown; the fallback applies.
    Fallback(Duration),
}

impl ServiceDuration {
    /// The duration regardless of where it came from.
    pub fn duration(self) -> Duration {
        match self {
            Self::Configured(d) | Self::Fallback(d) => d,
        }
    }

    /// Whether the fallback was used.
    pub fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl DurationTable {
    /// Creates an empty table with the given fallback.
    pub fn new(fallback_minutes: u32) -> Self {
        Self {
            services: BTreeMap::new(),
            fallback_minutes,
        }
    }

    /// Sets the duration of a service.
    pub fn with_service(mut self, service: impl Into<String>, minutes: u32) -> Self {
        self.services.insert(service.into(), minutes);
        self
    }

    /// Sets the fallback duration.
    pub fn with_fallback(mut self, minutes: u32) -> Self {
        self.fallback_minutes = minutes;
        self
    }

    /// Fallback duration.
    pub fn fallback(&self) -> Duration {
        Duration::minutes(i64::from(self.fallback_minutes))
    }

    /// Looks up a single service.
    pub fn lookup(&self, service: &str) -> ServiceDuration {
        match self.services.get(service) {
            Some(&minutes) => ServiceDuration::Configured(Duration::minutes(i64::from(minutes))),
            None => ServiceDuration::Fallback(self.fallback()),
        }
    }

    /// Whether a service has a configured duration.
    pub fn is_known(&self, service: &str) -> bool {
        self.services.contains_key(service)
    }

    /// Estimated total duration for a list of services.
    ///
    /// Every entry counts, duplicates included; the order is irrelevant.
    pub fn estimate<S: AsRef<str>>(&self, services: &[S]) -> Duration {
        services
            .iter()
            .map(|s| self.lookup(s.as_ref()).duration())
            .fold(Duration::zero(), |acc, d| acc + d)
    }

    /// Services in the list that would be priced at the fallback.
    ///
    /// Each distinct unknown name is reported once, in first-seen order.
    pub fn unknown_services<S: AsRef<str>>(&self, services: &[S]) -> Vec<String> {
        let mut unknown: Vec<String> = Vec::new();
        for s in services {
            let s = s.as_ref();
            if !self.is_known(s) && !unknown.iter().any(|u| u == s) {
                unknown.push(s.to_string());
            }
        }
        unknown
    }

    /// Rejects zero-minute entries, which would produce empty appointments.
    pub fn validate(&self) -> Result<()> {
        if self.fallback_minutes == 0 {
            return Err(ScheduleError::InvalidDuration {
                service: "fallback".into(),
                minutes: 0,
            });
        }
        if let Some((service, &minutes)) = self.services.iter().find(|(_, m)| **m == 0) {
            return Err(ScheduleError::InvalidDuration {
                service: service.clone(),
                minutes,
            });
        }
        Ok(())
    }
}

impl Default for DurationTable {
    fn default() -> Self {
        Self {
            fallback_minutes: DEFAULT_FALLBACK_MINUTES,
            services: default_services(),
        }
    }
}
