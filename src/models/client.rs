//! Client model and registry.
//!
//! A client is someone getting ready for the wedding: the bride, her
//! mother, a bridesmaid. Each client requests one or more services and a
//! preferred start time. The estimated duration is computed once, at
//! registration, from the registry's [`DurationTable`].

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::DurationTable;
use crate::error::ScheduleError;

/// Registry-assigned client identifier (index in registration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(pub usize);

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A client requesting services.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Registry identifier.
    pub id: ClientId,
    /// Display name (not necessarily unique).
    pub name: String,
    /// Requested services, in request order. Duplicates are allowed.
    pub services: Vec<String>,
    /// Ideal appointment start.
    pub preferred_start: NaiveDateTime,
    /// Sum of the default durations of `services`.
    #[serde(rename = "estimated_minutes", with = "minutes")]
    pub estimated_duration: Duration,
    /// Requested services that were priced at the fallback duration.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_services: Vec<String>,
}

impl Client {
    /// Creates a client, estimating its duration from `durations`.
    pub fn new<I, S>(
        id: ClientId,
        name: impl Into<String>,
        services: I,
        preferred_start: NaiveDateTime,
        durations: &DurationTable,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let services: Vec<String> = services.into_iter().map(Into::into).collect();
        Self {
            id,
            name: name.into(),
            estimated_duration: durations.estimate(&services),
            unknown_services: durations.unknown_services(&services),
            services,
            preferred_start,
        }
    }

    /// Requested services with duplicates collapsed.
    pub fn distinct_services(&self) -> BTreeSet<&str> {
        self.services.iter().map(String::as_str).collect()
    }

    /// Whether the client requested anything at all.
    pub fn has_services(&self) -> bool {
        !self.services.is_empty()
    }

    /// One [`ScheduleError::UnknownService`] per service priced at the
    /// fallback duration.
    pub fn unknown_service_errors(&self) -> Vec<ScheduleError> {
        self.unknown_services
            .iter()
            .map(|service| ScheduleError::UnknownService {
                service: service.clone(),
            })
            .collect()
    }
}

/// Ordered collection of clients, priced against one duration table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientRegistry {
    durations: DurationTable,
    clients: Vec<Client>,
}

impl ClientRegistry {
    /// Creates an empty registry using the default duration table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry using the given duration table.
    pub fn with_durations(durations: DurationTable) -> Self {
        Self {
            durations,
            clients: Vec::new(),
        }
    }

    /// The duration table clients are priced against.
    pub fn durations(&self) -> &DurationTable {
        &self.durations
    }

    /// Registers a client and computes its estimated duration.
    ///
    /// Service names are not checked against any catalogue; unknown ones
    /// are priced at the fallback duration and logged.
    pub fn register<I, S>(
        &mut self,
        name: impl Into<String>,
        services: I,
        preferred_start: NaiveDateTime,
    ) -> ClientId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = ClientId(self.clients.len());
        let client = Client::new(id, name, services, preferred_start, &self.durations);
        for err in client.unknown_service_errors() {
            log::warn!(
                "client '{}': {} ({} minutes)",
                client.name,
                err,
                self.durations.fallback_minutes
            );
        }
        self.clients.push(client);
        id
    }

    /// Looks up a client.
    pub fn get(&self, id: ClientId) -> Option<&Client> {
        self.clients.get(id.0)
    }

    /// All clients carrying the given display name.
    pub fn find_by_name(&self, name: &str) -> Vec<&Client> {
        self.clients.iter().filter(|c| c.name == name).collect()
    }

    /// Clients in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter()
    }

    /// Number of registered clients.
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Whether no client is registered.
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Clients ordered by preferred start.
    ///
    /// Stable: clients with the same preferred start keep registration order.
    pub fn by_preferred_start(&self) -> Vec<&Client> {
        let mut sorted: Vec<&Client> = self.clients.iter().collect();
        sorted.sort_by_key(|c| c.preferred_start);
        sorted
    }
}

/// Serializes a [`Duration`] as whole minutes.
mod minutes {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(d.num_minutes())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        i64::deserialize(d).map(Duration::minutes)
    }
}
