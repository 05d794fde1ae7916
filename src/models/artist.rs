//! Artist model and registry.
//!
//! Artists are the people who perform services. Each artist has a set of
//! specialties and accumulates a booking history while a schedule is built.
//!
//! Names are display labels only: the registry hands out an [`ArtistId`]
//! per registration, so two artists called "Sarah" stay distinct.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::Appointment;

/// Registry-assigned artist identifier (index in registration order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtistId(pub usize);

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A{}", self.0)
    }
}

/// A beauty artist.
#[derive(Debug, Clone, Serialize)]
pub struct Artist {
    /// Registry identifier.
    pub id: ArtistId,
    /// Display name (not necessarily unique).
    pub name: String,
    /// Services this artist is qualified to perform.
    pub specialties: BTreeSet<String>,
    /// Appointments booked so far, in booking order.
    pub bookings: Vec<Appointment>,
}

impl Artist {
    /// Creates an artist with no bookings.
    pub fn new<I, S>(id: ArtistId, name: impl Into<String>, specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            name: name.into(),
            specialties: specialties.into_iter().map(Into::into).collect(),
            bookings: Vec::new(),
        }
    }

    /// Whether this artist offers a given service.
    pub fn has_specialty(&self, service: &str) -> bool {
        self.specialties.contains(service)
    }

    /// Whether this artist can perform every requested service.
    ///
    /// Duplicates in `services` collapse to set membership.
    pub fn can_perform<S: AsRef<str>>(&self, services: &[S]) -> bool {
        services.iter().all(|s| self.has_specialty(s.as_ref()))
    }

    /// Most recently booked appointment.
    pub fn last_booking(&self) -> Option<&Appointment> {
        self.bookings.last()
    }

    /// Start time the next booking would get.
    ///
    /// With no bookings the requested time is used as-is; otherwise the
    /// next booking starts when the last one ends, whatever was requested.
    pub fn next_start(&self, requested: NaiveDateTime) -> NaiveDateTime {
        match self.last_booking() {
            None => requested,
            Some(last) => last.end,
        }
    }

    /// Whether the artist has any bookings.
    pub fn is_booked(&self) -> bool {
        !self.bookings.is_empty()
    }

    /// Appends a booking.
    pub fn book(&mut self, appointment: Appointment) {
        self.bookings.push(appointment);
    }
}

/// Ordered collection of artists.
///
/// Registration order is significant: the scheduler scans artists in this
/// order when looking for a capable one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArtistRegistry {
    artists: Vec<Artist>,
}

impl ArtistRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an artist with an empty booking history.
    ///
    /// Names are not checked for uniqueness.
    pub fn register<I, S>(&mut self, name: impl Into<String>, specialties: I) -> ArtistId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = ArtistId(self.artists.len());
        self.artists.push(Artist::new(id, name, specialties));
        id
    }

    /// Looks up an artist.
    pub fn get(&self, id: ArtistId) -> Option<&Artist> {
        self.artists.get(id.0)
    }

    /// Looks up an artist mutably.
    pub fn get_mut(&mut self, id: ArtistId) -> Option<&mut Artist> {
        self.artists.get_mut(id.0)
    }

    /// All artists carrying the given display name.
    pub fn find_by_name(&self, name: &str) -> Vec<&Artist> {
        self.artists.iter().filter(|a| a.name == name).collect()
    }

    /// Artists in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Artist> {
        self.artists.iter()
    }

    /// Artists in registration order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Artist> {
        self.artists.iter_mut()
    }

    /// Number of registered artists.
    pub fn len(&self) -> usize {
        self.artists.len()
    }

    /// Whether no artist is registered.
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Drops every booking, keeping the artists themselves.
    pub fn clear_bookings(&mut self) {
        for artist in &mut self.artists {
            artist.bookings.clear();
        }
    }
}
