//! Roster validation.
//!
//! Checks artist and client registrations before scheduling. Detects:
//! - Repeated display names (allowed, but usually a typo)
//! - Artists without specialties
//! - Clients without services
//! - Services priced at the fallback duration
//! - Requests no single artist can cover
//!
//! None of these stop [`GreedyScheduler`](crate::scheduler::GreedyScheduler)
//! from running; they predict what it will leave out or misprice.

use crate::models::{ArtistRegistry, ClientRegistry};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation finding.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Finding category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation findings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two artists share a display name.
    DuplicateArtistName,
    /// Two clients share a display name.
    DuplicateClientName,
    /// An artist offers nothing and can never be booked.
    ArtistWithoutSpecialties,
    /// A client requested nothing and will not be booked.
    ClientWithoutServices,
    /// A requested service has no configured duration.
    UnknownService,
    /// No single artist offers every service a client requested.
    UncoveredServices,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a roster of artists and clients.
///
/// Checks:
/// 1. No repeated artist names
/// 2. No repeated client names
/// 3. Every artist has at least one specialty
/// 4. Every client requests at least one service
/// 5. Every requested service has a configured duration
/// 6. Every client's request is covered by at least one artist
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every finding.
pub fn validate_roster(artists: &ArtistRegistry, clients: &ClientRegistry) -> ValidationResult {
    let mut errors = Vec::new();

    let mut artist_names = HashSet::new();
    for artist in artists.iter() {
        if !artist_names.insert(artist.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateArtistName,
                format!("Duplicate artist name: {}", artist.name),
            ));
        }
        if artist.specialties.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ArtistWithoutSpecialties,
                format!("Artist '{}' has no specialties", artist.name),
            ));
        }
    }

    let mut client_names = HashSet::new();
    for client in clients.iter() {
        if !client_names.insert(client.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateClientName,
                format!("Duplicate client name: {}", client.name),
            ));
        }

        if !client.has_services() {
            errors.push(ValidationError::new(
                ValidationErrorKind::ClientWithoutServices,
                format!("Client '{}' requested no services", client.name),
            ));
            continue;
        }

        for err in client.unknown_service_errors() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownService,
                format!("Client '{}': {}", client.name, err),
            ));
        }

        if !artists.iter().any(|a| a.can_perform(&client.services)) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UncoveredServices,
                format!(
                    "No artist covers every service for client '{}': {}",
                    client.name,
                    client.services.join(", ")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
