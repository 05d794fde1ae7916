//! Greedy first-match scheduler.
//!
//! # Algorithm
//!
//! 1. Sort clients by preferred start (stable: ties keep registration order).
//! 2. For each client, pick a capable artist: one whose specialties cover
//!    every requested service. By default the first such artist in
//!    registration order wins.
//! 3. An artist with no bookings starts the client at the preferred time.
//!    A busy artist starts the client when their last booking ends; the
//!    client's preference is not consulted again.
//! 4. End = start + the client's estimated duration. The appointment is
//!    appended to the artist's bookings and to the schedule.
//!
//! A client nobody can serve is recorded as unscheduled and the pass moves
//! on. There is no backtracking: earlier bookings are never revisited.
//!
//! # Complexity
//! O(n log n + n * a * s) where n=clients, a=artists, s=services/client.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::ScheduleConfig;
use crate::models::{
    Appointment, Artist, ArtistRegistry, Client, ClientOutcome, ClientRegistry, DayWindow,
    Schedule, UnmatchedReason, UnscheduledClient, Violation,
};

/// How a capable artist is chosen for a client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentPolicy {
    /// First capable artist in registration order, busy or not.
    #[default]
    FirstCapable,
    /// Capable artist whose next booking would start earliest.
    /// Ties go to the artist registered first.
    EarliestAvailable,
}

/// Greedy single-pass scheduler.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use glam_schedule::models::{ArtistRegistry, ClientRegistry};
/// use glam_schedule::scheduler::GreedyScheduler;
///
/// let day = NaiveDate::from_ymd_opt(2025, 8, 14).unwrap();
/// let mut artists = ArtistRegistry::new();
/// artists.register("Sarah", ["makeup", "hair"]);
///
/// let mut clients = ClientRegistry::new();
/// clients.register("Bride", ["makeup", "hair"], day.and_hms_opt(8, 0, 0).unwrap());
///
/// let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
/// assert_eq!(schedule.appointment_count(), 1);
/// assert_eq!(schedule.appointments[0].end, day.and_hms_opt(9, 15, 0).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    policy: AssignmentPolicy,
    day_window: Option<DayWindow>,
}

impl GreedyScheduler {
    /// Creates a scheduler with the first-capable policy and no day window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from loaded configuration.
    pub fn from_config(config: &ScheduleConfig) -> Self {
        Self {
            policy: config.policy,
            day_window: config.day,
        }
    }

    /// Sets the artist selection policy.
    pub fn with_policy(mut self, policy: AssignmentPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the working-day window used to flag violations.
    pub fn with_day_window(mut self, window: DayWindow) -> Self {
        self.day_window = Some(window);
        self
    }

    /// Selection policy in use.
    pub fn policy(&self) -> AssignmentPolicy {
        self.policy
    }

    /// Builds a schedule for every registered client.
    ///
    /// Bookings are appended to the artists in `artists`. Calling this twice
    /// on the same registry continues from the existing bookings; use
    /// [`ArtistRegistry::clear_bookings`] to start over.
    pub fn build_schedule(&self, artists: &mut ArtistRegistry, clients: &ClientRegistry) -> Schedule {
        let mut schedule = Schedule::new();

        for client in clients.by_preferred_start() {
            let outcome = self.assign(artists, client);
            if let (Some(window), Some(appt)) = (&self.day_window, outcome.appointment()) {
                check_day_window(window, client.preferred_start.date(), appt, &mut schedule);
            }
            schedule.record(outcome);
        }

        log::info!(
            "scheduled {} of {} clients across {} artists ({} unscheduled)",
            schedule.appointment_count(),
            clients.len(),
            artists.len(),
            schedule.unscheduled.len()
        );
        schedule
    }

    /// Attempts to book a single client.
    ///
    /// On success the appointment is appended to the chosen artist's
    /// bookings and returned. Failure never touches any artist.
    pub fn assign(&self, artists: &mut ArtistRegistry, client: &Client) -> ClientOutcome {
        if !client.has_services() {
            return unmatched(client, UnmatchedReason::NoServices);
        }
        if artists.is_empty() {
            return unmatched(client, UnmatchedReason::NoArtists);
        }
        let Some(artist) = self.select_artist(artists, client) else {
            return unmatched(client, UnmatchedReason::NoQualifiedArtist);
        };

        let start = artist.next_start(client.preferred_start);
        let Some(end) = start.checked_add_signed(client.estimated_duration) else {
            return unmatched(client, UnmatchedReason::TimeOverflow);
        };
        let appointment = Appointment::new(
            client.id,
            artist.id,
            client.name.clone(),
            artist.name.clone(),
            client.services.clone(),
            start,
            end,
        );
        artist.book(appointment.clone());

        log::debug!(
            "booked '{}' with '{}' from {} to {} (preferred {})",
            appointment.client,
            appointment.artist,
            start,
            end,
            client.preferred_start
        );
        ClientOutcome::Scheduled(appointment)
    }

    /// Picks a capable artist according to the policy.
    fn select_artist<'a>(
        &self,
        artists: &'a mut ArtistRegistry,
        client: &Client,
    ) -> Option<&'a mut Artist> {
        let mut capable = artists
            .iter_mut()
            .filter(|a| a.can_perform(&client.services));

        match self.policy {
            AssignmentPolicy::FirstCapable => capable.next(),
            AssignmentPolicy::EarliestAvailable => {
                capable.min_by_key(|a| a.next_start(client.preferred_start))
            }
        }
    }
}

fn unmatched(client: &Client, reason: UnmatchedReason) -> ClientOutcome {
    log::warn!(
        "client '{}' not scheduled ({:?}), services: {:?}",
        client.name,
        reason,
        client.services
    );
    ClientOutcome::Unmatched(UnscheduledClient {
        client_id: client.id,
        client: client.name.clone(),
        services: client.services.clone(),
        preferred_start: client.preferred_start,
        reason,
    })
}

/// Flags an appointment that falls outside the window on the client's day.
fn check_day_window(window: &DayWindow, day: NaiveDate, appt: &Appointment, schedule: &mut Schedule) {
    if window.starts_early(day, appt.start) {
        schedule.add_violation(Violation::early_start(
            appt.client_id,
            format!(
                "'{}' starts at {} before the day opens at {}",
                appt.client,
                clock(appt.start, day),
                window.starts_at.format("%H:%M")
            ),
        ));
    }
    if window.overruns(day, appt.end) {
        schedule.add_violation(Violation::day_overrun(
            appt.client_id,
            format!(
                "'{}' ends at {} after the day closes at {}",
                appt.client,
                clock(appt.end, day),
                window.finishes_at.format("%H:%M")
            ),
        ));
    }
}

/// `HH:MM`, with the date prefixed when it is not `day`.
fn clock(t: NaiveDateTime, day: NaiveDate) -> String {
    if t.date() == day {
        t.format("%H:%M").to_string()
    } else {
        t.format("%Y-%m-%d %H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArtistId, ClientId, DurationTable, ViolationType};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 14)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn wedding_artists() -> ArtistRegistry {
        let mut artists = ArtistRegistry::new();
        artists.register("Sarah", ["makeup", "hair"]);
        artists.register("Emily", ["makeup"]);
        artists.register("James", ["hair"]);
        artists
    }

    fn wedding_clients() -> ClientRegistry {
        let mut clients = ClientRegistry::new();
        clients.register("Bride", ["makeup", "hair"], at(8, 0));
        clients.register("Mother of Bride", ["makeup"], at(7, 0));
        clients.register("Mother of Groom", ["makeup"], at(7, 30));
        clients
    }

    #[test]
    fn test_wedding_scenario() {
        // Sarah is registered first and does makeup, so she takes everyone.
        let mut artists = wedding_artists();
        let clients = wedding_clients();
        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);

        assert_eq!(schedule.appointment_count(), 3);
        assert!(schedule.is_complete());

        let a = &schedule.appointments;
        assert_eq!((a[0].client.as_str(), a[0].artist.as_str()), ("Mother of Bride", "Sarah"));
        assert_eq!((a[0].start, a[0].end), (at(7, 0), at(7, 45)));

        // Bumped from 07:30 because Sarah is busy.
        assert_eq!((a[1].client.as_str(), a[1].artist.as_str()), ("Mother of Groom", "Sarah"));
        assert_eq!((a[1].start, a[1].end), (at(7, 45), at(8, 30)));

        assert_eq!((a[2].client.as_str(), a[2].artist.as_str()), ("Bride", "Sarah"));
        assert_eq!((a[2].start, a[2].end), (at(8, 30), at(9, 45)));
    }

    #[test]
    fn test_wedding_scenario_makeup_artist_first() {
        let mut artists = ArtistRegistry::new();
        artists.register("Emily", ["makeup"]);
        artists.register("Sarah", ["makeup", "hair"]);
        artists.register("James", ["hair"]);
        let clients = wedding_clients();
        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);

        let rows: Vec<(&str, &str, NaiveDateTime, NaiveDateTime)> = schedule
            .appointments
            .iter()
            .map(|a| (a.client.as_str(), a.artist.as_str(), a.start, a.end))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Mother of Bride", "Emily", at(7, 0), at(7, 45)),
                ("Mother of Groom", "Emily", at(7, 45), at(8, 30)),
                ("Bride", "Sarah", at(8, 0), at(9, 15)),
            ]
        );
    }

    #[test]
    fn test_bookings_recorded_on_artists() {
        let mut artists = wedding_artists();
        let clients = wedding_clients();
        GreedyScheduler::new().build_schedule(&mut artists, &clients);

        let sarah = artists.get(ArtistId(0)).unwrap();
        assert_eq!(sarah.bookings.len(), 3);
        assert_eq!(sarah.bookings[0].end, sarah.bookings[1].start);
        assert_eq!(sarah.bookings[1].end, sarah.bookings[2].start);
        assert!(!artists.get(ArtistId(1)).unwrap().is_booked());
        assert!(!artists.get(ArtistId(2)).unwrap().is_booked());
    }

    #[test]
    fn test_first_capable_ignores_idle_artists() {
        // Sarah is first and capable, so she gets both even though Emily is idle.
        let mut artists = ArtistRegistry::new();
        artists.register("Sarah", ["makeup"]);
        artists.register("Emily", ["makeup"]);
        let mut clients = ClientRegistry::new();
        clients.register("A", ["makeup"], at(7, 0));
        clients.register("B", ["makeup"], at(7, 0));

        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        assert_eq!(schedule.appointments_for_artist(ArtistId(0)).len(), 2);
        assert_eq!(schedule.appointments[1].start, at(7, 45));
    }

    #[test]
    fn test_earliest_available_spreads_load() {
        let mut artists = ArtistRegistry::new();
        artists.register("Sarah", ["makeup"]);
        artists.register("Emily", ["makeup"]);
        let mut clients = ClientRegistry::new();
        clients.register("A", ["makeup"], at(7, 0));
        clients.register("B", ["makeup"], at(7, 0));

        let scheduler = GreedyScheduler::new().with_policy(AssignmentPolicy::EarliestAvailable);
        let schedule = scheduler.build_schedule(&mut artists, &clients);

        assert_eq!(schedule.appointments[0].artist, "Sarah");
        assert_eq!(schedule.appointments[1].artist, "Emily");
        assert_eq!(schedule.appointments[1].start, at(7, 0));
    }

    #[test]
    fn test_busy_artist_may_start_before_preference() {
        // Once booked, the artist's last end wins even if it is earlier
        // than the next client's preferred start.
        let mut artists = ArtistRegistry::new();
        artists.register("Emily", ["makeup"]);
        let mut clients = ClientRegistry::new();
        clients.register("Early", ["makeup"], at(7, 0));
        clients.register("Late", ["makeup"], at(11, 0));

        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        assert_eq!(schedule.appointments[1].start, at(7, 45));
    }

    #[test]
    fn test_unmatched_client_does_not_block_others() {
        let mut artists = wedding_artists();
        let mut clients = wedding_clients();
        let nails = clients.register("Aunt", ["nails"], at(6, 0));

        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        assert_eq!(schedule.appointment_count(), 3);
        assert_eq!(schedule.unscheduled.len(), 1);
        assert_eq!(schedule.unscheduled[0].client_id, nails);
        assert_eq!(schedule.unscheduled[0].reason, UnmatchedReason::NoQualifiedArtist);
        assert!(schedule.appointment_for_client(nails).is_none());
        // The others are placed exactly as without the aunt.
        assert_eq!(schedule.appointments[0].start, at(7, 0));
    }

    #[test]
    fn test_no_artists() {
        let mut artists = ArtistRegistry::new();
        let clients = wedding_clients();
        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);

        assert_eq!(schedule.appointment_count(), 0);
        assert_eq!(schedule.unscheduled.len(), 3);
        assert!(schedule
            .unscheduled
            .iter()
            .all(|u| u.reason == UnmatchedReason::NoArtists));
    }

    #[test]
    fn test_no_clients() {
        let mut artists = wedding_artists();
        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &ClientRegistry::new());
        assert_eq!(schedule.appointment_count(), 0);
        assert!(schedule.is_complete());
    }

    #[test]
    fn test_client_without_services() {
        let mut artists = wedding_artists();
        let mut clients = ClientRegistry::new();
        let id = clients.register("Ring Bearer", Vec::<String>::new(), at(9, 0));

        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        assert_eq!(schedule.unscheduled[0].client_id, id);
        assert_eq!(schedule.unscheduled[0].reason, UnmatchedReason::NoServices);
        assert!(artists.iter().all(|a| !a.is_booked()));
    }

    #[test]
    fn test_assign_single_client() {
        let mut artists = wedding_artists();
        let mut clients = ClientRegistry::new();
        let id = clients.register("Bridesmaid", ["hair"], at(9, 0));
        let client = clients.get(id).unwrap();

        let outcome = GreedyScheduler::new().assign(&mut artists, client);
        assert!(outcome.is_scheduled());
        let appt = outcome.appointment().unwrap();
        // Sarah is registered first and does hair.
        assert_eq!(appt.artist_id, ArtistId(0));
        assert_eq!(appt.duration(), Duration::minutes(30));
    }

    #[test]
    fn test_day_window_violations() {
        let mut artists = ArtistRegistry::new();
        artists.register("Emily", ["makeup"]);
        let mut clients = ClientRegistry::new();
        clients.register("Dawn", ["makeup"], at(5, 30));
        clients.register("Dusk", ["makeup"], at(17, 30));

        let window = DayWindow::from_hm((6, 0), (6, 45)).unwrap();
        let scheduler = GreedyScheduler::new().with_day_window(window);
        let schedule = scheduler.build_schedule(&mut artists, &clients);

        // Dawn 05:30-06:15 starts early; Dusk is pushed to 06:15-07:00 and overruns.
        assert_eq!(schedule.appointment_count(), 2);
        let kinds: Vec<(ClientId, ViolationType)> = schedule
            .violations
            .iter()
            .map(|v| (v.client_id, v.violation_type))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (ClientId(0), ViolationType::EarlyStart),
                (ClientId(1), ViolationType::DayOverrun),
            ]
        );
    }

    #[test]
    fn test_rerun_continues_from_bookings() {
        let mut artists = wedding_artists();
        let clients = wedding_clients();
        let scheduler = GreedyScheduler::new();
        scheduler.build_schedule(&mut artists, &clients);

        let second = scheduler.build_schedule(&mut artists, &clients);
        assert_eq!(second.appointments[0].start, at(9, 45));

        artists.clear_bookings();
        let fresh = scheduler.build_schedule(&mut artists, &clients);
        assert_eq!(fresh.appointments[0].start, at(7, 0));
    }

    #[test]
    fn test_cascade_onto_next_day_overruns() {
        let mut artists = ArtistRegistry::new();
        artists.register("Emily", ["glam"]);
        let mut clients = ClientRegistry::with_durations(DurationTable::new(60));
        for i in 0..25 {
            clients.register(format!("Guest {i}"), ["glam"], at(6, 0));
        }

        let scheduler = GreedyScheduler::new().with_day_window(DayWindow::default());
        let schedule = scheduler.build_schedule(&mut artists, &clients);

        // The last guest sits at 06:00-07:00 on the following date.
        let last = schedule.appointments.last().unwrap();
        assert_eq!(last.start, at(6, 0) + Duration::days(1));
        let flagged: Vec<&Violation> = schedule
            .violations
            .iter()
            .filter(|v| v.client_id == last.client_id)
            .collect();
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].violation_type, ViolationType::DayOverrun);
        assert!(flagged[0].message.contains("2025-08-15 07:00"));

        // 06:00-18:00 fits twelve one-hour slots; the other thirteen overrun.
        assert_eq!(schedule.violations.len(), 13);
        assert!(schedule
            .violations
            .iter()
            .all(|v| v.violation_type == ViolationType::DayOverrun));
    }

    #[test]
    fn test_end_out_of_range_is_unmatched() {
        let mut artists = ArtistRegistry::new();
        artists.register("Emily", ["makeup"]);
        let mut clients = ClientRegistry::new();
        let id = clients.register("Time Traveller", ["makeup"], NaiveDateTime::MAX);

        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        assert_eq!(schedule.appointment_count(), 0);
        assert_eq!(schedule.unscheduled[0].client_id, id);
        assert_eq!(schedule.unscheduled[0].reason, UnmatchedReason::TimeOverflow);
        assert!(artists.iter().all(|a| !a.is_booked()));
        assert!(matches!(
            schedule.unscheduled_errors()[0],
            crate::ScheduleError::TimeOverflow { .. }
        ));
    }
}
