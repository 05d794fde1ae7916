//! Randomised rosters checked against the scheduler's guarantees.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use glam_schedule::models::{ArtistRegistry, ClientRegistry, Schedule, UnmatchedReason};
use glam_schedule::scheduler::{AssignmentPolicy, GreedyScheduler};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SERVICES: [&str; 4] = ["makeup", "hair", "lashes", "nails"];

fn at_minute(minute: i64) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 14)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap()
        + Duration::minutes(minute)
}

fn pick_services(rng: &mut StdRng) -> Vec<&'static str> {
    let count = rng.random_range(1..=3);
    (0..count)
        .map(|_| SERVICES[rng.random_range(0..SERVICES.len())])
        .collect()
}

fn random_roster(seed: u64) -> (ArtistRegistry, ClientRegistry) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut artists = ArtistRegistry::new();
    for i in 0..rng.random_range(0..5) {
        artists.register(format!("artist{i}"), pick_services(&mut rng));
    }

    let mut clients = ClientRegistry::new();
    for i in 0..rng.random_range(0..20) {
        // Coarse 15-minute grid so ties in preferred start are common.
        let start = at_minute(15 * rng.random_range(0..16));
        clients.register(format!("client{i}"), pick_services(&mut rng), start);
    }
    (artists, clients)
}

fn check_invariants(artists: &ArtistRegistry, clients: &ClientRegistry, schedule: &Schedule) {
    // Every client is either booked or reported, exactly once.
    assert_eq!(
        schedule.appointment_count() + schedule.unscheduled.len(),
        clients.len()
    );

    for appt in &schedule.appointments {
        let client = clients.get(appt.client_id).unwrap();
        let artist = artists.get(appt.artist_id).unwrap();

        assert_eq!(appt.end - appt.start, client.estimated_duration);
        assert!(appt.end > appt.start);
        assert!(artist.can_perform(&client.services));
    }

    for u in &schedule.unscheduled {
        let client = clients.get(u.client_id).unwrap();
        if u.reason == UnmatchedReason::NoQualifiedArtist {
            assert!(artists.iter().all(|a| !a.can_perform(&client.services)));
        }
    }

    for artist in artists.iter() {
        let booked = schedule.appointments_for_artist(artist.id);
        assert_eq!(booked.len(), artist.bookings.len());
        for pair in booked.windows(2) {
            // Back-to-back: each booking starts exactly when the previous ends.
            assert_eq!(pair[1].start, pair[0].end);
            assert!(!pair[0].overlaps(pair[1]));
        }
    }

    // Processing order is preferred-start order, ties by registration.
    let order: Vec<(NaiveDateTime, usize)> = schedule
        .appointments
        .iter()
        .map(|a| {
            let c = clients.get(a.client_id).unwrap();
            (c.preferred_start, c.id.0)
        })
        .collect();
    assert!(order.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn first_capable_invariants_hold() {
    for seed in 0..200 {
        let (mut artists, clients) = random_roster(seed);
        let schedule = GreedyScheduler::new().build_schedule(&mut artists, &clients);
        check_invariants(&artists, &clients, &schedule);

        // First-capable: nobody registered earlier could have taken the client.
        for appt in &schedule.appointments {
            let client = clients.get(appt.client_id).unwrap();
            assert!(artists
                .iter()
                .take_while(|a| a.id != appt.artist_id)
                .all(|a| !a.can_perform(&client.services)));
        }
    }
}

#[test]
fn earliest_available_invariants_hold() {
    let scheduler = GreedyScheduler::new().with_policy(AssignmentPolicy::EarliestAvailable);
    for seed in 0..200 {
        let (mut artists, clients) = random_roster(seed);
        let schedule = scheduler.build_schedule(&mut artists, &clients);
        check_invariants(&artists, &clients, &schedule);
    }
}

#[test]
fn scheduling_is_deterministic() {
    for seed in 0..50 {
        let (mut a1, clients) = random_roster(seed);
        let (mut a2, _) = random_roster(seed);
        let s1 = GreedyScheduler::new().build_schedule(&mut a1, &clients);
        let s2 = GreedyScheduler::new().build_schedule(&mut a2, &clients);
        assert_eq!(s1.appointments, s2.appointments);
        assert_eq!(s1.unscheduled, s2.unscheduled);
    }
}
