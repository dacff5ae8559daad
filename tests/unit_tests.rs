// Unit tests for SportMatch

use rand::rngs::StdRng;
use rand::SeedableRng;
use sportmatch::core::{guard, normalize_sports, DecisionOutcome, RawSports, RouteDecision, SwipeMachine};
use sportmatch::fixtures;
use sportmatch::models::{SkillLevel, SwipeDirection};
use std::collections::HashSet;

fn fresh(p: f64) -> SwipeMachine {
    SwipeMachine::new(fixtures::profiles(), p).unwrap()
}

fn assert_disjoint(machine: &SwipeMachine) {
    let liked: HashSet<_> = machine.liked().iter().collect();
    assert!(machine.disliked().iter().all(|id| !liked.contains(id)));
}

#[test]
fn test_decided_profiles_leave_available() {
    for direction in [SwipeDirection::Like, SwipeDirection::Dislike] {
        for profile in fixtures::profiles() {
            let mut machine = fresh(0.5);
            let mut rng = StdRng::seed_from_u64(42);

            machine.decide(&profile.id, direction, &mut rng).unwrap();

            assert!(machine.available().iter().all(|p| p.id != profile.id));
            assert_eq!(machine.available().len(), 6);
        }
    }
}

#[test]
fn test_reset_restores_full_set() {
    let mut machine = fresh(0.5);
    let mut rng = StdRng::seed_from_u64(9);

    for (i, profile) in fixtures::profiles().iter().enumerate() {
        let direction = if i % 2 == 0 { SwipeDirection::Like } else { SwipeDirection::Dislike };
        machine.decide(&profile.id, direction, &mut rng).unwrap();
    }
    assert!(machine.available().is_empty());

    machine.reset();

    let ids: Vec<_> = machine.available().iter().map(|p| p.id.clone()).collect();
    let expected: Vec<_> = fixtures::profiles().into_iter().map(|p| p.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_liked_and_disliked_stay_disjoint() {
    let mut machine = fresh(0.5);
    let mut rng = StdRng::seed_from_u64(123);
    let ids: Vec<String> = fixtures::profiles().into_iter().map(|p| p.id).collect();

    // Deterministic pseudo-random walk over decisions and resets
    for step in 0..200usize {
        let id = &ids[(step * 5 + 3) % ids.len()];
        let direction = if step % 3 == 0 { SwipeDirection::Dislike } else { SwipeDirection::Like };
        machine.decide(id, direction, &mut rng).unwrap();
        if step % 17 == 0 {
            machine.reset();
        }
        assert_disjoint(&machine);
    }
}

#[test]
fn test_two_likes_one_dislike_leaves_four() {
    let mut machine = fresh(0.7);
    let mut rng = StdRng::seed_from_u64(5);

    machine.decide("1", SwipeDirection::Like, &mut rng).unwrap();
    machine.decide("5", SwipeDirection::Like, &mut rng).unwrap();
    machine.decide("7", SwipeDirection::Dislike, &mut rng).unwrap();

    assert_eq!(machine.available().len(), 4);
}

#[test]
fn test_queue_advances_in_fixture_order() {
    let mut machine = fresh(0.0);
    let mut rng = StdRng::seed_from_u64(5);

    assert_eq!(machine.current().unwrap().id, "1");
    machine.decide("1", SwipeDirection::Dislike, &mut rng).unwrap();
    assert_eq!(machine.current().unwrap().id, "2");

    // Deciding out of order does not reshuffle the queue
    machine.decide("4", SwipeDirection::Like, &mut rng).unwrap();
    assert_eq!(machine.current().unwrap().id, "2");
}

#[test]
fn test_match_rate_tracks_probability() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut matched = 0;
    let rounds = 500;

    for _ in 0..rounds {
        let mut machine = fresh(0.5);
        let decision = machine.decide("2", SwipeDirection::Like, &mut rng).unwrap();
        if decision.outcome == DecisionOutcome::Matched {
            matched += 1;
        }
    }

    // 0.5 +/- a generous margin for a seeded run
    assert!(matched > 175 && matched < 325, "matched {} of {}", matched, rounds);
}

#[test]
fn test_snapshot_round_trip_same_day() {
    let mut machine = fresh(1.0);
    let mut rng = StdRng::seed_from_u64(5);
    machine.decide("6", SwipeDirection::Like, &mut rng).unwrap();

    let snapshot = machine.snapshot();
    let today = snapshot.session_date.unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    let restored = SwipeMachine::restore(fixtures::profiles(), 1.0, serde_json::from_str(&json).unwrap(), today).unwrap();

    assert_eq!(restored.liked(), machine.liked());
    assert_eq!(restored.matches().len(), 1);
    assert_eq!(restored.available().len(), 6);
}

#[test]
fn test_normalize_csv_sports() {
    let raw: RawSports = serde_json::from_str(r#""Fútbol,Tenis""#).unwrap();
    let sports = normalize_sports(raw);
    assert_eq!(sports.len(), 2);
    assert!(sports.iter().all(|s| s.level.is_none()));
}

#[test]
fn test_fixture_levels_deserialize_from_spanish() {
    let json = r#"{
        "id": "9",
        "name": "Ana",
        "age": 30,
        "location": "Palermo",
        "bio": "",
        "sports": [{ "sport": "Hockey", "level": "Avanzado" }],
        "distance": 1.0,
        "profilePicture": "/images/profile1.png"
    }"#;

    let profile: sportmatch::Profile = serde_json::from_str(json).unwrap();
    assert_eq!(profile.sports[0].level, Some(SkillLevel::Advanced));
    assert_eq!(profile.sport_names(), vec!["Hockey"]);
}

#[test]
fn test_guard_routes() {
    assert_eq!(guard("/matches", false), RouteDecision::Redirect("/login"));
    assert_eq!(guard("/register", true), RouteDecision::Redirect("/swipe"));
    assert_eq!(guard("/chats", true), RouteDecision::Allow);
}
