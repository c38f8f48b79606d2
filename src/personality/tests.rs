use super::*;
use crate::animation::LoggedEyes;
use crate::hal::mock::{RecordingSink, ScriptedRandom, SinkCall};
use crate::hal::{Clock, ManualClock, SeededRandom};

/// Fixed dwells so only mood and curiosity consume draws.
fn fixed_profile() -> PersonalityProfile {
    PersonalityProfile {
        weights: MoodWeights::default(),
        dwell: DwellRanges::new(DwellRange::fixed(1_000), DwellRange::fixed(300)).unwrap(),
        curiosity_percent: 30,
        baseline_curiosity: false,
    }
}

fn started(now: u32) -> PersonalityController<RecordingSink> {
    let mut controller = PersonalityController::new(RecordingSink::default(), fixed_profile());
    controller.begin(now, &mut ScriptedRandom::new(&[]));
    controller.sink_mut().calls.clear();
    controller
}

#[test]
fn begin_applies_baseline_and_schedules_from_default_range() {
    let profile = PersonalityProfile {
        dwell: DwellRanges::new(
            DwellRange::new(1_000, 2_000).unwrap(),
            DwellRange::new(100, 200).unwrap(),
        )
        .unwrap(),
        baseline_curiosity: true,
        ..fixed_profile()
    };
    let mut controller = PersonalityController::new(RecordingSink::default(), profile);
    let mut rng = ScriptedRandom::new(&[500]);

    controller.begin(10_000, &mut rng);

    assert_eq!(
        controller.state(),
        PersonalityState {
            mood: Mood::Default,
            curious: true,
            next_change_at: 11_500,
        }
    );
    assert_eq!(rng.calls, vec![(0, 1_001)]);
    assert_eq!(
        controller.sink().calls,
        vec![SinkCall::Mood(Mood::Default), SinkCall::Curiosity(true)]
    );
}

#[test]
fn tick_before_deadline_is_a_no_op() {
    let mut controller = started(0);
    let before = controller.state();
    // Empty script: any draw would panic.
    let mut rng = ScriptedRandom::new(&[]);

    for now in [0, 1, 500, 999] {
        assert!(controller.tick(now, &mut rng).is_none());
    }

    assert_eq!(controller.state(), before);
    assert!(controller.sink().calls.is_empty());
    assert!(rng.calls.is_empty());
}

#[test]
fn tick_at_deadline_transitions_once() {
    let mut controller = started(0);
    let mut rng = ScriptedRandom::new(&[80, 10]);

    let change = controller.tick(1_000, &mut rng).expect("deadline reached");

    assert_eq!(
        change,
        MoodChange {
            from: Mood::Default,
            to: Mood::Happy,
            curious: true,
            dwell_ms: 300,
            next_change_at: 1_300,
        }
    );
    assert_eq!(controller.mood(), Mood::Happy);
    assert!(controller.is_curious());
    assert_eq!(controller.next_change_at(), 1_300);
    assert_eq!(
        controller.sink().calls,
        vec![SinkCall::Mood(Mood::Happy), SinkCall::Curiosity(true)]
    );
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn late_tick_schedules_from_now() {
    let mut controller = started(0);
    let mut rng = ScriptedRandom::new(&[93, 50]);

    let change = controller.tick(4_321, &mut rng).unwrap();

    assert_eq!(change.to, Mood::Tired);
    assert!(!change.curious);
    assert_eq!(controller.next_change_at(), 4_621);
}

#[test]
fn self_transition_still_reapplies_to_sink() {
    let mut controller = started(0);
    let mut rng = ScriptedRandom::new(&[0, 99]);

    let change = controller.tick(1_000, &mut rng).unwrap();

    assert!(change.is_refresh());
    assert_eq!(controller.next_change_at(), 2_000);
    assert_eq!(
        controller.sink().calls,
        vec![SinkCall::Mood(Mood::Default), SinkCall::Curiosity(false)]
    );
}

#[test]
fn deadline_near_counter_top_fires_after_wrap() {
    let start = u32::MAX - 2_000;
    let mut controller = started(start);
    assert_eq!(controller.next_change_at(), u32::MAX - 1_000);

    let mut rng = ScriptedRandom::new(&[87, 0]);
    assert!(controller.tick(u32::MAX - 1_001, &mut rng).is_none());

    let change = controller.tick(5, &mut rng).expect("wrapped now is past deadline");
    assert_eq!(change.to, Mood::Angry);
    assert_eq!(controller.next_change_at(), 305);
}

#[test]
fn deadline_that_wraps_is_not_fired_early() {
    let mut controller = started(u32::MAX - 500);
    // 1000 ms dwell wraps the deadline to 499.
    assert_eq!(controller.next_change_at(), 499);

    let mut rng = ScriptedRandom::new(&[0, 0]);
    assert!(controller.tick(u32::MAX, &mut rng).is_none());
    assert!(controller.tick(498, &mut rng).is_none());
    assert!(controller.tick(499, &mut rng).is_some());
}

#[test]
fn default_holds_majority_of_time() {
    let mut controller =
        PersonalityController::new(RecordingSink::default(), PersonalityProfile::default());
    let mut rng = SeededRandom::from_seed(2024);
    let mut now = 0u32;
    controller.begin(now, &mut rng);

    let mut default_ms = 0u64;
    let mut total_ms = 0u64;
    for _ in 0..5_000 {
        let dwell = controller.next_change_at().wrapping_sub(now);
        if controller.mood() == Mood::Default {
            default_ms += dwell as u64;
        }
        total_ms += dwell as u64;
        now = controller.next_change_at();
        assert!(controller.tick(now, &mut rng).is_some());
    }

    let share = default_ms as f64 / total_ms as f64;
    assert!(share > 0.8, "Default should dominate occupancy, got {}", share);
}

#[test]
fn drives_logged_eyes() {
    let clock = ManualClock::starting_at(0);
    let eyes = LoggedEyes::new(clock.clone(), 20, 0);
    let mut controller = PersonalityController::new(eyes, fixed_profile());

    controller.begin(clock.now_millis(), &mut ScriptedRandom::new(&[]));
    clock.advance(1_000);
    controller.tick(clock.now_millis(), &mut ScriptedRandom::new(&[90, 5]));

    assert_eq!(controller.sink().mood(), Mood::Angry);
    assert!(controller.sink().is_curious());
}
