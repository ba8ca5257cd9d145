// ABOUTME: Tests for the bounded 0-100 wellness score and its components
// ABOUTME: Covers the reference readings, saturation, clamping, and monotonic behaviour
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use you360_core::models::WellnessSample;
use you360_intelligence::WellnessScorer;

fn score(sleep_hours: f64, steps_today: u64, glucose_reading: f64) -> u8 {
    WellnessScorer::compute(&WellnessSample::new(sleep_hours, steps_today, glucose_reading)).value()
}

#[test]
fn test_reference_readings_score_81() {
    assert_eq!(score(7.5, 5000, 105.0), 81);
}

#[test]
fn test_baseline_inputs_score_base() {
    assert_eq!(score(6.0, 0, 120.0), 55);
    assert_eq!(score(4.0, 0, 80.0), 55);
}

#[test]
fn test_default_sample_score() {
    // 7.5h sleep, no steps, 105 mg/dL
    assert_eq!(WellnessScorer::compute(&WellnessSample::default()).value(), 61);
}

#[test]
fn test_bonuses_saturate_at_twenty() {
    assert!((WellnessScorer::step_bonus(1_000_000) - 20.0).abs() < f64::EPSILON);
    assert!((WellnessScorer::sleep_bonus(24.0) - 20.0).abs() < f64::EPSILON);
    assert_eq!(score(24.0, 1_000_000, 90.0), 95);
}

#[test]
fn test_short_sleep_earns_no_bonus() {
    assert!(WellnessScorer::sleep_bonus(3.0).abs() < f64::EPSILON);
    assert!(WellnessScorer::sleep_bonus(f64::NAN).abs() < f64::EPSILON);
}

#[test]
fn test_glucose_penalty_above_threshold() {
    assert!((WellnessScorer::glucose_penalty(145.0) - 5.0).abs() < f64::EPSILON);
    assert!(WellnessScorer::glucose_penalty(119.0).abs() < f64::EPSILON);
    assert_eq!(score(6.0, 0, 145.0), 50);
}

#[test]
fn test_score_is_clamped_to_zero() {
    assert_eq!(score(0.0, 0, 2000.0), 0);
}

#[test]
fn test_score_always_within_bounds() {
    for sleep in [0.0, 3.5, 6.0, 7.25, 9.0, 14.0] {
        for steps in [0, 500, 2400, 10_000, 50_000] {
            for glucose in [0.0, 95.0, 120.0, 180.0, 400.0, 900.0] {
                let value = score(sleep, steps, glucose);
                assert!(value <= 100, "score {value} out of range");
            }
        }
    }
}

#[test]
fn test_score_monotonic_in_each_input() {
    let mut previous = 0;
    for steps in (0..=3000).step_by(100) {
        let value = score(7.0, steps, 110.0);
        assert!(value >= previous);
        previous = value;
    }

    previous = 0;
    for tenths in 0..=150 {
        let value = score(f64::from(tenths) / 10.0, 1000, 110.0);
        assert!(value >= previous);
        previous = value;
    }

    previous = 100;
    for glucose in (80..=400).step_by(5) {
        let value = score(7.0, 1000, f64::from(glucose));
        assert!(value <= previous);
        previous = value;
    }
}

#[test]
fn test_breakdown_sums_to_score() {
    let breakdown = WellnessScorer::breakdown(&WellnessSample::new(7.5, 5000, 130.0));
    let raw = breakdown.base + breakdown.step_bonus + breakdown.sleep_bonus
        - breakdown.glucose_penalty;
    assert_eq!(breakdown.score.value(), raw.round() as u8);
}
