// ABOUTME: Local wellness commands that need no AI: score breakdown and meditation timer
// ABOUTME: The meditation countdown ticks once per second on a tokio interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::Write;
use std::time::Duration;

use you360_core::models::WellnessSample;
use you360_intelligence::{MeditationTimer, WellnessScorer};

use crate::helpers::display::{print_card, print_failure};

pub fn score(sleep_hours: f64, steps_today: u64, glucose_reading: f64) {
    let sample = WellnessSample::new(sleep_hours, steps_today, glucose_reading);
    let breakdown = WellnessScorer::breakdown(&sample);
    let body = format!(
        "Sleep: {sleep_hours:.1}h  Steps: {steps_today}  Glucose: {glucose_reading:.0} mg/dL\n\n\
         Step bonus:      +{:.1}\nSleep bonus:     +{:.1}\nGlucose penalty: -{:.1}",
        breakdown.step_bonus, breakdown.sleep_bonus, breakdown.glucose_penalty
    );
    print_card(&format!("Wellness score: {}", breakdown.score), &body);
}

pub async fn meditate(minutes: u32) {
    let mut timer = MeditationTimer::new();
    if !timer.start(minutes) {
        print_failure("Choose at least one minute.");
        return;
    }

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick completes immediately
    interval.tick().await;
    loop {
        print!("\rMeditating... {}  ", timer.remaining_display());
        // Ignore flush failures on a closed terminal
        let _ = std::io::stdout().flush();
        interval.tick().await;
        if timer.tick() {
            break;
        }
    }
    println!("\rMeditation complete. Well done!");
}
