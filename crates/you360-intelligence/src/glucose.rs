// ABOUTME: Simulated post-meal blood glucose reading shown after diet advice
// ABOUTME: Draws uniformly from the 110-134 mg/dL range a non-diabetic adult typically sees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rand::Rng;
use you360_core::constants::wellness::{POST_MEAL_GLUCOSE_MIN, POST_MEAL_GLUCOSE_SPREAD};

/// Produces the dashboard's estimated post-meal glucose reading
///
/// No meter is connected, so the reading is a plausible simulated value
/// rather than a measurement.
pub struct GlucoseEstimator;

impl GlucoseEstimator {
    /// Draw a post-meal reading in mg/dL using the thread-local generator
    #[must_use]
    pub fn post_meal_reading() -> f64 {
        Self::post_meal_reading_with(&mut rand::thread_rng())
    }

    /// Draw a post-meal reading from the supplied generator
    pub fn post_meal_reading_with<R: Rng + ?Sized>(rng: &mut R) -> f64 {
        f64::from(POST_MEAL_GLUCOSE_MIN + rng.gen_range(0..POST_MEAL_GLUCOSE_SPREAD))
    }
}
