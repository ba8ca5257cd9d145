// ABOUTME: Completion percentages for single routines and for the whole day
// ABOUTME: Empty routines and empty days report zero instead of dividing by zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use you360_core::models::Routine;

/// Percentage of a routine's tasks that are complete (0.0-100.0)
#[must_use]
pub fn routine_progress(routine: &Routine) -> f64 {
    let total = routine.total_count();
    if total == 0 {
        return 0.0;
    }
    routine.completed_count() as f64 / total as f64 * 100.0
}

/// Percentage of all tasks across routines that are complete, floored
#[must_use]
pub fn overall_progress<'a, I>(routines: I) -> u8
where
    I: IntoIterator<Item = &'a Routine>,
{
    let (completed, total) = routines
        .into_iter()
        .fold((0_usize, 0_usize), |(done, all), routine| {
            (done + routine.completed_count(), all + routine.total_count())
        });
    if total == 0 {
        return 0;
    }
    // completed <= total, so the floored percentage fits in 0..=100
    (completed * 100 / total) as u8
}
