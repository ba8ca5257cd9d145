// ABOUTME: Tests for the routine tracker: defaults, CRUD, task toggling, and progress
// ABOUTME: Includes the aggregate progress over no routines and validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use you360::errors::ErrorCode;
use you360::routines::{parse_task_list, RoutineTracker};
use you360_core::models::TimeOfDay;

fn tasks(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_owned()).collect()
}

#[test]
fn test_defaults_cover_every_section() {
    let tracker = RoutineTracker::with_defaults();
    assert_eq!(tracker.routines().len(), 4);
    for time_of_day in TimeOfDay::ALL {
        assert_eq!(tracker.routines_for(time_of_day).count(), 1);
    }
    let ids: Vec<u64> = tracker.routines().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(tracker.overall_progress(), 0);
}

#[test]
fn test_two_of_three_tasks_is_two_thirds() {
    let mut tracker = RoutineTracker::new();
    let id = tracker
        .add_routine("Stretch", TimeOfDay::Morning, tasks(&["Neck", "Back", "Legs"]))
        .unwrap()
        .id;

    assert!(tracker.toggle_task(id, 0).unwrap());
    assert!(tracker.toggle_task(id, 2).unwrap());

    let progress = tracker.progress(id).unwrap();
    assert!((progress - 66.67).abs() < 0.01);
    assert_eq!(tracker.overall_progress(), 66);
}

#[test]
fn test_overall_progress_with_no_routines_is_zero() {
    assert_eq!(RoutineTracker::new().overall_progress(), 0);
}

#[test]
fn test_toggle_twice_restores_state() {
    let mut tracker = RoutineTracker::with_defaults();
    assert!(tracker.toggle_task(1, 1).unwrap());
    assert!(!tracker.toggle_task(1, 1).unwrap());
    assert!(tracker.progress(1).unwrap().abs() < f64::EPSILON);
}

#[test]
fn test_toggle_out_of_range_is_invalid_input() {
    let mut tracker = RoutineTracker::with_defaults();
    let error = tracker.toggle_task(1, 9).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[test]
fn test_unknown_routine_is_not_found() {
    let mut tracker = RoutineTracker::with_defaults();
    assert_eq!(
        tracker.toggle_task(99, 0).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
    assert_eq!(
        tracker.delete_routine(99).unwrap_err().code,
        ErrorCode::ResourceNotFound
    );
}

#[test]
fn test_add_rejects_blank_name_and_empty_tasks() {
    let mut tracker = RoutineTracker::new();
    assert_eq!(
        tracker
            .add_routine("  ", TimeOfDay::Evening, tasks(&["Read"]))
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        tracker
            .add_routine("Wind down", TimeOfDay::Evening, tasks(&["", "  "]))
            .unwrap_err()
            .code,
        ErrorCode::InvalidInput
    );
    assert!(tracker.routines().is_empty());
}

#[test]
fn test_edit_replaces_tasks_and_resets_completion() {
    let mut tracker = RoutineTracker::with_defaults();
    tracker.toggle_task(2, 0).unwrap();

    let edited = tracker
        .edit_routine(2, "Gym", TimeOfDay::Evening, tasks(&["Run", " Lift "]))
        .unwrap();

    assert_eq!(edited.name, "Gym");
    assert_eq!(edited.time_of_day, TimeOfDay::Evening);
    assert_eq!(edited.tasks.len(), 2);
    assert_eq!(edited.tasks[1].name, "Lift");
    assert!(edited.tasks.iter().all(|task| !task.completed));
}

#[test]
fn test_delete_keeps_remaining_order_and_ids_are_not_reused() {
    let mut tracker = RoutineTracker::with_defaults();
    let removed = tracker.delete_routine(2).unwrap();
    assert_eq!(removed.name, "Afternoon Workout");

    let ids: Vec<u64> = tracker.routines().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);

    let added = tracker
        .add_routine("Walk", TimeOfDay::Afternoon, tasks(&["Walk 20 minutes"]))
        .unwrap();
    assert_eq!(added.id, 5);
}

#[test]
fn test_views_include_progress() {
    let mut tracker = RoutineTracker::with_defaults();
    tracker.toggle_task(1, 0).unwrap();
    let views = tracker.views();
    assert!((views[0].progress - 50.0).abs() < f64::EPSILON);
    assert!(views[1].progress.abs() < f64::EPSILON);
}

#[test]
fn test_parse_task_list_trims_and_drops_blanks() {
    assert_eq!(
        parse_task_list(" Wake up, ,Drink water ,, Stretch"),
        vec!["Wake up", "Drink water", "Stretch"]
    );
    assert!(parse_task_list(" , ").is_empty());
}
