// ABOUTME: In-memory routine tracker with task completion and aggregate progress
// ABOUTME: Seeds the four default routines and validates names and task lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use tracing::debug;
use you360_core::constants::messages;
use you360_core::errors::{AppError, AppResult};
use you360_core::models::{Routine, RoutineId, RoutineTask, TimeOfDay};
use you360_intelligence::{overall_progress, routine_progress};

/// Routines shown on a fresh dashboard
const DEFAULT_ROUTINES: [(&str, TimeOfDay, &[&str]); 4] = [
    ("Morning Habits", TimeOfDay::Morning, &["Wake up", "Drink water"]),
    (
        "Afternoon Workout",
        TimeOfDay::Afternoon,
        &["20 push-ups", "30 sit-ups", "10 squats"],
    ),
    ("Evening Chill", TimeOfDay::Evening, &["Read a book", "Eat dinner"]),
    (
        "Yoga & Meditation",
        TimeOfDay::Wellness,
        &["10-minute meditation", "Gentle stretches"],
    ),
];

/// Split a comma-separated task list, trimming entries and dropping blanks
#[must_use]
pub fn parse_task_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|task| !task.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Routine with its completion percentage, as shown in lists
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutineView {
    /// The routine
    #[serde(flatten)]
    pub routine: Routine,
    /// Completion percentage in [0, 100]
    pub progress: f64,
}

impl From<&Routine> for RoutineView {
    fn from(routine: &Routine) -> Self {
        Self {
            routine: routine.clone(),
            progress: routine_progress(routine),
        }
    }
}

/// Ordered collection of routines owned by one dashboard session
#[derive(Debug, Clone)]
pub struct RoutineTracker {
    routines: Vec<Routine>,
    next_id: RoutineId,
}

impl RoutineTracker {
    /// Create an empty tracker
    #[must_use]
    pub const fn new() -> Self {
        Self {
            routines: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a tracker holding the default routines with ids 1 through 4
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut tracker = Self::new();
        for (name, time_of_day, tasks) in DEFAULT_ROUTINES {
            let id = tracker.allocate_id();
            tracker.routines.push(Routine {
                id,
                name: name.to_owned(),
                time_of_day,
                tasks: tasks.iter().map(|task| RoutineTask::new(*task)).collect(),
            });
        }
        tracker
    }

    /// All routines in insertion order
    #[must_use]
    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    /// Routines scheduled for a section of the day
    pub fn routines_for(&self, time_of_day: TimeOfDay) -> impl Iterator<Item = &Routine> {
        self.routines
            .iter()
            .filter(move |routine| routine.time_of_day == time_of_day)
    }

    /// Look up a routine
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub fn routine(&self, id: RoutineId) -> AppResult<&Routine> {
        self.routines
            .iter()
            .find(|routine| routine.id == id)
            .ok_or_else(|| AppError::not_found(format!("Routine {id}")))
    }

    /// Add a routine with all tasks incomplete
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or an empty task list
    pub fn add_routine(
        &mut self,
        name: &str,
        time_of_day: TimeOfDay,
        tasks: Vec<String>,
    ) -> AppResult<&Routine> {
        let (name, tasks) = Self::validate(name, tasks)?;
        let id = self.allocate_id();
        debug!(routine.id = id, routine.name = %name, "Adding routine");
        self.routines.push(Routine {
            id,
            name,
            time_of_day,
            tasks,
        });
        self.routine(id)
    }

    /// Replace a routine's name, time of day, and tasks; completion is reset
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or `InvalidInput` for a
    /// blank name or an empty task list
    pub fn edit_routine(
        &mut self,
        id: RoutineId,
        name: &str,
        time_of_day: TimeOfDay,
        tasks: Vec<String>,
    ) -> AppResult<&Routine> {
        let (name, tasks) = Self::validate(name, tasks)?;
        let routine = self.routine_mut(id)?;
        routine.name = name;
        routine.time_of_day = time_of_day;
        routine.tasks = tasks;
        debug!(routine.id = id, "Edited routine");
        self.routine(id)
    }

    /// Remove a routine
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub fn delete_routine(&mut self, id: RoutineId) -> AppResult<Routine> {
        let index = self
            .routines
            .iter()
            .position(|routine| routine.id == id)
            .ok_or_else(|| AppError::not_found(format!("Routine {id}")))?;
        debug!(routine.id = id, "Deleted routine");
        Ok(self.routines.remove(index))
    }

    /// Flip one task's completion and return its new state
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, or `InvalidInput` when
    /// `task_index` is out of range
    pub fn toggle_task(&mut self, id: RoutineId, task_index: usize) -> AppResult<bool> {
        let routine = self.routine_mut(id)?;
        let task_count = routine.tasks.len();
        let task = routine.tasks.get_mut(task_index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Task index {task_index} is out of range for routine {id} ({task_count} tasks)"
            ))
        })?;
        task.completed = !task.completed;
        Ok(task.completed)
    }

    /// Completion percentage of one routine
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub fn progress(&self, id: RoutineId) -> AppResult<f64> {
        self.routine(id).map(routine_progress)
    }

    /// Floored completion percentage across every routine; 0 when there are no tasks
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        overall_progress(&self.routines)
    }

    /// Routines with their progress, for display
    #[must_use]
    pub fn views(&self) -> Vec<RoutineView> {
        self.routines.iter().map(RoutineView::from).collect()
    }

    fn routine_mut(&mut self, id: RoutineId) -> AppResult<&mut Routine> {
        self.routines
            .iter_mut()
            .find(|routine| routine.id == id)
            .ok_or_else(|| AppError::not_found(format!("Routine {id}")))
    }

    fn allocate_id(&mut self) -> RoutineId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn validate(name: &str, tasks: Vec<String>) -> AppResult<(String, Vec<RoutineTask>)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input(messages::ROUTINE_NAME_REQUIRED));
        }
        let tasks: Vec<RoutineTask> = tasks
            .into_iter()
            .map(|task| task.trim().to_owned())
            .filter(|task| !task.is_empty())
            .map(RoutineTask::new)
            .collect();
        if tasks.is_empty() {
            return Err(AppError::invalid_input(messages::ROUTINE_TASKS_REQUIRED));
        }
        Ok((name.to_owned(), tasks))
    }
}

impl Default for RoutineTracker {
    fn default() -> Self {
        Self::new()
    }
}
