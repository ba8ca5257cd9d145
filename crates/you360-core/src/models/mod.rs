// ABOUTME: Core data models shared across the You360 workspace
// ABOUTME: Wellness samples, conversations, routines, nutrition replies, and auth sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Auth service payloads and the retained session token
pub mod auth;
/// Chat conversation types
pub mod conversation;
/// Food scan and recipe reply types
pub mod nutrition;
/// Routine and task types
pub mod routine;
/// Wellness sample and score types
pub mod wellness;

pub use auth::{AuthSession, LoginRequest, SignupRequest};
pub use conversation::{Conversation, ConversationMessage, MessageRole};
pub use nutrition::{FoodScan, HealthRating, Recipe, SavedRecipe};
pub use routine::{Routine, RoutineId, RoutineTask, TimeOfDay};
pub use wellness::{WellnessSample, WellnessScore};
