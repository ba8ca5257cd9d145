// ABOUTME: Application constants organized by domain for the You360 dashboard
// ABOUTME: Scoring weights, provider defaults, environment keys, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// User-facing messages shown in feature display areas
pub mod messages;

/// Generative-AI provider defaults and environment variable names
pub mod provider;

/// Wellness scoring weights and physiological assumptions
pub mod wellness;

/// Service identity used in logs
pub mod service_names {
    /// Dashboard API service name
    pub const YOU360_SERVER: &str = "you360-server";
    /// CLI service name
    pub const YOU360_CLI: &str = "you360-cli";
}

/// Fixed keys for persisted local state
pub mod storage_keys {
    /// Key (file stem) under which the most recent recipe is stored
    pub const LAST_RECIPE: &str = "lastRecipe";
}
