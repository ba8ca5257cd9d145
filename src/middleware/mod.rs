// ABOUTME: HTTP middleware for the dashboard API
// ABOUTME: Cross-origin configuration for browser clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer configuration
pub mod cors;

pub use cors::setup_cors;
