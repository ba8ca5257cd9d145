// ABOUTME: Core types and constants for the You360 wellness dashboard
// ABOUTME: Foundation crate with error handling, shared models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # You360 Core
//!
//! Foundation crate providing shared types and constants for the You360
//! wellness dashboard. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the gateway/adapter taxonomies
//! - **constants**: Scoring weights, provider defaults, and user-facing messages
//! - **models**: Wellness samples, conversations, routines, nutrition and auth records

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models shared by the intelligence engine and the dashboard
pub mod models;
