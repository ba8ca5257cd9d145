// ABOUTME: Error types re-exported from the core crate for root-crate callers
// ABOUTME: AppError drives HTTP responses; GatewayError and AdapterError cover AI calls
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use you360_core::errors::*;
