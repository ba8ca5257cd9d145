// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Command implementations for you360-cli
// ABOUTME: Groups advice cards, nutrition, chat, and local wellness commands

pub mod advice;
pub mod chat;
pub mod nutrition;
pub mod wellness;
