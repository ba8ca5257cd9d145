// ABOUTME: User-visible strings surfaced when a dashboard feature cannot produce a result
// ABOUTME: Kept in one place so the CLI and HTTP surfaces show identical wording
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Gateway has no API key
pub const AI_NOT_CONFIGURED: &str =
    "AI assistant is not configured. Add a Gemini API key to enable tips.";

/// Provider throttled every attempt
pub const AI_RATE_LIMITED: &str =
    "The AI service is busy right now. Please wait a moment and try again.";

/// Provider or network failure
pub const AI_UNAVAILABLE: &str = "Unable to fetch a response from the AI service.";

/// Reply did not match the requested structure
pub const AI_MALFORMED: &str =
    "The AI returned an unexpected answer. Please try again.";

/// Reply held no candidates
pub const AI_EMPTY: &str = "The AI did not return an answer. Please try again.";

/// Second request while one is outstanding
pub const REQUEST_IN_FLIGHT: &str = "Still working on your previous request…";

/// Assistant turn appended to the conversation when the chat call fails
pub const CHAT_ERROR_SENTINEL: &str = "⚠️ Error talking to AI";

/// Food scan invoked without an image
pub const NO_IMAGE_SELECTED: &str = "no image selected";

/// Recipe generation invoked with a blank ingredient list
pub const NO_INGREDIENTS: &str = "Please enter some ingredients.";

/// Hair advice invoked without describing the issue
pub const HAIR_ISSUE_REQUIRED: &str =
    "Please describe your hair issue clearly (e.g. dry, hairfall, thin, oily).";

/// Diet advice invoked without listing foods
pub const FOOD_REQUIRED: &str = "Please tell us what you ate.";

/// Chat invoked with a blank message
pub const CHAT_MESSAGE_REQUIRED: &str = "Please type a message first.";

/// Auth service returned an error without a message
pub const AUTH_FALLBACK: &str = "Something went wrong";

/// Food scan invoked with a file that is not an image
pub const UNSUPPORTED_IMAGE: &str = "Please choose an image file (JPEG, PNG, or WebP).";

/// Mood tip invoked without a mood
pub const MOOD_REQUIRED: &str = "Please pick a mood first.";

/// Sleep analysis invoked with a negative or non-numeric value
pub const INVALID_SLEEP_HOURS: &str = "Please enter a valid number of hours slept.";

/// Step conversion invoked with a negative or non-numeric distance
pub const INVALID_DISTANCE: &str = "Please enter a valid distance.";

/// Routine saved without a name
pub const ROUTINE_NAME_REQUIRED: &str = "Please enter a routine name.";

/// Routine saved without tasks
pub const ROUTINE_TASKS_REQUIRED: &str = "Please add at least one task.";

/// Sign-up or login attempted with a blank field
pub const CREDENTIALS_REQUIRED: &str = "Please enter your email and password.";

/// Sign-up attempted without a name
pub const NAME_REQUIRED: &str = "Please enter your name.";

/// Glucose reading entered as a negative or non-numeric value
pub const INVALID_GLUCOSE: &str = "Please enter a valid glucose reading.";
