// ABOUTME: Chat adapter replaying the prior conversation and returning the assistant's reply
// ABOUTME: The owning session appends both turns, or the error sentinel on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use you360_core::constants::messages;
use you360_core::errors::AdapterError;
use you360_core::models::ConversationMessage;

use super::{require_text, AdviceFeature};
use crate::llm::{AiRequest, AiResponse};

/// One chat exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Conversation before this message, oldest first
    pub history: Vec<ConversationMessage>,
    /// New user message
    pub message: String,
}

/// Free-form wellness chat feature
#[derive(Debug, Clone, Copy)]
pub struct ChatFeature;

impl AdviceFeature for ChatFeature {
    const NAME: &'static str = "chat";
    type Input = ChatTurn;
    type Output = String;

    fn build_request(input: &ChatTurn) -> Result<AiRequest, AdapterError> {
        let message = require_text(&input.message, messages::CHAT_MESSAGE_REQUIRED)?;
        Ok(AiRequest::new(message).with_history(input.history.clone()))
    }

    fn map_response(_input: &ChatTurn, response: AiResponse) -> Result<String, AdapterError> {
        Ok(response.into_text()?)
    }
}
