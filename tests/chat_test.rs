// ABOUTME: Tests for the chat assistant's conversation handling
// ABOUTME: Verifies history ordering, the error sentinel, and untouched history on rejection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::Arc;

use common::{session, text_reply, ScriptedTransport};
use tokio::sync::Notify;
use you360::errors::AdapterError;
use you360_core::constants::messages;
use you360_core::models::MessageRole;

#[tokio::test]
async fn test_exchange_appends_user_then_assistant() {
    let transport = ScriptedTransport::new([text_reply("Drink a glass of water first.")]);
    let session = session(&transport);

    let exchange = session.send_chat("  How do I start my day?  ").await.unwrap();

    assert!(!exchange.failed);
    assert_eq!(exchange.reply.text, "Drink a glass of water first.");

    let conversation = session.conversation().await;
    let messages = conversation.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].text, "How do I start my day?");
    assert_eq!(messages[1].role, MessageRole::Assistant);
}

#[tokio::test]
async fn test_prior_turns_are_sent_as_history() {
    let transport = ScriptedTransport::new([text_reply("Hi there!"), text_reply("Try oats.")]);
    let session = session(&transport);

    session.send_chat("Hello").await.unwrap();
    session.send_chat("Breakfast idea?").await.unwrap();

    let body = transport.last_request();
    let contents = body["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[0]["role"], "user");
    assert_eq!(contents[0]["parts"][0]["text"], "Hello");
    assert_eq!(contents[1]["role"], "model");
    assert_eq!(contents[1]["parts"][0]["text"], "Hi there!");
    assert_eq!(contents[2]["parts"][0]["text"], "Breakfast idea?");

    assert_eq!(session.conversation().await.len(), 4);
}

#[tokio::test]
async fn test_gateway_failure_appends_error_sentinel() {
    let transport = ScriptedTransport::without_credential();
    let session = session(&transport);

    let exchange = session.send_chat("Are you there?").await.unwrap();

    assert!(exchange.failed);
    assert_eq!(exchange.reply.text, messages::CHAT_ERROR_SENTINEL);
    let conversation = session.conversation().await;
    assert_eq!(conversation.len(), 2);
    assert_eq!(
        conversation.last().unwrap().text,
        messages::CHAT_ERROR_SENTINEL
    );
}

#[tokio::test]
async fn test_blank_message_leaves_conversation_untouched() {
    let transport = ScriptedTransport::idle();
    let session = session(&transport);

    let error = session.send_chat("   ").await.unwrap_err();

    assert_eq!(
        error,
        AdapterError::validation(messages::CHAT_MESSAGE_REQUIRED)
    );
    assert!(session.conversation().await.is_empty());
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn test_message_while_reply_pending_is_rejected() {
    let release = Arc::new(Notify::new());
    let transport = ScriptedTransport::held([text_reply("Sure!")], Arc::clone(&release));
    let session = Arc::new(session(&transport));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.send_chat("First question").await })
    };
    while transport.call_count() == 0 {
        tokio::task::yield_now().await;
    }

    let error = session.send_chat("Second question").await.unwrap_err();
    assert!(matches!(error, AdapterError::Busy { feature: "chat" }));
    assert!(session.conversation().await.is_empty());

    release.notify_one();
    first.await.unwrap().unwrap();

    let conversation = session.conversation().await;
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.messages()[0].text, "First question");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_message_retried_after_busy_sees_previous_exchange() {
    for _ in 0..100 {
        let release = Arc::new(Notify::new());
        let transport = ScriptedTransport::held(
            [text_reply("Stretch first."), text_reply("Then hydrate.")],
            Arc::clone(&release),
        );
        let session = Arc::new(session(&transport));

        let first = {
            let session = Arc::clone(&session);
            tokio::spawn(async move { session.send_chat("Morning plan?").await })
        };
        while transport.call_count() == 0 {
            tokio::task::yield_now().await;
        }

        let second = {
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                loop {
                    match session.send_chat("And after that?").await {
                        Err(AdapterError::Busy { .. }) => tokio::task::yield_now().await,
                        other => return other,
                    }
                }
            })
        };

        release.notify_one();
        first.await.unwrap().unwrap();
        while transport.call_count() < 2 {
            tokio::task::yield_now().await;
        }
        release.notify_one();
        second.await.unwrap().unwrap();

        let requests = transport.requests();
        let contents = requests[1]["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["parts"][0]["text"], "Morning plan?");
        assert_eq!(contents[1]["parts"][0]["text"], "Stretch first.");
        assert_eq!(contents[2]["parts"][0]["text"], "And after that?");
        assert_eq!(session.conversation().await.len(), 4);
    }
}
