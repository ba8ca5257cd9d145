// ABOUTME: Tests for the auth service client against a local stub server
// ABOUTME: Covers successful sign-up and login, rejected credentials, and an unreachable service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use axum::{http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use you360::auth::AuthClient;
use you360::errors::ErrorCode;
use you360_core::constants::messages;
use you360_core::models::{LoginRequest, SignupRequest};

async fn signup(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "taken@example.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "message": "User already exists" })),
        );
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "token": "signup-token",
            "user": { "name": body["name"], "email": body["email"] }
        })),
    )
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    match body["password"].as_str() {
        Some("correct-horse") => (
            StatusCode::OK,
            Json(json!({
                "token": "login-token",
                "user": { "name": "Ada", "email": body["email"] }
            })),
        ),
        Some("empty-body") => (StatusCode::UNAUTHORIZED, Json(json!({}))),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        ),
    }
}

/// Start the stub auth service and return its base URL
async fn spawn_auth_service() -> String {
    let app = Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn login_request(password: &str) -> LoginRequest {
    LoginRequest {
        email: "ada@example.com".to_owned(),
        password: password.to_owned(),
    }
}

#[tokio::test]
async fn test_signup_returns_token_and_user() {
    let client = AuthClient::new(spawn_auth_service().await);

    let session = client
        .signup(&SignupRequest {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "correct-horse".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(session.token, "signup-token");
    assert_eq!(session.display_name(), Some("Ada"));
}

#[tokio::test]
async fn test_signup_rejection_surfaces_service_message() {
    let client = AuthClient::new(spawn_auth_service().await);

    let error = client
        .signup(&SignupRequest {
            name: "Ada".to_owned(),
            email: "taken@example.com".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.message, "User already exists");
}

#[tokio::test]
async fn test_login_success() {
    let client = AuthClient::new(spawn_auth_service().await);

    let session = client.login(&login_request("correct-horse")).await.unwrap();

    assert_eq!(session.token, "login-token");
    assert!(!format!("{session:?}").contains("login-token"));
}

#[tokio::test]
async fn test_login_rejection_without_message_uses_fallback() {
    let client = AuthClient::new(spawn_auth_service().await);

    let error = client.login(&login_request("empty-body")).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::AuthInvalid);
    assert_eq!(error.message, messages::AUTH_FALLBACK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let client = AuthClient::new(spawn_auth_service().await);

    let error = client.login(&login_request("wrong")).await.unwrap_err();

    assert_eq!(error.message, "Invalid credentials");
}

#[tokio::test]
async fn test_blank_fields_are_rejected_locally() {
    // Nothing listens here; validation must fail before any request
    let client = AuthClient::new("http://127.0.0.1:9");

    let error = client.login(&login_request("")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert_eq!(error.message, messages::CREDENTIALS_REQUIRED);

    let error = client
        .signup(&SignupRequest {
            name: " ".to_owned(),
            email: "ada@example.com".to_owned(),
            password: "pw".to_owned(),
        })
        .await
        .unwrap_err();
    assert_eq!(error.message, messages::NAME_REQUIRED);
}

#[tokio::test]
async fn test_unreachable_service_is_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = AuthClient::new(format!("http://{addr}"));

    let error = client.login(&login_request("pw")).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}
