//! HTTP-level integration tests for the auth endpoints.
//!
//! Tests cover registration, duplicate email rejection, login, token-gated
//! profile access, and the uniform auth requirement on API routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get, get_auth, login_token, post_json};
use sqlx::PgPool;

/// Successful registration returns 201 with a token and the new user, and
/// never exposes password material.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Ana Field",
        "email": "ana@test.com",
        "password": "super_secret_1"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain token");
    assert_eq!(json["user"]["name"], "Ana Field");
    assert_eq!(json["user"]["email"], "ana@test.com");
    // Role defaults to Employee when omitted.
    assert_eq!(json["user"]["role"], "Employee");
    // Password material must never leave the server.
    assert!(json["user"].get("password").is_none());
    assert!(json["user"].get("passwordHash").is_none());
}

/// Registering the same email twice returns 400 with the DUPLICATE_EMAIL code.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "name": "First",
        "email": "dup@test.com",
        "password": "super_secret_1"
    });
    let response = post_json(app, "/api/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Second",
        "email": "dup@test.com",
        "password": "another_secret"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_EMAIL");
}

/// A too-short password is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Shorty",
        "email": "short@test.com",
        "password": "abc"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

/// An unknown role in registration is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_unknown_role(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({
        "name": "Roleless",
        "email": "roleless@test.com",
        "password": "super_secret_1",
        "role": "Overlord"
    });
    let response = post_json(app, "/api/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Successful login returns 200 with a token and the user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "login@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "login@test.com", "password": password });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["email"], "login@test.com");
}

/// Login with an incorrect password returns 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let (_user, _password) = create_test_user(&pool, "wrongpw@test.com", "Employee").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "wrongpw@test.com", "password": "incorrect" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Login with a nonexistent email returns 401, same as a wrong password.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_nonexistent_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "email": "ghost@test.com", "password": "whatever" });
    let response = post_json(app, "/api/auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// GET /api/auth/me returns the authenticated user's profile.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_me(pool: PgPool) {
    let (user, password) = create_test_user(&pool, "me@test.com", "Manager").await;

    let app = common::build_test_app(pool.clone());
    let token = login_token(app, "me@test.com", &password).await;

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/auth/me", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["role"], "Manager");
}

/// API routes reject missing and malformed tokens with 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_api_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/shifts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/users", "not-a-real-token").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
