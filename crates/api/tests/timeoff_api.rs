//! Integration tests for the `/timeoff` resource: creation, validation,
//! terminal resolution, and the resolution notification side-effect.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_test_user, get_auth, login_token, patch_json_auth, post_json_auth,
};
use sqlx::PgPool;

/// Create a pending request via the API and return its JSON.
async fn create_request(pool: &PgPool, token: &str, user_id: i64) -> serde_json::Value {
    let body = serde_json::json!({
        "userId": user_id,
        "startDate": "2030-02-01",
        "endDate": "2030-02-05",
        "type": "vacation",
        "reason": "Family trip"
    });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/timeoff", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// A new request starts pending with no reviewer.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request(pool: PgPool) {
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;

    let json = create_request(&pool, &token, emp.id).await;
    assert_eq!(json["status"], "pending");
    assert_eq!(json["type"], "vacation");
    assert!(json["reviewedBy"].is_null());
    assert!(json["reviewedAt"].is_null());
}

/// Unknown request type and inverted date ranges are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_request_validation(pool: PgPool) {
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;

    let body = serde_json::json!({
        "userId": emp.id,
        "startDate": "2030-02-01",
        "endDate": "2030-02-05",
        "type": "sabbatical"
    });
    let response =
        post_json_auth(common::build_test_app(pool.clone()), "/api/timeoff", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({
        "userId": emp.id,
        "startDate": "2030-02-05",
        "endDate": "2030-02-01",
        "type": "vacation"
    });
    let response =
        post_json_auth(common::build_test_app(pool), "/api/timeoff", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Approval stamps the reviewer and notifies the requester with the
/// resolution text.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_approve_request_notifies_requester(pool: PgPool) {
    let (mgr, mgr_pw) = create_test_user(&pool, "mgr@test.com", "Manager").await;
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let emp_token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;
    let mgr_token = login_token(common::build_test_app(pool.clone()), "mgr@test.com", &mgr_pw).await;

    let request = create_request(&pool, &emp_token, emp.id).await;
    let id = request["id"].as_i64().unwrap();

    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/timeoff/{id}/status"),
        body,
        &mgr_token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "approved");
    assert_eq!(json["reviewedBy"], mgr.id);
    assert!(json["reviewedAt"].is_string());

    let response =
        get_auth(common::build_test_app(pool), "/api/notifications", &emp_token).await;
    let json = body_json(response).await;
    let notifications = json.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["title"], "Time-Off Request Approved");
    assert_eq!(
        notifications[0]["message"],
        "Your time-off request for 2030-02-01 to 2030-02-05 has been approved."
    );
    assert_eq!(notifications[0]["type"], "timeoff");
}

/// A second resolution attempt conflicts; the first outcome stands.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_resolution_is_terminal(pool: PgPool) {
    let (_mgr, mgr_pw) = create_test_user(&pool, "mgr@test.com", "Manager").await;
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let emp_token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;
    let mgr_token = login_token(common::build_test_app(pool.clone()), "mgr@test.com", &mgr_pw).await;

    let request = create_request(&pool, &emp_token, emp.id).await;
    let id = request["id"].as_i64().unwrap();

    let body = serde_json::json!({ "status": "rejected" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/timeoff/{id}/status"),
        body,
        &mgr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/timeoff/{id}/status"),
        body,
        &mgr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/timeoff/{id}"),
        &mgr_token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["status"], "rejected", "first outcome must stand");
}

/// Resolving back to pending, an unknown id, or as an employee all fail.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_resolution_guards(pool: PgPool) {
    let (_mgr, mgr_pw) = create_test_user(&pool, "mgr@test.com", "Manager").await;
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let emp_token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;
    let mgr_token = login_token(common::build_test_app(pool.clone()), "mgr@test.com", &mgr_pw).await;

    let request = create_request(&pool, &emp_token, emp.id).await;
    let id = request["id"].as_i64().unwrap();

    let body = serde_json::json!({ "status": "pending" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        &format!("/api/timeoff/{id}/status"),
        body,
        &mgr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = serde_json::json!({ "status": "approved" });
    let response = patch_json_auth(
        common::build_test_app(pool.clone()),
        "/api/timeoff/9999/status",
        body.clone(),
        &mgr_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json_auth(
        common::build_test_app(pool),
        &format!("/api/timeoff/{id}/status"),
        body,
        &emp_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

/// Listing filters by status and joins a requester summary.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_requests(pool: PgPool) {
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;

    create_request(&pool, &token, emp.id).await;

    let response = get_auth(
        common::build_test_app(pool.clone()),
        "/api/timeoff?status=pending",
        &token,
    )
    .await;
    let json = body_json(response).await;
    let requests = json.as_array().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["user"]["email"], "emp@test.com");

    let response = get_auth(
        common::build_test_app(pool),
        "/api/timeoff?status=approved",
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert!(json.as_array().unwrap().is_empty());
}
