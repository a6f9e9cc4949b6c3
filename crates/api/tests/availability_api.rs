//! Integration tests for the `/availability` resource: upsert semantics and
//! listing filters.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_test_user, get_auth, login_token, put_json_auth};
use sqlx::PgPool;

/// A second write for the same (user, date) replaces the first record.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_replaces(pool: PgPool) {
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;

    let body = serde_json::json!({
        "userId": emp.id,
        "date": "2030-03-01",
        "status": "Available",
        "timeRanges": [{ "start": "09:00", "end": "17:00" }]
    });
    let response =
        put_json_auth(common::build_test_app(pool.clone()), "/api/availability", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = serde_json::json!({
        "userId": emp.id,
        "date": "2030-03-01",
        "status": "Unavailable"
    });
    let response =
        put_json_auth(common::build_test_app(pool.clone()), "/api/availability", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "Unavailable");

    // Only one record exists for the day.
    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/availability?userId={}&date=2030-03-01", emp.id),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["status"], "Unavailable");
    assert!(records[0]["timeRanges"].is_null());
}

/// An unknown availability status is rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_upsert_invalid_status(pool: PgPool) {
    let (emp, emp_pw) = create_test_user(&pool, "emp@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "emp@test.com", &emp_pw).await;

    let body = serde_json::json!({
        "userId": emp.id,
        "date": "2030-03-01",
        "status": "Maybe"
    });
    let response =
        put_json_auth(common::build_test_app(pool), "/api/availability", body, &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// Listing filters by user and is ordered by date.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_by_user(pool: PgPool) {
    let (a, a_pw) = create_test_user(&pool, "a@test.com", "Employee").await;
    let (b, _) = create_test_user(&pool, "b@test.com", "Employee").await;
    let token = login_token(common::build_test_app(pool.clone()), "a@test.com", &a_pw).await;

    for (user_id, date) in [(a.id, "2030-03-02"), (a.id, "2030-03-01"), (b.id, "2030-03-01")] {
        let body = serde_json::json!({ "userId": user_id, "date": date, "status": "Preferred" });
        let response =
            put_json_auth(common::build_test_app(pool.clone()), "/api/availability", body, &token)
                .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get_auth(
        common::build_test_app(pool),
        &format!("/api/availability?userId={}", a.id),
        &token,
    )
    .await;
    let json = body_json(response).await;
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], "2030-03-01");
    assert_eq!(records[1]["date"], "2030-03-02");
}
