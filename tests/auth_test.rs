//! Integration tests for registration and the session lifecycle.

mod helpers;

use http::StatusCode;
use uuid::Uuid;

#[tokio::test]
async fn test_register_and_me() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (email, token) = app.register_user("password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"].as_str().unwrap(), email);
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_normalizes_email() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let email = format!("  Mixed-{}@Test.COM ", Uuid::new_v4());

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Case Tester",
                "email": email.trim(),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["user"]["email"].as_str().unwrap(),
        email.trim().to_lowercase()
    );

    // Login works with any casing of the same address
    let token = app.login(&email.to_uppercase(), "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (email, _) = app.register_user("password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "Second User",
                "email": email,
                "password": "otherpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_missing_fields() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "name": "",
                "email": format!("blank-{}@test.com", Uuid::new_v4()),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (email, _) = app.register_user("password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": email,
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": format!("nobody-{}@test.com", Uuid::new_v4()),
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_garbage_token() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_invalidates_token() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, token) = app.register_user("password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_slides_forward() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, token) = app.register_user("password123").await;

    // Age the session artificially, then confirm a request both succeeds
    // and pushes the expiration back out.
    let hash = notehub_auth::session::token::hash_token(&token);
    sqlx::query("UPDATE sessions SET expires_at = NOW() + INTERVAL '1 day' WHERE token_hash = $1")
        .bind(&hash)
        .execute(&app.db_pool)
        .await
        .expect("Failed to age session");

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let days: f64 = sqlx::query_scalar(
        "SELECT (EXTRACT(EPOCH FROM (expires_at - NOW())) / 86400.0)::float8 FROM sessions WHERE token_hash = $1",
    )
    .fetch_one(&app.db_pool)
    .await
    .expect("Session row missing");

    assert!(days > 29.0, "expected ~30 days remaining, got {days}");
}

#[tokio::test]
async fn test_expired_session_rejected() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, token) = app.register_user("password123").await;

    let hash = notehub_auth::session::token::hash_token(&token);
    sqlx::query("UPDATE sessions SET expires_at = NOW() - INTERVAL '1 minute' WHERE token_hash = $1")
        .bind(&hash)
        .execute(&app.db_pool)
        .await
        .expect("Failed to expire session");

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The expired row is deleted on sight
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions WHERE token_hash = $1")
        .bind(&hash)
        .fetch_one(&app.db_pool)
        .await
        .expect("Count query failed");
    assert_eq!(count, 0);
}
