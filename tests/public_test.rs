//! Integration tests for the unauthenticated surface.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"].as_str().unwrap(), "ok");
    assert!(response.body["database"].as_bool().unwrap());
}

#[tokio::test]
async fn test_landing_anonymous() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["user"].is_null());
}

#[tokio::test]
async fn test_landing_authenticated() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (email, token) = app.register_user("password123").await;

    let response = app.request("GET", "/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["user"]["email"].as_str().unwrap(),
        email
    );
}

#[tokio::test]
async fn test_landing_bad_token_treated_as_anonymous() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/", None, Some("bogus-token")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["user"].is_null());
}

#[tokio::test]
async fn test_public_note_view() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let (_, token) = app.register_user("password123").await;
    let note = app.create_note(&token, "Announcement", true, None).await;
    let slug = note["slug"].as_str().unwrap();

    // No authentication required
    let response = app.request("GET", &format!("/p/{slug}"), None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body["data"]["title"].as_str().unwrap(),
        "Announcement"
    );
    assert_eq!(response.body["data"]["content"].as_str().unwrap(), "body text");
    assert_eq!(
        response.body["data"]["author"].as_str().unwrap(),
        "Test User"
    );
    // Internal identifiers stay internal
    assert!(response.body["data"].get("id").is_none());
    assert!(response.body["data"].get("owner_id").is_none());
}

#[tokio::test]
async fn test_private_note_not_public() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request("GET", "/p/definitely-not-a-real-slug", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
