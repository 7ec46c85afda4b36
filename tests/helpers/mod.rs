//! Shared test helpers for integration tests.
//!
//! Tests run against a real PostgreSQL database named by the
//! `NOTEHUB_TEST_DATABASE_URL` environment variable. When the variable
//! is unset the tests are skipped, so the suite stays runnable on
//! machines without a database.

use axum::body::Body;
use axum::Router;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use notehub_core::config::app::ServerConfig;
use notehub_core::config::database::DatabaseConfig;
use notehub_core::config::logging::LoggingConfig;
use notehub_core::config::session::SessionConfig;
use notehub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database
    /// is configured.
    pub async fn new() -> Option<Self> {
        let url = match std::env::var("NOTEHUB_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("NOTEHUB_TEST_DATABASE_URL not set; skipping integration test");
                return None;
            }
        };

        let config = AppConfig {
            server: ServerConfig::default(),
            database: DatabaseConfig {
                url,
                max_connections: 5,
                min_connections: 1,
                connect_timeout_seconds: 5,
                idle_timeout_seconds: 60,
            },
            session: SessionConfig::default(),
            logging: LoggingConfig::default(),
        };

        let db = notehub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        let db_pool = db.into_pool();

        notehub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let router = notehub_api::build_app(config, db_pool.clone());

        Some(Self { router, db_pool })
    }

    /// Register a fresh user with a unique email and return
    /// `(email, token)`. Tests share one database, so every user gets a
    /// random email instead of relying on table cleanup.
    pub async fn register_user(&self, password: &str) -> (String, String) {
        let email = format!("user-{}@test.com", Uuid::new_v4());

        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "name": "Test User",
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Registration failed: {:?}",
            response.body
        );

        let token = response.body["data"]["token"]
            .as_str()
            .expect("No token in register response")
            .to_string();

        (email, token)
    }

    /// Login and return the session token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/auth/login",
                Some(serde_json::json!({
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Create a folder and return its ID
    pub async fn create_folder(&self, token: &str, name: &str, parent_id: Option<&str>) -> String {
        let response = self
            .request(
                "POST",
                "/api/folders",
                Some(serde_json::json!({
                    "name": name,
                    "parent_id": parent_id,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Folder creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in folder response")
            .to_string()
    }

    /// Create a note and return its JSON payload
    pub async fn create_note(
        &self,
        token: &str,
        title: &str,
        is_public: bool,
        folder_id: Option<&str>,
    ) -> Value {
        let response = self
            .request(
                "POST",
                "/api/notes",
                Some(serde_json::json!({
                    "title": title,
                    "content": "body text",
                    "is_public": is_public,
                    "folder_id": folder_id,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Note creation failed: {:?}",
            response.body
        );

        response.body["data"].clone()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
