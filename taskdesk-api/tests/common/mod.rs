/// Common test utilities for integration tests
///
/// Shared infrastructure for driving the router end-to-end:
/// - test database setup (pool + migrations from `DATABASE_URL`)
/// - request helpers for both API surfaces
/// - unique value generation so tests don't collide on unique columns

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use taskdesk_api::app::{build_router, AppState};
use taskdesk_api::config::Config;
use tower::ServiceExt as _;

/// Test context containing the router and a handle to its database
pub struct TestContext {
    pub db: PgPool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context against the database from `DATABASE_URL`
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config::from_env()?;

        let db = PgPool::connect(&config.database.url).await?;

        // Run migrations (path relative to Cargo.toml, not this file)
        sqlx::migrate!("../migrations").run(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a POST with a JSON body and returns (status, parsed body)
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Sends a GET and returns (status, parsed body)
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body)
            .unwrap_or_else(|_| panic!("Non-JSON response body: {:?}", body));

        (status, json)
    }
}

/// Produces a value unique across the test run, for unique-keyed columns.
pub fn unique(label: &str) -> String {
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);

    format!("{}-{}-{}", label, nanos, n)
}

/// Registers a user through the todo surface and returns its id via login.
pub async fn register_user(ctx: &TestContext, username: &str, password: &str) -> i64 {
    let (status, body) = ctx
        .post_json(
            "/api/todo",
            serde_json::json!({
                "action": "register",
                "username": username,
                "email": format!("{}@example.com", username),
                "password": password,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "register failed: {}", body);

    let (status, body) = ctx
        .post_json(
            "/api/todo",
            serde_json::json!({
                "action": "login",
                "username": username,
                "password": password,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "login failed: {}", body);

    body["user"]["id"].as_i64().unwrap()
}

/// Creates a project through the project surface and returns its id.
pub async fn create_project(ctx: &TestContext, project_name: &str) -> i64 {
    let (status, body) = ctx
        .post_json(
            "/api/projects?action=create_project",
            serde_json::json!({ "project_name": project_name }),
        )
        .await;
    assert_eq!(status, StatusCode::OK, "create_project failed: {}", body);

    body["id"].as_i64().unwrap()
}
