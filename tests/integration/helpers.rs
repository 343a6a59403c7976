//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, Request, StatusCode};
use axum_extra::headers::{Authorization, HeaderMapExt};
use serde_json::Value;
use tower::ServiceExt;

use catalog_core::config::{AppConfig, RoleSeed, UserSeed};

/// Secret used to sign tokens in tests.
pub const TEST_SECRET: &str = "integration-test-secret";
/// Registered client.
pub const CLIENT_ID: &str = "catalog-app";
/// Registered client secret.
pub const CLIENT_SECRET: &str = "catalog-secret";
/// Password shared by every seeded user.
pub const PASSWORD: &str = "123456";
/// Seeded operator (id 1).
pub const ALICE: &str = "alice@example.com";
/// Seeded operator and admin (id 2).
pub const MARIA: &str = "maria@example.com";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: AppConfig,
}

/// A collected response.
pub struct TestResponse {
    /// Status code.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// JSON body, `Null` when empty or not JSON.
    pub body: Value,
}

impl TestApp {
    /// Create a new test application with two roles and two users.
    pub async fn new() -> Self {
        let config = Self::config();
        let state = catalog_api::build_state(config.clone())
            .await
            .expect("Failed to build application state");
        let router = catalog_api::build_app(state, &config.server.cors);
        Self { router, config }
    }

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();
        config.seed.roles = vec![
            RoleSeed { id: 1, authority: "ROLE_OPERATOR".into() },
            RoleSeed { id: 2, authority: "ROLE_ADMIN".into() },
        ];
        config.seed.users = vec![
            UserSeed {
                first_name: "Alice".into(),
                last_name: "Brown".into(),
                email: ALICE.into(),
                password: PASSWORD.into(),
                roles: vec![1],
            },
            UserSeed {
                first_name: "Maria".into(),
                last_name: "Green".into(),
                email: MARIA.into(),
                password: PASSWORD.into(),
                roles: vec![1, 2],
            },
        ];
        config
    }

    /// Make a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        self.send(builder.body(body).unwrap()).await
    }

    /// Post a form to the token endpoint with HTTP Basic client credentials.
    pub async fn token_request(&self, form: &str) -> TestResponse {
        self.token_request_as(CLIENT_ID, CLIENT_SECRET, form).await
    }

    /// Post a form to the token endpoint as the given client.
    pub async fn token_request_as(&self, client_id: &str, secret: &str, form: &str) -> TestResponse {
        let mut request = Request::builder()
            .method("POST")
            .uri("/oauth/token")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();
        request
            .headers_mut()
            .typed_insert(Authorization::basic(client_id, secret));
        self.send(request).await
    }

    /// Obtain an access token for a seeded user.
    pub async fn login(&self, username: &str) -> String {
        let response = self
            .token_request(&format!(
                "grant_type=password&username={username}&password={PASSWORD}"
            ))
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["access_token"].as_str().unwrap().to_string()
    }

    /// Send a raw request through the router.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        TestResponse { status, headers, body }
    }
}
