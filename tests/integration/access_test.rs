//! Integration tests for request authorization.

use axum::http::StatusCode;
use chrono::Utc;
use serde_json::Map;
use uuid::Uuid;

use catalog_auth::jwt::{Claims, JwtEncoder};

use crate::helpers::{ALICE, MARIA, TestApp};

fn operator_claims(exp_offset: i64) -> Claims {
    let now = Utc::now().timestamp();
    Claims {
        sub: ALICE.into(),
        iss: "catalog".into(),
        iat: now,
        exp: now + exp_offset,
        jti: Uuid::new_v4(),
        client_id: "catalog-app".into(),
        scope: vec!["read".into(), "write".into()],
        authorities: vec!["ROLE_OPERATOR".into()],
        extra: Map::new(),
    }
}

#[tokio::test]
async fn test_health_is_ignored_by_policy() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/actuator/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "UP");
}

#[tokio::test]
async fn test_alice_scenario() {
    let app = TestApp::new().await;
    let token = app.login(ALICE).await;

    // Allowed requests reach routing; the catalog routes live elsewhere.
    let read = app.request("GET", "/products/1", None, Some(&token)).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let write = app.request("POST", "/products", None, Some(&token)).await;
    assert_eq!(write.status, StatusCode::NOT_FOUND);

    let users = app.request("GET", "/users/5", None, Some(&token)).await;
    assert_eq!(users.status, StatusCode::FORBIDDEN);
    assert_eq!(users.body["error"], "access_denied");
    assert_eq!(users.body["status"], 403);
    assert_eq!(users.body["path"], "/users/5");
}

#[tokio::test]
async fn test_anonymous_reads_catalog_but_cannot_write() {
    let app = TestApp::new().await;

    let read = app.request("GET", "/categories/3", None, None).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);

    let write = app.request("POST", "/products", None, None).await;
    assert_eq!(write.status, StatusCode::UNAUTHORIZED);
    assert_eq!(write.body["error"], "unauthorized");
    assert_eq!(write.body["path"], "/products");
}

#[tokio::test]
async fn test_admin_reaches_users() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let response = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unlisted_paths_require_authentication() {
    let app = TestApp::new().await;

    let anonymous = app.request("GET", "/orders/1", None, None).await;
    assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

    let token = app.login(ALICE).await;
    let authenticated = app.request("GET", "/orders/1", None, Some(&token)).await;
    assert_eq!(authenticated.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expired_token_is_anonymous() {
    let app = TestApp::new().await;
    let expired = JwtEncoder::new(&app.config.auth)
        .encode(&operator_claims(-3600))
        .unwrap();

    let write = app.request("POST", "/products", None, Some(&expired)).await;
    assert_eq!(write.status, StatusCode::UNAUTHORIZED);

    let read = app.request("GET", "/products/1", None, Some(&expired)).await;
    assert_eq!(read.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tampered_token_grants_nothing() {
    let app = TestApp::new().await;
    let token = app.login(ALICE).await;

    // Re-sign an escalated payload with a foreign key and splice it in.
    let mut forged_auth = app.config.auth.clone();
    forged_auth.jwt_secret = "attacker".into();
    let escalated = JwtEncoder::new(&forged_auth)
        .encode(&Claims {
            authorities: vec!["ROLE_ADMIN".into()],
            ..operator_claims(3600)
        })
        .unwrap();

    let genuine: Vec<&str> = token.split('.').collect();
    let forged: Vec<&str> = escalated.split('.').collect();

    for candidate in [
        escalated.clone(),
        format!("{}.{}.{}", genuine[0], forged[1], genuine[2]),
        format!("{}.{}.", genuine[0], forged[1]),
    ] {
        let response = app.request("GET", "/users", None, Some(&candidate)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
}
