//! Integration tests for the token endpoints.

use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use serde_json::json;

use catalog_auth::jwt::JwtDecoder;

use crate::helpers::{ALICE, CLIENT_ID, CLIENT_SECRET, MARIA, PASSWORD, TestApp};

#[tokio::test]
async fn test_alice_token_carries_user_claims() {
    let app = TestApp::new().await;

    let response = app
        .token_request(&format!("grant_type=password&username={ALICE}&password={PASSWORD}"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[CACHE_CONTROL], "no-store");
    assert_eq!(response.body["token_type"], "bearer");
    assert_eq!(response.body["scope"], "read write");
    assert_eq!(response.body["expires_in"], 86400);
    assert_eq!(response.body["userFirstName"], "Alice");
    assert_eq!(response.body["userId"], 1);

    let token = response.body["access_token"].as_str().unwrap();
    let claims = JwtDecoder::new(&app.config.auth)
        .decode_access_token(token)
        .unwrap();
    assert_eq!(claims.sub, ALICE);
    assert_eq!(claims.user_id(), Some(1));
    assert_eq!(claims.user_first_name(), Some("Alice"));
    assert_eq!(claims.authorities, vec!["ROLE_OPERATOR".to_string()]);
    assert_eq!(claims.jti.to_string(), response.body["jti"].as_str().unwrap());
}

#[tokio::test]
async fn test_client_credentials_in_form_body() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/oauth/token")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "grant_type=password&username={MARIA}&password={PASSWORD}\
             &client_id={CLIENT_ID}&client_secret={CLIENT_SECRET}&scope=read"
        )))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["scope"], "read");
    assert_eq!(response.body["userFirstName"], "Maria");
}

#[tokio::test]
async fn test_missing_client_authentication() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/oauth/token")
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "grant_type=password&username={ALICE}&password={PASSWORD}"
        )))
        .unwrap();

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "invalid_client");
    assert_eq!(response.body["path"], "/oauth/token");
}

#[tokio::test]
async fn test_bad_client_secret() {
    let app = TestApp::new().await;
    let response = app
        .token_request_as(
            CLIENT_ID,
            "guess",
            &format!("grant_type=password&username={ALICE}&password={PASSWORD}"),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "invalid_client");
}

#[tokio::test]
async fn test_issuance_failures() {
    let app = TestApp::new().await;
    let cases = [
        (
            format!("grant_type=password&username={ALICE}&password=wrong"),
            "invalid_grant",
        ),
        (
            format!("grant_type=password&username=ghost@example.com&password={PASSWORD}"),
            "invalid_grant",
        ),
        (
            format!("grant_type=client_credentials&username={ALICE}&password={PASSWORD}"),
            "unsupported_grant_type",
        ),
        (
            format!("grant_type=password&username={ALICE}&password={PASSWORD}&scope=admin"),
            "invalid_scope",
        ),
    ];

    for (form, category) in cases {
        let response = app.token_request(&form).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{form}");
        assert_eq!(response.body["error"], category, "{form}");
        assert!(response.body.get("access_token").is_none());
    }
}

#[tokio::test]
async fn test_check_token_returns_claims() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let response = app
        .request(
            "GET",
            &format!("/oauth/check_token?token={token}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["sub"], MARIA);
    assert_eq!(response.body["userId"], 2);
    assert_eq!(response.body["authorities"], json!(["ROLE_OPERATOR", "ROLE_ADMIN"]));
}

#[tokio::test]
async fn test_check_token_requires_authentication() {
    let app = TestApp::new().await;
    let token = app.login(ALICE).await;

    let response = app
        .request("GET", &format!("/oauth/check_token?token={token}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/oauth/check_token?token=garbage", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_form_with_wrong_content_type() {
    let app = TestApp::new().await;
    let mut request = Request::builder()
        .method("POST")
        .uri("/oauth/token")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"grant_type": "password"}).to_string()))
        .unwrap();
    axum_extra::headers::HeaderMapExt::typed_insert(
        request.headers_mut(),
        axum_extra::headers::Authorization::basic(CLIENT_ID, CLIENT_SECRET),
    );

    let response = app.send(request).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "bad_request");
    assert_eq!(response.body["path"], "/oauth/token");
}

#[tokio::test]
async fn test_check_token_without_token_parameter() {
    let app = TestApp::new().await;
    let token = app.login(ALICE).await;

    let response = app.request("GET", "/oauth/check_token", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "bad_request");
    assert_eq!(response.body["path"], "/oauth/check_token");
}
