//! Integration tests for the user endpoints.

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use serde_json::{Value, json};

use crate::helpers::{ALICE, MARIA, TestApp};

fn new_user(email: &str) -> Value {
    json!({
        "firstName": "Bob",
        "lastName": "Stone",
        "email": email,
        "password": "secret1",
        "roles": [{"id": 1}]
    })
}

#[tokio::test]
async fn test_create_user() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let response = app
        .request("POST", "/users", Some(new_user("bob@example.com")), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();
    assert_eq!(response.headers[LOCATION], format!("/users/{id}").as_str());
    assert_eq!(response.body["firstName"], "Bob");
    assert_eq!(response.body["roles"], json!([{"id": 1, "authority": "ROLE_OPERATOR"}]));
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("passwordHash").is_none());

    // The new user can log in.
    let login = app
        .token_request("grant_type=password&username=bob@example.com&password=secret1")
        .await;
    assert_eq!(login.status, StatusCode::OK);
    assert_eq!(login.body["userId"], id);
}

#[tokio::test]
async fn test_bob_inserted_twice() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let first = app
        .request("POST", "/users", Some(new_user("bob@example.com")), Some(&token))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .request("POST", "/users", Some(new_user("bob@example.com")), Some(&token))
        .await;
    assert_eq!(second.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(second.body["error"], "validation_failed");
    assert_eq!(second.body["path"], "/users");
    assert_eq!(
        second.body["errors"],
        json!([{"fieldName": "email", "message": "email already exists"}])
    );
}

#[tokio::test]
async fn test_every_invalid_field_is_reported() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let body = json!({
        "firstName": "",
        "lastName": "X",
        "email": ALICE,
        "password": "1",
        "roles": []
    });
    let response = app.request("POST", "/users", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = response.body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["fieldName"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["firstName", "password", "email"]);
}

#[tokio::test]
async fn test_carol_update_scenario() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let carol = app
        .request("POST", "/users", Some(new_user("carol@example.com")), Some(&token))
        .await;
    let carol_id = carol.body["id"].as_i64().unwrap();

    // Keeping one's own email is valid; the payload id is ignored.
    let own = json!({
        "id": 999,
        "firstName": "Carol",
        "lastName": "White",
        "email": "carol@example.com",
        "roles": [{"id": 2}]
    });
    let response = app
        .request("PUT", &format!("/users/{carol_id}"), Some(own), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["id"], carol_id);
    assert_eq!(response.body["firstName"], "Carol");

    // Taking another user's email is not.
    let stolen = json!({
        "firstName": "Carol",
        "lastName": "White",
        "email": ALICE,
        "roles": []
    });
    let response = app
        .request("PUT", &format!("/users/{carol_id}"), Some(stolen), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"][0]["fieldName"], "email");
}

#[tokio::test]
async fn test_delete_user() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let created = app
        .request("POST", "/users", Some(new_user("temp@example.com")), Some(&token))
        .await;
    let id = created.body["id"].as_i64().unwrap();

    let response = app
        .request("DELETE", &format!("/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], format!("Id not found {id}"));

    let response = app
        .request("DELETE", &format!("/users/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let login = app
        .token_request("grant_type=password&username=temp@example.com&password=secret1")
        .await;
    assert_eq!(login.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_role_is_not_found() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let mut body = new_user("dan@example.com");
    body["roles"] = json!([{"id": 77}]);
    let response = app.request("POST", "/users", Some(body), Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_body_gets_error_body() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/users")
        .header(axum::http::header::AUTHORIZATION, format!("Bearer {token}"))
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["status"], 400);
    assert_eq!(response.body["error"], "bad_request");
    assert_eq!(response.body["path"], "/users");
    assert!(response.body["timestamp"].is_string());
    assert!(!response.body["message"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_non_numeric_id_gets_error_body() {
    let app = TestApp::new().await;
    let token = app.login(MARIA).await;

    let response = app.request("GET", "/users/abc", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "bad_request");
    assert_eq!(response.body["path"], "/users/abc");
}
