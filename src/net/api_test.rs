use super::*;

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::net::types::User;

fn sample_user_json() -> serde_json::Value {
    serde_json::json!({"id": 7, "username": "ada"})
}

// =============================================================================
// headers
// =============================================================================

#[tokio::test]
async fn get_sends_content_type_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let user: User = api.get("/api/auth/user", None).await.unwrap();
    assert_eq!(user.id, 7);
}

#[tokio::test]
async fn token_adds_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .and(header("Authorization", "Token abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let user: User = api.get("/api/auth/user", Some("abc")).await.unwrap();
    assert_eq!(user.username, "ada");
}

#[tokio::test]
async fn no_token_means_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let _: serde_json::Value = api.get("/ping", None).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("Authorization").is_none());
}

// =============================================================================
// bodies
// =============================================================================

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/board/create/"))
        .and(body_json(serde_json::json!({"title": "Sprint"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let _: serde_json::Value = api
        .post("/api/board/create/", &serde_json::json!({"title": "Sprint"}), Some("abc"))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_ignores_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/board/sprint"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    api.delete("/api/board/sprint", Some("abc")).await.unwrap();
}

#[tokio::test]
async fn post_empty_accepts_bodyless_2xx() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    api.post_empty("/api/auth/logout/", Some("abc")).await.unwrap();
}

// =============================================================================
// failures
// =============================================================================

#[tokio::test]
async fn error_status_carries_parsed_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "Invalid token."})),
        )
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let err = api.get::<User>("/api/auth/user", Some("bad")).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, serde_json::json!({"detail": "Invalid token."}));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_body_becomes_json_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/board/list/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let err = api.get::<serde_json::Value>("/api/board/list/", None).await.unwrap_err();
    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, serde_json::Value::String("bad gateway".into()));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/user"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = ApiClient::new(&server.uri()).unwrap();
    let err = api.get::<User>("/api/auth/user", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn transport_failure_has_status_zero() {
    // Nothing is listening on this port.
    let api = ApiClient::new("http://127.0.0.1:1").unwrap();
    let err = api.get::<User>("/api/auth/user", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
    assert_eq!(err.status(), 0);
}
