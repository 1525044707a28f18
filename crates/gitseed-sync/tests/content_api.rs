use std::time::Duration;

use chrono::{TimeZone, Utc};
use gitseed_core::{CommitMeta, FileDescriptor, Identity};
use gitseed_sync::{ApiConfig, ContentClient, ContentWriter, RetryPolicy, SyncError, WriteOutcome};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fast_retry() -> RetryPolicy {
    RetryPolicy {
        backoff: Duration::from_millis(1),
        ..RetryPolicy::default()
    }
}

fn client_for(server: &MockServer) -> ContentClient {
    let config = ApiConfig::new("secret-token")
        .with_base_url(server.uri())
        .with_retry(fast_retry());
    ContentClient::new(config).unwrap()
}

fn meta() -> CommitMeta {
    CommitMeta {
        message: "Add main.py".into(),
        author: Identity {
            name: "Ada Lovelace".into(),
            email: "ada.lovelace@example.org".into(),
        },
        timestamp: Utc.with_ymd_and_hms(2023, 6, 1, 12, 0, 0).unwrap(),
    }
}

#[tokio::test]
async fn create_sends_auth_and_commit_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/acme/django-admin-tool/contents/app/main.py"))
        .and(header("authorization", "token secret-token"))
        .and(header("accept", "application/vnd.github.v3+json"))
        .and(body_partial_json(json!({
            "message": "Add main.py",
            "content": "cHJpbnQoMSkK",
            "committer": {
                "name": "Ada Lovelace",
                "email": "ada.lovelace@example.org",
                "date": "2023-06-01T12:00:00Z"
            },
            "author": { "name": "Ada Lovelace", "email": "ada.lovelace@example.org" }
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("app/main.py", "print(1)\n");
    let outcome = client_for(&server)
        .create_file("acme", "django-admin-tool", &file, &meta())
        .await
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Created);
}

#[tokio::test]
async fn conflict_is_a_skip_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "Invalid request.\n\n\"sha\" wasn't supplied."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("README.md", "# demo\n");
    let outcome = client_for(&server)
        .create_file("acme", "demo", &file, &meta())
        .await
        .unwrap();
    assert_eq!(outcome, WriteOutcome::AlreadyExists);
}

#[tokio::test]
async fn server_errors_are_retried_then_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .with_priority(1)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .with_priority(2)
        .expect(1)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("LICENSE", "MIT");
    let outcome = client_for(&server)
        .create_file("acme", "demo", &file, &meta())
        .await
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Created);
}

#[tokio::test]
async fn persistent_server_error_surfaces_after_retries() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(502).set_body_string("x".repeat(500)))
        .expect(4)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("LICENSE", "MIT");
    let err = client_for(&server)
        .create_file("acme", "demo", &file, &meta())
        .await
        .unwrap_err();
    match err {
        SyncError::Server { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body.len(), 100);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("a.txt", "a");
    let err = client_for(&server)
        .create_file("acme", "missing", &file, &meta())
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::Server { status: 404, .. }));
    assert!(!err.is_fatal());
}

#[tokio::test]
async fn bad_token_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).authenticated_login().await.unwrap_err();
    assert!(matches!(err, SyncError::Unauthorized { status: 401, .. }));
    assert!(err.is_fatal());
}

#[tokio::test]
async fn login_and_org_checks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "octo" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "login": "acme" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/orgs/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert_eq!(client.authenticated_login().await.unwrap(), "octo");
    assert!(client.org_accessible("acme").await.unwrap());
    assert!(!client.org_accessible("ghost").await.unwrap());
}

#[tokio::test]
async fn ok_response_is_an_update() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/acme/demo/contents/CHANGELOG.md"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": { "path": "CHANGELOG.md" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let file = FileDescriptor::text("CHANGELOG.md", "# Changelog\n");
    let outcome = client_for(&server)
        .create_file("acme", "demo", &file, &meta())
        .await
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Updated);
}

#[tokio::test]
async fn timed_out_request_is_retried() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(2)))
        .up_to_n_times(1)
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .with_priority(2)
        .expect(1)
        .mount(&server)
        .await;

    let mut config = ApiConfig::new("secret-token")
        .with_base_url(server.uri())
        .with_retry(fast_retry());
    config.timeout = Duration::from_millis(200);
    let client = ContentClient::new(config).unwrap();

    let file = FileDescriptor::text("src/main.rs", "fn main() {}\n");
    let outcome = client
        .create_file("acme", "demo", &file, &meta())
        .await
        .unwrap();
    assert_eq!(outcome, WriteOutcome::Created);
}
