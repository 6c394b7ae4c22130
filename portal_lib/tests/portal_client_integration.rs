use chrono::Utc;
use portal_lib::portal_api::{ApiConfig, Error};
use portal_lib::{CancelToken, PortalClient, PortalError, Session, SessionStore};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_in(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("session.json"))
}

fn stored_session(token: &str) -> Session {
    Session {
        token: token.to_string(),
        user_id: Some("T-42".to_string()),
        role: None,
        issued_at: Utc::now(),
        expires_at: None,
    }
}

#[tokio::test]
async fn stored_session_becomes_bearer_header() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&stored_session("saved-token")).unwrap();

    Mock::given(method("GET"))
        .and(path("/teacher/T-42"))
        .and(header("authorization", "Bearer saved-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": "T-42" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store,
        CancelToken::new(),
    )
    .unwrap();
    assert!(client.is_authenticated());
    let resp = client.teacher(" T-42 ").await.unwrap();
    assert_eq!(resp["id"], "T-42");
}

#[tokio::test]
async fn login_persists_session_and_authenticates_later_calls() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "new-token", "userId": "S-9", "role": "student", "expiresIn": 3600
        })))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/student/S-9/placements"))
        .and(header("authorization", "Bearer new-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();
    assert!(!client.is_authenticated());

    let session = client.login("asha", "pw").await.unwrap();
    assert_eq!(session.token, "new-token");
    assert!(session.expires_at.is_some());
    assert!(client.is_authenticated());
    assert_eq!(client.session().unwrap(), Some(session));

    client.placements("S-9").await.unwrap();
}

#[tokio::test]
async fn failed_login_stores_nothing() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "message": "Bad credentials" })),
        )
        .mount(&mock_server)
        .await;

    let mut client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();
    let err = client.login("asha", "wrong").await.unwrap_err();
    assert!(matches!(
        err,
        PortalError::Api(Error::HttpStatus { status: 401, .. })
    ));
    assert_eq!(client.session().unwrap(), None);
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn logout_clears_session() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&stored_session("tok")).unwrap();

    let mut client = PortalClient::with_store(
        ApiConfig::single("http://127.0.0.1:9"),
        store,
        CancelToken::new(),
    )
    .unwrap();
    assert!(client.is_authenticated());
    assert!(client.logout().unwrap());
    assert!(!client.is_authenticated());
    assert!(!client.logout().unwrap());
}

#[tokio::test]
async fn invalid_ids_never_reach_the_network() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    let client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();

    assert!(matches!(
        client.teacher("../admin").await,
        Err(PortalError::InvalidInput(_))
    ));
    assert!(matches!(
        client.academic_calendar(12).await,
        Err(PortalError::InvalidInput(_))
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn api_failures_normalize_for_display() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/student/S-1/feedback-forms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{ "message": "" }]
        })))
        .mount(&mock_server)
        .await;

    let client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();
    let err = client.feedback_forms("S-1").await.unwrap_err();
    assert_eq!(err.user_message(), "Server returned an error.");
}

#[tokio::test]
async fn cancelled_token_stops_calls() {
    let dir = tempfile::tempdir().unwrap();
    let token = CancelToken::new();
    let client = PortalClient::with_store(
        ApiConfig::single("http://127.0.0.1:9"),
        store_in(&dir),
        token.clone(),
    )
    .unwrap();
    token.cancel();
    assert!(matches!(
        client.program_allocations().await,
        Err(PortalError::Api(Error::Cancelled))
    ));
}

#[tokio::test]
async fn unsendable_login_token_is_not_stored() {
    let mock_server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "abc\n123"
        })))
        .mount(&mock_server)
        .await;

    let mut client = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();
    let err = client.login("asha", "pw").await.unwrap_err();
    assert!(matches!(err, PortalError::Api(Error::InvalidHeader(_))));
    assert_eq!(client.session().unwrap(), None);
    assert!(!client.is_authenticated());

    let mut fresh = PortalClient::with_store(
        ApiConfig::single(&mock_server.uri()),
        store_in(&dir),
        CancelToken::new(),
    )
    .unwrap();
    assert!(!fresh.logout().unwrap());
}

#[tokio::test]
async fn stored_unsendable_token_falls_back_to_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    store.save(&stored_session("abc\n123")).unwrap();

    let mut client = PortalClient::with_store(
        ApiConfig::single("http://127.0.0.1:9"),
        store,
        CancelToken::new(),
    )
    .unwrap();
    assert!(!client.is_authenticated());
    assert!(client.logout().unwrap());
    assert_eq!(client.session().unwrap(), None);
}
