use crate::helpers::start_server;

use api_client::{CancellationToken, ClientError, SentinelError};
use common::HttpStatusCode;
use models::fakes::build_fake_household_creation_input;
use models::types::HouseholdUpdateRequestInput;

use std::time::{Duration, Instant};

use serde_json::json;
use wiremock::matchers::{any, method, path};
use wiremock::{Mock, ResponseTemplate};

/// **VALUE**: A bodiless 404 over the wire still classifies as "not found".
///
/// **BUG THIS CATCHES**: Would catch the empty body's decode failure masking the status.
#[tokio::test]
async fn given_unknown_household_when_fetched_then_not_found_sentinel() {
    // GIVEN: A server that 404s with no body
    let (server, client) = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/households/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    // WHEN: Fetching
    let err = client
        .get_household("missing", &CancellationToken::new())
        .await
        .unwrap_err();

    // THEN: Not found, by status alone
    assert!(
        matches!(
            err,
            ClientError::Status {
                sentinel: SentinelError::NotFound,
                ..
            }
        ),
        "got: {err}"
    );
}

#[tokio::test]
async fn given_server_error_body_when_created_then_api_error_with_code() {
    let (server, client) = start_server().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/households"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {"code": "E_DUPLICATE", "message": "household already exists"}
        })))
        .mount(&server)
        .await;

    let err = client
        .create_household(&build_fake_household_creation_input(), &CancellationToken::new())
        .await
        .unwrap_err();

    match &err {
        ClientError::Api {
            status_code, code, ..
        } => {
            assert_eq!(*status_code, HttpStatusCode::BAD_REQUEST);
            assert_eq!(code, "E_DUPLICATE");
        }
        other => panic!("expected API error, got {other}"),
    }
    assert_eq!(err.sentinel(), Some(SentinelError::InvalidInput));
}

#[tokio::test]
async fn given_malformed_success_body_when_fetched_then_decode_error() {
    let (server, client) = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/households/current"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"data\": {\"id\": 4"))
        .mount(&server)
        .await;

    let err = client
        .get_current_household(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }), "got: {err}");
}

#[tokio::test]
async fn given_success_without_data_when_fetched_then_decode_error() {
    let (server, client) = start_server().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/households/current"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"details": {}})))
        .mount(&server)
        .await;

    let err = client
        .get_current_household(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Decode { .. }), "got: {err}");
}

/// **VALUE**: Local validation short-circuits before any request is made.
///
/// **BUG THIS CATCHES**: Would catch an empty ID producing `GET /api/v1/households/`,
/// which the server answers with a list instead of an error.
#[tokio::test]
async fn given_empty_id_or_blank_input_when_called_then_no_request_sent() {
    // GIVEN: A server that must never be hit
    let (server, client) = start_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    let cancel = CancellationToken::new();

    // WHEN: Calling with bad local input
    let empty_id = client.get_household("", &cancel).await.unwrap_err();
    let nil_update = client
        .update_household("hh-1", &HouseholdUpdateRequestInput::default(), &cancel)
        .await
        .unwrap_err();
    let mut invalid = build_fake_household_creation_input();
    invalid.name.clear();
    let invalid = client.create_household(&invalid, &cancel).await.unwrap_err();

    // THEN: Each fails locally with its own variant
    assert!(matches!(empty_id, ClientError::InvalidId { .. }));
    assert!(matches!(nil_update, ClientError::NilInput { .. }));
    assert!(matches!(invalid, ClientError::Validation { .. }));
    assert!(empty_id.is_local() && nil_update.is_local() && invalid.is_local());
}

/// **VALUE**: Cancellation aborts a slow request promptly.
///
/// **WHY THIS MATTERS**: The CLI cancels on Ctrl-C; waiting out a 30 second timeout would
/// make the process look hung.
///
/// **BUG THIS CATCHES**: Would catch the token being checked only before the send.
#[tokio::test]
async fn given_slow_server_when_cancelled_then_returns_cancelled_promptly() {
    // GIVEN: A server that takes ten seconds to answer
    let (server, client) = start_server().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": []}))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    // WHEN: Listing, then cancelling mid-flight
    let started = Instant::now();
    let err = client.get_households(None, &cancel).await.unwrap_err();

    // THEN: Cancelled well before the server would have answered
    assert!(matches!(err, ClientError::Cancelled { .. }), "got: {err}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[tokio::test]
async fn given_already_cancelled_token_when_called_then_cancelled() {
    let (server, client) = start_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.get_households(None, &cancel).await.unwrap_err();

    assert!(matches!(err, ClientError::Cancelled { .. }));
}

#[tokio::test]
async fn given_unreachable_server_when_called_then_transport_error() {
    let client = api_client::ApiClient::new("http://127.0.0.1:9").unwrap();

    let err = client
        .get_current_household(&CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport { .. }), "got: {err}");
}
