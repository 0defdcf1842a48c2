use crate::ClientError;
use crate::api_client::decode_response;
use crate::error::sentinel::SentinelError;

use common::HttpStatusCode;
use models::types::Household;

use serde::de::IgnoredAny;

/// **VALUE**: A 404 without a body still reports "not found".
///
/// **WHY THIS MATTERS**: Proxies and load balancers answer 404 with an empty body. An empty
/// body is not JSON, and reporting a decode error would hide the one clear signal we have.
///
/// **BUG THIS CATCHES**: Would catch decode running before status classification.
#[test]
fn given_404_with_empty_body_when_decoded_then_not_found_sentinel() {
    // GIVEN: A bodiless 404
    let status = HttpStatusCode::NOT_FOUND;

    // WHEN: Decoding
    let result = decode_response::<Household>(status, b"");

    // THEN: The status wins
    let err = result.unwrap_err();
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
    assert!(err.is_not_found());
}

#[test]
fn given_500_with_html_body_when_decoded_then_internal_sentinel() {
    let result = decode_response::<Household>(
        HttpStatusCode::INTERNAL_SERVER_ERROR,
        b"<html>upstream exploded</html>",
    );

    let err = result.unwrap_err();
    assert_eq!(err.sentinel(), Some(SentinelError::Internal));
    assert_eq!(err.status_code(), Some(HttpStatusCode(500)));
}

/// **VALUE**: Error bodies on failed responses are surfaced, not replaced by the status.
///
/// **BUG THIS CATCHES**: Would catch the server's `{code, message}` being thrown away in
/// favor of a generic "invalid input".
#[test]
fn given_400_with_error_body_when_decoded_then_envelope_carries_server_error() {
    // GIVEN: A failed response with a typed error and tracing details
    let body = br#"{"error":{"code":"E_VALIDATION","message":"name is required"},"details":{"traceID":"t-1"}}"#;

    // WHEN: Decoding
    let envelope = decode_response::<Household>(HttpStatusCode::BAD_REQUEST, body).unwrap();

    // THEN: The error is there for as_error(), data is not
    let error = envelope.as_error().unwrap();
    assert_eq!(error.to_string(), "E_VALIDATION: name is required");
    assert!(envelope.data.is_none());
    assert_eq!(envelope.details.trace_id, "t-1");
}

#[test]
fn given_error_body_when_mapped_through_envelope_then_api_error_keeps_status() {
    let body = br#"{"error":{"code":"E_FORBIDDEN","message":"not your household"}}"#;
    let envelope = decode_response::<Household>(HttpStatusCode::FORBIDDEN, body).unwrap();

    let err = ClientError::from_envelope(
        HttpStatusCode::FORBIDDEN,
        envelope.into_data().unwrap_err(),
    );

    match &err {
        ClientError::Api {
            status_code,
            code,
            message,
            ..
        } => {
            assert_eq!(*status_code, HttpStatusCode::FORBIDDEN);
            assert_eq!(code, "E_FORBIDDEN");
            assert_eq!(message, "not your household");
        }
        other => panic!("expected API error, got {other}"),
    }
    assert_eq!(err.sentinel(), Some(SentinelError::Unauthorized));
}

#[test]
fn given_malformed_success_body_when_decoded_then_decode_error() {
    let result = decode_response::<Household>(HttpStatusCode::OK, b"{\"data\": [");

    assert!(matches!(result, Err(ClientError::Decode { .. })));
}

#[test]
fn given_success_body_with_embedded_error_when_decoded_then_error_still_wins() {
    let body = br#"{"data":{"id":"x"},"error":{"code":"E","message":"m"}}"#;

    let envelope = decode_response::<IgnoredAny>(HttpStatusCode::OK, body).unwrap();

    assert!(envelope.as_error().is_some());
    assert!(envelope.into_data().is_err());
}

#[test]
fn given_empty_success_body_when_decoded_then_empty_envelope() {
    let envelope = decode_response::<IgnoredAny>(HttpStatusCode(204), b"").unwrap();

    assert!(envelope.as_error().is_none());
    assert!(envelope.data.is_none());
}

#[test]
fn given_unmapped_status_when_decoded_then_decode_or_unexpected() {
    let malformed = decode_response::<Household>(HttpStatusCode(502), b"Bad Gateway");
    let json = decode_response::<Household>(HttpStatusCode(409), b"{}");

    assert!(matches!(malformed, Err(ClientError::Decode { .. })));
    assert!(matches!(
        json,
        Err(ClientError::UnexpectedStatus { status_code, .. }) if status_code == HttpStatusCode(409)
    ));
}

/// **VALUE**: A bodiless response with an unmapped status reports the status.
///
/// **WHY THIS MATTERS**: Gateways answer 502/503/429 with no body at all. An
/// absent body is not a protocol mismatch, so it must not surface as `Decode`.
///
/// **BUG THIS CATCHES**: Would catch the empty body being fed to the JSON
/// decoder and its EOF error winning over the status code.
#[test]
fn given_unmapped_status_with_empty_body_when_decoded_then_unexpected_status() {
    for code in [429, 502, 503] {
        // GIVEN: A bodiless (or whitespace-only) response
        for body in [b"".as_slice(), b" \n".as_slice()] {
            // WHEN
            let result = decode_response::<Household>(HttpStatusCode(code), body);

            // THEN
            assert!(
                matches!(
                    result,
                    Err(ClientError::UnexpectedStatus { status_code, .. }) if status_code == HttpStatusCode(code)
                ),
                "HTTP {code} with a blank body should be UnexpectedStatus"
            );
        }
    }
}
