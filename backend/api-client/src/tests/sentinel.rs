use crate::error::sentinel::{SentinelError, error_from_status_code};

/// **VALUE**: Pins the status-to-sentinel table.
///
/// **WHY THIS MATTERS**: Callers branch on `is_not_found()` to decide between "create" and
/// "report". A drifted mapping turns a missing household into an auth failure.
///
/// **BUG THIS CATCHES**: Would catch 403 being dropped from the unauthorized bucket, or a
/// catch-all arm that classifies every 5xx as internal.
#[test]
fn given_standard_codes_when_classified_then_map_to_fixed_sentinels() {
    let cases = [
        (404, Some(SentinelError::NotFound)),
        (400, Some(SentinelError::InvalidInput)),
        (401, Some(SentinelError::Unauthorized)),
        (403, Some(SentinelError::Unauthorized)),
        (500, Some(SentinelError::Internal)),
    ];

    for (code, expected) in cases {
        assert_eq!(error_from_status_code(code), expected, "status {code}");
    }
}

#[test]
fn given_other_codes_when_classified_then_none() {
    for code in [200, 201, 204, 302, 409, 418, 429, 502, 503] {
        assert_eq!(error_from_status_code(code), None, "status {code}");
    }
}

#[test]
fn given_sentinel_when_displayed_then_stable_text() {
    assert_eq!(SentinelError::NotFound.to_string(), "not found");
    assert_eq!(SentinelError::Internal.to_string(), "internal server error");
}
