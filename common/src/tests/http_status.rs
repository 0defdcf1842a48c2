use crate::HttpStatusCode;

#[test]
fn given_status_ranges_when_classified_then_buckets_are_disjoint() {
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(204).is_error());

    assert!(HttpStatusCode::NOT_FOUND.is_client_error());
    assert!(HttpStatusCode::NOT_FOUND.is_error());
    assert!(!HttpStatusCode::NOT_FOUND.is_server_error());

    assert!(HttpStatusCode(503).is_server_error());
    assert!(!HttpStatusCode(503).is_client_error());

    assert!(!HttpStatusCode(302).is_success());
    assert!(!HttpStatusCode(302).is_error());
}

#[test]
fn given_raw_code_when_converted_then_displays_number() {
    let status = HttpStatusCode::from(418);

    assert_eq!(status.as_u16(), 418);
    assert_eq!(status.to_string(), "418");
}
