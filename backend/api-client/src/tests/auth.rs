use crate::auth::{
    Authenticator, BearerAuthenticator, CookieAuthenticator, DEFAULT_COOKIE_NAME,
    NoAuthentication,
};
use crate::ClientError;

use common::RedactedSecret;

use reqwest::header::{AUTHORIZATION, COOKIE};
use reqwest::{Method, Request};
use url::Url;

fn blank_request() -> Request {
    Request::new(
        Method::GET,
        Url::parse("https://api.example.com/api/v1/households").unwrap(),
    )
}

#[test]
fn given_cookie_authenticator_when_applied_then_cookie_header_set_and_sensitive() {
    let mut request = blank_request();
    let auth = CookieAuthenticator::with_default_name(RedactedSecret::new("s3ss10n"));

    auth.authenticate(&mut request).unwrap();

    let header = request.headers().get(COOKIE).unwrap();
    assert_eq!(header.to_str().unwrap(), format!("{DEFAULT_COOKIE_NAME}=s3ss10n"));
    assert!(header.is_sensitive());
}

#[test]
fn given_bearer_authenticator_when_applied_then_authorization_header_set() {
    let mut request = blank_request();
    let auth = BearerAuthenticator::new(RedactedSecret::new("tok"));

    auth.authenticate(&mut request).unwrap();

    assert_eq!(request.headers().get(AUTHORIZATION).unwrap(), "Bearer tok");
}

/// **VALUE**: Credentials never show up in Debug output of the authenticator.
///
/// **BUG THIS CATCHES**: Would catch a derive(Debug) on a raw String token leaking into logs.
#[test]
fn given_authenticator_when_debug_printed_then_secret_redacted() {
    let auth = BearerAuthenticator::new(RedactedSecret::new("super-secret-token"));

    let rendered = format!("{auth:?}");

    assert!(!rendered.contains("super-secret-token"));
    assert!(rendered.contains("REDACTED"));
}

#[test]
fn given_secret_with_newline_when_applied_then_transport_error() {
    let mut request = blank_request();
    let auth = BearerAuthenticator::new(RedactedSecret::new("bad\ntoken"));

    let result = auth.authenticate(&mut request);

    assert!(matches!(result, Err(ClientError::Transport { .. })));
    assert!(request.headers().get(AUTHORIZATION).is_none());
}

#[test]
fn given_no_authentication_when_applied_then_headers_untouched() {
    let mut request = blank_request();

    NoAuthentication.authenticate(&mut request).unwrap();

    assert!(request.headers().is_empty());
}
