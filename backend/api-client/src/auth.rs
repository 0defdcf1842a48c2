//! Credentials attached to outgoing requests.

use crate::ClientError;

use common::{ErrorLocation, RedactedSecret};

use std::fmt::Debug;
use std::panic::Location;

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, COOKIE, HeaderName, HeaderValue};

pub const DEFAULT_COOKIE_NAME: &str = "mealplan_api_cookie";

/// Attaches credentials to a built request.
///
/// A failure surfaces as a transport error; nothing is sent.
pub trait Authenticator: Debug + Send + Sync {
    fn authenticate(&self, request: &mut Request) -> Result<(), ClientError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuthentication;

impl Authenticator for NoAuthentication {
    fn authenticate(&self, _request: &mut Request) -> Result<(), ClientError> {
        Ok(())
    }
}

/// Session cookie, as handed out by the login endpoint.
#[derive(Debug, Clone)]
pub struct CookieAuthenticator {
    name: String,
    value: RedactedSecret,
}

impl CookieAuthenticator {
    pub fn new(name: impl Into<String>, value: RedactedSecret) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Cookie under the default session cookie name.
    pub fn with_default_name(value: RedactedSecret) -> Self {
        Self::new(DEFAULT_COOKIE_NAME, value)
    }
}

impl Authenticator for CookieAuthenticator {
    fn authenticate(&self, request: &mut Request) -> Result<(), ClientError> {
        let header = format!("{}={}", self.name, self.value.expose());
        insert_sensitive(request, COOKIE, &header)
    }
}

/// OAuth2 access token sent as `Authorization: Bearer`.
#[derive(Debug, Clone)]
pub struct BearerAuthenticator {
    token: RedactedSecret,
}

impl BearerAuthenticator {
    pub fn new(token: RedactedSecret) -> Self {
        Self { token }
    }
}

impl Authenticator for BearerAuthenticator {
    fn authenticate(&self, request: &mut Request) -> Result<(), ClientError> {
        let header = format!("Bearer {}", self.token.expose());
        insert_sensitive(request, AUTHORIZATION, &header)
    }
}

fn insert_sensitive(
    request: &mut Request,
    name: HeaderName,
    value: &str,
) -> Result<(), ClientError> {
    let mut value = HeaderValue::from_str(value).map_err(|_| ClientError::Transport {
        message: format!("credential for {name} is not a valid header value"),
        is_timeout: false,
        is_connection: false,
        location: ErrorLocation::from(Location::caller()),
    })?;
    value.set_sensitive(true);

    request.headers_mut().insert(name, value);
    Ok(())
}
