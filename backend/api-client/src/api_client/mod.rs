mod households;
mod meal_plan_events;
mod meal_plan_options;
mod recipe_step_completion_conditions;
mod valid_ingredient_state_ingredients;
mod valid_ingredients;

use crate::auth::{Authenticator, NoAuthentication};
use crate::error::sentinel::error_from_status_code;
use crate::observability::{CallContext, LogContext, NoopTracer, Tracer};
use crate::{API_PATH_PREFIX, ClientError, REQUEST_ID_HEADER, USER_AGENT};

use common::{ErrorLocation, HttpStatusCode};
use models::{ApiResponse, QueryFilter, QueryFilteredResult, QueryParams};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, Request};
use serde::Serialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use tokio_util::sync::CancellationToken;
use url::Url;
use uuid::Uuid;

pub const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

const REQUEST_ID_LOG_KEY: &str = "request_id";

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Url,
    client: Client,
    authenticator: Arc<dyn Authenticator>,
    tracer: Arc<dyn Tracer>,
    log_context: LogContext,
}

impl ApiClient {
    pub fn new(base_url_str: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url_str, DEFAULT_TIMEOUT_DURATION)
    }

    pub fn with_timeout(base_url_str: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url_str)?;
        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::UrlParse {
                message: format!("{base_url} is not an http(s) base URL"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            base_url,
            client,
            authenticator: Arc::new(NoAuthentication),
            tracer: Arc::new(NoopTracer),
            log_context: LogContext::new(),
        })
    }

    pub fn with_authenticator(mut self, authenticator: impl Authenticator + 'static) -> Self {
        self.authenticator = Arc::new(authenticator);
        self
    }

    pub fn with_tracer(mut self, tracer: Arc<dyn Tracer>) -> Self {
        self.tracer = tracer;
        self
    }

    /// Pairs included in every log line this client writes.
    pub fn with_log_context(mut self, log_context: LogContext) -> Self {
        self.log_context = log_context;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/api/v1/{segments...}?{query}`. Segments are percent-encoded.
    pub fn build_url(
        &self,
        segments: &[&str],
        query: Option<&QueryParams>,
    ) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| ClientError::UrlParse {
                message: format!("{} cannot be a base URL", self.base_url),
                location: ErrorLocation::from(Location::caller()),
            })?
            .pop_if_empty()
            .extend(API_PATH_PREFIX)
            .extend(segments);

        match query.filter(|query| !query.is_empty()) {
            Some(query) => url.set_query(Some(&query.encode())),
            None => url.set_query(None),
        }

        Ok(url)
    }

    pub fn build_request(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&QueryParams>,
    ) -> Result<Request, ClientError> {
        let url = self.build_url(segments, query)?;
        Ok(self.client.request(method, url).build()?)
    }

    pub fn build_json_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<Request, ClientError> {
        let url = self.build_url(segments, None)?;
        Ok(self.client.request(method, url).json(body).build()?)
    }

    fn start_call(&self, operation: &'static str) -> CallContext {
        CallContext::start(self.tracer.as_ref(), &self.log_context, operation)
    }

    /// Send `request` and decode its envelope.
    ///
    /// Cancelling `cancel` drops the in-flight request and returns
    /// [`ClientError::Cancelled`].
    async fn fetch<T: DeserializeOwned>(
        &self,
        mut request: Request,
        call: &mut CallContext,
        cancel: &CancellationToken,
    ) -> Result<(HttpStatusCode, ApiResponse<T>), ClientError> {
        let request_id = Uuid::new_v4().to_string();
        call.attach(REQUEST_ID_LOG_KEY, &request_id);

        let header = HeaderValue::from_str(&request_id).map_err(|e| ClientError::RequestBuild {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;
        request
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), header);

        self.authenticator.authenticate(&mut request)?;

        debug!(
            "{} {} [{}]",
            request.method(),
            request.url(),
            call.log_context()
        );

        let response = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ClientError::cancelled()),
            response = self.client.execute(request) => response?,
        };

        let status = HttpStatusCode(response.status().as_u16());

        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(ClientError::cancelled()),
            body = response.bytes() => body?,
        };

        debug!(
            "{} answered HTTP {} with {} bytes [{}]",
            call.operation(),
            status,
            body.len(),
            call.log_context()
        );

        let envelope = decode_response(status, &body)?;
        Ok((status, envelope))
    }

    async fn fetch_data<T: DeserializeOwned>(
        &self,
        request: Request,
        call: &mut CallContext,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        let (status, envelope) = self.fetch::<T>(request, call, cancel).await?;
        envelope
            .into_data()
            .map_err(|e| ClientError::from_envelope(status, e))
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        request: Request,
        filter: Option<&QueryFilter>,
        call: &mut CallContext,
        cancel: &CancellationToken,
    ) -> Result<QueryFilteredResult<T>, ClientError> {
        let (status, envelope) = self.fetch::<Vec<T>>(request, call, cancel).await?;
        envelope
            .into_list(filter)
            .map_err(|e| ClientError::from_envelope(status, e))
    }

    /// For calls whose payload is irrelevant; only the error is checked.
    async fn fetch_ack(
        &self,
        request: Request,
        call: &mut CallContext,
        cancel: &CancellationToken,
    ) -> Result<(), ClientError> {
        let (status, envelope) = self.fetch::<IgnoredAny>(request, call, cancel).await?;
        match envelope.as_error() {
            Some(error) => Err(ClientError::api(status, error)),
            None => Ok(()),
        }
    }
}

/// Decode a response body into its envelope.
///
/// - 2xx: the body must be an envelope; an empty body is an empty envelope.
/// - non-2xx carrying `{error: ...}`: the envelope is returned with only
///   its error, so [`ApiResponse::as_error`] surfaces the server's message.
/// - non-2xx without a usable error: a classified status wins over any
///   decode failure; an unclassified one is a decode error only if a body
///   is present and malformed, and an unexpected status otherwise.
#[track_caller]
pub fn decode_response<T: DeserializeOwned>(
    status: HttpStatusCode,
    body: &[u8],
) -> Result<ApiResponse<T>, ClientError> {
    let blank = body.iter().all(u8::is_ascii_whitespace);
    let body = if blank && status.is_success() {
        b"{}".as_slice()
    } else {
        body
    };

    if status.is_success() {
        return serde_json::from_slice(body).map_err(|e| ClientError::decode(status, e.to_string()));
    }

    let decoded = serde_json::from_slice::<ApiResponse<IgnoredAny>>(body);
    if let Ok(ApiResponse {
        error: Some(error),
        details,
        ..
    }) = decoded
    {
        let mut envelope = ApiResponse::with_error(error);
        envelope.details = details;
        return Ok(envelope);
    }

    if let Some(sentinel) = error_from_status_code(status.as_u16()) {
        return Err(ClientError::Status {
            status_code: status,
            sentinel,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    match decoded {
        Err(e) if !blank => Err(ClientError::decode(status, e.to_string())),
        _ => Err(ClientError::UnexpectedStatus {
            status_code: status,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}

/// Recover the filter a request was built with, as a server would read it.
pub fn extract_query_filter_from_request(request: &Request) -> QueryFilter {
    QueryFilter::extract_from_url(request.url())
}

/// Local check run before anything touches the network.
#[track_caller]
fn require_id(name: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::invalid_id(name));
    }
    Ok(())
}
