//! Narrow tracing and logging seams.
//!
//! Spans and log context are side channels only: nothing recorded here
//! changes what a call returns.

use crate::ClientError;

use models::QueryFilter;

use std::fmt;

use log::{debug, error};

/// A unit of traced work. Implementations use interior mutability.
pub trait Span: Send + Sync {
    fn set_attribute(&self, key: &str, value: &str);
    fn record_error(&self, error: &dyn std::error::Error);
    fn end(&self);
}

pub trait Tracer: fmt::Debug + Send + Sync {
    fn start_span(&self, name: &'static str) -> Box<dyn Span>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTracer;

struct NoopSpan;

impl Span for NoopSpan {
    fn set_attribute(&self, _key: &str, _value: &str) {}
    fn record_error(&self, _error: &dyn std::error::Error) {}
    fn end(&self) {}
}

impl Tracer for NoopTracer {
    fn start_span(&self, _name: &'static str) -> Box<dyn Span> {
        Box::new(NoopSpan)
    }
}

/// Key-value pairs rendered into every log line of a call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogContext {
    pairs: Vec<(String, String)>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Attach the filter's values; `None` attaches the default filter.
    pub fn attach_filter(&mut self, filter: Option<&QueryFilter>) {
        let pairs = match filter {
            Some(filter) => filter.log_pairs(),
            None => QueryFilter::default().log_pairs(),
        };
        for (key, value) in pairs {
            self.set(key, value);
        }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (key, value)) in self.pairs.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

/// Log `err` with its context, record it on the span, and hand it back.
pub fn prepare_and_log_error(
    err: ClientError,
    log_context: &LogContext,
    span: &dyn Span,
    description: &str,
) -> ClientError {
    span.record_error(&err);
    span.set_attribute("error.description", description);
    error!("{description}: {err} [{log_context}]");
    err
}

/// Span and log context for one resource call.
pub struct CallContext {
    operation: &'static str,
    log_context: LogContext,
    span: Box<dyn Span>,
}

impl CallContext {
    pub fn start(tracer: &dyn Tracer, log_context: &LogContext, operation: &'static str) -> Self {
        Self {
            operation,
            log_context: log_context.clone().with("operation", operation),
            span: tracer.start_span(operation),
        }
    }

    /// Attach to both the log context and the span.
    pub fn attach(&mut self, key: &str, value: &str) {
        self.log_context.set(key, value);
        self.span.set_attribute(key, value);
    }

    pub fn attach_filter(&mut self, filter: Option<&QueryFilter>) {
        self.log_context.attach_filter(filter);
        for (key, value) in self.log_context.pairs() {
            if key.starts_with("filter.") {
                self.span.set_attribute(key, value);
            }
        }
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn log_context(&self) -> &LogContext {
        &self.log_context
    }

    pub fn span(&self) -> &dyn Span {
        self.span.as_ref()
    }

    /// End the span; a failure is logged once, here.
    pub fn finish<T>(self, result: Result<T, ClientError>, description: &str) -> Result<T, ClientError> {
        let result = match result {
            Ok(value) => {
                debug!("{} succeeded [{}]", self.operation, self.log_context);
                Ok(value)
            }
            Err(err) => Err(prepare_and_log_error(
                err,
                &self.log_context,
                self.span.as_ref(),
                description,
            )),
        };
        self.span.end();
        result
    }
}
