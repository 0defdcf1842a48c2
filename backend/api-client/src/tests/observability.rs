use crate::ClientError;
use crate::observability::{CallContext, LogContext, Span, Tracer, prepare_and_log_error};

use models::QueryFilter;

use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Recorded {
    attributes: Vec<(String, String)>,
    errors: Vec<String>,
    ended: bool,
}

#[derive(Debug, Default, Clone)]
struct RecordingTracer {
    recorded: Arc<Mutex<Recorded>>,
}

struct RecordingSpan {
    recorded: Arc<Mutex<Recorded>>,
}

impl Span for RecordingSpan {
    fn set_attribute(&self, key: &str, value: &str) {
        self.recorded
            .lock()
            .unwrap()
            .attributes
            .push((key.to_string(), value.to_string()));
    }

    fn record_error(&self, error: &dyn std::error::Error) {
        self.recorded.lock().unwrap().errors.push(error.to_string());
    }

    fn end(&self) {
        self.recorded.lock().unwrap().ended = true;
    }
}

impl Tracer for RecordingTracer {
    fn start_span(&self, _name: &'static str) -> Box<dyn Span> {
        Box::new(RecordingSpan {
            recorded: Arc::clone(&self.recorded),
        })
    }
}

#[test]
fn given_repeated_key_when_set_then_value_replaced_in_place() {
    let mut context = LogContext::new().with("household.id", "a").with("b", "1");

    context.set("household.id", "z");

    assert_eq!(context.get("household.id"), Some("z"));
    assert_eq!(context.to_string(), "household.id=z b=1");
}

#[test]
fn given_no_filter_when_attached_then_default_filter_values_logged() {
    let mut context = LogContext::new();

    context.attach_filter(None);

    assert_eq!(context.get("filter.page"), Some("1"));
    assert_eq!(context.get("filter.limit"), Some("50"));
    assert_eq!(context.get("filter.sortBy"), Some("asc"));
}

#[test]
fn given_error_when_prepared_then_recorded_on_span_and_returned_unchanged() {
    let tracer = RecordingTracer::default();
    let span = tracer.start_span("get_household");

    let err = prepare_and_log_error(
        ClientError::invalid_id("household.id"),
        &LogContext::new(),
        span.as_ref(),
        "getting household",
    );

    assert!(matches!(err, ClientError::InvalidId { .. }));
    let recorded = tracer.recorded.lock().unwrap();
    assert_eq!(recorded.errors.len(), 1);
    assert!(recorded.errors[0].contains("household.id"));
}

/// **VALUE**: A call context mirrors attachments onto its span and closes it on finish.
///
/// **BUG THIS CATCHES**: Would catch spans leaking open on the error path.
#[test]
fn given_call_context_when_finished_with_error_then_span_ended_and_error_recorded() {
    // GIVEN: A call with an ID and a filter attached
    let tracer = RecordingTracer::default();
    let mut call = CallContext::start(&tracer, &LogContext::new(), "get_households");
    call.attach("household.id", "hh-1");
    call.attach_filter(Some(&QueryFilter::default()));

    // WHEN: Finishing with a failure
    let result: Result<(), ClientError> = call.finish(Err(ClientError::cancelled()), "listing");

    // THEN: The error comes back, the span saw everything and is closed
    assert!(matches!(result, Err(ClientError::Cancelled { .. })));
    let recorded = tracer.recorded.lock().unwrap();
    assert!(recorded.ended);
    assert!(
        recorded
            .attributes
            .contains(&("household.id".to_string(), "hh-1".to_string()))
    );
    assert!(
        recorded
            .attributes
            .iter()
            .any(|(key, _)| key == "filter.limit")
    );
    assert_eq!(recorded.errors.len(), 1);
}

#[test]
fn given_call_context_when_finished_ok_then_no_error_recorded() {
    let tracer = RecordingTracer::default();
    let call = CallContext::start(&tracer, &LogContext::new().with("user", "u1"), "op");

    assert_eq!(call.log_context().get("operation"), Some("op"));
    assert_eq!(call.log_context().get("user"), Some("u1"));

    let result = call.finish(Ok::<_, ClientError>(7), "op");

    assert_eq!(result.unwrap(), 7);
    let recorded = tracer.recorded.lock().unwrap();
    assert!(recorded.errors.is_empty());
    assert!(recorded.ended);
}
