//! W3C `traceparent` extraction for inbound requests.

use opentelemetry::{
    Context,
    propagation::{Extractor, TextMapPropagator as _},
    trace::TraceContextExt as _,
};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use salvo::http::{HeaderMap, HeaderName};

/// The caller's span context, if the request carries a valid `traceparent`.
pub(super) fn extract_parent_context(headers: &HeaderMap) -> Option<Context> {
    // Extract onto an empty context so a request without trace headers never
    // picks up the span that happens to be active in this task.
    let context =
        TraceContextPropagator::new().extract_with_context(&Context::new(), &RequestHeaders(headers));

    context.span().span_context().is_valid().then_some(context)
}

#[derive(Debug)]
struct RequestHeaders<'a>(&'a HeaderMap);

impl Extractor for RequestHeaders<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::HeaderValue;

    use super::*;

    const TRACEPARENT: &str = "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01";

    fn headers(traceparent: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("traceparent", HeaderValue::from_static(traceparent));
        headers
    }

    #[test]
    fn valid_traceparent_becomes_remote_parent() {
        let context = extract_parent_context(&headers(TRACEPARENT));

        let trace_id = context
            .as_ref()
            .map(|context| context.span().span_context().trace_id().to_string());

        assert_eq!(
            trace_id.as_deref(),
            Some("4bf92f3577b34da6a3ce929d0e0e4736")
        );
        assert!(
            context.is_some_and(|context| context.span().span_context().is_remote()),
            "expected a remote span context"
        );
    }

    #[test]
    fn missing_traceparent_yields_none() {
        assert!(extract_parent_context(&HeaderMap::new()).is_none());
    }

    #[test]
    fn malformed_traceparent_yields_none() {
        assert!(extract_parent_context(&headers("00-not-a-trace-01")).is_none());
        assert!(
            extract_parent_context(&headers(
                "00-00000000000000000000000000000000-00f067aa0ba902b7-01"
            ))
            .is_none()
        );
    }
}
