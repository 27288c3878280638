//! HTTP span helpers.

use uuid::Uuid;

/// Path segments that are followed by a free-form identifier.
const OPAQUE_ID_PREFIXES: [(&str, &str); 1] = [("sessions", "{session}")];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse identifiers so span names and metric labels stay low-cardinality.
fn normalise_path_for_span_name(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::new();
    let mut previous: Option<&str> = None;

    for segment in path.trim_start_matches('/').split('/') {
        normalised.push('/');

        let opaque = previous.and_then(|previous| {
            OPAQUE_ID_PREFIXES
                .iter()
                .find(|(prefix, _)| *prefix == previous)
                .map(|(_, placeholder)| *placeholder)
        });

        if let Some(placeholder) = opaque {
            normalised.push_str(placeholder);
        } else if Uuid::parse_str(segment).is_ok() {
            normalised.push_str("{uuid}");
        } else {
            normalised.push_str(segment);
        }

        previous = Some(segment);
    }

    normalised
}
