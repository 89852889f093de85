//! HTTP span helpers.

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

/// Collapse numeric path segments so every product id shares one route label.
fn normalise_path_for_span_name(path: &str) -> String {
    let trimmed = path.trim_matches('/');

    if trimmed.is_empty() {
        return "/".to_owned();
    }

    let mut normalised = String::new();

    for segment in trimmed.split('/') {
        normalised.push('/');

        if segment.parse::<i64>().is_ok() {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_path_is_kept() {
        assert_eq!(request_span_name("GET", "/").otel_span_name, "GET /");
    }

    #[test]
    fn numeric_segments_become_id_placeholders() {
        let names = request_span_name("PUT", "/api/v1/products/42");

        assert_eq!(names.otel_path, "/api/v1/products/{id}");
        assert_eq!(names.otel_span_name, "PUT /api/v1/products/{id}");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        assert_eq!(
            request_span_name("GET", "/api/v1/products/").otel_path,
            "/api/v1/products"
        );
    }
}
