//! Middleware for logging requests and responses.

use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The maximum number of characters of a request or response body to log.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The method, path, status and elapsed time are logged at the `info` level,
/// e.g. `<-- POST /api/expenses` and `--> POST /api/expenses 201 0ms`.
/// Bodies are logged at the `debug` level, truncated to
/// [LOG_BODY_LENGTH_LIMIT] characters.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    tracing::info!("<-- {method} {path}");

    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read request body: {error}");
            return Error::InvalidRequestBody(error.to_string()).into_response();
        }
    };
    log_body("Request", &String::from_utf8_lossy(&body_bytes));

    let response = next.run(Request::from_parts(parts, body_bytes.into())).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    log_body("Response", &String::from_utf8_lossy(&body_bytes));

    tracing::info!(
        "--> {method} {path} {} {}ms",
        parts.status.as_u16(),
        start.elapsed().as_millis()
    );

    Response::from_parts(parts, body_bytes.into())
}

fn log_body(label: &str, body: &str) {
    if body.is_empty() {
        return;
    }

    match truncate(body, LOG_BODY_LENGTH_LIMIT) {
        Some(truncated) => {
            tracing::debug!("{label} body: {truncated}...");
            tracing::trace!("Full {} body: {body:?}", label.to_lowercase());
        }
        None => tracing::debug!("{label} body: {body}"),
    }
}

/// The first `limit` characters of `text`, or `None` if `text` is not longer
/// than `limit` characters.
fn truncate(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(byte_index, _)| &text[..byte_index])
}

#[cfg(test)]
mod truncate_tests {
    use super::truncate;

    #[test]
    fn short_text_is_not_truncated() {
        assert_eq!(truncate("hello", 5), None);
        assert_eq!(truncate("", 5), None);
    }

    #[test]
    fn long_text_is_truncated() {
        assert_eq!(truncate("hello world", 5), Some("hello"));
    }

    #[test]
    fn truncates_on_character_boundaries() {
        assert_eq!(truncate("€€€€", 2), Some("€€"));
    }
}
