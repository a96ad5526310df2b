//! Request-scoped response sink.
//!
//! # Responsibilities
//! - Hold the status code, headers and body a handler produces
//! - Accept the status exactly once; later attempts are ignored
//! - Convert into an Axum `Response` once the handler and policy are done
//!
//! # Design Decisions
//! - Status is kept as a raw `i32` so policies can pass through any integer
//!   a handler returned; it is only checked when the response is built
//! - Writing body bytes before a status commits an implicit 200
//! - Headers are frozen when the status is committed; later edits through
//!   `headers_mut` are not sent

use axum::{
    body::Body,
    http::{HeaderMap, StatusCode},
    response::Response,
};

/// Sink a wrapped handler and the response policy write into.
#[derive(Debug, Default)]
pub struct ResponseWriter {
    status: Option<i32>,
    headers: HeaderMap,
    committed: Option<HeaderMap>,
    body: Vec<u8>,
}

impl ResponseWriter {
    /// Create an empty writer with no status set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the response status. Only the first call has any effect.
    pub fn write_header(&mut self, status: i32) {
        match self.status {
            None => self.commit(status),
            Some(current) => {
                tracing::warn!(
                    current,
                    attempted = status,
                    "Superfluous write_header call ignored"
                );
            }
        }
    }

    /// Append bytes to the body, committing status 200 if none was set.
    pub fn write(&mut self, bytes: &[u8]) {
        if self.status.is_none() {
            self.commit(i32::from(StatusCode::OK.as_u16()));
        }
        self.body.extend_from_slice(bytes);
    }

    fn commit(&mut self, status: i32) {
        self.status = Some(status);
        self.committed = Some(self.headers.clone());
    }

    /// Response headers. Changes made after the status is committed are dropped.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The headers that will be sent.
    pub fn headers(&self) -> &HeaderMap {
        self.committed.as_ref().unwrap_or(&self.headers)
    }

    /// The explicitly committed status, if any.
    pub fn status(&self) -> Option<i32> {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Whether a status has been committed (explicitly or by a body write).
    pub fn is_written(&self) -> bool {
        self.status.is_some()
    }

    /// Build the host response. An unset status means 200.
    pub fn into_response(self) -> Response {
        let status = match self.status {
            None => StatusCode::OK,
            Some(code) => match u16::try_from(code).ok().map(StatusCode::from_u16) {
                Some(Ok(status)) => status,
                _ => {
                    tracing::error!(status = code, "Invalid status code, responding 500");
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
        };

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;
        *response.headers_mut() = self.committed.unwrap_or(self.headers);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[test]
    fn test_first_status_wins() {
        let mut w = ResponseWriter::new();
        w.write_header(404);
        w.write_header(500);
        assert_eq!(w.status(), Some(404));
    }

    #[test]
    fn test_body_write_commits_ok() {
        let mut w = ResponseWriter::new();
        assert!(!w.is_written());
        w.write(b"hello");
        assert_eq!(w.status(), Some(200));
        w.write_header(500);
        assert_eq!(w.status(), Some(200));
        assert_eq!(w.body(), b"hello");
    }

    #[test]
    fn test_unset_status_defaults_to_ok() {
        let response = ResponseWriter::new().into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_invalid_status_becomes_internal_error() {
        for code in [1200, 70_000, -1, 99] {
            let mut w = ResponseWriter::new();
            w.write_header(code);
            let response = w.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "code {code}");
        }
    }

    #[test]
    fn test_headers_carried_into_response() {
        let mut w = ResponseWriter::new();
        w.headers_mut()
            .insert(header::CONTENT_TYPE, "text/plain".parse().unwrap());
        w.write_header(201);
        let response = w.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");
    }

    #[test]
    fn test_headers_frozen_after_commit() {
        let mut w = ResponseWriter::new();
        w.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        w.write_header(202);
        w.headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html"));
        w.headers_mut()
            .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

        assert_eq!(w.headers()[header::CONTENT_TYPE], "application/json");
        let response = w.into_response();
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert!(!response.headers().contains_key(header::CACHE_CONTROL));
    }
}
