//! JSON error envelope policy.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
};
use serde::Serialize;

use crate::http::handler::BoxError;
use crate::http::request::RequestIdExt;
use crate::http::writer::ResponseWriter;
use crate::policy::default::MIN_FINAL_STATUS;
use crate::policy::ResponsePolicy;

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    status: i32,
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'a str>,
}

/// Renders errors as `{"status": .., "error": .., "request_id": ..}` and
/// logs server errors. Sentinel statuses are ignored like the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPolicy;

impl ResponsePolicy for JsonPolicy {
    fn respond(
        &self,
        w: &mut ResponseWriter,
        req: &Request<Body>,
        status: i32,
        err: Option<BoxError>,
    ) {
        if status < MIN_FINAL_STATUS {
            return;
        }

        let Some(err) = err else {
            w.write_header(status);
            return;
        };

        let message = err.to_string();
        let request_id = req.request_id();

        if status >= 500 {
            tracing::error!(
                request_id = request_id.unwrap_or("unknown"),
                method = %req.method(),
                path = %req.uri().path(),
                status,
                error = %message,
                "Handler failed"
            );
        }

        let envelope = ErrorEnvelope {
            status,
            error: &message,
            request_id,
        };
        match serde_json::to_vec(&envelope) {
            Ok(body) => {
                w.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json"),
                );
                w.write_header(status);
                w.write(&body);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode error envelope");
                w.write_header(status);
                w.write(message.as_bytes());
            }
        }
    }

    fn name(&self) -> &'static str {
        "json"
    }
}
