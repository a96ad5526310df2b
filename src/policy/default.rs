//! Built-in plain-text and no-op policies.
//!
//! # Decision table (first match wins)
//! - `status < 200`: nothing is written
//! - error present: status, then the error message as a plain-text body
//! - otherwise: status only, no body

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
};

use crate::http::handler::BoxError;
use crate::http::writer::ResponseWriter;
use crate::policy::ResponsePolicy;

/// Statuses below this are treated as "handler did not finalize".
pub const MIN_FINAL_STATUS: i32 = 200;

/// The policy installed at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPolicy {
    /// Emit a lone `"\n"` body for status-only responses, matching hosts
    /// whose plain-text error writer always appends a newline.
    pub newline_on_empty: bool,
}

impl ResponsePolicy for DefaultPolicy {
    fn respond(
        &self,
        w: &mut ResponseWriter,
        _req: &Request<Body>,
        status: i32,
        err: Option<BoxError>,
    ) {
        if status < MIN_FINAL_STATUS {
            return;
        }

        match err {
            Some(err) => {
                set_plain_text(w);
                w.write_header(status);
                w.write(err.to_string().as_bytes());
            }
            None if self.newline_on_empty => {
                set_plain_text(w);
                w.write_header(status);
                w.write(b"\n");
            }
            None => w.write_header(status),
        }
    }

    fn name(&self) -> &'static str {
        "default"
    }
}

fn set_plain_text(w: &mut ResponseWriter) {
    let headers = w.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
}

/// Writes nothing; handlers are fully responsible for their responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPolicy;

impl ResponsePolicy for NoopPolicy {
    fn respond(
        &self,
        _w: &mut ResponseWriter,
        _req: &Request<Body>,
        _status: i32,
        _err: Option<BoxError>,
    ) {
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
