//! Demo routes served by the binary.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    Router,
};

use crate::http::{BoxError, ResponseWriter, StatusFn};
use crate::policy::PolicyHandle;

/// Build the demo router, answering through `policy`.
pub fn demo_routes(policy: &PolicyHandle) -> Router {
    Router::new()
        .route_service("/", StatusFn::with_policy(index, policy.clone()))
        .route_service("/health", StatusFn::with_policy(health, policy.clone()))
        .route_service("/fail", StatusFn::with_policy(fail, policy.clone()))
        .route_service("/status/{code}", StatusFn::with_policy(status, policy.clone()))
}

/// Writes its own response and returns the sentinel so the policy stays out.
fn index(w: &mut ResponseWriter, _r: &Request<Body>) -> (i32, Option<BoxError>) {
    w.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    w.write_header(200);
    w.write(b"status-fn is running\n");
    (0, None)
}

fn health(_w: &mut ResponseWriter, _r: &Request<Body>) -> (i32, Option<BoxError>) {
    (200, None)
}

fn fail(_w: &mut ResponseWriter, _r: &Request<Body>) -> (i32, Option<BoxError>) {
    (500, Some("error happened".into()))
}

/// Responds with the status named in the path, with an error for 4xx/5xx.
fn status(_w: &mut ResponseWriter, r: &Request<Body>) -> (i32, Option<BoxError>) {
    let code = r
        .uri()
        .path()
        .rsplit('/')
        .next()
        .and_then(|s| s.parse::<i32>().ok());

    match code {
        Some(code) if code >= 400 => (code, Some(format!("requested status {code}").into())),
        Some(code) => (code, None),
        None => (400, Some("status code must be an integer".into())),
    }
}
