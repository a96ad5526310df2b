//! Status-returning handler adapter.
//!
//! # Data Flow
//! ```text
//! host router
//!     → StatusFn::call (tower Service)
//!     → wrapped fn(writer, request) → (status, error)
//!     → PolicyHandle::respond(writer, request, status, error)
//!     → writer.into_response()
//! ```
//!
//! # Design Decisions
//! - The adapter never looks at the status or error; the policy decides
//! - The policy is read from its slot on every call, so swapping it takes
//!   effect without registering the route again
//! - Panics in the wrapped function are left to the host

use axum::{body::Body, http::Request, response::Response};
use std::convert::Infallible;
use std::future::{ready, Ready};
use std::sync::Arc;
use std::task::{Context, Poll};
use tower::Service;

use crate::http::writer::ResponseWriter;
use crate::policy::PolicyHandle;

/// Error value a wrapped handler may return alongside its status.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The "handle one request" capability.
pub trait Handle {
    fn handle(&self, w: &mut ResponseWriter, req: &Request<Body>);
}

/// Adapter turning a `(writer, request) -> (status, error)` function into a
/// request handler.
///
/// ```no_run
/// use axum::{body::Body, http::Request, Router};
/// use status_fn::{BoxError, ResponseWriter, StatusFn};
///
/// fn index(_w: &mut ResponseWriter, _r: &Request<Body>) -> (i32, Option<BoxError>) {
///     (500, Some("error happened".into()))
/// }
///
/// let app: Router = Router::new().route_service("/", StatusFn::new(index));
/// ```
pub struct StatusFn<F> {
    func: Arc<F>,
    policy: PolicyHandle,
}

impl<F> StatusFn<F> {
    /// Wrap `func`, answering through the process-wide policy slot.
    pub fn new(func: F) -> Self
    where
        F: Fn(&mut ResponseWriter, &Request<Body>) -> (i32, Option<BoxError>) + Send + Sync + 'static,
    {
        Self::with_policy(func, PolicyHandle::global())
    }

    /// Wrap `func`, answering through an explicitly provided policy slot.
    pub fn with_policy(func: F, policy: PolicyHandle) -> Self
    where
        F: Fn(&mut ResponseWriter, &Request<Body>) -> (i32, Option<BoxError>) + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
            policy,
        }
    }
}

impl<F> Clone for StatusFn<F> {
    fn clone(&self) -> Self {
        Self {
            func: Arc::clone(&self.func),
            policy: self.policy.clone(),
        }
    }
}

impl<F> Handle for StatusFn<F>
where
    F: Fn(&mut ResponseWriter, &Request<Body>) -> (i32, Option<BoxError>) + Send + Sync + 'static,
{
    fn handle(&self, w: &mut ResponseWriter, req: &Request<Body>) {
        let (status, err) = (self.func)(w, req);
        tracing::trace!(
            status,
            has_error = err.is_some(),
            path = %req.uri().path(),
            "Handler returned"
        );
        self.policy.respond(w, req, status, err);
    }
}

impl<F> Service<Request<Body>> for StatusFn<F>
where
    F: Fn(&mut ResponseWriter, &Request<Body>) -> (i32, Option<BoxError>) + Send + Sync + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let mut w = ResponseWriter::new();
        self.handle(&mut w, &req);
        ready(Ok(w.into_response()))
    }
}
