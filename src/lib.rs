//! Status-returning HTTP handlers for Axum.
//!
//! Handlers are plain functions that may write to a [`ResponseWriter`] and
//! return `(status, Option<error>)`. [`StatusFn`] adapts them into tower
//! services, and a single replaceable [`ResponsePolicy`] decides what the
//! client sees for each returned pair.
//!
//! ```no_run
//! use axum::{body::Body, http::Request, Router};
//! use status_fn::{install, BoxError, JsonPolicy, ResponseWriter, StatusFn};
//!
//! fn create(_w: &mut ResponseWriter, _r: &Request<Body>) -> (i32, Option<BoxError>) {
//!     (409, Some("already exists".into()))
//! }
//!
//! install(JsonPolicy);
//! let app: Router = Router::new().route_service("/items", StatusFn::new(create));
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod policy;
pub mod routes;

pub use config::ServiceConfig;
pub use http::{BoxError, Handle, HttpServer, ResponseWriter, StatusFn};
pub use lifecycle::Shutdown;
pub use policy::{
    install, policy_fn, DefaultPolicy, JsonPolicy, NoopPolicy, PolicyHandle, ResponsePolicy,
};
