//! Response policy subsystem.
//!
//! A policy turns the `(status, error)` pair a wrapped handler returned into
//! writes on the response sink. Exactly one policy is active per slot.
//!
//! # Data Flow
//! ```text
//! startup:  config.policy → build_policy() → PolicyHandle::replace()
//! request:  StatusFn → PolicyHandle::respond() → active policy → writer
//! reload:   watcher → new config → build_policy() → PolicyHandle::replace()
//! ```
//!
//! # Design Decisions
//! - The slot is an `ArcSwap`: lock-free loads on every request, atomic swaps
//! - Adapters hold a handle to a slot rather than the policy itself
//! - `PolicyHandle::global()` is the shared slot adapters use by default

pub mod default;
pub mod json;

use arc_swap::ArcSwap;
use axum::{body::Body, http::Request};
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::config::schema::{PolicyConfig, PolicyKind};
use crate::http::handler::BoxError;
use crate::http::writer::ResponseWriter;

pub use default::{DefaultPolicy, NoopPolicy};
pub use json::JsonPolicy;

/// Decides what, if anything, is written for a handler's result.
pub trait ResponsePolicy: Send + Sync + 'static {
    fn respond(
        &self,
        w: &mut ResponseWriter,
        req: &Request<Body>,
        status: i32,
        err: Option<BoxError>,
    );

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// A policy backed by a plain function or closure.
pub struct PolicyFn<F>(F);

/// Build a policy from a closure.
pub fn policy_fn<F>(f: F) -> PolicyFn<F>
where
    F: Fn(&mut ResponseWriter, &Request<Body>, i32, Option<BoxError>) + Send + Sync + 'static,
{
    PolicyFn(f)
}

impl<F> ResponsePolicy for PolicyFn<F>
where
    F: Fn(&mut ResponseWriter, &Request<Body>, i32, Option<BoxError>) + Send + Sync + 'static,
{
    fn respond(
        &self,
        w: &mut ResponseWriter,
        req: &Request<Body>,
        status: i32,
        err: Option<BoxError>,
    ) {
        (self.0)(w, req, status, err)
    }
}

/// Shared, swappable slot holding the active policy.
#[derive(Clone)]
pub struct PolicyHandle {
    slot: Arc<ArcSwap<Box<dyn ResponsePolicy>>>,
}

static GLOBAL: OnceLock<PolicyHandle> = OnceLock::new();

impl PolicyHandle {
    pub fn new<P: ResponsePolicy>(policy: P) -> Self {
        let boxed: Box<dyn ResponsePolicy> = Box::new(policy);
        Self {
            slot: Arc::new(ArcSwap::from_pointee(boxed)),
        }
    }

    /// The process-wide slot, initialised with [`DefaultPolicy`].
    pub fn global() -> Self {
        GLOBAL
            .get_or_init(|| Self::new(DefaultPolicy::default()))
            .clone()
    }

    /// Install a new policy. Adapters sharing this slot see it on their next call.
    pub fn set<P: ResponsePolicy>(&self, policy: P) {
        self.replace(Box::new(policy));
    }

    pub fn replace(&self, policy: Box<dyn ResponsePolicy>) {
        tracing::info!(
            from = self.current_name(),
            to = policy.name(),
            "Response policy replaced"
        );
        self.slot.store(Arc::new(policy));
    }

    /// Run the active policy.
    pub fn respond(
        &self,
        w: &mut ResponseWriter,
        req: &Request<Body>,
        status: i32,
        err: Option<BoxError>,
    ) {
        let policy = self.slot.load_full();
        policy.respond(w, req, status, err);
    }

    pub fn current_name(&self) -> &'static str {
        self.slot.load().name()
    }
}

impl Default for PolicyHandle {
    fn default() -> Self {
        Self::new(DefaultPolicy::default())
    }
}

impl fmt::Debug for PolicyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PolicyHandle")
            .field("policy", &self.current_name())
            .finish()
    }
}

/// Replace the policy in the process-wide slot.
pub fn install<P: ResponsePolicy>(policy: P) {
    PolicyHandle::global().set(policy);
}

/// Build the policy selected by configuration.
pub fn build_policy(config: &PolicyConfig) -> Box<dyn ResponsePolicy> {
    match config.kind {
        PolicyKind::Default => Box::new(DefaultPolicy {
            newline_on_empty: config.newline_on_empty,
        }),
        PolicyKind::Noop => Box::new(NoopPolicy),
        PolicyKind::Json => Box::new(JsonPolicy),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[test]
    fn test_handle_clones_share_slot() {
        let a = PolicyHandle::new(NoopPolicy);
        let b = a.clone();
        b.set(DefaultPolicy::default());
        assert_eq!(a.current_name(), "default");
    }

    #[test]
    fn test_closure_policy_runs() {
        let handle = PolicyHandle::new(policy_fn(
            |w: &mut ResponseWriter, _r: &Request<Body>, status: i32, _e: Option<BoxError>| {
                w.write_header(status + 1);
            },
        ));

        let mut w = ResponseWriter::new();
        handle.respond(&mut w, &request(), 200, None);
        assert_eq!(w.status(), Some(201));
        assert_eq!(handle.current_name(), "custom");
    }

    #[test]
    fn test_build_policy_from_config() {
        let mut config = PolicyConfig::default();
        assert_eq!(build_policy(&config).name(), "default");

        config.kind = PolicyKind::Noop;
        assert_eq!(build_policy(&config).name(), "noop");

        config.kind = PolicyKind::Json;
        assert_eq!(build_policy(&config).name(), "json");
    }

    #[test]
    fn test_newline_option_reaches_default_policy() {
        let config = PolicyConfig {
            kind: PolicyKind::Default,
            newline_on_empty: true,
        };
        let policy = build_policy(&config);

        let mut w = ResponseWriter::new();
        policy.respond(&mut w, &request(), 500, None);
        assert_eq!(w.body(), b"\n");
    }
}
