//! Observability subsystem.
//!
//! Every module logs through `tracing`; `logging::init` installs the
//! subscriber once at startup. The request ID set by the HTTP layer flows
//! into policies for correlation.

pub mod logging;
