//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → handler.rs (StatusFn calls the wrapped fn, then the policy)
//!     → writer.rs (collected status/headers/body → Response)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod server;
pub mod writer;

pub use handler::{BoxError, Handle, StatusFn};
pub use request::{RequestIdExt, X_REQUEST_ID};
pub use server::HttpServer;
pub use writer::ResponseWriter;
