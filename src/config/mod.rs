//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → server swaps the response policy in place
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Only the response policy is hot-reloadable; listener and timeouts
//!   need a restart

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, PolicyConfig, PolicyKind, ServiceConfig};
pub use watcher::ConfigWatcher;
