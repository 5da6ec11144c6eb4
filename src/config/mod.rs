//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional TOML file (loader.rs)
//!     → .env + DOG_API_KEY override (loader.rs)
//!     → validation.rs (semantic checks)
//!     → RelayConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - All fields have defaults so the relay runs with no file at all
//! - The credential lives in a redacting newtype

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, API_KEY_ENV};
pub use schema::{ApiKey, ListenerConfig, ObservabilityConfig, RelayConfig, UpstreamConfig};
