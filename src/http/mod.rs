//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign x-request-id)
//!     → dogs.rs (breed extraction, one upstream search)
//!     → response.rs (error envelope)
//!     → Send to client
//! ```

pub mod dogs;
pub mod request;
pub mod response;
pub mod server;

pub use request::{MakeRequestUuidV4, RequestIdExt, X_REQUEST_ID};
pub use response::RelayError;
pub use server::{AppState, HttpServer};
