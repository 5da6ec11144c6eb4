//! Upstream image-search API subsystem.
//!
//! # Data Flow
//! ```text
//! breed (optional)
//!     → client.rs (URL + x-api-key, one GET)
//!     → UpstreamReply::{Found, Empty, Rejected} or UpstreamError
//!     → relay handler translates to the client response
//! ```

pub mod client;
pub mod error;

pub use client::{DogApiClient, UpstreamReply, API_KEY_HEADER, FALLBACK_ERROR_MESSAGE};
pub use error::UpstreamError;
