//! Identity Platform HTTP API integration.
//!
//! Thin typed client over the platform's project-config resource:
//! one read endpoint and one masked partial-update endpoint.

pub mod client;
pub mod error;
pub mod types;

pub use client::{IdentityPlatformClient, IdentityPlatformClientConfig};
pub use error::IdentityApiError;
pub use types::IdentityConfig;
