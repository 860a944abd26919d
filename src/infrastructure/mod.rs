//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Service-account credential loading
//! - Access-token issuance (OAuth2 JWT-bearer grant)
//! - Identity Platform HTTP client
//! - Configuration management

pub mod auth;
pub mod config;
pub mod credentials;
pub mod identity;
