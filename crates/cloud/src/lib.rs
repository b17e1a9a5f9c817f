//! Client for the hosted auth/database backend.
//!
//! Authentication and billing are delegated entirely to the hosted
//! provider; this crate only wraps its HTTP API. The client is constructed
//! exactly once at startup, and only when real credentials are present --
//! otherwise [`CloudHandle::Unavailable`] is passed around instead of a
//! half-configured client.

pub mod client;
pub mod token;

pub use client::{CloudClient, CloudConfig, CloudError, CloudHandle, CloudUser};
pub use token::{peek_claims, TokenClaims, TokenError};
