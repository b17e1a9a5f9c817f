//! Identity-token validation for provider-issued bearer tokens.
//!
//! Token issuance, refresh, and revocation all live with the hosted auth
//! provider; this module only verifies what the provider signed.

pub mod identity;
pub mod jwt;

pub use identity::{Identity, RequireIdentity};
