//! Repolens domain model.
//!
//! Pure types shared by the store, cloud, and API crates: the plan catalog,
//! the entitlement state machine, and the locale preference. No I/O happens
//! here.

pub mod entitlement;
pub mod error;
pub mod locale;
pub mod plan;
pub mod types;
