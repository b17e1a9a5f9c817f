pub mod auth;
pub mod diagnostics;
pub mod entitlement;
pub mod locale;
pub mod plans;
