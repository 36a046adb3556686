//! Gateways to external services.

pub mod opencage;
