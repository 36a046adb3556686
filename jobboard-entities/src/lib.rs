#![deny(missing_debug_implementations)]

//! # jobboard-entities
//!
//! Reusable, agnostic domain entities for the job board.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod address;
pub mod application;
pub mod email;
pub mod geo;
pub mod id;
pub mod job;
pub mod location;
pub mod password;
pub mod resume;
pub mod saved_job;
pub mod service_area;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
