//! # jobboard-core
//!
//! Business logic of the job board: repository traits, gateway
//! traits and usecases. Persistence and the geocoding provider are
//! consumed through the traits defined here and injected by the
//! application.

pub mod gateways;
pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use jobboard_entities::{
        address::*, application::*, email::*, geo::*, id::*, job::*, location::*, password::*,
        resume::*, saved_job::*, service_area::*, time::*, user::*,
    };
}
