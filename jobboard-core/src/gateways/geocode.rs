use jobboard_entities::{address::Address, geo::MapPoint};
use thiserror::Error;

/// Why a forward-geocoding lookup produced no coordinate.
///
/// Callers treat both variants as "could not verify the address",
/// but they are kept apart for logging: an unresolvable address is
/// expected user input, an unavailable provider is an operational
/// problem.
#[derive(Debug, Clone, Error)]
pub enum GeocodeError {
    /// The provider answered, but returned no usable candidate.
    #[error("The address could not be resolved")]
    Unresolved,
    /// Transport failure, timeout or an unexpected response shape.
    #[error("The geocoding provider is unavailable: {0}")]
    Provider(String),
}

pub type GeocodeResult = Result<MapPoint, GeocodeError>;

pub trait GeocodingGateway {
    /// Resolve a postal address into a coordinate.
    ///
    /// Implementations issue a single lookup request, must never
    /// panic on failure and must not block indefinitely. A missing
    /// match is an `Err(GeocodeError::Unresolved)`, never a default
    /// coordinate.
    fn resolve_location(&self, addr: &Address) -> GeocodeResult;
}
