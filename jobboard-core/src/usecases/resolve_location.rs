use super::prelude::*;

/// Geocode a complete postal address into a location.
///
/// Incomplete addresses are rejected before any network call. The
/// two gateway failure modes collapse into the same user-facing
/// error but are logged at different levels.
pub fn resolve_location<G>(geo: &G, addr: &Address) -> Result<Location>
where
    G: GeocodingGateway + ?Sized,
{
    if !addr.is_complete() {
        return Err(Error::IncompleteAddress);
    }
    match geo.resolve_location(addr) {
        Ok(pos) => {
            log::debug!("Resolved address '{}, {} {}': {pos}", addr.street, addr.zip, addr.city);
            Ok(Location {
                pos,
                address: addr.clone(),
            })
        }
        Err(err) => {
            match &err {
                GeocodeError::Unresolved => {
                    log::info!("No match for address '{}, {} {}'", addr.street, addr.zip, addr.city);
                }
                GeocodeError::Provider(reason) => {
                    log::warn!("Geocoding provider failure: {reason}");
                }
            }
            Err(Error::UnverifiedAddress(err))
        }
    }
}
