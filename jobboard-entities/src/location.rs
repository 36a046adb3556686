use crate::{address::Address, geo::MapPoint};

/// An address together with the coordinate that was resolved from it.
///
/// The pairing is deliberate: both parts are always stored and
/// replaced together, so a persisted coordinate can never be stale
/// relative to the persisted address text.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub pos: MapPoint,
    pub address: Address,
}
