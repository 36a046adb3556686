use crate::geo::{Distance, MapPoint};

/// The operator-configured circular area the board serves.
///
/// Constructed once from startup configuration and immutable
/// afterwards. Missing configuration must be rejected at startup,
/// never replaced by a default center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceArea {
    center: MapPoint,
    radius: Distance,
}

impl ServiceArea {
    pub const fn new(center: MapPoint, radius: Distance) -> Self {
        Self { center, radius }
    }

    pub const fn center(&self) -> MapPoint {
        self.center
    }

    pub const fn radius(&self) -> Distance {
        self.radius
    }

    /// The boundary is inclusive: a point at exactly the radius
    /// counts as inside.
    pub fn contains(&self, point: MapPoint) -> bool {
        MapPoint::distance(point, self.center) <= self.radius
    }
}
