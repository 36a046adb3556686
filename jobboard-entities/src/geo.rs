use std::fmt;

/// Geographical latitude in degrees, guaranteed to be finite
/// and within [-90, 90].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LatCoord(f64);

impl LatCoord {
    const DEG_MAX: f64 = 90.0;
    const DEG_MIN: f64 = -90.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LatCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// Geographical longitude in degrees, guaranteed to be finite
/// and within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LngCoord(f64);

impl LngCoord {
    const DEG_MAX: f64 = 180.0;
    const DEG_MIN: f64 = -180.0;

    pub const fn max() -> Self {
        Self(Self::DEG_MAX)
    }

    pub const fn min() -> Self {
        Self(Self::DEG_MIN)
    }

    pub const fn to_deg(self) -> f64 {
        self.0
    }

    pub fn to_rad(self) -> f64 {
        self.0.to_radians()
    }

    pub fn try_from_deg<T: Into<f64>>(deg: T) -> Option<Self> {
        let deg = deg.into();
        if deg.is_finite() && (Self::DEG_MIN..=Self::DEG_MAX).contains(&deg) {
            Some(Self(deg))
        } else {
            None
        }
    }
}

impl fmt::Display for LngCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_deg())
    }
}

/// A geographical coordinate pair.
///
/// Every value of this type has been range-checked on construction,
/// so all points are valid positions on the globe. Points are only
/// ever produced by the geocoder or by startup configuration, never
/// from unchecked input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: LatCoord,
    lng: LngCoord,
}

impl MapPoint {
    pub const fn new(lat: LatCoord, lng: LngCoord) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> LatCoord {
        self.lat
    }

    pub const fn lng(self) -> LngCoord {
        self.lng
    }

    pub fn to_lat_lng_rad(self) -> (f64, f64) {
        (self.lat.to_rad(), self.lng.to_rad())
    }

    pub fn to_lat_lng_deg(self) -> (f64, f64) {
        (self.lat.to_deg(), self.lng.to_deg())
    }

    pub fn try_from_lat_lng_deg<LAT: Into<f64>, LNG: Into<f64>>(
        lat: LAT,
        lng: LNG,
    ) -> Option<Self> {
        match (LatCoord::try_from_deg(lat), LngCoord::try_from_deg(lng)) {
            (Some(lat), Some(lng)) => Some(Self::new(lat, lng)),
            _ => None,
        }
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// A non-negative distance on the surface of the earth.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const fn infinite() -> Self {
        Self(f64::INFINITY)
    }

    pub const fn from_meters(meters: f64) -> Self {
        Self(meters)
    }

    pub fn from_kilometers(kilometers: f64) -> Self {
        Self(kilometers * 1000.0)
    }

    pub const fn to_meters(self) -> f64 {
        self.0
    }

    pub fn to_kilometers(self) -> f64 {
        self.0 / 1000.0
    }

    pub fn is_valid(self) -> bool {
        self.0 >= 0.0
    }
}

const MEAN_EARTH_RADIUS: Distance = Distance::from_meters(6_371_200.0);

impl MapPoint {
    /// Calculate the great-circle distance on the surface
    /// of the earth using a special case of the Vincenty
    /// formula for numerical accuracy.
    /// Reference: https://en.wikipedia.org/wiki/Great-circle_distance
    ///
    /// Total over all points: construction already rejected
    /// out-of-range coordinates.
    pub fn distance(p1: MapPoint, p2: MapPoint) -> Distance {
        let (lat1_rad, lng1_rad) = p1.to_lat_lng_rad();
        let (lat2_rad, lng2_rad) = p2.to_lat_lng_rad();

        let (lat1_sin, lat1_cos) = (lat1_rad.sin(), lat1_rad.cos());
        let (lat2_sin, lat2_cos) = (lat2_rad.sin(), lat2_rad.cos());

        let dlng = (lng1_rad - lng2_rad).abs();
        let (dlng_sin, dlng_cos) = (dlng.sin(), dlng.cos());

        let nom1 = lat2_cos * dlng_sin;
        let nom2 = lat1_cos * lat2_sin - lat1_sin * lat2_cos * dlng_cos;

        let nom = (nom1 * nom1 + nom2 * nom2).sqrt();
        let denom = lat1_sin * lat2_sin + lat1_cos * lat2_cos * dlng_cos;

        Distance::from_meters(MEAN_EARTH_RADIUS.to_meters() * nom.atan2(denom))
    }
}
