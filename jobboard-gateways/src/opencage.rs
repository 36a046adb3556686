//! Forward geocoding backed by the OpenCage Data API.

use std::time::Duration;

use itertools::Itertools as _;
use serde::Deserialize;

use jobboard_core::gateways::geocode::{GeocodeError, GeocodeResult, GeocodingGateway};
use jobboard_entities::{address::Address, geo::MapPoint};

const FORWARD_URL: &str = "https://api.opencagedata.com/geocode/v1/json";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct OpenCage {
    api_key: String,
    country_code: Option<String>,
    client: reqwest::blocking::Client,
}

impl OpenCage {
    pub fn new(api_key: String) -> Self {
        Self::with_timeout(api_key, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(api_key: String, timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .expect("HTTP client");
        Self {
            api_key,
            country_code: None,
            client,
        }
    }

    /// Restrict lookups to a single ISO 3166-1 alpha-2 country.
    pub fn with_country_code(mut self, country_code: String) -> Self {
        self.country_code = Some(country_code);
        self
    }
}

fn forward_query_string(addr: &Address) -> String {
    [&addr.street, &addr.zip, &addr.city]
        .into_iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .join(",")
}

#[derive(Debug, Deserialize)]
struct ForwardResponse {
    results: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}

fn position_from_response(response: ForwardResponse) -> GeocodeResult {
    let Some(candidate) = response.results.into_iter().next() else {
        return Err(GeocodeError::Unresolved);
    };
    let Geometry { lat, lng } = candidate.geometry;
    MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| GeocodeError::Provider(format!("coordinate out of range: {lat},{lng}")))
}

impl GeocodingGateway for OpenCage {
    fn resolve_location(&self, addr: &Address) -> GeocodeResult {
        let query = forward_query_string(addr);
        let mut params = vec![
            ("q", query.as_str()),
            ("key", self.api_key.as_str()),
            ("limit", "1"),
            ("no_annotations", "1"),
        ];
        if let Some(country_code) = &self.country_code {
            params.push(("countrycode", country_code.as_str()));
        }
        let response = self
            .client
            .get(FORWARD_URL)
            .query(&params)
            .send()
            .and_then(|res| res.error_for_status())
            .map_err(|err| {
                log::warn!("Forward geocoding request for '{query}' failed: {err}");
                GeocodeError::Provider(err.to_string())
            })?;
        let response: ForwardResponse = response.json().map_err(|err| {
            log::warn!("Unexpected forward geocoding response for '{query}': {err}");
            GeocodeError::Provider(err.to_string())
        })?;
        let pos = position_from_response(response)?;
        log::debug!("Resolved address '{query}': {pos}");
        Ok(pos)
    }
}
