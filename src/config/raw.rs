use std::time::Duration;

use duration_str::deserialize_option_duration;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub geocoding: Option<Geocoding>,
    pub gateway: Option<Gateway>,
    pub service_area: Option<ServiceArea>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub gateway: Option<GeocodingGateway>,
    #[serde(default, deserialize_with = "deserialize_option_duration")]
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingGateway {
    Opencage,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub opencage: Option<OpenCage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OpenCage {
    pub api_key: Option<String>,
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ServiceArea {
    pub center_lat: f64,
    pub center_lng: f64,
    pub radius_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/jobboard.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert!(cfg.geocoding.is_some());
        assert!(cfg.gateway.is_some());
        assert!(cfg.service_area.is_some());
    }
}
