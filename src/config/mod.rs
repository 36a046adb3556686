use std::{
    env, fs,
    io::ErrorKind,
    path::Path,
    time::Duration,
};

use anyhow::{anyhow, Result};

use jobboard_entities::{
    geo::{Distance, MapPoint},
    service_area::ServiceArea,
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "jobboard.toml";

const ENV_NAME_OPENCAGE_API_KEY: &str = "OPENCAGE_API_KEY";

const DEFAULT_GEOCODING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub struct Config {
    pub geocoding: Geocoding,
    pub service_area: ServiceArea,
}

#[derive(Debug)]
pub struct Geocoding {
    pub gateway: GeocodingGateway,
    pub timeout: Duration,
}

#[derive(Debug)]
pub enum GeocodingGateway {
    OpenCage {
        api_key: String,
        country_code: Option<String>,
    },
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let mut raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        if let Ok(api_key) = env::var(ENV_NAME_OPENCAGE_API_KEY) {
            raw_config
                .gateway
                .get_or_insert_with(Default::default)
                .opencage
                .get_or_insert_with(Default::default)
                .api_key = Some(api_key);
        }
        Self::try_from(raw_config)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            geocoding,
            gateway,
            service_area,
        } = from;

        let raw::Geocoding {
            gateway: gw_name,
            timeout,
        } = geocoding.ok_or_else(|| anyhow!("Missing geocoding configuration"))?;

        let gw_name = gw_name.ok_or_else(|| anyhow!("No geocoding gateway selected"))?;
        let gateway = gateway.unwrap_or_default();
        let gw = match gw_name {
            raw::GeocodingGateway::Opencage => {
                let raw::OpenCage {
                    api_key,
                    country_code,
                } = gateway
                    .opencage
                    .ok_or_else(|| anyhow!("Missing 'opencage' gateway configuration"))?;
                let api_key = api_key.ok_or_else(|| {
                    anyhow!("Missing OpenCage API key (config file or {ENV_NAME_OPENCAGE_API_KEY})")
                })?;
                GeocodingGateway::OpenCage {
                    api_key,
                    country_code,
                }
            }
        };
        let geocoding = Geocoding {
            gateway: gw,
            timeout: timeout.unwrap_or(DEFAULT_GEOCODING_TIMEOUT),
        };

        let raw::ServiceArea {
            center_lat,
            center_lng,
            radius_km,
        } = service_area.ok_or_else(|| anyhow!("Missing service area configuration"))?;

        let center = MapPoint::try_from_lat_lng_deg(center_lat, center_lng)
            .ok_or_else(|| anyhow!("Invalid service area center: {center_lat},{center_lng}"))?;
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(anyhow!("Invalid service area radius: {radius_km} km"));
        }
        let service_area = ServiceArea::new(center, Distance::from_kilometers(radius_km));

        Ok(Self {
            geocoding,
            service_area,
        })
    }
}
