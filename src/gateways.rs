use jobboard_gateways::opencage::OpenCage;

use crate::config;

pub fn geocoding_gateway(cfg: &config::Geocoding) -> OpenCage {
    match &cfg.gateway {
        config::GeocodingGateway::OpenCage {
            api_key,
            country_code,
        } => {
            log::info!("Use OpenCage geocoding gateway");
            let gw = OpenCage::with_timeout(api_key.clone(), cfg.timeout);
            match country_code {
                Some(country_code) => gw.with_country_code(country_code.clone()),
                None => gw,
            }
        }
    }
}
