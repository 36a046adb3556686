use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use jobboard_core::{gateways::geocode::GeocodingGateway, usecases};
use jobboard_entities::{address::Address, geo::MapPoint, service_area::ServiceArea};

mod config;
mod gateways;

#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Resolve an address and check it against the service area
    CheckAddress {
        street: String,
        city: String,
        zip: String,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let cfg = config::Config::try_load_from_file_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::CheckAddress { street, city, zip } => {
            let geo = gateways::geocoding_gateway(&cfg.geocoding);
            check_address(&geo, &cfg.service_area, Address { street, city, zip })
        }
    }
}

fn check_address<G: GeocodingGateway>(
    geo: &G,
    area: &ServiceArea,
    address: Address,
) -> Result<()> {
    let location = usecases::resolve_location(geo, &address)?;
    let distance = MapPoint::distance(area.center(), location.pos);
    println!("Resolved position: {}", location.pos);
    println!(
        "Distance to the service area center: {:.1} km",
        distance.to_kilometers()
    );
    if area.contains(location.pos) {
        println!("The address is inside the service area.");
    } else {
        println!(
            "The address is OUTSIDE the service area (radius {:.1} km).",
            area.radius().to_kilometers()
        );
    }
    Ok(())
}
