use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qm_core::usecases;
use qm_entities::viewport::Viewport;

use crate::{config::Config, gateways};

#[derive(Debug, Parser)]
#[command(version, about = "Build map embed URLs from location queries")]
struct Args {
    /// Path to the configuration file.
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a place query and print the view URL for it.
    Search { query: String },
    /// Shape a route and print the directions URL for it.
    Route {
        origin: String,
        destination: String,
    },
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::try_load_from_file_or_default(args.config.as_deref())?;
    let api_key = config
        .map
        .api_key
        .clone()
        .ok_or(usecases::Error::MissingApiKey)?;
    let embed = gateways::embed_urls(api_key.clone());

    match args.command {
        None => {
            println!(
                "{}",
                embed.view(config.map.default_center, config.map.default_zoom)
            );
        }
        Some(Command::Search { query }) => {
            let geocoder = gateways::geocoding_gateway(api_key.clone());
            let viewport = usecases::resolve_search(&geocoder, Some(&api_key), &query)?;
            let (center, zoom) = match viewport {
                Viewport::Center { center, zoom } => {
                    (center, zoom.unwrap_or(config.map.default_zoom))
                }
                // The embed renderer cannot display bounds directly.
                Viewport::Bounds(bbox) => (bbox.center(), config.map.default_zoom),
            };
            println!("{}", embed.view(center, zoom));
        }
        Some(Command::Route {
            origin,
            destination,
        }) => {
            let route = usecases::resolve_route(Some(&api_key), &origin, &destination)?;
            println!("{}", embed.directions(&route));
        }
    }
    Ok(())
}
