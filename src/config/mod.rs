use std::{env, fs, io::ErrorKind, path::Path};

use anyhow::Result;
use qm_entities::{api_key::ApiKey, geo::MapPoint, viewport::ZoomLevel};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "quickmaps.toml";

const ENV_NAME_API_KEY: &str = "GOOGLE_MAPS_API_KEY";

pub struct Config {
    pub map: Map,
}

pub struct Map {
    pub api_key: Option<ApiKey>,
    pub default_center: MapPoint,
    pub default_zoom: ZoomLevel,
}

impl Config {
    pub fn try_load_from_file_or_default(file_path: Option<&Path>) -> Result<Self> {
        let file_path = file_path.unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
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
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(key) = env::var(ENV_NAME_API_KEY) {
            cfg.map.api_key = parse_api_key(&key);
        }
        Ok(cfg)
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;

    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Map {
            api_key,
            default_center,
            default_zoom,
        } = from.map.unwrap_or_default();
        let api_key = api_key.as_deref().and_then(parse_api_key);
        let default_center = default_center.parse()?;
        let default_zoom = ZoomLevel::new(default_zoom);
        Ok(Self {
            map: Map {
                api_key,
                default_center,
                default_zoom,
            },
        })
    }
}

fn parse_api_key(value: &str) -> Option<ApiKey> {
    match value.parse() {
        Ok(key) => Some(key),
        Err(err) => {
            log::warn!("Ignoring unusable API key: {err}");
            None
        }
    }
}
