#![cfg_attr(test, deny(warnings))]

//! # qm-boundary
//!
//! Serializable, anemic data structures for the JSON wire format of
//! Google-style geocoding providers.

use serde::{Deserialize, Serialize};

mod conv;
pub use self::conv::InvalidCoordinate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Bounds>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bounds {
    pub southwest: LatLng,
    pub northeast: LatLng,
}
