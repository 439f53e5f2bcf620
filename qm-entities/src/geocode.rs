use std::fmt;

use crate::geo::{MapBbox, MapPoint};

/// Status code reported by the geocoding provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeStatus {
    Ok,
    ZeroResults,
    /// Any other code reported by the provider, verbatim.
    Other(String),
}

impl GeocodeStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "ZERO_RESULTS" => Self::ZeroResults,
            _ => Self::Other(code.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::ZeroResults => "ZERO_RESULTS",
            Self::Other(code) => code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for GeocodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A single geocoding result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocodeMatch {
    pub center: MapPoint,
    /// The viewport the provider recommends for displaying the
    /// result, if any.
    pub viewport: Option<MapBbox>,
}

/// Outcome of a forward geocoding request.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeResponse {
    pub status: GeocodeStatus,
    pub matches: Vec<GeocodeMatch>,
}

impl GeocodeResponse {
    /// A response without results, carrying only a status code.
    pub const fn from_status(status: GeocodeStatus) -> Self {
        Self {
            status,
            matches: Vec::new(),
        }
    }
}
