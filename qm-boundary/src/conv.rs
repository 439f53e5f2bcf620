use super::*;
use qm_entities as e;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("Coordinate out of range: {lat},{lng}")]
pub struct InvalidCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl TryFrom<LatLng> for e::geo::MapPoint {
    type Error = InvalidCoordinate;

    fn try_from(from: LatLng) -> Result<Self, Self::Error> {
        let LatLng { lat, lng } = from;
        Self::try_from_lat_lng_deg(lat, lng).ok_or(InvalidCoordinate { lat, lng })
    }
}

impl TryFrom<Bounds> for e::geo::MapBbox {
    type Error = InvalidCoordinate;

    fn try_from(from: Bounds) -> Result<Self, Self::Error> {
        let Bounds {
            southwest,
            northeast,
        } = from;
        Ok(Self::new(southwest.try_into()?, northeast.try_into()?))
    }
}

impl TryFrom<GeocodeResult> for e::geocode::GeocodeMatch {
    type Error = InvalidCoordinate;

    fn try_from(from: GeocodeResult) -> Result<Self, Self::Error> {
        let Geometry { location, viewport } = from.geometry;
        Ok(Self {
            center: location.try_into()?,
            viewport: viewport.map(TryInto::try_into).transpose()?,
        })
    }
}

impl TryFrom<GeocodeResponse> for e::geocode::GeocodeResponse {
    type Error = InvalidCoordinate;

    fn try_from(from: GeocodeResponse) -> Result<Self, Self::Error> {
        let GeocodeResponse { status, results } = from;
        let matches = results
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            status: e::geocode::GeocodeStatus::from_code(&status),
            matches,
        })
    }
}
