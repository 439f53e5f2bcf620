use std::{fmt, str::FromStr};

use itertools::Itertools as _;
use thiserror::Error;

pub const LAT_DEG_MIN: f64 = -90.0;
pub const LAT_DEG_MAX: f64 = 90.0;

pub const LNG_DEG_MIN: f64 = -180.0;
pub const LNG_DEG_MAX: f64 = 180.0;

/// A geographical location on a (flat) map in degrees.
///
/// Both coordinates are guaranteed to be within their valid degree
/// range, i.e. points outside of it are unconstructible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return None;
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[derive(Debug, Error)]
pub enum MapPointParseError {
    #[error("Invalid latitude '{0}'")]
    Latitude(String),
    #[error("Invalid longitude '{0}'")]
    Longitude(String),
    #[error("Expected a 'lat,lng' pair: '{0}'")]
    Format(String),
}

impl FromStr for MapPoint {
    type Err = MapPointParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lat_str, lng_str)) = s.split(',').map(str::trim).collect_tuple() else {
            return Err(MapPointParseError::Format(s.to_string()));
        };
        let lat: f64 = lat_str
            .parse()
            .map_err(|_| MapPointParseError::Latitude(lat_str.to_string()))?;
        let lng: f64 = lng_str
            .parse()
            .map_err(|_| MapPointParseError::Longitude(lng_str.to_string()))?;
        if !(LAT_DEG_MIN..=LAT_DEG_MAX).contains(&lat) {
            return Err(MapPointParseError::Latitude(lat_str.to_string()));
        }
        if !(LNG_DEG_MIN..=LNG_DEG_MAX).contains(&lng) {
            return Err(MapPointParseError::Longitude(lng_str.to_string()));
        }
        Ok(Self { lat, lng })
    }
}

/// A rectangular region on the map, axis-aligned, given by its
/// south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn south_west(&self) -> MapPoint {
        self.sw
    }

    pub const fn north_east(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.lat <= self.ne.lat
    }

    /// The midpoint of the box, for renderers that cannot display
    /// bounds directly.
    pub fn center(&self) -> MapPoint {
        let lat = (self.sw.lat + self.ne.lat) / 2.0;
        let mut lng = (self.sw.lng + self.ne.lng) / 2.0;
        // Boxes crossing the antimeridian have sw.lng > ne.lng
        if self.sw.lng > self.ne.lng {
            lng += 180.0;
            if lng > LNG_DEG_MAX {
                lng -= 360.0;
            }
        }
        MapPoint { lat, lng }
    }
}

impl fmt::Display for MapBbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.sw, self.ne)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_range() {
        assert!(MapPoint::try_from_lat_lng_deg(90.0, 0.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(-90.0, 0.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(90.000001, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(-90.000001, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn longitude_range() {
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.0).is_some());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, 180.000001).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.000001).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, f64::NAN).is_none());
    }

    #[test]
    fn parse_lat_lng_pair() {
        let pt: MapPoint = "29.7601,-95.3701".parse().unwrap();
        assert_eq!(29.7601, pt.lat());
        assert_eq!(-95.3701, pt.lng());

        let pt: MapPoint = " 48.7755 , 9.1827 ".parse().unwrap();
        assert_eq!(48.7755, pt.lat());
        assert_eq!(9.1827, pt.lng());
    }

    #[test]
    fn reject_malformed_pairs() {
        assert!(matches!(
            "Houston".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
        assert!(matches!(
            "1.0,2.0,3.0".parse::<MapPoint>(),
            Err(MapPointParseError::Format(_))
        ));
        assert!(matches!(
            "abc,9.0".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(_))
        ));
        assert!(matches!(
            "9.0,abc".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(_))
        ));
        assert!(matches!(
            "91.0,9.0".parse::<MapPoint>(),
            Err(MapPointParseError::Latitude(_))
        ));
        assert!(matches!(
            "9.0,181.0".parse::<MapPoint>(),
            Err(MapPointParseError::Longitude(_))
        ));
    }

    #[test]
    fn display_roundtrip() {
        let pt = MapPoint::try_from_lat_lng_deg(29.7601, -95.3701).unwrap();
        assert_eq!(pt, pt.to_string().parse().unwrap());
    }

    #[test]
    fn bbox_center() {
        let bbox = MapBbox::new(
            MapPoint::try_from_lat_lng_deg(-10.0, 20.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(10.0, 40.0).unwrap(),
        );
        assert!(bbox.is_valid());
        let center = bbox.center();
        assert_eq!(0.0, center.lat());
        assert_eq!(30.0, center.lng());
    }

    #[test]
    fn bbox_center_across_antimeridian() {
        let bbox = MapBbox::new(
            MapPoint::try_from_lat_lng_deg(-10.0, 170.0).unwrap(),
            MapPoint::try_from_lat_lng_deg(10.0, -160.0).unwrap(),
        );
        let center = bbox.center();
        assert_eq!(0.0, center.lat());
        assert_eq!(-175.0, center.lng());
    }
}
