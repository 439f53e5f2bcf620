use super::prelude::*;
use qm_entities::{device::DeviceLocationError, geo::MapPoint};

/// Translate the outcome of a single-shot device location request
/// into a viewport update.
///
/// Only the center moves; the current zoom of the view is kept.
pub fn resolve_device_location(
    key: Option<&ApiKey>,
    fix: std::result::Result<MapPoint, DeviceLocationError>,
) -> Result<Viewport> {
    require_api_key(key)?;
    let center = fix?;
    Ok(Viewport::Center { center, zoom: None })
}
