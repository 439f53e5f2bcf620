use super::prelude::*;
use crate::gateways::geocode::GeocodingGateway;
use qm_entities::{
    geocode::{GeocodeResponse, GeocodeStatus},
    viewport::ZoomLevel,
};

/// Zoom used when the provider recommends no viewport for a result.
const SEARCH_RESULT_ZOOM: ZoomLevel = ZoomLevel::new(15);

/// Resolve a free-text place query into the viewport to display.
pub fn resolve_search<G>(gw: &G, key: Option<&ApiKey>, query: &str) -> Result<Viewport>
where
    G: GeocodingGateway,
{
    require_api_key(key)?;
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::EmptyInput(InputField::SearchQuery));
    }
    let GeocodeResponse { status, matches } = gw.geocode(query);
    if !status.is_ok() {
        return Err(Error::NotFound(status.as_code().to_string()));
    }
    // An empty result list under an OK status is reported like the
    // provider's own "no results" code.
    let Some(first) = matches.first() else {
        return Err(Error::NotFound(
            GeocodeStatus::ZeroResults.as_code().to_string(),
        ));
    };
    let viewport = match first.viewport {
        Some(bbox) => Viewport::Bounds(bbox),
        None => Viewport::Center {
            center: first.center,
            zoom: Some(SEARCH_RESULT_ZOOM),
        },
    };
    log::debug!("Resolved search '{query}': {viewport:?}");
    Ok(viewport)
}
