use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use qm_entities::{api_key::ApiKey, geo::MapPoint, route::RouteRequest, viewport::ZoomLevel};

const EMBED_BASE_URL: &str = "https://www.google.com/maps/embed/v1";

/// Builds the URLs that drive an embed-style map renderer.
///
/// Route waypoints arrive already percent-encoded and are inserted
/// verbatim, never encoded a second time.
#[derive(Debug, Clone)]
pub struct EmbedUrls {
    api_key: ApiKey,
}

impl EmbedUrls {
    pub const fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// URL for a map view centered at a point.
    pub fn view(&self, center: MapPoint, zoom: ZoomLevel) -> String {
        format!(
            "{EMBED_BASE_URL}/view?key={key}&center={lat},{lng}&zoom={zoom}",
            key = utf8_percent_encode(self.api_key.as_str(), NON_ALPHANUMERIC),
            lat = center.lat(),
            lng = center.lng(),
        )
    }

    /// URL for rendered directions between two waypoints.
    pub fn directions(&self, route: &RouteRequest) -> String {
        format!(
            "{EMBED_BASE_URL}/directions?key={key}&origin={origin}&destination={destination}",
            key = utf8_percent_encode(self.api_key.as_str(), NON_ALPHANUMERIC),
            origin = route.origin.as_encoded(),
            destination = route.destination.as_encoded(),
        )
    }
}
