use qm_entities::geocode::GeocodeResponse;

/// Forward geocoding against an external provider.
///
/// The provider always answers with a status code; implementations
/// fold transport failures into a response with a non-`Ok` status
/// instead of failing the call.
pub trait GeocodingGateway {
    fn geocode(&self, query: &str) -> GeocodeResponse;
}
