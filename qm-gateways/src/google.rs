use qm_core::gateways::geocode::GeocodingGateway;
use qm_entities::{
    api_key::ApiKey,
    geocode::{GeocodeResponse, GeocodeStatus},
};

const GEOCODE_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Status reported when the provider could not be reached or
/// returned an unreadable response.
const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Forward geocoding via the Google Geocoding API.
#[derive(Debug)]
pub struct GoogleGeocoding {
    client: reqwest::blocking::Client,
    api_key: ApiKey,
    endpoint: String,
}

impl GoogleGeocoding {
    pub fn new(api_key: ApiKey) -> Self {
        Self::with_endpoint(api_key, GEOCODE_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: ApiKey, endpoint: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            endpoint,
        }
    }

    fn fetch(&self, query: &str) -> Result<qm_boundary::GeocodeResponse, reqwest::Error> {
        self.client
            .get(&self.endpoint)
            .query(&[("address", query), ("key", self.api_key.as_str())])
            .send()?
            .error_for_status()?
            .json()
    }
}

fn unknown_error() -> GeocodeResponse {
    GeocodeResponse::from_status(GeocodeStatus::Other(UNKNOWN_ERROR.to_string()))
}

impl GeocodingGateway for GoogleGeocoding {
    fn geocode(&self, query: &str) -> GeocodeResponse {
        let response = match self.fetch(query) {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Geocoding request for '{query}' failed: {err}");
                return unknown_error();
            }
        };
        match response.try_into() {
            Ok(response) => response,
            Err(err) => {
                log::warn!("Discarding geocoding response for '{query}': {err}");
                unknown_error()
            }
        }
    }
}
