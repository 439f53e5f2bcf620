use qm_entities::api_key::ApiKey;
use qm_gateways::{embed::EmbedUrls, google::GoogleGeocoding};

pub fn geocoding_gateway(api_key: ApiKey) -> GoogleGeocoding {
    log::info!("Using the Google Maps geocoding API");
    GoogleGeocoding::new(api_key)
}

pub fn embed_urls(api_key: ApiKey) -> EmbedUrls {
    EmbedUrls::new(api_key)
}
