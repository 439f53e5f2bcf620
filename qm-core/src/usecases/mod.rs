mod error;
mod resolve_device_location;
mod resolve_route;
mod resolve_search;

pub use self::{
    error::{Error, InputField},
    resolve_device_location::*,
    resolve_route::*,
    resolve_search::*,
};

mod prelude {
    pub use super::error::{Error, InputField};
    pub use qm_entities::{api_key::ApiKey, viewport::Viewport};

    pub type Result<T> = std::result::Result<T, Error>;

    /// All operations require a configured credential, even those
    /// that never contact the provider themselves.
    pub fn require_api_key(key: Option<&ApiKey>) -> Result<()> {
        if key.is_none() {
            return Err(Error::MissingApiKey);
        }
        Ok(())
    }
}
