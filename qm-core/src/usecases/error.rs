use std::fmt;

use qm_entities::device::DeviceLocationError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("The {0} must not be empty")]
    EmptyInput(InputField),
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    DeviceLocation(#[from] DeviceLocationError),
    #[error("No API key is configured")]
    MissingApiKey,
}

/// The user-supplied field an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    SearchQuery,
    Origin,
    Destination,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::SearchQuery => "search query",
            Self::Origin => "origin",
            Self::Destination => "destination",
        };
        f.write_str(name)
    }
}
