use std::str::FromStr;

use thiserror::Error;

/// Credential for the external map provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(String);

/// Value shipped in example configurations instead of a real key.
const PLACEHOLDER: &str = "REPLACE_WITH_YOUR_API_KEY";

impl ApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("API key is empty or still set to the placeholder")]
pub struct ApiKeyParseError;

impl FromStr for ApiKey {
    type Err = ApiKeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == PLACEHOLDER {
            return Err(ApiKeyParseError);
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_real_key() {
        let key: ApiKey = " AIzaSyExample123 ".parse().unwrap();
        assert_eq!("AIzaSyExample123", key.as_str());
    }

    #[test]
    fn reject_empty_and_placeholder() {
        assert_eq!(Err(ApiKeyParseError), "".parse::<ApiKey>());
        assert_eq!(Err(ApiKeyParseError), "   ".parse::<ApiKey>());
        assert_eq!(
            Err(ApiKeyParseError),
            "REPLACE_WITH_YOUR_API_KEY".parse::<ApiKey>()
        );
    }
}
