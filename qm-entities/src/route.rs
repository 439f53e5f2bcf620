use std::fmt;

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

/// A free-text location query, trimmed and percent-encoded for
/// transport as a URL parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint(String);

impl Waypoint {
    pub fn encode(raw: &str) -> Self {
        Self(utf8_percent_encode(raw.trim(), NON_ALPHANUMERIC).to_string())
    }

    pub fn as_encoded(&self) -> &str {
        &self.0
    }

    /// The original (trimmed) query text.
    pub fn decode(&self) -> String {
        percent_decode_str(&self.0).decode_utf8_lossy().into_owned()
    }
}

impl fmt::Display for Waypoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request to render directions between two locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_roundtrip() {
        for raw in ["29.76,-95.37", "Houston", "Alexanderplatz 1, Berlin"] {
            assert_eq!(raw, Waypoint::encode(raw).decode());
        }
    }

    #[test]
    fn encode_trims_whitespace() {
        let wp = Waypoint::encode("  Houston \n");
        assert_eq!("Houston", wp.as_encoded());
        assert_eq!("Houston", wp.decode());
    }

    #[test]
    fn encoded_form_is_url_safe() {
        let wp = Waypoint::encode("29.76,-95.37");
        assert_eq!("29%2E76%2C%2D95%2E37", wp.as_encoded());
        let wp = Waypoint::encode("Main St & 5th");
        assert!(!wp.as_encoded().contains(' '));
        assert!(!wp.as_encoded().contains('&'));
    }
}
