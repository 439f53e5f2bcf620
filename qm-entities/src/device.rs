use thiserror::Error;

/// Why a device location request failed.
///
/// Mirrors the error taxonomy of browser-style geolocation APIs.
/// The messages are the texts the presentation layer shows to the
/// end user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeviceLocationError {
    #[error("Permission denied. Please allow location access.")]
    PermissionDenied,
    #[error("Location information unavailable.")]
    PositionUnavailable,
    #[error("Request timed out.")]
    Timeout,
    #[error("An unknown error occurred.")]
    Unknown,
}
