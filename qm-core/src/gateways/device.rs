use std::time::Duration;

use qm_entities::{device::DeviceLocationError, geo::MapPoint};

/// Options for a single-shot device location request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionOptions {
    pub high_accuracy: bool,
    /// How long the device may take before the request fails with
    /// [`DeviceLocationError::Timeout`].
    pub timeout: Duration,
    /// Maximum age of a cached position the device may report
    /// instead of acquiring a fresh one.
    pub max_age: Duration,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

/// Single-shot access to the position reported by the device.
///
/// At most one request may be outstanding at a time. Callers are
/// expected to block the triggering control while a request is in
/// flight and to release it on both outcomes.
pub trait DeviceLocationGateway {
    fn current_position(
        &self,
        opts: &PositionOptions,
    ) -> Result<MapPoint, DeviceLocationError>;
}
