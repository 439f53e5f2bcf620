pub mod device;
pub mod geocode;
