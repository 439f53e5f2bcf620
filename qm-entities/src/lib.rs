#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # qm-entities
//!
//! Reusable, agnostic domain entities for QuickMaps.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod api_key;
pub mod device;
pub mod geo;
pub mod geocode;
pub mod route;
pub mod viewport;
