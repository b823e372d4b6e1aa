//! Shared wire types for the device catalog.
//!
//! These types cross the boundary between the catalog server (which loads
//! devices from disk and serves them as JSON) and the browser client (which
//! lists and filters them).
//!
//! # Modules
//! - [`device`] - Device, product and product line types

pub mod device;

pub use device::{Device, Line, Product};
