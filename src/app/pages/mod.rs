//! Dioxus fullstack page components.

mod devices;

pub use devices::Devices;
