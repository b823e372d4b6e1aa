//! Device Catalog
//!
//! A browser device listing with a text search and a product line filter,
//! both kept in the URL so filtered views can be shared.
//!
//! This library provides:
//! - Device filtering (text query + product line selection)
//! - Web UI (Dioxus fullstack: server render + WASM hydration)
//! - A small axum API serving the device catalog

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (shared between server SSR and WASM client)
pub mod app;

// Filtering logic (shared: used by the UI and the API)
pub mod filter;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod catalog;
#[cfg(feature = "server")]
pub mod config;

pub use device_types::{Device, Line, Product};
