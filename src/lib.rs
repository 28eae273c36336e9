//! Bookstore catalog service
//!
//! Books, per-book reviews and user accounts held in memory and served over HTTP.

pub mod modules;

pub use modules::*;

use axum::Router;
use bookstore_kernel::{settings::Settings, ModuleRegistry};

/// Registry with every service module registered
pub fn build_registry(settings: &Settings) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, settings);
    registry
}

/// The complete application router for the given settings
pub fn app(settings: &Settings) -> Router {
    bookstore_http::build_router(&build_registry(settings), settings)
}
