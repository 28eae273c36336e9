pub mod books;
pub mod users;

use std::time::Duration;

use bookstore_kernel::{settings::Settings, ModuleRegistry};

/// Register all service modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, settings: &Settings) {
    let async_delay = Duration::from_millis(settings.catalog.async_delay_ms);
    registry.register(books::create_module(async_delay));
    registry.register(users::create_module());
}
