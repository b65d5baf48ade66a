use wasm_bindgen::prelude::*;

use crate::domain::logging::{LogComponent, LogLevel};

pub mod application;
pub mod config;
pub mod domain;
pub mod event_utils;
pub mod infrastructure;
pub mod presentation;

pub use config::PageConfig;
pub use presentation::{MarketplacePage, boot_page, dispose_page};

/// Module start: panic hook, console logger and browser clock.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::ConsoleLogger::new(LogLevel::build_default()));
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    log_info!(LogComponent::Presentation("Initialize"), "marketplace page runtime loaded");
}
