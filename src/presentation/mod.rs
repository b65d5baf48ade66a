pub mod components;
pub mod wasm_api;

pub use wasm_api::{MarketplacePage, boot_page, dispose_page};
