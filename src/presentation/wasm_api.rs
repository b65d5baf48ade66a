use std::cell::RefCell;

use js_sys::Array;
use leptos::ev;
use wasm_bindgen::prelude::*;

use crate::application::PageController;
use crate::config::PageConfig;
use crate::domain::errors::AppResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::event_utils::{EventOptions, EventSubscription, listen_with_options};
use crate::infrastructure::dom;
use crate::log_debug;
use crate::presentation::components::standard_components;

thread_local! {
    static ACTIVE_PAGE: RefCell<Option<PageController>> = const { RefCell::new(None) };
    static PENDING_BOOT: RefCell<Option<EventSubscription>> = const { RefCell::new(None) };
}

fn build_controller(config: &PageConfig) -> PageController {
    get_logger().set_min_level(config.log_level);
    PageController::new(standard_components(config))
}

fn mount_active(config: &PageConfig) {
    let mut controller = build_controller(config);
    controller.mount_all();
    let previous = ACTIVE_PAGE.with(|slot| slot.borrow_mut().replace(controller));
    drop(previous);
}

fn boot(config: PageConfig) -> AppResult<()> {
    dispose_page();

    let document = dom::document()?;
    if document.ready_state() != "loading" {
        mount_active(&config);
        return Ok(());
    }

    log_debug!(LogComponent::Presentation("Boot"), "waiting for DOMContentLoaded");
    let subscription = listen_with_options(&document, ev::DOMContentLoaded, &EventOptions::once(), move |_| {
        mount_active(&config);
    })?;
    PENDING_BOOT.with(|slot| *slot.borrow_mut() = Some(subscription));
    Ok(())
}

/// Mount the standard page once the DOM is parsed, replacing any page
/// mounted earlier. `configJson` overrides selected defaults.
#[wasm_bindgen(js_name = bootPage)]
pub fn boot_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = PageConfig::from_json(config_json.as_deref())?;
    boot(config)?;
    Ok(())
}

/// Dispose the page mounted by `bootPage`, or cancel a boot still waiting
/// for the DOM.
#[wasm_bindgen(js_name = disposePage)]
pub fn dispose_page() {
    let pending = PENDING_BOOT.with(|slot| slot.borrow_mut().take());
    drop(pending);
    let active = ACTIVE_PAGE.with(|slot| slot.borrow_mut().take());
    if let Some(mut controller) = active {
        controller.dispose();
    }
}

/// Page controller handle for hosts that manage the page lifetime themselves.
#[wasm_bindgen]
pub struct MarketplacePage {
    controller: PageController,
}

#[wasm_bindgen]
impl MarketplacePage {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<MarketplacePage, JsValue> {
        let config = PageConfig::from_json(config_json.as_deref())?;
        Ok(Self { controller: build_controller(&config) })
    }

    /// Mount every component; returns the names of those that attached.
    pub fn mount(&mut self) -> Array {
        self.controller
            .mount_all()
            .mounted
            .iter()
            .map(|name| JsValue::from_str(name))
            .collect()
    }

    #[wasm_bindgen(js_name = mountedComponents)]
    pub fn mounted_components(&self) -> Array {
        self.controller
            .report()
            .map(|report| report.mounted.iter().map(|name| JsValue::from_str(name)).collect())
            .unwrap_or_default()
    }

    /// Names of components that failed, paired with their error messages.
    #[wasm_bindgen(js_name = failedComponents)]
    pub fn failed_components(&self) -> Array {
        self.controller
            .report()
            .map(|report| {
                report
                    .failed
                    .iter()
                    .map(|(name, error)| {
                        let pair = Array::new();
                        pair.push(&JsValue::from_str(name));
                        pair.push(&JsValue::from_str(&error.to_string()));
                        JsValue::from(pair)
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn dispose(&mut self) {
        self.controller.dispose();
    }
}
