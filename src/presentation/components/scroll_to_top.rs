use leptos::ev;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::application::{MountOutcome, PageComponent};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::domain::page::scroll_control_visible;
use crate::event_utils::{EventSubscription, listen};
use crate::infrastructure::dom;
use crate::log_warn;

pub const BUTTON_ID: &str = "scrollToTopBtn";
const BUTTON_CLASSES: &str = "btn btn-primary shadow-lg";
const BUTTON_LABEL: &str = "▲";
const BUTTON_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; display: none; z-index: 1000; \
                            border-radius: 50%; width: 45px; height: 45px; font-size: 1.2rem; padding: 0;";

/// Floating button that appears after scrolling down and returns to the top.
pub struct ScrollToTop {
    threshold_px: i32,
    button: Option<HtmlElement>,
    subscriptions: Vec<EventSubscription>,
}

impl ScrollToTop {
    pub fn new(threshold_px: i32) -> Self {
        Self { threshold_px, button: None, subscriptions: Vec::new() }
    }

    fn create_button(document: &web_sys::Document) -> AppResult<HtmlElement> {
        let button = document
            .create_element("button")
            .map_err(|e| AppError::browser("createElement(button)", e))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| AppError::BrowserApi("button is not an HtmlElement".to_string()))?;
        button.set_id(BUTTON_ID);
        button.set_class_name(BUTTON_CLASSES);
        button.set_text_content(Some(BUTTON_LABEL));
        button.style().set_css_text(BUTTON_STYLE);
        Ok(button)
    }
}

fn sync_visibility(document: &web_sys::Document, button: &HtmlElement, threshold_px: i32) {
    let body_offset = document.body().map(|body| body.scroll_top()).unwrap_or(0);
    let document_offset = document.document_element().map(|root| root.scroll_top()).unwrap_or(0);
    let display = if scroll_control_visible(body_offset, document_offset, threshold_px) {
        "block"
    } else {
        "none"
    };
    if let Err(e) = dom::set_display(button, display) {
        log_warn!(LogComponent::Presentation("ScrollToTop"), "{}", e);
    }
}

impl PageComponent for ScrollToTop {
    fn name(&self) -> &'static str {
        "scroll-to-top"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let window = dom::window()?;
        let document = dom::document()?;
        let body = document
            .body()
            .ok_or_else(|| AppError::BrowserApi("document has no body".to_string()))?;

        let button = Self::create_button(&document)?;
        body.append_child(&button)
            .map_err(|e| AppError::browser("appendChild", e))?;
        self.button = Some(button.clone());

        let threshold_px = self.threshold_px;
        let scroll_button = button.clone();
        let scroll_document = document.clone();
        self.subscriptions.push(listen(&window, ev::scroll, move |_| {
            sync_visibility(&scroll_document, &scroll_button, threshold_px);
        })?);

        let click_window = window.clone();
        self.subscriptions.push(listen(&button, ev::click, move |_| {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            click_window.scroll_to_with_scroll_to_options(&options);
        })?);

        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        self.subscriptions.clear();
        if let Some(button) = self.button.take() {
            button.remove();
        }
    }
}
