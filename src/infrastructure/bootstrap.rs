//! Bridge to the Bootstrap UI toolkit loaded by the host page.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::domain::errors::{AppError, AppResult};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Alert;

    #[wasm_bindgen(constructor, js_namespace = bootstrap, catch)]
    fn new(element: &Element) -> Result<Alert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &Alert) -> Result<(), JsValue>;
}

/// Run the toolkit's close transition on an alert banner.
///
/// Fails when the toolkit is not loaded or rejects the element.
pub fn close_alert(element: &Element) -> AppResult<()> {
    let alert = Alert::new(element).map_err(|e| AppError::browser("bootstrap.Alert", e))?;
    alert.close().map_err(|e| AppError::browser("Alert.close", e))
}
