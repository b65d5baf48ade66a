//! Bridge to the Chart.js global loaded by the host page.

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::application::chart_config::ChartConfig;
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::log_warn;

#[wasm_bindgen]
extern "C" {
    type Chart;

    #[wasm_bindgen(constructor, catch)]
    fn new(target: &Element, config: &JsValue) -> Result<Chart, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn destroy(this: &Chart) -> Result<(), JsValue>;
}

/// A live chart instance. Destroyed explicitly or when dropped.
pub struct ChartHandle {
    chart: Option<Chart>,
}

impl ChartHandle {
    pub fn destroy(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(chart) = self.chart.take() {
            if let Err(e) = chart.destroy() {
                log_warn!(
                    LogComponent::Infrastructure("ChartJs"),
                    "{}",
                    AppError::browser("Chart.destroy", e)
                );
            }
        }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Hand a declarative chart description to Chart.js.
pub fn render(target: &Element, config: &ChartConfig) -> AppResult<ChartHandle> {
    let json = serde_json::to_string(config).map_err(|e| AppError::Rendering(e.to_string()))?;
    let js_config = js_sys::JSON::parse(&json).map_err(|e| AppError::browser("JSON.parse", e))?;
    let chart = Chart::new(target, &js_config)
        .map_err(|e| AppError::Rendering(AppError::browser("new Chart", e).to_string()))?;
    Ok(ChartHandle { chart: Some(chart) })
}
