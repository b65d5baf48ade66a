use serde::Deserialize;

use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogLevel;
use crate::domain::page::NoticePolicy;

/// Runtime settings for one page, optionally supplied by the host page as
/// JSON. Missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct PageConfig {
    pub order_chart_id: String,
    pub earnings_chart_id: String,
    pub notice_selector: String,
    pub persistent_notice_classes: Vec<String>,
    pub dismiss_delay_ms: u32,
    pub scroll_threshold_px: i32,
    pub nav_link_selector: String,
    pub rating_input_id: String,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            order_chart_id: "orderStatusChart".to_string(),
            earnings_chart_id: "earningsTrendChart".to_string(),
            notice_selector: ".alert".to_string(),
            persistent_notice_classes: vec!["alert-danger".to_string(), "alert-warning".to_string()],
            dismiss_delay_ms: 5000,
            scroll_threshold_px: 300,
            nav_link_selector: ".navbar-nav .nav-link".to_string(),
            rating_input_id: "id_rating".to_string(),
            log_level: LogLevel::build_default(),
        }
    }
}

impl PageConfig {
    /// Parse host-supplied JSON; `None` or blank input means all defaults.
    pub fn from_json(raw: Option<&str>) -> AppResult<Self> {
        let config = match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            Some(json) => serde_json::from_str::<PageConfig>(json)
                .map_err(|e| AppError::Config(e.to_string()))?,
            None => PageConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        let required = [
            ("orderChartId", &self.order_chart_id),
            ("earningsChartId", &self.earnings_chart_id),
            ("noticeSelector", &self.notice_selector),
            ("navLinkSelector", &self.nav_link_selector),
            ("ratingInputId", &self.rating_input_id),
        ];
        if let Some((key, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AppError::Config(format!("{} must not be empty", key)));
        }
        if self.scroll_threshold_px < 0 {
            return Err(AppError::Config("scrollThresholdPx must not be negative".to_string()));
        }
        Ok(())
    }

    pub fn notice_policy(&self) -> NoticePolicy {
        NoticePolicy::new(self.persistent_notice_classes.clone())
    }
}
