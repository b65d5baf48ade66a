//! Page components, one per behaviour, each owning what it creates.

mod active_links;
mod earnings_chart;
mod notice_dismissal;
mod order_status_chart;
mod rating_display;
mod scroll_to_top;

pub use active_links::ActiveLinks;
pub use earnings_chart::EarningsChart;
pub use notice_dismissal::NoticeDismissal;
pub use order_status_chart::OrderStatusChart;
pub use rating_display::{DISPLAY_CLASSES, RatingDisplay};
pub use scroll_to_top::{BUTTON_ID, ScrollToTop};

use crate::application::PageComponent;
use crate::config::PageConfig;

/// The standard marketplace page: chart binders first, then the helpers.
pub fn standard_components(config: &PageConfig) -> Vec<Box<dyn PageComponent>> {
    vec![
        Box::new(OrderStatusChart::new(config.order_chart_id.clone())),
        Box::new(EarningsChart::new(config.earnings_chart_id.clone())),
        Box::new(NoticeDismissal::new(
            config.notice_selector.clone(),
            config.notice_policy(),
            config.dismiss_delay_ms,
        )),
        Box::new(ScrollToTop::new(config.scroll_threshold_px)),
        Box::new(ActiveLinks::new(config.nav_link_selector.clone())),
        Box::new(RatingDisplay::new(config.rating_input_id.clone())),
    ]
}
