use crate::application::chart_config;
use crate::application::{MountOutcome, PageComponent};
use crate::domain::dashboard::{ORDER_STATS_MARKER, OrderStatusCounts};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::infrastructure::chart_js::{self, ChartHandle};
use crate::infrastructure::dom::{self, ElementAttributes};
use crate::log_debug;

/// Doughnut chart of the seller's orders by status.
pub struct OrderStatusChart {
    target_id: String,
    chart: Option<ChartHandle>,
}

impl OrderStatusChart {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self { target_id: target_id.into(), chart: None }
    }
}

impl PageComponent for OrderStatusChart {
    fn name(&self) -> &'static str {
        "order-status-chart"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let Some((target, container)) = dom::locate_bound_target(&self.target_id, ORDER_STATS_MARKER)? else {
            return Ok(MountOutcome::Absent);
        };

        let counts = OrderStatusCounts::from_attributes(&ElementAttributes::new(&container));
        log_debug!(
            LogComponent::Presentation("OrderStatusChart"),
            "binding {} orders: {:?}",
            counts.total(),
            counts
        );

        self.chart = Some(chart_js::render(&target, &chart_config::order_status_chart(&counts))?);
        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}
