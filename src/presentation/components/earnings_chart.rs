use crate::application::chart_config;
use crate::application::{MountOutcome, PageComponent};
use crate::domain::dashboard::{EARNINGS_MARKER, EarningsSeries};
use crate::domain::errors::AppResult;
use crate::domain::logging::LogComponent;
use crate::infrastructure::chart_js::{self, ChartHandle};
use crate::infrastructure::dom::{self, ElementAttributes};
use crate::log_debug;

/// Line chart of earnings per month.
///
/// Undecodable or mismatched arrays surface as an error from `mount`; the
/// page controller logs it and carries on with the other components.
pub struct EarningsChart {
    target_id: String,
    chart: Option<ChartHandle>,
}

impl EarningsChart {
    pub fn new(target_id: impl Into<String>) -> Self {
        Self { target_id: target_id.into(), chart: None }
    }
}

impl PageComponent for EarningsChart {
    fn name(&self) -> &'static str {
        "earnings-chart"
    }

    fn mount(&mut self) -> AppResult<MountOutcome> {
        let Some((target, container)) = dom::locate_bound_target(&self.target_id, EARNINGS_MARKER)? else {
            return Ok(MountOutcome::Absent);
        };

        let series = EarningsSeries::from_attributes(&ElementAttributes::new(&container))?;
        log_debug!(
            LogComponent::Presentation("EarningsChart"),
            "binding {} months",
            series.len()
        );

        self.chart = Some(chart_js::render(&target, &chart_config::earnings_chart(&series))?);
        Ok(MountOutcome::Mounted)
    }

    fn dispose(&mut self) {
        if let Some(chart) = self.chart.take() {
            chart.destroy();
        }
    }
}
