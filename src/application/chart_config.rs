//! Declarative chart descriptions, serialized as the JSON object Chart.js
//! takes as its second constructor argument.

use serde::{Serialize, Serializer};
use serde_json::Number;
use strum::AsRefStr;

use crate::domain::dashboard::{CssColor, EarningsSeries, OrderStatusCounts};

pub const ORDER_STATUS_TITLE: &str = "Order Status Distribution";
pub const EARNINGS_TITLE: &str = "Last 6 Months Earnings Trend";
pub const EARNINGS_LABEL: &str = "Monthly Earnings ($)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    Doughnut,
    Line,
}

impl Serialize for ChartKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(CssColor),
    PerPoint(Vec<CssColor>),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scales: Option<Scales>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub display: bool,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    pub y: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
}

impl ChartOptions {
    fn titled(text: &str) -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: None,
                title: Title { display: true, text: text.to_string() },
            },
            scales: None,
        }
    }
}

/// Doughnut chart of order counts in the fixed category order.
pub fn order_status_chart(counts: &OrderStatusCounts) -> ChartConfig {
    let series = counts.series();
    let mut options = ChartOptions::titled(ORDER_STATUS_TITLE);
    options.plugins.legend = Some(Legend { position: "bottom" });

    ChartConfig {
        kind: ChartKind::Doughnut,
        data: ChartData {
            labels: series.labels(),
            datasets: vec![Dataset {
                data: series.values().into_iter().map(Number::from).collect(),
                background_color: Some(ColorSpec::PerPoint(series.colors())),
                hover_offset: Some(4),
                ..Dataset::default()
            }],
        },
        options,
    }
}

/// Filled line chart of monthly earnings with the y axis pinned at zero.
pub fn earnings_chart(series: &EarningsSeries) -> ChartConfig {
    let mut options = ChartOptions::titled(EARNINGS_TITLE);
    options.scales = Some(Scales { y: Axis { begin_at_zero: true } });

    ChartConfig {
        kind: ChartKind::Line,
        data: ChartData {
            labels: series.months().to_vec(),
            datasets: vec![Dataset {
                label: Some(EARNINGS_LABEL.to_string()),
                // amounts are finite by construction
                data: series.earnings().iter().filter_map(|v| Number::from_f64(*v)).collect(),
                border_color: Some(CssColor::PRIMARY),
                background_color: Some(ColorSpec::Single(CssColor::PRIMARY_FILL)),
                tension: Some(0.3),
                fill: Some(true),
                ..Dataset::default()
            }],
        },
        options,
    }
}
