use super::value_objects::{CssColor, OrderStatus, RawAmount};
use crate::domain::attributes::{AttributeSource, parse_count, parse_leading_int};
use crate::domain::errors::{AppError, AppResult};
use crate::domain::logging::LogComponent;
use crate::log_debug;

/// Marker attribute on the element carrying the order counters.
pub const ORDER_STATS_MARKER: &str = "data-order-stats";
/// Marker attribute on the element carrying the earnings arrays.
pub const EARNINGS_MARKER: &str = "data-earnings-data";
pub const MONTHS_ATTRIBUTE: &str = "data-months";
pub const EARNINGS_ATTRIBUTE: &str = "data-earnings";

/// A present counter that became zero without being written as zero.
fn coerced_to_zero(raw: &str, value: u64) -> bool {
    value == 0 && parse_leading_int(raw) != Some(0)
}

/// Per-status order counters for one dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrderStatusCounts {
    pub pending: u64,
    pub in_progress: u64,
    pub completed: u64,
    pub cancelled: u64,
}

impl OrderStatusCounts {
    pub fn new(pending: u64, in_progress: u64, completed: u64, cancelled: u64) -> Self {
        Self { pending, in_progress, completed, cancelled }
    }

    /// Read every counter independently. Malformed counters become zero.
    pub fn from_attributes(source: &impl AttributeSource) -> Self {
        let mut counts = Self::default();
        for status in OrderStatus::display_order() {
            let name = status.attribute();
            let raw = source.attribute(&name);
            let value = parse_count(raw.as_deref());
            if let Some(raw) = raw.as_deref().filter(|raw| coerced_to_zero(raw, value)) {
                log_debug!(
                    LogComponent::Domain("OrderStats"),
                    "{}={:?} is not a count, using 0",
                    name,
                    raw
                );
            }
            *counts.slot_mut(status) = value;
        }
        counts
    }

    pub fn get(&self, status: OrderStatus) -> u64 {
        match status {
            OrderStatus::Completed => self.completed,
            OrderStatus::InProgress => self.in_progress,
            OrderStatus::Pending => self.pending,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    fn slot_mut(&mut self, status: OrderStatus) -> &mut u64 {
        match status {
            OrderStatus::Completed => &mut self.completed,
            OrderStatus::InProgress => &mut self.in_progress,
            OrderStatus::Pending => &mut self.pending,
            OrderStatus::Cancelled => &mut self.cancelled,
        }
    }

    pub fn total(&self) -> u64 {
        OrderStatus::display_order().fold(0u64, |acc, status| acc.saturating_add(self.get(status)))
    }

    /// Category series in the fixed display order.
    pub fn series(&self) -> CategorySeries {
        CategorySeries {
            points: OrderStatus::display_order()
                .map(|status| CategoryPoint {
                    label: status.to_string(),
                    value: self.get(status),
                    color: status.color(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPoint {
    pub label: String,
    pub value: u64,
    pub color: CssColor,
}

/// Ordered category → count series for a proportion chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySeries {
    pub points: Vec<CategoryPoint>,
}

impl CategorySeries {
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.label.clone()).collect()
    }

    pub fn values(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn colors(&self) -> Vec<CssColor> {
        self.points.iter().map(|p| p.color).collect()
    }
}

/// Month labels paired with earnings, one entry per month.
#[derive(Debug, Clone, PartialEq)]
pub struct EarningsSeries {
    months: Vec<String>,
    earnings: Vec<f64>,
}

impl EarningsSeries {
    pub fn new(months: Vec<String>, earnings: Vec<f64>) -> AppResult<Self> {
        if months.len() != earnings.len() {
            return Err(AppError::LengthMismatch {
                labels: months.len(),
                values: earnings.len(),
            });
        }
        Ok(Self { months, earnings })
    }

    /// Decode the two JSON arrays the server embeds in the page.
    pub fn decode(months_json: &str, earnings_json: &str) -> AppResult<Self> {
        let months: Vec<String> = serde_json::from_str(months_json).map_err(|e| AppError::MalformedData {
            attribute: MONTHS_ATTRIBUTE,
            reason: e.to_string(),
        })?;

        let raw: Vec<RawAmount> = serde_json::from_str(earnings_json).map_err(|e| AppError::MalformedData {
            attribute: EARNINGS_ATTRIBUTE,
            reason: e.to_string(),
        })?;

        let earnings = raw
            .iter()
            .enumerate()
            .map(|(index, amount)| {
                amount.to_amount().ok_or_else(|| AppError::MalformedData {
                    attribute: EARNINGS_ATTRIBUTE,
                    reason: format!("entry {} is not a number: {:?}", index, amount),
                })
            })
            .collect::<AppResult<Vec<f64>>>()?;

        Self::new(months, earnings)
    }

    pub fn from_attributes(source: &impl AttributeSource) -> AppResult<Self> {
        let months = source
            .attribute(MONTHS_ATTRIBUTE)
            .ok_or(AppError::MissingAttribute(MONTHS_ATTRIBUTE))?;
        let earnings = source
            .attribute(EARNINGS_ATTRIBUTE)
            .ok_or(AppError::MissingAttribute(EARNINGS_ATTRIBUTE))?;
        Self::decode(&months, &earnings)
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn earnings(&self) -> &[f64] {
        &self.earnings
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}
