use derive_more::Display;
use serde::{Deserialize, Serialize, Serializer};
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

/// Value Object - order status category.
///
/// Declaration order is the display order of the summary chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, AsRefStr)]
pub enum OrderStatus {
    #[display(fmt = "Completed")]
    #[strum(serialize = "completed")]
    Completed,
    #[display(fmt = "In Progress")]
    #[strum(serialize = "in-progress")]
    InProgress,
    #[display(fmt = "Pending")]
    #[strum(serialize = "pending")]
    Pending,
    #[display(fmt = "Cancelled")]
    #[strum(serialize = "cancelled")]
    Cancelled,
}

impl OrderStatus {
    /// All categories in display order.
    pub fn display_order() -> impl Iterator<Item = OrderStatus> {
        Self::iter()
    }

    /// Attribute holding this category's counter, e.g. `data-in-progress`.
    pub fn attribute(&self) -> String {
        format!("data-{}", self.as_ref())
    }

    pub fn color(&self) -> CssColor {
        match self {
            OrderStatus::Completed => CssColor::SUCCESS,
            OrderStatus::InProgress => CssColor::INFO,
            OrderStatus::Pending => CssColor::WARNING,
            OrderStatus::Cancelled => CssColor::DANGER,
        }
    }
}

/// Value Object - a CSS colour literal handed verbatim to the chart library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}", _0)]
pub struct CssColor(&'static str);

impl CssColor {
    pub const SUCCESS: CssColor = CssColor("#28a745");
    pub const INFO: CssColor = CssColor("#17a2b8");
    pub const WARNING: CssColor = CssColor("#ffc107");
    pub const DANGER: CssColor = CssColor("#dc3545");
    pub const PRIMARY: CssColor = CssColor("#007bff");
    pub const PRIMARY_FILL: CssColor = CssColor("rgba(0, 123, 255, 0.1)");
}

impl Serialize for CssColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0)
    }
}

/// One earnings entry as it may appear in the page.
///
/// Decimal encoders on the server emit amounts as strings (`"1200.50"`),
/// plain encoders as numbers; both are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl RawAmount {
    pub fn to_amount(&self) -> Option<f64> {
        match self {
            RawAmount::Number(value) => Some(*value),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
        }
    }
}
