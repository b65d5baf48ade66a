use derive_more::{Display, Into};

use crate::domain::attributes::parse_leading_int;

pub const STAR: &str = "⭐";

/// Value Object - a review rating between 1 and 5 stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Into)]
#[display(fmt = "{}/5", _0)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: i64) -> Option<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    /// Interpret a form control value; anything outside 1..=5 is no rating.
    pub fn parse(raw: &str) -> Option<Self> {
        parse_leading_int(raw).and_then(Self::new)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Stars followed by the numeric fraction, e.g. `⭐⭐⭐ (3/5)`.
    pub fn render(&self) -> String {
        format!("{} ({})", STAR.repeat(usize::from(self.0)), self)
    }
}

/// Text shown next to the rating control; empty when there is no rating.
pub fn rating_display_text(raw: Option<&str>) -> String {
    raw.and_then(Rating::parse)
        .map(|rating| rating.render())
        .unwrap_or_default()
}
