//! Reading values the server embeds into the page as element attributes.

use std::collections::HashMap;

/// Anything that can answer "what is the value of attribute `name`?".
///
/// DOM elements implement this in the infrastructure layer; plain maps
/// implement it so binding rules can be exercised without a browser.
pub trait AttributeSource {
    fn attribute(&self, name: &str) -> Option<String>;
}

impl AttributeSource for HashMap<&str, &str> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).map(|value| value.to_string())
    }
}

impl AttributeSource for HashMap<String, String> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Parse the integer prefix of `raw`.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// longest run of ASCII digits is taken: `"12abc"` is 12, `"3.7"` is 3,
/// `"abc"` and `""` have no value. Magnitudes saturate instead of wrapping.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .collect::<Vec<_>>();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.iter().fold(0i64, |acc, digit| {
        acc.saturating_mul(10).saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Counter rule: integer prefix, anything unusable (absent, non-numeric,
/// negative) becomes zero.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(parse_leading_int)
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}
