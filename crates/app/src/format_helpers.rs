//! Display formatting shared by the asset panels.
//!
//! Inputs are the raw wire strings (ISO-8601 dates, decimal prices); every
//! function degrades to the placeholder glyph rather than failing.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

/// Shown wherever a value is absent or cannot be displayed.
pub const PLACEHOLDER: &str = shared_ui::EMPTY_VALUE;

/// Format an ISO date string as "Jan 20, 2026".
///
/// Unparseable input is returned unchanged.
pub fn format_date_human(date_str: &str) -> String {
    match shared_types::parse_iso_date(date_str) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => date_str.to_string(),
    }
}

/// Format an ISO datetime as "Jan 20, 2026 9:35 PM".
///
/// Date-only input formats as a date.
pub fn format_datetime_human(date_str: &str) -> String {
    let trimmed = date_str.trim();
    let parsed = trimmed
        .get(..16)
        .and_then(|head| NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M").ok());
    match parsed {
        Some(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        None => format_date_human(trimmed),
    }
}

pub fn format_optional_date(date: Option<&str>) -> String {
    non_blank(date)
        .map(format_date_human)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

pub fn format_optional_datetime(date: Option<&str>) -> String {
    non_blank(date)
        .map(format_datetime_human)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Format a decimal price as US dollars: "$1,999.50", "-$12.00".
///
/// Absent or unparseable prices render as the placeholder.
pub fn format_price(price: Option<&str>) -> String {
    let Some(amount) = non_blank(price).and_then(|p| Decimal::from_str(p.trim()).ok()) else {
        return PLACEHOLDER.to_string();
    };
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Convert an activity action such as `ASSET_ASSIGNED` to "Asset Assigned".
pub fn format_action_label(action: &str) -> String {
    action
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Initials for an avatar fallback.
///
/// One token yields its first character, two or more yield the first
/// characters of the first and last tokens. No tokens yields `?`.
pub fn initials(display_name: Option<&str>) -> String {
    let tokens: Vec<&str> = display_name.unwrap_or("").split_whitespace().collect();
    let picked: Vec<&str> = match tokens.as_slice() {
        [] => return "?".to_string(),
        [only] => vec![*only],
        [first, .., last] => vec![*first, *last],
    };
    picked
        .iter()
        .filter_map(|t| t.chars().next())
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .collect()
}

/// The value itself, or the placeholder when it is absent or blank.
pub fn or_placeholder(value: Option<&str>) -> String {
    non_blank(value)
        .map(str::to_string)
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// `Some` only for values with visible content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Today's date in the browser's clock (UTC).
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
