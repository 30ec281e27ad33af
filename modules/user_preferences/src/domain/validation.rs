//! Field value validation for settings edits
//!
//! Strict checks used by the update engine. Initialization reuses them and falls
//! back to defaults on failure.

use crate::contract::{DateFormat, DomainKind, PreferencesError, TimeFormat};
use chrono::NaiveTime;
use serde_json::Value;

/// Upper bound of the sound volume range
pub const MAX_VOLUME: u8 = 100;

const TIME_OF_DAY_FORMAT: &str = "%H:%M";

/// Clamp a raw volume into `0..=100`
pub fn clamp_volume(raw: i64) -> u8 {
    // Lossless: the clamp keeps the value inside u8 range.
    raw.clamp(0, i64::from(MAX_VOLUME)) as u8
}

/// Parse an `HH:MM` 24-hour time of day
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw.trim(), TIME_OF_DAY_FORMAT).ok()
}

/// Render a time of day as `HH:MM`
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format(TIME_OF_DAY_FORMAT).to_string()
}

pub fn expect_bool(domain: DomainKind, key: &str, value: &Value) -> Result<bool, PreferencesError> {
    value
        .as_bool()
        .ok_or_else(|| PreferencesError::invalid_value(domain, key, format!("expected boolean, got {}", value)))
}

pub fn expect_string(domain: DomainKind, key: &str, value: &Value) -> Result<String, PreferencesError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| PreferencesError::invalid_value(domain, key, format!("expected string, got {}", value)))
}

pub fn expect_date_format(
    domain: DomainKind,
    key: &str,
    value: &Value,
) -> Result<DateFormat, PreferencesError> {
    let raw = expect_string(domain, key, value)?;
    DateFormat::parse(&raw).ok_or_else(|| {
        PreferencesError::invalid_value(
            domain,
            key,
            format!("'{}' is not one of MM/DD/YYYY, DD/MM/YYYY", raw),
        )
    })
}

pub fn expect_time_format(
    domain: DomainKind,
    key: &str,
    value: &Value,
) -> Result<TimeFormat, PreferencesError> {
    let raw = expect_string(domain, key, value)?;
    TimeFormat::parse(&raw).ok_or_else(|| {
        PreferencesError::invalid_value(domain, key, format!("'{}' is not one of 12h, 24h", raw))
    })
}

pub fn expect_time_of_day(
    domain: DomainKind,
    key: &str,
    value: &Value,
) -> Result<NaiveTime, PreferencesError> {
    let raw = expect_string(domain, key, value)?;
    parse_time_of_day(&raw).ok_or_else(|| {
        PreferencesError::invalid_value(domain, key, format!("'{}' is not a HH:MM time", raw))
    })
}

/// Accept any JSON number and clamp it; only non-numbers are rejected
pub fn expect_volume(domain: DomainKind, key: &str, value: &Value) -> Result<u8, PreferencesError> {
    if let Some(raw) = value.as_i64() {
        return Ok(clamp_volume(raw));
    }
    if let Some(raw) = value.as_f64() {
        let clamped = raw.round().clamp(0.0, f64::from(MAX_VOLUME));
        return Ok(clamped as u8);
    }
    Err(PreferencesError::invalid_value(
        domain,
        key,
        format!("expected number, got {}", value),
    ))
}
