//! Tolerant option normalization.
//!
//! Options arrive from UIs and stored templates, so numbers are often
//! strings and flags are often `"true"`. Readers here never fail: anything
//! unparseable is treated as missing and the caller's default applies.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use datasmith_core::FieldOptions;
use datasmith_core::field::snake_case;

pub struct OptionReader<'a> {
    options: &'a FieldOptions,
}

impl<'a> OptionReader<'a> {
    pub fn new(options: &'a FieldOptions) -> Self {
        Self { options }
    }

    /// Look up `key`, falling back to its snake_case spelling.
    fn raw(&self, key: &str) -> Option<&'a Value> {
        self.options
            .get(key)
            .or_else(|| self.options.get(&snake_case(key)))
            .filter(|value| !value.is_null())
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.raw(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|value| value.is_finite())
    }

    pub fn get_i64(&self, key: &str) -> Option<i64> {
        match self.raw(key)? {
            Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().and_then(float_to_i64)),
            Value::String(text) => {
                let text = text.trim();
                text.parse::<i64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(float_to_i64))
            }
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.raw(key)? {
            Value::Bool(value) => Some(*value),
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Some(true),
                "false" | "0" | "no" => Some(false),
                _ => None,
            },
            Value::Number(number) => match number.as_i64() {
                Some(1) => Some(true),
                Some(0) => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Trimmed, non-empty string option.
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.raw(key)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }

    /// List option from an array or a comma-separated string.
    pub fn get_list(&self, key: &str) -> Vec<String> {
        match self.raw(key) {
            Some(Value::String(text)) => text
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.trim().to_string()),
                    Value::Number(number) => Some(number.to_string()),
                    Value::Bool(value) => Some(value.to_string()),
                    _ => None,
                })
                .filter(|item| !item.is_empty())
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn i64_or(&self, key: &str, default: i64) -> i64 {
        self.get_i64(key).unwrap_or(default)
    }

    pub fn f64_or(&self, key: &str, default: f64) -> f64 {
        self.get_f64(key).unwrap_or(default)
    }

    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get_bool(key).unwrap_or(default)
    }

    /// Integer range with defaults; an inverted pair is swapped.
    pub fn i64_range(&self, min_key: &str, max_key: &str, default: (i64, i64)) -> (i64, i64) {
        ordered(
            self.i64_or(min_key, default.0),
            self.i64_or(max_key, default.1),
        )
    }

    /// Float range with defaults; an inverted pair is swapped.
    pub fn f64_range(&self, min_key: &str, max_key: &str, default: (f64, f64)) -> (f64, f64) {
        let min = self.f64_or(min_key, default.0);
        let max = self.f64_or(max_key, default.1);
        if min > max { (max, min) } else { (min, max) }
    }

    /// Instant option accepting `YYYY-MM-DD`, RFC 3339 or a naive timestamp.
    pub fn get_instant(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get_str(key).and_then(parse_instant)
    }
}

pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").ok())
                .map(|naive| naive.and_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

fn ordered(min: i64, max: i64) -> (i64, i64) {
    if min > max { (max, min) } else { (min, max) }
}

fn float_to_i64(value: f64) -> Option<i64> {
    if value.is_finite() && value.abs() < i64::MAX as f64 {
        Some(value.round() as i64)
    } else {
        None
    }
}
