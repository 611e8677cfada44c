use chrono::{DateTime, Duration, Months, Utc};

use crate::generators::GeneratedValue;
use crate::params::{OptionReader, parse_instant};
use crate::provider::SeededValues;
use crate::seed::SeedContext;

const DEFAULT_DATE_MIN: &str = "2020-01-01T00:00:00Z";
const DEFAULT_DATE_MAX: &str = "2030-12-31T23:59:59Z";
const DEFAULT_RELATIVE_DAYS: i64 = 365;
const MAX_RELATIVE_DAYS: i64 = 36_500;
const DEFAULT_MIN_AGE: i64 = 18;
const DEFAULT_MAX_AGE: i64 = 80;
const MAX_AGE: i64 = 150;

/// Output pattern for date kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    Iso,
    YearMonthDay,
    MonthDayYear,
    DayMonthYear,
}

impl DateFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|value| value.trim().to_ascii_uppercase()).as_deref() {
            Some("ISO") | Some("ISO8601") | Some("ISO-8601") => Self::Iso,
            Some("MM/DD/YYYY") => Self::MonthDayYear,
            Some("DD/MM/YYYY") => Self::DayMonthYear,
            _ => Self::YearMonthDay,
        }
    }

    fn render(self, iso: &str) -> String {
        let Some(instant) = parse_instant(iso) else {
            return iso.to_string();
        };
        match self {
            Self::Iso => iso.to_string(),
            Self::YearMonthDay => instant.format("%Y-%m-%d").to_string(),
            Self::MonthDayYear => instant.format("%m/%d/%Y").to_string(),
            Self::DayMonthYear => instant.format("%d/%m/%Y").to_string(),
        }
    }
}

/// Output pattern for the `Time` kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormat {
    HourMinute,
    HourMinuteSecond,
    TwelveHour,
}

impl TimeFormat {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("HH:mm:ss") => Self::HourMinuteSecond,
            Some(format) if format.to_ascii_lowercase().starts_with("hh:mm a") => {
                Self::TwelveHour
            }
            _ => Self::HourMinute,
        }
    }

    fn render(self, iso: &str) -> String {
        let Some(instant) = parse_instant(iso) else {
            return iso.to_string();
        };
        let pattern = match self {
            Self::HourMinute => "%H:%M",
            Self::HourMinuteSecond => "%H:%M:%S",
            Self::TwelveHour => "%I:%M %p",
        };
        instant.format(pattern).to_string()
    }
}

/// Absolute date within explicit or default bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct DateGenerator {
    min: DateTime<Utc>,
    max: DateTime<Utc>,
    format: DateFormat,
}

impl DateGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        let min = options
            .get_instant("min")
            .or_else(|| parse_instant(DEFAULT_DATE_MIN))
            .unwrap_or_default();
        let max = options
            .get_instant("max")
            .or_else(|| parse_instant(DEFAULT_DATE_MAX))
            .unwrap_or_default();
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        Self {
            min,
            max,
            format: DateFormat::parse(options.get_str("format")),
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let iso = provider.date_string(&ctx.key(), self.min, self.max);
        GeneratedValue::Text(self.format.render(&iso))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeOutput {
    Date(DateFormat),
    Time(TimeFormat),
}

/// Date or time drawn from a window fixed relative to the field anchor.
///
/// The window is computed once when the field is resolved, so every row of
/// the field shares it.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativeDateGenerator {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    output: RelativeOutput,
}

impl RelativeDateGenerator {
    /// `[anchor, anchor + days]`.
    pub fn future(anchor: DateTime<Utc>, options: &OptionReader<'_>) -> Self {
        let days = relative_days(options);
        Self {
            start: anchor,
            end: anchor + Duration::days(days),
            output: RelativeOutput::Date(DateFormat::parse(options.get_str("format"))),
        }
    }

    /// `[anchor - days, anchor]`.
    pub fn past(anchor: DateTime<Utc>, options: &OptionReader<'_>) -> Self {
        let days = relative_days(options);
        Self {
            start: anchor - Duration::days(days),
            end: anchor,
            output: RelativeOutput::Date(DateFormat::parse(options.get_str("format"))),
        }
    }

    /// Birth dates for ages in `[minAge, maxAge]` as of the anchor.
    pub fn birth(anchor: DateTime<Utc>, options: &OptionReader<'_>) -> Self {
        let (min_age, max_age) =
            options.i64_range("minAge", "maxAge", (DEFAULT_MIN_AGE, DEFAULT_MAX_AGE));
        let min_age = min_age.clamp(0, MAX_AGE);
        let max_age = max_age.clamp(0, MAX_AGE);
        Self {
            start: years_before(anchor, max_age),
            end: years_before(anchor, min_age),
            output: RelativeOutput::Date(DateFormat::parse(options.get_str("format"))),
        }
    }

    /// Any second of the anchor day.
    pub fn time_of_day(anchor: DateTime<Utc>, options: &OptionReader<'_>) -> Self {
        Self {
            start: anchor,
            end: anchor + Duration::seconds(86_399),
            output: RelativeOutput::Time(TimeFormat::parse(options.get_str("format"))),
        }
    }

    pub fn window(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start, self.end)
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let iso = provider.date_string(&ctx.key(), self.start, self.end);
        let value = match self.output {
            RelativeOutput::Date(format) => format.render(&iso),
            RelativeOutput::Time(format) => format.render(&iso),
        };
        GeneratedValue::Text(value)
    }
}

fn relative_days(options: &OptionReader<'_>) -> i64 {
    options
        .i64_or("days", DEFAULT_RELATIVE_DAYS)
        .clamp(1, MAX_RELATIVE_DAYS)
}

fn years_before(anchor: DateTime<Utc>, years: i64) -> DateTime<Utc> {
    let months = u32::try_from(years.saturating_mul(12)).unwrap_or(0);
    anchor
        .checked_sub_months(Months::new(months))
        .unwrap_or(anchor)
}
