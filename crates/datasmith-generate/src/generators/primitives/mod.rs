use crate::generators::GeneratedValue;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

const DEFAULT_INT_MIN: i64 = 1;
const DEFAULT_INT_MAX: i64 = 1000;
const DEFAULT_FLOAT_MIN: f64 = 0.0;
const DEFAULT_FLOAT_MAX: f64 = 1000.0;
const DEFAULT_PRECISION: i64 = 2;
const MAX_PRECISION: i64 = 10;
const MAX_SEQUENCE_WIDTH: i64 = 32;

/// Integer in `[min, max]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberGenerator {
    min: i64,
    max: i64,
}

impl NumberGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        let (min, max) = options.i64_range("min", "max", (DEFAULT_INT_MIN, DEFAULT_INT_MAX));
        Self { min, max }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        GeneratedValue::Int(provider.int(&ctx.key(), self.min, self.max))
    }
}

/// Float in `[min, max]` rounded to `precision` places.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalGenerator {
    min: f64,
    max: f64,
    precision: u32,
}

impl DecimalGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        let (min, max) =
            options.f64_range("min", "max", (DEFAULT_FLOAT_MIN, DEFAULT_FLOAT_MAX));
        let precision = options
            .get_i64("precision")
            .or_else(|| options.get_f64("step").and_then(step_to_precision))
            .unwrap_or(DEFAULT_PRECISION)
            .clamp(0, MAX_PRECISION) as u32;
        Self {
            min,
            max,
            precision,
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        GeneratedValue::Float(provider.float(&ctx.key(), self.min, self.max, self.precision))
    }
}

// A step of 0.01 means two decimal places.
fn step_to_precision(step: f64) -> Option<i64> {
    (step > 0.0).then(|| (-step.log10()).round().max(0.0) as i64)
}

/// `prefix + (start_at + row_index)`, optionally zero-padded.
///
/// A pure function of the row index; the seed is never consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceGenerator {
    prefix: String,
    start_at: i64,
    width: usize,
    pad_zeros: bool,
}

impl SequenceGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        Self {
            prefix: options.get_str("prefix").unwrap_or_default().to_string(),
            start_at: options.i64_or("startAt", 1),
            width: options.i64_or("length", 0).clamp(0, MAX_SEQUENCE_WIDTH) as usize,
            pad_zeros: options.bool_or("padZeros", false),
        }
    }

    pub fn value_at(&self, row_index: u64) -> String {
        let offset = i64::try_from(row_index).unwrap_or(i64::MAX);
        let number = self.start_at.saturating_add(offset);
        if self.pad_zeros && self.width > 0 {
            format!("{}{number:0width$}", self.prefix, width = self.width)
        } else {
            format!("{}{number}", self.prefix)
        }
    }

    pub fn generate(&self, ctx: SeedContext<'_>) -> GeneratedValue {
        GeneratedValue::Text(self.value_at(ctx.row_index))
    }
}
