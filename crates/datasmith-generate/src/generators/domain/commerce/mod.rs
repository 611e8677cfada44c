use crate::generators::GeneratedValue;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

const SKU_LETTERS: usize = 3;
const DEFAULT_PRICE_MIN: f64 = 1.0;
const DEFAULT_PRICE_MAX: f64 = 1000.0;
const PRICE_LIMIT: f64 = 1e12;

/// `{prefix}{WORD}-{####}`: a word fragment plus a numeric segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuGenerator {
    prefix: String,
}

impl SkuGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        Self {
            prefix: options.get_str("prefix").unwrap_or_default().to_string(),
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let word = provider.word(&ctx.variant("word"));
        let mut letters: String = word
            .chars()
            .filter(|ch| ch.is_ascii_alphabetic())
            .take(SKU_LETTERS)
            .map(|ch| ch.to_ascii_uppercase())
            .collect();
        while letters.len() < SKU_LETTERS {
            letters.push('X');
        }
        let number = provider.int(&ctx.variant("number"), 1000, 9999);
        GeneratedValue::Text(format!("{}{letters}-{number}", self.prefix))
    }
}

/// Price assembled from a whole-unit draw and a cents draw.
///
/// Bounds are clamped to `[-1e12, 1e12]`, which keeps the whole-unit draw
/// inside `i64` and the cents exact in an `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceGenerator {
    min: f64,
    max: f64,
}

impl PriceGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        let (min, max) = options.f64_range("min", "max", (DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX));
        Self {
            min: min.clamp(-PRICE_LIMIT, PRICE_LIMIT),
            max: max.clamp(-PRICE_LIMIT, PRICE_LIMIT),
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let whole = provider.int(
            &ctx.variant("whole"),
            self.min.floor() as i64,
            self.max.floor() as i64,
        );
        let cents = provider.int(&ctx.variant("cents"), 0, 99);
        let value = whole as f64 + cents as f64 / 100.0;
        let value = (value.clamp(self.min, self.max) * 100.0).round() / 100.0;
        GeneratedValue::Float(value)
    }
}

pub const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Home & Kitchen",
    "Books",
    "Clothing",
    "Sports & Outdoors",
    "Beauty",
    "Toys & Games",
    "Grocery",
    "Automotive",
    "Health",
    "Office Supplies",
    "Pet Supplies",
    "Garden",
    "Jewelry",
];

pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Sales",
    "Marketing",
    "Finance",
    "Human Resources",
    "Operations",
    "Customer Support",
    "Legal",
    "Product",
    "Quality Assurance",
];

pub const COLORS: &[&str] = &[
    "Red", "Orange", "Yellow", "Green", "Blue", "Indigo", "Violet", "Black", "White", "Gray",
    "Teal", "Maroon", "Navy", "Olive",
];

pub const COMPANY_NAMES: &[&str] = &[
    "Acme Corporation",
    "Globex Industries",
    "Initech",
    "Umbrella Logistics",
    "Stark Manufacturing",
    "Wayne Enterprises",
    "Hooli",
    "Vandelay Imports",
    "Soylent Foods",
    "Wonka Confections",
    "Cyberdyne Systems",
    "Tyrell Biotech",
    "Massive Dynamic",
    "Oscorp Labs",
    "Pied Piper",
    "Dunder Mifflin",
];
