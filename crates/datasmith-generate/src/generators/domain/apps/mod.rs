use crate::generators::GeneratedValue;
use crate::generators::domain::sanitize_identifier;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

/// Reverse-DNS bundle id from two sanitized draws: `{domain}.{org}.{app}`.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleIdGenerator {
    domain: String,
}

impl BundleIdGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        let domain = options
            .get_str("domain")
            .map(sanitize_identifier)
            .filter(|domain| !domain.is_empty())
            .unwrap_or_else(|| "com".to_string());
        Self { domain }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let org = segment(&provider.last_name(&ctx.variant("org")), "company");
        let app = segment(&provider.word(&ctx.variant("app")), "app");
        GeneratedValue::Text(format!("{}.{org}.{app}", self.domain))
    }
}

// Bundle segments must start with a letter.
fn segment(raw: &str, fallback: &str) -> String {
    let value = sanitize_identifier(raw);
    match value.chars().next() {
        None => fallback.to_string(),
        Some(first) if first.is_ascii_digit() => format!("a{value}"),
        Some(_) => value,
    }
}

/// Semantic version `major.minor.patch` from three bounded draws.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionGenerator {
    max_major: i64,
    max_minor: i64,
    max_patch: i64,
}

impl VersionGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        Self {
            max_major: options.i64_or("maxMajor", 9).max(0),
            max_minor: options.i64_or("maxMinor", 20).max(0),
            max_patch: options.i64_or("maxPatch", 50).max(0),
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let major = provider.int(&ctx.variant("major"), 0, self.max_major);
        let minor = provider.int(&ctx.variant("minor"), 0, self.max_minor);
        let patch = provider.int(&ctx.variant("patch"), 0, self.max_patch);
        GeneratedValue::Text(format!("{major}.{minor}.{patch}"))
    }
}

pub const APP_NAMES: &[&str] = &[
    "TaskFlow",
    "PocketLedger",
    "FitTrack",
    "ChatNest",
    "PhotoVault",
    "RouteWise",
    "MealPlanr",
    "StudyBuddy",
    "CloudNotes",
    "BeatBox",
    "ShopSmart",
    "SleepWell",
    "CodeSnap",
    "TripMate",
    "BudgetBee",
];
