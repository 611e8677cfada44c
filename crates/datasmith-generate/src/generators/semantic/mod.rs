use datasmith_core::FieldKind;

use crate::generators::GeneratedValue;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

/// Identity, contact and location values backed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum SemanticGenerator {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Address { include_secondary: bool },
    City,
    State { abbreviation: bool },
    Country,
    ZipCode { plus4: bool },
    Url,
    IpAddress,
    Uuid,
}

impl SemanticGenerator {
    pub fn from_kind(kind: &FieldKind, options: &OptionReader<'_>) -> Option<Self> {
        let generator = match kind {
            FieldKind::FirstName => Self::FirstName,
            FieldKind::LastName => Self::LastName,
            FieldKind::FullName => Self::FullName,
            FieldKind::Email => Self::Email,
            FieldKind::Phone => Self::Phone,
            FieldKind::Address => Self::Address {
                include_secondary: options.bool_or("includeSecondary", false),
            },
            FieldKind::City => Self::City,
            FieldKind::State => Self::State {
                abbreviation: options.bool_or("abbreviation", false)
                    || options
                        .get_str("format")
                        .is_some_and(|format| format.eq_ignore_ascii_case("abbreviation")),
            },
            FieldKind::Country => Self::Country,
            FieldKind::ZipCode => Self::ZipCode {
                plus4: options.bool_or("plus4", false)
                    || options.get_str("format").is_some_and(is_plus4_format),
            },
            FieldKind::Url => Self::Url,
            FieldKind::IpAddress => Self::IpAddress,
            FieldKind::Uuid => Self::Uuid,
            _ => return None,
        };
        Some(generator)
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let key = ctx.key();
        let value = match self {
            Self::FirstName => provider.first_name(&key),
            Self::LastName => provider.last_name(&key),
            Self::FullName => provider.full_name(&key),
            Self::Email => provider.email(&key),
            Self::Phone => provider.phone_number(&key),
            Self::Address { include_secondary } => {
                let street = provider.postal_address(&key);
                if *include_secondary {
                    let unit = provider
                        .one_of(&ctx.variant("secondary-kind"), SECONDARY_UNITS)
                        .copied()
                        .unwrap_or("Apt.");
                    let number = provider.int(&ctx.variant("secondary"), 100, 999);
                    format!("{street}, {unit} {number}")
                } else {
                    street
                }
            }
            Self::City => provider.city(&key),
            Self::State { abbreviation } => {
                let name = provider.state(&key);
                if *abbreviation {
                    state_abbreviation(&name)
                } else {
                    name
                }
            }
            Self::Country => provider.country(&key),
            Self::ZipCode { plus4 } => {
                let zip = provider.int(&key, 0, 99_999);
                if *plus4 {
                    let suffix = provider.int(&ctx.variant("plus4"), 0, 9_999);
                    format!("{zip:05}-{suffix:04}")
                } else {
                    format!("{zip:05}")
                }
            }
            Self::Url => provider.url(&key),
            Self::IpAddress => provider.ipv4(&key),
            Self::Uuid => provider.uuid(&key),
        };
        GeneratedValue::Text(value)
    }
}

fn is_plus4_format(format: &str) -> bool {
    let normalized: String = format
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    matches!(
        normalized.as_str(),
        "zip+4" | "zip4" | "plus4" | "+4" | "#####-####" | "00000-0000"
    )
}

/// Two-letter postal abbreviation for a US state name.
///
/// Names outside the table fall back to their first two letters.
pub fn state_abbreviation(name: &str) -> String {
    STATE_ABBREVIATIONS
        .iter()
        .find(|(state, _)| state.eq_ignore_ascii_case(name.trim()))
        .map(|(_, abbreviation)| abbreviation.to_string())
        .unwrap_or_else(|| {
            name.chars()
                .filter(|ch| ch.is_alphabetic())
                .take(2)
                .flat_map(char::to_uppercase)
                .collect()
        })
}

const SECONDARY_UNITS: &[&str] = &["Apt.", "Suite", "Unit"];

const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];
