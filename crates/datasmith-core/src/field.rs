use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Free-form options attached to a field (`min`, `max`, `format`, ...).
///
/// Values may be strings, numbers, booleans, nulls or arrays; generators read
/// them through a tolerant normalizer rather than trusting their JSON type.
pub type FieldOptions = serde_json::Map<String, Value>;

/// A single declared column of a synthetic dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldDefinition {
    /// Stable identity; the seed-derivation key for this field.
    pub id: String,
    /// Display and export key; rows are keyed by this name.
    pub name: String,
    /// Kind tag (e.g. `Number`, `Full Name`, `Reference`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Kind-specific options.
    #[serde(default)]
    pub options: FieldOptions,
}

impl FieldDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            options: FieldOptions::new(),
        }
    }

    /// Builder-style option setter, mostly useful in tests and fixtures.
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Parsed kind of this field.
    pub fn field_kind(&self) -> FieldKind {
        FieldKind::parse(&self.kind)
    }

    /// Non-null option under `key` or its snake_case spelling, with the
    /// spelling that matched.
    pub fn option_entry(&self, key: &str) -> Option<(&str, &Value)> {
        self.options
            .get_key_value(key)
            .or_else(|| self.options.get_key_value(&snake_case(key)))
            .filter(|(_, value)| !value.is_null())
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Source field name for reference fields.
    pub fn reference_source(&self) -> Option<&str> {
        self.option_entry("sourceField")
            .and_then(|(_, value)| value.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Closed set of field kinds understood by the engine.
///
/// Tags are matched case-insensitively and ignore spaces, hyphens and
/// underscores, so `"Full Name"`, `"full_name"` and `"fullname"` are equal.
/// Anything else lands in [`FieldKind::Unknown`] and is served by the
/// fallback generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Number,
    Decimal,
    Boolean,
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Address,
    City,
    State,
    Country,
    ZipCode,
    Company,
    Url,
    IpAddress,
    Uuid,
    CharacterSequence,
    CarMake,
    CarModel,
    ProductCategory,
    AppName,
    Department,
    Color,
    CustomList,
    Vin,
    Sku,
    AppBundleId,
    AppVersion,
    Price,
    Date,
    FutureDate,
    PastDate,
    DateOfBirth,
    Time,
    Reference,
    AiGenerated,
    Unknown(String),
}

impl FieldKind {
    /// Every named kind, in catalog order.
    pub const ALL: &'static [FieldKind] = &[
        FieldKind::Number,
        FieldKind::Decimal,
        FieldKind::Boolean,
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::FullName,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Address,
        FieldKind::City,
        FieldKind::State,
        FieldKind::Country,
        FieldKind::ZipCode,
        FieldKind::Company,
        FieldKind::Url,
        FieldKind::IpAddress,
        FieldKind::Uuid,
        FieldKind::CharacterSequence,
        FieldKind::CarMake,
        FieldKind::CarModel,
        FieldKind::ProductCategory,
        FieldKind::AppName,
        FieldKind::Department,
        FieldKind::Color,
        FieldKind::CustomList,
        FieldKind::Vin,
        FieldKind::Sku,
        FieldKind::AppBundleId,
        FieldKind::AppVersion,
        FieldKind::Price,
        FieldKind::Date,
        FieldKind::FutureDate,
        FieldKind::PastDate,
        FieldKind::DateOfBirth,
        FieldKind::Time,
        FieldKind::Reference,
        FieldKind::AiGenerated,
    ];

    pub fn parse(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-' | '.' | '/'))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "number" | "integer" | "int" => Self::Number,
            "decimal" | "float" => Self::Decimal,
            "boolean" | "bool" => Self::Boolean,
            "firstname" => Self::FirstName,
            "lastname" => Self::LastName,
            "fullname" | "name" => Self::FullName,
            "email" | "emailaddress" => Self::Email,
            "phone" | "phonenumber" => Self::Phone,
            "address" | "streetaddress" | "postaladdress" => Self::Address,
            "city" => Self::City,
            "state" => Self::State,
            "country" => Self::Country,
            "zipcode" | "zip" | "postalcode" => Self::ZipCode,
            "company" | "companyname" => Self::Company,
            "url" => Self::Url,
            "ipaddress" | "ipv4" | "ip" => Self::IpAddress,
            "uuid" | "guid" => Self::Uuid,
            "charactersequence" | "sequence" => Self::CharacterSequence,
            "carmake" => Self::CarMake,
            "carmodel" => Self::CarModel,
            "productcategory" => Self::ProductCategory,
            "appname" => Self::AppName,
            "department" => Self::Department,
            "color" | "colour" => Self::Color,
            "customlist" => Self::CustomList,
            "vin" => Self::Vin,
            "sku" => Self::Sku,
            "appbundleid" | "bundleid" => Self::AppBundleId,
            "appversion" | "version" => Self::AppVersion,
            "price" => Self::Price,
            "date" => Self::Date,
            "futuredate" => Self::FutureDate,
            "pastdate" => Self::PastDate,
            "dateofbirth" | "dob" | "birthdate" => Self::DateOfBirth,
            "time" => Self::Time,
            "reference" => Self::Reference,
            "aigenerated" | "ai" => Self::AiGenerated,
            _ => Self::Unknown(value.to_string()),
        }
    }

    /// Canonical display tag.
    pub fn as_tag(&self) -> &str {
        match self {
            Self::Number => "Number",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Address => "Address",
            Self::City => "City",
            Self::State => "State",
            Self::Country => "Country",
            Self::ZipCode => "Zip Code",
            Self::Company => "Company",
            Self::Url => "URL",
            Self::IpAddress => "IP Address",
            Self::Uuid => "UUID",
            Self::CharacterSequence => "Character Sequence",
            Self::CarMake => "Car Make",
            Self::CarModel => "Car Model",
            Self::ProductCategory => "Product Category",
            Self::AppName => "App Name",
            Self::Department => "Department",
            Self::Color => "Color",
            Self::CustomList => "Custom List",
            Self::Vin => "VIN",
            Self::Sku => "SKU",
            Self::AppBundleId => "App Bundle ID",
            Self::AppVersion => "App Version",
            Self::Price => "Price",
            Self::Date => "Date",
            Self::FutureDate => "Future Date",
            Self::PastDate => "Past Date",
            Self::DateOfBirth => "Date of Birth",
            Self::Time => "Time",
            Self::Reference => "Reference",
            Self::AiGenerated => "AI Generated",
            Self::Unknown(tag) => tag.as_str(),
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference)
    }

    /// Kinds with no deterministic generator.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::AiGenerated | Self::Unknown(_))
    }
}

/// `minAge` -> `min_age`; option keys are accepted in either spelling.
pub fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl From<&str> for FieldKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_loosely() {
        assert_eq!(FieldKind::parse("Full Name"), FieldKind::FullName);
        assert_eq!(FieldKind::parse("full_name"), FieldKind::FullName);
        assert_eq!(FieldKind::parse("DATE-OF-BIRTH"), FieldKind::DateOfBirth);
        assert_eq!(FieldKind::parse("App Bundle ID"), FieldKind::AppBundleId);
        assert_eq!(
            FieldKind::parse("Hologram"),
            FieldKind::Unknown("Hologram".to_string())
        );
    }

    #[test]
    fn option_entry_reports_the_matching_spelling() {
        let field = FieldDefinition::new("f1", "dob", "Date of Birth")
            .with_option("min_age", 21)
            .with_option("maxAge", Value::Null);
        let (key, value) = field.option_entry("minAge").expect("alias");
        assert_eq!(key, "min_age");
        assert_eq!(value.as_i64(), Some(21));
        assert!(field.option_entry("maxAge").is_none());
        assert_eq!(snake_case("sourceField"), "source_field");
    }

    #[test]
    fn canonical_tags_round_trip() {
        for kind in FieldKind::ALL {
            assert_eq!(&FieldKind::parse(kind.as_tag()), kind);
        }
    }
}
