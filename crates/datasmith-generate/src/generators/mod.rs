use serde::{Serialize, Serializer};

use datasmith_core::{FieldDefinition, FieldKind};

use crate::anchor::field_anchor;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

pub mod domain;
pub mod fallback;
pub mod primitives;
pub mod semantic;
pub mod temporal;

use domain::ChoiceGenerator;
use domain::apps::{BundleIdGenerator, VersionGenerator};
use domain::automotive::VinGenerator;
use domain::commerce::{PriceGenerator, SkuGenerator};
use fallback::FallbackGenerator;
use primitives::{DecimalGenerator, NumberGenerator, SequenceGenerator};
use semantic::SemanticGenerator;
use temporal::{DateGenerator, RelativeDateGenerator};

/// Generated value for a field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Flat text form used by CSV and SQL exports; `Null` is empty.
    pub fn to_export_string(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
        }
    }
}

impl Serialize for GeneratedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            GeneratedValue::Null => serializer.serialize_none(),
            GeneratedValue::Bool(value) => serializer.serialize_bool(*value),
            GeneratedValue::Int(value) => serializer.serialize_i64(*value),
            GeneratedValue::Float(value) => serializer.serialize_f64(*value),
            GeneratedValue::Text(value) => serializer.serialize_str(value),
        }
    }
}

/// A field's generator with its options already normalized.
#[derive(Debug, Clone, PartialEq)]
pub enum Generator {
    Number(NumberGenerator),
    Decimal(DecimalGenerator),
    Boolean,
    Sequence(SequenceGenerator),
    Semantic(SemanticGenerator),
    Choice(ChoiceGenerator),
    Vin(VinGenerator),
    Sku(SkuGenerator),
    BundleId(BundleIdGenerator),
    Version(VersionGenerator),
    Price(PriceGenerator),
    Date(DateGenerator),
    RelativeDate(RelativeDateGenerator),
    /// Filled in by the reference pass, never generated directly.
    Reference { source: Option<String> },
    Fallback(FallbackGenerator),
}

/// Outcome of resolving one field.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedGenerator {
    pub generator: Generator,
    pub requires_fallback: bool,
}

impl ResolvedGenerator {
    fn direct(generator: Generator) -> Self {
        Self {
            generator,
            requires_fallback: false,
        }
    }

    fn fallback(options: &OptionReader<'_>) -> Self {
        Self {
            generator: Generator::Fallback(FallbackGenerator::from_options(options)),
            requires_fallback: true,
        }
    }
}

impl Generator {
    /// Map a field to its configured generator.
    ///
    /// Relative date kinds derive their anchor here, once per field, from
    /// `base_seed` and the field id.
    pub fn resolve<P: SeededValues>(
        field: &FieldDefinition,
        provider: &P,
        base_seed: &str,
    ) -> ResolvedGenerator {
        let options = OptionReader::new(&field.options);
        let kind = field.field_kind();
        let anchor = || field_anchor(provider, base_seed, &field.id, &options);

        let generator = match &kind {
            FieldKind::Number => Generator::Number(NumberGenerator::from_options(&options)),
            FieldKind::Decimal => Generator::Decimal(DecimalGenerator::from_options(&options)),
            FieldKind::Boolean => Generator::Boolean,
            FieldKind::FirstName
            | FieldKind::LastName
            | FieldKind::FullName
            | FieldKind::Email
            | FieldKind::Phone
            | FieldKind::Address
            | FieldKind::City
            | FieldKind::State
            | FieldKind::Country
            | FieldKind::ZipCode
            | FieldKind::Url
            | FieldKind::IpAddress
            | FieldKind::Uuid => match SemanticGenerator::from_kind(&kind, &options) {
                Some(generator) => Generator::Semantic(generator),
                None => return ResolvedGenerator::fallback(&options),
            },
            FieldKind::CharacterSequence => {
                Generator::Sequence(SequenceGenerator::from_options(&options))
            }
            FieldKind::Company
            | FieldKind::CarMake
            | FieldKind::CarModel
            | FieldKind::ProductCategory
            | FieldKind::AppName
            | FieldKind::Department
            | FieldKind::Color => match domain::builtin_list(&kind) {
                Some(values) => Generator::Choice(ChoiceGenerator::builtin(values)),
                None => return ResolvedGenerator::fallback(&options),
            },
            FieldKind::CustomList => {
                let mut values = options.get_list("values");
                if values.is_empty() {
                    values = options.get_list("list");
                }
                match ChoiceGenerator::custom(values) {
                    Some(generator) => Generator::Choice(generator),
                    None => return ResolvedGenerator::fallback(&options),
                }
            }
            FieldKind::Vin => Generator::Vin(VinGenerator),
            FieldKind::Sku => Generator::Sku(SkuGenerator::from_options(&options)),
            FieldKind::AppBundleId => {
                Generator::BundleId(BundleIdGenerator::from_options(&options))
            }
            FieldKind::AppVersion => Generator::Version(VersionGenerator::from_options(&options)),
            FieldKind::Price => Generator::Price(PriceGenerator::from_options(&options)),
            FieldKind::Date => Generator::Date(DateGenerator::from_options(&options)),
            FieldKind::FutureDate => {
                Generator::RelativeDate(RelativeDateGenerator::future(anchor(), &options))
            }
            FieldKind::PastDate => {
                Generator::RelativeDate(RelativeDateGenerator::past(anchor(), &options))
            }
            FieldKind::DateOfBirth => {
                Generator::RelativeDate(RelativeDateGenerator::birth(anchor(), &options))
            }
            FieldKind::Time => {
                Generator::RelativeDate(RelativeDateGenerator::time_of_day(anchor(), &options))
            }
            FieldKind::Reference => Generator::Reference {
                source: field.reference_source().map(str::to_string),
            },
            FieldKind::AiGenerated | FieldKind::Unknown(_) => {
                return ResolvedGenerator::fallback(&options);
            }
        };

        ResolvedGenerator::direct(generator)
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Generator::Reference { .. })
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        match self {
            Generator::Number(generator) => generator.generate(provider, ctx),
            Generator::Decimal(generator) => generator.generate(provider, ctx),
            Generator::Boolean => GeneratedValue::Bool(provider.bool(&ctx.key())),
            Generator::Sequence(generator) => generator.generate(ctx),
            Generator::Semantic(generator) => generator.generate(provider, ctx),
            Generator::Choice(generator) => generator.generate(provider, ctx),
            Generator::Vin(generator) => generator.generate(provider, ctx),
            Generator::Sku(generator) => generator.generate(provider, ctx),
            Generator::BundleId(generator) => generator.generate(provider, ctx),
            Generator::Version(generator) => generator.generate(provider, ctx),
            Generator::Price(generator) => generator.generate(provider, ctx),
            Generator::Date(generator) => generator.generate(provider, ctx),
            Generator::RelativeDate(generator) => generator.generate(provider, ctx),
            Generator::Reference { .. } => GeneratedValue::Null,
            Generator::Fallback(generator) => generator.generate(provider, ctx),
        }
    }
}
