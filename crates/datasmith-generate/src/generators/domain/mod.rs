//! Categorical vocabularies and composite domain values.

use datasmith_core::FieldKind;

use crate::generators::GeneratedValue;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

pub mod apps;
pub mod automotive;
pub mod commerce;

/// Source of a categorical choice.
#[derive(Debug, Clone, PartialEq)]
pub enum Choices {
    Builtin(&'static [&'static str]),
    Custom(Vec<String>),
}

/// Uniform seeded choice from a built-in or caller-supplied list.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceGenerator {
    choices: Choices,
}

impl ChoiceGenerator {
    pub fn builtin(values: &'static [&'static str]) -> Self {
        Self {
            choices: Choices::Builtin(values),
        }
    }

    /// `None` when the list is empty; callers fall back instead.
    pub fn custom(values: Vec<String>) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        Some(Self {
            choices: Choices::Custom(values),
        })
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let key = ctx.key();
        let value = match &self.choices {
            Choices::Builtin(values) => provider.one_of(&key, values).map(|value| value.to_string()),
            Choices::Custom(values) => provider.one_of(&key, values).cloned(),
        };
        value.map(GeneratedValue::Text).unwrap_or(GeneratedValue::Null)
    }
}

/// Built-in vocabulary for a categorical kind.
pub fn builtin_list(kind: &FieldKind) -> Option<&'static [&'static str]> {
    match kind {
        FieldKind::CarMake => Some(automotive::CAR_MAKES),
        FieldKind::CarModel => Some(automotive::CAR_MODELS),
        FieldKind::ProductCategory => Some(commerce::PRODUCT_CATEGORIES),
        FieldKind::Department => Some(commerce::DEPARTMENTS),
        FieldKind::Color => Some(commerce::COLORS),
        FieldKind::Company => Some(commerce::COMPANY_NAMES),
        FieldKind::AppName => Some(apps::APP_NAMES),
        _ => None,
    }
}

/// Lowercase ASCII alphanumerics only.
pub(crate) fn sanitize_identifier(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .flat_map(|ch| ch.to_lowercase())
        .collect()
}
