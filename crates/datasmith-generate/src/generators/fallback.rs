use crate::generators::GeneratedValue;
use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::SeedContext;

/// Generic value for kinds without a deterministic generator.
///
/// Picks from the field's `examples` when present, otherwise draws a word.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FallbackGenerator {
    examples: Vec<String>,
}

impl FallbackGenerator {
    pub fn from_options(options: &OptionReader<'_>) -> Self {
        Self {
            examples: options.get_list("examples"),
        }
    }

    pub fn generate<P: SeededValues>(&self, provider: &P, ctx: SeedContext<'_>) -> GeneratedValue {
        let key = ctx.key();
        let value = provider
            .one_of(&key, &self.examples)
            .cloned()
            .unwrap_or_else(|| provider.word(&key));
        GeneratedValue::Text(value)
    }
}
