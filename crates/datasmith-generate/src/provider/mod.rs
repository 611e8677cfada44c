//! Seeded-value provider.
//!
//! Generators never own randomness. They ask a [`SeededValues`]
//! implementation for a draw keyed by a [`SeedKey`], and the same key must
//! always produce the same value. Implementations must stay stateless;
//! determinism silently breaks otherwise.

mod faker;

pub use faker::FakerValues;

use chrono::{DateTime, Utc};

use crate::seed::SeedKey;

pub trait SeededValues: Send + Sync {
    /// Integer in `[min, max]`.
    fn int(&self, seed: &SeedKey, min: i64, max: i64) -> i64;

    /// Float in `[min, max]` rounded to `precision` decimal places.
    fn float(&self, seed: &SeedKey, min: f64, max: f64, precision: u32) -> f64;

    fn bool(&self, seed: &SeedKey) -> bool;

    /// ISO-8601 instant (UTC, millisecond precision) in `[min, max]`.
    fn date_string(&self, seed: &SeedKey, min: DateTime<Utc>, max: DateTime<Utc>) -> String;

    fn first_name(&self, seed: &SeedKey) -> String;
    fn last_name(&self, seed: &SeedKey) -> String;
    fn full_name(&self, seed: &SeedKey) -> String;
    fn email(&self, seed: &SeedKey) -> String;
    fn phone_number(&self, seed: &SeedKey) -> String;
    fn city(&self, seed: &SeedKey) -> String;
    /// Full state name.
    fn state(&self, seed: &SeedKey) -> String;
    fn country(&self, seed: &SeedKey) -> String;
    /// Street line without secondary unit.
    fn postal_address(&self, seed: &SeedKey) -> String;
    fn uuid(&self, seed: &SeedKey) -> String;
    fn url(&self, seed: &SeedKey) -> String;
    fn ipv4(&self, seed: &SeedKey) -> String;
    fn word(&self, seed: &SeedKey) -> String;

    /// Uniform choice; `None` only for an empty slice.
    fn one_of<'a, T>(&self, seed: &SeedKey, choices: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if choices.is_empty() {
            return None;
        }
        let max = i64::try_from(choices.len() - 1).unwrap_or(i64::MAX);
        let idx = self.int(seed, 0, max);
        usize::try_from(idx).ok().and_then(|idx| choices.get(idx))
    }
}
