use chrono::{DateTime, SecondsFormat, Utc};
use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, CountryName, StateName, StreetName,
};
use fake::faker::internet::en::{DomainSuffix, SafeEmail};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

use crate::provider::SeededValues;
use crate::seed::SeedKey;

const MAX_PRECISION: u32 = 10;

/// Default provider: SHA-256 of the key seeds a ChaCha8 stream, and the
/// `fake` vocabularies supply names and places.
///
/// A fresh stream is built for every draw, so values depend on the key alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakerValues;

impl FakerValues {
    pub fn new() -> Self {
        Self
    }

    fn rng(seed: &SeedKey) -> ChaCha8Rng {
        let digest = Sha256::digest(seed.as_str().as_bytes());
        let mut bytes = [0_u8; 32];
        bytes.copy_from_slice(&digest);
        ChaCha8Rng::from_seed(bytes)
    }
}

impl SeededValues for FakerValues {
    fn int(&self, seed: &SeedKey, min: i64, max: i64) -> i64 {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        if min == max {
            return min;
        }
        Self::rng(seed).random_range(min..=max)
    }

    fn float(&self, seed: &SeedKey, min: f64, max: f64, precision: u32) -> f64 {
        if !min.is_finite() || !max.is_finite() {
            return 0.0;
        }
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let value = if min == max {
            min
        } else if (max - min).is_finite() {
            Self::rng(seed).random_range(min..=max)
        } else {
            // The span overflows f64; interpolate instead of sampling it directly.
            let t: f64 = Self::rng(seed).random_range(0.0..=1.0);
            ((1.0 - t) * min + t * max).clamp(min, max)
        };
        let factor = 10_f64.powi(precision.min(MAX_PRECISION) as i32);
        let scaled = value * factor;
        if !scaled.is_finite() {
            return value;
        }
        (scaled.round() / factor).clamp(min, max)
    }

    fn bool(&self, seed: &SeedKey) -> bool {
        Self::rng(seed).random_bool(0.5)
    }

    fn date_string(&self, seed: &SeedKey, min: DateTime<Utc>, max: DateTime<Utc>) -> String {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let span_ms = (max - min).num_milliseconds().max(0);
        let offset = self.int(seed, 0, span_ms);
        let instant = min + chrono::Duration::milliseconds(offset);
        instant.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn first_name(&self, seed: &SeedKey) -> String {
        FirstName().fake_with_rng(&mut Self::rng(seed))
    }

    fn last_name(&self, seed: &SeedKey) -> String {
        LastName().fake_with_rng(&mut Self::rng(seed))
    }

    fn full_name(&self, seed: &SeedKey) -> String {
        Name().fake_with_rng(&mut Self::rng(seed))
    }

    fn email(&self, seed: &SeedKey) -> String {
        SafeEmail().fake_with_rng(&mut Self::rng(seed))
    }

    fn phone_number(&self, seed: &SeedKey) -> String {
        PhoneNumber().fake_with_rng(&mut Self::rng(seed))
    }

    fn city(&self, seed: &SeedKey) -> String {
        CityName().fake_with_rng(&mut Self::rng(seed))
    }

    fn state(&self, seed: &SeedKey) -> String {
        StateName().fake_with_rng(&mut Self::rng(seed))
    }

    fn country(&self, seed: &SeedKey) -> String {
        CountryName().fake_with_rng(&mut Self::rng(seed))
    }

    fn postal_address(&self, seed: &SeedKey) -> String {
        let mut rng = Self::rng(seed);
        let number: String = BuildingNumber().fake_with_rng(&mut rng);
        let street: String = StreetName().fake_with_rng(&mut rng);
        format!("{number} {street}")
    }

    fn uuid(&self, seed: &SeedKey) -> String {
        let mut bytes = [0_u8; 16];
        Self::rng(seed).fill_bytes(&mut bytes);
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        uuid::Uuid::from_bytes(bytes).to_string()
    }

    fn url(&self, seed: &SeedKey) -> String {
        let mut rng = Self::rng(seed);
        let host: String = Word().fake_with_rng(&mut rng);
        let suffix: String = DomainSuffix().fake_with_rng(&mut rng);
        format!("https://www.{}.{suffix}", host.to_lowercase())
    }

    fn ipv4(&self, seed: &SeedKey) -> String {
        let mut rng = Self::rng(seed);
        let octets: [u8; 4] = std::array::from_fn(|_| rng.random_range(1..=254));
        format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
    }

    fn word(&self, seed: &SeedKey) -> String {
        Word().fake_with_rng(&mut Self::rng(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_key_same_draw() {
        let provider = FakerValues::new();
        let key = SeedKey::new("demo:f1:0");
        assert_eq!(provider.int(&key, 1, 1_000_000), provider.int(&key, 1, 1_000_000));
        assert_eq!(provider.full_name(&key), provider.full_name(&key));
        assert_eq!(provider.uuid(&key), provider.uuid(&key));
    }

    #[test]
    fn key_digest_seeds_a_recorded_stream() {
        let key = SeedKey::new("customers-v1:f-email:0");
        assert_eq!(
            hex::encode(Sha256::digest(key.as_str().as_bytes())),
            "56dedba077133cfac44b3ff28990f215a25fd466028663a59a652dd1ae84a2f9"
        );
        assert_eq!(FakerValues::rng(&key).next_u64(), 9_223_059_659_222_461_926);
        assert!(FakerValues::new().bool(&key));
    }

    #[test]
    fn float_respects_precision_and_bounds() {
        let provider = FakerValues::new();
        for row in 0..200 {
            let key = SeedKey::new(format!("demo:price:{row}"));
            let value = provider.float(&key, 1.0, 2.0, 2);
            assert!((1.0..=2.0).contains(&value));
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn float_handles_spans_wider_than_f64() {
        let provider = FakerValues::new();
        let mut seen_negative = false;
        let mut seen_positive = false;
        for row in 0..64 {
            let key = SeedKey::new(format!("demo:wide:{row}"));
            let value = provider.float(&key, -1e308, 1e308, 2);
            assert!(value.is_finite());
            assert!((-1e308..=1e308).contains(&value));
            seen_negative |= value < 0.0;
            seen_positive |= value > 0.0;
        }
        assert!(seen_negative && seen_positive);
        assert_eq!(
            provider.float(&SeedKey::new("demo:wide:0"), f64::MAX, f64::MIN, 0),
            provider.float(&SeedKey::new("demo:wide:0"), f64::MIN, f64::MAX, 0)
        );
    }

    #[test]
    fn date_string_is_iso_within_bounds() {
        let provider = FakerValues::new();
        let min = DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default();
        let max = min + chrono::Duration::days(30);
        let value = provider.date_string(&SeedKey::new("demo:d:0"), min, max);
        let parsed = DateTime::parse_from_rfc3339(&value).expect("rfc3339");
        let parsed = parsed.with_timezone(&Utc);
        assert!(parsed >= min && parsed <= max);
        assert!(value.ends_with('Z'));
    }

    #[test]
    fn uuid_is_v4() {
        let value = FakerValues::new().uuid(&SeedKey::new("demo:u:3"));
        let parsed = uuid::Uuid::parse_str(&value).expect("uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }
}
