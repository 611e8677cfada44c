//! Field-level date anchors.
//!
//! Relative date kinds measure their window from an anchor instead of the
//! wall clock. The anchor is the default epoch shifted by one seeded day
//! offset drawn with the field's anchor key, so it is shared by every row of
//! the field and moves only when the seed or the field id changes.

use chrono::{DateTime, Duration, Utc};

use crate::params::OptionReader;
use crate::provider::SeededValues;
use crate::seed::anchor_key;

/// 2024-01-01T00:00:00Z.
pub const DEFAULT_EPOCH_SECS: i64 = 1_704_067_200;
pub const DEFAULT_ANCHOR_WINDOW_DAYS: i64 = 365;
const MAX_ANCHOR_WINDOW_DAYS: i64 = 36_500;

pub fn default_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(DEFAULT_EPOCH_SECS, 0).unwrap_or_default()
}

/// Derive the anchor for one field.
pub fn derive_anchor<P: SeededValues>(
    provider: &P,
    base_seed: &str,
    field_id: &str,
    window_days: i64,
) -> DateTime<Utc> {
    let window = window_days.clamp(0, MAX_ANCHOR_WINDOW_DAYS);
    let offset = provider.int(&anchor_key(base_seed, field_id), 0, window);
    default_epoch() + Duration::days(offset)
}

/// Anchor using the field's `anchorWindowDays` option.
pub fn field_anchor<P: SeededValues>(
    provider: &P,
    base_seed: &str,
    field_id: &str,
    options: &OptionReader<'_>,
) -> DateTime<Utc> {
    let window = options.i64_or("anchorWindowDays", DEFAULT_ANCHOR_WINDOW_DAYS);
    derive_anchor(provider, base_seed, field_id, window)
}
