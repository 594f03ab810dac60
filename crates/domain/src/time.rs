//! Timestamps for record bookkeeping.

use chrono::{DateTime, SubsecRound, Utc};

/// UTC timestamp stamped on areas as `created_at` and `updated_at`.
pub type Timestamp = DateTime<Utc>;

/// Current UTC time, truncated to millisecond precision.
///
/// Stored and serialized timestamps then compare equal to the in-memory value.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(3)
}
