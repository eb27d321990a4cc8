use chrono::{DateTime, NaiveDateTime, Utc};

/// Expected format of the relationship start timestamp.
const START_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wall-clock time elapsed since the relationship start, decomposed into
/// full days plus a 0-23 / 0-59 / 0-59 remainder. All values truncate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    /// Full 24-hour periods elapsed.
    pub days: i64,
    /// Remaining hours, 0-23.
    pub hours: i64,
    /// Remaining minutes, 0-59.
    pub minutes: i64,
    /// Remaining seconds, 0-59.
    pub seconds: i64,
}

impl Elapsed {
    /// The all-zero sentinel returned for unparsable or future starts.
    pub const ZERO: Elapsed = Elapsed {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Total whole hours elapsed.
    pub fn total_hours(&self) -> i64 {
        self.days * 24 + self.hours
    }

    /// Total whole minutes elapsed.
    pub fn total_minutes(&self) -> i64 {
        self.total_hours() * 60 + self.minutes
    }

    /// Total whole seconds elapsed.
    pub fn total_seconds(&self) -> i64 {
        self.total_minutes() * 60 + self.seconds
    }
}

/// Computes time elapsed from `start` (formatted `YYYY-MM-DD HH:MM:SS`,
/// interpreted as UTC) to `now`.
///
/// A malformed timestamp or a start in the future is logged and mapped to
/// [`Elapsed::ZERO`]; this function never fails.
pub fn elapsed_between(start: &str, now: DateTime<Utc>) -> Elapsed {
    let start = match NaiveDateTime::parse_from_str(start.trim(), START_FORMAT) {
        Ok(dt) => dt.and_utc(),
        Err(e) => {
            tracing::warn!("Invalid relationship start timestamp '{}': {}", start, e);
            return Elapsed::ZERO;
        }
    };

    let delta = now.signed_duration_since(start);
    let total_seconds = delta.num_seconds();
    if total_seconds < 0 {
        tracing::warn!("Relationship start '{}' is in the future", start);
        return Elapsed::ZERO;
    }

    Elapsed {
        days: total_seconds / 86_400,
        hours: total_seconds / 3_600 % 24,
        minutes: total_seconds / 60 % 60,
        seconds: total_seconds % 60,
    }
}

/// Time elapsed from `start` to the current instant.
pub fn elapsed_since(start: &str) -> Elapsed {
    elapsed_between(start, Utc::now())
}
