//! Expiry windows for stored keys.

use chrono::{NaiveDateTime, Timelike};

/// Seconds from midnight to 23:59:59.
const END_OF_DAY_SECS: u32 = 24 * 60 * 60 - 1;

/// Seconds in one week.
const WEEK_SECS: u64 = 7 * 24 * 60 * 60;

/// Seconds remaining from `now` until 23:59:59 of the same calendar day.
///
/// Returns 0 exactly at the boundary; callers pass the zero TTL through
/// to the store rather than treating it as an error.
#[must_use]
pub fn midnight_ttl(now: NaiveDateTime) -> u64 {
    u64::from(END_OF_DAY_SECS.saturating_sub(now.time().num_seconds_from_midnight()))
}

/// Fixed one-week expiry, independent of the current time.
#[must_use]
pub const fn week_ttl() -> u64 {
    WEEK_SECS
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .expect("valid test timestamp")
    }

    #[test]
    fn full_day_remaining_at_midnight() {
        assert_eq!(midnight_ttl(at(0, 0, 0)), 86_399);
    }

    #[test]
    fn zero_at_end_of_day_boundary() {
        assert_eq!(midnight_ttl(at(23, 59, 59)), 0);
    }

    #[test]
    fn non_increasing_as_the_day_advances() {
        let samples = [
            at(0, 0, 0),
            at(6, 30, 0),
            at(10, 0, 0),
            at(10, 0, 0),
            at(18, 45, 12),
            at(23, 59, 58),
            at(23, 59, 59),
        ];
        let ttls: Vec<u64> = samples.into_iter().map(midnight_ttl).collect();
        assert!(ttls.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn week_is_constant() {
        assert_eq!(week_ttl(), 604_800);
        assert_eq!(week_ttl(), 7 * 24 * 60 * 60);
    }
}
