//! Clock arithmetic shared by the arrival policies.
//!
//! Everything is carried as [`TimeDelta`] (whole seconds) and converted to
//! fractional hours once, at the end of a calculation.

use chrono::{NaiveTime, TimeDelta};

/// The unpaid lunch break deducted from afternoon departures.
pub const LUNCH_BREAK: TimeDelta = TimeDelta::minutes(90);

/// Lunch plus the evening grace window, deducted from evening departures.
pub const LUNCH_AND_EVENING_BREAK: TimeDelta = TimeDelta::minutes(120);

/// Half of the lunch break; the late-arrival correction.
pub const HALF_HOUR: TimeDelta = TimeDelta::minutes(30);

/// Credit for a full morning when leaving during lunch.
pub const MORNING_CREDIT: TimeDelta = TimeDelta::hours(4);

/// Credit for a full standard day.
pub const FULL_DAY_CREDIT: TimeDelta = TimeDelta::hours(8);

/// Time from `start` to `end`, or zero when `end` is not after `start`.
pub fn elapsed(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    let span = end - start;
    if span > TimeDelta::zero() {
        span
    } else {
        TimeDelta::zero()
    }
}

/// Converts a duration to fractional hours.
pub fn to_hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 3600.0
}
