//! Hours for arrivals after the grace window.
//!
//! A late arrival first incurs a rest penalty that depends on where the
//! clock-in falls relative to lunch and the evening window. Afternoon and
//! evening-grace departures then add back half an hour, because the penalty
//! already carries a half-lunch default for those arrivals.

use chrono::{NaiveTime, TimeDelta};

use crate::models::ShiftDefinition;

use super::buckets::DepartureBucket;
use super::elapsed::{HALF_HOUR, LUNCH_AND_EVENING_BREAK, elapsed};
use super::work_hours::PolicyHours;

/// The break time deducted from a late arrival, based on the clock-in time.
///
/// | clock-in                                 | penalty                            |
/// |------------------------------------------|------------------------------------|
/// | before lunch                             | 2h                                 |
/// | during lunch                             | rest of lunch + 0.5h               |
/// | during afternoon work                    | 0.5h                               |
/// | between closing and the evening window   | time until the evening window      |
/// | inside the evening window                | none                               |
pub fn late_rest_penalty(start_time: NaiveTime, shift: &ShiftDefinition) -> TimeDelta {
    if start_time < shift.noon_rest_time {
        LUNCH_AND_EVENING_BREAK
    } else if start_time < shift.noon_business_time {
        elapsed(start_time, shift.noon_business_time) + HALF_HOUR
    } else if start_time < shift.closing_time {
        HALF_HOUR
    } else if start_time < shift.afternoon_business_time {
        elapsed(start_time, shift.afternoon_business_time)
    } else {
        TimeDelta::zero()
    }
}

/// Applies the late arrival policy.
///
/// The caller guarantees `flexible_business_time <= start_time <
/// flexible_closing_time` and `start_time <= end_time`.
pub(crate) fn late_arrival_hours(
    start_time: NaiveTime,
    end_time: NaiveTime,
    shift: &ShiftDefinition,
) -> PolicyHours {
    let rest = late_rest_penalty(start_time, shift);
    let departure = DepartureBucket::classify(end_time, shift, shift.flexible_closing_time);

    let (effective, total) = match departure {
        DepartureBucket::Morning => same(elapsed(start_time, end_time)),
        DepartureBucket::Lunch => same(elapsed(start_time, shift.noon_rest_time)),
        DepartureBucket::Afternoon => same(elapsed(start_time, end_time) - rest + HALF_HOUR),
        DepartureBucket::EveningGrace => {
            same(elapsed(start_time, shift.closing_time) - rest + HALF_HOUR)
        }
        DepartureBucket::Evening => same(elapsed(start_time, end_time) - rest),
        DepartureBucket::Beyond => (
            elapsed(start_time, shift.flexible_closing_time) - rest,
            elapsed(start_time, end_time) - rest,
        ),
    };

    PolicyHours {
        departure,
        effective,
        total,
        rest_penalty: rest,
    }
}

fn same(worked: TimeDelta) -> (TimeDelta, TimeDelta) {
    (worked, worked)
}
