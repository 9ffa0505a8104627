//! Hours for arrivals before the nominal start of work.
//!
//! An early arrival is anchored to the standard schedule: effective hours
//! count from the nominal start, and a departure at or after closing earns a
//! full day regardless of how early the employee came in.

use chrono::{NaiveTime, TimeDelta};

use crate::models::ShiftDefinition;

use super::buckets::DepartureBucket;
use super::elapsed::{FULL_DAY_CREDIT, LUNCH_AND_EVENING_BREAK, LUNCH_BREAK, MORNING_CREDIT, elapsed};
use super::work_hours::PolicyHours;

/// Applies the standard arrival policy.
///
/// The caller guarantees `start_time < business_time <= end_time`.
pub(crate) fn standard_arrival_hours(
    start_time: NaiveTime,
    end_time: NaiveTime,
    shift: &ShiftDefinition,
) -> PolicyHours {
    let departure = DepartureBucket::classify(end_time, shift, shift.flexible_closing_time);

    let (effective, total) = match departure {
        DepartureBucket::Morning => (
            elapsed(shift.business_time, end_time),
            elapsed(start_time, end_time),
        ),
        DepartureBucket::Lunch => (MORNING_CREDIT, elapsed(start_time, shift.noon_rest_time)),
        DepartureBucket::Afternoon => (
            elapsed(shift.business_time, end_time) - LUNCH_BREAK,
            elapsed(start_time, end_time) - LUNCH_BREAK,
        ),
        DepartureBucket::EveningGrace => {
            (FULL_DAY_CREDIT, elapsed(start_time, shift.closing_time))
        }
        DepartureBucket::Evening | DepartureBucket::Beyond => (
            FULL_DAY_CREDIT,
            elapsed(start_time, end_time) - LUNCH_AND_EVENING_BREAK,
        ),
    };

    PolicyHours {
        departure,
        effective,
        total,
        rest_penalty: TimeDelta::zero(),
    }
}
