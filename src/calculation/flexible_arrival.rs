//! Hours for arrivals inside the grace window.
//!
//! A grace-window arrival is not anchored to the nominal start: effective and
//! total hours track each other, counted from the actual clock-in. The
//! evening cut-off is personal, ten hours after clock-in.

use chrono::{NaiveTime, TimeDelta};

use crate::models::ShiftDefinition;

use super::buckets::DepartureBucket;
use super::elapsed::{FULL_DAY_CREDIT, LUNCH_AND_EVENING_BREAK, LUNCH_BREAK, elapsed};
use super::work_hours::PolicyHours;

/// Applies the flexible arrival policy.
///
/// The caller guarantees `business_time <= start_time < flexible_business_time`
/// and `start_time <= end_time`.
pub(crate) fn flexible_arrival_hours(
    start_time: NaiveTime,
    end_time: NaiveTime,
    shift: &ShiftDefinition,
) -> PolicyHours {
    let cutoff = shift.personal_closing_time(start_time);
    let departure = DepartureBucket::classify(end_time, shift, cutoff);

    let worked = match departure {
        DepartureBucket::Morning => elapsed(start_time, end_time),
        DepartureBucket::Lunch => elapsed(start_time, shift.noon_rest_time),
        DepartureBucket::Afternoon => elapsed(start_time, end_time) - LUNCH_BREAK,
        DepartureBucket::EveningGrace => elapsed(start_time, shift.closing_time) - LUNCH_BREAK,
        DepartureBucket::Evening => elapsed(start_time, end_time) - LUNCH_AND_EVENING_BREAK,
        DepartureBucket::Beyond => {
            return PolicyHours {
                departure,
                effective: FULL_DAY_CREDIT,
                total: elapsed(start_time, end_time) - LUNCH_AND_EVENING_BREAK,
                rest_penalty: TimeDelta::zero(),
            };
        }
    };

    PolicyHours {
        departure,
        effective: worked,
        total: worked,
        rest_penalty: TimeDelta::zero(),
    }
}
