//! Calculation logic for the Work Hours Engine.
//!
//! This module contains the daily hours calculation with its three arrival
//! policies (standard, flexible and late), the arrival and departure
//! classification they share, and the work day / rest day classification.

mod buckets;
mod day_detection;
mod elapsed;
mod flexible_arrival;
mod late_arrival;
mod standard_arrival;
mod work_hours;

pub use buckets::{ArrivalBucket, DepartureBucket};
pub use day_detection::{DayType, HolidayCalendar, ShiftCalendar};
pub use elapsed::{
    FULL_DAY_CREDIT, HALF_HOUR, LUNCH_AND_EVENING_BREAK, LUNCH_BREAK, MORNING_CREDIT, elapsed,
    to_hours,
};
pub use late_arrival::late_rest_penalty;
pub use work_hours::{CalculationBasis, HoursCalculation, compute_hours};
