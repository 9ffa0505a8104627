//! Daily work hours calculation.
//!
//! This module turns a clock-in/clock-out pair into effective and total hours
//! for a named shift, dispatching to the standard, flexible or late arrival
//! policy.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::WorkHoursConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftDefinition, WorkHours, format_clock_time};

use super::buckets::{ArrivalBucket, DepartureBucket};
use super::elapsed::{elapsed, to_hours};
use super::flexible_arrival::flexible_arrival_hours;
use super::late_arrival::late_arrival_hours;
use super::standard_arrival::standard_arrival_hours;

/// What an arrival policy produced, before conversion to hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PolicyHours {
    pub departure: DepartureBucket,
    pub effective: TimeDelta,
    pub total: TimeDelta,
    pub rest_penalty: TimeDelta,
}

/// How a day's hours were arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationBasis {
    /// Clock-in or clock-out is missing; the day counts as absence.
    Absent,
    /// Attendance entirely outside the shift; no credit is given.
    OutsideShift,
    /// An arrival policy was applied.
    Policy {
        /// Which arrival policy applied.
        arrival: ArrivalBucket,
        /// Which departure window the clock-out fell in.
        departure: DepartureBucket,
        /// Late-arrival break penalty, in hours (zero for other arrivals).
        rest_penalty_hours: f64,
    },
}

/// The result of computing one day's hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoursCalculation {
    /// The shift the hours were computed against.
    pub shift: String,
    /// Clock-in time, if one was given.
    #[serde(default, with = "crate::models::clock::option")]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time, if one was given.
    #[serde(default, with = "crate::models::clock::option")]
    pub end_time: Option<NaiveTime>,
    /// The computed hours.
    pub hours: WorkHours,
    /// Which rule produced the hours.
    pub basis: CalculationBasis,
    /// Human readable explanation of the calculation.
    pub reasoning: String,
}

/// Computes effective and total hours for one day.
///
/// # Arguments
///
/// * `start_time` - Clock-in time, `None` when not submitted
/// * `end_time` - Clock-out time, `None` when not submitted
/// * `shift_name` - Name of a configured shift definition
/// * `config` - The configuration holding shift definitions
///
/// # Returns
///
/// - `(0, 0)` when either time is missing
/// - `(0, elapsed)` when the attendance lies entirely outside the shift
/// - otherwise the hours of the matching arrival policy
///
/// # Errors
///
/// - `InvalidShift` when `shift_name` is not configured
/// - `InvalidTimeRange` when `start_time` is after `end_time`
///
/// # Example
///
/// ```
/// use work_hours_engine::calculation::compute_hours;
/// use work_hours_engine::config::WorkHoursConfig;
/// use chrono::NaiveTime;
///
/// let config = WorkHoursConfig::builtin();
/// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0);
///
/// let result = compute_hours(at(8, 0), at(17, 30), "standard-8am", &config).unwrap();
/// assert_eq!(result.hours.effective_hours, 8.0);
/// assert_eq!(result.hours.total_hours, 8.0);
/// ```
pub fn compute_hours(
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    shift_name: &str,
    config: &WorkHoursConfig,
) -> EngineResult<HoursCalculation> {
    let shift = config.shift(shift_name)?;
    let (hours, basis, reasoning) = compute_for_shift(start_time, end_time, shift)?;

    Ok(HoursCalculation {
        shift: shift.name.clone(),
        start_time,
        end_time,
        hours,
        basis,
        reasoning,
    })
}

fn compute_for_shift(
    start_time: Option<NaiveTime>,
    end_time: Option<NaiveTime>,
    shift: &ShiftDefinition,
) -> EngineResult<(WorkHours, CalculationBasis, String)> {
    let (start, end) = match (start_time, end_time) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Ok((
                WorkHours::ZERO,
                CalculationBasis::Absent,
                "No clock-in or clock-out recorded: counted as absence".to_string(),
            ));
        }
    };

    if start > end {
        return Err(EngineError::InvalidTimeRange { start, end });
    }

    if end < shift.business_time || start >= shift.flexible_closing_time {
        let total = to_hours(elapsed(start, end));
        return Ok((
            WorkHours::new(0.0, total),
            CalculationBasis::OutsideShift,
            format!(
                "Attendance {}-{} lies outside shift '{}': no effective hours, {}h total",
                format_clock_time(&start),
                format_clock_time(&end),
                shift.name,
                total
            ),
        ));
    }

    let arrival = ArrivalBucket::classify(start, shift);
    let policy = match arrival {
        ArrivalBucket::Standard => standard_arrival_hours(start, end, shift),
        ArrivalBucket::Flexible => flexible_arrival_hours(start, end, shift),
        ArrivalBucket::Late => late_arrival_hours(start, end, shift),
    };

    let hours = WorkHours::new(to_hours(policy.effective), to_hours(policy.total));
    let rest_penalty_hours = to_hours(policy.rest_penalty);

    debug!(
        shift = %shift.name,
        arrival = %arrival,
        departure = %policy.departure,
        effective_hours = hours.effective_hours,
        total_hours = hours.total_hours,
        "Applied arrival policy"
    );

    let reasoning = format!(
        "Arrived {} ({} arrival), left {} ({} departure){}: {}h effective, {}h total",
        format_clock_time(&start),
        arrival,
        format_clock_time(&end),
        policy.departure,
        if rest_penalty_hours > 0.0 {
            format!(", {}h late-arrival break penalty", rest_penalty_hours)
        } else {
            String::new()
        },
        hours.effective_hours,
        hours.total_hours
    );

    Ok((
        hours,
        CalculationBasis::Policy {
            arrival,
            departure: policy.departure,
            rest_penalty_hours,
        },
        reasoning,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{STANDARD_8AM, STANDARD_830AM};

    fn t(s: &str) -> Option<NaiveTime> {
        Some(NaiveTime::parse_from_str(s, "%H:%M").unwrap())
    }

    fn compute(start: &str, end: &str, shift: &str) -> HoursCalculation {
        compute_hours(t(start), t(end), shift, &WorkHoursConfig::builtin()).unwrap()
    }

    #[test]
    fn test_on_time_full_day_is_eight_hours() {
        let result = compute("08:00", "17:30", STANDARD_8AM);
        assert_eq!(result.hours, WorkHours::new(8.0, 8.0));
        assert_eq!(
            result.basis,
            CalculationBasis::Policy {
                arrival: ArrivalBucket::Flexible,
                departure: DepartureBucket::EveningGrace,
                rest_penalty_hours: 0.0,
            }
        );
    }

    #[test]
    fn test_late_arrival_evening_departure() {
        let result = compute("09:30", "18:30", STANDARD_8AM);
        assert_eq!(result.hours, WorkHours::new(7.0, 7.0));
        assert_eq!(
            result.basis,
            CalculationBasis::Policy {
                arrival: ArrivalBucket::Late,
                departure: DepartureBucket::Evening,
                rest_penalty_hours: 2.0,
            }
        );
        assert!(result.reasoning.contains("2h late-arrival break penalty"));
    }

    #[test]
    fn test_early_arrival_uses_standard_policy() {
        let result = compute("07:45", "18:30", STANDARD_8AM);
        assert_eq!(result.hours, WorkHours::new(8.0, 8.75));
    }

    #[test]
    fn test_absent_times_yield_zero() {
        let config = WorkHoursConfig::builtin();

        for (start, end) in [(None, None), (t("08:00"), None), (None, t("17:30"))] {
            let result = compute_hours(start, end, STANDARD_8AM, &config).unwrap();
            assert_eq!(result.hours, WorkHours::ZERO);
            assert_eq!(result.basis, CalculationBasis::Absent);
        }
    }

    #[test]
    fn test_unknown_shift_is_an_error() {
        let result = compute_hours(t("08:00"), t("17:30"), "unknown-shift", &WorkHoursConfig::builtin());
        match result {
            Err(EngineError::InvalidShift { name }) => assert_eq!(name, "unknown-shift"),
            other => panic!("Expected InvalidShift, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_shift_is_reported_before_absence() {
        let result = compute_hours(None, None, "unknown-shift", &WorkHoursConfig::builtin());
        assert!(matches!(result, Err(EngineError::InvalidShift { .. })));
    }

    #[test]
    fn test_inverted_range_is_an_error() {
        let result = compute_hours(t("17:30"), t("08:00"), STANDARD_8AM, &WorkHoursConfig::builtin());
        assert!(matches!(result, Err(EngineError::InvalidTimeRange { .. })));
    }

    #[test]
    fn test_leaving_before_shift_start_gives_no_credit() {
        let result = compute("06:00", "07:30", STANDARD_8AM);
        assert_eq!(result.hours, WorkHours::new(0.0, 1.5));
        assert_eq!(result.basis, CalculationBasis::OutsideShift);
    }

    #[test]
    fn test_arriving_after_cutoff_gives_no_credit() {
        let result = compute("19:05", "21:00", STANDARD_8AM);
        assert_eq!(result.hours.effective_hours, 0.0);
        assert_eq!(result.hours.total_hours, 115.0 / 60.0);
        assert_eq!(result.basis, CalculationBasis::OutsideShift);
    }

    #[test]
    fn test_zero_length_attendance_at_start() {
        let result = compute("08:00", "08:00", STANDARD_8AM);
        assert_eq!(result.hours, WorkHours::ZERO);
    }

    #[test]
    fn test_8_30_shift_full_day() {
        let result = compute("08:30", "18:00", STANDARD_830AM);
        assert_eq!(result.hours, WorkHours::new(8.0, 8.0));
    }

    #[test]
    fn test_fractional_hours_are_not_rounded() {
        let result = compute("08:10", "17:30", STANDARD_8AM);
        // 9h20m to closing, minus lunch
        assert_eq!(result.hours.effective_hours, 470.0 / 60.0);
        assert_eq!(result.hours.total_hours, 470.0 / 60.0);
    }

    #[test]
    fn test_result_echoes_inputs() {
        let result = compute("08:00", "17:30", STANDARD_8AM);
        assert_eq!(result.shift, STANDARD_8AM);
        assert_eq!(result.start_time, t("08:00"));
        assert_eq!(result.end_time, t("17:30"));
    }

    #[test]
    fn test_result_serialization() {
        let json = serde_json::to_value(compute("09:30", "18:30", STANDARD_8AM)).unwrap();
        assert_eq!(json["start_time"], "09:30");
        assert_eq!(json["hours"]["effect_hours"], 7.0);
        assert_eq!(json["basis"]["kind"], "policy");
        assert_eq!(json["basis"]["arrival"], "late");
        assert_eq!(json["basis"]["departure"], "evening");
    }
}
