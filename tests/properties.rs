//! Property tests for the hours computation and the day ledger.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;

use work_hours_engine::calculation::compute_hours;
use work_hours_engine::config::WorkHoursConfig;
use work_hours_engine::error::EngineError;
use work_hours_engine::models::{STANDARD_8AM, STANDARD_830AM, WorkHours};
use work_hours_engine::store::{ConfigStore, aggregate_month, lookup_day, record_day};

fn clock_time() -> impl Strategy<Value = NaiveTime> {
    (0u32..24, 0u32..60, 0u32..60)
        .prop_map(|(h, m, s)| NaiveTime::from_hms_opt(h, m, s).unwrap())
}

fn ordered_times() -> impl Strategy<Value = (NaiveTime, NaiveTime)> {
    (clock_time(), clock_time()).prop_map(|(a, b)| if a <= b { (a, b) } else { (b, a) })
}

fn shift_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(STANDARD_8AM), Just(STANDARD_830AM)]
}

/// Hours in quarter-hour steps so sums are exact.
fn quarter_hours() -> impl Strategy<Value = f64> {
    (0u32..=56).prop_map(|quarters| f64::from(quarters) / 4.0)
}

proptest! {
    /// Total hours never fall below effective hours, and neither is negative.
    #[test]
    fn total_covers_effective((start, end) in ordered_times(), shift in shift_name()) {
        let config = WorkHoursConfig::builtin();
        let result = compute_hours(Some(start), Some(end), shift, &config).unwrap();

        prop_assert!(result.hours.effective_hours >= 0.0, "{:?}", result);
        prop_assert!(result.hours.total_hours >= result.hours.effective_hours, "{:?}", result);
    }

    /// Leaving before the shift starts earns no effective hours.
    #[test]
    fn leaving_before_shift_earns_nothing(
        start_minute in 0u32..480,
        length in 0u32..480,
    ) {
        prop_assume!(start_minute + length < 480);
        let config = WorkHoursConfig::builtin();
        let start = NaiveTime::from_hms_opt(start_minute / 60, start_minute % 60, 0).unwrap();
        let end_minute = start_minute + length;
        let end = NaiveTime::from_hms_opt(end_minute / 60, end_minute % 60, 0).unwrap();

        let result = compute_hours(Some(start), Some(end), STANDARD_8AM, &config).unwrap();
        prop_assert_eq!(result.hours.effective_hours, 0.0);
        prop_assert_eq!(result.hours.total_hours, f64::from(length) * 60.0 / 3600.0);
    }

    /// A missing punch always yields zero hours.
    #[test]
    fn missing_punch_is_absence(time in clock_time(), shift in shift_name(), missing_start in any::<bool>()) {
        let config = WorkHoursConfig::builtin();
        let (start, end) = if missing_start { (None, Some(time)) } else { (Some(time), None) };

        let result = compute_hours(start, end, shift, &config).unwrap();
        prop_assert_eq!(result.hours, WorkHours::ZERO);

        let result = compute_hours(None, None, shift, &config).unwrap();
        prop_assert_eq!(result.hours, WorkHours::ZERO);
    }

    /// Clock-out before clock-in is always rejected.
    #[test]
    fn inverted_range_is_rejected((start, end) in ordered_times(), shift in shift_name()) {
        prop_assume!(start < end);
        let config = WorkHoursConfig::builtin();

        let result = compute_hours(Some(end), Some(start), shift, &config);
        let is_invalid_range = matches!(result, Err(EngineError::InvalidTimeRange { .. }));
        prop_assert!(is_invalid_range);
    }

    /// Unknown shift names are rejected regardless of the punches.
    #[test]
    fn unknown_shift_is_rejected(name in "[a-z]{1,12}", start in proptest::option::of(clock_time())) {
        let config = WorkHoursConfig::builtin();

        let result = compute_hours(start, start, &name, &config);
        let is_invalid_shift = matches!(result, Err(EngineError::InvalidShift { .. }));
        prop_assert!(is_invalid_shift);
    }

    /// A stored pair is read back unchanged, minus effective hours on rest days.
    #[test]
    fn record_then_lookup(
        day in 1u32..=28,
        effective in 0.0f64..24.0,
        extra in 0.0f64..4.0,
        is_work_day in any::<bool>(),
    ) {
        let mut store = ConfigStore::in_memory();
        let date = NaiveDate::from_ymd_opt(2025, 2, day).unwrap();
        let hours = WorkHours::new(effective, effective + extra);

        record_day(&mut store, date, hours, is_work_day).unwrap();
        let stored = lookup_day(&store, date).unwrap();

        if is_work_day {
            prop_assert_eq!(stored, hours);
        } else {
            prop_assert_eq!(stored, WorkHours::new(0.0, hours.total_hours));
        }
    }

    /// The monthly aggregate is the sum of the month's stored records.
    #[test]
    fn aggregate_is_sum_of_days(
        records in proptest::collection::btree_map(1u32..=30, (quarter_hours(), quarter_hours(), any::<bool>()), 0..20),
    ) {
        let mut store = ConfigStore::in_memory();
        let mut expected = WorkHours::ZERO;

        for (day, (effective, extra, is_work_day)) in &records {
            let date = NaiveDate::from_ymd_opt(2025, 4, *day).unwrap();
            let stored = record_day(&mut store, date, WorkHours::new(*effective, effective + extra), *is_work_day).unwrap();
            expected = expected + stored;
        }
        // Another month must not leak into the sum.
        record_day(&mut store, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), WorkHours::new(8.0, 8.0), true).unwrap();

        let aggregate = aggregate_month(&store, 2025, 4).unwrap();
        prop_assert_eq!(aggregate.hours(), expected);
        prop_assert_eq!(aggregate.days_recorded, records.len());
    }
}
