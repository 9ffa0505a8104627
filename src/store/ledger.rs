//! Per-day work hours ledger.
//!
//! Records live in the `WorkHours` category of a [`ConfigStore`], nested as
//! year → month → day with unpadded numeric keys:
//!
//! ```json
//! { "2025": { "3": { "7": { "effect_hours": 8.0, "total_hours": 8.0 } } } }
//! ```

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{MonthlyAggregate, WorkHours};

use super::config_store::{ConfigStore, WORK_HOURS_CATEGORY};

type DayRecords = BTreeMap<String, WorkHours>;
type MonthRecords = BTreeMap<String, DayRecords>;
type LedgerBook = BTreeMap<String, MonthRecords>;

fn read_book(store: &ConfigStore) -> EngineResult<LedgerBook> {
    let value = store.get(WORK_HOURS_CATEGORY, None)?;
    LedgerBook::deserialize(value).map_err(|e| EngineError::StoreFormat {
        message: format!("malformed {} ledger: {}", WORK_HOURS_CATEGORY, e),
    })
}

fn write_book(store: &mut ConfigStore, book: &LedgerBook) -> EngineResult<()> {
    let value = serde_json::to_value(book).map_err(|e| EngineError::StoreFormat {
        message: e.to_string(),
    })?;
    store.set(WORK_HOURS_CATEGORY, value, None)
}

fn is_valid_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

/// Stores the hours worked on `date`, replacing any earlier record.
///
/// Rest days keep their total hours but earn no effective hours. Returns the
/// pair as it was stored.
///
/// # Errors
///
/// - `InvalidHours` when either value is negative or not finite
/// - `StoreFormat` when the existing ledger cannot be decoded
/// - `StoreIo` when the store cannot be written
///
/// # Example
///
/// ```
/// use work_hours_engine::models::WorkHours;
/// use work_hours_engine::store::{ConfigStore, lookup_day, record_day};
/// use chrono::NaiveDate;
///
/// let mut store = ConfigStore::in_memory();
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 8).unwrap();
///
/// let stored = record_day(&mut store, saturday, WorkHours::new(4.0, 4.0), false).unwrap();
/// assert_eq!(stored, WorkHours::new(0.0, 4.0));
/// assert_eq!(lookup_day(&store, saturday).unwrap(), stored);
/// ```
pub fn record_day(
    store: &mut ConfigStore,
    date: NaiveDate,
    hours: WorkHours,
    is_work_day: bool,
) -> EngineResult<WorkHours> {
    if !is_valid_hours(hours.effective_hours) || !is_valid_hours(hours.total_hours) {
        warn!(%date, ?hours, "Rejecting invalid hours");
        return Err(EngineError::InvalidHours {
            effective: hours.effective_hours,
            total: hours.total_hours,
        });
    }

    let stored = if is_work_day {
        hours
    } else {
        hours.without_credit()
    };

    let mut book = read_book(store)?;
    book.entry(date.year().to_string())
        .or_default()
        .entry(date.month().to_string())
        .or_default()
        .insert(date.day().to_string(), stored);
    write_book(store, &book)?;

    info!(
        %date,
        is_work_day,
        effective_hours = stored.effective_hours,
        total_hours = stored.total_hours,
        "Recorded work hours"
    );

    Ok(stored)
}

/// Returns the hours recorded for `date`, or zero when nothing was recorded.
pub fn lookup_day(store: &ConfigStore, date: NaiveDate) -> EngineResult<WorkHours> {
    let book = read_book(store)?;
    let hours = book
        .get(&date.year().to_string())
        .and_then(|months| months.get(&date.month().to_string()))
        .and_then(|days| days.get(&date.day().to_string()))
        .copied()
        .unwrap_or(WorkHours::ZERO);
    Ok(hours)
}

/// Sums every day recorded under `year`/`month`.
///
/// A month without records, including an invalid month number, aggregates
/// to zero.
pub fn aggregate_month(store: &ConfigStore, year: i32, month: u32) -> EngineResult<MonthlyAggregate> {
    let book = read_book(store)?;
    let Some(days) = book
        .get(&year.to_string())
        .and_then(|months| months.get(&month.to_string()))
    else {
        debug!(year, month, "No records for month");
        return Ok(MonthlyAggregate::empty(year, month));
    };

    let hours: WorkHours = days.values().copied().sum();
    Ok(MonthlyAggregate {
        year,
        month,
        effective_hours: hours.effective_hours,
        total_hours: hours.total_hours,
        days_recorded: days.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use uuid::Uuid;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_record_then_lookup_returns_same_pair() {
        let mut store = ConfigStore::in_memory();
        let date = make_date("2025-03-07");
        let hours = WorkHours::new(470.0 / 60.0, 9.25);

        record_day(&mut store, date, hours, true).unwrap();
        assert_eq!(lookup_day(&store, date).unwrap(), hours);
    }

    #[test]
    fn test_rest_day_record_has_no_effective_hours() {
        let mut store = ConfigStore::in_memory();
        let date = make_date("2025-03-08");

        let stored = record_day(&mut store, date, WorkHours::new(6.0, 6.5), false).unwrap();
        assert_eq!(stored, WorkHours::new(0.0, 6.5));
        assert_eq!(lookup_day(&store, date).unwrap(), stored);
    }

    #[test]
    fn test_lookup_missing_day_is_zero() {
        let store = ConfigStore::in_memory();
        assert_eq!(
            lookup_day(&store, make_date("2025-03-07")).unwrap(),
            WorkHours::ZERO
        );
    }

    #[test]
    fn test_record_overwrites_previous_value() {
        let mut store = ConfigStore::in_memory();
        let date = make_date("2025-03-07");

        record_day(&mut store, date, WorkHours::new(8.0, 8.0), true).unwrap();
        record_day(&mut store, date, WorkHours::new(4.0, 5.0), true).unwrap();
        assert_eq!(lookup_day(&store, date).unwrap(), WorkHours::new(4.0, 5.0));
        assert_eq!(aggregate_month(&store, 2025, 3).unwrap().days_recorded, 1);
    }

    #[test]
    fn test_negative_hours_are_rejected() {
        let mut store = ConfigStore::in_memory();
        let date = make_date("2025-03-07");

        let result = record_day(&mut store, date, WorkHours::new(-1.0, -1.0), true);
        assert!(matches!(result, Err(EngineError::InvalidHours { .. })));

        let result = record_day(&mut store, date, WorkHours::new(1.0, f64::NAN), true);
        assert!(matches!(result, Err(EngineError::InvalidHours { .. })));

        assert_eq!(lookup_day(&store, date).unwrap(), WorkHours::ZERO);
    }

    #[test]
    fn test_records_use_unpadded_keys() {
        let mut store = ConfigStore::in_memory();
        record_day(&mut store, make_date("2025-03-07"), WorkHours::new(8.0, 8.0), true).unwrap();

        assert_eq!(
            store.get(WORK_HOURS_CATEGORY, None).unwrap(),
            &json!({"2025": {"3": {"7": {"effect_hours": 8.0, "total_hours": 8.0}}}})
        );
    }

    #[test]
    fn test_aggregate_empty_month_is_zero() {
        let store = ConfigStore::in_memory();
        let aggregate = aggregate_month(&store, 2025, 3).unwrap();
        assert_eq!(aggregate, MonthlyAggregate::empty(2025, 3));
        assert!(aggregate.hours().is_zero());
    }

    #[test]
    fn test_aggregate_sums_only_requested_month() {
        let mut store = ConfigStore::in_memory();
        record_day(&mut store, make_date("2025-03-03"), WorkHours::new(8.0, 8.0), true).unwrap();
        record_day(&mut store, make_date("2025-03-04"), WorkHours::new(7.5, 9.0), true).unwrap();
        record_day(&mut store, make_date("2025-03-08"), WorkHours::new(3.0, 3.0), false).unwrap();
        record_day(&mut store, make_date("2025-04-01"), WorkHours::new(8.0, 8.0), true).unwrap();

        let aggregate = aggregate_month(&store, 2025, 3).unwrap();
        assert_eq!(aggregate.effective_hours, 15.5);
        assert_eq!(aggregate.total_hours, 20.0);
        assert_eq!(aggregate.days_recorded, 3);
    }

    #[test]
    fn test_aggregate_reads_existing_ledger() {
        let mut store = ConfigStore::in_memory();
        store
            .set(
                WORK_HOURS_CATEGORY,
                json!({"2024": {"12": {
                    "30": {"effect_hours": 8.0, "total_hours": 8.5},
                    "31": {"effect_hours": 4.0, "total_hours": 4.0}
                }}}),
                None,
            )
            .unwrap();

        let aggregate = aggregate_month(&store, 2024, 12).unwrap();
        assert_eq!(aggregate.hours(), WorkHours::new(12.0, 12.5));
        assert_eq!(aggregate.days_recorded, 2);
    }

    #[test]
    fn test_malformed_ledger_is_reported() {
        let mut store = ConfigStore::in_memory();
        store
            .set(WORK_HOURS_CATEGORY, json!({"2025": "oops"}), None)
            .unwrap();

        assert!(matches!(
            aggregate_month(&store, 2025, 3),
            Err(EngineError::StoreFormat { .. })
        ));
    }

    #[test]
    fn test_failed_write_keeps_previous_record() {
        let path = std::env::temp_dir()
            .join(format!("work-hours-ledger-{}", Uuid::new_v4()))
            .join("config.json");
        let mut store = ConfigStore::open(&path).unwrap();
        let date = make_date("2025-03-07");
        record_day(&mut store, date, WorkHours::new(8.0, 8.0), true).unwrap();

        fs::create_dir(path.with_extension("json.tmp")).unwrap();

        let result = record_day(&mut store, date, WorkHours::new(2.0, 2.0), true);
        assert!(matches!(result, Err(EngineError::StoreIo { .. })));
        assert_eq!(lookup_day(&store, date).unwrap(), WorkHours::new(8.0, 8.0));
        assert_eq!(aggregate_month(&store, 2025, 3).unwrap().days_recorded, 1);

        let reopened = ConfigStore::open(&path).unwrap();
        assert_eq!(lookup_day(&reopened, date).unwrap(), WorkHours::new(8.0, 8.0));
    }
}
