//! Day classification.
//!
//! This module decides whether a calendar date is a work day or a rest day.
//! Rest days earn no effective hours when a record is stored.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::error::{EngineError, EngineResult};

/// The type of a calendar day for work hours purposes.
///
/// # Example
///
/// ```
/// use work_hours_engine::calculation::DayType;
///
/// assert_eq!(DayType::from_is_work_day(false), DayType::RestDay);
/// assert_eq!(DayType::WorkDay.to_string(), "work day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// A day on which effective hours are credited.
    WorkDay,
    /// A weekend day or statutory holiday.
    RestDay,
}

impl DayType {
    /// Maps a work day flag to a day type.
    pub fn from_is_work_day(is_work_day: bool) -> Self {
        if is_work_day {
            DayType::WorkDay
        } else {
            DayType::RestDay
        }
    }

    /// Returns true for work days.
    pub fn is_work_day(self) -> bool {
        self == DayType::WorkDay
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::WorkDay => write!(f, "work day"),
            DayType::RestDay => write!(f, "rest day"),
        }
    }
}

/// Classifies dates as work days or rest days.
///
/// Implementations may not be able to classify every date (for example when
/// holiday data for a year is unavailable) and report that as
/// `CalendarLookup`.
pub trait ShiftCalendar: Send + Sync {
    /// Returns whether `date` is a work day.
    fn is_work_day(&self, date: NaiveDate) -> EngineResult<bool>;

    /// Returns the [`DayType`] of `date`.
    fn day_type(&self, date: NaiveDate) -> EngineResult<DayType> {
        self.is_work_day(date).map(DayType::from_is_work_day)
    }
}

/// A calendar driven by a table of holidays and make-up workdays.
///
/// Without an entry for the date, Monday to Friday are work days and
/// weekends are rest days.
///
/// # Example
///
/// ```
/// use work_hours_engine::calculation::{HolidayCalendar, ShiftCalendar};
/// use work_hours_engine::config::{CalendarConfig, CalendarDay};
/// use chrono::NaiveDate;
///
/// let mut config = CalendarConfig::weekdays_only(2025, 2025);
/// config.holidays.push(CalendarDay {
///     date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     name: "National Day".to_string(),
/// });
/// let calendar = HolidayCalendar::from_config(&config);
///
/// // A Wednesday, but a holiday.
/// assert!(!calendar.is_work_day(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap()).unwrap());
/// // Outside the supported range.
/// assert!(calendar.is_work_day(NaiveDate::from_ymd_opt(2030, 1, 2).unwrap()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    first_year: i32,
    last_year: i32,
    holidays: HashSet<NaiveDate>,
    workdays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    /// Builds a calendar from its configuration.
    pub fn from_config(config: &CalendarConfig) -> Self {
        Self {
            first_year: config.first_year,
            last_year: config.last_year,
            holidays: config.holidays.iter().map(|day| day.date).collect(),
            workdays: config.workdays.iter().map(|day| day.date).collect(),
        }
    }

    /// The inclusive range of years this calendar can classify.
    pub fn supported_years(&self) -> (i32, i32) {
        (self.first_year, self.last_year)
    }
}

impl ShiftCalendar for HolidayCalendar {
    fn is_work_day(&self, date: NaiveDate) -> EngineResult<bool> {
        let year = date.year();
        if year < self.first_year || year > self.last_year {
            return Err(EngineError::CalendarLookup {
                date,
                message: format!(
                    "no holiday data for {} (supported years {}-{})",
                    year, self.first_year, self.last_year
                ),
            });
        }

        if self.workdays.contains(&date) {
            return Ok(true);
        }
        if self.holidays.contains(&date) {
            return Ok(false);
        }

        Ok(!matches!(date.weekday(), Weekday::Sat | Weekday::Sun))
    }
}
