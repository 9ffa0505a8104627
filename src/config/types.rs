//! Configuration types for work hours accounting.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftDefinition;

/// Shift configuration file structure (`shifts.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftsConfig {
    /// The shift definitions available to callers.
    pub shifts: Vec<ShiftDefinition>,
}

/// A dated calendar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The date of the entry.
    pub date: NaiveDate,
    /// What the entry is for (e.g. "National Day").
    #[serde(default)]
    pub name: String,
}

/// Calendar configuration file structure (`calendar.yaml`).
///
/// Holidays turn weekdays into rest days; make-up workdays turn weekend days
/// into work days. Dates outside `first_year..=last_year` cannot be classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// First year with holiday data.
    pub first_year: i32,
    /// Last year with holiday data.
    pub last_year: i32,
    /// Statutory rest days.
    #[serde(default)]
    pub holidays: Vec<CalendarDay>,
    /// Weekend days that are worked in exchange for a holiday.
    #[serde(default)]
    pub workdays: Vec<CalendarDay>,
}

impl CalendarConfig {
    /// A calendar with no holidays where Monday-Friday are work days.
    pub fn weekdays_only(first_year: i32, last_year: i32) -> Self {
        Self {
            first_year,
            last_year,
            holidays: Vec::new(),
            workdays: Vec::new(),
        }
    }
}

/// The complete configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct WorkHoursConfig {
    /// Shift definitions by name.
    shifts: HashMap<String, ShiftDefinition>,
    /// Holiday calendar data.
    calendar: CalendarConfig,
}

impl WorkHoursConfig {
    /// Creates a configuration after validating every shift definition.
    ///
    /// Returns `InvalidShiftDefinition` for a definition whose boundaries are
    /// out of order, or whose name is used twice.
    pub fn new(shifts: Vec<ShiftDefinition>, calendar: CalendarConfig) -> EngineResult<Self> {
        let mut by_name = HashMap::with_capacity(shifts.len());
        for shift in shifts {
            shift.validate()?;
            if by_name.contains_key(&shift.name) {
                return Err(EngineError::InvalidShiftDefinition {
                    name: shift.name,
                    message: "defined more than once".to_string(),
                });
            }
            by_name.insert(shift.name.clone(), shift);
        }

        Ok(Self {
            shifts: by_name,
            calendar,
        })
    }

    /// The built-in shifts with a weekday-only calendar covering every year
    /// chrono can represent.
    pub fn builtin() -> Self {
        let shifts = ShiftDefinition::builtin()
            .into_iter()
            .map(|shift| (shift.name.clone(), shift))
            .collect();
        Self {
            shifts,
            calendar: CalendarConfig::weekdays_only(NaiveDate::MIN.year(), NaiveDate::MAX.year()),
        }
    }

    /// Looks up a shift definition by name.
    pub fn shift(&self, name: &str) -> EngineResult<&ShiftDefinition> {
        self.shifts
            .get(name)
            .ok_or_else(|| EngineError::InvalidShift {
                name: name.to_string(),
            })
    }

    /// All shift definitions, ordered by their start of work.
    pub fn shifts(&self) -> Vec<&ShiftDefinition> {
        let mut shifts: Vec<&ShiftDefinition> = self.shifts.values().collect();
        shifts.sort_by(|a, b| {
            a.business_time
                .cmp(&b.business_time)
                .then_with(|| a.name.cmp(&b.name))
        });
        shifts
    }

    /// Returns the calendar configuration.
    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }
}
