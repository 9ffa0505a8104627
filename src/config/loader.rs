//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading shift and
//! calendar configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftDefinition;

use super::types::{CalendarConfig, ShiftsConfig, WorkHoursConfig};

/// Loads and provides access to work hours configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query shift definitions and calendar data.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── shifts.yaml    # Shift definitions
/// └── calendar.yaml  # Holidays and make-up workdays
/// ```
///
/// # Example
///
/// ```no_run
/// use work_hours_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// let shift = loader.get_shift("standard-8am").unwrap();
/// println!("Work starts at {}", shift.business_time);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: WorkHoursConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, is not valid YAML, or
    /// contains a shift definition whose boundaries are out of order.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let shifts_path = path.join("shifts.yaml");
        let shifts = Self::load_yaml::<ShiftsConfig>(&shifts_path)?;

        let calendar_path = path.join("calendar.yaml");
        let calendar = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        if calendar.first_year > calendar.last_year {
            return Err(EngineError::ConfigParseError {
                path: calendar_path.display().to_string(),
                message: format!(
                    "first_year {} is after last_year {}",
                    calendar.first_year, calendar.last_year
                ),
            });
        }

        debug!(
            shifts = shifts.shifts.len(),
            holidays = calendar.holidays.len(),
            workdays = calendar.workdays.len(),
            "Loaded configuration from {}",
            path.display()
        );

        let config = WorkHoursConfig::new(shifts.shifts, calendar)?;
        Ok(Self { config })
    }

    /// Wraps an already constructed configuration.
    pub fn from_config(config: WorkHoursConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &WorkHoursConfig {
        &self.config
    }

    /// Gets a shift definition by name.
    ///
    /// Returns `InvalidShift` when no definition carries that name.
    pub fn get_shift(&self, name: &str) -> EngineResult<&ShiftDefinition> {
        self.config.shift(name)
    }

    /// Returns the calendar configuration.
    pub fn calendar(&self) -> &CalendarConfig {
        self.config.calendar()
    }
}
