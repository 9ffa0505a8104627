//! Shift definition model.
//!
//! A shift definition is the named set of clock boundaries that governs one
//! work schedule variant: when work nominally starts, how long the grace
//! window for arrivals is, where lunch sits, and when the evening windows open.

use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Name of the built-in shift starting at 08:00.
pub const STANDARD_8AM: &str = "standard-8am";

/// Name of the built-in shift starting at 08:30.
pub const STANDARD_830AM: &str = "standard-8:30am";

/// The time boundaries of a single shift.
///
/// All boundaries are strictly increasing in the order the fields are declared;
/// [`ShiftDefinition::validate`] enforces this for definitions loaded from
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    /// The shift name callers refer to (e.g. "standard-8am").
    pub name: String,
    /// Nominal start of work.
    #[serde(with = "super::clock")]
    pub business_time: NaiveTime,
    /// End of the grace window; arrivals before it still count as on time.
    #[serde(with = "super::clock")]
    pub flexible_business_time: NaiveTime,
    /// Start of the lunch break.
    #[serde(with = "super::clock")]
    pub noon_rest_time: NaiveTime,
    /// End of the lunch break.
    #[serde(with = "super::clock")]
    pub noon_business_time: NaiveTime,
    /// Nominal end of work.
    #[serde(with = "super::clock")]
    pub closing_time: NaiveTime,
    /// Start of the evening overtime window.
    #[serde(with = "super::clock")]
    pub afternoon_business_time: NaiveTime,
    /// Fixed latest closing time used by the standard and late arrival paths.
    #[serde(with = "super::clock")]
    pub flexible_closing_time: NaiveTime,
}

impl ShiftDefinition {
    /// The built-in 08:00 shift.
    pub fn standard_8am() -> Self {
        Self {
            name: STANDARD_8AM.to_string(),
            business_time: hm(8, 0),
            flexible_business_time: hm(9, 5),
            noon_rest_time: hm(12, 0),
            noon_business_time: hm(13, 30),
            closing_time: hm(17, 30),
            afternoon_business_time: hm(18, 0),
            flexible_closing_time: hm(19, 5),
        }
    }

    /// The built-in 08:30 shift.
    pub fn standard_830am() -> Self {
        Self {
            name: STANDARD_830AM.to_string(),
            business_time: hm(8, 30),
            flexible_business_time: hm(9, 35),
            noon_rest_time: hm(12, 30),
            noon_business_time: hm(14, 0),
            closing_time: hm(18, 0),
            afternoon_business_time: hm(18, 30),
            flexible_closing_time: hm(19, 35),
        }
    }

    /// All built-in shift definitions.
    pub fn builtin() -> Vec<Self> {
        vec![Self::standard_8am(), Self::standard_830am()]
    }

    /// The personal closing time for a grace-window arrival: ten hours after
    /// clock-in.
    pub fn personal_closing_time(&self, start_time: NaiveTime) -> NaiveTime {
        start_time + TimeDelta::hours(10)
    }

    /// Checks that every boundary is strictly after the previous one.
    ///
    /// # Example
    ///
    /// ```
    /// use work_hours_engine::models::ShiftDefinition;
    ///
    /// let mut shift = ShiftDefinition::standard_8am();
    /// assert!(shift.validate().is_ok());
    ///
    /// shift.closing_time = shift.noon_rest_time;
    /// assert!(shift.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        let boundaries = [
            ("business_time", self.business_time),
            ("flexible_business_time", self.flexible_business_time),
            ("noon_rest_time", self.noon_rest_time),
            ("noon_business_time", self.noon_business_time),
            ("closing_time", self.closing_time),
            ("afternoon_business_time", self.afternoon_business_time),
            ("flexible_closing_time", self.flexible_closing_time),
        ];

        for pair in boundaries.windows(2) {
            let (earlier_name, earlier) = pair[0];
            let (later_name, later) = pair[1];
            if earlier >= later {
                return Err(EngineError::InvalidShiftDefinition {
                    name: self.name.clone(),
                    message: format!(
                        "{} ({}) must be before {} ({})",
                        earlier_name, earlier, later_name, later
                    ),
                });
            }
        }

        Ok(())
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
