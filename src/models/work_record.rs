//! Work hour pairs and monthly aggregates.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A pair of effective (payable) and total (attendance) hours for one day.
///
/// This is both the engine's output and the record persisted per day. The
/// effective field is stored under `effect_hours` to match the ledger layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkHours {
    /// Hours credited as payable work.
    #[serde(rename = "effect_hours", alias = "effective_hours")]
    pub effective_hours: f64,
    /// Hours of attendance, after unpaid break deductions.
    pub total_hours: f64,
}

impl WorkHours {
    /// No hours at all.
    pub const ZERO: WorkHours = WorkHours {
        effective_hours: 0.0,
        total_hours: 0.0,
    };

    /// Creates a new pair.
    pub fn new(effective_hours: f64, total_hours: f64) -> Self {
        Self {
            effective_hours,
            total_hours,
        }
    }

    /// Returns true when both values are zero.
    pub fn is_zero(&self) -> bool {
        self.effective_hours == 0.0 && self.total_hours == 0.0
    }

    /// The same pair with effective hours discarded, as stored for rest days.
    pub fn without_credit(self) -> Self {
        Self {
            effective_hours: 0.0,
            ..self
        }
    }
}

impl std::ops::Add for WorkHours {
    type Output = WorkHours;

    fn add(self, other: WorkHours) -> WorkHours {
        WorkHours {
            effective_hours: self.effective_hours + other.effective_hours,
            total_hours: self.total_hours + other.total_hours,
        }
    }
}

impl std::iter::Sum for WorkHours {
    fn sum<I: Iterator<Item = WorkHours>>(iter: I) -> Self {
        iter.fold(WorkHours::ZERO, |acc, hours| acc + hours)
    }
}

/// The sum of all recorded days in a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// The year.
    pub year: i32,
    /// The month (1-12).
    pub month: u32,
    /// Sum of effective hours over the month's records.
    pub effective_hours: f64,
    /// Sum of total hours over the month's records.
    pub total_hours: f64,
    /// How many days carry a record.
    pub days_recorded: usize,
}

impl MonthlyAggregate {
    /// An aggregate for a month without records.
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            effective_hours: 0.0,
            total_hours: 0.0,
            days_recorded: 0,
        }
    }

    /// The summed pair.
    pub fn hours(&self) -> WorkHours {
        WorkHours::new(self.effective_hours, self.total_hours)
    }

    /// A one-line display summary with hours rounded to two decimals.
    pub fn summary(&self) -> String {
        format!(
            "{}-{:02}: effective {} h, total {} h over {} day(s)",
            self.year,
            self.month,
            round_hours(self.effective_hours),
            round_hours(self.total_hours),
            self.days_recorded
        )
    }
}

/// Rounds hours to two decimal places for display.
///
/// The engine never rounds; this is applied only when presenting values.
///
/// # Example
///
/// ```
/// use work_hours_engine::models::round_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_hours(7.833333333333333), Decimal::new(783, 2));
/// assert_eq!(round_hours(8.0).to_string(), "8");
/// ```
pub fn round_hours(hours: f64) -> Decimal {
    Decimal::from_f64_retain(hours)
        .unwrap_or_default()
        .round_dp(2)
        .normalize()
}
