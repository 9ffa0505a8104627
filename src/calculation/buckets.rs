//! Arrival and departure classification.
//!
//! The work hours policy is a decision table: the arrival bucket picks the
//! policy, the departure bucket picks the formula within it. Every boundary
//! is half-open (`lower <= t < upper`).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::ShiftDefinition;

/// When the employee clocked in, relative to the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrivalBucket {
    /// Before the nominal start of work.
    Standard,
    /// Inside the grace window after the nominal start.
    Flexible,
    /// After the grace window closed.
    Late,
}

impl ArrivalBucket {
    /// Classifies a clock-in time.
    ///
    /// # Example
    ///
    /// ```
    /// use work_hours_engine::calculation::ArrivalBucket;
    /// use work_hours_engine::models::ShiftDefinition;
    /// use chrono::NaiveTime;
    ///
    /// let shift = ShiftDefinition::standard_8am();
    /// let at = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    ///
    /// assert_eq!(ArrivalBucket::classify(at(7, 59), &shift), ArrivalBucket::Standard);
    /// assert_eq!(ArrivalBucket::classify(at(8, 0), &shift), ArrivalBucket::Flexible);
    /// assert_eq!(ArrivalBucket::classify(at(9, 5), &shift), ArrivalBucket::Late);
    /// ```
    pub fn classify(start_time: NaiveTime, shift: &ShiftDefinition) -> Self {
        if start_time < shift.business_time {
            ArrivalBucket::Standard
        } else if start_time < shift.flexible_business_time {
            ArrivalBucket::Flexible
        } else {
            ArrivalBucket::Late
        }
    }
}

impl std::fmt::Display for ArrivalBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrivalBucket::Standard => write!(f, "standard"),
            ArrivalBucket::Flexible => write!(f, "flexible"),
            ArrivalBucket::Late => write!(f, "late"),
        }
    }
}

/// When the employee clocked out, relative to the shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartureBucket {
    /// Before lunch starts.
    Morning,
    /// During the lunch break.
    Lunch,
    /// During afternoon work.
    Afternoon,
    /// Between closing time and the start of the evening window.
    EveningGrace,
    /// Inside the evening window, before the closing cut-off.
    Evening,
    /// At or after the closing cut-off.
    Beyond,
}

impl DepartureBucket {
    /// Classifies a clock-out time against a shift and a closing cut-off.
    ///
    /// The cut-off is the shift's fixed flexible closing time for standard and
    /// late arrivals, and the personal closing time for grace-window arrivals.
    pub fn classify(end_time: NaiveTime, shift: &ShiftDefinition, cutoff: NaiveTime) -> Self {
        if end_time < shift.noon_rest_time {
            DepartureBucket::Morning
        } else if end_time < shift.noon_business_time {
            DepartureBucket::Lunch
        } else if end_time < shift.closing_time {
            DepartureBucket::Afternoon
        } else if end_time < shift.afternoon_business_time {
            DepartureBucket::EveningGrace
        } else if end_time < cutoff {
            DepartureBucket::Evening
        } else {
            DepartureBucket::Beyond
        }
    }
}

impl std::fmt::Display for DepartureBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepartureBucket::Morning => write!(f, "morning"),
            DepartureBucket::Lunch => write!(f, "lunch"),
            DepartureBucket::Afternoon => write!(f, "afternoon"),
            DepartureBucket::EveningGrace => write!(f, "evening grace"),
            DepartureBucket::Evening => write!(f, "evening"),
            DepartureBucket::Beyond => write!(f, "beyond cut-off"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn test_arrival_boundaries_are_half_open() {
        let shift = ShiftDefinition::standard_830am();
        assert_eq!(ArrivalBucket::classify(t("08:29"), &shift), ArrivalBucket::Standard);
        assert_eq!(ArrivalBucket::classify(t("08:30"), &shift), ArrivalBucket::Flexible);
        assert_eq!(ArrivalBucket::classify(t("09:34"), &shift), ArrivalBucket::Flexible);
        assert_eq!(ArrivalBucket::classify(t("09:35"), &shift), ArrivalBucket::Late);
    }

    #[test]
    fn test_departure_boundaries_are_half_open() {
        let shift = ShiftDefinition::standard_8am();
        let cutoff = shift.flexible_closing_time;
        let cases = [
            ("11:59", DepartureBucket::Morning),
            ("12:00", DepartureBucket::Lunch),
            ("13:29", DepartureBucket::Lunch),
            ("13:30", DepartureBucket::Afternoon),
            ("17:29", DepartureBucket::Afternoon),
            ("17:30", DepartureBucket::EveningGrace),
            ("17:59", DepartureBucket::EveningGrace),
            ("18:00", DepartureBucket::Evening),
            ("19:04", DepartureBucket::Evening),
            ("19:05", DepartureBucket::Beyond),
            ("23:59", DepartureBucket::Beyond),
        ];

        for (end, expected) in cases {
            assert_eq!(
                DepartureBucket::classify(t(end), &shift, cutoff),
                expected,
                "departure at {}",
                end
            );
        }
    }

    #[test]
    fn test_departure_uses_supplied_cutoff() {
        let shift = ShiftDefinition::standard_8am();
        let personal = shift.personal_closing_time(t("08:30"));
        assert_eq!(
            DepartureBucket::classify(t("18:30"), &shift, personal),
            DepartureBucket::Beyond
        );
        assert_eq!(
            DepartureBucket::classify(t("18:30"), &shift, shift.flexible_closing_time),
            DepartureBucket::Evening
        );
    }

    #[test]
    fn test_bucket_serialization() {
        assert_eq!(
            serde_json::to_string(&DepartureBucket::EveningGrace).unwrap(),
            "\"evening_grace\""
        );
        assert_eq!(serde_json::to_string(&ArrivalBucket::Late).unwrap(), "\"late\"");
    }
}
