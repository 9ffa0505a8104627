//! Request types for the Work Hours Engine API.
//!
//! This module defines the JSON request structures for the `/hours/compute`
//! and `/hours/record` endpoints.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Request body for the `/hours/compute` endpoint.
///
/// Times are `HH:MM` or `HH:MM:SS`. A missing, `null` or empty time counts as
/// not submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeRequest {
    /// Clock-in time.
    #[serde(default, with = "crate::models::clock::option")]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time.
    #[serde(default, with = "crate::models::clock::option")]
    pub end_time: Option<NaiveTime>,
    /// The shift to compute against (e.g. "standard-8am").
    pub shift: String,
}

/// Request body for the `/hours/record` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The day being recorded.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(default, with = "crate::models::clock::option")]
    pub start_time: Option<NaiveTime>,
    /// Clock-out time.
    #[serde(default, with = "crate::models::clock::option")]
    pub end_time: Option<NaiveTime>,
    /// The shift to compute against.
    pub shift: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_compute_request() {
        let json = r#"{
            "start_time": "08:00",
            "end_time": "17:30:00",
            "shift": "standard-8am"
        }"#;

        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(8, 0, 0));
        assert_eq!(request.end_time, NaiveTime::from_hms_opt(17, 30, 0));
        assert_eq!(request.shift, "standard-8am");
    }

    #[test]
    fn test_missing_and_empty_times_are_absent() {
        let json = r#"{"start_time": "", "shift": "standard-8am"}"#;

        let request: ComputeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.start_time, None);
        assert_eq!(request.end_time, None);
    }

    #[test]
    fn test_malformed_time_is_rejected() {
        let json = r#"{"start_time": "8am", "shift": "standard-8am"}"#;
        assert!(serde_json::from_str::<ComputeRequest>(json).is_err());
    }

    #[test]
    fn test_deserialize_record_request() {
        let json = r#"{
            "date": "2025-03-07",
            "start_time": "09:30",
            "end_time": "18:30",
            "shift": "standard-8am"
        }"#;

        let request: RecordRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 3, 7).unwrap());
        assert_eq!(request.start_time, NaiveTime::from_hms_opt(9, 30, 0));
    }

    #[test]
    fn test_record_request_requires_date() {
        let json = r#"{"shift": "standard-8am"}"#;
        let err = serde_json::from_str::<RecordRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `date`"));
    }
}
