//! Response types for the Work Hours Engine API.
//!
//! This module defines the success bodies, the error response structures and
//! error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;
use crate::error::EngineError;
use crate::models::{MonthlyAggregate, ShiftDefinition, WorkHours};

/// Body returned by `POST /hours/record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// The recorded day.
    pub date: NaiveDate,
    /// Whether the day was classified as a work day or a rest day.
    pub day_type: DayType,
    /// The hours as stored.
    pub hours: WorkHours,
    /// "recorded", or "cleared" when both hours are zero.
    pub message: String,
}

/// Body returned by `GET /hours/:year/:month/:day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayResponse {
    /// The requested day.
    pub date: NaiveDate,
    /// The stored hours, zero when nothing was recorded.
    pub hours: WorkHours,
    /// The day's classification, absent when the calendar has no data for it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_type: Option<DayType>,
}

/// Body returned by `GET /hours/:year/:month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthResponse {
    /// The exact sums.
    #[serde(flatten)]
    pub aggregate: MonthlyAggregate,
    /// The sums rounded to two decimals for display.
    pub summary: String,
}

/// Body returned by `GET /calendar/:date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The requested day.
    pub date: NaiveDate,
    /// The day's classification.
    pub day_type: DayType,
    /// Shorthand for `day_type == work_day`.
    pub is_work_day: bool,
}

/// Body returned by `GET /shifts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftsResponse {
    /// Every configured shift, earliest start first.
    pub shifts: Vec<ShiftDefinition>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid path parameter error response.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::new("INVALID_PATH", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying `error`.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// A 500 response carrying `error`.
    pub fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidShiftDefinition { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::InvalidShift { name } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_SHIFT",
                    message,
                    format!("The shift '{}' is not configured on this server", name),
                ),
            ),
            EngineError::InvalidTimeRange { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_TIME_RANGE",
                    message,
                    "Clock-out must not be earlier than clock-in",
                ),
            ),
            EngineError::InvalidHours { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_HOURS",
                    message,
                    "Hours must be zero or positive; please re-enter the times",
                ),
            ),
            EngineError::CalendarLookup { .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "CALENDAR_LOOKUP_FAILED",
                    message,
                    "The date could not be classified as a work day or rest day",
                ),
            ),
            EngineError::MissingConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("MISSING_CONFIG", "Store is missing data", message),
            },
            EngineError::StoreIo { .. } | EngineError::StoreFormat { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("STORE_ERROR", "Failed to access the store", message),
            },
        }
    }
}
