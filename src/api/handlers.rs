//! HTTP request handlers for the Work Hours Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::{DayType, compute_hours};
use crate::store::{aggregate_month, lookup_day, record_day};

use super::request::{ComputeRequest, RecordRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, DayResponse, MonthResponse, RecordResponse,
    ShiftsResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hours/compute", post(compute_handler))
        .route("/hours/record", post(record_handler))
        .route("/hours/:year/:month", get(month_handler))
        .route("/hours/:year/:month/:day", get(day_handler))
        .route("/calendar/:date", get(calendar_handler))
        .route("/shifts", get(shifts_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(error: impl Into<ApiErrorResponse>) -> Response {
    let error = error.into();
    json_response(error.status, error.error)
}

/// Maps a JSON body rejection to an API error.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn path_rejection_error(correlation_id: Uuid, rejection: PathRejection) -> ApiError {
    let body_text = rejection.body_text();
    warn!(
        correlation_id = %correlation_id,
        error = %body_text,
        "Invalid path parameters"
    );
    ApiError::invalid_path(body_text)
}

/// Handler for POST /hours/compute.
///
/// Computes effective and total hours for one day without storing them.
async fn compute_handler(
    State(state): State<AppState>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing compute request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(json_rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    let started = Instant::now();
    match compute_hours(
        request.start_time,
        request.end_time,
        &request.shift,
        state.config().config(),
    ) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                shift = %result.shift,
                effective_hours = result.hours.effective_hours,
                total_hours = result.hours.total_hours,
                duration_us = started.elapsed().as_micros(),
                "Computation completed"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Computation failed"
            );
            error_response(err)
        }
    }
}

/// Handler for POST /hours/record.
///
/// Classifies the date, computes the day's hours and stores them. Rest days
/// are stored without effective hours.
async fn record_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing record request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(json_rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    let calculation = match compute_hours(
        request.start_time,
        request.end_time,
        &request.shift,
        state.config().config(),
    ) {
        Ok(calculation) => calculation,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                date = %request.date,
                error = %err,
                "Not recording: computation failed"
            );
            return error_response(err);
        }
    };

    let day_type = match state.calendar().day_type(request.date) {
        Ok(day_type) => day_type,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                date = %request.date,
                error = %err,
                "Not recording: calendar lookup failed"
            );
            return error_response(err);
        }
    };

    // The store writes to disk, so the write runs on the blocking pool while
    // this request holds the lock.
    let store = state.store().clone().lock_owned().await;
    let (date, hours, is_work_day) = (request.date, calculation.hours, day_type.is_work_day());
    let stored = match tokio::task::spawn_blocking(move || {
        let mut store = store;
        record_day(&mut store, date, hours, is_work_day)
    })
    .await
    {
        Ok(stored) => stored,
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                date = %request.date,
                error = %err,
                "Recording task failed"
            );
            return error_response(ApiErrorResponse::internal(ApiError::with_details(
                "INTERNAL_ERROR",
                "Recording did not complete",
                err.to_string(),
            )));
        }
    };

    match stored {
        Ok(hours) => {
            let message = if hours.is_zero() { "cleared" } else { "recorded" };
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                day_type = %day_type,
                outcome = message,
                "Record request completed"
            );
            json_response(
                StatusCode::OK,
                RecordResponse {
                    date: request.date,
                    day_type,
                    hours,
                    message: message.to_string(),
                },
            )
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                date = %request.date,
                error = %err,
                "Recording failed"
            );
            error_response(err)
        }
    }
}

/// Handler for GET /hours/:year/:month/:day.
async fn day_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month, day) = match path {
        Ok(Path(parts)) => parts,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(path_rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
        warn!(correlation_id = %correlation_id, year, month, day, "Invalid date");
        return error_response(ApiErrorResponse::bad_request(ApiError::invalid_path(
            format!("Invalid date: {}-{}-{}", year, month, day),
        )));
    };

    info!(correlation_id = %correlation_id, %date, "Looking up day");

    let hours = {
        let store = state.store().lock().await;
        lookup_day(&store, date)
    };

    match hours {
        Ok(hours) => {
            // A record may predate the calendar's supported range.
            let day_type = state.calendar().day_type(date).ok();
            json_response(
                StatusCode::OK,
                DayResponse {
                    date,
                    hours,
                    day_type,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Lookup failed");
            error_response(err)
        }
    }
}

/// Handler for GET /hours/:year/:month.
async fn month_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let (year, month) = match path {
        Ok(Path(parts)) => parts,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(path_rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    if !(1..=12).contains(&month) {
        warn!(correlation_id = %correlation_id, month, "Invalid month");
        return error_response(ApiErrorResponse::bad_request(ApiError::invalid_path(
            format!("Invalid month: {}", month),
        )));
    }

    info!(correlation_id = %correlation_id, year, month, "Aggregating month");

    let aggregate = {
        let store = state.store().lock().await;
        aggregate_month(&store, year, month)
    };

    match aggregate {
        Ok(aggregate) => json_response(
            StatusCode::OK,
            MonthResponse {
                summary: aggregate.summary(),
                aggregate,
            },
        ),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Aggregation failed");
            error_response(err)
        }
    }
}

/// Handler for GET /calendar/:date.
async fn calendar_handler(
    State(state): State<AppState>,
    path: Result<Path<NaiveDate>, PathRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let date = match path {
        Ok(Path(date)) => date,
        Err(rejection) => {
            return error_response(ApiErrorResponse::bad_request(path_rejection_error(
                correlation_id,
                rejection,
            )));
        }
    };

    match state.calendar().day_type(date) {
        Ok(day_type) => {
            info!(correlation_id = %correlation_id, %date, %day_type, "Classified date");
            json_response(
                StatusCode::OK,
                CalendarResponse {
                    date,
                    day_type,
                    is_work_day: day_type == DayType::WorkDay,
                },
            )
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Calendar lookup failed");
            error_response(err)
        }
    }
}

/// Handler for GET /shifts.
async fn shifts_handler(State(state): State<AppState>) -> Response {
    let shifts = state
        .config()
        .config()
        .shifts()
        .into_iter()
        .cloned()
        .collect();
    json_response(StatusCode::OK, ShiftsResponse { shifts })
}
