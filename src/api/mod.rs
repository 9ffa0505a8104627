//! HTTP API module for the Work Hours Engine.
//!
//! This module provides the REST API endpoints for computing, recording and
//! querying work hours.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ComputeRequest, RecordRequest};
pub use response::{
    ApiError, CalendarResponse, DayResponse, MonthResponse, RecordResponse, ShiftsResponse,
};
pub use state::AppState;
