//! Core data models for the Work Hours Engine.
//!
//! This module contains the domain models used throughout the engine.

pub mod clock;
mod shift;
mod work_record;

pub use clock::{format_clock_time, parse_clock_time};
pub use shift::{STANDARD_8AM, STANDARD_830AM, ShiftDefinition};
pub use work_record::{MonthlyAggregate, WorkHours, round_hours};
