//! Configuration loading and management for the Work Hours Engine.
//!
//! This module provides functionality to load shift definitions and holiday
//! calendar data from YAML files, plus the runtime settings of the server
//! binary.
//!
//! # Example
//!
//! ```no_run
//! use work_hours_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! for shift in config.config().shifts() {
//!     println!("{} starts at {}", shift.name, shift.business_time);
//! }
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::Settings;
pub use types::{CalendarConfig, CalendarDay, ShiftsConfig, WorkHoursConfig};
