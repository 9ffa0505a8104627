//! Application state for the Work Hours Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::calculation::{HolidayCalendar, ShiftCalendar};
use crate::config::ConfigLoader;
use crate::store::ConfigStore;

/// Shared application state.
///
/// Contains the loaded shift configuration, the work day calendar and the
/// store. The store sits behind a mutex so each request's read-then-write
/// runs alone.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<dyn ShiftCalendar>,
    store: Arc<Mutex<ConfigStore>>,
}

impl AppState {
    /// Creates a new application state, classifying days with the holiday
    /// calendar from `config`.
    pub fn new(config: ConfigLoader, store: ConfigStore) -> Self {
        let calendar = HolidayCalendar::from_config(config.calendar());
        Self::with_calendar(config, store, Arc::new(calendar))
    }

    /// Creates a new application state with a custom calendar.
    pub fn with_calendar(
        config: ConfigLoader,
        store: ConfigStore,
        calendar: Arc<dyn ShiftCalendar>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            calendar,
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the work day calendar.
    pub fn calendar(&self) -> &dyn ShiftCalendar {
        self.calendar.as_ref()
    }

    /// Returns the shared store. Handlers that write clone the `Arc` to move
    /// an owned guard onto the blocking pool.
    pub fn store(&self) -> &Arc<Mutex<ConfigStore>> {
        &self.store
    }
}
