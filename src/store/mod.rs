//! Persistence for the Work Hours Engine.
//!
//! This module provides the category/key store backed by a JSON document and
//! the day ledger kept inside its `WorkHours` category.

mod config_store;
mod ledger;

pub use config_store::{ConfigStore, SYSTEM_CATEGORY, WORK_HOURS_CATEGORY, default_categories};
pub use ledger::{aggregate_month, lookup_day, record_day};
