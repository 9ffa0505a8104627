//! Work Hours Engine
//!
//! This crate computes effective and total work hours from clock-in and
//! clock-out times against configurable shift definitions, classifies dates
//! as work days or rest days, and keeps a per-day ledger with monthly
//! aggregation in a small JSON-backed store. An HTTP API exposes all of it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
