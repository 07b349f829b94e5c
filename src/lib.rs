//! COVID Tracker Client Library
//!
//! Fetches COVID-19 daily case statistics from the COVID Tracking Project
//! and derives the per-state, time-windowed series a chart layer displays.

pub mod app;
pub mod chart;
pub mod constants;
pub mod domain;
pub mod error;
pub mod services;
pub mod state;
pub mod utils;
