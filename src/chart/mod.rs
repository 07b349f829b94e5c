//! Chart - Data Source for the Spark-Line Display
//!
//! The adapter is the passive interface a chart widget reads by position;
//! the sparkline module is the terminal stand-in for such a widget.

pub mod adapter;
pub mod sparkline;
