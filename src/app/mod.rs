//! App - Terminal Dashboard
//!
//! The dashboard loop is the display layer: it consumes service events,
//! applies user selections, and re-pulls the derived chart values.

pub mod dashboard;
