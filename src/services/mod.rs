//! Service Layer
//!
//! The service layer wraps the COVID Tracking API and handles async fetch
//! execution and event delivery to the state layer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                     ServiceHub                       │
//! │  ┌──────────────┐        ┌───────────────────────┐  │
//! │  │   CovidApi   │        │  tokio fetch tasks    │  │
//! │  │  (reqwest)   │        │  (national / states)  │  │
//! │  └──────────────┘        └───────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//!                           │
//!                           ▼ ServiceEvent
//! ┌─────────────────────────────────────────────────────┐
//! │                     State Layer                      │
//! │              (DataState, ChartState)                 │
//! └─────────────────────────────────────────────────────┘
//! ```

mod api;
mod events;
mod hub;
mod runtime;

pub use api::*;
pub use events::*;
pub use hub::*;
pub use runtime::*;
