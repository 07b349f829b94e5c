//! Service Events
//!
//! Events emitted by the service layer to be consumed by the state layer.

use std::sync::Arc;

use crate::domain::record::DailyCases;

/// Remote feed a fetch targets
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Feed {
    /// Nationwide daily series
    National,
    /// Per-state daily series
    States,
}

impl std::fmt::Display for Feed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Feed::National => write!(f, "national"),
            Feed::States => write!(f, "states"),
        }
    }
}

/// Events emitted by the service layer
///
/// The two loaded variants carry the batch exactly as delivered upstream
/// (newest-first); the state layer owns the reversal and grouping.
#[derive(Clone, Debug)]
pub enum ServiceEvent {
    /// National daily batch fetched
    NationalLoaded(Vec<DailyCases>),

    /// Per-state daily batch fetched
    StatesLoaded(Vec<DailyCases>),

    /// A fetch failed. Logged only; the dependent display stays in its
    /// pre-fetch state and the other feed is unaffected.
    FetchFailed {
        /// Feed that failed
        feed: Feed,
        /// Rendered error message
        message: Arc<str>,
    },
}
