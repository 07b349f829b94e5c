//! Service Hub
//!
//! Central orchestrator for the fetch tasks. Handles startup, teardown,
//! and hands the event channel to the state layer.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{Receiver, Sender};
use tokio::task::JoinHandle;

use crate::domain::config::ApiConfig;
use crate::error::Result;
use crate::services::api::CovidApi;
use crate::services::events::{Feed, ServiceEvent};
use crate::services::runtime;

/// Central hub for the remote data services
pub struct ServiceHub {
    /// API client shared by the fetch tasks
    api: Arc<CovidApi>,
    /// Event sender (for internal use)
    tx: Sender<ServiceEvent>,
    /// Event receiver (for the state layer)
    rx: Receiver<ServiceEvent>,
    /// Outstanding fetch tasks, aborted on stop
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl ServiceHub {
    /// Create a new service hub with the given API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let (tx, rx) = crossbeam_channel::unbounded();
        let api = Arc::new(CovidApi::new(config)?);

        Ok(Self {
            api,
            tx,
            rx,
            tasks: Mutex::new(Vec::new()),
        })
    }

    /// Create a service hub with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(&ApiConfig::default())
    }

    /// Get the event receiver for the state layer
    ///
    /// Events from both fetches are multiplexed into this single channel.
    pub fn events(&self) -> Receiver<ServiceEvent> {
        self.rx.clone()
    }

    /// Start both fetches.
    ///
    /// The two tasks are independent: either may complete first, and a
    /// failure in one neither blocks nor rolls back the other.
    pub fn start(&self) {
        tracing::info!("Starting daily data fetches");
        let national = self.spawn_fetch(Feed::National);
        let states = self.spawn_fetch(Feed::States);
        if let Ok(mut tasks) = self.tasks.lock() {
            tasks.push(national);
            tasks.push(states);
        }
    }

    /// Abort any in-flight fetches
    pub fn stop(&self) {
        tracing::info!("Stopping services");
        if let Ok(mut tasks) = self.tasks.lock() {
            for task in tasks.drain(..) {
                task.abort();
            }
        }
    }

    fn spawn_fetch(&self, feed: Feed) -> JoinHandle<()> {
        let api = self.api.clone();
        let tx = self.tx.clone();

        runtime::spawn_in_tokio(async move {
            let result = match feed {
                Feed::National => api
                    .fetch_national_daily()
                    .await
                    .map(ServiceEvent::NationalLoaded),
                Feed::States => api
                    .fetch_states_daily()
                    .await
                    .map(ServiceEvent::StatesLoaded),
            };

            let event = match result {
                Ok(event) => event,
                Err(e) => {
                    tracing::error!("{feed} fetch failed: {e}");
                    ServiceEvent::FetchFailed {
                        feed,
                        message: e.to_string().into(),
                    }
                }
            };

            if tx.send(event).is_err() {
                tracing::warn!("{feed} event dropped: receiver closed");
            }
        })
    }

    /// Emit a service event (mainly for testing)
    #[cfg(test)]
    pub fn emit(&self, event: ServiceEvent) {
        let _ = self.tx.send(event);
    }
}

impl std::fmt::Debug for ServiceHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHub")
            .field("api", &self.api)
            .finish()
    }
}
