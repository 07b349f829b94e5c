//! Tokio Runtime Bridge
//!
//! The dashboard loop runs on a plain thread, but the HTTP client requires
//! tokio. This module owns the shared runtime that fetch tasks are spawned
//! onto.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

/// Global tokio runtime instance
static TOKIO_RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Get or initialize the global tokio runtime
fn get_runtime() -> &'static Runtime {
    TOKIO_RUNTIME.get_or_init(|| Runtime::new().expect("Failed to create tokio runtime"))
}

/// Spawn a task onto the shared runtime.
///
/// Returns the `JoinHandle` so the owner can abort the task on shutdown.
pub fn spawn_in_tokio<F>(future: F) -> JoinHandle<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    get_runtime().spawn(future)
}

/// Get a handle to the tokio runtime for advanced use cases
pub fn runtime_handle() -> tokio::runtime::Handle {
    get_runtime().handle().clone()
}
