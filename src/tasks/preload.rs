//! Snapshot Preload Task
//!
//! Background task that populates the record store before the first request.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::records::{LoadStatus, RecordStore};

/// Spawns a task that triggers the one-time catalogue fetch.
///
/// Requests arriving while the fetch is in flight wait on the same
/// initialization rather than starting a second download.
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RecordStore::new(fetcher));
/// let preload_handle = spawn_preload_task(store.clone());
/// // Later, during shutdown:
/// preload_handle.abort();
/// ```
pub fn spawn_preload_task(records: Arc<RecordStore>) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Preloading drug catalogue");

        let count = records.records().await.len();

        match records.status() {
            LoadStatus::Failed { error, .. } => {
                warn!("Preload finished with a failed fetch: {}", error)
            }
            _ => info!("Preload complete: {} drug records cached", count),
        }
    })
}
