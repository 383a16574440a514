//! Record Store Module
//!
//! Lazily populated, process-wide snapshot of the drug catalogue.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::OnceCell;
use tracing::{error, info};

use crate::error::FetchError;
use crate::records::{DocumentFetcher, DrugRecord, StaticFetcher};

// == Load Status ==
/// Observable state of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadStatus {
    /// No query has triggered a fetch yet
    NotLoaded,
    /// The document was fetched and parsed; `count` may be zero
    #[serde(rename_all = "camelCase")]
    Loaded {
        count: usize,
        loaded_at: DateTime<Utc>,
    },
    /// The fetch failed; queries see an empty snapshot until restart
    #[serde(rename_all = "camelCase")]
    Failed {
        error: String,
        failed_at: DateTime<Utc>,
    },
}

#[derive(Debug)]
struct Snapshot {
    records: Arc<[DrugRecord]>,
    status: LoadStatus,
}

// == Record Store ==
/// Holds the catalogue snapshot, fetched at most once.
pub struct RecordStore {
    /// Source of the raw document
    fetcher: Box<dyn DocumentFetcher>,
    /// Set exactly once, by the first caller of `records`
    snapshot: OnceCell<Snapshot>,
}

impl RecordStore {
    // == Constructor ==
    /// Creates an empty store that will populate itself from `fetcher`.
    pub fn new(fetcher: impl DocumentFetcher + 'static) -> Self {
        Self::from_boxed(Box::new(fetcher))
    }

    pub fn from_boxed(fetcher: Box<dyn DocumentFetcher>) -> Self {
        Self {
            fetcher,
            snapshot: OnceCell::new(),
        }
    }

    /// Creates a store that is already populated with `records`.
    pub fn with_records(records: Vec<DrugRecord>) -> Self {
        let snapshot = Snapshot {
            status: LoadStatus::Loaded {
                count: records.len(),
                loaded_at: Utc::now(),
            },
            records: records.into(),
        };
        Self {
            fetcher: Box::new(StaticFetcher::new(b"[]".to_vec())),
            snapshot: OnceCell::new_with(Some(snapshot)),
        }
    }

    // == Records ==
    /// Returns the snapshot, fetching it on first use.
    ///
    /// Concurrent first callers share a single fetch. A failed fetch is logged
    /// and leaves an empty snapshot in place for the rest of the process.
    pub async fn records(&self) -> Arc<[DrugRecord]> {
        self.snapshot
            .get_or_init(|| self.load())
            .await
            .records
            .clone()
    }

    // == Status ==
    /// Current load state, without triggering a fetch.
    pub fn status(&self) -> LoadStatus {
        self.snapshot
            .get()
            .map(|snapshot| snapshot.status.clone())
            .unwrap_or(LoadStatus::NotLoaded)
    }

    /// Returns true once the snapshot has been populated (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.snapshot.initialized()
    }

    async fn load(&self) -> Snapshot {
        let source = self.fetcher.source();
        info!("Fetching drug catalogue from {}", source);

        match self.fetch_records().await {
            Ok(records) => {
                info!("Loaded {} drug records from {}", records.len(), source);
                Snapshot {
                    status: LoadStatus::Loaded {
                        count: records.len(),
                        loaded_at: Utc::now(),
                    },
                    records: records.into(),
                }
            }
            Err(err) => {
                error!("Failed to load drug catalogue from {}: {}", source, err);
                Snapshot {
                    records: Arc::from(Vec::new()),
                    status: LoadStatus::Failed {
                        error: err.to_string(),
                        failed_at: Utc::now(),
                    },
                }
            }
        }
    }

    async fn fetch_records(&self) -> Result<Vec<DrugRecord>, FetchError> {
        let bytes = self.fetcher.fetch().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
