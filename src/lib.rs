//! Drug API - A read-only lookup service over a cached drug catalogue
//!
//! Fetches the catalogue document once, keeps it in memory, and answers
//! paginated listings, barcode lookups and substring searches against it.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use records::RecordStore;
pub use tasks::spawn_preload_task;
