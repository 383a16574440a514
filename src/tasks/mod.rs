//! Background Tasks Module
//!
//! Contains background tasks that run during server operation.
//!
//! # Tasks
//! - Preload: Populates the catalogue snapshot at startup

mod preload;

pub use preload::spawn_preload_task;
