//! Records Module
//!
//! Drug catalogue model, the lazily fetched record store, and the query
//! engine that runs over its snapshot.

mod fetch;
mod model;
mod price;
mod query;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use fetch::{fetcher_from_config, DocumentFetcher, FileFetcher, HttpFetcher, StaticFetcher};
pub use model::{ActiveIngredient, CodeInfo, CompanyInfo, DrugRecord, PriceInfo};
pub use price::normalize_price;
pub use query::{
    find_by_barcode, list_records, search_by_active_ingredient, search_by_company,
    search_by_name, stats, IngredientMatch, Page, RecordStats,
};
pub use store::{LoadStatus, RecordStore};

// == Public Constants ==
/// Maximum number of rows returned by a substring search
pub const MAX_RESULTS: usize = 20;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Maximum accepted search needle length in bytes
pub const MAX_NEEDLE_LENGTH: usize = 256;
