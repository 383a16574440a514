//! Response DTOs for the drug API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names are
//! camelCase on the wire.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::records::{
    normalize_price, ActiveIngredient, DrugRecord, IngredientMatch, LoadStatus, Page, RecordStats,
};

/// Search row shared by the name and company searches
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugSummary {
    pub name: String,
    pub barcode: String,
    pub company: String,
    /// Normalized label price
    pub label_price: f64,
    /// Label price exactly as sourced
    pub original_price: Option<String>,
}

impl From<&DrugRecord> for DrugSummary {
    fn from(record: &DrugRecord) -> Self {
        Self {
            name: record.name.clone(),
            barcode: record.barcode().to_string(),
            company: record.company_name().to_string(),
            label_price: normalize_price(record.label_price()),
            original_price: record.label_price().map(str::to_string),
        }
    }
}

/// Listing row (GET /drugs)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugListItem {
    #[serde(flatten)]
    pub summary: DrugSummary,
    pub atc_code: String,
}

impl From<&DrugRecord> for DrugListItem {
    fn from(record: &DrugRecord) -> Self {
        Self {
            summary: DrugSummary::from(record),
            atc_code: record.atc_code().to_string(),
        }
    }
}

/// Full record for the barcode lookup (GET /drugs/:barcode)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugDetail {
    #[serde(flatten)]
    pub summary: DrugSummary,
    pub atc_code: String,
    pub active_ingredients: Vec<ActiveIngredient>,
}

impl From<&DrugRecord> for DrugDetail {
    fn from(record: &DrugRecord) -> Self {
        Self {
            summary: DrugSummary::from(record),
            atc_code: record.atc_code().to_string(),
            active_ingredients: record.active_ingredients.clone(),
        }
    }
}

/// Ingredient search row: the drug plus the ingredient that matched
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientHit {
    #[serde(flatten)]
    pub summary: DrugSummary,
    pub active_ingredient: ActiveIngredient,
}

impl From<IngredientMatch<'_>> for IngredientHit {
    fn from(hit: IngredientMatch<'_>) -> Self {
        Self {
            summary: DrugSummary::from(hit.record),
            active_ingredient: hit.ingredient.clone(),
        }
    }
}

/// Response body for the listing endpoint
#[derive(Debug, Clone, Serialize)]
pub struct DrugListResponse {
    pub page: usize,
    pub limit: usize,
    /// Size of the whole snapshot
    pub total: usize,
    /// Number of items on this page
    pub shown: usize,
    pub items: Vec<DrugListItem>,
}

impl From<Page<'_>> for DrugListResponse {
    fn from(page: Page<'_>) -> Self {
        let items: Vec<DrugListItem> = page.items.into_iter().map(DrugListItem::from).collect();
        Self {
            page: page.page,
            limit: page.limit,
            total: page.total,
            shown: items.len(),
            items,
        }
    }
}

/// Envelope for every search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse<T> {
    /// The search term as received
    pub query: String,
    /// Number of results returned
    pub found: usize,
    pub results: Vec<T>,
}

impl<T> SearchResponse<T> {
    pub fn new(query: impl Into<String>, results: Vec<T>) -> Self {
        Self {
            query: query.into(),
            found: results.len(),
            results,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_drugs: usize,
    pub total_companies: usize,
    /// Load state of the snapshot the counts were taken from
    pub status: LoadStatus,
}

impl StatsResponse {
    pub fn new(stats: RecordStats, status: LoadStatus) -> Self {
        Self {
            total_drugs: stats.total_drugs,
            total_companies: stats.total_companies,
            status,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
    /// Load state of the catalogue snapshot
    pub snapshot: LoadStatus,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(snapshot: LoadStatus) -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            snapshot,
        }
    }
}

/// Response body for the service index (GET /)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexResponse {
    pub message: String,
    pub total_drugs: usize,
    pub status: LoadStatus,
    /// Route pattern to description
    pub endpoints: BTreeMap<String, String>,
}

impl IndexResponse {
    pub fn new(total_drugs: usize, status: LoadStatus) -> Self {
        let endpoints = [
            ("/drugs", "List all drugs (paginated: ?page=&limit=)"),
            ("/drugs/:barcode", "Look up a drug by barcode"),
            ("/search/name/:needle", "Search drugs by name"),
            ("/search/company/:needle", "Search drugs by company"),
            ("/search/ingredient/:needle", "Search drugs by active ingredient"),
            ("/stats", "Catalogue statistics"),
            ("/health", "Health check"),
        ]
        .into_iter()
        .map(|(path, description)| (path.to_string(), description.to_string()))
        .collect();

        Self {
            message: "Drug Lookup API".to_string(),
            total_drugs,
            status,
            endpoints,
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
