//! API Handlers
//!
//! HTTP request handlers for each drug API endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    validate_needle, DrugDetail, DrugListResponse, DrugSummary, HealthResponse, IndexResponse,
    IngredientHit, PageQuery, SearchResponse, StatsResponse,
};
use crate::records::{self, fetcher_from_config, RecordStore, DEFAULT_PAGE_LIMIT, MAX_RESULTS};

/// Application state shared across all handlers.
///
/// The record store populates itself once; handlers only read from it.
#[derive(Clone)]
pub struct AppState {
    /// Lazily populated catalogue snapshot
    pub records: Arc<RecordStore>,
    /// Cap on rows returned by substring searches
    pub max_results: usize,
    /// Page size when the caller omits `limit`
    pub default_page_limit: usize,
}

impl AppState {
    /// Creates a new AppState around the given record store with default limits.
    pub fn new(records: RecordStore) -> Self {
        Self {
            records: Arc::new(records),
            max_results: MAX_RESULTS,
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the document fetcher selected by the Config; nothing is fetched yet.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let fetcher = fetcher_from_config(config)?;
        Ok(Self {
            records: Arc::new(RecordStore::from_boxed(fetcher)),
            max_results: config.max_results,
            default_page_limit: config.default_page_limit,
        })
    }
}

fn check_needle(needle: &str) -> Result<()> {
    match validate_needle(needle) {
        Some(error_msg) => Err(ApiError::InvalidRequest(error_msg)),
        None => Ok(()),
    }
}

/// Handler for GET /
///
/// Describes the service and reports how many drugs are loaded.
pub async fn index_handler(State(state): State<AppState>) -> Json<IndexResponse> {
    let snapshot = state.records.records().await;
    Json(IndexResponse::new(snapshot.len(), state.records.status()))
}

/// Handler for GET /drugs
///
/// Lists the catalogue one page at a time.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Json<DrugListResponse> {
    let (page, limit) = query.resolve(state.default_page_limit);
    let snapshot = state.records.records().await;

    let page = records::list_records(&snapshot, page, limit);
    Json(DrugListResponse::from(page))
}

/// Handler for GET /drugs/:barcode
///
/// Looks up a single drug by exact barcode.
pub async fn barcode_handler(
    State(state): State<AppState>,
    Path(barcode): Path<String>,
) -> Result<Json<DrugDetail>> {
    let snapshot = state.records.records().await;

    match records::find_by_barcode(&snapshot, &barcode) {
        Some(record) => Ok(Json(DrugDetail::from(record))),
        None => {
            debug!("Barcode lookup miss: {}", barcode);
            Err(ApiError::NotFound(barcode))
        }
    }
}

/// Handler for GET /search/name/:needle
pub async fn search_name_handler(
    State(state): State<AppState>,
    Path(needle): Path<String>,
) -> Result<Json<SearchResponse<DrugSummary>>> {
    check_needle(&needle)?;
    let snapshot = state.records.records().await;

    let results: Vec<DrugSummary> =
        records::search_by_name(&snapshot, &needle, state.max_results)
            .into_iter()
            .map(DrugSummary::from)
            .collect();

    Ok(Json(SearchResponse::new(needle, results)))
}

/// Handler for GET /search/company/:needle
pub async fn search_company_handler(
    State(state): State<AppState>,
    Path(needle): Path<String>,
) -> Result<Json<SearchResponse<DrugSummary>>> {
    check_needle(&needle)?;
    let snapshot = state.records.records().await;

    let results: Vec<DrugSummary> =
        records::search_by_company(&snapshot, &needle, state.max_results)
            .into_iter()
            .map(DrugSummary::from)
            .collect();

    Ok(Json(SearchResponse::new(needle, results)))
}

/// Handler for GET /search/ingredient/:needle
///
/// Each drug appears at most once, with the first ingredient that matched.
pub async fn search_ingredient_handler(
    State(state): State<AppState>,
    Path(needle): Path<String>,
) -> Result<Json<SearchResponse<IngredientHit>>> {
    check_needle(&needle)?;
    let snapshot = state.records.records().await;

    let results: Vec<IngredientHit> =
        records::search_by_active_ingredient(&snapshot, &needle, state.max_results)
            .into_iter()
            .map(IngredientHit::from)
            .collect();

    Ok(Json(SearchResponse::new(needle, results)))
}

/// Handler for GET /stats
///
/// Returns drug and distinct company counts.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let snapshot = state.records.records().await;
    Json(StatsResponse::new(
        records::stats(&snapshot),
        state.records.status(),
    ))
}

/// Handler for GET /health
///
/// Reports liveness and the snapshot load state without triggering a fetch.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.records.status()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{ActiveIngredient, DrugRecord, LoadStatus, StaticFetcher};

    fn test_state() -> AppState {
        AppState::new(RecordStore::with_records(vec![
            DrugRecord::new("Aspirin", "A1", "Acme")
                .with_label_price("10,00")
                .with_ingredient(ActiveIngredient::new("Asetilsalisilik asit", "100", "mg")),
            DrugRecord::new("Aspirin Forte", "A2", "Acme").with_label_price("1.000,50"),
            DrugRecord::new("Parol", "A3", "Beta")
                .with_label_price("")
                .with_ingredient(ActiveIngredient::new("Parasetamol", "500", "mg")),
        ]))
    }

    fn path(value: &str) -> Path<String> {
        Path(value.to_string())
    }

    #[tokio::test]
    async fn test_list_handler_defaults() {
        let response = list_handler(State(test_state()), Query(PageQuery::default())).await;
        assert_eq!(response.page, 1);
        assert_eq!(response.limit, 50);
        assert_eq!(response.total, 3);
        assert_eq!(response.shown, 3);
    }

    #[tokio::test]
    async fn test_barcode_handler() {
        let response = barcode_handler(State(test_state()), path("A2")).await.unwrap();
        assert_eq!(response.summary.name, "Aspirin Forte");
        assert!((response.summary.label_price - 1000.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_barcode_handler_not_found() {
        let result = barcode_handler(State(test_state()), path("ZZZ")).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_search_name_handler() {
        let response = search_name_handler(State(test_state()), path("aspirin"))
            .await
            .unwrap();
        assert_eq!(response.found, 2);
        assert_eq!(response.query, "aspirin");
    }

    #[tokio::test]
    async fn test_search_blank_needle_rejected() {
        let result = search_company_handler(State(test_state()), path("  ")).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_search_respects_configured_cap() {
        let mut state = test_state();
        state.max_results = 1;

        let response = search_company_handler(State(state), path("acme"))
            .await
            .unwrap();
        assert_eq!(response.found, 1);
    }

    #[tokio::test]
    async fn test_search_ingredient_handler() {
        let response = search_ingredient_handler(State(test_state()), path("PARASET"))
            .await
            .unwrap();
        assert_eq!(response.found, 1);
        assert_eq!(response.results[0].summary.barcode, "A3");
        assert_eq!(response.results[0].active_ingredient.amount, "500");
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await;
        assert_eq!(response.total_drugs, 3);
        assert_eq!(response.total_companies, 2);
    }

    #[tokio::test]
    async fn test_health_handler_does_not_fetch() {
        let state = AppState::new(RecordStore::new(StaticFetcher::new(b"[]".to_vec())));
        let response = health_handler(State(state.clone())).await;

        assert_eq!(response.status, "healthy");
        assert_eq!(response.snapshot, LoadStatus::NotLoaded);
        assert!(!state.records.is_initialized());
    }

    #[tokio::test]
    async fn test_index_handler_triggers_load() {
        let body = br#"[{"name":"A"},{"name":"B"}]"#.to_vec();
        let state = AppState::new(RecordStore::new(StaticFetcher::new(body)));

        let response = index_handler(State(state)).await;
        assert_eq!(response.total_drugs, 2);
        assert!(matches!(response.status, LoadStatus::Loaded { count: 2, .. }));
    }
}
