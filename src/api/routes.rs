//! API Routes
//!
//! Configures the Axum router with all drug API endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    barcode_handler, health_handler, index_handler, list_handler, search_company_handler,
    search_ingredient_handler, search_name_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /` - Service index
/// - `GET /drugs` - Paginated listing
/// - `GET /drugs/:barcode` - Exact barcode lookup
/// - `GET /search/name/:needle` - Search by drug name
/// - `GET /search/company/:needle` - Search by company name
/// - `GET /search/ingredient/:needle` - Search by active ingredient
/// - `GET /stats` - Catalogue statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/drugs", get(list_handler))
        .route("/drugs/:barcode", get(barcode_handler))
        .route("/search/name/:needle", get(search_name_handler))
        .route("/search/company/:needle", get(search_company_handler))
        .route("/search/ingredient/:needle", get(search_ingredient_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
