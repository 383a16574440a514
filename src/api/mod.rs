//! API Module
//!
//! HTTP handlers and routing for the drug lookup REST API.
//!
//! # Endpoints
//! - `GET /` - Service index
//! - `GET /drugs` - Paginated listing
//! - `GET /drugs/:barcode` - Exact barcode lookup
//! - `GET /search/{name,company,ingredient}/:needle` - Substring searches
//! - `GET /stats` - Catalogue statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
