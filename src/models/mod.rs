//! Request and Response models for the drug API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! deserializing query parameters and serializing HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{validate_needle, PageQuery};
pub use responses::{
    DrugDetail, DrugListItem, DrugListResponse, DrugSummary, ErrorResponse, HealthResponse,
    IndexResponse, IngredientHit, SearchResponse, StatsResponse,
};
