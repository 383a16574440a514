//! Query Engine
//!
//! Stateless filters over a snapshot of drug records. Every function takes the
//! snapshot by reference and borrows its results from it.

use std::collections::HashSet;

use crate::records::{ActiveIngredient, DrugRecord};

// == Page ==
/// One page of the snapshot in insertion order.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Requested page number (1-based)
    pub page: usize,
    /// Requested page size
    pub limit: usize,
    /// Size of the whole snapshot
    pub total: usize,
    /// Records on this page
    pub items: Vec<&'a DrugRecord>,
}

impl Page<'_> {
    /// Number of records on this page.
    pub fn shown(&self) -> usize {
        self.items.len()
    }
}

// == Record Stats ==
/// Aggregate counts over the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordStats {
    pub total_drugs: usize,
    pub total_companies: usize,
}

/// A drug together with the ingredient that matched an ingredient search.
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatch<'a> {
    pub record: &'a DrugRecord,
    pub ingredient: &'a ActiveIngredient,
}

// == List ==
/// Slices the snapshot into pages.
///
/// `page` and `limit` are clamped to at least 1. A page past the end yields no
/// items while `total` still reports the snapshot size.
pub fn list_records(records: &[DrugRecord], page: usize, limit: usize) -> Page<'_> {
    let page = page.max(1);
    let limit = limit.max(1);
    let start = (page - 1).saturating_mul(limit);

    let items = records.iter().skip(start).take(limit).collect();

    Page {
        page,
        limit,
        total: records.len(),
        items,
    }
}

// == Lookup ==
/// Returns the first record whose barcode equals `barcode` exactly.
pub fn find_by_barcode<'a>(records: &'a [DrugRecord], barcode: &str) -> Option<&'a DrugRecord> {
    records.iter().find(|record| record.barcode() == barcode)
}

// == Substring Searches ==
fn contains_ignore_case(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// Records whose name contains `needle`, case-insensitively.
///
/// Scanning stops once `max_results` matches are collected, so results follow
/// snapshot order rather than relevance.
pub fn search_by_name<'a>(
    records: &'a [DrugRecord],
    needle: &str,
    max_results: usize,
) -> Vec<&'a DrugRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|record| contains_ignore_case(&record.name, &needle))
        .take(max_results)
        .collect()
}

/// Records whose company name contains `needle`, case-insensitively.
pub fn search_by_company<'a>(
    records: &'a [DrugRecord],
    needle: &str,
    max_results: usize,
) -> Vec<&'a DrugRecord> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter(|record| contains_ignore_case(record.company_name(), &needle))
        .take(max_results)
        .collect()
}

/// Records with an active substance containing `needle`, case-insensitively.
///
/// Each record contributes at most one row: the first matching ingredient in
/// document order.
pub fn search_by_active_ingredient<'a>(
    records: &'a [DrugRecord],
    needle: &str,
    max_results: usize,
) -> Vec<IngredientMatch<'a>> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .filter_map(|record| {
            record
                .active_ingredients
                .iter()
                .find(|ingredient| contains_ignore_case(&ingredient.substance, &needle))
                .map(|ingredient| IngredientMatch { record, ingredient })
        })
        .take(max_results)
        .collect()
}

// == Stats ==
/// Counts drugs and distinct company names.
pub fn stats(records: &[DrugRecord]) -> RecordStats {
    let companies: HashSet<&str> = records.iter().map(DrugRecord::company_name).collect();
    RecordStats {
        total_drugs: records.len(),
        total_companies: companies.len(),
    }
}
