//! Property-Based Tests for Records Module
//!
//! Uses proptest to check the query engine and price normalizer over
//! generated snapshots.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::records::{
    find_by_barcode, list_records, normalize_price, search_by_active_ingredient,
    search_by_company, search_by_name, stats, ActiveIngredient, DrugRecord, MAX_RESULTS,
};

// == Strategies ==
/// Generates short drug names drawn from a small alphabet so searches hit often
fn name_strategy() -> impl Strategy<Value = String> {
    "[a-cA-C ]{1,12}".prop_map(|s| s)
}

fn company_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Acme".to_string()),
        Just("Beta".to_string()),
        Just("Gamma Ilac".to_string()),
        "[a-z]{1,6}",
    ]
}

fn ingredient_strategy() -> impl Strategy<Value = ActiveIngredient> {
    ("[a-cA-C]{1,6}", "[0-9]{1,3}", prop_oneof![Just("mg"), Just("ml")])
        .prop_map(|(substance, amount, unit)| ActiveIngredient::new(substance, amount, unit))
}

/// Generates a snapshot with unique, index-derived barcodes
fn snapshot_strategy() -> impl Strategy<Value = Vec<DrugRecord>> {
    prop::collection::vec(
        (
            name_strategy(),
            company_strategy(),
            prop::collection::vec(ingredient_strategy(), 0..4),
        ),
        0..80,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, company, ingredients))| {
                ingredients.into_iter().fold(
                    DrugRecord::new(name, format!("869{:010}", i), company),
                    DrugRecord::with_ingredient,
                )
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A full first page shows min(limit, total) records
    #[test]
    fn prop_first_page_size(records in snapshot_strategy(), limit in 1usize..120) {
        let page = list_records(&records, 1, limit);
        prop_assert_eq!(page.shown(), limit.min(records.len()));
        prop_assert_eq!(page.total, records.len());
    }

    // Walking every page visits each record exactly once, in order
    #[test]
    fn prop_pages_partition_snapshot(records in snapshot_strategy(), limit in 1usize..30) {
        let mut seen = Vec::new();
        let mut page_no = 1;
        loop {
            let page = list_records(&records, page_no, limit);
            if page.items.is_empty() {
                break;
            }
            seen.extend(page.items.iter().map(|r| r.barcode().to_string()));
            page_no += 1;
        }
        let expected: Vec<String> = records.iter().map(|r| r.barcode().to_string()).collect();
        prop_assert_eq!(seen, expected);
    }

    // Every barcode in the snapshot is found; absent ones are not
    #[test]
    fn prop_barcode_lookup(records in snapshot_strategy()) {
        for record in &records {
            let found = find_by_barcode(&records, record.barcode());
            prop_assert_eq!(found.map(|r| r.barcode()), Some(record.barcode()));
        }
        prop_assert!(find_by_barcode(&records, "not-a-barcode").is_none());
    }

    // Name search is capped and every hit contains the needle
    #[test]
    fn prop_name_search_bounded(records in snapshot_strategy(), needle in "[a-cA-C]{1,2}") {
        let found = search_by_name(&records, &needle, MAX_RESULTS);
        prop_assert!(found.len() <= MAX_RESULTS);
        for record in &found {
            prop_assert!(record.name.to_lowercase().contains(&needle.to_lowercase()));
        }

        let expected = records
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle.to_lowercase()))
            .count()
            .min(MAX_RESULTS);
        prop_assert_eq!(found.len(), expected);
    }

    #[test]
    fn prop_company_search_bounded(records in snapshot_strategy(), needle in "[a-z]{1,2}") {
        let found = search_by_company(&records, &needle, MAX_RESULTS);
        prop_assert!(found.len() <= MAX_RESULTS);
        for record in &found {
            prop_assert!(record.company_name().to_lowercase().contains(&needle));
        }
    }

    // At most one row per drug, and the row's ingredient really matches
    #[test]
    fn prop_ingredient_search_one_row_per_drug(
        records in snapshot_strategy(),
        needle in "[a-c]{1,2}"
    ) {
        let found = search_by_active_ingredient(&records, &needle, MAX_RESULTS);
        prop_assert!(found.len() <= MAX_RESULTS);

        let expected = records
            .iter()
            .filter(|r| {
                r.active_ingredients
                    .iter()
                    .any(|i| i.substance.to_lowercase().contains(&needle))
            })
            .count()
            .min(MAX_RESULTS);
        prop_assert_eq!(found.len(), expected);

        let barcodes: HashSet<&str> = found.iter().map(|m| m.record.barcode()).collect();
        prop_assert_eq!(barcodes.len(), found.len());

        for hit in &found {
            prop_assert!(hit.ingredient.substance.to_lowercase().contains(&needle));
            let first = hit
                .record
                .active_ingredients
                .iter()
                .find(|i| i.substance.to_lowercase().contains(&needle));
            prop_assert_eq!(first, Some(hit.ingredient));
        }
    }

    // Distinct company count matches a set rebuilt from the full listing
    #[test]
    fn prop_stats_company_count(records in snapshot_strategy()) {
        let summary = stats(&records);
        let page = list_records(&records, 1, records.len().max(1));
        let companies: HashSet<&str> = page.items.iter().map(|r| r.company_name()).collect();

        prop_assert_eq!(summary.total_drugs, records.len());
        prop_assert_eq!(summary.total_companies, companies.len());
    }

    // The normalizer is total: any input yields a finite, non-negative number
    #[test]
    fn prop_normalize_price_total(raw in ".{0,24}") {
        let value = normalize_price(Some(&raw));
        prop_assert!(value.is_finite());
        prop_assert!(value >= 0.0);
    }

    // Turkish-formatted prices round to the intended value
    #[test]
    fn prop_normalize_turkish_format(whole in 1u32..1_000_000, cents in 0u32..100) {
        let thousands = whole / 1000;
        let rest = whole % 1000;
        let raw = if thousands > 0 {
            format!("{}.{:03},{:02}", thousands, rest, cents)
        } else {
            format!("{},{:02}", rest, cents)
        };
        let expected = whole as f64 + cents as f64 / 100.0;
        prop_assert!((normalize_price(Some(&raw)) - expected).abs() < 1e-6);
    }
}
