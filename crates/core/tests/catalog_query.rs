//! End-to-end catalog scenarios: seeding, merging, and querying.

use std::sync::Arc;

use vitrine_core::{
    default_taxonomy,
    pipeline::{self, FilterSpec},
    product::baseline_products,
    testing::{fixtures, MockFetcher},
    Catalog, MemoryMedium, RefreshConfig, SnapshotStore, PAGE_SIZE,
};

#[test]
fn seed_from_empty_returns_baseline() {
    // Scenario: snapshot absent.
    let store = SnapshotStore::new(Arc::new(MemoryMedium::new()));
    assert!(store.load().is_none());

    let seeded = store.seed();
    let baseline = baseline_products();
    assert_eq!(seeded.len(), baseline.len());
    for (s, b) in seeded.iter().zip(&baseline) {
        assert_eq!(s.id, b.id);
    }

    // A subsequent load returns the same list.
    let loaded = store.load().unwrap();
    let loaded_ids: Vec<_> = loaded.iter().map(|p| p.id.as_str()).collect();
    let seeded_ids: Vec<_> = seeded.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(loaded_ids, seeded_ids);
}

#[test]
fn successive_merges_apply_last_write_wins() {
    let store = SnapshotStore::new(Arc::new(MemoryMedium::new()));

    store.merge(vec![fixtures::product_rated("a", 3.0)]);
    let merged = store.merge(vec![
        fixtures::product_rated("a", 5.0),
        fixtures::product_rated("b", 1.0),
    ]);

    assert_eq!(merged.len(), 2);
    // Existing-then-new insertion order, incoming record wins on conflict.
    assert_eq!(merged[0].id, "a");
    assert_eq!(merged[0].rating, 5.0);
    assert_eq!(merged[1].id, "b");
    assert_eq!(merged[1].rating, 1.0);
}

#[test]
fn rating_and_category_filter_selects_expected_records() {
    // Five records, exactly two in category X with rating >= 4.
    let mut hit_big = fixtures::product_rated("hit-big", 4.8);
    hit_big.category = "X".to_string();
    hit_big.total_users = 50_000;

    let mut hit_small = fixtures::product_rated("hit-small", 4.1);
    hit_small.category = "X".to_string();
    hit_small.total_users = 2_000;

    let mut low_rating = fixtures::product_rated("low-rating", 3.9);
    low_rating.category = "X".to_string();

    let mut wrong_category = fixtures::product_rated("wrong-category", 5.0);
    wrong_category.category = "Y".to_string();

    let both_wrong = fixtures::product_rated("both-wrong", 1.0);

    let products = vec![
        low_rating,
        hit_small,
        wrong_category,
        both_wrong,
        hit_big,
    ];

    let spec = FilterSpec {
        min_rating: 4.0,
        category: vec!["X".to_string()],
        ..FilterSpec::default()
    };

    let page = pipeline::apply(&products, &spec, 1);
    assert_eq!(page.total_items, 2);
    // Default sort: users desc, then rating desc.
    assert_eq!(page.items[0].id, "hit-big");
    assert_eq!(page.items[1].id, "hit-small");
}

#[test]
fn query_pages_partition_the_catalog() {
    let many: Vec<_> = (0..97)
        .map(|i| fixtures::product(&format!("p{:03}", i)))
        .collect();

    // Direct merge stands in for a completed crawl.
    let store = SnapshotStore::new(Arc::new(MemoryMedium::new()));
    let merged = store.merge(many);
    assert_eq!(merged.len(), 97);

    let spec = FilterSpec::default();
    let first = pipeline::apply(&merged, &spec, 1);
    assert_eq!(first.total_items, 97);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.len(), PAGE_SIZE);

    let mut all_ids = Vec::new();
    for page_no in 1..=first.total_pages {
        let page = pipeline::apply(&merged, &spec, page_no);
        all_ids.extend(page.items.iter().map(|p| p.id.clone()));
    }
    assert_eq!(all_ids.len(), 97);
    let mut deduped = all_ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 97, "pages must not overlap");
}

#[tokio::test]
async fn catalog_end_to_end() {
    let medium = Arc::new(MemoryMedium::new());
    let fetcher = Arc::new(MockFetcher::new());
    fetcher
        .set_results(
            "Data & Analytics",
            "Forecasting",
            vec![fixtures::product_in(
                "forecaster",
                "Data & Analytics",
                "Forecasting",
            )],
        )
        .await;

    let catalog = Catalog::new(
        RefreshConfig::default(),
        medium,
        fetcher,
        default_taxonomy(),
    );

    // Mount: seed, then refresh. The store is non-empty after seeding, and
    // seeding just happened, so the snapshot is fresh and the crawl is
    // skipped entirely.
    let seeded = catalog.seed();
    assert!(!seeded.is_empty());
    catalog.initialize().await;
    assert_eq!(catalog.products().len(), seeded.len());

    // Query the visible page.
    let spec = FilterSpec {
        category: vec!["Data & Analytics".to_string()],
        ..FilterSpec::default()
    };
    let page = catalog.query(&spec, 1);
    assert!(page.items.iter().all(|p| p.category == "Data & Analytics"));
}
