use std::fs;
use std::path::PathBuf;

use crate::matching::{Catalog, CatalogError, CatalogSource, JsonFileCatalog, RecommendationEngine};

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "intern-match-{}-{name}.json",
        std::process::id()
    ));
    fs::write(&path, contents).expect("write scratch catalog");
    path
}

#[test]
fn loads_json_array_in_file_order() {
    let path = scratch_file(
        "ordered",
        r#"[
            {"id": 10, "title": "Backend Intern", "sector": "Technology", "location": "Hyderabad"},
            {"id": 11, "title": "Audit Intern", "sector": "Finance", "is_remote": true}
        ]"#,
    );

    let records = JsonFileCatalog::new(&path).load().expect("catalog parses");
    fs::remove_file(&path).ok();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sector, "Technology");
    assert!(records[1].is_remote);
    assert_eq!(records[1].extra["title"], "Audit Intern");
}

#[test]
fn unusual_ids_do_not_empty_the_catalog() {
    let path = scratch_file(
        "odd-ids",
        r#"[
            {"id": 1, "title": "Loan Desk Intern", "sector": "Banking", "location": "Mumbai"},
            {"id": -2, "title": "Field Survey Intern", "sector": "Agriculture"},
            {"id": 3.0, "title": "Ward Assistant Intern", "sector": "Healthcare"}
        ]"#,
    );
    let source = JsonFileCatalog::new(&path);

    let catalog = Catalog::load_or_empty(&source);
    fs::remove_file(&path).ok();

    assert_eq!(catalog.len(), 3);
    let engine = RecommendationEngine::new(catalog);
    let found = engine.internship("-2").expect("negative id is addressable");
    assert_eq!(found.sector, "Agriculture");
    assert_eq!(engine.sectors(), vec!["Agriculture", "Banking", "Healthcare"]);
}

#[test]
fn missing_file_reports_unreadable() {
    let source = JsonFileCatalog::new("/nonexistent/intern-match/catalog.json");

    let err = source.load().expect_err("file does not exist");

    assert!(matches!(err, CatalogError::Unreadable { .. }));
    assert!(err.to_string().contains("/nonexistent/intern-match/catalog.json"));
}

#[test]
fn malformed_file_degrades_to_empty_catalog() {
    let path = scratch_file("malformed", r#"{"internships": "not an array"}"#);
    let source = JsonFileCatalog::new(&path);

    assert!(matches!(source.load(), Err(CatalogError::Malformed { .. })));
    let catalog = Catalog::load_or_empty(&source);
    fs::remove_file(&path).ok();

    assert!(catalog.is_empty());
}

#[test]
fn engine_from_missing_source_serves_nothing() {
    let engine = RecommendationEngine::from_source(&JsonFileCatalog::new(
        "/nonexistent/intern-match/catalog.json",
    ));

    assert!(engine.is_empty());
    assert!(engine.recommend(&super::common::candidate()).is_empty());
}

#[test]
fn catalog_snapshots_share_records() {
    let catalog = Catalog::new(super::common::sample_catalog());
    let copy = catalog.clone();

    assert_eq!(copy.len(), 7);
    assert!(std::ptr::eq(catalog.records(), copy.records()));
    assert_eq!(catalog.loaded_at(), copy.loaded_at());
}
