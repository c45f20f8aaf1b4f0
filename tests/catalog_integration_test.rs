use anyhow::Result;
use doc_catalog::core::demo::sample_catalog;
use doc_catalog::{Catalog, CatalogError, Clock, Document, DocumentRecord, FixedClock};
use tempfile::TempDir;

#[test]
fn test_sample_scenario() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("bibliotheque.json");
    let catalog = sample_catalog();

    let found = catalog.find_by_title("1984").expect("1984 should be in the catalog");
    assert_eq!(found, &Document::book("1984", 1949, "George Orwell"));
    assert!(!found.is_recent(&FixedClock::new(2026)));

    catalog.export_json(&output)?;

    let content = std::fs::read_to_string(&output)?;
    let exported: Vec<serde_json::Value> = serde_json::from_str(&content)?;
    assert_eq!(exported.len(), 3);
    Ok(())
}

#[test]
fn test_search_ignores_case() {
    let catalog = sample_catalog();

    let lower = catalog.find_by_title("1984");
    let upper = catalog.find_by_title(&"1984".to_uppercase());
    assert_eq!(lower, upper);

    let mixed = catalog.find_by_title("sCiEnCe & vIe").unwrap();
    assert_eq!(mixed.kind_name(), "Magazine");
}

#[test]
fn test_export_round_trip_keeps_order_and_kinds() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = temp_dir.path().join("catalog.json");

    let mut catalog = Catalog::new();
    catalog.add(Document::magazine("Géo", 2025, 551));
    catalog.add(Document::book("L'Étranger", 1942, "Albert Camus"));
    catalog.add(Document::book("1984", 1949, "George Orwell"));
    catalog.export_json(&output)?;

    let content = std::fs::read_to_string(&output)?;
    assert!(content.contains("L'Étranger"));

    let records: Vec<DocumentRecord> = serde_json::from_str(&content)?;
    assert_eq!(records.len(), catalog.len());
    for (record, doc) in records.iter().zip(catalog.iter()) {
        assert_eq!(record.kind_name(), doc.kind_name());
    }

    let reloaded: Catalog = records.into_iter().map(Document::from).collect();
    assert_eq!(reloaded, catalog);
    Ok(())
}

#[test]
fn test_export_to_unwritable_path_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let blocker = temp_dir.path().join("not-a-directory");
    std::fs::write(&blocker, b"file")?;

    let result = sample_catalog().export_json(blocker.join("catalog.json"));
    assert!(matches!(result, Err(CatalogError::IoError(_))));
    Ok(())
}

#[test]
fn test_recency_window_relative_to_clock() {
    let clock = FixedClock::new(2030);
    let current = clock.current_year();

    assert!(Document::book("Five years", current - 5, "A").is_recent(&clock));
    assert!(!Document::book("Six years", current - 6, "A").is_recent(&clock));
    assert!(Document::magazine("This year", current, 1).is_recent(&clock));
}
