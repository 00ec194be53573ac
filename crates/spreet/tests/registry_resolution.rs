//! Handler resolution through the default registry

use std::path::Path;

use pretty_assertions::assert_eq;
use spreet::prelude::*;
use spreet::{Capabilities, Operation};
use tempfile::TempDir;

#[test]
fn test_default_registry_ids() {
    let registry = spreet::default_registry();
    let ids: Vec<_> = registry.ids().iter().map(|id| id.to_string()).collect();
    assert_eq!(ids, ["csv", "tsv"]);

    for id in ["csv", "tsv"] {
        let handler = registry.get(id).unwrap();
        assert_eq!(handler.capabilities(), Capabilities::READ_WRITE);
    }
}

#[test]
fn test_report_csv_resolves_csv() {
    let registry = spreet::default_registry();
    let (id, _) = registry
        .resolve(Path::new("report.csv"), &HandlerOptions::new(), Operation::Write)
        .unwrap();
    assert_eq!(id.as_str(), "csv");
}

#[test]
fn test_unknown_extension_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("report.unknownext");

    let mut doc = Document::new();
    doc.add_sheet(None).unwrap().set_cell_at("A1", 1).unwrap();

    match doc.save(&path) {
        Err(Error::NoHandlerFound { available, .. }) => {
            assert_eq!(available, ["csv", "tsv"]);
        }
        other => panic!("expected NoHandlerFound, got {:?}", other),
    }
    assert!(!path.exists());
}

/// Write-only handler counting the cells it would export
struct CellCounter;

impl FormatHandler for CellCounter {
    fn capabilities(&self) -> Capabilities {
        Capabilities::WRITE
    }

    fn extensions(&self) -> &[&str] {
        &["count", "cnt"]
    }

    fn write(&self, document: &Document, path: &Path, _options: &HandlerOptions) -> Result<()> {
        let cells: usize = document.sheets().iter().map(Sheet::cell_count).sum();
        std::fs::write(path, cells.to_string()).map_err(Error::handler)
    }
}

#[test]
fn test_custom_handler_alongside_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let mut registry = spreet::default_registry();
    registry.register("counter", CellCounter).unwrap();

    let mut doc = Document::new();
    let sheet = doc.add_sheet(None).unwrap();
    sheet.write_row(["a", "b", "c"], WriteRowOptions::default()).unwrap();

    let path = temp_dir.path().join("stats.cnt");
    doc.write(&path, &HandlerOptions::new(), &registry).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "3");

    // Write-only: reading falls through to the capable handlers
    match Document::read(&path, &HandlerOptions::new(), &registry) {
        Err(Error::NoHandlerFound { available, .. }) => {
            assert_eq!(available, ["csv", "tsv"]);
        }
        other => panic!("expected NoHandlerFound, got {:?}", other.map(|_| ())),
    }
}
