//! CSV round-trip tests
//!
//! These tests write documents through the default registry and read them
//! back, checking values and text survive the trip.

use pretty_assertions::assert_eq;
use spreet::prelude::*;
use spreet::{CsvReadOptions, CsvReader, LineTerminator};
use tempfile::TempDir;

fn budget() -> Document {
    let mut doc = Document::new();
    let sheet = doc.add_sheet(Some("Budget")).unwrap();
    sheet
        .write_row(["Item", "Cost", "Paid"], WriteRowOptions::default())
        .unwrap();
    sheet
        .write_row(
            [
                CellValue::from("Rent, March"),
                CellValue::from(950.5),
                CellValue::from(true),
            ],
            WriteRowOptions::default(),
        )
        .unwrap();
    sheet.cell_at("B3").unwrap().set_value_with_text(12.0, "012");
    doc
}

#[test]
fn test_roundtrip_keeps_values_and_text() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("budget.csv");

    budget().save(&path).unwrap();
    let loaded = Document::open(&path).unwrap();

    assert_eq!(loaded.sheets().len(), 1);
    let sheet = loaded.sheet(0usize).unwrap();
    assert_eq!(sheet.bounding_box().to_label(), "C3");

    let cost = sheet.cell("B2").unwrap().unwrap();
    assert_eq!(cost.value(), &CellValue::Number(950.5));

    let paid = sheet.cell("C2").unwrap().unwrap();
    assert_eq!(paid.cell_type(), CellType::Boolean);

    assert_eq!(sheet.cell("A2").unwrap().unwrap().text(), "Rent, March");
    assert_eq!(sheet.cell("B3").unwrap().unwrap().text(), "012");
    assert!(sheet.cell("A3").unwrap().unwrap().is_empty());
}

#[test]
fn test_options_select_sheet_and_dialect() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("export.txt");
    let registry = spreet::default_registry();

    let mut doc = budget();
    doc.add_sheet(Some("Notes"))
        .unwrap()
        .set_cell_at("A1", "hello")
        .unwrap();

    let options = HandlerOptions::new()
        .with_format("csv")
        .with("sheet", "Notes")
        .with("delimiter", ";")
        .with("line_terminator", "lf");
    doc.write(&path, &options, &registry).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello\n");

    let read_options = CsvReadOptions {
        delimiter: b';',
        ..CsvReadOptions::default()
    };
    let back = CsvReader::read_file(&path, &read_options).unwrap();
    assert_eq!(back.sheet(0usize).unwrap().cell_count(), 1);
    assert_eq!(LineTerminator::LF, "LF".parse().unwrap());
}

#[test]
fn test_tsv_by_extension() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("budget.TSV");

    budget().save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Item\tCost\tPaid\r\n"));

    let loaded = Document::open(&path).unwrap();
    let sheet = loaded.sheet(0usize).unwrap();
    assert_eq!(sheet.cell("A2").unwrap().unwrap().text(), "Rent, March");
}
