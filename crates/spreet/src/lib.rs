//! # spreet
//!
//! In-memory spreadsheet documents: named, ordered sheets holding sparse grids
//! of typed cells, read and written through pluggable format handlers.
//!
//! ## Features
//!
//! - Cell addressing by label (`"BC12"`), zero-based pair or packed key
//! - Typed values: text, numbers, booleans, dates, money, durations
//! - Row-oriented writing with a per-sheet cursor
//! - CSV and TSV handlers (`csv` feature, on by default)
//!
//! ## Example
//!
//! ```rust
//! use spreet::prelude::*;
//!
//! let mut doc = Document::new();
//! let sheet = doc.add_sheet(Some("Budget")).unwrap();
//!
//! sheet.write_row(["Item", "Cost"], WriteRowOptions::default()).unwrap();
//! sheet
//!     .write_row([CellValue::from("Rent"), CellValue::from(950.0)], WriteRowOptions::default())
//!     .unwrap();
//!
//! assert_eq!(sheet.bounding_box().to_label(), "B2");
//!
//! // Save to file
//! // doc.save("budget.csv").unwrap();
//! ```

pub mod prelude;

// Re-export core types
pub use spreet_core::{
    successor,
    Capabilities,
    // Cell types
    Cell,
    CellType,
    CellValue,
    // Coordinates
    Coordinate,
    // Main types
    Document,
    // Error types
    Error,
    FormatHandler,
    FormatId,
    HandlerError,
    // Handlers
    HandlerOptions,
    HandlerRegistry,
    IntoCoordinate,
    KeyedCoordinate,
    Money,
    Operation,
    PackedKey,
    Result,
    Rows,
    Sheet,
    SheetId,
    SheetRef,
    Sheets,
    WriteRowOptions,
    // Constants
    AXIS_MAX,
    FIRST_SHEET_NAME,
    HALF_WIDTH,
};

// Re-export I/O types
#[cfg(feature = "csv")]
pub use spreet_csv::{
    CsvError, CsvHandler, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};

use std::path::Path;

/// Registry with every handler enabled by crate features
///
/// With the `csv` feature: `csv` (comma) and `tsv` (tab).
pub fn default_registry() -> HandlerRegistry {
    let mut registry = HandlerRegistry::new();
    register_defaults(&mut registry);
    log::debug!("default registry has {} handlers", registry.len());
    registry
}

#[cfg(feature = "csv")]
fn register_defaults(registry: &mut HandlerRegistry) {
    for (id, handler) in [("csv", CsvHandler::new()), ("tsv", CsvHandler::tsv())] {
        // Built-in ids are valid and the handlers read and write
        let registered = registry.register(id, handler);
        debug_assert!(registered.is_ok(), "built-in {} handler rejected", id);
    }
}

#[cfg(not(feature = "csv"))]
fn register_defaults(_registry: &mut HandlerRegistry) {}

/// Extension trait for Document to add file I/O with the default handlers
pub trait DocumentExt: Sized {
    /// Open a document from a file, choosing the handler by extension
    fn open<P: AsRef<Path>>(path: P) -> Result<Self>;

    /// Save the document to a file, choosing the handler by extension
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl DocumentExt for Document {
    fn open<P: AsRef<Path>>(path: P) -> Result<Document> {
        Document::read(path, &HandlerOptions::new(), &default_registry())
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write(path, &HandlerOptions::new(), &default_registry())
    }
}
