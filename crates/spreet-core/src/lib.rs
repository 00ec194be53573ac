//! # spreet-core
//!
//! Core data structures for the spreet spreadsheet library.
//!
//! This crate provides the in-memory model:
//! - [`Coordinate`] - Cell positions, their labels (`"BC12"`) and packed keys
//! - [`CellValue`] and [`Cell`] - Typed values in positioned slots
//! - [`Sheet`] - A sparse grid of cells with a lazily computed bounding box
//! - [`Sheets`] and [`Document`] - Named, ordered sheets
//! - [`HandlerRegistry`] - File format handlers used by [`Document::read`] and
//!   [`Document::write`]
//!
//! ## Example
//!
//! ```rust
//! use spreet_core::{CellType, Coordinate, Document};
//!
//! let mut doc = Document::new();
//! let sheet = doc.add_sheet(None).unwrap();
//! assert_eq!(sheet.name(), "Sheet 1");
//!
//! // Labels or zero-based (x, y) pairs
//! sheet.set_cell_at("A1", "Hello").unwrap();
//! sheet.set_cell_at((3u16, 5u16), 42.0).unwrap();
//!
//! assert_eq!(sheet.cell("D6").unwrap().unwrap().cell_type(), CellType::Numeric);
//! assert_eq!(sheet.bounding_box(), Coordinate::at(3, 5));
//! ```

pub mod cell;
pub mod coordinate;
pub mod document;
pub mod error;
pub mod options;
pub mod registry;
pub mod sheet;
pub mod sheets;

// Re-exports for convenience
pub use cell::{Cell, CellType, CellValue, Money};
pub use coordinate::{Coordinate, IntoCoordinate, KeyedCoordinate, PackedKey, AXIS_MAX, HALF_WIDTH};
pub use document::Document;
pub use error::{Error, HandlerError, Result};
pub use options::HandlerOptions;
pub use registry::{Capabilities, FormatHandler, FormatId, HandlerRegistry, Operation};
pub use sheet::{Rows, Sheet, SheetId, WriteRowOptions};
pub use sheets::{successor, SheetRef, Sheets, FIRST_SHEET_NAME};
