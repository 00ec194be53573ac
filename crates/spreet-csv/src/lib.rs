//! # spreet-csv
//!
//! CSV reader, writer and format handler for spreet.
//!
//! ```no_run
//! use spreet_core::{Document, HandlerOptions, HandlerRegistry};
//! use spreet_csv::CsvHandler;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register("csv", CsvHandler::new()).unwrap();
//!
//! let doc = Document::read("input.csv", &HandlerOptions::new(), &registry).unwrap();
//! doc.write("copy.csv", &HandlerOptions::new().with("delimiter", ";"), &registry)
//!     .unwrap();
//! ```

mod error;
mod handler;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use handler::CsvHandler;
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
