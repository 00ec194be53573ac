//! [`FormatHandler`] implementation

use std::path::Path;

use spreet_core::{Capabilities, Document, FormatHandler, HandlerOptions, Result};

use crate::options::{CsvReadOptions, CsvWriteOptions};
use crate::reader::CsvReader;
use crate::writer::CsvWriter;

/// Delimited-text handler, registered as `csv` (or `tsv` with a tab)
///
/// The handler holds default options; keys in [`HandlerOptions`] override
/// them per call.
#[derive(Debug, Clone, Default)]
pub struct CsvHandler {
    read: CsvReadOptions,
    write: CsvWriteOptions,
}

impl CsvHandler {
    /// Comma-separated handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab-separated handler
    pub fn tsv() -> Self {
        Self::default().with_delimiter(b'\t')
    }

    /// Use `delimiter` for both reading and writing
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.read.delimiter = delimiter;
        self.write.delimiter = delimiter;
        self
    }

    /// Get the default read options
    pub fn read_options(&self) -> &CsvReadOptions {
        &self.read
    }

    /// Get the default write options
    pub fn write_options(&self) -> &CsvWriteOptions {
        &self.write
    }
}

impl FormatHandler for CsvHandler {
    fn capabilities(&self) -> Capabilities {
        Capabilities::READ_WRITE
    }

    fn read(&self, path: &Path, options: &HandlerOptions) -> Result<Document> {
        let options = self.read.clone().merge(options)?;
        log::debug!("reading CSV from {}", path.display());
        Ok(CsvReader::read_file(path, &options)?)
    }

    fn write(&self, document: &Document, path: &Path, options: &HandlerOptions) -> Result<()> {
        let options = self.write.clone().merge(options)?;
        log::debug!("writing CSV to {}", path.display());
        Ok(CsvWriter::write_file(document, path, &options)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use spreet_core::Error;

    #[test]
    fn test_tsv_handler_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.tsv");
        let handler = CsvHandler::tsv();

        let mut doc = Document::new();
        let sheet = doc.add_sheet(None).unwrap();
        sheet.write_row(["a", "b,c"], Default::default()).unwrap();
        handler.write(&doc, &path, &HandlerOptions::new()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "a\tb,c\r\n");

        let back = handler.read(&path, &HandlerOptions::new()).unwrap();
        let sheet = back.sheet(0usize).unwrap();
        assert_eq!(sheet.cell("B1").unwrap().unwrap().text(), "b,c");
    }

    #[test]
    fn test_errors_become_handler_errors() {
        let dir = tempfile::tempdir().unwrap();
        let handler = CsvHandler::new();

        let missing = dir.path().join("missing.csv");
        assert!(matches!(
            handler.read(&missing, &HandlerOptions::new()),
            Err(Error::Handler(_))
        ));

        let bad = HandlerOptions::new().with("quote", "''");
        let path = dir.path().join("out.csv");
        let err = handler.write(&Document::new(), &path, &bad).unwrap_err();
        assert!(err.to_string().contains("quote"));
    }
}
