//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use spreet_core::{Document, Sheet};

use crate::error::{CsvError, CsvResult};
use crate::options::{CsvWriteOptions, LineTerminator};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write the selected sheet of a document to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        document: &Document,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let sheet = Self::select_sheet(document, options)?;
        let file = File::create(path)?;
        match sheet {
            Some(sheet) => Self::write(sheet, file, options),
            None => Ok(()),
        }
    }

    /// Write a sheet to a writer
    ///
    /// Rows `0..=y` and columns `0..=x` of the bounding box are exported
    /// using each cell's text. An empty sheet writes nothing.
    pub fn write<W: Write>(sheet: &Sheet, writer: W, options: &CsvWriteOptions) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        if !sheet.is_empty() {
            for row in sheet.rows() {
                let record: Vec<&str> = row.iter().map(|cell| cell.text()).collect();
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Named sheet, else the first one; `None` for a document without sheets
    fn select_sheet<'a>(
        document: &'a Document,
        options: &CsvWriteOptions,
    ) -> CsvResult<Option<&'a Sheet>> {
        match &options.sheet {
            Some(name) => document
                .sheet(name)
                .map(Some)
                .ok_or_else(|| CsvError::SheetNotFound(name.clone())),
            None => Ok(document.sheet(0usize)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(sheet: &Sheet, options: &CsvWriteOptions) -> String {
        let mut out = Vec::new();
        CsvWriter::write(sheet, &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_write_fills_gaps_up_to_bounding_box() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet(None).unwrap();
        sheet.set_cell_at("A1", "a, b").unwrap();
        sheet.set_cell_at("C2", 2.5).unwrap();
        sheet.set_cell_at("B3", true).unwrap();

        let options = CsvWriteOptions {
            line_terminator: LineTerminator::LF,
            ..CsvWriteOptions::default()
        };
        assert_eq!(render(sheet, &options), "\"a, b\",,\n,,2.5\n,TRUE,\n");
    }

    #[test]
    fn test_write_empty_sheet() {
        let mut doc = Document::new();
        let sheet = doc.add_sheet(None).unwrap();
        // Materialized but empty cells do not count
        sheet.cell_at("D4").unwrap();
        assert_eq!(render(sheet, &CsvWriteOptions::default()), "");
    }

    #[test]
    fn test_select_sheet() {
        let mut doc = Document::new();
        assert!(CsvWriter::select_sheet(&doc, &CsvWriteOptions::default())
            .unwrap()
            .is_none());

        doc.add_sheet(None).unwrap();
        doc.add_sheet(Some("Totals")).unwrap();

        let first = CsvWriter::select_sheet(&doc, &CsvWriteOptions::default()).unwrap();
        assert_eq!(first.map(Sheet::name), Some("Sheet 1"));

        let options = CsvWriteOptions {
            sheet: Some("Totals".into()),
            ..CsvWriteOptions::default()
        };
        let named = CsvWriter::select_sheet(&doc, &options).unwrap();
        assert_eq!(named.map(Sheet::name), Some("Totals"));

        let options = CsvWriteOptions {
            sheet: Some("Missing".into()),
            ..CsvWriteOptions::default()
        };
        assert!(matches!(
            CsvWriter::select_sheet(&doc, &options),
            Err(CsvError::SheetNotFound(_))
        ));
    }
}
