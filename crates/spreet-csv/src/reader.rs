//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use spreet_core::{CellValue, Document, Sheet, WriteRowOptions};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a new one-sheet document
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Document> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a new one-sheet document
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Document> {
        let mut document = Document::new();
        let sheet = document.add_sheet(options.sheet.as_deref())?;
        let rows = Self::read_into(reader, sheet, options)?;
        log::debug!("read {} CSV rows into sheet {:?}", rows, sheet.name());
        Ok(document)
    }

    /// Append records to a sheet, starting at its current-row cursor
    ///
    /// Returns the number of records read. Detected values keep the field
    /// text as their cell text, so `007` stays `007`.
    pub fn read_into<R: Read>(
        reader: R,
        sheet: &mut Sheet,
        options: &CsvReadOptions,
    ) -> CsvResult<usize> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut count = 0;
        for result in csv_reader.records() {
            let record = result?;
            let y = sheet.current_row();

            let values: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else if field.is_empty() {
                        CellValue::Empty
                    } else {
                        CellValue::text(field)
                    }
                })
                .collect();
            sheet.write_row(values, WriteRowOptions::default())?;

            for (x, field) in record.iter().enumerate() {
                let cell = sheet.cell_at((x as u32, y))?;
                if !cell.is_empty() && cell.text() != field {
                    let value = cell.value().clone();
                    cell.set_value_with_text(value, field);
                }
            }
            count += 1;
        }

        Ok(count)
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        // f64 parsing also takes "inf" and "NaN"
        if trimmed.bytes().any(|b| b.is_ascii_digit()) {
            if let Ok(n) = trimmed.parse::<f64>() {
                return CellValue::Number(n);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::Date(date);
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
            return CellValue::DateTime(dt);
        }

        CellValue::text(field)
    }
}
