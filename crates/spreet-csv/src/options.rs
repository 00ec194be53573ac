//! CSV options

use std::str::FromStr;

use spreet_core::HandlerOptions;

use crate::error::{CsvError, CsvResult};

/// Options for reading CSV files
#[derive(Debug, Clone)]
pub struct CsvReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Automatic type detection
    pub auto_detect_types: bool,
    /// Name of the sheet created for the records (default: "Sheet 1")
    pub sheet: Option<String>,
}

impl Default for CsvReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            auto_detect_types: true,
            sheet: None,
        }
    }
}

impl CsvReadOptions {
    /// Override fields from handler options
    ///
    /// Recognized keys: `delimiter`, `quote`, `auto_detect_types`, `sheet`.
    pub fn merge(mut self, options: &HandlerOptions) -> CsvResult<Self> {
        if let Some(value) = options.get("delimiter") {
            self.delimiter = single_byte("delimiter", value)?;
        }
        if let Some(value) = options.get("quote") {
            self.quote = single_byte("quote", value)?;
        }
        if let Some(value) = options.parse::<bool>("auto_detect_types") {
            self.auto_detect_types = value.map_err(|_| CsvError::InvalidOption {
                key: "auto_detect_types",
                value: options.get("auto_detect_types").unwrap_or_default().to_string(),
                reason: "expected true or false",
            })?;
        }
        if let Some(value) = options.get("sheet") {
            self.sheet = Some(value.to_string());
        }
        Ok(self)
    }
}

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Line terminator
    pub line_terminator: LineTerminator,
    /// Sheet to export (default: the first one)
    pub sheet: Option<String>,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            line_terminator: LineTerminator::CRLF,
            sheet: None,
        }
    }
}

impl CsvWriteOptions {
    /// Override fields from handler options
    ///
    /// Recognized keys: `delimiter`, `quote`, `line_terminator`, `sheet`.
    pub fn merge(mut self, options: &HandlerOptions) -> CsvResult<Self> {
        if let Some(value) = options.get("delimiter") {
            self.delimiter = single_byte("delimiter", value)?;
        }
        if let Some(value) = options.get("quote") {
            self.quote = single_byte("quote", value)?;
        }
        if let Some(value) = options.get("line_terminator") {
            self.line_terminator = value.parse()?;
        }
        if let Some(value) = options.get("sheet") {
            self.sheet = Some(value.to_string());
        }
        Ok(self)
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

impl FromStr for LineTerminator {
    type Err = CsvError;

    fn from_str(s: &str) -> CsvResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(LineTerminator::LF),
            "crlf" => Ok(LineTerminator::CRLF),
            "cr" => Ok(LineTerminator::CR),
            _ => Err(CsvError::InvalidOption {
                key: "line_terminator",
                value: s.to_string(),
                reason: "expected lf, crlf or cr",
            }),
        }
    }
}

/// One ASCII character, or `tab`/`\t` for a tab
fn single_byte(key: &'static str, value: &str) -> CsvResult<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ if value.len() == 1 && value.is_ascii() => Ok(value.as_bytes()[0]),
        _ => Err(CsvError::InvalidOption {
            key,
            value: value.to_string(),
            reason: "expected a single ASCII character",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_options_from_handler_options() {
        let options = HandlerOptions::new()
            .with("delimiter", ";")
            .with("auto_detect_types", "false")
            .with("sheet", "Imported");
        let read = CsvReadOptions::default().merge(&options).unwrap();
        assert_eq!(read.delimiter, b';');
        assert_eq!(read.quote, b'"');
        assert!(!read.auto_detect_types);
        assert_eq!(read.sheet.as_deref(), Some("Imported"));
    }

    #[test]
    fn test_write_options_from_handler_options() {
        let options = HandlerOptions::new()
            .with("delimiter", "tab")
            .with("line_terminator", "LF");
        let write = CsvWriteOptions::default().merge(&options).unwrap();
        assert_eq!(write.delimiter, b'\t');
        assert_eq!(write.line_terminator, LineTerminator::LF);
        assert_eq!(write.sheet, None);
    }

    #[test]
    fn test_invalid_options() {
        let options = HandlerOptions::new().with("delimiter", ";;");
        assert!(matches!(
            CsvReadOptions::default().merge(&options),
            Err(CsvError::InvalidOption { key: "delimiter", .. })
        ));

        let options = HandlerOptions::new().with("auto_detect_types", "maybe");
        assert!(matches!(
            CsvReadOptions::default().merge(&options),
            Err(CsvError::InvalidOption { key: "auto_detect_types", .. })
        ));

        let options = HandlerOptions::new().with("line_terminator", "nl");
        assert!(CsvWriteOptions::default().merge(&options).is_err());
    }
}
