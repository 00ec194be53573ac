//! Document type - the top-level container

use std::path::Path;

use crate::error::Result;
use crate::options::HandlerOptions;
use crate::registry::{HandlerRegistry, Operation};
use crate::sheet::Sheet;
use crate::sheets::{SheetRef, Sheets};

/// A spreadsheet document
///
/// A document owns one [`Sheets`] collection and starts without any sheet.
/// Reading and writing files goes through a [`HandlerRegistry`].
#[derive(Debug, Default)]
pub struct Document {
    sheets: Sheets,
}

impl Document {
    /// Create a document with no sheets
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the sheet collection
    pub fn sheets(&self) -> &Sheets {
        &self.sheets
    }

    /// Get the mutable sheet collection
    pub fn sheets_mut(&mut self) -> &mut Sheets {
        &mut self.sheets
    }

    /// Append a sheet, see [`Sheets::add`]
    pub fn add_sheet(&mut self, name: Option<&str>) -> Result<&mut Sheet> {
        self.sheets.add(name)
    }

    /// Get a sheet by name, position or identity
    pub fn sheet<'a, R: Into<SheetRef<'a>>>(&self, sheet: R) -> Option<&Sheet> {
        self.sheets.get(sheet)
    }

    /// Get a mutable sheet by name, position or identity
    pub fn sheet_mut<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R) -> Option<&mut Sheet> {
        self.sheets.get_mut(sheet)
    }

    /// Read a document with the handler resolved for `path`
    pub fn read<P: AsRef<Path>>(
        path: P,
        options: &HandlerOptions,
        registry: &HandlerRegistry,
    ) -> Result<Self> {
        let path = path.as_ref();
        let (_, handler) = registry.resolve(path, options, Operation::Read)?;
        handler.read(path, options)
    }

    /// Write this document with the handler resolved for `path`
    pub fn write<P: AsRef<Path>>(
        &self,
        path: P,
        options: &HandlerOptions,
        registry: &HandlerRegistry,
    ) -> Result<()> {
        let path = path.as_ref();
        let (_, handler) = registry.resolve(path, options, Operation::Write)?;
        handler.write(self, path, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::registry::{Capabilities, FormatHandler};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// Writes sheet names into memory, reads back a one-sheet document
    #[derive(Default)]
    struct Memory {
        written: Mutex<Vec<(PathBuf, Vec<String>)>>,
    }

    impl FormatHandler for Memory {
        fn capabilities(&self) -> Capabilities {
            Capabilities::READ_WRITE
        }

        fn read(&self, path: &Path, _options: &HandlerOptions) -> Result<Document> {
            let mut doc = Document::new();
            let name = path.file_stem().and_then(|s| s.to_str());
            doc.add_sheet(name)?.set_cell_at("A1", "loaded")?;
            Ok(doc)
        }

        fn write(&self, doc: &Document, path: &Path, _options: &HandlerOptions) -> Result<()> {
            let names = doc.sheets().names().map(String::from).collect();
            self.written
                .lock()
                .map_err(|_| Error::handler("poisoned"))?
                .push((path.to_path_buf(), names));
            Ok(())
        }
    }

    struct ReadOnly;

    impl FormatHandler for ReadOnly {
        fn capabilities(&self) -> Capabilities {
            Capabilities::READ
        }
    }

    #[test]
    fn test_new_document_has_no_sheets() {
        let mut doc = Document::new();
        assert!(doc.sheets().is_empty());

        doc.add_sheet(None).unwrap();
        doc.add_sheet(Some("Totals")).unwrap();
        assert_eq!(doc.sheet(0usize).unwrap().name(), "Sheet 1");
        assert!(doc.sheet("Totals").is_some());

        doc.sheet_mut("Totals").unwrap().set_cell_at("B2", 3).unwrap();
        let totals = doc.sheet("Totals").unwrap();
        assert_eq!(totals.cell("B2").unwrap().unwrap().text(), "3");
    }

    #[test]
    fn test_read_and_write_through_registry() {
        let mut registry = HandlerRegistry::new();
        registry.register("mem", Memory::default()).unwrap();

        let doc = Document::read("budget.mem", &HandlerOptions::new(), &registry).unwrap();
        let sheet = doc.sheet("budget").unwrap();
        assert_eq!(sheet.cell("A1").unwrap().unwrap().text(), "loaded");

        doc.write("out.data", &HandlerOptions::new().with_format("mem"), &registry)
            .unwrap();
    }

    #[test]
    fn test_write_needs_capable_handler() {
        let mut registry = HandlerRegistry::new();
        registry.register("ro", ReadOnly).unwrap();

        let doc = Document::new();
        match doc.write("out.ro", &HandlerOptions::new(), &registry) {
            Err(Error::NoHandlerFound { available, .. }) => assert!(available.is_empty()),
            other => panic!("expected NoHandlerFound, got {:?}", other),
        }

        // Default read is reported as a handler failure
        assert!(matches!(
            Document::read("in.ro", &HandlerOptions::new(), &registry),
            Err(Error::Handler(_))
        ));
    }
}
