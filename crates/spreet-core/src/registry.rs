//! Format handler registry
//!
//! Handlers are registered once, while the application sets up, and the
//! registry is then passed by reference to [`Document::read`] and
//! [`Document::write`]. Registration needs `&mut` access, so it cannot race
//! with lookups.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use ahash::AHashMap;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::options::HandlerOptions;

/// What a handler can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub read: bool,
    pub write: bool,
}

impl Capabilities {
    pub const READ: Self = Self {
        read: true,
        write: false,
    };
    pub const WRITE: Self = Self {
        read: false,
        write: true,
    };
    pub const READ_WRITE: Self = Self {
        read: true,
        write: true,
    };

    /// Check if `operation` is supported
    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Read => self.read,
            Operation::Write => self.write,
        }
    }
}

/// Direction of a handler call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Write,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Read => "read",
            Operation::Write => "write",
        })
    }
}

/// Reader and/or writer for one file format
pub trait FormatHandler: Send + Sync {
    fn capabilities(&self) -> Capabilities;

    /// Extensions matched besides the format identifier itself (lowercase, no dot)
    fn extensions(&self) -> &[&str] {
        &[]
    }

    fn read(&self, path: &Path, options: &HandlerOptions) -> Result<Document> {
        let _ = options;
        Err(Error::handler(format!(
            "reading {} is not supported",
            path.display()
        )))
    }

    fn write(&self, document: &Document, path: &Path, options: &HandlerOptions) -> Result<()> {
        let _ = (document, options);
        Err(Error::handler(format!(
            "writing {} is not supported",
            path.display()
        )))
    }
}

/// Symbolic format name such as `csv` or `xlsx`
///
/// ASCII letter first, then letters, digits or `_`; stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FormatId(String);

impl FormatId {
    /// Validate and normalize an identifier
    pub fn new(id: &str) -> Result<Self> {
        let mut chars = id.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(Error::InvalidFormatId(id.to_string()));
        }
        Ok(Self(id.to_ascii_lowercase()))
    }

    /// Get the identifier as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FormatId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Format identifier → handler
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: AHashMap<FormatId, Box<dyn FormatHandler>>,
}

impl HandlerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under `id`, replacing any previous one
    pub fn register<H>(&mut self, id: &str, handler: H) -> Result<()>
    where
        H: FormatHandler + 'static,
    {
        let caps = handler.capabilities();
        if !caps.read && !caps.write {
            return Err(Error::UnsupportedHandler(id.to_string()));
        }
        let id = FormatId::new(id)?;

        log::debug!("registering {} handler ({:?})", id, caps);
        if self.handlers.insert(id.clone(), Box::new(handler)).is_some() {
            log::warn!("replaced previously registered {} handler", id);
        }
        Ok(())
    }

    /// Get the handler registered under `id`
    pub fn get(&self, id: &str) -> Option<&dyn FormatHandler> {
        let id = FormatId::new(id).ok()?;
        self.handlers.get(&id).map(|h| &**h)
    }

    /// Check if a handler is registered under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Registered identifiers, sorted
    pub fn ids(&self) -> Vec<&FormatId> {
        let mut ids: Vec<_> = self.handlers.keys().collect();
        ids.sort();
        ids
    }

    /// Get the number of registered handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handler is registered
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Find the handler for `path`
    ///
    /// An explicit `format` option wins; otherwise the path extension is
    /// matched against identifiers, then against each handler's declared
    /// extensions. Only handlers supporting `operation` are considered.
    pub fn resolve(
        &self,
        path: &Path,
        options: &HandlerOptions,
        operation: Operation,
    ) -> Result<(&FormatId, &dyn FormatHandler)> {
        let found = match options.format() {
            Some(format) => FormatId::new(format)
                .ok()
                .and_then(|id| self.capable(&id, operation)),
            None => path
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| e.to_ascii_lowercase())
                .and_then(|ext| self.find_by_extension(&ext, operation)),
        };

        if let Some((id, _)) = found {
            log::debug!("resolved {} handler {} for {}", operation, id, path.display());
        }

        found.ok_or_else(|| Error::NoHandlerFound {
            target: match options.format() {
                Some(format) => format!("format {:?} ({})", format, operation),
                None => format!("{} ({})", path.display(), operation),
            },
            available: self
                .ids()
                .into_iter()
                .filter(|id| self.capable(id, operation).is_some())
                .map(|id| id.to_string())
                .collect(),
        })
    }

    fn capable(&self, id: &FormatId, operation: Operation) -> Option<(&FormatId, &dyn FormatHandler)> {
        let (id, handler) = self.handlers.get_key_value(id)?;
        let handler: &dyn FormatHandler = &**handler;
        handler
            .capabilities()
            .supports(operation)
            .then_some((id, handler))
    }

    fn find_by_extension(
        &self,
        ext: &str,
        operation: Operation,
    ) -> Option<(&FormatId, &dyn FormatHandler)> {
        if let Some(found) = FormatId::new(ext)
            .ok()
            .and_then(|id| self.capable(&id, operation))
        {
            return Some(found);
        }

        // Sorted so that the same handler wins on every call
        self.ids().into_iter().find_map(|id| {
            let (id, handler) = self.capable(id, operation)?;
            handler
                .extensions()
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext))
                .then_some((id, handler))
        })
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("ids", &self.ids())
            .finish()
    }
}
