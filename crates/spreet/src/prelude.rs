//! Prelude module - common imports for spreet users
//!
//! ```rust
//! use spreet::prelude::*;
//! ```

pub use crate::{
    // Cell types
    Cell,
    CellType,
    CellValue,
    Coordinate,

    // Main types
    Document,
    // Extension traits
    DocumentExt,

    // Error types
    Error,
    // Handlers
    FormatHandler,
    HandlerOptions,
    HandlerRegistry,
    IntoCoordinate,
    Result,

    Sheet,
    SheetRef,
    Sheets,
    WriteRowOptions,
};

#[cfg(feature = "csv")]
pub use crate::CsvHandler;
