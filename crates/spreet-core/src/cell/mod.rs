//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`CellType`] - The classification derived from a value
//! - [`Cell`] - A positioned slot holding a value, its text and an annotation

mod value;

pub use value::{CellType, CellValue, Money};

use std::cmp::Ordering;

use crate::coordinate::Coordinate;

/// A typed, positioned value slot in a sheet
///
/// Cells are created by [`Sheet::cell_at`](crate::Sheet::cell_at) and keep
/// their coordinate for their whole life. Equality and ordering only look at
/// the coordinate: within a sheet a position identifies a cell.
#[derive(Debug, Clone)]
pub struct Cell {
    coordinate: Coordinate,
    value: CellValue,
    cell_type: CellType,
    text: String,
    empty: bool,
    annotation: Option<String>,
}

impl Cell {
    pub(crate) fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate,
            value: CellValue::Empty,
            cell_type: CellType::Empty,
            text: String::new(),
            empty: true,
            annotation: None,
        }
    }

    /// Position of this cell
    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Get the raw value
    pub fn value(&self) -> &CellValue {
        &self.value
    }

    /// Get the type classification of the value
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// Cached text form of the value
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Check if the cell holds no value
    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Get the annotation, if any
    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    /// Set the annotation
    pub fn set_annotation<S: Into<String>>(&mut self, annotation: S) {
        self.annotation = Some(annotation.into());
    }

    /// Remove and return the annotation
    pub fn take_annotation(&mut self) -> Option<String> {
        self.annotation.take()
    }

    /// Assign a value, deriving its type and text
    ///
    /// Assigning [`CellValue::Empty`] clears the cell.
    pub fn set_value<V: Into<CellValue>>(&mut self, value: V) {
        let value = value.into();
        let text = value.to_string();
        self.assign(value, text);
    }

    /// Assign a value but keep the given text instead of deriving it
    pub fn set_value_with_text<V, S>(&mut self, value: V, text: S)
    where
        V: Into<CellValue>,
        S: Into<String>,
    {
        self.assign(value.into(), text.into());
    }

    /// Copy value, type, text, empty flag and annotation from another cell
    ///
    /// The source's resolved type and text are taken as they are.
    pub fn copy_from(&mut self, other: &Cell) {
        self.value = other.value.clone();
        self.cell_type = other.cell_type;
        self.text = other.text.clone();
        self.empty = other.empty;
        self.annotation = other.annotation.clone();
    }

    /// Reset to the empty state, keeping the annotation
    pub fn clear(&mut self) {
        self.value = CellValue::Empty;
        self.cell_type = CellType::Empty;
        self.text.clear();
        self.empty = true;
    }

    fn assign(&mut self, value: CellValue, text: String) {
        if value.is_empty() {
            self.clear();
            return;
        }
        self.cell_type = value.cell_type();
        self.value = value;
        self.text = text;
        self.empty = false;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate == other.coordinate
    }
}

impl Eq for Cell {}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.coordinate.cmp(&other.coordinate)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(Coordinate::at(1, 2));
        assert!(cell.is_empty());
        assert_eq!(cell.cell_type(), CellType::Empty);
        assert_eq!(cell.text(), "");
        assert_eq!(cell.coordinate(), Coordinate::at(1, 2));
    }

    #[test]
    fn test_set_value_and_clear() {
        let mut cell = Cell::new(Coordinate::at(0, 0));
        cell.set_value(12.5);
        assert!(!cell.is_empty());
        assert_eq!(cell.cell_type(), CellType::Numeric);
        assert_eq!(cell.text(), "12.5");

        cell.set_annotation("checked");
        cell.clear();
        assert!(cell.is_empty());
        assert_eq!(cell.value(), &CellValue::Empty);
        assert_eq!(cell.text(), "");
        assert_eq!(cell.annotation(), Some("checked"));

        cell.set_value("again");
        cell.set_value(CellValue::Empty);
        assert!(cell.is_empty());
    }

    #[test]
    fn test_empty_text_is_a_value() {
        let mut cell = Cell::new(Coordinate::at(0, 0));
        cell.set_value("");
        assert!(!cell.is_empty());
        assert_eq!(cell.cell_type(), CellType::Text);
    }

    #[test]
    fn test_copy_from_keeps_resolved_text() {
        let mut source = Cell::new(Coordinate::at(0, 0));
        source.set_value_with_text(7.0, "007");
        source.set_annotation("zip prefix");

        let mut target = Cell::new(Coordinate::at(5, 5));
        target.copy_from(&source);
        assert_eq!(target.value(), &CellValue::Number(7.0));
        assert_eq!(target.cell_type(), CellType::Numeric);
        assert_eq!(target.text(), "007");
        assert_eq!(target.annotation(), Some("zip prefix"));
        assert_eq!(target.coordinate(), Coordinate::at(5, 5));

        // Re-deriving from the raw value would lose the source text
        target.set_value(source.value().clone());
        assert_eq!(target.text(), "7");
    }

    #[test]
    fn test_cells_order_by_coordinate() {
        let mut cells = vec![
            Cell::new(Coordinate::at(1, 0)),
            Cell::new(Coordinate::at(0, 9)),
            Cell::new(Coordinate::at(0, 2)),
        ];
        cells.sort();
        let order: Vec<_> = cells.iter().map(|c| c.coordinate().to_label()).collect();
        assert_eq!(order, ["A3", "A10", "B1"]);
    }
}
