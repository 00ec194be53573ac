//! Sheet type
//!
//! A sheet stores its cells sparsely, keyed by [`PackedKey`]. Only cells that
//! were accessed or assigned exist in the store, so memory follows the number
//! of occupied cells rather than the area they span.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::cell::{Cell, CellValue};
use crate::coordinate::{Coordinate, IntoCoordinate, PackedKey, AXIS_MAX};
use crate::error::{Error, Result};

/// Identity of a sheet, stable across renames and moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SheetId(pub(crate) u64);

/// Options for [`Sheet::write_row`]
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteRowOptions {
    /// Target row; the current-row cursor when `None`
    pub row: Option<u16>,
}

impl WriteRowOptions {
    /// Target an explicit row
    pub fn at_row(row: u16) -> Self {
        Self { row: Some(row) }
    }
}

/// Cached bounding box (invalidated on changes)
#[derive(Debug, Clone, Copy)]
struct BoundingBox {
    value: Coordinate,
    dirty: bool,
}

/// A named sheet holding a sparse grid of cells
#[derive(Debug)]
pub struct Sheet {
    id: SheetId,
    /// Sheet name, unique within its document
    name: String,
    /// Packed key → cell
    cells: BTreeMap<PackedKey, Cell>,
    bound: std::cell::Cell<BoundingBox>,
    /// Next row for [`Sheet::write_row`]
    current_row: u32,
}

impl Sheet {
    pub(crate) fn new(id: SheetId, name: String) -> Self {
        Self {
            id,
            name,
            cells: BTreeMap::new(),
            bound: std::cell::Cell::new(BoundingBox {
                value: Coordinate::default(),
                dirty: false,
            }),
            current_row: 0,
        }
    }

    /// Get the sheet identity
    pub fn id(&self) -> SheetId {
        self.id
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    // === Cell Access ===

    /// Look up a cell without creating it
    pub fn cell<C: IntoCoordinate>(&self, at: C) -> Result<Option<&Cell>> {
        let coordinate = at.into_coordinate()?;
        Ok(self.cells.get(&coordinate.packed_key()))
    }

    /// Get the cell at an address, creating an empty one on first access
    ///
    /// Repeated calls with an equivalent address return the same cell.
    pub fn cell_at<C: IntoCoordinate>(&mut self, at: C) -> Result<&mut Cell> {
        let coordinate = at.into_coordinate()?;
        // The caller may assign or clear through the returned reference
        self.invalidate_bound();
        Ok(self
            .cells
            .entry(coordinate.packed_key())
            .or_insert_with(|| Cell::new(coordinate)))
    }

    /// Set a cell value by address
    pub fn set_cell_at<C, V>(&mut self, at: C, value: V) -> Result<()>
    where
        C: IntoCoordinate,
        V: Into<CellValue>,
    {
        self.cell_at(at)?.set_value(value);
        Ok(())
    }

    /// Clear a cell, keeping it in the sheet
    pub fn clear_cell_at<C: IntoCoordinate>(&mut self, at: C) -> Result<()> {
        let key = at.into_coordinate()?.packed_key();
        if let Some(cell) = self.cells.get_mut(&key) {
            cell.clear();
            self.invalidate_bound();
        }
        Ok(())
    }

    /// Delete a cell from the sheet and hand it back, detached
    pub fn remove_cell_at<C: IntoCoordinate>(&mut self, at: C) -> Result<Option<Cell>> {
        let key = at.into_coordinate()?.packed_key();
        let removed = self.cells.remove(&key);
        if removed.is_some() {
            self.invalidate_bound();
        }
        Ok(removed)
    }

    /// Iterate over non-empty cells in coordinate order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values().filter(|c| !c.is_empty())
    }

    /// Number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Check if no cell holds a value
    pub fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }

    /// Drop stored cells that hold no value and no annotation
    pub fn compact(&mut self) {
        // Empty cells never extend the bounding box, so it stays valid
        self.cells
            .retain(|_, c| !c.is_empty() || c.annotation().is_some());
    }

    // === Bounding Box ===

    /// Largest column and row among non-empty cells, `(0, 0)` if there are none
    pub fn bounding_box(&self) -> Coordinate {
        let cached = self.bound.get();
        if !cached.dirty {
            return cached.value;
        }

        let value = self.compute_bound();
        log::trace!("sheet {:?}: bounding box recomputed as {}", self.name, value);
        self.bound.set(BoundingBox {
            value,
            dirty: false,
        });
        value
    }

    fn compute_bound(&self) -> Coordinate {
        self.cells().fold(Coordinate::default(), |bound, cell| {
            let at = cell.coordinate();
            Coordinate::at(bound.x.max(at.x), bound.y.max(at.y))
        })
    }

    fn invalidate_bound(&mut self) {
        self.bound.get_mut().dirty = true;
    }

    // === Rows ===

    /// Get the current-row cursor
    pub fn current_row(&self) -> u32 {
        self.current_row
    }

    /// Set the current-row cursor
    pub fn set_current_row(&mut self, row: u32) {
        self.current_row = row;
    }

    /// Advance the cursor, returning its new value
    pub fn next_row(&mut self, increment: u32) -> u32 {
        self.current_row = self.current_row.saturating_add(increment);
        self.current_row
    }

    /// Move the cursor back, stopping at row 0
    pub fn previous_row(&mut self, decrement: u32) -> u32 {
        self.current_row = self.current_row.saturating_sub(decrement);
        self.current_row
    }

    /// Write values into columns `0..n` of a row
    ///
    /// Targets `options.row` if given, otherwise the cursor. The cursor then
    /// advances by one, unless an explicit row other than the cursor was used.
    /// Nothing is written if any target cell would be out of range.
    pub fn write_row<I>(&mut self, values: I, options: WriteRowOptions) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<CellValue>,
    {
        let row = options.row.map_or(self.current_row, u32::from);
        let values: Vec<CellValue> = values.into_iter().map(Into::into).collect();

        if row > AXIS_MAX {
            return Err(Error::out_of_range("y", row));
        }
        if values.len() > AXIS_MAX as usize + 1 {
            return Err(Error::out_of_range("x", values.len() as u64 - 1));
        }

        for (x, value) in values.into_iter().enumerate() {
            self.set_cell_at((x as u32, row), value)?;
        }

        if row == self.current_row {
            self.next_row(1);
        }
        Ok(())
    }

    /// Cells of a row over columns `0..=bounding_box().x`, creating missing ones
    pub fn row_cells(&mut self, y: u16) -> Vec<&mut Cell> {
        let max_x = self.bounding_box().x;
        for x in 0..=max_x {
            let at = Coordinate::at(x, y);
            self.cells
                .entry(at.packed_key())
                .or_insert_with(|| Cell::new(at));
        }

        self.invalidate_bound();
        self.cells
            .values_mut()
            .filter(|c| {
                let at = c.coordinate();
                at.y == y && at.x <= max_x
            })
            .collect()
    }

    /// Read-only row over columns `0..=bounding_box().x`
    ///
    /// Missing cells are returned as owned empty placeholders; the sheet is
    /// not modified.
    pub fn row_values(&self, y: u16) -> Vec<Cow<'_, Cell>> {
        let max_x = self.bounding_box().x;
        (0..=max_x)
            .map(|x| {
                let at = Coordinate::at(x, y);
                match self.cells.get(&at.packed_key()) {
                    Some(cell) => Cow::Borrowed(cell),
                    None => Cow::Owned(Cell::new(at)),
                }
            })
            .collect()
    }

    /// Iterate over rows `0..=bounding_box().y`
    ///
    /// Each call starts a fresh pass; the iterator itself can also be cloned.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            sheet: self,
            next: 0,
            end: u32::from(self.bounding_box().y) + 1,
        }
    }
}

/// Iterator over the read-only rows of a sheet
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    sheet: &'a Sheet,
    next: u32,
    end: u32,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Vec<Cow<'a, Cell>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let y = self.next as u16;
        self.next += 1;
        Some(self.sheet.row_values(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.end - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
