//! Ordered collection of sheets

use crate::error::{Error, Result};
use crate::sheet::{Sheet, SheetId};

/// Name given to the first sheet when none is supplied
pub const FIRST_SHEET_NAME: &str = "Sheet 1";

/// A way to designate a sheet in a [`Sheets`] collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetRef<'a> {
    /// Exact name match; the first one in collection order wins
    Name(&'a str),
    /// Position, valid only when in range
    Index(usize),
    /// Identity
    Id(SheetId),
}

impl<'a> From<&'a str> for SheetRef<'a> {
    fn from(name: &'a str) -> Self {
        SheetRef::Name(name)
    }
}

impl<'a> From<&'a String> for SheetRef<'a> {
    fn from(name: &'a String) -> Self {
        SheetRef::Name(name)
    }
}

impl From<usize> for SheetRef<'_> {
    fn from(index: usize) -> Self {
        SheetRef::Index(index)
    }
}

impl From<SheetId> for SheetRef<'_> {
    fn from(id: SheetId) -> Self {
        SheetRef::Id(id)
    }
}

impl From<&Sheet> for SheetRef<'_> {
    fn from(sheet: &Sheet) -> Self {
        SheetRef::Id(sheet.id())
    }
}

/// Sheets in user-visible order, with unique names
///
/// Iteration borrows the collection, so it cannot be reordered while an
/// iterator is alive.
#[derive(Debug, Default)]
pub struct Sheets {
    sheets: Vec<Sheet>,
    next_id: u64,
}

impl Sheets {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of sheets
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the collection has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Append a sheet
    ///
    /// Without a name, the sheet is named after the successor of the last
    /// sheet's name ("Sheet 1" → "Sheet 2"), or [`FIRST_SHEET_NAME`].
    pub fn add(&mut self, name: Option<&str>) -> Result<&mut Sheet> {
        self.insert(name, -1)
    }

    /// Insert a sheet at `position`
    ///
    /// Negative positions count from the end (`-1` appends); positions out of
    /// range are clamped.
    pub fn insert(&mut self, name: Option<&str>, position: isize) -> Result<&mut Sheet> {
        let name = match name {
            Some(name) => name.to_string(),
            None => self.generate_sheet_name(),
        };
        self.validate_sheet_name(&name, None)?;

        let index = insertion_index(position, self.sheets.len());
        let id = SheetId(self.next_id);
        self.next_id += 1;

        log::debug!("adding sheet {:?} at position {}", name, index);
        self.sheets.insert(index, Sheet::new(id, name));
        Ok(&mut self.sheets[index])
    }

    /// Resolve a reference to a position
    pub fn index_of<'a, R: Into<SheetRef<'a>>>(&self, sheet: R) -> Option<usize> {
        match sheet.into() {
            SheetRef::Name(name) => self.sheets.iter().position(|s| s.name() == name),
            SheetRef::Index(index) => (index < self.sheets.len()).then_some(index),
            SheetRef::Id(id) => self.sheets.iter().position(|s| s.id() == id),
        }
    }

    /// Get a sheet by name, position or identity
    pub fn get<'a, R: Into<SheetRef<'a>>>(&self, sheet: R) -> Option<&Sheet> {
        self.index_of(sheet).map(|i| &self.sheets[i])
    }

    /// Get a mutable sheet by name, position or identity
    pub fn get_mut<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R) -> Option<&mut Sheet> {
        self.index_of(sheet).map(move |i| &mut self.sheets[i])
    }

    /// Remove a sheet, returning it; `None` if the reference does not resolve
    pub fn remove<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R) -> Option<Sheet> {
        let index = self.index_of(sheet)?;
        let removed = self.sheets.remove(index);
        log::debug!("removed sheet {:?} from position {}", removed.name(), index);
        Some(removed)
    }

    /// Rename a sheet
    ///
    /// Returns `Ok(false)` if the reference does not resolve.
    pub fn rename<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R, name: &str) -> Result<bool> {
        let Some(index) = self.index_of(sheet) else {
            return Ok(false);
        };
        self.validate_sheet_name(name, Some(index))?;
        self.sheets[index].set_name(name.to_string());
        Ok(true)
    }

    /// Move a sheet by `shift` positions, clamping to the collection bounds
    pub fn move_by<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R, shift: isize) -> Option<usize> {
        let from = self.index_of(sheet)?;
        let last = self.sheets.len() as isize - 1;
        let to = (from as isize).saturating_add(shift).clamp(0, last) as usize;
        self.relocate(from, to);
        Some(to)
    }

    /// Move a sheet to an absolute position
    ///
    /// Negative positions count from the end (`-1` is the last slot);
    /// out-of-range positions are clamped. Returns the new position, or
    /// `None` (and does nothing) if the reference does not resolve.
    pub fn move_to<'a, R: Into<SheetRef<'a>>>(
        &mut self,
        sheet: R,
        position: isize,
    ) -> Option<usize> {
        let from = self.index_of(sheet)?;
        // Position is taken in the list without the moved sheet
        let to = insertion_index(position, self.sheets.len() - 1);
        self.relocate(from, to);
        Some(to)
    }

    /// Move a sheet `n` positions towards the end
    pub fn move_up<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R, n: usize) -> Option<usize> {
        self.move_by(sheet, n.min(isize::MAX as usize) as isize)
    }

    /// Move a sheet `n` positions towards the front
    pub fn move_down<'a, R: Into<SheetRef<'a>>>(&mut self, sheet: R, n: usize) -> Option<usize> {
        self.move_by(sheet, -(n.min(isize::MAX as usize) as isize))
    }

    /// Iterate over sheets in collection order
    pub fn iter(&self) -> std::slice::Iter<'_, Sheet> {
        self.sheets.iter()
    }

    /// Iterate mutably over sheets in collection order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Sheet> {
        self.sheets.iter_mut()
    }

    /// Sheet names in collection order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sheets.iter().map(Sheet::name)
    }

    fn relocate(&mut self, from: usize, to: usize) {
        if from == to {
            return;
        }
        let sheet = self.sheets.remove(from);
        log::debug!("moving sheet {:?} from {} to {}", sheet.name(), from, to);
        self.sheets.insert(to, sheet);
    }

    /// Validate a sheet name, optionally excluding a sheet from duplicate check
    fn validate_sheet_name(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.trim().is_empty() {
            return Err(Error::EmptySheetName);
        }

        let duplicate = self
            .sheets
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != exclude_index && s.name() == name);
        if duplicate {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        match self.sheets.last() {
            Some(last) => successor(last.name()),
            None => FIRST_SHEET_NAME.to_string(),
        }
    }
}

impl<'a> IntoIterator for &'a Sheets {
    type Item = &'a Sheet;
    type IntoIter = std::slice::Iter<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Sheets {
    type Item = &'a mut Sheet;
    type IntoIter = std::slice::IterMut<'a, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Map a possibly negative insert position onto `0..=len`
fn insertion_index(position: isize, len: usize) -> usize {
    let len = len as isize;
    let index = if position < 0 {
        len + 1 + position
    } else {
        position
    };
    index.clamp(0, len) as usize
}

/// Next string in sequence: "Sheet 1" → "Sheet 2", "Sheet 9" → "Sheet 10", "Az" → "Ba"
///
/// The rightmost alphanumeric character is incremented, carrying leftwards.
/// A carry that cannot continue inserts a new character of the same kind in
/// front. Strings without alphanumerics get their last character incremented.
pub fn successor(name: &str) -> String {
    let mut chars: Vec<char> = name.chars().collect();

    let Some(mut i) = chars.iter().rposition(|c| c.is_ascii_alphanumeric()) else {
        if let Some(last) = chars.last_mut() {
            *last = char::from_u32(*last as u32 + 1).unwrap_or(*last);
        }
        return chars.into_iter().collect();
    };

    loop {
        let (next, carry) = match chars[i] {
            '9' => ('0', Some('1')),
            'z' => ('a', Some('a')),
            'Z' => ('A', Some('A')),
            c => ((c as u8 + 1) as char, None),
        };
        chars[i] = next;

        let Some(prefix) = carry else { break };
        // Carry only crosses a separator between characters of the same kind
        match chars[..i].iter().rposition(|c| c.is_ascii_alphanumeric()) {
            Some(j) if j + 1 == i || chars[j].is_ascii_digit() == chars[i].is_ascii_digit() => {
                i = j
            }
            _ => {
                chars.insert(i, prefix);
                break;
            }
        }
    }

    chars.into_iter().collect()
}
