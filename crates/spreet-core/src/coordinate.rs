//! Cell coordinates and the packed-key codec
//!
//! A [`Coordinate`] has four interchangeable representations:
//! - a label such as `"A1"` or `"BC12"` (letters for the column, one-based row)
//! - an `(x, y)` pair of zero-based integers
//! - a [`KeyedCoordinate`] with named fields
//! - a [`PackedKey`], the single integer used as the sparse store key

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Number of bits allotted to each axis inside a [`PackedKey`]
pub const HALF_WIDTH: u32 = 16;

/// Largest value either axis may take
pub const AXIS_MAX: u32 = (1 << HALF_WIDTH) - 1;

/// Single integer encoding of a coordinate: `(x << HALF_WIDTH) | y`
///
/// Column sits in the high bits, so ordering keys orders coordinates
/// column-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackedKey(pub u32);

impl PackedKey {
    /// Raw integer value
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u64> for PackedKey {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        u32::try_from(value)
            .map(PackedKey)
            .map_err(|_| Error::out_of_range("x", value >> HALF_WIDTH))
    }
}

/// A zero-based (column, row) position in a sheet
///
/// # Examples
/// ```
/// use spreet_core::Coordinate;
///
/// let c = Coordinate::parse("BC12").unwrap();
/// assert_eq!((c.x, c.y), (54, 11));
/// assert_eq!(c.to_label(), "BC12");
/// assert_eq!(Coordinate::from_packed_key(c.packed_key()), c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    /// Column index (0-based, A=0)
    pub x: u16,
    /// Row index (0-based internally, 1-based in labels)
    pub y: u16,
}

impl Coordinate {
    /// Create a coordinate from in-range axis values
    pub const fn at(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Create a coordinate, rejecting axis values above [`AXIS_MAX`]
    pub fn new(x: u32, y: u32) -> Result<Self> {
        Ok(Self {
            x: axis("x", x.into())?,
            y: axis("y", y.into())?,
        })
    }

    /// Parse a label (`"B10"`) or a zero-based numeric pair (`"1,9"`)
    ///
    /// Surrounding whitespace is ignored and column letters are
    /// case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || Error::InvalidCoordinateFormat(s.to_string());
        let bytes = s.as_bytes();

        let letters = bytes.iter().take_while(|b| b.is_ascii_alphabetic()).count();
        if letters > 0 {
            let digits = &s[letters..];
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }

            let x = Self::letters_to_column(&s[..letters])?;
            let row = parse_digits(digits);
            // Labels are one-based
            if row == 0 {
                return Err(invalid());
            }
            return Ok(Self {
                x,
                y: axis("y", row - 1)?,
            });
        }

        let lead = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
        if lead > 0 {
            let rest = &s[lead..];
            let sep = rest.bytes().take_while(|b| !b.is_ascii_digit()).count();
            let tail = &rest[sep..];
            if sep > 0 && !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
                return Ok(Self {
                    x: axis("x", parse_digits(&s[..lead]))?,
                    y: axis("y", parse_digits(tail))?,
                });
            }
        }

        Err(invalid())
    }

    /// Split a packed key back into its coordinate
    pub fn from_packed_key(key: PackedKey) -> Self {
        Self {
            x: (key.0 >> HALF_WIDTH) as u16,
            y: (key.0 & AXIS_MAX) as u16,
        }
    }

    /// Pack into a single integer key
    pub fn packed_key(&self) -> PackedKey {
        PackedKey((u32::from(self.x) << HALF_WIDTH) | u32::from(self.y))
    }

    /// Format as a label (`"A1"`)
    pub fn to_label(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.x), u32::from(self.y) + 1)
    }

    /// `(x, y)` pair
    pub fn to_pair(&self) -> (u16, u16) {
        (self.x, self.y)
    }

    /// Keyed form with `x` and `y` set
    pub fn to_keyed(&self) -> KeyedCoordinate {
        KeyedCoordinate {
            x: Some(self.x.into()),
            y: Some(self.y.into()),
            ..KeyedCoordinate::default()
        }
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = u32::from(col) + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(Error::InvalidCoordinateFormat("empty column letters".into()));
        }

        let mut col: u64 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(Error::InvalidCoordinateFormat(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + u64::from(c.to_ascii_uppercase() as u8 - b'A') + 1;
            if col > u64::from(AXIS_MAX) + 1 {
                return Err(Error::out_of_range("x", col - 1));
            }
        }

        axis("x", i128::from(col) - 1)
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.packed_key().cmp(&other.packed_key())
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_label())
    }
}

impl FromStr for Coordinate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<PackedKey> for Coordinate {
    fn from(key: PackedKey) -> Self {
        Self::from_packed_key(key)
    }
}

impl From<Coordinate> for PackedKey {
    fn from(c: Coordinate) -> Self {
        c.packed_key()
    }
}

/// Coordinate given by named fields
///
/// `x` takes precedence over `column` and `y` over `row`; absent axes
/// default to 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct KeyedCoordinate {
    pub x: Option<u32>,
    pub y: Option<u32>,
    pub column: Option<u32>,
    pub row: Option<u32>,
}

/// Anything a sheet accepts as a cell address
pub trait IntoCoordinate {
    fn into_coordinate(self) -> Result<Coordinate>;
}

impl IntoCoordinate for Coordinate {
    fn into_coordinate(self) -> Result<Coordinate> {
        Ok(self)
    }
}

impl IntoCoordinate for &Coordinate {
    fn into_coordinate(self) -> Result<Coordinate> {
        Ok(*self)
    }
}

impl IntoCoordinate for PackedKey {
    fn into_coordinate(self) -> Result<Coordinate> {
        Ok(Coordinate::from_packed_key(self))
    }
}

impl IntoCoordinate for &str {
    fn into_coordinate(self) -> Result<Coordinate> {
        Coordinate::parse(self)
    }
}

impl IntoCoordinate for &String {
    fn into_coordinate(self) -> Result<Coordinate> {
        Coordinate::parse(self)
    }
}

impl IntoCoordinate for String {
    fn into_coordinate(self) -> Result<Coordinate> {
        Coordinate::parse(&self)
    }
}

impl IntoCoordinate for KeyedCoordinate {
    fn into_coordinate(self) -> Result<Coordinate> {
        Coordinate::new(
            self.x.or(self.column).unwrap_or(0),
            self.y.or(self.row).unwrap_or(0),
        )
    }
}

macro_rules! impl_pair {
    ($($t:ty),*) => {
        $(
            impl IntoCoordinate for ($t, $t) {
                fn into_coordinate(self) -> Result<Coordinate> {
                    Ok(Coordinate {
                        x: axis("x", self.0 as i128)?,
                        y: axis("y", self.1 as i128)?,
                    })
                }
            }
        )*
    };
}

impl_pair!(u8, u16, u32, u64, usize, i32, i64, isize);

fn axis(name: &'static str, value: i128) -> Result<u16> {
    u16::try_from(value).map_err(|_| Error::out_of_range(name, value))
}

/// Parse a non-empty run of ASCII digits, saturating on overflow
fn parse_digits(digits: &str) -> i128 {
    digits.parse::<i128>().unwrap_or(i128::MAX)
}
