//! Cell value types

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rust_decimal::Decimal;

/// Type classification of a cell's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CellType {
    /// No value
    #[default]
    Empty,
    Text,
    Numeric,
    Boolean,
    /// Date or date-time
    Temporal,
    Monetary,
    Duration,
}

impl CellType {
    /// Lowercase name, as used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            CellType::Empty => "empty",
            CellType::Text => "text",
            CellType::Numeric => "numeric",
            CellType::Boolean => "boolean",
            CellType::Temporal => "temporal",
            CellType::Monetary => "monetary",
            CellType::Duration => "duration",
        }
    }
}

impl fmt::Display for CellType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An amount of money in a given currency
///
/// The currency code is carried as-is; no conversion or validation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    /// Create an amount in `currency`
    pub fn new<S: Into<String>>(amount: Decimal, currency: S) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Represents the value stored in a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (no value)
    #[default]
    Empty,

    /// Free text; the fallback for anything not more specific
    Text(String),

    /// Numeric value
    Number(f64),

    /// Boolean value
    Boolean(bool),

    /// Calendar date
    Date(NaiveDate),

    /// Date with time of day
    DateTime(NaiveDateTime),

    /// Amount with currency
    Money(Money),

    /// Elapsed time
    Duration(TimeDelta),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the value is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Classify the value
    pub fn cell_type(&self) -> CellType {
        match self {
            CellValue::Empty => CellType::Empty,
            CellValue::Text(_) => CellType::Text,
            CellValue::Number(_) => CellType::Numeric,
            CellValue::Boolean(_) => CellType::Boolean,
            CellValue::Date(_) | CellValue::DateTime(_) => CellType::Temporal,
            CellValue::Money(_) => CellType::Monetary,
            CellValue::Duration(_) => CellType::Duration,
        }
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
            CellValue::Money(m) => write!(f, "{}", m),
            CellValue::Duration(d) => fmt_duration(f, d),
        }
    }
}

/// `[-]H:MM:SS`, with hours unbounded
fn fmt_duration(f: &mut fmt::Formatter<'_>, d: &TimeDelta) -> fmt::Result {
    let secs = d.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    write!(
        f,
        "{}{}:{:02}:{:02}",
        sign,
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl From<Money> for CellValue {
    fn from(m: Money) -> Self {
        CellValue::Money(m)
    }
}

impl From<TimeDelta> for CellValue {
    fn from(d: TimeDelta) -> Self {
        CellValue::Duration(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CellValue::Empty, Into::into)
    }
}
