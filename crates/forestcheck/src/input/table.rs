//! In-memory tabular data.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single table value.
///
/// Serialization is untagged, so JSON numbers, strings, and nulls map onto
/// the matching variant directly. Integers are tried before floats when
/// deserializing, so whole numbers stay integers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// Missing value.
    Null,
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// Text value.
    Str(String),
}

impl Cell {
    /// True if this cell is a missing value.
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// True if this cell already holds a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Float(_))
    }

    /// Attempt to reinterpret this cell as a numeric cell.
    ///
    /// Numeric cells pass through unchanged, and so do nulls (a missing
    /// value is a legal member of a numeric column). Text parses as an
    /// integer first, then as a float, ignoring surrounding whitespace.
    /// Returns `None` when the text is not a number.
    pub fn to_numeric(&self) -> Option<Cell> {
        match self {
            Cell::Int(_) | Cell::Float(_) | Cell::Null => Some(self.clone()),
            Cell::Str(s) => {
                let trimmed = s.trim();
                if let Ok(i) = trimmed.parse::<i64>() {
                    Some(Cell::Int(i))
                } else {
                    trimmed.parse::<f64>().ok().map(Cell::Float)
                }
            }
        }
    }

    /// Numeric view of this cell, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Str(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Str(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Cell::Int(value as i64)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

/// Parsed tabular data: named columns in insertion order, rows aligned by
/// position across columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataTable {
    columns: IndexMap<String, Vec<Cell>>,
}

impl DataTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from named columns.
    pub fn from_columns(columns: IndexMap<String, Vec<Cell>>) -> Self {
        Self { columns }
    }

    /// Add or replace a column. New columns keep insertion order.
    pub fn insert_column<N, I, C>(&mut self, name: N, cells: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.columns
            .insert(name.into(), cells.into_iter().map(Into::into).collect());
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|(_, col)| col.len()).unwrap_or(0)
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// True if a column with this name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Get all values for a column by name.
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Mutable access to a column's values.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Vec<Cell>> {
        self.columns.get_mut(name)
    }

    /// Get a specific cell value.
    pub fn get(&self, name: &str, row: usize) -> Option<&Cell> {
        self.columns.get(name).and_then(|col| col.get(row))
    }

    /// True if every column holds the same number of rows.
    pub fn is_rectangular(&self) -> bool {
        let mut lens = self.columns.values().map(Vec::len);
        match lens.next() {
            Some(first) => lens.all(|len| len == first),
            None => true,
        }
    }
}
