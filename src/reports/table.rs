//! Format-neutral tables that every reporter renders.

use serde::Serialize;
use std::fmt;

use super::types::ReportMetadata;

/// A single table cell.
///
/// Numbers stay numeric so JSON exports keep their types; text formatters
/// print them with Rust's shortest round-trip representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Integer(i64),
    Empty,
}

impl Cell {
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Empty => Ok(()),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Cell {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for Cell {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u8> for Cell {
    fn from(n: u8) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(Self::Empty, Self::Integer)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Build a row from heterogeneous values.
macro_rules! row {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::reports::Cell::from($value)),*]
    };
}
pub(crate) use row;

/// A titled table with named columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(title: impl Into<String>, headers: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row width for {}", self.title);
        self.rows.push(row);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Everything one export contains.
#[derive(Debug, Clone)]
pub struct Report {
    pub metadata: ReportMetadata,
    pub sections: Vec<Table>,
}

impl Report {
    /// Total rows across sections.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(Table::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::from(91.1).to_string(), "91.1");
        assert_eq!(Cell::from(5_800_000.0).to_string(), "5800000");
        assert_eq!(Cell::from(12_847u32).to_string(), "12847");
        assert_eq!(Cell::from(None::<f64>).to_string(), "");
        assert_eq!(Cell::from("North").to_string(), "North");
    }

    #[test]
    fn test_cell_serializes_untagged() {
        let cells = row!["POL001", 5000.0, 3u32, None::<f64>];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"["POL001",5000.0,3,null]"#);
    }

    #[test]
    fn test_table_push() {
        let mut table = Table::new("Regions", &["Region", "Policies"]);
        assert!(table.is_empty());
        table.push(row!["North", 3245u32]);
        assert_eq!(table.len(), 1);
    }
}
