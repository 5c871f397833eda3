use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The "dominant space" of a matrix: whether its backing vectors are rows or
/// columns.
///
/// Transposing a matrix flips this tag instead of moving any data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    RowMajor,
    ColumnMajor,
}

impl Orientation {
    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            Orientation::RowMajor => Orientation::ColumnMajor,
            Orientation::ColumnMajor => Orientation::RowMajor,
        }
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::ColumnMajor
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "row" | "rows" | "row_major" | "rowmajor" => Ok(Orientation::RowMajor),
            "col" | "column" | "columns" | "column_major" | "columnmajor" => {
                Ok(Orientation::ColumnMajor)
            }
            _ => Err(format!(
                "Unknown orientation: {}. Expected one of `row_major` or `column_major`",
                s
            )),
        }
    }
}

/// Which line of a matrix a cursor walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl Axis {
    /// The orientation whose backing vectors are lines along this axis.
    #[inline]
    pub(crate) fn storage(self) -> Orientation {
        match self {
            Axis::Row => Orientation::RowMajor,
            Axis::Column => Orientation::ColumnMajor,
        }
    }
}

/// Translate a logical `(row, col)` into `(primary, secondary)` storage
/// coordinates: primary picks the backing vector, secondary the offset in it.
#[inline]
pub fn map_axes(row: usize, col: usize, orientation: Orientation) -> (usize, usize) {
    match orientation {
        Orientation::RowMajor => (row, col),
        Orientation::ColumnMajor => (col, row),
    }
}
