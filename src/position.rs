//! Cell positions and A1-style column labels
//!
//! The base offset option has the form `<column>,<row>`:
//! - `B,3` → column 1, row 2 (rows are 1-based on the command line)
//! - `5,1` → column 5, row 0 (numeric columns are already zero-based)
//! - empty → `A1`

use crate::error::{XlError, XlResult};
use std::fmt;

/// Rows in an Excel worksheet (1-based numbers run 1..=MAX_ROWS)
pub const MAX_ROWS: usize = 1_048_576;
/// Columns in an Excel worksheet (A..=XFD)
pub const MAX_COLUMNS: usize = 16_384;

/// Zero-based anchor cell where reading starts (export) or writing starts (import)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub column: usize,
    pub row: usize,
}

impl CellPosition {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_index_to_label(self.column), self.row + 1)
    }
}

/// Parse a `<column>,<row>` option into a cell position
///
/// An empty option resolves to `A1`.
pub fn parse_position(opt: &str) -> XlResult<CellPosition> {
    if opt.is_empty() {
        return Ok(CellPosition::default());
    }

    let parts: Vec<&str> = opt.split(',').collect();
    if parts.len() != 2 {
        return Err(XlError::InvalidFormat(opt.to_string()));
    }

    let column = column_label_to_index(parts[0])?;
    // "" maps to -1, and a numeric label may carry a sign
    let column = usize::try_from(column).map_err(|_| {
        XlError::InvalidFormat(format!("{opt} (column must not be negative)"))
    })?;

    let row: i64 = parts[1]
        .parse()
        .map_err(|_| XlError::InvalidFormat(format!("{opt} (row must be a number)")))?;
    if row < 1 {
        return Err(XlError::InvalidFormat(format!(
            "{opt} (rows are numbered from 1)"
        )));
    }
    if row > MAX_ROWS as i64 {
        return Err(XlError::InvalidFormat(format!(
            "{opt} (row is past the last sheet row {MAX_ROWS})"
        )));
    }
    if column >= MAX_COLUMNS {
        return Err(XlError::InvalidFormat(format!(
            "{opt} (column is past the last sheet column {})",
            column_index_to_label(MAX_COLUMNS - 1)
        )));
    }

    Ok(CellPosition::new(column, (row - 1) as usize))
}

/// Convert a column label to a zero-based column index
///
/// Examples:
/// - A → 0
/// - Z → 25
/// - AA → 26
/// - 5 → 5 (numeric labels pass through unchanged)
///
/// An empty label yields -1.
pub fn column_label_to_index(label: &str) -> XlResult<i64> {
    if let Ok(index) = label.parse::<i64>() {
        return Ok(index);
    }

    let mut value: i64 = 0;
    for ch in label.chars() {
        let upper = ch.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return Err(XlError::InvalidColumnLabel {
                label: label.to_string(),
                ch,
            });
        }
        let digit = (upper as u8 - b'A' + 1) as i64;
        value = value
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| XlError::ColumnOverflow(label.to_string()))?;
    }

    Ok(value - 1)
}

/// Convert a zero-based column index to its column label
///
/// Examples:
/// - 0 → A
/// - 25 → Z
/// - 26 → AA
/// - 701 → ZZ
pub fn column_index_to_label(index: usize) -> String {
    let mut result = String::new();
    let mut idx = index;

    loop {
        let remainder = idx % 26;
        result.insert(0, (b'A' + remainder as u8) as char);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }

    result
}
