use crate::error::{XlError, XlResult};
use chrono::{NaiveDateTime, NaiveTime};
use std::fmt;

use crate::position::CellPosition;

/// Name given to the sheet of a workbook created from scratch
pub const DEFAULT_SHEET_NAME: &str = "sheet1";

//==============================================================================
// Cells
//==============================================================================

/// Value held by a cell
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Date or time: the serial number as stored in the file, and its calendar reading
    DateTime { serial: f64, datetime: NaiveDateTime },
    /// Excel error value such as `#DIV/0!`
    Error(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(true) => write!(f, "TRUE"),
            CellValue::Bool(false) => write!(f, "FALSE"),
            CellValue::DateTime { serial, datetime } if is_time_only(*serial) => {
                write!(f, "{}", datetime.format("%H:%M:%S"))
            }
            CellValue::DateTime { datetime, .. } if datetime.time() == NaiveTime::MIN => {
                write!(f, "{}", datetime.format("%Y-%m-%d"))
            }
            CellValue::DateTime { datetime, .. } => {
                write!(f, "{}", datetime.format("%Y-%m-%d %H:%M:%S"))
            }
            CellValue::Error(e) => write!(f, "{e}"),
        }
    }
}

/// Serials below one day carry no date part
pub fn is_time_only(serial: f64) -> bool {
    (0.0..1.0).contains(&serial)
}

/// A single cell: its value plus the formula that produced it, if any
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    pub value: CellValue,
    pub formula: Option<String>,
}

impl Cell {
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            formula: None,
        }
    }

    /// Rendered text of the cell; empty cells render as ""
    pub fn text(&self) -> String {
        self.value.to_string()
    }

    /// Replace the cell content with text, dropping any formula
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = CellValue::Text(value.into());
        self.formula = None;
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.value, CellValue::Empty) && self.formula.is_none()
    }
}

//==============================================================================
// Rows and sheets
//==============================================================================

/// Ordered cells of one row; the index of a cell is its column
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_cell(&mut self) -> &mut Cell {
        self.cells.push(Cell::default());
        let last = self.cells.len() - 1;
        &mut self.cells[last]
    }

    /// Cell at `column`, appending empty cells until it exists
    pub fn cell_mut(&mut self, column: usize) -> &mut Cell {
        while self.cells.len() <= column {
            self.add_cell();
        }
        &mut self.cells[column]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row {
            cells: iter
                .into_iter()
                .map(|s| Cell::new(CellValue::Text(s.into())))
                .collect(),
        }
    }
}

/// Named, ordered collection of rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Row>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        let last = self.rows.len() - 1;
        &mut self.rows[last]
    }

    /// Row at `index`, appending empty rows until it exists
    pub fn row_mut(&mut self, index: usize) -> &mut Row {
        while self.rows.len() <= index {
            self.add_row();
        }
        &mut self.rows[index]
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Text of every cell, row by row (handy for assertions and debugging)
    pub fn to_text_grid(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.cells.iter().map(Cell::text).collect())
            .collect()
    }
}

//==============================================================================
// Workbook
//==============================================================================

/// Ordered collection of sheets, persisted as one .xlsx file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sheet(&mut self, name: impl Into<String>) -> &mut Sheet {
        self.sheets.push(Sheet::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Sheet called `name`, or the first sheet when `name` is empty
    pub fn select_sheet(&self, name: &str) -> XlResult<&Sheet> {
        let index = self.sheet_index(name)?;
        Ok(&self.sheets[index])
    }

    pub fn select_sheet_mut(&mut self, name: &str) -> XlResult<&mut Sheet> {
        let index = self.sheet_index(name)?;
        Ok(&mut self.sheets[index])
    }

    fn sheet_index(&self, name: &str) -> XlResult<usize> {
        let names = self.sheet_names();
        resolve_sheet_name(&names, name).map(|(index, _)| index)
    }
}

/// Pick a sheet out of `names`: the one called `requested`, or the first one
/// when nothing was requested
pub fn resolve_sheet_name<'a, S: AsRef<str>>(
    names: &'a [S],
    requested: &str,
) -> XlResult<(usize, &'a str)> {
    if requested.is_empty() {
        return names
            .first()
            .map(|n| (0, n.as_ref()))
            .ok_or(XlError::NoSheets);
    }
    names
        .iter()
        .position(|n| n.as_ref() == requested)
        .map(|index| (index, names[index].as_ref()))
        .ok_or_else(|| XlError::SheetNotFound(requested.to_string()))
}

//==============================================================================
// Conversion options
//==============================================================================

/// Options shared by both conversion directions
#[derive(Debug, Clone, PartialEq)]
pub struct TransposeOptions {
    /// Text placed between fields of a line
    pub separator: String,
    /// Sheet to operate on; empty selects the first sheet
    pub sheet: String,
    /// Anchor cell where reading or writing starts
    pub base: CellPosition,
}

impl Default for TransposeOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            sheet: String::new(),
            base: CellPosition::default(),
        }
    }
}
