//! Excel reader implementation - .xlsx → workbook model

use crate::error::XlResult;
use crate::types::{resolve_sheet_name, CellValue, Sheet, Workbook};
use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads sheets of an .xlsx file into [`Sheet`] values
pub struct WorkbookReader {
    path: PathBuf,
    workbook: Xlsx<BufReader<File>>,
}

impl WorkbookReader {
    /// Open an existing .xlsx file
    pub fn open<P: AsRef<Path>>(path: P) -> XlResult<Self> {
        let path = path.as_ref().to_path_buf();
        let workbook: Xlsx<BufReader<File>> = open_workbook(&path)?;
        debug!(path = %path.display(), sheets = ?workbook.sheet_names(), "opened workbook");
        Ok(Self { path, workbook })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.workbook.sheet_names()
    }

    /// Read the sheet called `requested`, or the first sheet when it is empty
    pub fn read_selected(&mut self, requested: &str) -> XlResult<Sheet> {
        let names = self.sheet_names();
        let (_, name) = resolve_sheet_name(&names, requested)?;
        self.read_sheet(name)
    }

    /// Read one sheet by name
    ///
    /// Row and column indices are absolute: a sheet whose data starts at C3
    /// still yields two leading empty rows and two leading empty cells.
    pub fn read_sheet(&mut self, name: &str) -> XlResult<Sheet> {
        let range = self.workbook.worksheet_range(name)?;
        let mut sheet = Sheet::new(name);
        fill_values(&mut sheet, &range);

        // Formulas are optional; a sheet whose formulas cannot be read still converts
        match self.workbook.worksheet_formula(name) {
            Ok(formulas) => fill_formulas(&mut sheet, &formulas),
            Err(e) => debug!(sheet = name, error = %e, "formulas unavailable"),
        }

        debug!(sheet = name, rows = sheet.row_count(), "read sheet");
        Ok(sheet)
    }

    /// Read every sheet, in workbook order
    pub fn read_all(mut self) -> XlResult<Workbook> {
        let mut workbook = Workbook::new();
        for name in self.sheet_names() {
            let sheet = self.read_sheet(&name)?;
            workbook.sheets.push(sheet);
        }
        Ok(workbook)
    }
}

fn fill_values(sheet: &mut Sheet, range: &Range<Data>) {
    let Some((start_row, start_col)) = range.start() else {
        return;
    };

    for (row, col, data) in range.cells() {
        let value = convert_cell(data);
        if value == CellValue::Empty {
            continue;
        }
        let row = start_row as usize + row;
        let col = start_col as usize + col;
        sheet.row_mut(row).cell_mut(col).value = value;
    }
}

fn fill_formulas(sheet: &mut Sheet, formulas: &Range<String>) {
    let Some((start_row, start_col)) = formulas.start() else {
        return;
    };

    for (row, col, formula) in formulas.cells() {
        if formula.is_empty() {
            continue;
        }
        let row = start_row as usize + row;
        let col = start_col as usize + col;
        sheet.row_mut(row).cell_mut(col).formula = Some(formula.clone());
    }
}

/// Convert a calamine cell to a [`CellValue`]
pub(crate) fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_duration() => CellValue::Number(dt.as_f64()),
        Data::DateTime(dt) => data
            .as_datetime()
            .map(|datetime| CellValue::DateTime {
                serial: dt.as_f64(),
                datetime,
            })
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::Error(e) => CellValue::Error(e.to_string()),
        // ISO date and duration strings
        other => CellValue::Text(other.to_string()),
    }
}
