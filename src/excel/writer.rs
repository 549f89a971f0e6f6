//! Excel writer implementation - workbook model → .xlsx

use crate::error::XlResult;
use crate::types::{is_time_only, Cell, CellValue, Sheet, Workbook};
use chrono::NaiveTime;
use rust_xlsxwriter::{Format, Formula, Workbook as XlsxWorkbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::debug;

/// Number formats applied to date and time cells
const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";
const TIME_FORMAT: &str = "hh:mm:ss";

/// Formats shared by every date/time cell of a sheet
struct DateFormats {
    date: Format,
    datetime: Format,
    time: Format,
}

impl DateFormats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            time: Format::new().set_num_format(TIME_FORMAT),
        }
    }
}

/// Persists a [`Workbook`] as an .xlsx file
pub struct WorkbookWriter<'a> {
    workbook: &'a Workbook,
}

impl<'a> WorkbookWriter<'a> {
    pub fn new(workbook: &'a Workbook) -> Self {
        Self { workbook }
    }

    /// Write every sheet to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> XlResult<()> {
        let mut xlsx = XlsxWorkbook::new();

        for sheet in &self.workbook.sheets {
            let worksheet = xlsx.add_worksheet();
            worksheet.set_name(&sheet.name)?;
            Self::write_sheet(worksheet, sheet)?;
        }

        xlsx.save(path)?;
        debug!(path = %path.display(), sheets = self.workbook.sheets.len(), "saved workbook");
        Ok(())
    }

    fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<(), XlsxError> {
        let formats = DateFormats::new();

        for (row_idx, row) in sheet.rows.iter().enumerate() {
            let excel_row = u32::try_from(row_idx).map_err(|_| XlsxError::RowColumnLimitError)?;

            for (col_idx, cell) in row.cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let excel_col =
                    u16::try_from(col_idx).map_err(|_| XlsxError::RowColumnLimitError)?;

                if let Some(formula) = &cell.formula {
                    worksheet.write_formula(
                        excel_row,
                        excel_col,
                        Formula::new(formula).set_result(cell.text()),
                    )?;
                    continue;
                }

                Self::write_value(worksheet, excel_row, excel_col, cell, &formats)?;
            }
        }

        Ok(())
    }

    fn write_value(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        cell: &Cell,
        formats: &DateFormats,
    ) -> Result<(), XlsxError> {
        match &cell.value {
            CellValue::Empty => {}
            // Empty text reads back as an empty cell, so there is nothing to store
            CellValue::Text(s) if s.is_empty() => {}
            CellValue::Text(s) | CellValue::Error(s) => {
                worksheet.write_string(row, col, s)?;
            }
            CellValue::Number(n) => {
                worksheet.write_number(row, col, *n)?;
            }
            CellValue::Bool(b) => {
                worksheet.write_boolean(row, col, *b)?;
            }
            // The serial is written back as read, so the stored date never moves
            CellValue::DateTime { serial, datetime } => {
                let format = if is_time_only(*serial) {
                    &formats.time
                } else if datetime.time() == NaiveTime::MIN {
                    &formats.date
                } else {
                    &formats.datetime
                };
                worksheet.write_number_with_format(row, col, *serial, format)?;
            }
        }
        Ok(())
    }
}
