//! Sheet ⇄ delimited lines
//!
//! Export walks the sheet from the base cell and stops at the first empty
//! row; within a row it stops at the first empty cell. Import writes one row
//! per input line starting at the base cell.

use crate::error::XlResult;
use crate::position::CellPosition;
use crate::types::Sheet;
use std::io::{BufRead, Write};
use tracing::debug;

/// Write the rows of `sheet` to `out`, one separator-joined line per row
///
/// Returns the number of lines written.
pub fn sheet_to_lines<W: Write>(
    sheet: &Sheet,
    base: CellPosition,
    separator: &str,
    out: &mut W,
) -> XlResult<usize> {
    let mut written = 0;

    for (row_idx, row) in sheet.rows.iter().enumerate().skip(base.row) {
        let fields: Vec<String> = row
            .cells
            .iter()
            .skip(base.column)
            .map(|cell| cell.text())
            .take_while(|text| !text.is_empty())
            .collect();

        // An empty row ends the sheet
        if fields.is_empty() {
            debug!(row = row_idx + 1, "empty row, stopping export");
            break;
        }

        writeln!(out, "{}", fields.join(separator))?;
        written += 1;
    }

    out.flush()?;
    Ok(written)
}

/// Read lines from `input` and write them into `sheet` starting at `base`
///
/// `base.row` empty rows are appended before the first line is consumed.
/// Returns the number of lines read.
pub fn lines_to_sheet<R: BufRead>(
    input: R,
    sheet: &mut Sheet,
    base: CellPosition,
    separator: &str,
) -> XlResult<usize> {
    for _ in 0..base.row {
        sheet.add_row();
    }

    let mut row_idx = base.row;
    for line in input.lines() {
        let line = line?;
        let row = sheet.row_mut(row_idx);
        for (i, field) in split_fields(&line, separator).into_iter().enumerate() {
            row.cell_mut(base.column + i).set_value(field);
        }
        row_idx += 1;
    }

    let consumed = row_idx - base.row;
    debug!(lines = consumed, sheet = %sheet.name, "lines imported");
    Ok(consumed)
}

/// Split a line on `separator`; an empty separator yields one field per character
pub fn split_fields<'a>(line: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        return line
            .char_indices()
            .map(|(i, c)| &line[i..i + c.len_utf8()])
            .collect();
    }
    line.split(separator).collect()
}
