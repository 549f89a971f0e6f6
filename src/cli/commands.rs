use crate::error::{XlError, XlResult};
use crate::excel::{WorkbookReader, WorkbookWriter};
use crate::transpose::{lines_to_sheet, sheet_to_lines};
use crate::types::{TransposeOptions, Workbook, DEFAULT_SHEET_NAME};
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Execute export mode: sheet of `input` → stdout
pub fn export(input: PathBuf, options: TransposeOptions) -> XlResult<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match spreadsheet_to_lines(&input, &options, &mut out) {
        Ok(lines) => {
            info!(lines, input = %input.display(), "export complete");
            Ok(())
        }
        // Downstream closed the pipe (e.g. `xl -in f.xlsx | head`)
        Err(XlError::Io(e)) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Execute import mode: stdin → sheet of `output`
pub fn import(output: PathBuf, options: TransposeOptions) -> XlResult<()> {
    let stdin = io::stdin();
    let lines = lines_to_spreadsheet(&output, &options, stdin.lock())?;
    info!(lines, output = %output.display(), "import complete");
    Ok(())
}

/// Write the selected sheet of the workbook at `path` to `out` as lines
///
/// Returns the number of lines written.
pub fn spreadsheet_to_lines<W: Write>(
    path: &Path,
    options: &TransposeOptions,
    out: &mut W,
) -> XlResult<usize> {
    let mut reader = WorkbookReader::open(path)?;
    let sheet = reader.read_selected(&options.sheet)?;

    debug!(
        path = %reader.path().display(),
        sheet = %sheet.name,
        base = %options.base,
        "exporting sheet"
    );

    sheet_to_lines(&sheet, options.base, &options.separator, out)
}

/// Read lines from `input` into the selected sheet of the workbook at `path`
///
/// The workbook is created when `path` does not exist, and is always saved
/// back to `path`. Returns the number of lines read.
pub fn lines_to_spreadsheet<R: BufRead>(
    path: &Path,
    options: &TransposeOptions,
    input: R,
) -> XlResult<usize> {
    let (mut workbook, sheet_name) = open_or_create(path, &options.sheet)?;
    let sheet = workbook.select_sheet_mut(sheet_name)?;

    debug!(
        path = %path.display(),
        sheet = %sheet.name,
        base = %options.base,
        "importing lines"
    );

    let lines = lines_to_sheet(input, sheet, options.base, &options.separator)?;

    WorkbookWriter::new(&workbook).save(path)?;
    Ok(lines)
}

/// Load the workbook at `path`, or start a single-sheet workbook if there is none
///
/// Also returns the sheet name to select in it; a fresh workbook only has its
/// own sheet, so the requested name does not apply there.
fn open_or_create<'a>(path: &Path, sheet: &'a str) -> XlResult<(Workbook, &'a str)> {
    if path.exists() {
        let workbook = WorkbookReader::open(path)?.read_all()?;
        return Ok((workbook, sheet));
    }

    if !sheet.is_empty() {
        warn!(
            requested = sheet,
            created = DEFAULT_SHEET_NAME,
            "new workbook, requested sheet name is not used"
        );
    }
    let mut workbook = Workbook::new();
    workbook.add_sheet(DEFAULT_SHEET_NAME);
    Ok((workbook, ""))
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
