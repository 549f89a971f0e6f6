//! Excel file access for the workbook model
//!
//! - Read: .xlsx → [`Workbook`](crate::types::Workbook) via calamine
//! - Write: [`Workbook`](crate::types::Workbook) → .xlsx via rust_xlsxwriter

mod reader;
mod writer;

pub use reader::WorkbookReader;
pub use writer::WorkbookWriter;
