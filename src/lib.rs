//! xl - Row oriented Excel operation tool
//!
//! Converts between the rows of an .xlsx sheet and separator-joined text
//! lines, starting from an optional base cell.
//!
//! # Example
//!
//! ```no_run
//! use xl::cli::spreadsheet_to_lines;
//! use xl::position::parse_position;
//! use xl::types::TransposeOptions;
//! use std::path::Path;
//!
//! let options = TransposeOptions {
//!     separator: ",".to_string(),
//!     sheet: String::new(),
//!     base: parse_position("B,2")?,
//! };
//!
//! let mut out = std::io::stdout();
//! let lines = spreadsheet_to_lines(Path::new("report.xlsx"), &options, &mut out)?;
//! eprintln!("{lines} rows");
//! # Ok::<(), xl::error::XlError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod position;
pub mod transpose;
pub mod types;

// Re-export commonly used types
pub use error::{XlError, XlResult};
pub use position::CellPosition;
pub use types::{Cell, CellValue, Row, Sheet, TransposeOptions, Workbook};
