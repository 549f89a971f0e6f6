use thiserror::Error;

pub type XlResult<T> = Result<T, XlError>;

#[derive(Error, Debug)]
pub enum XlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid option: {0}")]
    InvalidFormat(String),

    #[error("Invalid column label '{label}': '{ch}' is not an alphabet")]
    InvalidColumnLabel { label: String, ch: char },

    #[error("Column label '{0}' is out of range")]
    ColumnOverflow(String),

    #[error("There is no sheet of '{0}'")]
    SheetNotFound(String),

    #[error("Workbook has no sheets")]
    NoSheets,

    #[error("Failed to open Excel file: {0}")]
    Open(#[from] calamine::XlsxError),

    #[error("Failed to save Excel file: {0}")]
    Save(#[from] rust_xlsxwriter::XlsxError),
}
