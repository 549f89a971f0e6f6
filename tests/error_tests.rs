//! Error handling tests

use xl::error::XlError;
use xl::position::{column_label_to_index, parse_position};

#[test]
fn test_invalid_format_display() {
    let err = parse_position("B").unwrap_err();
    assert_eq!(err.to_string(), "Invalid option: B");
}

#[test]
fn test_invalid_row_display_names_option() {
    let err = parse_position("B,zero").unwrap_err();
    assert!(matches!(err, XlError::InvalidFormat(_)));
    assert!(err.to_string().contains("B,zero"));
}

#[test]
fn test_invalid_column_label_names_character() {
    let err = column_label_to_index("A$").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid column label 'A$': '$' is not an alphabet"
    );
}

#[test]
fn test_sheet_errors_display() {
    assert_eq!(
        XlError::SheetNotFound("Data".to_string()).to_string(),
        "There is no sheet of 'Data'"
    );
    assert_eq!(XlError::NoSheets.to_string(), "Workbook has no sheets");
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let err: XlError = io.into();
    assert!(matches!(err, XlError::Io(_)));
    assert_eq!(err.to_string(), "IO error: pipe closed");
}

#[test]
fn test_open_error_conversion() {
    let err: XlError = xl::excel::WorkbookReader::open("missing.xlsx")
        .err()
        .expect("opening a missing file fails");
    assert!(matches!(err, XlError::Open(_)));
    assert!(err.to_string().starts_with("Failed to open Excel file"));
}
