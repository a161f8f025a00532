use crate::error::{InputReadError, RosterResult};
use crate::grid::Grid;
use std::path::Path;

pub mod json;
pub mod sheet;

pub use json::{SlashEscapingFormatter, save_json, to_json_string, write_json};
pub use sheet::{load_grid_from_csv, load_grid_from_workbook};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads a roster table, choosing the reader from the file extension.
/// `sheet` is ignored for CSV input.
pub fn load_grid<P: AsRef<Path>>(path: P, sheet: &str, header_row: usize) -> RosterResult<Grid> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if extension == "csv" {
        load_grid_from_csv(path, header_row)
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        load_grid_from_workbook(path, sheet, header_row)
    } else {
        Err(InputReadError::UnsupportedFormat(path.display().to_string()).into())
    }
}
