use crate::error::{InputReadError, RosterResult};
use crate::grid::Grid;
use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

/// Raw table as read from disk: rows of optional cell text, from A1.
type RawTable = Vec<Vec<Option<String>>>;

pub fn load_grid_from_workbook<P: AsRef<Path>>(
    path: P,
    sheet: &str,
    header_row: usize,
) -> RosterResult<Grid> {
    let table = read_workbook_table(path.as_ref(), sheet)?;
    grid_from_table(table, header_row)
}

pub fn load_grid_from_csv<P: AsRef<Path>>(path: P, header_row: usize) -> RosterResult<Grid> {
    let table = read_csv_table(path.as_ref())?;
    grid_from_table(table, header_row)
}

fn read_workbook_table(path: &Path, sheet: &str) -> Result<RawTable, InputReadError> {
    let mut workbook = open_workbook_auto(path)?;
    if !workbook.sheet_names().iter().any(|name| name == sheet) {
        return Err(InputReadError::SheetNotFound(sheet.to_string()));
    }
    let range = workbook.worksheet_range(sheet)?;

    // The range starts at the first used cell; pad back out to A1 so the
    // header offset counts from the top of the sheet.
    let (start_row, start_col) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut table: RawTable = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells: Vec<Option<String>> = vec![None; start_col];
        cells.extend(row.iter().map(cell_text));
        table.push(cells);
    }
    Ok(table)
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn read_csv_table(path: &Path) -> Result<RawTable, InputReadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut table = Vec::new();
    for record in reader.records() {
        let record = record?;
        table.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        None
                    } else {
                        Some(field.to_string())
                    }
                })
                .collect(),
        );
    }
    Ok(table)
}

/// Uses row `header_row` as column names and everything below it as data.
fn grid_from_table(mut table: RawTable, header_row: usize) -> RosterResult<Grid> {
    if header_row >= table.len() {
        return Err(InputReadError::HeaderOutOfRange {
            header_row,
            rows: table.len(),
        }
        .into());
    }
    let rows = table.split_off(header_row + 1);
    let headers: Vec<String> = table
        .pop()
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect();
    Grid::from_rows(headers, rows)
}
