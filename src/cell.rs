//! Splitting of normalized grid cells into worker names and task labels.

const LIST_SEPARATOR: char = '/';
const SUB_LABEL_SEPARATOR: &str = " / ";

/// Splits a cell on `/` into trimmed tokens, keeping order and empty slots.
pub fn split_cell(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(|token| token.trim().to_string())
        .collect()
}

/// Splits a label fragment on `" / "` into independently matchable labels.
pub fn split_sub_labels(fragment: &str) -> Vec<&str> {
    fragment.split(SUB_LABEL_SEPARATOR).map(str::trim).collect()
}

/// One grid row for one day: the workers and the day's label fragments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRow {
    pub workers: Vec<String>,
    pub fragments: Vec<String>,
}

/// A worker paired with the label fragment at the same position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerAssignment<'a> {
    pub position: usize,
    pub worker: &'a str,
    pub fragment: &'a str,
}

impl ParsedRow {
    pub fn parse(worker_cell: &str, day_cell: &str) -> Self {
        Self {
            workers: split_cell(worker_cell),
            fragments: split_cell(day_cell),
        }
    }

    /// Positional pairing: the i-th worker takes the i-th fragment. Workers
    /// past the last fragment are left out, as are blank worker slots.
    pub fn assignments(&self) -> impl Iterator<Item = WorkerAssignment<'_>> {
        self.workers
            .iter()
            .zip(self.fragments.iter())
            .enumerate()
            .filter(|(_, (worker, _))| !worker.is_empty())
            .map(|(position, (worker, fragment))| WorkerAssignment {
                position,
                worker: worker.as_str(),
                fragment: fragment.as_str(),
            })
    }
}

/// Parses every row of a day from the worker and day columns.
pub fn parse_rows(worker_cells: &[String], day_cells: &[String]) -> Vec<ParsedRow> {
    worker_cells
        .iter()
        .zip(day_cells.iter())
        .map(|(workers, labels)| ParsedRow::parse(workers, labels))
        .collect()
}
