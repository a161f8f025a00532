use crate::calendar::WorkWeek;
use crate::error::{RosterError, RosterResult};
use crate::text::normalize;
use polars::prelude::*;
use std::collections::HashSet;

/// Substring (case-insensitive) that identifies the worker column.
pub const WORKER_COLUMN_HINT: &str = "apilador";

/// Immutable roster table: one nullable string column per header.
#[derive(Debug, Clone)]
pub struct Grid {
    df: DataFrame,
}

/// Handle to the column listing the workers of each row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerColumn {
    name: String,
}

impl WorkerColumn {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Handle to a weekday column holding the task labels for that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayColumn {
    name: &'static str,
}

impl DayColumn {
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Result of matching the grid's headers against the expected layout.
#[derive(Debug, Clone)]
pub struct RosterSchema {
    pub worker: WorkerColumn,
    pub days: Vec<DayColumn>,
    pub missing_days: Vec<String>,
}

impl Grid {
    /// Builds a grid from a header row and data rows. Header names are
    /// trimmed; blanks become `Unnamed: <idx>` and repeats get a `.N` suffix.
    /// Short rows are padded with empty cells, long rows truncated.
    pub fn from_rows<H, S>(headers: H, rows: Vec<Vec<Option<String>>>) -> RosterResult<Self>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = Self::mangle_headers(headers);
        let mut columns: Vec<Column> = Vec::with_capacity(names.len());
        for (col_idx, name) in names.iter().enumerate() {
            let values: Vec<Option<String>> = rows
                .iter()
                .map(|row| row.get(col_idx).cloned().flatten())
                .collect();
            columns.push(Series::new(name.as_str().into(), values).into_column());
        }
        let df = DataFrame::new(columns)?;
        Ok(Self { df })
    }

    fn mangle_headers<H, S>(headers: H) -> Vec<String>
    where
        H: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: HashSet<String> = HashSet::new();
        let mut names = Vec::new();
        for (idx, raw) in headers.into_iter().enumerate() {
            let trimmed = raw.as_ref().trim();
            let base = if trimmed.is_empty() {
                format!("Unnamed: {idx}")
            } else {
                trimmed.to_string()
            };
            let mut name = base.clone();
            let mut suffix = 1;
            while !seen.insert(name.clone()) {
                name = format!("{base}.{suffix}");
                suffix += 1;
            }
            names.push(name);
        }
        names
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Locates the worker column and every weekday column present.
    pub fn resolve_schema(&self) -> RosterResult<RosterSchema> {
        self.resolve_schema_for(WorkWeek::column_names())
    }

    /// Like [`Grid::resolve_schema`], restricted to the named day columns.
    /// Names that are not weekdays, or are absent from the grid, end up in
    /// `missing_days`.
    pub fn resolve_schema_for<'a, I>(&self, day_names: I) -> RosterResult<RosterSchema>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let worker = self
            .column_names()
            .into_iter()
            .find(|name| name.to_lowercase().contains(WORKER_COLUMN_HINT))
            .map(|name| WorkerColumn { name })
            .ok_or_else(|| RosterError::MissingColumn {
                column: WORKER_COLUMN_HINT.to_string(),
            })?;

        let mut days = Vec::new();
        let mut missing_days = Vec::new();
        for day_name in day_names {
            match self.day_column(day_name) {
                Ok(day) => days.push(day),
                Err(_) => missing_days.push(day_name.to_string()),
            }
        }

        Ok(RosterSchema {
            worker,
            days,
            missing_days,
        })
    }

    /// Looks up a single weekday column by name.
    pub fn day_column(&self, name: &str) -> RosterResult<DayColumn> {
        let missing = || RosterError::MissingColumn {
            column: name.to_string(),
        };
        let day_name = WorkWeek::column_names()
            .find(|candidate| *candidate == name)
            .ok_or_else(missing)?;
        if self.df.column(day_name).is_err() {
            return Err(missing());
        }
        Ok(DayColumn { name: day_name })
    }

    pub fn worker_cells(&self, column: &WorkerColumn) -> RosterResult<Vec<String>> {
        self.normalized_column(column.name())
    }

    pub fn day_cells(&self, column: &DayColumn) -> RosterResult<Vec<String>> {
        self.normalized_column(column.name())
    }

    fn normalized_column(&self, name: &str) -> RosterResult<Vec<String>> {
        let column = self.df.column(name).map_err(|_| RosterError::MissingColumn {
            column: name.to_string(),
        })?;
        Ok(column.str()?.into_iter().map(normalize).collect())
    }
}
