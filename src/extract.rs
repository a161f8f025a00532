use crate::calendar::WorkWeek;
use crate::config::RunConfig;
use crate::error::{RosterError, RosterResult};
use crate::grid::Grid;
use crate::persistence::{load_grid, save_json};
use crate::report::{DaySummary, sort_entries, summarize};
use crate::resolver::Resolver;
use crate::roster::RosterEntry;
use crate::shift::Shift;
use crate::vocabulary::Vocabulary;

/// Sorted roster entries plus the per-day summary for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub entries: Vec<RosterEntry>,
    pub summaries: Vec<DaySummary>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves every weekday column of `grid` for `shift`.
pub fn extract_roster(grid: &Grid, shift: Shift) -> RosterResult<Extraction> {
    extract_days(grid, shift, WorkWeek::column_names())
}

/// Resolves the named day columns. Names that are not present (or are not
/// weekdays) are logged and skipped.
pub fn extract_days<'a, I>(grid: &Grid, shift: Shift, day_names: I) -> RosterResult<Extraction>
where
    I: IntoIterator<Item = &'a str>,
{
    let vocabulary = Vocabulary::for_shift(shift)?;
    let schema = grid.resolve_schema_for(day_names)?;
    for day in &schema.missing_days {
        tracing::warn!(day = day.as_str(), "day column not found, skipping");
    }

    let resolutions = Resolver::new(grid, &schema, &vocabulary).execute()?;
    let mut entries: Vec<RosterEntry> = resolutions
        .iter()
        .flat_map(|resolution| {
            resolution
                .groups
                .iter()
                .map(move |group| RosterEntry::build(resolution.day.name(), shift, group))
        })
        .collect();
    sort_entries(&mut entries);

    let summaries = summarize(schema.days.iter().map(|day| day.name()), &entries, &vocabulary);
    Ok(Extraction { entries, summaries })
}

/// Loads the configured input and extracts its roster. An unreadable input
/// or a table without a worker column is logged and yields an empty result.
pub fn process_workbook(config: &RunConfig) -> RosterResult<Extraction> {
    let grid = match load_grid(&config.input, &config.sheet, config.header_row) {
        Ok(grid) => grid,
        Err(RosterError::Read(err)) => {
            tracing::error!(input = %config.input.display(), error = %err, "failed to read roster");
            return Ok(Extraction::default());
        }
        Err(other) => return Err(other),
    };
    tracing::info!(
        input = %config.input.display(),
        rows = grid.height(),
        "loaded roster grid"
    );

    match extract_roster(&grid, config.shift) {
        Err(RosterError::MissingColumn { column }) => {
            tracing::error!(column = column.as_str(), "worker column not found");
            Ok(Extraction::default())
        }
        other => other,
    }
}

/// Writes the sorted entries to `config.output`. Summaries stay on the console.
pub fn write_extraction(config: &RunConfig, extraction: &Extraction) -> RosterResult<()> {
    save_json(&config.output, &extraction.entries)
}
