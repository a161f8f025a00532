//! Task-pairing resolution.
//!
//! Every weekday column is resolved on its own. A discovery pass walks the
//! rows in order and pairs each worker with the label fragment at the same
//! position. The first vocabulary code matching that fragment seeds a new
//! group, unless the worker was already consumed for that code. A grouping
//! pass then rescans every other row to pull in unconsumed workers whose day
//! cell carries the same code. The rescan makes a day O(rows²), which is
//! fine for a weekly roster of a few dozen rows.

use crate::cell::{ParsedRow, parse_rows, split_sub_labels};
use crate::error::RosterResult;
use crate::grid::{DayColumn, Grid, RosterSchema};
use crate::vocabulary::{TaskCode, Vocabulary};
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// (task code, worker) pairs already placed in a group for one day, keyed by
/// code, then worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumedSet {
    by_code: HashMap<String, HashSet<String>>,
}

impl ConsumedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, code: &str, worker: &str) -> bool {
        self.by_code
            .get(code)
            .is_some_and(|workers| workers.contains(worker))
    }

    /// Returns false when the pair was already consumed.
    pub fn consume(&mut self, code: &str, worker: &str) -> bool {
        if self.contains(code, worker) {
            return false;
        }
        self.by_code
            .entry(code.to_string())
            .or_default()
            .insert(worker.to_string())
    }

    pub fn len(&self) -> usize {
        self.by_code.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Workers sharing one task code on one day, primary first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup {
    pub code: String,
    pub zone: &'static str,
    pub workers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayResolution {
    pub day: DayColumn,
    pub groups: Vec<TaskGroup>,
}

/// Resolves one day's rows, threading the consumed set through and back out.
pub fn resolve_day(
    rows: &[ParsedRow],
    vocabulary: &Vocabulary,
    mut consumed: ConsumedSet,
) -> (Vec<TaskGroup>, ConsumedSet) {
    let mut groups = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        for assignment in row.assignments() {
            let Some(code) = split_sub_labels(assignment.fragment)
                .into_iter()
                .find_map(|label| vocabulary.first_match(label))
            else {
                continue;
            };

            if consumed.contains(code.code(), assignment.worker) {
                continue;
            }

            let mut workers = vec![assignment.worker.to_string()];
            collect_secondaries(
                rows,
                row_idx,
                code,
                assignment.worker,
                &mut consumed,
                &mut workers,
            );
            consumed.consume(code.code(), assignment.worker);

            tracing::debug!(
                code = code.code(),
                workers = workers.len(),
                row = row_idx,
                "grouped task"
            );
            groups.push(TaskGroup {
                code: code.code().to_string(),
                zone: code.zone(),
                workers,
            });
        }
    }

    (groups, consumed)
}

/// Takes at most one worker from each other row: the first one that is not
/// the primary and not yet consumed for `code`, provided any label fragment
/// of that row matches `code`.
fn collect_secondaries(
    rows: &[ParsedRow],
    primary_row: usize,
    code: &TaskCode,
    primary: &str,
    consumed: &mut ConsumedSet,
    workers: &mut Vec<String>,
) {
    for (row_idx, row) in rows.iter().enumerate() {
        if row_idx == primary_row {
            continue;
        }
        if !row.fragments.iter().any(|fragment| code.matches(fragment)) {
            continue;
        }
        let candidate = row.workers.iter().find(|worker| {
            !worker.is_empty() && worker.as_str() != primary && !consumed.contains(code.code(), worker)
        });
        if let Some(worker) = candidate {
            consumed.consume(code.code(), worker);
            workers.push(worker.clone());
        }
    }
}

/// Runs [`resolve_day`] over every weekday column found in a grid.
pub struct Resolver<'a> {
    grid: &'a Grid,
    schema: &'a RosterSchema,
    vocabulary: &'a Vocabulary,
}

impl<'a> Resolver<'a> {
    pub fn new(grid: &'a Grid, schema: &'a RosterSchema, vocabulary: &'a Vocabulary) -> Self {
        Self {
            grid,
            schema,
            vocabulary,
        }
    }

    /// Resolves each day independently. Days run on the rayon pool; results
    /// come back in weekday order.
    pub fn execute(&self) -> RosterResult<Vec<DayResolution>> {
        let worker_cells = self.grid.worker_cells(&self.schema.worker)?;
        self.schema
            .days
            .par_iter()
            .map(|day| self.resolve_column(&worker_cells, *day))
            .collect()
    }

    fn resolve_column(&self, worker_cells: &[String], day: DayColumn) -> RosterResult<DayResolution> {
        let day_cells = self.grid.day_cells(&day)?;
        let rows = parse_rows(worker_cells, &day_cells);
        let (groups, consumed) = resolve_day(&rows, self.vocabulary, ConsumedSet::new());
        tracing::info!(
            day = day.name(),
            groups = groups.len(),
            consumed = consumed.len(),
            "resolved day"
        );
        Ok(DayResolution { day, groups })
    }
}
