pub mod calendar;
pub mod cell;
pub mod config;
pub mod error;
pub mod extract;
pub mod grid;
pub mod persistence;
pub mod report;
pub mod resolver;
pub mod roster;
pub mod shift;
pub mod text;
pub mod vocabulary;

pub use calendar::WorkWeek;
pub use config::{RunConfig, RunOverrides};
pub use error::{InputReadError, RosterError, RosterResult};
pub use extract::{Extraction, extract_days, extract_roster, process_workbook, write_extraction};
pub use grid::{DayColumn, Grid, RosterSchema, WorkerColumn};
pub use persistence::{load_grid, save_json, to_json_string};
pub use report::{DaySummary, sort_entries, summarize};
pub use resolver::{ConsumedSet, DayResolution, Resolver, TaskGroup, resolve_day};
pub use roster::RosterEntry;
pub use shift::{Shift, ShiftTimes};
pub use vocabulary::{TaskCode, Vocabulary, zone_for};
