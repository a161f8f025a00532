use crate::resolver::TaskGroup;
use crate::shift::Shift;
use crate::text::title_case;
use serde::{Deserialize, Serialize};

/// Separator between worker names inside `Apilador`. The JSON writer emits
/// the slash as `\/`.
pub const WORKER_SEPARATOR: &str = " / ";

/// One output record: who works which task, where, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "Día")]
    pub day: String,
    #[serde(rename = "Turno")]
    pub shift: String,
    #[serde(rename = "Camara")]
    pub zone: String,
    #[serde(rename = "Apilador")]
    pub workers: String,
    #[serde(rename = "Hora Inicio")]
    pub start_time: String,
    #[serde(rename = "Hora break inicio")]
    pub break_start_time: String,
    #[serde(rename = "Hora fin break")]
    pub break_end_time: String,
    #[serde(rename = "Hora fin")]
    pub end_time: String,
    #[serde(rename = "Pasillo")]
    pub task_code: String,
}

impl RosterEntry {
    pub fn build(day: &str, shift: Shift, group: &TaskGroup) -> Self {
        let [start_time, break_start_time, break_end_time, end_time] = shift.times().formatted();
        Self {
            day: day.to_string(),
            shift: shift.label().to_string(),
            zone: group.zone.to_string(),
            workers: join_workers(&group.workers),
            start_time,
            break_start_time,
            break_end_time,
            end_time,
            task_code: group.code.clone(),
        }
    }

    /// Individual worker names, as written in `Apilador`.
    pub fn worker_names(&self) -> impl Iterator<Item = &str> {
        self.workers.split(WORKER_SEPARATOR)
    }
}

pub fn join_workers<S: AsRef<str>>(workers: &[S]) -> String {
    workers
        .iter()
        .map(|worker| title_case(worker.as_ref()))
        .collect::<Vec<_>>()
        .join(WORKER_SEPARATOR)
}
