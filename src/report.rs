use crate::calendar::WorkWeek;
use crate::roster::RosterEntry;
use crate::vocabulary::Vocabulary;

/// Orders entries by weekday, then zone name. The sort is stable, so entries
/// in the same day and zone keep resolution order.
pub fn sort_entries(entries: &mut [RosterEntry]) {
    entries.sort_by(|a, b| {
        WorkWeek::rank(&a.day)
            .cmp(&WorkWeek::rank(&b.day))
            .then_with(|| a.zone.cmp(&b.zone))
    });
}

/// Per-day counts for the console summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: String,
    pub entry_count: usize,
    /// Vocabulary codes nobody was assigned to that day.
    pub pending_codes: Vec<String>,
}

impl DaySummary {
    pub fn to_cli_summary(&self) -> String {
        let mut out = format!("{}: {} asignaciones", self.day, self.entry_count);
        if !self.pending_codes.is_empty() {
            out.push_str(&format!(" | pendientes: {}", self.pending_codes.join(", ")));
        }
        out
    }
}

pub fn summarize<'a, I>(days: I, entries: &[RosterEntry], vocabulary: &Vocabulary) -> Vec<DaySummary>
where
    I: IntoIterator<Item = &'a str>,
{
    days.into_iter()
        .map(|day| {
            let day_entries: Vec<&RosterEntry> =
                entries.iter().filter(|entry| entry.day == day).collect();
            let pending_codes = vocabulary
                .codes()
                .iter()
                .map(|code| code.code())
                .filter(|code| !day_entries.iter().any(|entry| entry.task_code == *code))
                .map(str::to_string)
                .collect();
            DaySummary {
                day: day.to_string(),
                entry_count: day_entries.len(),
                pending_codes,
            }
        })
        .collect()
}
