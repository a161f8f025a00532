use crate::error::RosterError;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    #[serde(rename = "noche")]
    Night,
    #[serde(rename = "tarde")]
    Afternoon,
    #[serde(rename = "mañana")]
    Morning,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Night, Shift::Afternoon, Shift::Morning];

    /// Lowercase name used on the command line and in output file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Night => "noche",
            Shift::Afternoon => "tarde",
            Shift::Morning => "mañana",
        }
    }

    /// Capitalized label written into the `Turno` field.
    pub fn label(&self) -> &'static str {
        match self {
            Shift::Night => "Noche",
            Shift::Afternoon => "Tarde",
            Shift::Morning => "Mañana",
        }
    }

    pub fn default_input_file(&self) -> &'static str {
        match self {
            Shift::Night => "turnonoche.xlsx",
            Shift::Afternoon => "turnotarde.xlsx",
            Shift::Morning => "turnomanana.xlsx",
        }
    }

    pub fn default_sheet_name(&self) -> &'static str {
        self.as_str()
    }

    pub fn default_output_file(&self) -> String {
        format!("resultados_{}.json", self.as_str())
    }

    pub fn times(&self) -> ShiftTimes {
        match self {
            Shift::Night => ShiftTimes::from_hm((22, 0), (2, 45), (3, 15), (6, 5)),
            Shift::Afternoon => ShiftTimes::from_hm((14, 10), (18, 40), (19, 10), (21, 55)),
            Shift::Morning => ShiftTimes::from_hm((6, 40), (10, 30), (11, 0), (14, 10)),
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Shift::ALL
            .into_iter()
            .find(|shift| shift.as_str() == lowered)
            .ok_or_else(|| RosterError::InvalidShift(s.to_string()))
    }
}

/// Start, break start, break end and end of a shift. The night shift wraps
/// past midnight, so the times are never compared, only printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftTimes {
    pub start: NaiveTime,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
    pub end: NaiveTime,
}

impl ShiftTimes {
    const FORMAT: &'static str = "%H:%M";

    fn from_hm(start: (u32, u32), break_start: (u32, u32), break_end: (u32, u32), end: (u32, u32)) -> Self {
        let at = |(h, m): (u32, u32)| NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN);
        Self {
            start: at(start),
            break_start: at(break_start),
            break_end: at(break_end),
            end: at(end),
        }
    }

    pub fn formatted(&self) -> [String; 4] {
        [self.start, self.break_start, self.break_end, self.end]
            .map(|time| time.format(Self::FORMAT).to_string())
    }
}
