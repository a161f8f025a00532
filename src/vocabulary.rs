use crate::error::RosterResult;
use crate::shift::Shift;
use regex::Regex;

pub const UNKNOWN_ZONE: &str = "Unknown";

/// Codes shared by every shift, in match-precedence order.
const BASE_CODES: [&str; 17] = [
    "T",
    "P",
    "R",
    "U",
    "SECO",
    "TROPICALES-XDOCK",
    "V1-V2 Y1-Y2",
    "V3-V4 Y3-Y4",
    "V5-V9",
    "Y5-Y9",
    "W1-W4 Z1-Z5",
    "N",
    "H",
    "AA-AG",
    "AH-AJ",
    "BA-BG",
    "BH-BJ",
];

/// Only staffed on the night shift.
const NIGHT_ONLY_CODES: [&str; 1] = ["EKONO"];

const ZONES: [(&str, &str); 18] = [
    ("T", "Congelado"),
    ("P", "Congelado"),
    ("R", "Congelado"),
    ("U", "Congelado"),
    ("SECO", "Seco"),
    ("TROPICALES-XDOCK", "Tropicales"),
    ("V1-V2 Y1-Y2", "Panaderia"),
    ("V3-V4 Y3-Y4", "Vegetales"),
    ("V5-V9", "Vegetales"),
    ("Y5-Y9", "Vegetales"),
    ("W1-W4 Z1-Z5", "Vegetales"),
    ("N", "Carnes"),
    ("H", "Carnes"),
    ("AA-AG", "Fiambreria"),
    ("AH-AJ", "Fiambreria"),
    ("BA-BG", "Fiambreria"),
    ("BH-BJ", "Fiambreria"),
    ("EKONO", "Ekono"),
];

/// Zone for a task code, or [`UNKNOWN_ZONE`] when the code is not mapped.
pub fn zone_for(code: &str) -> &'static str {
    ZONES
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, zone)| *zone)
        .unwrap_or(UNKNOWN_ZONE)
}

/// A vocabulary entry with its whole-word matcher.
#[derive(Debug, Clone)]
pub struct TaskCode {
    code: String,
    pattern: Regex,
}

impl TaskCode {
    pub fn new(code: impl Into<String>) -> RosterResult<Self> {
        let code = code.into();
        let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(&code)))?;
        Ok(Self { code, pattern })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn zone(&self) -> &'static str {
        zone_for(&self.code)
    }

    /// True when the code appears in `label` as a delimited token.
    pub fn matches(&self, label: &str) -> bool {
        self.pattern.is_match(label)
    }
}

/// Ordered task vocabulary. Order matters: the first code that matches a
/// label wins.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    codes: Vec<TaskCode>,
}

impl Vocabulary {
    pub fn for_shift(shift: Shift) -> RosterResult<Self> {
        let extra: &[&str] = match shift {
            Shift::Night => &NIGHT_ONLY_CODES,
            Shift::Afternoon | Shift::Morning => &[],
        };
        Self::from_codes(BASE_CODES.iter().chain(extra.iter()).copied())
    }

    pub fn from_codes<I, S>(codes: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes
            .into_iter()
            .map(TaskCode::new)
            .collect::<RosterResult<Vec<_>>>()?;
        Ok(Self { codes })
    }

    pub fn codes(&self) -> &[TaskCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// First code, in vocabulary order, that matches `label`.
    pub fn first_match(&self, label: &str) -> Option<&TaskCode> {
        self.codes.iter().find(|code| code.matches(label))
    }
}
