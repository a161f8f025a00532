use crate::error::{RosterError, RosterResult};
use crate::shift::Shift;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Zero-based row holding the column headers; the row above is a title.
pub const DEFAULT_HEADER_ROW: usize = 1;

/// Everything one extraction run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub shift: Shift,
    pub input: PathBuf,
    pub sheet: String,
    pub header_row: usize,
    pub output: PathBuf,
}

/// Optional overrides, read from a JSON file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunOverrides {
    pub input: Option<PathBuf>,
    pub sheet: Option<String>,
    pub header_row: Option<usize>,
    pub output: Option<PathBuf>,
}

impl RunOverrides {
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| {
            RosterError::Config(format!("cannot open {}: {err}", path.display()))
        })?;
        serde_json::from_reader(file)
            .map_err(|err| RosterError::Config(format!("{}: {err}", path.display())))
    }

    /// Fields set in `other` win over fields set here.
    pub fn merge(self, other: RunOverrides) -> Self {
        Self {
            input: other.input.or(self.input),
            sheet: other.sheet.or(self.sheet),
            header_row: other.header_row.or(self.header_row),
            output: other.output.or(self.output),
        }
    }
}

impl RunConfig {
    pub fn for_shift(shift: Shift) -> Self {
        Self {
            shift,
            input: PathBuf::from(shift.default_input_file()),
            sheet: shift.default_sheet_name().to_string(),
            header_row: DEFAULT_HEADER_ROW,
            output: PathBuf::from(shift.default_output_file()),
        }
    }

    pub fn with_overrides(mut self, overrides: RunOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(sheet) = overrides.sheet {
            self.sheet = sheet;
        }
        if let Some(header_row) = overrides.header_row {
            self.header_row = header_row;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        self
    }
}
