use chrono::Weekday;

/// The six roster days, as they appear in the spreadsheet header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkWeek;

impl WorkWeek {
    pub const DAYS: [(Weekday, &'static str); 6] = [
        (Weekday::Mon, "LUNES"),
        (Weekday::Tue, "MARTES"),
        (Weekday::Wed, "MIÉRCOLES"),
        (Weekday::Thu, "JUEVES"),
        (Weekday::Fri, "VIERNES"),
        (Weekday::Sat, "SÁBADO"),
    ];

    /// Rank used for ordering output; anything outside the week sorts last.
    pub const UNRANKED: u8 = 7;

    pub fn column_names() -> impl Iterator<Item = &'static str> {
        Self::DAYS.iter().map(|(_, name)| *name)
    }

    pub fn weekday(column: &str) -> Option<Weekday> {
        Self::DAYS
            .iter()
            .find(|(_, name)| *name == column)
            .map(|(day, _)| *day)
    }

    /// LUNES=1 … SÁBADO=6, anything else 7.
    pub fn rank(column: &str) -> u8 {
        Self::weekday(column)
            .map(|day| day.number_from_monday() as u8)
            .unwrap_or(Self::UNRANKED)
    }
}
