use chrono::NaiveDate;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Number of bands on the vertical axis.
pub const MONTHS_PER_YEAR: u32 = 12;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A calendar month stored as a zero-based index (January = 0).
///
/// The heat map works with zero-based months throughout: they key the vertical
/// band scale and end up verbatim in the `data-month` attribute of each cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Month(pub u32);
impl Month {
    /// Builds a month from the 1-based number used in the dataset.
    pub fn from_calendar(month: u32) -> Self {
        Self(month.saturating_sub(1))
    }

    pub fn index(self) -> u32 {
        self.0
    }

    /// All twelve months, January first.
    pub fn all() -> impl Iterator<Item = Month> {
        (0..MONTHS_PER_YEAR).map(Month)
    }

    /// Full English month name ("January", ...).
    ///
    /// Indices past December roll over into the following year, so 12 is
    /// January again.
    pub fn name(self) -> String {
        let wrapped = self.0 % MONTHS_PER_YEAR;
        NaiveDate::from_ymd_opt(1900, wrapped + 1, 1)
            .map(|date| date.format("%B").to_string())
            .unwrap_or_default()
    }
}

impl Display for Month {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
