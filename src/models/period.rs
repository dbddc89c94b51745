//! Budget period representation
//!
//! A period is a calendar year+month pair ("2025-01"). Budgets are scoped to
//! a period, and an expense affects the budget whose period contains its date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month identifying which budget a transaction affects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    /// Create a period; month must be 1-12
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The period containing today's date
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    /// The period containing the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// First day of this period
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(self.year, 1, 1).unwrap())
    }

    /// Last day of this period (inclusive)
    pub fn end_date(&self) -> NaiveDate {
        self.next().start_date() - Duration::days(1)
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// The following month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a period string in "YYYY-MM" format
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let (year_str, month_str) = s
            .split_once('-')
            .ok_or_else(|| PeriodParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year_str
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_str
            .parse()
            .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::InvalidMonth(month));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_dates() {
        let jan = Period::new(2025, 1);
        assert_eq!(jan.start_date(), NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(jan.end_date(), NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn test_navigation() {
        let jan = Period::new(2025, 1);
        assert_eq!(jan.next(), Period::new(2025, 2));
        assert_eq!(jan.prev(), Period::new(2024, 12));

        let dec = Period::new(2024, 12);
        assert_eq!(dec.next(), Period::new(2025, 1));
    }

    #[test]
    fn test_contains() {
        let jan = Period::new(2025, 1);
        assert!(jan.contains(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()));
        assert!(!jan.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        assert_eq!(Period::from_date(date), Period::new(2025, 3));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Period::parse("2025-01").unwrap(), Period::new(2025, 1));
        assert_eq!(Period::parse("2025-12").unwrap(), Period::new(2025, 12));
        assert_eq!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert!(Period::parse("garbage").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Period::new(2025, 1)), "2025-01");
        assert_eq!(format!("{}", Period::new(2025, 11)), "2025-11");
    }

    #[test]
    fn test_ordering() {
        assert!(Period::new(2024, 12) < Period::new(2025, 1));
        assert!(Period::new(2025, 2) > Period::new(2025, 1));
    }

    #[test]
    fn test_serialization() {
        let period = Period::new(2025, 1);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
