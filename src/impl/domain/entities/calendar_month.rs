use std::str::FromStr;

use chrono::{Datelike, Local};
use regex::Regex;

use crate::errors::TimelineError;

/// A year and 1-based month. Ordering is lexicographic on `(year, month)`,
/// which the field order below gives us through the derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// Years are limited to what the four-digit `YYYY-MM` form can carry.
    pub const MIN_YEAR: i32 = 0;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: i64) -> Result<Self, TimelineError> {
        if !(1..=12).contains(&month) {
            return Err(TimelineError::InvalidMonth { month });
        }
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(TimelineError::InvalidYear {
                year: i64::from(year),
            });
        }
        Ok(Self {
            year,
            month: month as u32,
        })
    }

    /// Dates outside the supported years snap to the first or last
    /// representable month.
    pub fn from_date(date: &impl Datelike) -> Self {
        if date.year() < Self::MIN_YEAR {
            Self {
                year: Self::MIN_YEAR,
                month: 1,
            }
        } else if date.year() > Self::MAX_YEAR {
            Self {
                year: Self::MAX_YEAR,
                month: 12,
            }
        } else {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }
    }

    /// Month of the invocation-time local date.
    pub fn current() -> Self {
        Self::from_date(&Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

// --

impl FromStr for CalendarMonth {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pattern = Regex::new(r"^(\d{4})-(\d{2})$").expect("hardcoded regex should be valid");
        let invalid = || TimelineError::InvalidFormat { value: s.into() };
        let caps = pattern.captures(s).ok_or_else(invalid)?;
        let year = caps[1].parse::<i32>().map_err(|_| invalid())?;
        let month = caps[2].parse::<i64>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl std::fmt::Display for CalendarMonth {
    /// Canonical `YYYY-MM` form, the exact partner of `from_str`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
