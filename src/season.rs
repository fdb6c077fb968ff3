//! Season classification.
//!
//! The calendar is split into two alternating periods whose boundaries float
//! with the weekday of the 1st:
//! - Winter runs from the first Sunday in April up to the first Sunday in October.
//! - Summer runs from the first Sunday in October up to the first Sunday in
//!   April of the following year, so January to March belong to the Summer
//!   that started the previous October.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SeasonType {
    Winter,
    Summer,
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeasonType::Winter => write!(f, "Winter"),
            SeasonType::Summer => write!(f, "Summer"),
        }
    }
}

/// The season a round date falls into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Season {
    pub season_type: SeasonType,
    /// e.g. "Winter 2025" or "Summer 2025-26"
    pub label: String,
    /// First day of the period.
    pub start: NaiveDate,
}

/// First Sunday on or after the 1st of `month` in `year`.
pub fn first_sunday(year: i32, month: u32) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_until_sunday = (7 - first.weekday().num_days_from_sunday()) % 7;
    Some(first + Duration::days(i64::from(days_until_sunday)))
}

pub fn april_start(year: i32) -> Option<NaiveDate> {
    first_sunday(year, 4)
}

pub fn october_start(year: i32) -> Option<NaiveDate> {
    first_sunday(year, 10)
}

impl Season {
    /// Classify a calendar date. Returns `None` only for dates at the very
    /// edge of chrono's representable range.
    pub fn for_date(date: NaiveDate) -> Option<Season> {
        let year = date.year();
        let oct_start = october_start(year)?;
        if date >= oct_start {
            return Some(Season::summer(year, oct_start));
        }

        let apr_start = april_start(year)?;
        if date >= apr_start {
            return Some(Season {
                season_type: SeasonType::Winter,
                label: format!("Winter {}", year),
                start: apr_start,
            });
        }

        Some(Season::summer(year - 1, october_start(year - 1)?))
    }

    fn summer(first_year: i32, start: NaiveDate) -> Season {
        Season {
            season_type: SeasonType::Summer,
            label: format!("Summer {}-{:02}", first_year, (first_year + 1).rem_euclid(100)),
            start,
        }
    }
}
