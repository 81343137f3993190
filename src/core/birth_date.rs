use chrono::{Datelike, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Oldest accepted birth year, counted back from the current year.
pub const DEFAULT_MAX_AGE_YEARS: u32 = 150;

/// A birth date that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BirthDate {
    pub month: u32,
    pub day: u32,
    pub year: i32,
}

impl BirthDate {
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.month, self.day, self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthDateError {
    #[error("'{0}' is not a month-day-year date")]
    Unparseable(String),

    #[error("year {year} is outside {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("month {0} does not exist")]
    InvalidMonth(i32),

    #[error("day {day} does not exist in {month:02}-{year}")]
    InvalidDay { month: u32, day: i32, year: i32 },

    #[error("{0} is in the future")]
    InFuture(BirthDate),
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Validates an `MM-DD-YYYY` birth date against `today`.
///
/// The literal pattern is checked earlier by the field rules; this only
/// parses the three numbers and checks them against the calendar. Years older
/// than [`DEFAULT_MAX_AGE_YEARS`] and dates after `today` are rejected.
pub fn check_birth_date(text: &str, today: NaiveDate) -> Result<BirthDate, BirthDateError> {
    check_birth_date_within(text, today, DEFAULT_MAX_AGE_YEARS)
}

/// Same as [`check_birth_date`] with a configurable age window.
pub fn check_birth_date_within(
    text: &str,
    today: NaiveDate,
    max_age_years: u32,
) -> Result<BirthDate, BirthDateError> {
    let unparseable = || BirthDateError::Unparseable(text.to_string());

    let parts: Vec<&str> = text.split('-').collect();
    let [month, day, year] = parts.as_slice() else {
        return Err(unparseable());
    };
    let month: i32 = month.parse().map_err(|_| unparseable())?;
    let day: i32 = day.parse().map_err(|_| unparseable())?;
    let year: i32 = year.parse().map_err(|_| unparseable())?;

    let current_year = today.year();
    // 過大的年限會一路飽和到 i32::MIN
    let window = i32::try_from(max_age_years).unwrap_or(i32::MAX);
    let min_year = current_year.saturating_sub(window);
    if year > current_year || year < min_year {
        return Err(BirthDateError::YearOutOfRange {
            year,
            min: min_year,
            max: current_year,
        });
    }

    if !(1..=12).contains(&month) {
        return Err(BirthDateError::InvalidMonth(month));
    }
    let month = month as u32;

    let max_day = days_in_month(month, year) as i32;
    if day < 1 || day > max_day {
        return Err(BirthDateError::InvalidDay { month, day, year });
    }

    let birth_date = BirthDate {
        month,
        day: day as u32,
        year,
    };
    let date = birth_date
        .to_naive_date()
        .ok_or(BirthDateError::InvalidDay { month, day, year })?;
    if date > today {
        return Err(BirthDateError::InFuture(birth_date));
    }

    tracing::trace!("accepted birth date {}", birth_date);
    Ok(birth_date)
}

pub fn is_valid_birth_date(text: &str, today: NaiveDate) -> bool {
    check_birth_date(text, today).is_ok()
}
