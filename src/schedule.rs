//! # Multi-Day Schedules
//!
//! Runs the engine over consecutive calendar days. Date arithmetic is left
//! to `chrono`, so month ends, year rollover and 29 February need no
//! special handling here.

use crate::engine::{Location, PrayTimes, ZoneOffset};
use crate::PrayerTimes;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Times for one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyTimes {
    pub date: NaiveDate,
    pub times: PrayerTimes,
}

/// Validate a year/month/day triple.
pub fn start_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ScheduleError::InvalidDate { year, month, day })
}

/// Compute `days` consecutive days starting at `start`.
///
/// # Example
/// ```
/// use prayer_times_lib::schedule::start_date;
/// use prayer_times_lib::{schedule, Location, PrayTimes, ZoneOffset};
///
/// let start = start_date(2023, 12, 31).unwrap();
/// let site = Location::new(21.4225, 39.8262, 0.0);
/// let days = schedule(&PrayTimes::new(), start, 2, &site, ZoneOffset::new(3.0, 0.0));
///
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[1].date.to_string(), "2024-01-01");
/// ```
pub fn schedule(
    engine: &PrayTimes,
    start: NaiveDate,
    days: u32,
    location: &Location,
    zone: ZoneOffset,
) -> Vec<DailyTimes> {
    log::debug!("computing {} day(s) from {}", days, start);

    start
        .iter_days()
        .take(days as usize)
        .map(|date| DailyTimes {
            date,
            times: engine.times_on(date, location, zone),
        })
        .collect()
}
