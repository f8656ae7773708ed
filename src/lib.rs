//! # Prayer Times Core Library
//!
//! This library computes the daily Islamic prayer times for a date, a place
//! on Earth and a fixed UTC offset. The calculation is closed-form: no
//! iteration, no I/O, no shared state, so one day costs a few dozen
//! trigonometric calls. [`config`], [`schedule`] and [`renderer`] wrap it
//! for the command-line tool.
//!
//! ## Design Philosophy
//!
//! ### Two Layers
//! - **Solar primitives** ([`solar`]): declination, equation of time, solar
//!   noon and a single solver for "when is the Sun N degrees below the
//!   horizon". Pure functions.
//! - **Engine** ([`engine`]): a small rule set on top of the solver that
//!   applies the conventions of the selected [`Method`], bounds dawn/dusk
//!   at high latitude and adds user tuning.
//!
//! ### Undefined Times
//! Near the poles the Sun may never reach Fajr or Isha depth, or may not
//! rise at all. Such slots are `None` all the way through instead of NaN;
//! the high-latitude rule replaces them with a bounded fallback when it can.
//!
//! ### Time Representation
//! Times are fractional hours of the local civil day (`5.5` = 05:30) and
//! only become strings in [`format_time`]. Midnight may land after 24:00;
//! formatting wraps it.
//!
//! ## Core Types
//!
//! - [`TimeSlot`]: the nine named times, in their fixed order
//! - [`PrayerTimes`]: one day's result, indexed by [`TimeSlot`]
//!
//! # Example
//! ```
//! use prayer_times_lib::{Location, Method, PrayTimes, TimeSlot, ZoneOffset};
//!
//! let mut engine = PrayTimes::with_method(Method::Indonesia);
//! engine.tune(2.0);
//!
//! let site = Location::new(3.583333, 97.666667, 0.0);
//! let times = engine.times(2022, 1, 21, &site, ZoneOffset::new(7.0, 0.0));
//!
//! assert_eq!(times.format(TimeSlot::Fajr), "05:22");
//! assert_eq!(times.format(TimeSlot::Maghrib), "18:41");
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Module declarations
pub mod config;
pub mod engine;
pub mod method;
pub mod renderer;
pub mod schedule;
pub mod solar;

pub use engine::{compute_times, Adjustments, Location, PrayTimes, Settings, ZoneOffset};
pub use method::{AsrJuristic, HighLatRule, Method, MidnightMode, ParseMethodError};
pub use renderer::format_time;
pub use schedule::{schedule, DailyTimes};

/// One of the nine daily time points, in chronological order through the
/// day (Midnight belongs to the following night).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeSlot {
    Imsak,
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Sunset,
    Maghrib,
    Isha,
    Midnight,
}

impl TimeSlot {
    /// All slots in index order.
    pub const ALL: [TimeSlot; 9] = [
        TimeSlot::Imsak,
        TimeSlot::Fajr,
        TimeSlot::Sunrise,
        TimeSlot::Dhuhr,
        TimeSlot::Asr,
        TimeSlot::Sunset,
        TimeSlot::Maghrib,
        TimeSlot::Isha,
        TimeSlot::Midnight,
    ];

    /// Position in [`TimeSlot::ALL`] and in [`PrayerTimes`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lower-case key, used in JSON output.
    pub fn name(self) -> &'static str {
        match self {
            TimeSlot::Imsak => "imsak",
            TimeSlot::Fajr => "fajr",
            TimeSlot::Sunrise => "sunrise",
            TimeSlot::Dhuhr => "dhuhr",
            TimeSlot::Asr => "asr",
            TimeSlot::Sunset => "sunset",
            TimeSlot::Maghrib => "maghrib",
            TimeSlot::Isha => "isha",
            TimeSlot::Midnight => "midnight",
        }
    }

    /// Title-case label, used in table headers.
    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::Imsak => "Imsak",
            TimeSlot::Fajr => "Fajr",
            TimeSlot::Sunrise => "Sunrise",
            TimeSlot::Dhuhr => "Dhuhr",
            TimeSlot::Asr => "Asr",
            TimeSlot::Sunset => "Sunset",
            TimeSlot::Maghrib => "Maghrib",
            TimeSlot::Isha => "Isha",
            TimeSlot::Midnight => "Midnight",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time slot `{0}`")]
pub struct ParseSlotError(pub String);

impl FromStr for TimeSlot {
    type Err = ParseSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSlotError(s.to_string()))
    }
}

/// One day of computed times, in fractional hours of local time.
///
/// Values are produced fresh by every computation; the engine keeps no
/// copy. A slot is `None` when the Sun never reaches the required altitude
/// that day and no high-latitude rule filled it in.
///
/// # Example
/// ```
/// use prayer_times_lib::{PrayerTimes, TimeSlot};
///
/// let mut times = PrayerTimes::default();
/// times.set(TimeSlot::Dhuhr, Some(12.5));
///
/// assert_eq!(times.get(TimeSlot::Dhuhr), Some(12.5));
/// assert_eq!(times.format(TimeSlot::Dhuhr), "12:30");
/// assert_eq!(times.format(TimeSlot::Isha), "--:--");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrayerTimes {
    values: [Option<f64>; 9],
}

impl PrayerTimes {
    pub fn new(values: [Option<f64>; 9]) -> Self {
        PrayerTimes { values }
    }

    pub fn get(&self, slot: TimeSlot) -> Option<f64> {
        self.values[slot.index()]
    }

    pub fn set(&mut self, slot: TimeSlot, value: Option<f64>) {
        self.values[slot.index()] = value;
    }

    /// `HH:MM`, or `--:--` for an undefined slot.
    pub fn format(&self, slot: TimeSlot) -> String {
        format_time(self.get(slot).unwrap_or(f64::NAN))
    }

    /// True when every slot has a finite value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| v.is_some_and(f64::is_finite))
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimeSlot, Option<f64>)> + '_ {
        TimeSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Apply `f` to every defined slot.
    pub(crate) fn map_defined(&mut self, f: impl Fn(TimeSlot, f64) -> f64) {
        for slot in TimeSlot::ALL {
            if let Some(v) = self.get(slot) {
                self.set(slot, Some(f(slot, v)));
            }
        }
    }
}

impl Serialize for PrayerTimes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TimeSlot::ALL.len()))?;
        for (slot, value) in self.iter() {
            map.serialize_entry(slot.name(), &value)?;
        }
        map.end()
    }
}
