//! # Prayer Table Rendering
//!
//! Turns computed times into text: the `HH:MM` form of a single time, a
//! fixed-width table for the terminal and a JSON document for other
//! programs.

use crate::schedule::DailyTimes;
use crate::solar::fix_hour;
use crate::TimeSlot;

/// What an undefined or non-finite time prints as.
pub const INVALID_TIME: &str = "--:--";

/// Twenty seconds, so that 12:29:40 prints as 12:30.
const ROUNDING_BIAS: f64 = (1.0_f32 / 180.0) as f64;

/// Width of the `YYYY-MM-DD` column.
const DATE_WIDTH: usize = 10;

/// Columns of the default table.
const COMPACT_COLUMNS: [TimeSlot; 6] = [
    TimeSlot::Imsak,
    TimeSlot::Fajr,
    TimeSlot::Dhuhr,
    TimeSlot::Asr,
    TimeSlot::Maghrib,
    TimeSlot::Isha,
];

/// Render fractional hours as a zero-padded 24-hour `HH:MM`.
///
/// Values outside one day wrap (`25.5` is `01:30`, `-0.5` is `23:30`);
/// seconds are dropped after a twenty-second rounding bias.
///
/// # Example
/// ```
/// use prayer_times_lib::format_time;
///
/// assert_eq!(format_time(5.25), "05:15");
/// assert_eq!(format_time(24.5), "00:30");
/// assert_eq!(format_time(f64::NAN), "--:--");
/// ```
pub fn format_time(time: f64) -> String {
    if !time.is_finite() {
        return INVALID_TIME.to_string();
    }

    let time = fix_hour(time + ROUNDING_BIAS);
    let hours = time.floor();
    let minutes = ((time - hours) * 60.0).floor();
    format!("{:02}:{:02}", hours as u32, minutes as u32)
}

/// Slots shown in the table, in display order.
pub fn columns(detailed: bool) -> &'static [TimeSlot] {
    if detailed {
        &TimeSlot::ALL
    } else {
        &COMPACT_COLUMNS
    }
}

fn column_width(slot: TimeSlot) -> usize {
    slot.label().len().max(INVALID_TIME.len())
}

/// Fixed-width table: a header line and one line per day.
pub fn render_table(days: &[DailyTimes], detailed: bool) -> String {
    let columns = columns(detailed);
    let mut out = String::new();

    let mut header = format!("{:<width$}", "Date", width = DATE_WIDTH);
    for &slot in columns {
        header.push_str(&format!(" {:<width$}", slot.label(), width = column_width(slot)));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    for day in days {
        let mut line = day.date.format("%Y-%m-%d").to_string();
        for &slot in columns {
            line.push_str(&format!(
                " {:<width$}",
                day.times.format(slot),
                width = column_width(slot)
            ));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Print the table to stdout.
pub fn draw_table(days: &[DailyTimes], detailed: bool) {
    print!("{}", render_table(days, detailed));
}

/// Pretty JSON array of `{ "date": ..., "times": { slot: hours | null } }`.
pub fn render_json(days: &[DailyTimes]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(days)
}
