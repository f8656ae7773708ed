//! Low-precision solar position & angle-crossing solver
//!
//! Closed-form approximations of the Sun's declination and the equation of
//! time (USNO "Approximate Solar Coordinates"), plus the hour-angle solver
//! every dawn/dusk prayer time is built on.
//! Accuracy: ~1 arcminute over 1800–2200, well inside the one-minute
//! resolution prayer tables are printed at.
//!
//! All angles are degrees, all times fractional hours. Nothing here fails:
//! a crossing that never happens comes back as `None` and is dealt with by
//! the caller.
//!
//! ## Precision
//! The coefficients, π and the hour-angle scale are single-precision values
//! widened to `f64`. Published tables built on this algorithm (and the
//! regression values in the tests below) depend on that rounding, so keep
//! the `_f32` literals when touching them.

/// π as used by the degree helpers.
const PI: f64 = std::f32::consts::PI as f64;

/// Julian day of the J2000.0 epoch.
const J2000: f64 = 2_451_545.0;

// Mean anomaly g and mean longitude q, both linear in days since J2000.
const MEAN_ANOMALY_AT_EPOCH: f64 = 357.529_f32 as f64;
const MEAN_ANOMALY_RATE: f64 = 0.985_600_28_f32 as f64;
const MEAN_LONGITUDE_AT_EPOCH: f64 = 280.459_f32 as f64;
const MEAN_LONGITUDE_RATE: f64 = 0.985_647_36_f32 as f64;

// Equation of centre.
const CENTRE_1: f64 = 1.915_f32 as f64;
const CENTRE_2: f64 = 0.020_f32 as f64;

// Mean obliquity of the ecliptic.
const OBLIQUITY_AT_EPOCH: f64 = 23.439_f32 as f64;
const OBLIQUITY_RATE: f64 = 0.000_000_36_f32 as f64;

/// Hours of hour angle per degree.
const HOURS_PER_DEGREE: f64 = (1.0_f32 / 15.0) as f64;

/// Which side of solar noon an angle crossing is looked for on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Morning event (counter-clockwise from noon): dawn, sunrise.
    BeforeNoon,
    /// Afternoon/evening event (clockwise from noon): Asr, sunset, dusk.
    AfterNoon,
}

impl Direction {
    /// Sign applied to an arc measured from the event's anchor.
    pub fn sign(self) -> f64 {
        match self {
            Direction::BeforeNoon => -1.0,
            Direction::AfterNoon => 1.0,
        }
    }
}

/// Declination and equation of time for one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination in degrees (north positive).
    pub declination: f64,
    /// Equation of time in hours (mean minus apparent solar time).
    pub equation: f64,
}

/// Reduce an angle into `[0, 360)` degrees. Negative input wraps around.
pub fn fix_angle(a: f64) -> f64 {
    wrap(a, 360.0)
}

/// Reduce a time into `[0, 24)` hours. Negative input wraps around.
pub fn fix_hour(a: f64) -> f64 {
    wrap(a, 24.0)
}

// Floor-based modulo. The last check catches tiny negatives that round up
// to exactly `span`.
fn wrap(a: f64, span: f64) -> f64 {
    let a = a - span * (a / span).floor();
    if a < 0.0 {
        a + span
    } else if a >= span {
        a - span
    } else {
        a
    }
}

pub fn sin_deg(d: f64) -> f64 {
    ((d * PI) / 180.0).sin()
}

pub fn cos_deg(d: f64) -> f64 {
    ((d * PI) / 180.0).cos()
}

pub fn tan_deg(d: f64) -> f64 {
    ((d * PI) / 180.0).tan()
}

pub fn arcsin_deg(x: f64) -> f64 {
    (x.asin() * 180.0) / PI
}

pub fn arccos_deg(x: f64) -> f64 {
    (x.acos() * 180.0) / PI
}

/// `arctan(1/x)` in degrees.
pub fn arccot_deg(x: f64) -> f64 {
    ((1.0 / x).atan() * 180.0) / PI
}

pub fn arctan2_deg(y: f64, x: f64) -> f64 {
    (y.atan2(x) * 180.0) / PI
}

/// Convert a proleptic-Gregorian calendar date to a Julian day.
///
/// The result ends in `.5`: Julian days start at noon, so civil midnight
/// falls half-way through one. Months run 1 = Jan … 12 = Dec.
///
/// Ref: Meeus, *Astronomical Algorithms*, ch. 7.
pub fn julian_day(year: i32, month: u32, day: u32) -> f64 {
    // Jan/Feb count as months 13/14 of the previous year
    let (mut y, mut m) = (year, month as i32);
    if m <= 2 {
        y -= 1;
        m += 12;
    }

    // Gregorian century correction
    let a = (f64::from(y) / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (f64::from(y) + 4716.0)).floor() + (30.6001 * f64::from(m + 1)).floor()
        + f64::from(day)
        + b
        - 1524.5
}

/// Sun declination and equation of time at Julian day `jd`.
///
/// Ref: <https://aa.usno.navy.mil/faq/sun_approx>
pub fn sun_position(jd: f64) -> SunPosition {
    let d = jd - J2000;

    let g = fix_angle(MEAN_ANOMALY_AT_EPOCH + MEAN_ANOMALY_RATE * d);
    let q = fix_angle(MEAN_LONGITUDE_AT_EPOCH + MEAN_LONGITUDE_RATE * d);
    // apparent ecliptic longitude
    let l = fix_angle(q + (CENTRE_1 * sin_deg(g)) + (CENTRE_2 * sin_deg(2.0 * g)));

    let e = OBLIQUITY_AT_EPOCH - OBLIQUITY_RATE * d;

    let declination = arcsin_deg(sin_deg(e) * sin_deg(l));
    let right_ascension = arctan2_deg(cos_deg(e) * sin_deg(l), cos_deg(l)) / 15.0;

    SunPosition {
        declination,
        equation: (q / 15.0) - fix_hour(right_ascension),
    }
}

/// Sun declination in degrees at Julian day `jd`.
pub fn sun_declination(jd: f64) -> f64 {
    sun_position(jd).declination
}

/// Equation of time in hours at Julian day `jd`.
pub fn equation_of_time(jd: f64) -> f64 {
    sun_position(jd).equation
}

/// Local apparent noon, in hours of mean time, for the day starting at
/// `jd` with the Sun sampled at `jd + approx_time` (a day fraction).
pub fn solar_noon(jd: f64, approx_time: f64) -> f64 {
    fix_hour(12.0 - equation_of_time(jd + approx_time))
}

/// Time at which the Sun stands `angle` degrees below the horizon
/// (negative `angle` means above it), on the given side of noon.
///
/// `approx_time` is a day-fraction guess used to sample declination and
/// noon; the result is in hours of local mean time at longitude 0 and
/// still needs the caller's zone adjustment.
///
/// Returns `None` when the Sun never reaches that altitude on this day
/// (the hour-angle cosine leaves [-1, 1]), which happens for deep twilight
/// angles at high latitude.
pub fn sun_angle_time(
    jd: f64,
    angle: f64,
    approx_time: f64,
    direction: Direction,
    lat: f64,
) -> Option<f64> {
    let decl = sun_declination(jd + approx_time);
    let noon = solar_noon(jd, approx_time);

    let cos_hour_angle =
        (-sin_deg(angle) - (sin_deg(decl) * sin_deg(lat))) / (cos_deg(decl) * cos_deg(lat));
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return None;
    }

    let t = HOURS_PER_DEGREE * arccos_deg(cos_hour_angle);
    Some(noon + direction.sign() * t)
}
