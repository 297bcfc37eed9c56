//! Time representations and the clock abstraction.
//!
//! Instants are plain `f64` values in one of three units:
//! - POSIX epoch seconds (fractional seconds allowed)
//! - Julian Day (JD)
//! - Julian Centuries since J2000.0, the unit every formula in [`crate::geometry`] takes
//!
//! The affine conversions between them are exact inverses up to floating-point rounding.
//! The current instant comes from a [`TimeSource`], never from a hard-wired clock call.

#![allow(clippy::unreadable_literal)]

#[cfg(feature = "chrono")]
use crate::math::abs;
use crate::math::floor;
use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{DateTime, TimeZone, Utc};

/// Seconds per day (86,400)
const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of the POSIX epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of the J2000.0 epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Converts a POSIX timestamp to a Julian Day.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::epoch_to_julian_day;
/// assert_eq!(epoch_to_julian_day(0.0), 2_440_587.5);
/// ```
#[must_use]
pub fn epoch_to_julian_day(epoch: f64) -> f64 {
    epoch / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Converts a Julian Day to a POSIX timestamp.
#[must_use]
pub fn julian_day_to_epoch(jd: f64) -> f64 {
    (jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Converts a Julian Day to Julian Centuries since J2000.0.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_day_to_julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Converts Julian Centuries since J2000.0 to a Julian Day.
#[must_use]
pub fn julian_centuries_to_julian_day(t: f64) -> f64 {
    t * DAYS_PER_CENTURY + J2000_JD
}

/// Converts a POSIX timestamp to Julian Centuries since J2000.0.
#[must_use]
pub fn epoch_to_julian_centuries(epoch: f64) -> f64 {
    julian_day_to_julian_centuries(epoch_to_julian_day(epoch))
}

/// Converts Julian Centuries since J2000.0 to a POSIX timestamp.
#[must_use]
pub fn julian_centuries_to_epoch(t: f64) -> f64 {
    julian_day_to_epoch(julian_centuries_to_julian_day(t))
}

/// Source of the current instant.
///
/// Implementations return POSIX epoch seconds; the provided methods route that value through
/// the conversions above. Entry points in [`crate::Ephemeris`] call [`TimeSource::epoch`] at
/// most once per call.
pub trait TimeSource {
    /// Current POSIX time in seconds, fractional seconds permitted.
    fn epoch(&self) -> f64;

    /// Current time as a Julian Day.
    fn julian_day(&self) -> f64 {
        epoch_to_julian_day(self.epoch())
    }

    /// Current time in Julian Centuries since J2000.0.
    fn julian_centuries(&self) -> f64 {
        epoch_to_julian_centuries(self.epoch())
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn epoch(&self) -> f64 {
        (**self).epoch()
    }
}

/// The operating system's wall clock.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl TimeSource for SystemClock {
    fn epoch(&self) -> f64 {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(since) => since.as_secs_f64(),
            // Clock set before 1970
            Err(before) => -before.duration().as_secs_f64(),
        }
    }
}

/// A clock frozen at one instant.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::{FixedTime, TimeSource};
/// let clock = FixedTime::from_julian_day(2_451_545.0);
/// assert_eq!(clock.julian_centuries(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTime {
    epoch: f64,
}

impl FixedTime {
    /// Creates a clock frozen at a POSIX timestamp.
    #[must_use]
    pub const fn from_epoch(epoch: f64) -> Self {
        Self { epoch }
    }

    /// Creates a clock frozen at a Julian Day.
    #[must_use]
    pub fn from_julian_day(jd: f64) -> Self {
        Self::from_epoch(julian_day_to_epoch(jd))
    }

    /// Creates a clock frozen at a Julian Century value.
    #[must_use]
    pub fn from_julian_centuries(t: f64) -> Self {
        Self::from_epoch(julian_centuries_to_epoch(t))
    }
}

impl TimeSource for FixedTime {
    fn epoch(&self) -> f64 {
        self.epoch
    }
}

/// Calculates the Julian Day for a UTC calendar date and time.
///
/// Follows Meeus, "Astronomical Algorithms", 2nd edition, with the Julian calendar before
/// 1582-10-15 and the Gregorian calendar from then on.
///
/// # Errors
/// Returns `InvalidDateTime` if any component is outside its range (month 1-12, day valid
/// for the month, hour 0-23, minute 0-59, second 0-59.999...), or for the days
/// 1582-10-05 through 1582-10-14 that were skipped by the calendar reform.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_day_from_utc;
/// let jd = julian_day_from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
/// assert_eq!(jd, 2_451_545.0);
/// ```
pub fn julian_day_from_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_datetime("day must be between 1 and 31"));
    }
    if hour > 23 {
        return Err(Error::invalid_datetime("hour must be between 0 and 23"));
    }
    if minute > 59 {
        return Err(Error::invalid_datetime("minute must be between 0 and 59"));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(Error::invalid_datetime(
            "second must be between 0 and 59.999...",
        ));
    }
    if day > days_in_month(year, month, day)? {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    Ok(calendar_to_julian_day(year, month, day, hour, minute, second))
}

/// Julian Centuries for a UTC calendar date and time.
///
/// # Errors
/// Same as [`julian_day_from_utc`].
pub fn julian_centuries_from_utc(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64> {
    julian_day_from_utc(year, month, day, hour, minute, second).map(julian_day_to_julian_centuries)
}

fn calendar_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    // January and February count as months 13 and 14 of the previous year
    let (y, m) = if month < 3 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let d = f64::from(day) + (f64::from(hour) + (f64::from(minute) + second / 60.0) / 60.0) / 24.0;

    let mut jd = floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d - 1524.5;

    // JD 2299161 is 1582-10-15, the first Gregorian day
    if jd >= 2_299_161.0 {
        let a = floor(y / 100.0);
        jd += 2.0 - a + floor(a / 4.0);
    }

    jd
}

const fn is_gregorian_date(year: i32, month: u32, day: u32) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15)))
}

const fn is_leap_year(year: i32, is_gregorian: bool) -> bool {
    if is_gregorian {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    } else {
        year % 4 == 0
    }
}

fn days_in_month(year: i32, month: u32, day: u32) -> Result<u32> {
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(Error::invalid_datetime(
            "dates 1582-10-05 through 1582-10-14 do not exist in Gregorian calendar",
        ));
    }

    let is_gregorian = is_gregorian_date(year, month, day);
    let days = match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year, is_gregorian) => 29,
        2 => 28,
        _ => 31,
    };
    Ok(days)
}

/// Julian Centuries since J2000.0 for a timezone-aware chrono `DateTime`.
///
/// # Example
/// ```
/// # use solar_ephemeris::time::julian_centuries_from_datetime;
/// # use chrono::{DateTime, Utc};
/// let j2000 = "2000-01-01T12:00:00Z".parse::<DateTime<Utc>>().unwrap();
/// assert_eq!(julian_centuries_from_datetime(&j2000), 0.0);
/// ```
#[cfg(feature = "chrono")]
#[allow(clippy::cast_precision_loss)]
pub fn julian_centuries_from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> f64 {
    let epoch = datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9;
    epoch_to_julian_centuries(epoch)
}

/// Converts Julian Centuries since J2000.0 to a UTC `DateTime`.
///
/// Returns `None` when the instant is not finite or outside chrono's representable range.
#[cfg(feature = "chrono")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn datetime_from_julian_centuries(t: f64) -> Option<DateTime<Utc>> {
    let epoch = julian_centuries_to_epoch(t);
    if !epoch.is_finite() || abs(epoch) > 1e16 {
        return None;
    }

    let seconds = floor(epoch);
    let nanos = ((epoch - seconds) * 1e9).clamp(0.0, 999_999_999.0) as u32;
    DateTime::from_timestamp(seconds as i64, nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_epoch_julian_day_anchors() {
        assert_eq!(epoch_to_julian_day(0.0), UNIX_EPOCH_JD);
        assert_eq!(julian_day_to_epoch(UNIX_EPOCH_JD), 0.0);
        assert_eq!(epoch_to_julian_day(86_400.0), UNIX_EPOCH_JD + 1.0);
        // J2000.0 is 946728000 seconds after the POSIX epoch
        assert!((epoch_to_julian_day(946_728_000.0) - J2000_JD).abs() < EPSILON);
    }

    #[test]
    fn test_julian_century_anchors() {
        assert_eq!(julian_day_to_julian_centuries(J2000_JD), 0.0);
        assert_eq!(julian_centuries_to_julian_day(0.0), J2000_JD);
        assert_eq!(julian_day_to_julian_centuries(J2000_JD + 36_525.0), 1.0);
        assert!(epoch_to_julian_centuries(946_728_000.0).abs() < EPSILON);
    }

    #[test]
    fn test_epoch_round_trip() {
        for epoch in [-1e10, -86_400.0, 0.0, 0.25, 1_700_000_000.5, 4e9] {
            let back = julian_day_to_epoch(epoch_to_julian_day(epoch));
            // A JD near 2.4e6 carries about 40 µs of resolution
            assert!((back - epoch).abs() < 1e-4, "{epoch} -> {back}");
        }
    }

    #[test]
    fn test_julian_century_round_trip() {
        for jd in [0.0, 2_299_161.0, UNIX_EPOCH_JD, J2000_JD, 2_460_000.25, 5e6] {
            let back = julian_centuries_to_julian_day(julian_day_to_julian_centuries(jd));
            assert!((back - jd).abs() < 1e-8, "{jd} -> {back}");
        }
        for t in [-20.0, -0.3, 0.0, 0.24, 1.5] {
            let back = julian_centuries_to_epoch(t);
            assert!((epoch_to_julian_centuries(back) - t).abs() < 1e-12);
        }
    }

    #[test]
    fn test_fixed_time_sources() {
        let clock = FixedTime::from_epoch(0.0);
        assert_eq!(clock.epoch(), 0.0);
        assert_eq!(clock.julian_day(), UNIX_EPOCH_JD);

        let clock = FixedTime::from_julian_day(J2000_JD);
        assert!(clock.julian_centuries().abs() < EPSILON);

        let clock = FixedTime::from_julian_centuries(0.24);
        assert!((clock.julian_centuries() - 0.24).abs() < 1e-12);

        let by_ref = &clock;
        assert_eq!(by_ref.epoch(), clock.epoch());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_system_clock_is_after_2020() {
        let now = SystemClock.epoch();
        assert!(now > 1_577_836_800.0);
        assert!(SystemClock.julian_centuries() > 0.2);
    }

    #[test]
    fn test_julian_day_from_utc() {
        let jd = julian_day_from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((jd - J2000_JD).abs() < EPSILON);

        let unix = julian_day_from_utc(1970, 1, 1, 0, 0, 0.0).unwrap();
        assert!((unix - UNIX_EPOCH_JD).abs() < 1e-6);

        let y2k = julian_day_from_utc(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((y2k - 2_451_544.5).abs() < 1e-6);

        let t = julian_centuries_from_utc(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!(t.abs() < EPSILON);
    }

    #[test]
    fn test_julian_day_from_utc_validation() {
        assert!(julian_day_from_utc(2024, 13, 1, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 0, 1, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 1, 32, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 1, 1, 24, 0, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 1, 1, 0, 60, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 1, 1, 0, 0, 60.0).is_err());

        assert!(julian_day_from_utc(2024, 2, 30, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(2024, 2, 29, 0, 0, 0.0).is_ok());
        assert!(julian_day_from_utc(1900, 2, 29, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(1500, 2, 29, 0, 0, 0.0).is_ok());
        assert!(julian_day_from_utc(2023, 4, 31, 0, 0, 0.0).is_err());
        assert!(julian_day_from_utc(1582, 10, 10, 0, 0, 0.0).is_err());
    }

    #[test]
    fn test_gregorian_switch_is_one_day() {
        let last_julian = julian_day_from_utc(1582, 10, 4, 12, 0, 0.0).unwrap();
        let first_gregorian = julian_day_from_utc(1582, 10, 15, 12, 0, 0.0).unwrap();
        assert!((first_gregorian - last_julian - 1.0).abs() < 1e-6);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_bridge() {
        use chrono::{FixedOffset, TimeZone};

        let utc = Utc.with_ymd_and_hms(2024, 3, 20, 3, 4, 14).unwrap();
        let local = FixedOffset::east_opt(3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 20, 4, 4, 14)
            .unwrap();
        assert_eq!(
            julian_centuries_from_datetime(&utc),
            julian_centuries_from_datetime(&local)
        );

        let t = julian_centuries_from_datetime(&utc);
        let from_calendar = julian_centuries_from_utc(2024, 3, 20, 3, 4, 14.0).unwrap();
        assert!((t - from_calendar).abs() < 1e-12);

        let back = datetime_from_julian_centuries(t).unwrap();
        assert!((back - utc).num_milliseconds().abs() <= 1);

        assert!(datetime_from_julian_centuries(f64::NAN).is_none());
        assert!(datetime_from_julian_centuries(1e12).is_none());
    }
}
