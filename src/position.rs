//! Apparent solar position for an observer.
//!
//! Converts the outputs of [`crate::geometry`] into elevation, solves the inverse problem
//! (hour angle for a given elevation), and locates solar noon. Latitudes and longitudes are
//! in degrees; `t` is in Julian Centuries.

use crate::geometry::{equation_of_time, solar_declination, sun_apparent_longitude};
use crate::math::{
    abs, acos, asin_clamped, cos, degrees_to_radians, floor, normalize_degrees_0_to_360,
    radians_to_degrees, sin, trunc,
};
use crate::time::{julian_centuries_to_julian_day, julian_day_to_julian_centuries};
use crate::types::SunPosition;
use crate::{Error, Result};

/// Minutes per day
const MINUTES_PER_DAY: f64 = 1440.0;

/// Solar hour angle at which the Sun has the given elevation.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in radians
/// * `elevation` - Requested elevation in radians
///
/// # Returns
/// The hour angle in radians, carrying the sign of `elevation`. An elevation of exactly zero
/// yields zero without evaluating the general formula.
///
/// # Errors
/// Returns `UnreachableElevation` when the arccosine argument falls outside [-1, 1], i.e. the
/// Sun never reaches that elevation at this latitude and declination.
///
/// # Example
/// ```
/// # use solar_ephemeris::position::hour_angle_from_elevation;
/// let h = hour_angle_from_elevation(0.0, 0.0, 0.5).unwrap();
/// assert!((h - 0.5).abs() < 1e-12);
/// assert!(hour_angle_from_elevation(89.0, -0.4, 0.1).is_err());
/// ```
pub fn hour_angle_from_elevation(latitude: f64, declination: f64, elevation: f64) -> Result<f64> {
    if elevation == 0.0 {
        return Ok(0.0);
    }

    let phi = degrees_to_radians(latitude);
    let cos_hour_angle = (cos(abs(elevation)) - sin(phi) * sin(declination))
        / (cos(phi) * cos(declination));

    // NaN fails the range check too
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return Err(Error::unreachable_elevation(latitude, declination, elevation));
    }

    let hour_angle = acos(cos_hour_angle);
    Ok(if elevation < 0.0 { -hour_angle } else { hour_angle })
}

/// Elevation of the Sun at a given hour angle, in radians.
///
/// # Arguments
/// * `latitude` - Observer latitude in degrees
/// * `declination` - Solar declination in radians
/// * `hour_angle` - Solar hour angle in radians
#[must_use]
pub fn elevation_from_hour_angle(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let phi = degrees_to_radians(latitude);
    asin_clamped(cos(phi) * cos(hour_angle) * cos(declination) + sin(phi) * sin(declination))
}

/// Time of the solar noon closest to `t`, in minutes after 00:00 UTC.
///
/// Starts from the mean noon for `longitude` and applies the equation of time twice, the
/// second time evaluated at the first estimate. The result can fall outside [0, 1440) for
/// longitudes near the date line.
#[must_use]
pub fn time_of_solar_noon(t: f64, longitude: f64) -> f64 {
    let jd = julian_centuries_to_julian_day(t);
    let mean_noon = 720.0 - 4.0 * longitude;

    let estimate = julian_day_to_julian_centuries(jd - longitude / 360.0);
    let noon = mean_noon - equation_of_time(estimate);

    let estimate = julian_day_to_julian_centuries(jd - 0.5 + noon / MINUTES_PER_DAY);
    mean_noon - equation_of_time(estimate)
}

/// Solar noon on the UTC day containing `t`, in Julian Centuries.
///
/// # Example
/// ```
/// # use solar_ephemeris::position::solar_noon;
/// # use solar_ephemeris::time::{julian_centuries_from_utc, julian_centuries_to_julian_day};
/// let t = julian_centuries_from_utc(2024, 3, 20, 0, 0, 0.0).unwrap();
/// let noon = julian_centuries_to_julian_day(solar_noon(t, 18.07));
/// // About 10:55 UTC in Stockholm
/// assert!((noon - 2_460_389.955).abs() < 0.001);
/// ```
#[must_use]
pub fn solar_noon(t: f64, longitude: f64) -> f64 {
    let jd = julian_centuries_to_julian_day(t);
    let midnight = floor(jd - 0.5) + 0.5;
    julian_day_to_julian_centuries(midnight + time_of_solar_noon(t, longitude) / MINUTES_PER_DAY)
}

/// Time at which the Sun reaches `elevation` on the UTC day of `t`, in minutes after 00:00 UTC.
///
/// Closed-form alternative to [`crate::events::future_elevation`]: the hour angle is solved at
/// `noon`, then solved once more at the resulting estimate.
///
/// # Arguments
/// * `t` - Any time on the day of interest, in Julian Centuries
/// * `noon` - Solar noon of that day, in Julian Centuries (see [`solar_noon`])
/// * `latitude` - Observer latitude in degrees
/// * `longitude` - Observer longitude in degrees
/// * `elevation` - Angle in radians, with the convention of [`hour_angle_from_elevation`]:
///   its magnitude is the distance from the zenith, a positive value selects the morning
///   crossing and a negative one the afternoon crossing
///
/// # Errors
/// Returns `UnreachableElevation` when the Sun never gets there that day (polar day or night).
///
/// # Example
/// ```
/// # use solar_ephemeris::math::{PI, degrees_to_radians};
/// # use solar_ephemeris::position::{solar_noon, time_of_solar_elevation};
/// # use solar_ephemeris::time::julian_centuries_from_utc;
/// let t = julian_centuries_from_utc(2024, 3, 1, 0, 0, 0.0).unwrap();
/// let noon = solar_noon(t, 18.07);
/// // Sunset in Stockholm, 32' below the horizon
/// let zenith = PI / 2.0 + degrees_to_radians(32.0 / 60.0);
/// let minutes = time_of_solar_elevation(t, noon, 59.33, 18.07, -zenith).unwrap();
/// assert!((minutes - 974.85).abs() < 0.01);
/// ```
pub fn time_of_solar_elevation(
    t: f64,
    noon: f64,
    latitude: f64,
    longitude: f64,
    elevation: f64,
) -> Result<f64> {
    let estimate = elevation_minutes(noon, latitude, longitude, elevation)?;
    let midnight = floor(julian_centuries_to_julian_day(t) - 0.5) + 0.5;
    let refined = julian_day_to_julian_centuries(midnight + estimate / MINUTES_PER_DAY);
    elevation_minutes(refined, latitude, longitude, elevation)
}

fn elevation_minutes(t: f64, latitude: f64, longitude: f64, elevation: f64) -> Result<f64> {
    let hour_angle = hour_angle_from_elevation(latitude, solar_declination(t), elevation)?;
    Ok(720.0 - 4.0 * (longitude + radians_to_degrees(hour_angle)) - equation_of_time(t))
}

/// Elevation of the Sun seen from a position, in radians.
#[must_use]
pub fn solar_elevation_from_time(t: f64, latitude: f64, longitude: f64) -> f64 {
    let jd = julian_centuries_to_julian_day(t);
    // Minutes since midnight, offset by a whole day; only the cosine of the angle is used
    let minutes = (jd - trunc(jd + 0.5) - 0.5) * MINUTES_PER_DAY;
    let hour_angle = (720.0 - minutes - equation_of_time(t)) / 4.0 - longitude;
    elevation_from_hour_angle(latitude, solar_declination(t), degrees_to_radians(hour_angle))
}

/// Elevation of the Sun seen from a position, in degrees.
///
/// # Arguments
/// * `latitude` - Degrees north of the equator, negative for south
/// * `longitude` - Degrees east of Greenwich, negative for west
/// * `t` - Julian Centuries since J2000.0
#[must_use]
pub fn solar_elevation(latitude: f64, longitude: f64, t: f64) -> f64 {
    radians_to_degrees(solar_elevation_from_time(t, latitude, longitude))
}

/// Whether the Sun rises and sets at this latitude on this date.
///
/// `false` means continuous day or continuous night (polar summer or winter).
#[must_use]
pub fn has_sunrise_and_sunset(latitude: f64, t: f64) -> bool {
    let d = radians_to_degrees(solar_declination(t));
    let latitude = abs(latitude);
    if d >= 0.0 {
        -90.0 + d < latitude && latitude < 90.0 - d
    } else {
        -90.0 - d < latitude && latitude < 90.0 + d
    }
}

/// Whether it is summer on the observer's hemisphere.
#[must_use]
pub fn is_summer(latitude: f64, t: f64) -> bool {
    (solar_declination(t) > 0.0) == (latitude > 0.0)
}

/// Whether it is winter on the observer's hemisphere.
#[must_use]
pub fn is_winter(latitude: f64, t: f64) -> bool {
    !is_summer(latitude, t)
}

/// Elevation, declination, apparent longitude and equation of time in one snapshot.
#[must_use]
pub fn sun_position(latitude: f64, longitude: f64, t: f64) -> SunPosition {
    SunPosition::new(
        solar_elevation(latitude, longitude, t),
        radians_to_degrees(solar_declination(t)),
        normalize_degrees_0_to_360(radians_to_degrees(sun_apparent_longitude(t))),
        equation_of_time(t),
    )
}
