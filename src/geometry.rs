//! Low-precision solar geometry.
//!
//! The formula chain from Meeus, "Astronomical Algorithms" (chapter 25, low accuracy), as
//! popularised by the NOAA solar calculator. Every function takes `t` in Julian Centuries
//! since J2000.0 (see [`crate::time`]) and returns one scalar. Angles are returned in
//! radians, except [`equation_of_time`].
//!
//! Accuracy is about 0.01° in declination for dates within a few centuries of 2000.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{
    asin_clamped, cos, degrees_to_radians, normalize_degrees_0_to_360, polynomial,
    radians_to_degrees, sin, tan,
};

/// Longitude of the Moon's ascending node in degrees, driving the nutation terms.
fn ascending_node_degrees(t: f64) -> f64 {
    polynomial(&[125.04, -1934.136], t)
}

/// Geometric mean longitude of the Sun, in radians within [0, 2π).
///
/// The degree polynomial is reduced modulo 360° before conversion; a negative remainder
/// (possible for `t < 0`) is shifted into the positive range.
///
/// # Example
/// ```
/// # use solar_ephemeris::geometry::sun_geometric_mean_longitude;
/// let l0 = sun_geometric_mean_longitude(0.0).to_degrees();
/// assert!((l0 - 280.46646).abs() < 1e-9);
/// ```
#[must_use]
pub fn sun_geometric_mean_longitude(t: f64) -> f64 {
    let degrees = polynomial(&[280.46646, 36000.76983, 0.0003032], t);
    degrees_to_radians(normalize_degrees_0_to_360(degrees))
}

/// Geometric mean anomaly of the Sun, in radians (not reduced).
#[must_use]
pub fn sun_geometric_mean_anomaly(t: f64) -> f64 {
    degrees_to_radians(polynomial(&[357.52911, 35999.05029, -0.0001537], t))
}

/// Eccentricity of Earth's orbit (dimensionless).
#[must_use]
pub fn earth_orbit_eccentricity(t: f64) -> f64 {
    polynomial(&[0.016708634, -0.000042037, -0.0000001267], t)
}

/// Equation of the centre: true anomaly minus mean anomaly, in radians.
#[must_use]
pub fn sun_equation_of_centre(t: f64) -> f64 {
    let m = sun_geometric_mean_anomaly(t);
    let c = sin(m) * polynomial(&[1.914602, -0.004817, -0.000014], t)
        + sin(2.0 * m) * polynomial(&[0.019993, -0.000101], t)
        + sin(3.0 * m) * 0.000289;
    degrees_to_radians(c)
}

/// True geometric longitude of the Sun, in radians.
#[must_use]
pub fn sun_real_longitude(t: f64) -> f64 {
    sun_geometric_mean_longitude(t) + sun_equation_of_centre(t)
}

/// Apparent longitude of the Sun (aberration and nutation applied), in radians.
#[must_use]
pub fn sun_apparent_longitude(t: f64) -> f64 {
    let omega = degrees_to_radians(ascending_node_degrees(t));
    let degrees = radians_to_degrees(sun_real_longitude(t)) - 0.00569 - 0.00478 * sin(omega);
    degrees_to_radians(degrees)
}

/// Mean obliquity of the ecliptic without the nutation correction, in radians.
///
/// 23° 26′ 21.448″ − 46.815″ t − 0.00059″ t² + 0.001813″ t³
#[must_use]
pub fn mean_ecliptic_obliquity(t: f64) -> f64 {
    let seconds = polynomial(&[21.448, -46.815, -0.00059, 0.001813], t);
    let minutes = 26.0 + seconds / 60.0;
    degrees_to_radians(23.0 + minutes / 60.0)
}

/// Mean obliquity of the ecliptic with the nutation correction, in radians.
#[must_use]
pub fn corrected_mean_ecliptic_obliquity(t: f64) -> f64 {
    let omega = degrees_to_radians(ascending_node_degrees(t));
    let degrees = 0.00256 * cos(omega) + radians_to_degrees(mean_ecliptic_obliquity(t));
    degrees_to_radians(degrees)
}

/// Declination of the Sun, in radians.
///
/// The arcsine argument is clamped to [-1, 1], so rounding never produces NaN.
#[must_use]
pub fn solar_declination(t: f64) -> f64 {
    asin_clamped(sin(corrected_mean_ecliptic_obliquity(t)) * sin(sun_apparent_longitude(t)))
}

/// Equation of time: apparent minus mean solar time, in minutes.
///
/// Computed in degrees of hour angle and scaled by 4 minutes per degree.
///
/// # Example
/// ```
/// # use solar_ephemeris::geometry::equation_of_time;
/// // Early January the sundial runs a few minutes slow
/// assert!((equation_of_time(0.0) + 3.30).abs() < 0.01);
/// ```
#[must_use]
pub fn equation_of_time(t: f64) -> f64 {
    let l = sun_geometric_mean_longitude(t);
    let e = earth_orbit_eccentricity(t);
    let m = sun_geometric_mean_anomaly(t);
    let y = tan(corrected_mean_ecliptic_obliquity(t) / 2.0);
    let y = y * y;

    let radians = y * sin(2.0 * l) + (4.0 * y * cos(2.0 * l) - 2.0) * e * sin(m)
        - 0.5 * y * y * sin(4.0 * l)
        - 1.25 * e * e * sin(2.0 * m);
    4.0 * radians_to_degrees(radians)
}
