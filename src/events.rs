//! Recurring solar events found with the generic [`predict`] routine.
//!
//! Each event is a target value on a function of time: declination for equinoxes, the rate of
//! change of declination for solstices, elevation for sunrise, sunset and twilight, and the
//! rate of change of elevation for noon-like turning points. All functions take and return
//! Julian Centuries since J2000.0 and search with the default [`PredictionWindow`] (about one
//! year).
//!
//! # Example
//! ```
//! # use solar_ephemeris::events::future_elevation;
//! # use solar_ephemeris::time::julian_centuries_from_utc;
//! # use solar_ephemeris::SOLAR_ELEVATION_SUNSET_SUNRISE;
//! let t = julian_centuries_from_utc(2024, 3, 1, 0, 0, 0.0).unwrap();
//! let sunrise = future_elevation(59.33, 18.07, SOLAR_ELEVATION_SUNSET_SUNRISE, t).unwrap();
//! assert!(sunrise > t);
//! ```

use crate::geometry::solar_declination;
use crate::position::solar_elevation;
use crate::predict::{Direction, PredictionWindow, predict};

/// Offset used by [`symmetric_derivative`], in Julian Centuries (about 53 minutes).
pub const DERIVATIVE_OFFSET: f64 = 0.00001;

/// Symmetric finite-difference derivative of `f`.
///
/// Returns `t ↦ (f(t + offset) − f(t − offset)) / (2 · offset)`.
///
/// # Example
/// ```
/// # use solar_ephemeris::events::symmetric_derivative;
/// let slope = symmetric_derivative(|t| 3.0 * t * t, 0.001);
/// assert!((slope(2.0) - 12.0).abs() < 1e-9);
/// ```
pub fn symmetric_derivative<F>(f: F, offset: f64) -> impl Fn(f64) -> f64
where
    F: Fn(f64) -> f64,
{
    move |t| (f(t + offset) - f(t - offset)) / (2.0 * offset)
}

/// Nearest equinox in `direction`: the Sun's declination crosses zero.
#[must_use]
pub fn equinox(direction: Direction, t: f64) -> Option<f64> {
    predict(
        &PredictionWindow::towards(direction),
        0.0,
        solar_declination,
        t,
    )
}

/// Next equinox after `t`.
#[must_use]
pub fn future_equinox(t: f64) -> Option<f64> {
    equinox(Direction::Future, t)
}

/// Last equinox before `t`.
#[must_use]
pub fn past_equinox(t: f64) -> Option<f64> {
    equinox(Direction::Past, t)
}

/// Nearest solstice in `direction`: the declination stops changing.
#[must_use]
pub fn solstice(direction: Direction, t: f64) -> Option<f64> {
    predict(
        &PredictionWindow::towards(direction),
        0.0,
        symmetric_derivative(solar_declination, DERIVATIVE_OFFSET),
        t,
    )
}

/// Next solstice after `t`.
#[must_use]
pub fn future_solstice(t: f64) -> Option<f64> {
    solstice(Direction::Future, t)
}

/// Last solstice before `t`.
#[must_use]
pub fn past_solstice(t: f64) -> Option<f64> {
    solstice(Direction::Past, t)
}

/// Nearest time in `direction` at which the Sun stands at `elevation` degrees.
///
/// Use the `SOLAR_ELEVATION_*` constants for sunrise, sunset and twilight boundaries. The
/// search does not tell rising from setting; it returns whichever crossing comes first.
///
/// # Returns
/// `None` if the elevation is not reached within the search window, e.g. during polar day or
/// night.
#[must_use]
pub fn elevation(
    direction: Direction,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    t: f64,
) -> Option<f64> {
    predict(
        &PredictionWindow::towards(direction),
        elevation,
        |t| solar_elevation(latitude, longitude, t),
        t,
    )
}

/// Next time after `t` at which the Sun stands at `elevation` degrees.
#[must_use]
pub fn future_elevation(latitude: f64, longitude: f64, elevation: f64, t: f64) -> Option<f64> {
    self::elevation(Direction::Future, latitude, longitude, elevation, t)
}

/// Last time before `t` at which the Sun stood at `elevation` degrees.
#[must_use]
pub fn past_elevation(latitude: f64, longitude: f64, elevation: f64, t: f64) -> Option<f64> {
    self::elevation(Direction::Past, latitude, longitude, elevation, t)
}

/// Nearest time in `direction` at which the elevation changes at `derivative` degrees per
/// Julian Century.
///
/// A `derivative` of zero finds the daily culmination or the lowest point of the Sun.
#[must_use]
pub fn elevation_derivative(
    direction: Direction,
    latitude: f64,
    longitude: f64,
    derivative: f64,
    t: f64,
) -> Option<f64> {
    predict(
        &PredictionWindow::towards(direction),
        derivative,
        symmetric_derivative(
            |t| solar_elevation(latitude, longitude, t),
            DERIVATIVE_OFFSET,
        ),
        t,
    )
}

/// Next time after `t` with the given elevation rate.
#[must_use]
pub fn future_elevation_derivative(
    latitude: f64,
    longitude: f64,
    derivative: f64,
    t: f64,
) -> Option<f64> {
    elevation_derivative(Direction::Future, latitude, longitude, derivative, t)
}

/// Last time before `t` with the given elevation rate.
#[must_use]
pub fn past_elevation_derivative(
    latitude: f64,
    longitude: f64,
    derivative: f64,
    t: f64,
) -> Option<f64> {
    elevation_derivative(Direction::Past, latitude, longitude, derivative, t)
}
