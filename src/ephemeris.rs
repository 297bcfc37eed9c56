//! Clock-aware entry point.
//!
//! The free functions in [`crate::position`] and [`crate::events`] all take an explicit time.
//! [`Ephemeris`] wraps them for callers who want "now" by default: every method takes an
//! `Option<f64>` in Julian Centuries and, when it is `None`, reads its [`TimeSource`] once.

use crate::Result;
use crate::events;
use crate::math::degrees_to_radians;
use crate::position;
use crate::predict::{PredictionWindow, predict};
use crate::time::TimeSource;
use crate::types::{GeoPosition, SunPosition};

#[cfg(feature = "std")]
use crate::time::SystemClock;

/// Solar ephemeris bound to a clock.
///
/// # Example
/// ```
/// # use solar_ephemeris::{Ephemeris, FixedTime, GeoPosition};
/// let ephemeris = Ephemeris::new(FixedTime::from_julian_day(2_460_390.0));
/// let stockholm = GeoPosition::new(59.33, 18.07).unwrap();
///
/// // Explicit time and clock time agree when they are the same instant
/// let now = ephemeris.solar_elevation(stockholm, None);
/// let explicit = ephemeris.solar_elevation(stockholm, Some(ephemeris.now()));
/// assert_eq!(now, explicit);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris<C> {
    clock: C,
}

#[cfg(feature = "std")]
impl Ephemeris<SystemClock> {
    /// Ephemeris that reads the operating system's clock.
    #[must_use]
    pub const fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C> Ephemeris<C> {
    /// Binds an ephemeris to `clock`.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The underlying clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}

impl<C: TimeSource> Ephemeris<C> {
    /// Current time from the clock, in Julian Centuries.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.julian_centuries()
    }

    /// `t`, or the clock's current time when `t` is `None`.
    #[must_use]
    pub fn resolve(&self, t: Option<f64>) -> f64 {
        match t {
            Some(t) => t,
            None => self.now(),
        }
    }

    /// Elevation of the Sun in degrees.
    #[must_use]
    pub fn solar_elevation(&self, position: GeoPosition, t: Option<f64>) -> f64 {
        position::solar_elevation(position.latitude(), position.longitude(), self.resolve(t))
    }

    /// Snapshot of the Sun's elevation, declination, apparent longitude and equation of time.
    #[must_use]
    pub fn sun_position(&self, position: GeoPosition, t: Option<f64>) -> SunPosition {
        position::sun_position(position.latitude(), position.longitude(), self.resolve(t))
    }

    /// Whether the Sun rises and sets at this latitude on this date.
    #[must_use]
    pub fn has_sunrise_and_sunset(&self, position: GeoPosition, t: Option<f64>) -> bool {
        position::has_sunrise_and_sunset(position.latitude(), self.resolve(t))
    }

    /// Whether it is summer on the position's hemisphere.
    #[must_use]
    pub fn is_summer(&self, position: GeoPosition, t: Option<f64>) -> bool {
        position::is_summer(position.latitude(), self.resolve(t))
    }

    /// Whether it is winter on the position's hemisphere.
    #[must_use]
    pub fn is_winter(&self, position: GeoPosition, t: Option<f64>) -> bool {
        position::is_winter(position.latitude(), self.resolve(t))
    }

    /// Solar noon of the UTC day containing `t`, in Julian Centuries.
    #[must_use]
    pub fn solar_noon(&self, position: GeoPosition, t: Option<f64>) -> f64 {
        position::solar_noon(self.resolve(t), position.longitude())
    }

    /// Closed-form time of `elevation` on the day of `t`, in minutes after 00:00 UTC.
    ///
    /// `elevation` is in degrees but otherwise follows
    /// [`position::time_of_solar_elevation`]: its magnitude is measured from the zenith and its
    /// sign picks the morning (positive) or afternoon (negative) crossing.
    ///
    /// # Errors
    /// Returns `UnreachableElevation` when the Sun never gets there that day.
    pub fn time_of_solar_elevation(
        &self,
        position: GeoPosition,
        elevation: f64,
        t: Option<f64>,
    ) -> Result<f64> {
        let t = self.resolve(t);
        position::time_of_solar_elevation(
            t,
            position::solar_noon(t, position.longitude()),
            position.latitude(),
            position.longitude(),
            degrees_to_radians(elevation),
        )
    }

    /// Next equinox.
    #[must_use]
    pub fn future_equinox(&self, t: Option<f64>) -> Option<f64> {
        events::future_equinox(self.resolve(t))
    }

    /// Last equinox.
    #[must_use]
    pub fn past_equinox(&self, t: Option<f64>) -> Option<f64> {
        events::past_equinox(self.resolve(t))
    }

    /// Next solstice.
    #[must_use]
    pub fn future_solstice(&self, t: Option<f64>) -> Option<f64> {
        events::future_solstice(self.resolve(t))
    }

    /// Last solstice.
    #[must_use]
    pub fn past_solstice(&self, t: Option<f64>) -> Option<f64> {
        events::past_solstice(self.resolve(t))
    }

    /// Next time the Sun stands at `elevation` degrees.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::{Ephemeris, FixedTime, GeoPosition, Horizon};
    /// # use solar_ephemeris::time::julian_centuries_from_utc;
    /// let ephemeris = Ephemeris::new(FixedTime::from_epoch(0.0));
    /// let oslo = GeoPosition::new(59.91, 10.75).unwrap();
    /// let t = julian_centuries_from_utc(2024, 6, 1, 0, 0, 0.0).unwrap();
    /// let dawn = ephemeris
    ///     .future_elevation(oslo, Horizon::SunriseSunset.elevation_angle(), Some(t))
    ///     .unwrap();
    /// assert!(dawn > t);
    /// ```
    #[must_use]
    pub fn future_elevation(
        &self,
        position: GeoPosition,
        elevation: f64,
        t: Option<f64>,
    ) -> Option<f64> {
        events::future_elevation(
            position.latitude(),
            position.longitude(),
            elevation,
            self.resolve(t),
        )
    }

    /// Last time the Sun stood at `elevation` degrees.
    #[must_use]
    pub fn past_elevation(
        &self,
        position: GeoPosition,
        elevation: f64,
        t: Option<f64>,
    ) -> Option<f64> {
        events::past_elevation(
            position.latitude(),
            position.longitude(),
            elevation,
            self.resolve(t),
        )
    }

    /// Next time the elevation changes at `derivative` degrees per Julian Century.
    #[must_use]
    pub fn future_elevation_derivative(
        &self,
        position: GeoPosition,
        derivative: f64,
        t: Option<f64>,
    ) -> Option<f64> {
        events::future_elevation_derivative(
            position.latitude(),
            position.longitude(),
            derivative,
            self.resolve(t),
        )
    }

    /// Last time the elevation changed at `derivative` degrees per Julian Century.
    #[must_use]
    pub fn past_elevation_derivative(
        &self,
        position: GeoPosition,
        derivative: f64,
        t: Option<f64>,
    ) -> Option<f64> {
        events::past_elevation_derivative(
            position.latitude(),
            position.longitude(),
            derivative,
            self.resolve(t),
        )
    }

    /// Runs the generic predictor on any function of time, starting at `t` or now.
    pub fn predict<F>(
        &self,
        window: &PredictionWindow,
        target: f64,
        f: F,
        t: Option<f64>,
    ) -> Option<f64>
    where
        F: Fn(f64) -> f64,
    {
        predict(window, target, f, self.resolve(t))
    }
}
