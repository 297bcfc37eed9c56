//! # Solar Ephemeris Library
//!
//! Low-precision solar ephemeris: the Sun's elevation, declination, apparent longitude and the
//! equation of time, solar noon, and the times of recurring solar events.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The position of the Sun comes from a closed-form formula chain (Meeus, low accuracy; the
//! same chain as the NOAA solar calculator). Events are found by inverting that chain
//! numerically: one generic predictor brackets a target value by stepping through time and
//! then bisects the bracket. The same predictor finds:
//!
//! - **Equinoxes**: solar declination crosses zero
//! - **Solstices**: the rate of change of declination crosses zero
//! - **Sunrise, sunset and twilight**: solar elevation reaches a threshold
//! - **Culmination**: the rate of change of elevation reaches a value (zero at solar noon)
//!
//! All time values are Julian Centuries since J2000.0 (`f64`). See [`time`] for conversions
//! from POSIX time, Julian Days, calendar dates and chrono `DateTime`s.
//!
//! ## Features
//!
//! - `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Stateless functions; the only side effect is reading an injectable clock
//! - Optional diagnostics through the `log` facade
//!
//! ## Feature Flags
//!
//! - `std` (default): Native float math, [`SystemClock`] and `std::error::Error`
//! - `chrono` (default): `DateTime` conversions in [`time`]
//! - `libm`: Pure Rust math for `no_std` environments
//! - `log`: Report search diagnostics through the `log` crate
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! solar-ephemeris = "0.1"
//!
//! # Minimal std (no chrono)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! solar-ephemeris = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell. Chapter 25.
//! - NOAA Global Monitoring Laboratory, Solar Calculation Details.
//!   <https://gml.noaa.gov/grad/solcalc/calcdetails.html>
//!
//! ## Quick Start
//!
//! ### Elevation (numeric API, no chrono)
//! ```rust
//! use solar_ephemeris::{position, time};
//!
//! // Stockholm at 2024-06-21 10:00 UTC
//! let t = time::julian_centuries_from_utc(2024, 6, 21, 10, 0, 0.0).unwrap();
//! let elevation = position::solar_elevation(59.33, 18.07, t);
//!
//! println!("Elevation: {elevation:.3}°");
//! assert!(elevation > 50.0 && elevation < 55.0);
//! ```
//!
//! ### Events (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use solar_ephemeris::{events, time, SOLAR_ELEVATION_CIVIL_DUSK_DAWN};
//! use chrono::{DateTime, Utc};
//!
//! let start = "2024-03-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
//! let t = time::julian_centuries_from_datetime(&start);
//!
//! let equinox = events::future_equinox(t).and_then(time::datetime_from_julian_centuries);
//! let dawn = events::future_elevation(59.33, 18.07, SOLAR_ELEVATION_CIVIL_DUSK_DAWN, t)
//!     .and_then(time::datetime_from_julian_centuries);
//!
//! println!("Next equinox: {}", equinox.unwrap());
//! println!("Civil dawn: {}", dawn.unwrap());
//! # }
//! ```
//!
//! ### Current time through a clock
//! ```rust
//! use solar_ephemeris::{Ephemeris, FixedTime, GeoPosition};
//!
//! // Any `TimeSource` works; `Ephemeris::system()` reads the OS clock
//! let ephemeris = Ephemeris::new(FixedTime::from_epoch(1_718_964_000.0));
//! let vienna = GeoPosition::new(48.21, 16.37).unwrap();
//!
//! let position = ephemeris.sun_position(vienna, None);
//! println!("Declination: {:.3}°", position.declination());
//! assert!(ephemeris.is_summer(vienna, None));
//! ```
//!
//! ## Conventions
//!
//! - **Latitude**: degrees, positive north (-90° to +90°)
//! - **Longitude**: degrees, positive east of Greenwich
//! - **Elevation angle**: 0° = horizon, 90° = directly overhead (-90° to +90°)
//! - **Equation of time**: minutes, apparent minus mean solar time

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::ephemeris::Ephemeris;
pub use crate::error::{Error, Result};
pub use crate::predict::{Direction, PredictionWindow};
#[cfg(feature = "std")]
pub use crate::time::SystemClock;
pub use crate::time::{FixedTime, TimeSource};
pub use crate::types::{
    ElevationRange, GeoPosition, Horizon, SOLAR_APPARENT_RADIUS,
    SOLAR_ELEVATION_AMATEUR_ASTRONOMICAL_DUSK_DAWN, SOLAR_ELEVATION_ASTRONOMICAL_DUSK_DAWN,
    SOLAR_ELEVATION_CIVIL_DUSK_DAWN, SOLAR_ELEVATION_NAUTICAL_DUSK_DAWN,
    SOLAR_ELEVATION_PRESUNSET_POSTSUNRISE, SOLAR_ELEVATION_RANGE_AMATEUR_ASTRONOMICAL_TWILIGHT,
    SOLAR_ELEVATION_RANGE_ASTRONOMICAL_TWILIGHT, SOLAR_ELEVATION_RANGE_BLUE_HOUR,
    SOLAR_ELEVATION_RANGE_CIVIL_TWILIGHT, SOLAR_ELEVATION_RANGE_GOLDEN_HOUR,
    SOLAR_ELEVATION_RANGE_NAUTICAL_TWILIGHT, SOLAR_ELEVATION_RANGE_TWILIGHT,
    SOLAR_ELEVATION_SUNSET_SUNRISE, SunPosition,
};

// Formula modules
pub mod geometry;
pub mod position;

// Event search
pub mod events;
pub mod predict;

// Core modules
pub mod ephemeris;
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;

// README snippets compile as doctests
#[cfg(all(doctest, feature = "std"))]
#[doc = include_str!("../README.md")]
struct ReadmeDoctests;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_timezones_give_identical_elevation() {
        let datetime_fixed = "2023-06-21T12:00:00-07:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap();

        let t1 = time::julian_centuries_from_datetime(&datetime_fixed);
        let t2 = time::julian_centuries_from_datetime(&datetime_utc);
        assert_eq!(t1, t2);

        let elevation1 = position::solar_elevation(37.7749, -122.4194, t1);
        let elevation2 = position::solar_elevation(37.7749, -122.4194, t2);
        assert!((elevation1 - elevation2).abs() < 1e-10);
        assert!(elevation1 > 60.0 && elevation1 < 80.0, "got {elevation1}");
    }

    #[test]
    fn test_sunrise_sunset_round_trip_through_chrono() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let t = time::julian_centuries_from_datetime(&start);

        let sunrise = events::future_elevation(59.33, 18.07, SOLAR_ELEVATION_SUNSET_SUNRISE, t)
            .and_then(time::datetime_from_julian_centuries)
            .unwrap();
        let sunset = events::past_elevation(59.33, 18.07, SOLAR_ELEVATION_SUNSET_SUNRISE, t)
            .and_then(time::datetime_from_julian_centuries)
            .unwrap();

        assert_eq!(sunrise.format("%Y-%m-%d %H:%M").to_string(), "2024-03-01 05:46");
        assert_eq!(sunset.format("%Y-%m-%d %H:%M").to_string(), "2024-02-29 16:12");
    }
}
