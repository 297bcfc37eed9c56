//! Tests for the clock-driven API without chrono

use std::cell::Cell;

use solar_ephemeris::predict::{Direction, PredictionWindow};
use solar_ephemeris::time::{
    epoch_to_julian_centuries, julian_centuries_from_utc, julian_centuries_to_epoch,
};
use solar_ephemeris::{
    Ephemeris, Error, FixedTime, GeoPosition, SOLAR_ELEVATION_RANGE_GOLDEN_HOUR,
    SOLAR_ELEVATION_SUNSET_SUNRISE, TimeSource,
};

/// Clock that advances one hour every time it is read.
struct SteppingClock {
    epoch: Cell<f64>,
}

impl TimeSource for SteppingClock {
    fn epoch(&self) -> f64 {
        let now = self.epoch.get();
        self.epoch.set(now + 3600.0);
        now
    }
}

fn stockholm() -> GeoPosition {
    GeoPosition::new(59.33, 18.07).unwrap()
}

#[test]
fn test_each_defaulted_call_sees_one_instant() {
    let start = julian_centuries_to_epoch(julian_centuries_from_utc(2024, 3, 1, 0, 0, 0.0).unwrap());
    let ephemeris = Ephemeris::new(SteppingClock {
        epoch: Cell::new(start),
    });

    // First call reads 00:00, second reads 01:00
    let first = ephemeris
        .future_elevation(stockholm(), SOLAR_ELEVATION_SUNSET_SUNRISE, None)
        .unwrap();
    let second = ephemeris
        .future_elevation(stockholm(), SOLAR_ELEVATION_SUNSET_SUNRISE, None)
        .unwrap();
    // Both searches start before the same sunrise
    let seconds = (first - second).abs() * 36_525.0 * 86_400.0;
    assert!(seconds < 1.0, "{seconds}s apart");

    // The clock advanced exactly twice
    let expected = start + 2.0 * 3600.0;
    assert!((ephemeris.clock().epoch.get() - expected).abs() < 1e-6);
}

#[test]
fn test_clock_through_reference() {
    let clock = FixedTime::from_epoch(1_709_251_200.0);
    let ephemeris = Ephemeris::new(&clock);
    assert_eq!(ephemeris.now(), epoch_to_julian_centuries(1_709_251_200.0));
}

#[test]
fn test_sun_position_snapshot() {
    // 2024-06-21 10:00 UTC
    let ephemeris = Ephemeris::new(FixedTime::from_epoch(1_718_964_000.0));
    let position = ephemeris.sun_position(stockholm(), None);

    assert!((position.elevation() - 53.05).abs() < 0.01);
    assert!((position.declination() - 23.4376).abs() < 0.001);
    assert!((position.apparent_longitude() - 90.52).abs() < 0.01);
    assert!((position.equation_of_time() + 1.907).abs() < 0.01);
    assert!(!position.is_within(SOLAR_ELEVATION_RANGE_GOLDEN_HOUR));
}

#[test]
fn test_seasons_by_hemisphere() {
    let june = Ephemeris::new(FixedTime::from_epoch(1_718_964_000.0));
    let sydney = GeoPosition::new(-33.87, 151.21).unwrap();

    assert!(june.is_summer(stockholm(), None));
    assert!(june.is_winter(sydney, None));
    assert!(june.has_sunrise_and_sunset(stockholm(), None));
}

#[test]
fn test_solar_noon_is_culmination() {
    let ephemeris = Ephemeris::new(FixedTime::from_epoch(1_718_964_000.0));
    let noon = ephemeris.solar_noon(stockholm(), None);
    let culmination = ephemeris
        .past_elevation_derivative(stockholm(), 0.0, Some(noon + 0.00001))
        .unwrap();

    // Within a minute of each other
    assert!((noon - culmination).abs() * 36_525.0 * 1440.0 < 1.0);
}

#[test]
fn test_custom_window() {
    let ephemeris = Ephemeris::new(FixedTime::from_julian_centuries(0.0));
    let narrow = PredictionWindow::towards(Direction::Future)
        .with_span(0.001)
        .unwrap();

    assert_eq!(ephemeris.predict(&narrow, 5.0, |t| 1000.0 * t, None), None);
    assert!(ephemeris.predict(&narrow, 0.5, |t| 1000.0 * t, None).is_some());
}

#[test]
fn test_invalid_inputs() {
    assert!(matches!(
        GeoPosition::new(-90.5, 0.0),
        Err(Error::InvalidLatitude { .. })
    ));
    assert!(matches!(
        GeoPosition::new(0.0, f64::NAN),
        Err(Error::InvalidLongitude { .. })
    ));
    assert!(matches!(
        PredictionWindow::new(0.0, 1e-6, 0.01),
        Err(Error::InvalidPredictionWindow { .. })
    ));
    assert!(matches!(
        julian_centuries_from_utc(2024, 2, 30, 0, 0, 0.0),
        Err(Error::InvalidDateTime { .. })
    ));
}
