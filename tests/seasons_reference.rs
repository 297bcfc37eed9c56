#![cfg(feature = "chrono")]

//! Equinox and solstice times for 2020-2023 against published values.

use chrono::{DateTime, NaiveDateTime, Utc};
use solar_ephemeris::events::{
    DERIVATIVE_OFFSET, future_equinox, future_solstice, past_equinox, past_solstice,
    symmetric_derivative,
};
use solar_ephemeris::geometry::solar_declination;
use solar_ephemeris::time::{datetime_from_julian_centuries, julian_centuries_from_datetime};

// About 1.8 days, enough to step past an event that was just found
const SKIP: f64 = 0.00005;

/// Equinoxes: this model's result and the USNO published minute.
const EQUINOXES: [(&str, &str); 8] = [
    ("2020-03-20 03:53:09", "2020-03-20 03:50:00"),
    ("2020-09-22 13:29:23", "2020-09-22 13:31:00"),
    ("2021-03-20 09:41:51", "2021-03-20 09:37:00"),
    ("2021-09-22 19:17:19", "2021-09-22 19:21:00"),
    ("2022-03-20 15:29:55", "2022-03-20 15:33:00"),
    ("2022-09-23 01:04:28", "2022-09-23 01:04:00"),
    ("2023-03-20 21:17:20", "2023-03-20 21:24:00"),
    ("2023-09-23 06:50:59", "2023-09-23 06:50:00"),
];

/// Solstices: this model's result and the USNO published minute.
const SOLSTICES: [(&str, &str); 8] = [
    ("2020-06-20 21:43:52", "2020-06-20 21:44:00"),
    ("2020-12-21 10:02:58", "2020-12-21 10:02:00"),
    ("2021-06-21 03:31:20", "2021-06-21 03:32:00"),
    ("2021-12-21 15:51:40", "2021-12-21 15:59:00"),
    ("2022-06-21 09:18:00", "2022-06-21 09:14:00"),
    ("2022-12-21 21:39:41", "2022-12-21 21:48:00"),
    ("2023-06-21 15:03:58", "2023-06-21 14:58:00"),
    ("2023-12-22 03:27:09", "2023-12-22 03:27:00"),
];

fn utc(text: &str) -> DateTime<Utc> {
    NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S")
        .unwrap()
        .and_utc()
}

fn minutes_between(a: DateTime<Utc>, b: DateTime<Utc>) -> f64 {
    (a - b).num_seconds().abs() as f64 / 60.0
}

fn start() -> f64 {
    julian_centuries_from_datetime(&utc("2020-01-01 00:00:00"))
}

#[test]
fn equinoxes_match_model_and_published_times() {
    let mut t = start();
    for (model, published) in EQUINOXES {
        let found = future_equinox(t).unwrap();
        let datetime = datetime_from_julian_centuries(found).unwrap();

        assert!(
            minutes_between(datetime, utc(model)) < 2.0,
            "expected {model}, got {datetime}"
        );
        assert!(
            minutes_between(datetime, utc(published)) < 15.0,
            "published {published}, got {datetime}"
        );
        assert!(solar_declination(found).abs() < 1e-6);

        t = found + SKIP;
    }
}

#[test]
fn solstices_match_model_and_published_times() {
    let rate = symmetric_derivative(solar_declination, DERIVATIVE_OFFSET);
    let mut t = start();
    for (model, published) in SOLSTICES {
        let found = future_solstice(t).unwrap();
        let datetime = datetime_from_julian_centuries(found).unwrap();

        // The derivative is flat near a solstice, so the time is less sharply defined
        assert!(
            minutes_between(datetime, utc(model)) < 30.0,
            "expected {model}, got {datetime}"
        );
        assert!(
            minutes_between(datetime, utc(published)) < 30.0,
            "published {published}, got {datetime}"
        );
        assert!(rate(found).abs() < 1e-4);

        t = found + SKIP;
    }
}

#[test]
fn past_and_future_events_alternate() {
    let t = julian_centuries_from_datetime(&utc("2022-05-01 00:00:00"));

    let previous_equinox = past_equinox(t).unwrap();
    let next_equinox = future_equinox(t).unwrap();
    let next_solstice = future_solstice(t).unwrap();
    let previous_solstice = past_solstice(t).unwrap();

    // December solstice, March equinox, (start), June solstice, September equinox
    assert!(previous_solstice < previous_equinox);
    assert!(previous_equinox < t);
    assert!(t < next_solstice);
    assert!(next_solstice < next_equinox);

    let march = datetime_from_julian_centuries(previous_equinox).unwrap();
    assert!(minutes_between(march, utc("2022-03-20 15:29:55")) < 2.0);
}

#[test]
fn equinoxes_are_about_half_a_year_apart() {
    let t = start();
    let first = future_equinox(t).unwrap();
    let second = future_equinox(first + SKIP).unwrap();
    let days = (second - first) * 36_525.0;
    assert!((days - 186.4).abs() < 1.0, "got {days} days");
}
