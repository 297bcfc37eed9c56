//! Example demonstrating usage without chrono.
//!
//! Everything below is available in `no_std` builds with the `libm` feature; only the
//! printing needs std. Callers supply time as calendar components or Julian Centuries.

use solar_ephemeris::{
    SOLAR_ELEVATION_SUNSET_SUNRISE, events, geometry, math, position, time,
};

fn main() {
    // Example: 2024-06-21 12:00:00 UTC in Vienna, 48.21°N, 16.37°E
    println!("Solar ephemeris without chrono\n");

    let jd = time::julian_day_from_utc(2024, 6, 21, 12, 0, 0.0).expect("Valid date");
    let t = time::julian_day_to_julian_centuries(jd);

    println!("Julian Day: {jd:.6}");
    println!("Julian Centuries: {t:.9}\n");

    println!("Geometry:");
    println!(
        "  Declination: {:.4}°",
        math::radians_to_degrees(geometry::solar_declination(t))
    );
    println!(
        "  Apparent longitude: {:.4}°",
        math::radians_to_degrees(geometry::sun_apparent_longitude(t))
    );
    println!("  Equation of time: {:.3} min\n", geometry::equation_of_time(t));

    println!("Position:");
    println!("  Elevation: {:.3}°", position::solar_elevation(48.21, 16.37, t));
    let noon_minutes = position::time_of_solar_noon(t, 16.37);
    println!(
        "  Solar noon: {:02}:{:02} UTC",
        (noon_minutes / 60.0) as u32,
        (noon_minutes % 60.0) as u32
    );
    println!(
        "  Sunrise and sunset today: {}\n",
        position::has_sunrise_and_sunset(48.21, t)
    );

    // Events come back as Julian Centuries; convert to Julian Day for display
    if let Some(sunset) = events::future_elevation(48.21, 16.37, SOLAR_ELEVATION_SUNSET_SUNRISE, t) {
        println!("Next sunset: JD {:.5}", time::julian_centuries_to_julian_day(sunset));
    }
    if let Some(solstice) = events::future_solstice(t) {
        println!("Next solstice: JD {:.5}", time::julian_centuries_to_julian_day(solstice));
    }
}
