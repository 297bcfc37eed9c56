//! Basic solar elevation and position example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_ephemeris::{Ephemeris, GeoPosition, Horizon, SOLAR_ELEVATION_RANGE_GOLDEN_HOUR, position, time};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Same instant as a FixedOffset and as UTC
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc
        .with_ymd_and_hms(2023, 6, 21, 19, 0, 0)
        .single()
        .ok_or("ambiguous date")?; // 19:00 UTC = 12:00 PDT
    let san_francisco = GeoPosition::new(37.7749, -122.4194)?;

    let t_fixed = time::julian_centuries_from_datetime(&datetime_fixed);
    let t_utc = time::julian_centuries_from_datetime(&datetime_utc);

    let position_fixed =
        position::sun_position(san_francisco.latitude(), san_francisco.longitude(), t_fixed);
    let position_utc =
        position::sun_position(san_francisco.latitude(), san_francisco.longitude(), t_utc);

    println!("Sun for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Julian Centuries: {t_fixed:.9}");
    println!("  Elevation: {:.3}°", position_fixed.elevation());
    println!("  Declination: {:.3}°", position_fixed.declination());
    println!("  Apparent longitude: {:.3}°", position_fixed.apparent_longitude());
    println!("  Equation of time: {:.2} min", position_fixed.equation_of_time());
    println!(
        "\nFixedOffset and UTC give identical results: {}",
        position_fixed == position_utc
    );

    if position_fixed.is_above(Horizon::SunriseSunset) {
        println!("  Sun is above the horizon");
    } else {
        println!("  Sun is below the horizon");
    }

    // Example 2: Solar noon for the same day
    let noon = position::solar_noon(t_utc, san_francisco.longitude());
    if let Some(noon) = time::datetime_from_julian_centuries(noon) {
        println!("\nSolar noon: {}", noon.format("%Y-%m-%d %H:%M:%S UTC"));
    }

    // Example 3: Right now, through the system clock
    let ephemeris = Ephemeris::system();
    let now = ephemeris.sun_position(san_francisco, None);
    println!("\nCurrent elevation: {:.3}°", now.elevation());
    if now.is_within(SOLAR_ELEVATION_RANGE_GOLDEN_HOUR) {
        println!("  It is golden hour");
    }
    if ephemeris.is_summer(san_francisco, None) {
        println!("  It is summer in the northern hemisphere");
    }

    Ok(())
}
