//! Dawn and dusk thresholds for one day at one place.

use chrono::{TimeZone, Utc};
use solar_ephemeris::{
    Horizon, SOLAR_ELEVATION_RANGE_BLUE_HOUR, SOLAR_ELEVATION_RANGE_GOLDEN_HOUR, events, time,
};

fn main() {
    // Stockholm, March 1, 2024
    let latitude = 59.33;
    let longitude = 18.07;
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let t = time::julian_centuries_from_datetime(&start);

    println!("Twilight for Stockholm starting {}\n", start.format("%Y-%m-%d %H:%M UTC"));

    let horizons = [
        ("Astronomical", Horizon::AstronomicalTwilight),
        ("Nautical", Horizon::NauticalTwilight),
        ("Civil", Horizon::CivilTwilight),
        ("Sunrise/sunset", Horizon::SunriseSunset),
    ];

    for (name, horizon) in horizons {
        let elevation = horizon.elevation_angle();
        let dawn = events::future_elevation(latitude, longitude, elevation, t)
            .and_then(time::datetime_from_julian_centuries);
        let dusk = events::past_elevation(latitude, longitude, elevation, t)
            .and_then(time::datetime_from_julian_centuries);

        println!("{name:>16} ({elevation:>6.2}°)");
        match dusk {
            Some(dusk) => println!("{:>18}previous dusk: {}", "", dusk.format("%H:%M:%S")),
            None => println!("{:>18}previous dusk: none within a year", ""),
        }
        match dawn {
            Some(dawn) => println!("{:>18}next dawn:     {}", "", dawn.format("%H:%M:%S")),
            None => println!("{:>18}next dawn:     none within a year", ""),
        }
    }

    println!("\nLight ranges:");
    for (name, range) in [
        ("Blue hour", SOLAR_ELEVATION_RANGE_BLUE_HOUR),
        ("Golden hour", SOLAR_ELEVATION_RANGE_GOLDEN_HOUR),
    ] {
        let start = events::future_elevation(latitude, longitude, range.lowest(), t)
            .and_then(time::datetime_from_julian_centuries);
        let end = events::future_elevation(latitude, longitude, range.highest(), t)
            .and_then(time::datetime_from_julian_centuries);
        if let (Some(start), Some(end)) = (start, end) {
            println!(
                "  Morning {name}: {} - {}",
                start.format("%H:%M"),
                end.format("%H:%M")
            );
        }
    }
}
