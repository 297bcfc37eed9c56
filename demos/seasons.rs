//! Equinoxes and solstices for the coming years.

use chrono::{TimeZone, Utc};
use solar_ephemeris::{events, time};

// About 1.8 days, enough to step past an event that was just found
const SKIP: f64 = 0.00005;

fn main() {
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let mut t = time::julian_centuries_from_datetime(&start);

    println!("Equinoxes and solstices from {}\n", start.format("%Y-%m-%d"));

    for _ in 0..8 {
        let equinox = events::future_equinox(t);
        let solstice = events::future_solstice(t);

        // Whichever comes first is the next season boundary
        let (kind, found) = match (equinox, solstice) {
            (Some(e), Some(s)) if e < s => ("Equinox ", e),
            (_, Some(s)) => ("Solstice", s),
            (Some(e), None) => ("Equinox ", e),
            (None, None) => {
                println!("No event within a year");
                return;
            }
        };

        match time::datetime_from_julian_centuries(found) {
            Some(datetime) => println!("{kind}  {}", datetime.format("%Y-%m-%d %H:%M UTC")),
            None => println!("{kind}  t = {found:.9}"),
        }

        t = found + SKIP;
    }
}
