//! Elevation thresholds and the value types passed through the calculations.
//!
//! All angles in this module are in degrees.

use crate::error::{check_coordinates, check_elevation_angle};
use crate::Result;

/// Approximate apparent size of the Sun, in degrees.
pub const SOLAR_APPARENT_RADIUS: f64 = 32.0 / 60.0;

/// Elevation at the beginning of sunset and the end of sunrise.
pub const SOLAR_ELEVATION_PRESUNSET_POSTSUNRISE: f64 = 32.0 / 60.0;

/// Elevation at the end of sunset and the beginning of sunrise.
pub const SOLAR_ELEVATION_SUNSET_SUNRISE: f64 = -32.0 / 60.0;

/// Elevation at civil dusk and civil dawn.
pub const SOLAR_ELEVATION_CIVIL_DUSK_DAWN: f64 = -6.0;

/// Elevation at nautical dusk and nautical dawn.
pub const SOLAR_ELEVATION_NAUTICAL_DUSK_DAWN: f64 = -12.0;

/// Elevation at amateur astronomical dusk and dawn.
pub const SOLAR_ELEVATION_AMATEUR_ASTRONOMICAL_DUSK_DAWN: f64 = -15.0;

/// Elevation at astronomical dusk and astronomical dawn.
pub const SOLAR_ELEVATION_ASTRONOMICAL_DUSK_DAWN: f64 = -18.0;

/// Elevation range spanning all kinds of twilight.
pub const SOLAR_ELEVATION_RANGE_TWILIGHT: ElevationRange = ElevationRange::new(-18.0, 0.0);

/// Elevation range of civil twilight.
pub const SOLAR_ELEVATION_RANGE_CIVIL_TWILIGHT: ElevationRange =
    ElevationRange::new(SOLAR_ELEVATION_CIVIL_DUSK_DAWN, SOLAR_ELEVATION_SUNSET_SUNRISE);

/// Elevation range of nautical twilight.
pub const SOLAR_ELEVATION_RANGE_NAUTICAL_TWILIGHT: ElevationRange =
    ElevationRange::new(SOLAR_ELEVATION_NAUTICAL_DUSK_DAWN, SOLAR_ELEVATION_SUNSET_SUNRISE);

/// Elevation range of astronomical twilight.
pub const SOLAR_ELEVATION_RANGE_ASTRONOMICAL_TWILIGHT: ElevationRange = ElevationRange::new(
    SOLAR_ELEVATION_ASTRONOMICAL_DUSK_DAWN,
    SOLAR_ELEVATION_SUNSET_SUNRISE,
);

/// Elevation range of amateur astronomical twilight.
pub const SOLAR_ELEVATION_RANGE_AMATEUR_ASTRONOMICAL_TWILIGHT: ElevationRange = ElevationRange::new(
    SOLAR_ELEVATION_ASTRONOMICAL_DUSK_DAWN,
    SOLAR_ELEVATION_AMATEUR_ASTRONOMICAL_DUSK_DAWN,
);

/// Approximate elevation range of the golden hour.
pub const SOLAR_ELEVATION_RANGE_GOLDEN_HOUR: ElevationRange = ElevationRange::new(-4.0, 6.0);

/// Approximate elevation range of the blue hour.
pub const SOLAR_ELEVATION_RANGE_BLUE_HOUR: ElevationRange = ElevationRange::new(-6.0, -4.0);

/// Named elevation thresholds for sunrise, sunset and the twilight boundaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Upper limb of the Sun just below the horizon (end of sunset, start of sunrise)
    SunriseSunset,
    /// Lower limb of the Sun just above the horizon (start of sunset, end of sunrise)
    PresunsetPostsunrise,
    /// Civil dusk/dawn (6° below horizon)
    CivilTwilight,
    /// Nautical dusk/dawn (12° below horizon)
    NauticalTwilight,
    /// Amateur astronomical dusk/dawn (15° below horizon)
    AmateurAstronomicalTwilight,
    /// Astronomical dusk/dawn (18° below horizon)
    AstronomicalTwilight,
    /// Custom elevation angle
    Custom(f64),
}

impl Horizon {
    /// Gets the elevation angle in degrees for this horizon definition.
    ///
    /// Negative values indicate the sun is below the horizon.
    #[must_use]
    pub const fn elevation_angle(&self) -> f64 {
        match self {
            Self::SunriseSunset => SOLAR_ELEVATION_SUNSET_SUNRISE,
            Self::PresunsetPostsunrise => SOLAR_ELEVATION_PRESUNSET_POSTSUNRISE,
            Self::CivilTwilight => SOLAR_ELEVATION_CIVIL_DUSK_DAWN,
            Self::NauticalTwilight => SOLAR_ELEVATION_NAUTICAL_DUSK_DAWN,
            Self::AmateurAstronomicalTwilight => SOLAR_ELEVATION_AMATEUR_ASTRONOMICAL_DUSK_DAWN,
            Self::AstronomicalTwilight => SOLAR_ELEVATION_ASTRONOMICAL_DUSK_DAWN,
            Self::Custom(angle) => *angle,
        }
    }

    /// Creates a custom horizon with the specified elevation angle.
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn custom(elevation_degrees: f64) -> Result<Self> {
        check_elevation_angle(elevation_degrees)?;
        Ok(Self::Custom(elevation_degrees))
    }
}

/// Closed range of solar elevations, lowest first.
///
/// # Example
/// ```
/// # use solar_ephemeris::types::SOLAR_ELEVATION_RANGE_BLUE_HOUR;
/// assert!(SOLAR_ELEVATION_RANGE_BLUE_HOUR.contains(-5.0));
/// assert!(!SOLAR_ELEVATION_RANGE_BLUE_HOUR.contains(-3.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElevationRange {
    lowest: f64,
    highest: f64,
}

impl ElevationRange {
    /// Creates a range from its lowest and highest elevation.
    #[must_use]
    pub const fn new(lowest: f64, highest: f64) -> Self {
        Self { lowest, highest }
    }

    /// Lowest elevation of the range.
    #[must_use]
    pub const fn lowest(&self) -> f64 {
        self.lowest
    }

    /// Highest elevation of the range.
    #[must_use]
    pub const fn highest(&self) -> f64 {
        self.highest
    }

    /// Whether an elevation lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, elevation: f64) -> bool {
        (self.lowest..=self.highest).contains(&elevation)
    }
}

/// Observer location on Earth.
///
/// Latitude is northward-positive in [-90, 90]; longitude is eastward-positive from Greenwich
/// and only required to be finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPosition {
    latitude: f64,
    longitude: f64,
}

impl GeoPosition {
    /// Creates a validated position.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    ///
    /// # Example
    /// ```
    /// # use solar_ephemeris::GeoPosition;
    /// let stockholm = GeoPosition::new(59.33, 18.07).unwrap();
    /// assert_eq!(stockholm.latitude(), 59.33);
    /// assert!(GeoPosition::new(91.0, 0.0).is_err());
    /// ```
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Apparent position of the Sun for one instant and observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Elevation above the horizon in degrees
    elevation: f64,
    /// Declination in degrees
    declination: f64,
    /// Apparent ecliptic longitude in degrees, [0, 360)
    apparent_longitude: f64,
    /// Equation of time in minutes
    equation_of_time: f64,
}

impl SunPosition {
    /// Creates a position from its components, all in degrees except the equation of time.
    #[must_use]
    pub const fn new(
        elevation: f64,
        declination: f64,
        apparent_longitude: f64,
        equation_of_time: f64,
    ) -> Self {
        Self {
            elevation,
            declination,
            apparent_longitude,
            equation_of_time,
        }
    }

    /// Elevation above the horizon in degrees.
    #[must_use]
    pub const fn elevation(&self) -> f64 {
        self.elevation
    }

    /// Declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Apparent ecliptic longitude in degrees.
    #[must_use]
    pub const fn apparent_longitude(&self) -> f64 {
        self.apparent_longitude
    }

    /// Equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }

    /// Whether the Sun is above the given horizon.
    #[must_use]
    pub fn is_above(&self, horizon: Horizon) -> bool {
        self.elevation > horizon.elevation_angle()
    }

    /// Whether the Sun's elevation lies inside the given range.
    #[must_use]
    pub fn is_within(&self, range: ElevationRange) -> bool {
        range.contains(self.elevation)
    }
}
