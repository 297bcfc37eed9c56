//! Error types for the solar ephemeris library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during solar ephemeris calculations.
///
/// Event searches that find nothing are not errors; they return `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be finite).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid elevation angle (must be between -90 and +90 degrees).
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid date/time components.
    InvalidDateTime {
        /// Description of the date/time constraint violation.
        message: &'static str,
    },
    /// Invalid step, tolerance or span for an event search.
    InvalidPredictionWindow {
        /// Description of the window constraint violation.
        message: &'static str,
    },
    /// The requested elevation is never reached at this latitude and declination
    /// (polar day or polar night).
    UnreachableElevation {
        /// Observer latitude in degrees.
        latitude: f64,
        /// Solar declination in radians.
        declination: f64,
        /// Requested elevation in radians.
        elevation: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(f, "invalid longitude {value}° (must be finite)")
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date/time: {message}")
            }
            Self::InvalidPredictionWindow { message } => {
                write!(f, "invalid prediction window: {message}")
            }
            Self::UnreachableElevation {
                latitude,
                declination,
                elevation,
            } => {
                write!(
                    f,
                    "elevation {elevation} rad is unreachable at latitude {latitude}° \
                     with declination {declination} rad"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date/time error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates an invalid prediction window error.
    #[must_use]
    pub const fn invalid_prediction_window(message: &'static str) -> Self {
        Self::InvalidPredictionWindow { message }
    }

    /// Creates an unreachable elevation error.
    #[must_use]
    pub const fn unreachable_elevation(latitude: f64, declination: f64, elevation: f64) -> Self {
        Self::UnreachableElevation {
            latitude,
            declination,
            elevation,
        }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees or not a number.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is finite.
///
/// Longitude is an eastward offset from Greenwich and is not range-limited; values outside
/// ±180° are equivalent to their wrapped counterparts in every formula.
///
/// # Errors
/// Returns `InvalidLongitude` for NaN or infinite longitude.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !longitude.is_finite() {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Validates an elevation angle is within -90 to +90 degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` for values outside that range or NaN.
pub fn check_elevation_angle(elevation: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(())
}
