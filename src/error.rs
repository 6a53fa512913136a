//! Error types for the daylight-hours library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur during daylight calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid calendar date (out-of-range component or malformed ISO-8601 string).
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// Degenerate latitude/declination geometry for the hour-angle formula.
    ///
    /// Occurs when `cos(latitude) * cos(declination)` is exactly zero, i.e.
    /// at a pole, where the sunrise hour angle is undefined.
    DegenerateGeometry {
        /// The latitude (in degrees) that produced the degeneracy.
        latitude: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::DegenerateGeometry { latitude } => {
                write!(
                    f,
                    "degenerate geometry at latitude {latitude}° (sunrise hour angle is undefined)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Creates a degenerate geometry error.
    #[must_use]
    pub const fn degenerate_geometry(latitude: f64) -> Self {
        Self::DegenerateGeometry { latitude }
    }
}
