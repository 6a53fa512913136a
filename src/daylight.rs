//! Daylight duration calculation with polar day/night classification.

use crate::date::Date;
use crate::declination::solar_declination_from_ordinal;
use crate::math::{acos, cos, degrees_to_radians, radians_to_degrees, sin};
use crate::types::DaylightResult;
use crate::{Error, Result};

/// Sunrise/sunset elevation angle in degrees.
///
/// Accounts for atmospheric refraction and the apparent radius of the
/// solar disk: the sun is considered risen while its center is up to
/// 0.833° below the geometric horizon.
pub const SUNRISE_SUNSET_ELEVATION_DEG: f64 = -0.833;

/// Degrees of sunrise hour angle per hour of daylight.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Calculates the daylight duration at a latitude on a date.
///
/// Latitude is in degrees, positive north. The domain is deliberately not
/// restricted to ±90°; out-of-range values yield mathematically degenerate
/// but well-defined results.
///
/// # Errors
/// Returns `DegenerateGeometry` if `cos(latitude) * cos(declination)` is
/// exactly zero, which leaves the sunrise hour angle undefined.
///
/// # Example
/// ```
/// # use daylight_hours::{daylight_hours, Date};
/// let date = Date::new(2024, 6, 21).unwrap();
/// let result = daylight_hours(40.0, date).unwrap();
/// assert!(result.is_normal_day());
/// assert!(result.hours() > 14.0 && result.hours() < 16.0);
/// ```
pub fn daylight_hours(latitude: f64, date: Date) -> Result<DaylightResult> {
    daylight_hours_from_ordinal(latitude, date.ordinal())
}

/// Calculates the daylight duration at a latitude for a 1-based day-of-year.
///
/// Numeric entry point used by the yearly table generator; see
/// [`daylight_hours`] for the semantics.
///
/// # Errors
/// Returns `DegenerateGeometry` for a zero denominator in the hour-angle
/// formula.
pub fn daylight_hours_from_ordinal(latitude: f64, day_of_year: u32) -> Result<DaylightResult> {
    let phi = degrees_to_radians(latitude);
    let delta = solar_declination_from_ordinal(day_of_year);
    let h0 = degrees_to_radians(SUNRISE_SUNSET_ELEVATION_DEG);

    let denominator = cos(phi) * cos(delta);
    if denominator == 0.0 {
        return Err(Error::degenerate_geometry(latitude));
    }

    let cos_h0 = (sin(h0) - sin(phi) * sin(delta)) / denominator;

    // Classify before taking acos so the polar cases never touch its
    // domain boundary
    if cos_h0 <= -1.0 {
        return Ok(DaylightResult::polar_day());
    }
    if cos_h0 >= 1.0 {
        return Ok(DaylightResult::polar_night());
    }

    let hour_angle = acos(cos_h0);
    let hours = 2.0 * radians_to_degrees(hour_angle) / DEGREES_PER_HOUR;
    Ok(DaylightResult::normal_day(hours))
}

/// Calculates the daylight duration for anything implementing chrono's
/// `Datelike`.
///
/// # Errors
/// Returns `DegenerateGeometry` for a zero denominator in the hour-angle
/// formula.
///
/// # Example
/// ```
/// # use daylight_hours::daylight;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// let result = daylight::daylight_hours_for_datelike(80.0, &date).unwrap();
/// assert!(result.is_polar_day());
/// ```
#[cfg(feature = "chrono")]
pub fn daylight_hours_for_datelike<D: chrono::Datelike>(
    latitude: f64,
    datelike: &D,
) -> Result<DaylightResult> {
    daylight_hours_from_ordinal(latitude, datelike.ordinal())
}
