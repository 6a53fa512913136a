//! Solar declination estimation.
//!
//! Implements the truncated Fourier series from Spencer, 'Fourier series
//! representation of the position of the sun', Search 2 (5), 1971. The
//! series is keyed on the day angle `γ = 2π(n−1)/365` for 1-based
//! day-of-year `n` and is accurate to about 0.01 radians.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::suboptimal_flops)]

use crate::date::Date;
use crate::math::{cos, sin, PI};

/// Estimates the solar declination for a date, in radians.
///
/// Declination is the angle between the sun's rays and the plane of
/// Earth's equator; it drives the seasonal variation in daylight length.
/// Total over all valid dates, no error conditions.
///
/// # Example
/// ```
/// # use daylight_hours::{declination, Date};
/// let solstice = Date::new(2024, 6, 21).unwrap();
/// let delta = declination::solar_declination(solstice);
/// assert!((delta.to_degrees() - 23.44).abs() < 0.1);
/// ```
#[must_use]
pub fn solar_declination(date: Date) -> f64 {
    solar_declination_from_ordinal(date.ordinal())
}

/// Estimates the solar declination for a 1-based day-of-year, in radians.
///
/// The day-angle divisor is fixed at 365 even in leap years, as published;
/// this introduces a small phase drift on leap days that is preserved
/// deliberately. The series is periodic with period 365.
#[must_use]
pub fn solar_declination_from_ordinal(day_of_year: u32) -> f64 {
    let gamma = 2.0 * PI * (f64::from(day_of_year) - 1.0) / 365.0;

    0.006918 - 0.399912 * cos(gamma) + 0.070257 * sin(gamma)
        - 0.006758 * cos(2.0 * gamma)
        + 0.000907 * sin(2.0 * gamma)
        - 0.002697 * cos(3.0 * gamma)
        + 0.001480 * sin(3.0 * gamma)
}

/// Estimates the solar declination for anything implementing chrono's
/// `Datelike`, in radians.
///
/// # Example
/// ```
/// # use daylight_hours::declination;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 21).unwrap();
/// let delta = declination::solar_declination_for_datelike(&date);
/// assert!(delta < 0.0); // southern declination near the December solstice
/// ```
#[cfg(feature = "chrono")]
#[must_use]
pub fn solar_declination_for_datelike<D: chrono::Datelike>(datelike: &D) -> f64 {
    solar_declination_from_ordinal(datelike.ordinal())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_january_first_matches_series_constant_term() {
        // gamma = 0 on January 1, so the series collapses to the sum of
        // the constant and cosine coefficients
        let expected = 0.006918 - 0.399912 - 0.006758 - 0.002697;
        assert!((solar_declination_from_ordinal(1) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_solstice_extremes() {
        let june = solar_declination_from_ordinal(172);
        let december = solar_declination_from_ordinal(355);

        // Roughly the axial tilt, ±23.44°, at the solstices
        assert!((june.to_degrees() - 23.44).abs() < 0.15);
        assert!((december.to_degrees() + 23.44).abs() < 0.15);

        // The whole year stays inside the tilt envelope
        for doy in 1..=365 {
            let delta = solar_declination_from_ordinal(doy).to_degrees();
            assert!(delta.abs() <= 23.5, "declination {delta}° out of range on doy {doy}");
        }
    }

    #[test]
    fn test_equinox_near_zero() {
        // March equinox falls around doy 80
        let march = solar_declination_from_ordinal(80);
        assert!(march.to_degrees().abs() < 1.0);
    }

    #[test]
    fn test_periodicity_in_day_of_year() {
        for doy in [1, 60, 172, 250, 355] {
            let base = solar_declination_from_ordinal(doy);
            let wrapped = solar_declination_from_ordinal(doy + 365);
            assert!((base - wrapped).abs() < 1e-12);
        }
    }

    #[test]
    fn test_date_and_ordinal_entry_points_agree() {
        let date = Date::new(2023, 6, 21).unwrap();
        assert_eq!(
            solar_declination(date),
            solar_declination_from_ordinal(date.ordinal())
        );
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_datelike_entry_point() {
        let naive = chrono::NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
        assert_eq!(
            solar_declination_for_datelike(&naive),
            solar_declination_from_ordinal(172)
        );
    }
}
