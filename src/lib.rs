//! # Daylight Hours Library
//!
//! Daylight duration calculations from solar declination, with polar day/night
//! classification and yearly lookup tables.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate estimates the sun's declination for a calendar date with the
//! classic truncated Fourier series by Spencer (1971), derives the sunrise
//! hour angle at a given latitude using the standard −0.833° elevation
//! correction (atmospheric refraction plus the solar disk radius), and
//! classifies every latitude/date combination as a normal day, polar day, or
//! polar night.
//!
//! ## Features
//!
//! - Multiple configurations: `std` or `no_std`, with or without `chrono`, math via native or `libm`
//! - Exhaustive classification: polar cases are detected before any inverse-cosine domain issue
//! - Thread-safe: stateless, pure functions over immutable data
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`);
//!   also enables the [`table`] module and CSV export
//! - `chrono` (default): Enable `NaiveDate`/`Datelike` based convenience API
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono (most convenient)
//! daylight-hours = "0.1"
//!
//! # Minimal std (no chrono, smallest dependency tree)
//! daylight-hours = { version = "0.1", default-features = false, features = ["std"] }
//!
//! # Minimal no_std (pure numeric API)
//! daylight-hours = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## References
//!
//! - Spencer, J. W. (1971). Fourier series representation of the position of
//!   the sun. Search, 2(5), 172.
//! - Iqbal, M. (1983). An Introduction to Solar Radiation. Academic Press.
//!   (Chapter 1 covers the day angle and the sunrise hour-angle relation.)
//!
//! ## Quick Start
//!
//! ### Single date
//! ```rust
//! use daylight_hours::{daylight_hours, Date};
//!
//! let date: Date = "2024-06-21".parse().unwrap();
//! let result = daylight_hours(48.21, date).unwrap(); // Vienna
//!
//! let (h, m) = result.hours_and_minutes();
//! println!("Daylight: {h}h {m}m ({})", result.condition());
//! assert!(result.is_normal_day());
//! ```
//!
//! ### Polar circle and beyond
//! ```rust
//! use daylight_hours::{daylight_hours, Date, DaylightCondition};
//!
//! let june = Date::new(2024, 6, 21).unwrap();
//! let december = Date::new(2024, 12, 21).unwrap();
//!
//! // Longyearbyen, 78.22°N
//! assert_eq!(
//!     daylight_hours(78.22, june).unwrap().condition(),
//!     DaylightCondition::PolarDay
//! );
//! assert_eq!(
//!     daylight_hours(78.22, december).unwrap().condition(),
//!     DaylightCondition::PolarNight
//! );
//! ```
//!
//! ### Yearly table (requires `std`)
//! ```rust
//! use daylight_hours::YearlyTable;
//!
//! let table = YearlyTable::generate(40.0, 2024).unwrap();
//! assert_eq!(table.records().len(), 366); // leap year
//!
//! let mut csv = Vec::new();
//! table.write_csv(&mut csv).unwrap();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of mathematical constants in tests
)]

// Public API exports
pub use crate::date::Date;
pub use crate::daylight::daylight_hours;
pub use crate::declination::solar_declination;
pub use crate::error::{Error, Result};
#[cfg(feature = "std")]
pub use crate::table::{DayRecord, YearlyTable};
pub use crate::types::{DaylightCondition, DaylightResult};

// Core modules
pub mod date;
pub mod daylight;
pub mod declination;
pub mod error;
pub mod types;

// Tabulation and CSV export
#[cfg(feature = "std")]
pub mod table;

// Internal modules
mod math;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_date_end_to_end() {
        let date = Date::new(2024, 6, 21).unwrap();

        let vienna = daylight_hours(48.21, date).unwrap();
        assert!(vienna.is_normal_day());
        assert!(vienna.hours() > 15.0 && vienna.hours() < 17.0);

        let arctic = daylight_hours(80.0, date).unwrap();
        assert!(arctic.is_polar_day());
    }

    #[test]
    fn test_declination_export_matches_module_path() {
        let date = Date::new(2024, 3, 20).unwrap();
        assert_eq!(
            solar_declination(date),
            declination::solar_declination(date)
        );
    }
}
