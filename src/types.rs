//! Core data types for daylight calculations.

use crate::math::round;
use core::fmt;

/// Classification of a day at a given latitude.
///
/// At high latitudes near the solstices the sun may stay above or below
/// the horizon for the entire 24-hour period; everywhere else the day has
/// a regular sunrise and sunset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaylightCondition {
    /// Regular day with a sunrise and a sunset
    NormalDay,
    /// Polar day - sun remains above the horizon all day
    PolarDay,
    /// Polar night - sun remains below the horizon all day
    PolarNight,
}

impl DaylightCondition {
    /// Gets the human-readable label for this condition.
    ///
    /// These labels are part of the CSV table contract.
    ///
    /// # Example
    /// ```
    /// # use daylight_hours::DaylightCondition;
    /// assert_eq!(DaylightCondition::NormalDay.label(), "Normal Day");
    /// assert_eq!(DaylightCondition::PolarDay.label(), "Polar Day");
    /// assert_eq!(DaylightCondition::PolarNight.label(), "Polar Night");
    /// ```
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::NormalDay => "Normal Day",
            Self::PolarDay => "Polar Day",
            Self::PolarNight => "Polar Night",
        }
    }
}

impl fmt::Display for DaylightCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daylight duration and condition for one latitude/date combination.
///
/// Invariants: duration is 24.0 iff the condition is `PolarDay`, 0.0 iff
/// `PolarNight`, and strictly inside (0, 24) for `NormalDay`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightResult {
    /// Daylight duration in fractional hours (0.0 to 24.0)
    hours: f64,
    /// Day classification
    condition: DaylightCondition,
}

impl DaylightResult {
    /// Creates a regular-day result. Callers guarantee hours in (0, 24).
    pub(crate) const fn normal_day(hours: f64) -> Self {
        Self {
            hours,
            condition: DaylightCondition::NormalDay,
        }
    }

    /// Creates a polar-day result (sun never sets, 24 hours of daylight).
    #[must_use]
    pub const fn polar_day() -> Self {
        Self {
            hours: 24.0,
            condition: DaylightCondition::PolarDay,
        }
    }

    /// Creates a polar-night result (sun never rises, 0 hours of daylight).
    #[must_use]
    pub const fn polar_night() -> Self {
        Self {
            hours: 0.0,
            condition: DaylightCondition::PolarNight,
        }
    }

    /// Gets the daylight duration in fractional hours (0.0 to 24.0).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.hours
    }

    /// Gets the day classification.
    #[must_use]
    pub const fn condition(&self) -> DaylightCondition {
        self.condition
    }

    /// Checks if this is a regular day with sunrise and sunset.
    #[must_use]
    pub fn is_normal_day(&self) -> bool {
        self.condition == DaylightCondition::NormalDay
    }

    /// Checks if this is a polar day (sun never sets).
    #[must_use]
    pub fn is_polar_day(&self) -> bool {
        self.condition == DaylightCondition::PolarDay
    }

    /// Checks if this is a polar night (sun never rises).
    #[must_use]
    pub fn is_polar_night(&self) -> bool {
        self.condition == DaylightCondition::PolarNight
    }

    /// Splits the duration into whole hours and rounded minutes.
    ///
    /// Minutes are `round((hours - whole_hours) * 60)`; when that rounds
    /// to 60 the hour component carries over and minutes reset to 0, so
    /// 5.9999 hours reports as (6, 0) rather than (5, 60).
    ///
    /// # Example
    /// ```
    /// # use daylight_hours::DaylightResult;
    /// assert_eq!(DaylightResult::polar_day().hours_and_minutes(), (24, 0));
    /// ```
    #[must_use]
    pub fn hours_and_minutes(&self) -> (u32, u32) {
        let mut h = self.hours as u32;
        let mut m = round((self.hours - f64::from(h)) * 60.0) as u32;
        if m == 60 {
            h += 1;
            m = 0;
        }
        (h, m)
    }

    /// Formats the duration as `{H}h {M}m` with the minute carry rule.
    ///
    /// # Example
    /// ```
    /// # use daylight_hours::daylight_hours;
    /// # use daylight_hours::Date;
    /// let date = Date::new(2024, 3, 20).unwrap();
    /// let result = daylight_hours(0.0, date).unwrap();
    /// assert!(result.format_duration().starts_with("12h"));
    /// ```
    #[cfg(feature = "std")]
    #[must_use]
    pub fn format_duration(&self) -> String {
        let (h, m) = self.hours_and_minutes();
        format!("{h}h {m}m")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_labels() {
        assert_eq!(DaylightCondition::NormalDay.label(), "Normal Day");
        assert_eq!(DaylightCondition::PolarDay.label(), "Polar Day");
        assert_eq!(DaylightCondition::PolarNight.label(), "Polar Night");
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_condition_display() {
        assert_eq!(DaylightCondition::PolarNight.to_string(), "Polar Night");
    }

    #[test]
    fn test_polar_constructors_uphold_invariants() {
        let day = DaylightResult::polar_day();
        assert_eq!(day.hours(), 24.0);
        assert!(day.is_polar_day());
        assert!(!day.is_normal_day());
        assert!(!day.is_polar_night());

        let night = DaylightResult::polar_night();
        assert_eq!(night.hours(), 0.0);
        assert!(night.is_polar_night());
        assert!(!night.is_normal_day());
        assert!(!night.is_polar_day());
    }

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(DaylightResult::normal_day(12.5).hours_and_minutes(), (12, 30));
        assert_eq!(DaylightResult::normal_day(12.0).hours_and_minutes(), (12, 0));
        assert_eq!(DaylightResult::polar_day().hours_and_minutes(), (24, 0));
        assert_eq!(DaylightResult::polar_night().hours_and_minutes(), (0, 0));
    }

    #[test]
    fn test_hours_and_minutes_carry() {
        // 0.9999 * 60 rounds to 60, which must carry into the hour
        assert_eq!(DaylightResult::normal_day(5.9999).hours_and_minutes(), (6, 0));
        assert_eq!(DaylightResult::normal_day(23.9999).hours_and_minutes(), (24, 0));
        // Just below the carry threshold
        assert_eq!(DaylightResult::normal_day(5.991).hours_and_minutes(), (5, 59));
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_format_duration() {
        assert_eq!(DaylightResult::normal_day(12.5).format_duration(), "12h 30m");
        assert_eq!(DaylightResult::normal_day(5.9999).format_duration(), "6h 0m");
        assert_eq!(DaylightResult::polar_day().format_duration(), "24h 0m");
        assert_eq!(DaylightResult::polar_night().format_duration(), "0h 0m");
    }
}
