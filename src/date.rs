//! Calendar date handling for daylight calculations.
//!
//! Provides a minimal proleptic Gregorian date type with day-of-year
//! (ordinal) arithmetic and ISO-8601 parsing/formatting. The chrono
//! interop lives behind the `chrono` feature; the numeric API works
//! everywhere, including `no_std`.

use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Days in each month for a non-leap year, January first.
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Checks whether a year is a leap year under the proleptic Gregorian rule.
///
/// # Example
/// ```
/// # use daylight_hours::date::is_leap_year;
/// assert!(is_leap_year(2024));
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// assert!(!is_leap_year(2023));
/// ```
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Gets the number of days in a year (365 or 366).
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Gets the number of days in a month (1-12), accounting for leap years.
///
/// # Panics
/// Panics if `month` is outside 1-12.
#[must_use]
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[(month - 1) as usize]
    }
}

/// A proleptic Gregorian calendar date.
///
/// Immutable value type; the year may be negative (BCE) or arbitrarily
/// large, with the Gregorian leap rule applied throughout.
///
/// # Example
/// ```
/// # use daylight_hours::Date;
/// let date: Date = "2024-06-21".parse().unwrap();
/// assert_eq!(date.ordinal(), 173);
/// assert_eq!(date.to_string(), "2024-06-21");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i32,
    month: u32,
    day: u32,
}

impl Date {
    /// Creates a date from year, month, and day components.
    ///
    /// # Errors
    /// Returns `InvalidDate` if month is outside 1-12 or day is outside the
    /// valid range for that month and year.
    pub const fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if month < 1 || month > 12 {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        Ok(Self { year, month, day })
    }

    /// Creates a date from a year and a 1-based day-of-year ordinal.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the ordinal is 0 or exceeds the year length
    /// (365, or 366 in leap years).
    ///
    /// # Example
    /// ```
    /// # use daylight_hours::Date;
    /// let date = Date::from_ordinal(2024, 60).unwrap();
    /// assert_eq!((date.month(), date.day()), (2, 29));
    /// ```
    pub fn from_ordinal(year: i32, ordinal: u32) -> Result<Self> {
        if ordinal < 1 || ordinal > days_in_year(year) {
            return Err(Error::invalid_date("day-of-year is out of range for year"));
        }
        let mut remaining = ordinal;
        for month in 1..=12 {
            let dim = days_in_month(year, month);
            if remaining <= dim {
                return Ok(Self {
                    year,
                    month,
                    day: remaining,
                });
            }
            remaining -= dim;
        }
        unreachable!("ordinal was validated against the year length")
    }

    /// Gets the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the month (1-12).
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Gets the 1-based day-of-year ordinal (1 to 365, or 366 in leap years).
    #[must_use]
    pub fn ordinal(&self) -> u32 {
        let mut ordinal = self.day;
        for month in 1..self.month {
            ordinal += days_in_month(self.year, month);
        }
        ordinal
    }

    /// Creates a date from anything implementing chrono's `Datelike`.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the components are out of range (cannot
    /// happen for well-formed chrono dates).
    ///
    /// # Example
    /// ```
    /// # use daylight_hours::Date;
    /// use chrono::NaiveDate;
    ///
    /// let naive = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
    /// let date = Date::from_datelike(&naive).unwrap();
    /// assert_eq!(date, Date::new(2024, 6, 21).unwrap());
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datelike<D: chrono::Datelike>(datelike: &D) -> Result<Self> {
        Self::new(datelike.year(), datelike.month(), datelike.day())
    }

    /// Converts to a `chrono::NaiveDate`, if representable.
    ///
    /// Returns `None` for years outside chrono's supported range.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_date(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl fmt::Display for Date {
    /// Formats as ISO-8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parses an ISO-8601 date string (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        // splitn(3) folds any extra '-' into the day part, which then
        // fails to parse as an integer below
        let mut parts = s.splitn(3, '-');
        let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(Error::invalid_date("expected YYYY-MM-DD"));
        };

        let year: i32 = year
            .parse()
            .map_err(|_| Error::invalid_date("expected YYYY-MM-DD"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| Error::invalid_date("expected YYYY-MM-DD"))?;
        let day: u32 = day
            .parse()
            .map_err(|_| Error::invalid_date("expected YYYY-MM-DD"))?;

        Self::new(year, month, day)
    }
}

#[cfg(feature = "chrono")]
impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(naive: chrono::NaiveDate) -> Result<Self> {
        Self::from_datelike(&naive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_rule() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(is_leap_year(400));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(100));

        assert_eq!(days_in_year(2024), 366);
        assert_eq!(days_in_year(2023), 365);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2023, 1), 31);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn test_date_validation() {
        assert!(Date::new(2023, 1, 1).is_ok());
        assert!(Date::new(2023, 12, 31).is_ok());
        assert!(Date::new(2024, 2, 29).is_ok());

        assert!(Date::new(2023, 2, 29).is_err());
        assert!(Date::new(2023, 0, 1).is_err());
        assert!(Date::new(2023, 13, 1).is_err());
        assert!(Date::new(2023, 4, 31).is_err());
        assert!(Date::new(2023, 1, 0).is_err());
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(Date::new(2023, 1, 1).unwrap().ordinal(), 1);
        assert_eq!(Date::new(2023, 2, 1).unwrap().ordinal(), 32);
        assert_eq!(Date::new(2023, 12, 31).unwrap().ordinal(), 365);
        assert_eq!(Date::new(2024, 12, 31).unwrap().ordinal(), 366);
        assert_eq!(Date::new(2024, 6, 21).unwrap().ordinal(), 173);
        assert_eq!(Date::new(2023, 6, 21).unwrap().ordinal(), 172);
    }

    #[test]
    fn test_from_ordinal_round_trip() {
        for year in [2023, 2024] {
            for ordinal in 1..=days_in_year(year) {
                let date = Date::from_ordinal(year, ordinal).unwrap();
                assert_eq!(date.ordinal(), ordinal);
                assert_eq!(date.year(), year);
            }
        }

        assert!(Date::from_ordinal(2023, 0).is_err());
        assert!(Date::from_ordinal(2023, 366).is_err());
        assert!(Date::from_ordinal(2024, 367).is_err());
    }

    #[test]
    fn test_iso_round_trip() {
        let date: Date = "2024-06-21".parse().unwrap();
        assert_eq!(date, Date::new(2024, 6, 21).unwrap());
        assert_eq!(date.to_string(), "2024-06-21");

        let date: Date = "0044-03-15".parse().unwrap();
        assert_eq!(date.to_string(), "0044-03-15");

        assert!("2024-6".parse::<Date>().is_err());
        assert!("not-a-date".parse::<Date>().is_err());
        assert!("2024-13-01".parse::<Date>().is_err());
        assert!("2024-02-30".parse::<Date>().is_err());
        assert!("".parse::<Date>().is_err());
    }

    #[test]
    fn test_date_ordering() {
        let jan = Date::new(2024, 1, 31).unwrap();
        let feb = Date::new(2024, 2, 1).unwrap();
        let next_year = Date::new(2025, 1, 1).unwrap();
        assert!(jan < feb);
        assert!(feb < next_year);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_chrono_interop() {
        use chrono::Datelike;

        let naive = chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        let date = Date::try_from(naive).unwrap();
        assert_eq!(date, Date::new(2024, 6, 21).unwrap());
        assert_eq!(date.ordinal(), naive.ordinal());

        assert_eq!(date.to_naive_date(), Some(naive));
    }
}
