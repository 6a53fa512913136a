//! Yearly daylight tabulation and CSV export.
//!
//! A [`YearlyTable`] holds one record per calendar day of a year, in date
//! order. The CSV layout is a fixed contract: header
//! `date,doy,declination_deg,daylight_hours,condition`, ISO-8601 dates,
//! both floating-point columns at exactly 4 decimals, and the condition as
//! one of the three labels from
//! [`DaylightCondition::label`](crate::DaylightCondition::label).

use crate::date::{days_in_year, Date};
use crate::daylight::daylight_hours_from_ordinal;
use crate::declination::solar_declination_from_ordinal;
use crate::types::DaylightCondition;
use crate::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// One row of a yearly daylight table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayRecord {
    date: Date,
    day_of_year: u32,
    declination_deg: f64,
    daylight_hours: f64,
    condition: DaylightCondition,
}

impl DayRecord {
    /// Gets the calendar date.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.date
    }

    /// Gets the 1-based day-of-year.
    #[must_use]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Gets the solar declination in degrees.
    #[must_use]
    pub const fn declination_deg(&self) -> f64 {
        self.declination_deg
    }

    /// Gets the daylight duration in fractional hours.
    #[must_use]
    pub const fn daylight_hours(&self) -> f64 {
        self.daylight_hours
    }

    /// Gets the day classification.
    #[must_use]
    pub const fn condition(&self) -> DaylightCondition {
        self.condition
    }
}

/// Daylight records for every day of one year at one latitude.
///
/// Constructed in a single pass by [`YearlyTable::generate`] and immutable
/// afterwards.
///
/// # Example
/// ```
/// # use daylight_hours::YearlyTable;
/// let table = YearlyTable::generate(48.21, 2024).unwrap();
/// assert_eq!(table.records().len(), 366);
/// assert_eq!(table.csv_file_name(), "daylight_lookup_48.21deg_2024.csv");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTable {
    latitude: f64,
    year: i32,
    records: Vec<DayRecord>,
}

impl YearlyTable {
    /// Generates the table for a latitude (degrees, positive north) and a
    /// calendar year.
    ///
    /// Produces exactly 365 records, or 366 in leap years, in ascending
    /// date order with no gaps.
    ///
    /// # Errors
    /// Propagates `DegenerateGeometry` from the daylight calculation.
    pub fn generate(latitude: f64, year: i32) -> Result<Self> {
        let length = days_in_year(year);
        let mut records = Vec::with_capacity(length as usize);

        for ordinal in 1..=length {
            // Ordinal is within the year length, so the date always exists
            let date = Date::from_ordinal(year, ordinal)?;
            let result = daylight_hours_from_ordinal(latitude, ordinal)?;
            records.push(DayRecord {
                date,
                day_of_year: ordinal,
                declination_deg: solar_declination_from_ordinal(ordinal).to_degrees(),
                daylight_hours: result.hours(),
                condition: result.condition(),
            });
        }

        Ok(Self {
            latitude,
            year,
            records,
        })
    }

    /// Gets the latitude this table was generated for, in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the calendar year this table covers.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Gets the per-day records, in ascending date order.
    #[must_use]
    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    /// Gets the conventional CSV file name for this table.
    ///
    /// `daylight_lookup_<lat>deg_<year>.csv` with the latitude at 2
    /// decimals and any spaces stripped.
    #[must_use]
    pub fn csv_file_name(&self) -> String {
        format!("daylight_lookup_{:.2}deg_{}.csv", self.latitude, self.year).replace(' ', "")
    }

    /// Writes the table as CSV to an arbitrary writer.
    ///
    /// # Errors
    /// Propagates I/O errors from the writer.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "date,doy,declination_deg,daylight_hours,condition")?;
        for record in &self.records {
            writeln!(
                writer,
                "{},{},{:.4},{:.4},{}",
                record.date,
                record.day_of_year,
                record.declination_deg,
                record.daylight_hours,
                record.condition.label()
            )?;
        }
        Ok(())
    }

    /// Writes the table to its conventional file name inside `directory`
    /// and returns the resolved path.
    ///
    /// # Errors
    /// Propagates I/O errors from file creation or writing.
    pub fn write_csv_file(&self, directory: &Path) -> io::Result<PathBuf> {
        let path = directory.join(self.csv_file_name());
        let mut writer = BufWriter::new(File::create(&path)?);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(path)
    }
}

impl<'a> IntoIterator for &'a YearlyTable {
    type Item = &'a DayRecord;
    type IntoIter = core::slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
