//! Interactive daylight calculator.
//!
//! Prompts for a latitude and a date, prints the daylight duration for that
//! combination, and optionally writes a full-year CSV lookup table. The
//! output directory for the table can be passed as the first command-line
//! argument; it defaults to the current directory.

use daylight_hours::{daylight_hours, Date, YearlyTable};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    if let Err(message) = run() {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Daylight Hours Calculator");

    let latitude_str = prompt(&mut input, "Enter latitude (degrees, +N / -S): ")?;
    let latitude: f64 = latitude_str
        .trim()
        .parse()
        .map_err(|_| format!("could not parse {:?} as a decimal latitude", latitude_str.trim()))?;

    let date_str = prompt(&mut input, "Enter date (YYYY-MM-DD): ")?;
    let date: Date = date_str
        .trim()
        .parse()
        .map_err(|e| format!("could not parse {:?}: {e}", date_str.trim()))?;

    let result = daylight_hours(latitude, date).map_err(|e| e.to_string())?;

    println!();
    println!("Result:");
    println!("Latitude : {latitude:.2}°");
    println!("Date     : {date} (DOY {})", date.ordinal());
    println!("Daylight : {}", result.format_duration());
    if !result.is_normal_day() {
        println!("Note     : {}", result.condition());
    }

    let answer = prompt(
        &mut input,
        "Would you like to save a full-year CSV lookup table? (y/n): ",
    )?;
    if answer.trim().eq_ignore_ascii_case("y") {
        let table = YearlyTable::generate(latitude, date.year()).map_err(|e| e.to_string())?;
        let directory = std::env::args_os()
            .nth(1)
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let path = table
            .write_csv_file(&directory)
            .map_err(|e| format!("could not write CSV file: {e}"))?;
        println!("CSV file saved to:\n{}", path.display());
    }

    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, String> {
    print!("{message}");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;
    Ok(line)
}
