//! CSV parser for class rosters
//!
//! Expected layout:
//!
//! ```text
//! Class,Halaqa Al-Noor
//! Teacher,Ahmad
//! Students
//! Name,Memorized Surah,Memorized Ayah,Target Surah,Target Ayah
//! Yusuf,113,5,111,3
//! "Maryam, B.",Al-Mulk,12,,
//! ```
//!
//! Surah cells take a canonical id or a name (Arabic or English).

use crate::core::models::{Roster, Student};
use crate::core::progress::Position;
use crate::core::quran::find_surah_by_name;
use crate::{debug, warn};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Parse a roster CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A `Roster` with one `Student` per data row
///
/// # Errors
/// Returns an error if the file cannot be read, has no `Students` section,
/// or the header row lacks a `Name` column
pub fn parse_roster_csv<P: AsRef<Path>>(path: P) -> Result<Roster, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_roster_str(&content)
}

/// Parse roster CSV content already held in memory
///
/// # Errors
/// Same conditions as [`parse_roster_csv`], minus file access
pub fn parse_roster_str(content: &str) -> Result<Roster, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let students_start = lines
        .iter()
        .position(|line| {
            parse_csv_line(line)
                .first()
                .is_some_and(|f| f.eq_ignore_ascii_case("students"))
        })
        .ok_or("No 'Students' section found in CSV")?;

    let mut roster = parse_metadata(&lines[..students_start]);

    let header_line = lines
        .get(students_start + 1)
        .ok_or("No student header found")?;
    let headers = parse_csv_line(header_line);
    if !headers.iter().any(|h| h.eq_ignore_ascii_case("Name")) {
        return Err("Student header is missing a 'Name' column".into());
    }

    for (offset, line) in lines.iter().enumerate().skip(students_start + 2) {
        if line.trim().is_empty() {
            continue;
        }
        let fields = parse_csv_line(line);
        match parse_student(&fields, &headers) {
            Some(student) => roster.add_student(student),
            None => warn!("Skipping roster line {}: missing student name", offset + 1),
        }
    }

    debug!(
        "Parsed roster '{}' with {} students",
        roster.class_name,
        roster.students.len()
    );

    Ok(roster)
}

/// Read the `Class` / `Teacher` metadata rows above the student section
fn parse_metadata(lines: &[&str]) -> Roster {
    let mut roster = Roster::new(String::new());

    for line in lines {
        let parts = parse_csv_line(line);
        if parts.len() < 2 || parts[1].is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "class" | "halaqa" => roster.class_name.clone_from(&parts[1]),
            "teacher" => roster.teacher = Some(parts[1].clone()),
            _ => {}
        }
    }

    if roster.class_name.is_empty() {
        roster.class_name = "Unnamed Class".to_string();
    }

    roster
}

/// Split a CSV line into trimmed fields, honouring double quotes
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Get a field value by header name
fn get_field<'a>(fields: &'a [String], header_name: &str, headers: &[String]) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

/// Resolve a surah cell to a canonical id.
///
/// Numeric cells are kept as-is even when out of range, so a dangling id
/// stays visible downstream. Names that match no surah are dropped.
fn parse_surah_cell(cell: &str) -> Option<u32> {
    if let Ok(id) = cell.parse::<u32>() {
        return Some(id);
    }
    let surah = find_surah_by_name(cell);
    if surah.is_none() {
        warn!("Unknown surah name in roster: '{cell}'");
    }
    surah.map(|s| s.id)
}

/// Read a surah/ayah column pair into a position
fn parse_position(
    fields: &[String],
    headers: &[String],
    surah_header: &str,
    ayah_header: &str,
) -> Option<Position> {
    let surah_id = get_field(fields, surah_header, headers).and_then(parse_surah_cell);
    let ayah = get_field(fields, ayah_header, headers).and_then(|a| a.parse::<u32>().ok());
    Position::from_parts(surah_id, ayah)
}

/// Build a student from a parsed data row
fn parse_student(fields: &[String], headers: &[String]) -> Option<Student> {
    let name = get_field(fields, "Name", headers)?;

    let memorized = parse_position(fields, headers, "Memorized Surah", "Memorized Ayah");
    let target = parse_position(fields, headers, "Target Surah", "Target Ayah");

    Some(
        Student::new(name.to_string())
            .with_memorized(memorized)
            .with_target(target),
    )
}
