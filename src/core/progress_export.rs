//! Export class progress to various formats

use crate::core::goal::GoalProgress;
use crate::core::models::{Roster, Student};
use crate::core::progress::{Position, ProgressOutcome, ProgressReport};
use crate::debug;
use serde::Serialize;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Trait for exporting class progress in different formats
pub trait ProgressExporter {
    /// Export progress for every student in a roster
    ///
    /// # Errors
    /// Returns an error if export fails
    fn export(&self, roster: &Roster, output_path: &Path) -> Result<(), Box<dyn Error>>;
}

/// How a student's stored position was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    /// A valid position was recorded
    Recorded,
    /// No position recorded yet
    NotStarted,
    /// The stored surah id does not exist
    UnknownSurah,
}

impl ProgressStatus {
    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Recorded => "recorded",
            Self::NotStarted => "not started",
            Self::UnknownSurah => "unknown surah",
        }
    }
}

impl fmt::Display for ProgressStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One student's computed progress
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRow {
    /// Student name
    pub name: String,
    /// Recorded position, if any
    pub memorized: Option<Position>,
    /// Goal position, if any
    pub target: Option<Position>,
    /// How the recorded position was interpreted
    pub status: ProgressStatus,
    /// Progress report (zero-state unless `status` is `Recorded`)
    pub report: ProgressReport,
    /// Progress toward the target
    pub goal: GoalProgress,
}

impl ProgressRow {
    /// Compute the row for a single student
    #[must_use]
    pub fn from_student(student: &Student) -> Self {
        let (status, report) = match student.outcome() {
            ProgressOutcome::Recorded(report) => (ProgressStatus::Recorded, report),
            ProgressOutcome::NotStarted => (ProgressStatus::NotStarted, ProgressReport::zero()),
            ProgressOutcome::UnknownReference { surah_id } => {
                debug!("Student '{}' references unknown surah {surah_id}", student.name);
                (ProgressStatus::UnknownSurah, ProgressReport::zero())
            }
        };

        Self {
            name: student.name.clone(),
            memorized: student.memorized,
            target: student.target,
            status,
            report,
            goal: student.goal(),
        }
    }

    /// Name of the current surah, or an empty string
    #[must_use]
    pub fn current_surah_name(&self) -> &'static str {
        self.report.current_surah.map_or("", |s| s.english_name)
    }
}

/// Compute progress rows for every student, in roster order
#[must_use]
pub fn compute_rows(roster: &Roster) -> Vec<ProgressRow> {
    roster.students.iter().map(ProgressRow::from_student).collect()
}

/// Summary statistics for a class
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSummary {
    /// Students in the roster
    pub student_count: usize,
    /// Students with a valid recorded position
    pub started_count: usize,
    /// Students whose record references an unknown surah
    pub invalid_count: usize,
    /// Mean ayah percentage over started students, one decimal place
    pub average_percentage: f64,
    /// Mean memorized pages over started students, one decimal place
    pub average_pages: f64,
    /// Student furthest along, if anyone has started
    pub top_student: Option<String>,
    /// Ayah percentage of the top student
    pub top_percentage: f64,
}

impl ClassSummary {
    /// Compute summary statistics from progress rows
    #[must_use]
    pub fn from_rows(rows: &[ProgressRow]) -> Self {
        let mut summary = Self {
            student_count: rows.len(),
            ..Self::default()
        };

        let mut total_percentage = 0.0;
        let mut total_pages = 0_u64;
        let mut top: Option<&ProgressRow> = None;

        for row in rows {
            match row.status {
                ProgressStatus::Recorded => {}
                ProgressStatus::UnknownSurah => {
                    summary.invalid_count += 1;
                    continue;
                }
                ProgressStatus::NotStarted => continue,
            }

            summary.started_count += 1;
            total_percentage += row.report.percentage;
            total_pages += u64::from(row.report.memorized_pages);

            let is_new_top = match top {
                None => true,
                Some(t) => row.report.memorized_ayahs > t.report.memorized_ayahs,
            };
            if is_new_top {
                top = Some(row);
            }
        }

        if summary.started_count > 0 {
            #[allow(clippy::cast_precision_loss)]
            let count = summary.started_count as f64;
            #[allow(clippy::cast_precision_loss)]
            let pages = total_pages as f64;
            summary.average_percentage = (total_percentage / count * 10.0).round() / 10.0;
            summary.average_pages = (pages / count * 10.0).round() / 10.0;
        }

        if let Some(top) = top {
            summary.top_student = Some(top.name.clone());
            summary.top_percentage = top.report.percentage;
        }

        summary
    }
}

/// CSV exporter for class progress
pub struct CsvExporter;

impl ProgressExporter for CsvExporter {
    fn export(&self, roster: &Roster, output_path: &Path) -> Result<(), Box<dyn Error>> {
        export_progress_csv(roster, output_path)?;
        Ok(())
    }
}

/// Quote a CSV field when it contains separators or quotes
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn position_cells(position: Option<Position>) -> (String, String) {
    position.map_or_else(
        || (String::new(), String::new()),
        |p| (p.surah_id.to_string(), p.ayah.to_string()),
    )
}

/// Export progress using a precomputed summary
///
/// Writes a `Class` metadata block, a `Summary` block and a `Students`
/// section with one row per student.
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn export_progress_csv_with_summary(
    roster: &Roster,
    rows: &[ProgressRow],
    summary: &ClassSummary,
    output_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(output_path)?;

    writeln!(file, "Class,{}", csv_field(&roster.class_name))?;
    if let Some(teacher) = &roster.teacher {
        writeln!(file, "Teacher,{}", csv_field(teacher))?;
    }

    writeln!(file, "Summary")?;
    writeln!(file, "Student Count,{}", summary.student_count)?;
    writeln!(file, "Started,{}", summary.started_count)?;
    writeln!(file, "Invalid Records,{}", summary.invalid_count)?;
    writeln!(file, "Average Percentage,{:.1}", summary.average_percentage)?;
    writeln!(file, "Average Pages,{:.1}", summary.average_pages)?;
    writeln!(
        file,
        "Top Student,{},{:.1}",
        csv_field(summary.top_student.as_deref().unwrap_or("")),
        summary.top_percentage
    )?;

    writeln!(file, "Students")?;
    writeln!(
        file,
        "Name,Status,Memorized Surah,Memorized Ayah,Current Surah,Memorized Ayahs,Percentage,Completed Surahs,Memorized Pages,Pages Percentage,Remaining Pages,Target Surah,Target Ayah,Goal Percentage"
    )?;

    debug!("Exporting progress for {} students", rows.len());

    for row in rows {
        let (memorized_surah, memorized_ayah) = position_cells(row.memorized);
        let (target_surah, target_ayah) = position_cells(row.target);

        writeln!(
            file,
            "{},{},{},{},{},{},{:.1},{},{},{:.1},{},{},{},{}",
            csv_field(&row.name),
            row.status,
            memorized_surah,
            memorized_ayah,
            row.current_surah_name(),
            row.report.memorized_ayahs,
            row.report.percentage,
            row.report.completed_surahs,
            row.report.memorized_pages,
            row.report.pages_percentage,
            row.report.remaining_pages,
            target_surah,
            target_ayah,
            row.goal.percentage
        )?;
    }

    Ok(())
}

/// Compute rows and summary for a roster and write them as CSV
///
/// # Errors
/// Returns an error if the file cannot be created or written
pub fn export_progress_csv<P: AsRef<Path>>(
    roster: &Roster,
    output_path: P,
) -> Result<ClassSummary, Box<dyn Error>> {
    let rows = compute_rows(roster);
    let summary = ClassSummary::from_rows(&rows);
    export_progress_csv_with_summary(roster, &rows, &summary, output_path.as_ref())?;
    Ok(summary)
}
