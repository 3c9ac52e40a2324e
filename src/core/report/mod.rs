//! Report generation for class progress
//!
//! Renders a roster's computed progress in several formats (Markdown, HTML,
//! JSON). All formats draw from the same [`ReportContext`].

pub mod formats;

use crate::core::models::Roster;
use crate::core::progress_export::{ClassSummary, ProgressRow};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, JsonReporter, MarkdownReporter, ReportFormat};

/// Title used when the configuration does not provide one
pub const DEFAULT_REPORT_TITLE: &str = "Memorization Progress";

/// Data context for report generation
///
/// Aggregates everything a template needs so that every format renders
/// from a single source of truth.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Roster being reported
    pub roster: &'a Roster,
    /// Per-student progress rows, in roster order
    pub rows: &'a [ProgressRow],
    /// Class summary statistics
    pub summary: &'a ClassSummary,
    /// Report title
    pub title: &'a str,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        roster: &'a Roster,
        rows: &'a [ProgressRow],
        summary: &'a ClassSummary,
        title: &'a str,
    ) -> Self {
        Self {
            roster,
            rows,
            summary,
            title,
        }
    }

    /// Class name
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.roster.class_name
    }

    /// Teacher name or a placeholder
    #[must_use]
    pub fn teacher_name(&self) -> &str {
        self.roster.teacher.as_deref().unwrap_or("-")
    }

    /// Top student or a placeholder
    #[must_use]
    pub fn top_student(&self) -> &str {
        self.summary.top_student.as_deref().unwrap_or("-")
    }

    /// Rows sorted by memorized ayahs, furthest along first
    #[must_use]
    pub fn ranked_rows(&self) -> Vec<&'a ProgressRow> {
        let mut rows: Vec<&ProgressRow> = self.rows.iter().collect();
        rows.sort_by(|a, b| b.report.memorized_ayahs.cmp(&a.report.memorized_ayahs));
        rows
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Build the generator for a format
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
