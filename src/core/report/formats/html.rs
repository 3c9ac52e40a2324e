//! HTML report generator
//!
//! Generates a self-contained HTML page (embedded CSS, no scripts) with a
//! progress bar per student. Rendering goes through an askama template in
//! `templates/report.html`, which also handles HTML escaping.

use crate::core::get_version;
use crate::core::progress_export::{ProgressRow, ProgressStatus};
use crate::core::report::{ReportContext, ReportGenerator};
use askama::Template;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Pre-formatted values for one student row
struct StudentView {
    name: String,
    position: String,
    memorized_ayahs: u64,
    percentage: String,
    bar_width: String,
    completed_surahs: u32,
    memorized_pages: u32,
    pages_percentage: String,
    remaining_pages: i64,
    tier: &'static str,
    status: &'static str,
}

impl StudentView {
    fn from_row(row: &ProgressRow) -> Self {
        let tier = match row.status {
            ProgressStatus::Recorded => row.report.tier().label(),
            ProgressStatus::NotStarted => "none",
            ProgressStatus::UnknownSurah => "invalid",
        };

        Self {
            name: row.name.clone(),
            position: row
                .memorized
                .map_or_else(|| "-".to_string(), |p| p.to_string()),
            memorized_ayahs: row.report.memorized_ayahs,
            percentage: format!("{:.1}", row.report.percentage),
            bar_width: format!("{:.1}", row.report.percentage.clamp(0.0, 100.0)),
            completed_surahs: row.report.completed_surahs,
            memorized_pages: row.report.memorized_pages,
            pages_percentage: format!("{:.1}", row.report.pages_percentage),
            remaining_pages: row.report.remaining_pages,
            tier,
            status: row.status.label(),
        }
    }
}

/// Pre-formatted values for one goal row
struct GoalView {
    name: String,
    target: String,
    total_goal_verses: u32,
    percentage: u32,
}

/// Askama view over a [`ReportContext`]
#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReport<'a> {
    title: &'a str,
    class_name: &'a str,
    teacher: &'a str,
    student_count: usize,
    started_count: usize,
    invalid_count: usize,
    average_percentage: String,
    average_pages: String,
    top_student: &'a str,
    top_percentage: String,
    students: Vec<StudentView>,
    goals: Vec<GoalView>,
    version: &'a str,
}

impl<'a> HtmlReport<'a> {
    fn from_context(ctx: &ReportContext<'a>) -> Self {
        let students = ctx
            .ranked_rows()
            .into_iter()
            .map(StudentView::from_row)
            .collect();

        let goals = ctx
            .rows
            .iter()
            .filter_map(|row| {
                row.target.map(|target| GoalView {
                    name: row.name.clone(),
                    target: target.to_string(),
                    total_goal_verses: row.goal.total_goal_verses,
                    percentage: row.goal.percentage,
                })
            })
            .collect();

        Self {
            title: ctx.title,
            class_name: &ctx.roster.class_name,
            teacher: ctx.roster.teacher.as_deref().unwrap_or("-"),
            student_count: ctx.summary.student_count,
            started_count: ctx.summary.started_count,
            invalid_count: ctx.summary.invalid_count,
            average_percentage: format!("{:.1}", ctx.summary.average_percentage),
            average_pages: format!("{:.1}", ctx.summary.average_pages),
            top_student: ctx.summary.top_student.as_deref().unwrap_or("-"),
            top_percentage: format!("{:.1}", ctx.summary.top_percentage),
            students,
            goals,
            version: get_version(),
        }
    }
}

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(HtmlReport::from_context(ctx).render()?)
    }
}
