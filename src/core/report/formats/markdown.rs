//! Markdown report generator
//!
//! Generates class progress reports as Markdown tables. These render well
//! in GitHub, GitLab, and most note-taking tools.

use crate::core::get_version;
use crate::core::progress_export::{ProgressRow, ProgressStatus};
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{title}}", ctx.title);
        output = output.replace("{{class_name}}", ctx.class_name());
        output = output.replace("{{teacher}}", ctx.teacher_name());
        output = output.replace(
            "{{student_count}}",
            &ctx.summary.student_count.to_string(),
        );
        output = output.replace(
            "{{started_count}}",
            &ctx.summary.started_count.to_string(),
        );
        output = output.replace(
            "{{invalid_count}}",
            &ctx.summary.invalid_count.to_string(),
        );
        output = output.replace(
            "{{average_percentage}}",
            &format!("{:.1}", ctx.summary.average_percentage),
        );
        output = output.replace(
            "{{average_pages}}",
            &format!("{:.1}", ctx.summary.average_pages),
        );
        output = output.replace("{{top_student}}", ctx.top_student());
        output = output.replace(
            "{{top_percentage}}",
            &format!("{:.1}", ctx.summary.top_percentage),
        );

        output = output.replace("{{student_table}}", &Self::generate_student_table(ctx));
        output = output.replace("{{goal_table}}", &Self::generate_goal_table(ctx));
        output = output.replace("{{version}}", get_version());

        output
    }

    /// Escape characters that would break a table cell
    fn cell(value: &str) -> String {
        value.replace('|', "\\|")
    }

    fn status_cell(row: &ProgressRow) -> String {
        match row.status {
            ProgressStatus::Recorded => row.report.tier().label().to_string(),
            ProgressStatus::NotStarted => "not started".to_string(),
            ProgressStatus::UnknownSurah => "⚠️ unknown surah".to_string(),
        }
    }

    /// Generate the per-student progress table, furthest along first
    fn generate_student_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str(
            "| Student | Position | Ayahs | Completion | Surahs | Pages | Remaining Pages | Tier |\n",
        );
        table.push_str("|---|---|---|---|---|---|---|---|\n");

        for row in ctx.ranked_rows() {
            let position = row
                .memorized
                .map_or_else(|| "-".to_string(), |p| p.to_string());

            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.1}% | {} | {} ({:.1}%) | {} | {} |",
                Self::cell(&row.name),
                Self::cell(&position),
                row.report.memorized_ayahs,
                row.report.percentage,
                row.report.completed_surahs,
                row.report.memorized_pages,
                row.report.pages_percentage,
                row.report.remaining_pages,
                Self::status_cell(row)
            );
        }

        table
    }

    /// Generate the goal table for students with a target
    fn generate_goal_table(ctx: &ReportContext) -> String {
        let with_goals: Vec<&ProgressRow> = ctx.rows.iter().filter(|r| r.target.is_some()).collect();
        if with_goals.is_empty() {
            return "_No goals set._\n".to_string();
        }

        let mut table = String::new();
        table.push_str("| Student | Target | Goal Verses | Goal Completion |\n");
        table.push_str("|---|---|---|---|\n");

        for row in with_goals {
            let target = row
                .target
                .map_or_else(|| "-".to_string(), |p| p.to_string());
            let _ = writeln!(
                table,
                "| {} | {} | {} | {}% |",
                Self::cell(&row.name),
                Self::cell(&target),
                row.goal.total_goal_verses,
                row.goal.percentage
            );
        }

        table
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
