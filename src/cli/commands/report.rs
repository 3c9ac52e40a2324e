//! Report command handler
//!
//! Renders a class progress report (Markdown, HTML or JSON) from a roster.

use hlaqh_progress::config::Config;
use hlaqh_progress::core::{
    models::Roster,
    progress_export::{compute_rows, ClassSummary, ProgressRow},
    report::{reporter_for, ReportContext, ReportFormat, DEFAULT_REPORT_TITLE},
    roster::parse_roster_csv,
};
use hlaqh_progress::{error, info};
use std::path::{Path, PathBuf};

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the roster CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format; falls back to config `report.format`
/// * `config` - Configuration with the reports directory and title
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: Option<&str>, config: &Config) {
    let format_str = format_str.unwrap_or(&config.report.format);
    if let Err(err) = generate_report(input_file, output_file, format_str, config) {
        error!(
            "Report generation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

/// Roster plus everything computed from it
struct ReportData {
    roster: Roster,
    rows: Vec<ProgressRow>,
    summary: ClassSummary,
}

fn parse_format(format_str: &str) -> Result<ReportFormat, String> {
    format_str
        .parse::<ReportFormat>()
        .map_err(|e| format!("✗ {e}. Use: markdown, html, or json"))
}

fn prepare_report_data(input_file: &Path) -> Result<ReportData, String> {
    let roster = parse_roster_csv(input_file).map_err(|e| {
        error!("Failed to load roster {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;
    info!("Roster loaded: {}", input_file.display());

    let rows = compute_rows(&roster);
    let summary = ClassSummary::from_rows(&rows);

    Ok(ReportData {
        roster,
        rows,
        summary,
    })
}

fn write_report(
    data: &ReportData,
    format: ReportFormat,
    title: &str,
    output_path: &Path,
) -> Result<(), String> {
    let title = if title.is_empty() { DEFAULT_REPORT_TITLE } else { title };
    let ctx = ReportContext::new(&data.roster, &data.rows, &data.summary, title);

    reporter_for(format)
        .generate(&ctx, output_path)
        .map_err(|e| format!("✗ Failed to generate {format} report: {e}"))
}

/// `<dir>/<stem>_report.<ext>`
fn report_path(input_file: &Path, dir: &Path, format: ReportFormat) -> PathBuf {
    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster");
    dir.join(format!("{stem}_report.{}", format.extension()))
}

fn create_dir(dir: &Path) -> Result<(), String> {
    std::fs::create_dir_all(dir)
        .map_err(|e| format!("✗ Failed to create reports directory {}: {e}", dir.display()))
}

fn print_summary(data: &ReportData) {
    println!("\n=== Summary ===");
    println!("Class: {}", data.roster.class_name);
    if let Some(teacher) = &data.roster.teacher {
        println!("Teacher: {teacher}");
    }
    println!(
        "Students: {} ({} started)",
        data.summary.student_count, data.summary.started_count
    );
    println!("Average completion: {:.1}%", data.summary.average_percentage);

    if data.summary.invalid_count > 0 {
        println!(
            "⚠️  {} students reference an unknown surah",
            data.summary.invalid_count
        );
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    let format = parse_format(format_str)?;
    let data = prepare_report_data(input_file)?;

    let output_path = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        create_dir(&reports_dir)?;
        report_path(input_file, &reports_dir, format)
    };

    write_report(&data, format, &config.report.title, &output_path)?;

    println!("✓ Report generated: {}", output_path.display());
    info!("Report exported to: {}", output_path.display());

    print_summary(&data);

    Ok(())
}

/// Generate a report into `output_dir` as part of the roster command
///
/// # Errors
/// Returns a printable message if the roster cannot be loaded or the
/// report cannot be written
pub fn generate_into_dir(
    input_file: &Path,
    output_dir: &Path,
    format_str: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = parse_format(format_str)?;
    let data = prepare_report_data(input_file)?;

    create_dir(output_dir)?;
    let output_path = report_path(input_file, output_dir, format);
    write_report(&data, format, &config.report.title, &output_path)?;

    Ok(output_path)
}
