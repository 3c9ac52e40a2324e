//! Roster command handler

use hlaqh_progress::config::Config;
use hlaqh_progress::core::{progress_export, roster::parse_roster_csv};
use hlaqh_progress::{error, info, verbose};
use std::path::{Path, PathBuf};

/// Run the roster command for one or more input files.
///
/// # Arguments
/// * `input_files` - Paths to roster CSV files
/// * `output_files` - Optional output paths; must match inputs 1:1 when provided
/// * `config` - Configuration containing the default exports directory
/// * `verbose` - Whether to print the class summary
pub fn run(input_files: &[PathBuf], output_files: &[PathBuf], config: &Config, verbose: bool) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    if !output_files.is_empty() && output_files.len() != input_files.len() {
        eprintln!(
            "✗ When using -o/--output, provide one output path per input file ({} inputs, {} outputs).",
            input_files.len(),
            output_files.len()
        );
        return;
    }

    for (idx, input_file) in input_files.iter().enumerate() {
        let output_file = output_files.get(idx).map(PathBuf::as_path);
        if let Err(err) = export_single(input_file, output_file, config, verbose) {
            error!("Roster export failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

/// Default export path: `<exports_dir>/<stem>_progress.csv`
fn default_output_path(input_file: &Path, config: &Config) -> Result<PathBuf, String> {
    let exports_dir = PathBuf::from(&config.paths.exports_dir);
    std::fs::create_dir_all(&exports_dir).map_err(|e| {
        format!(
            "✗ Failed to create exports directory {}: {e}",
            exports_dir.display()
        )
    })?;

    let stem = input_file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("roster");
    Ok(exports_dir.join(format!("{stem}_progress.csv")))
}

fn export_single(
    input_file: &Path,
    output_file: Option<&Path>,
    config: &Config,
    verbose: bool,
) -> Result<(), String> {
    let roster = parse_roster_csv(input_file).map_err(|e| {
        error!("Failed to load roster {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    verbose!("✓ Roster loaded from: {}", input_file.display());
    info!(
        "Roster loaded: {} ({} students)",
        input_file.display(),
        roster.students.len()
    );

    let output_path = match output_file {
        Some(output) => output.to_path_buf(),
        None => default_output_path(input_file, config)?,
    };

    let summary = progress_export::export_progress_csv(&roster, &output_path).map_err(|e| {
        format!(
            "✗ Failed to export progress to {}: {e}",
            output_path.display()
        )
    })?;

    println!("✓ Progress exported to: {}", output_path.display());
    info!("Exported class progress to: {}", output_path.display());

    if verbose {
        println!("\n=== Class Summary for {} ===", roster.class_name);
        println!(
            "Students: {} ({} started, {} invalid)",
            summary.student_count, summary.started_count, summary.invalid_count
        );
        println!("Average completion: {:.1}%", summary.average_percentage);
        println!("Average pages: {:.1}", summary.average_pages);
        if let Some(top) = &summary.top_student {
            println!("Furthest along: {top} ({:.1}%)", summary.top_percentage);
        }
    }

    Ok(())
}
