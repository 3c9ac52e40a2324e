//! Progress command handler

use super::position_arg;
use hlaqh_progress::core::progress::{assess_progress, next_position, ProgressOutcome};
use hlaqh_progress::{error, info};

/// Run the progress command for one position.
///
/// # Arguments
/// * `surah` - Surah id or name
/// * `ayah` - Last memorized ayah
/// * `json` - Print the report as JSON instead of a summary
/// * `verbose` - Also print the next ayah to memorize
pub fn run(surah: &str, ayah: u32, json: bool, verbose: bool) {
    if let Err(err) = show_progress(surah, ayah, json, verbose) {
        error!("Progress failed for surah '{surah}' ayah {ayah}: {err}");
        eprintln!("{err}");
    }
}

fn show_progress(surah: &str, ayah: u32, json: bool, verbose: bool) -> Result<(), String> {
    let (surah, position) = position_arg(surah, ayah)?;

    let report = match assess_progress(Some(surah.id), Some(ayah)) {
        ProgressOutcome::Recorded(report) => report,
        ProgressOutcome::NotStarted | ProgressOutcome::UnknownReference { .. } => {
            return Err(format!("✗ Could not compute progress for {}", surah.english_name));
        }
    };
    info!("Progress computed for {} ayah {ayah}", surah.english_name);

    if json {
        let output = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("✗ Failed to serialize report: {e}"))?;
        println!("{output}");
        return Ok(());
    }

    println!("\n=== Progress at {position} ===");
    println!(
        "Ayahs: {} / {} ({:.1}%), {} remaining",
        report.memorized_ayahs, report.total_ayahs, report.percentage, report.remaining_ayahs
    );
    println!(
        "Pages: {} / {} ({:.1}%), {} remaining",
        report.memorized_pages, report.total_pages, report.pages_percentage, report.remaining_pages
    );
    println!("Completed surahs: {}", report.completed_surahs);
    println!("Tier: {}", report.tier());

    if verbose {
        if let Some(next) = next_position(position) {
            println!("Next: {next}");
        }
    }

    Ok(())
}
