//! Goal command handler

use super::position_arg;
use hlaqh_progress::core::goal::{goal_progress, goal_progress_bar, goal_span};
use hlaqh_progress::error;

/// Width of the text progress bar, in characters
const BAR_WIDTH: u32 = 40;

/// Run the goal command.
///
/// `surah`/`ayah` are the current position (both `None` when the student
/// has not started); the target is required.
pub fn run(surah: Option<&str>, ayah: Option<u32>, target_surah: &str, target_ayah: u32) {
    if let Err(err) = show_goal(surah, ayah, target_surah, target_ayah) {
        error!("Goal failed for target '{target_surah}' ayah {target_ayah}: {err}");
        eprintln!("{err}");
    }
}

fn show_goal(
    surah: Option<&str>,
    ayah: Option<u32>,
    target_surah: &str,
    target_ayah: u32,
) -> Result<(), String> {
    let memorized = match (surah, ayah) {
        (Some(surah), Some(ayah)) => Some(position_arg(surah, ayah)?.1),
        (None, None) => None,
        _ => return Err("✗ Current position needs both --surah and --ayah".to_string()),
    };
    let (_, target_position) = position_arg(target_surah, target_ayah)?;
    let target = Some(target_position);

    let goal = goal_progress(memorized, target);
    let bar = goal_progress_bar(memorized, target);

    let from = memorized.map_or_else(|| "the beginning".to_string(), |p| p.to_string());
    println!("\n=== Goal: {from} → {target_position} ===");
    println!(
        "Progress: {}% ({} / {} verses)",
        goal.percentage, goal.memorized_verses, goal.total_goal_verses
    );
    println!("[{}]", render_bar(bar.new_progress_percentage));

    match goal_span(memorized, target) {
        Some((start, end)) => println!("Still to memorize: {start} through {end}"),
        None => println!("✓ Goal reached"),
    }

    Ok(())
}

/// Text bar with `percentage` of it filled
fn render_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) * BAR_WIDTH / 100) as usize;
    let empty = BAR_WIDTH as usize - filled;
    format!("{}{}", "#".repeat(filled), "-".repeat(empty))
}
